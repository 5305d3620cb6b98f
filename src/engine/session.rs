use super::geometry::OrbitGeometryEngine;
use super::publish::{publish, GeometrySink};
use crate::models::{ElementInputs, OrbitGeometry};
use crate::physics::geometry_errors::Result;
use tracing::{debug, warn};

/// Explorer state: the latest inputs that produced a valid orbit, and that orbit.
pub struct OrbitSession {
    engine: OrbitGeometryEngine,
    inputs: Option<ElementInputs>,
    current: Option<OrbitGeometry>,
    rejected_updates: usize,
}

impl OrbitSession {
    pub fn new(engine: OrbitGeometryEngine) -> Self {
        Self {
            engine,
            inputs: None,
            current: None,
            rejected_updates: 0,
        }
    }

    pub fn current(&self) -> Option<&OrbitGeometry> {
        self.current.as_ref()
    }

    pub fn inputs(&self) -> Option<&ElementInputs> {
        self.inputs.as_ref()
    }

    pub fn rejected_updates(&self) -> usize {
        self.rejected_updates
    }

    /// Recomputes for `inputs`. On failure the previous geometry is kept.
    pub fn update(&mut self, inputs: ElementInputs) -> Result<&OrbitGeometry> {
        match self.engine.compute(&inputs.to_elements()) {
            Ok(geometry) => {
                debug!(period_hours = geometry.scalars.period_hours, "orbit updated");
                self.inputs = Some(inputs);
                let geometry: &OrbitGeometry = self.current.insert(geometry);
                Ok(geometry)
            }
            Err(e) => {
                self.rejected_updates += 1;
                warn!("Rejected element update {:?}: {}", inputs, e);
                Err(e)
            }
        }
    }

    /// Like `update`, and on success publishes the new geometry to `sink`.
    /// Nothing reaches the sink when the update is rejected.
    pub fn update_and_publish<S: GeometrySink + ?Sized>(
        &mut self,
        inputs: ElementInputs,
        sink: &mut S,
    ) -> Result<()> {
        let geometry = self.update(inputs)?;
        publish(geometry, sink);
        Ok(())
    }
}
