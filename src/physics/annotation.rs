use super::frame::OrbitFrame;
use crate::config::AnnotationConfig;
use crate::models::{AnnotationGeometry, Apsides, Nodes, OrbitalElements, Wedge};
use nalgebra as na;

fn polar(radius: f64, angle: f64) -> na::Vector2<f64> {
    let (sin, cos) = angle.sin_cos();
    na::Vector2::new(radius * cos, radius * sin)
}

fn angle_wedge(end_angle: f64, config: &AnnotationConfig) -> Wedge {
    Wedge {
        start_angle: 0.0,
        end_angle,
        inner_radius: config.angle_wedge_inner,
        outer_radius: config.angle_wedge_outer,
    }
}

pub fn annotation_geometry(
    elements: &OrbitalElements,
    frame: &OrbitFrame,
    apsides: &Apsides,
    nodes: &Nodes,
    config: &AnnotationConfig,
) -> AnnotationGeometry {
    let periapsis_dir = na::Vector2::new(frame.cos_omega, frame.sin_omega);
    let centre = -periapsis_dir * (elements.semi_major_axis * elements.eccentricity);
    let a_end = apsides.periapsis.shape;

    let v_start = elements.arg_periapsis;
    let v_end = elements.arg_periapsis + elements.true_anomaly;

    let node_dir = na::Vector2::new(frame.cos_raan, frame.sin_raan);
    let ascending = nodes.ascending.inertial.xy() + node_dir * config.node_label_offset;
    let descending = nodes.descending.inertial.xy() - node_dir * config.node_label_offset;

    AnnotationGeometry {
        a_start: centre,
        a_end,
        a_label: (centre + a_end) / 2.0,
        e: elements.eccentricity,
        e_label: centre / 2.0,
        i: elements.inclination,
        i_wedge: angle_wedge(elements.inclination, config),
        i_label: polar(config.angle_label_radius, elements.inclination / 2.0),
        omega: elements.arg_periapsis,
        omega_wedge: angle_wedge(elements.arg_periapsis, config),
        omega_label: polar(config.angle_label_radius, elements.arg_periapsis / 2.0),
        raan: elements.raan,
        raan_wedge: angle_wedge(elements.raan, config),
        raan_label: polar(config.angle_label_radius, elements.raan / 2.0),
        v_start,
        v_end,
        v_wedge: Wedge {
            start_angle: v_start,
            end_angle: v_end,
            inner_radius: config.anomaly_wedge_inner,
            outer_radius: config.anomaly_wedge_outer,
        },
        v_label: polar(config.anomaly_label_radius, (v_start + v_end) / 2.0),
        node_labels: [ascending, descending],
    }
}
