//! Polygonzug-Rechner Library.
//! Kern-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod core;
pub mod project;
pub mod report;
pub mod shared;

pub use core::{
    adjust_angles, apply_compass_rule, compute_components, derive_interior_angles,
    evaluate_closure, format_bearing, parse_bearing, parse_bearing_strict, propagate_azimuths,
    resolve_leg, solve,
};
pub use core::{
    AngularAdjustment, ClosureMetrics, CompassCorrection, Leg, LegObservation, LegResult,
    LinearClosure, Quadrant, RelativeAccuracy, Traverse, TraverseError, TraverseSolution,
};
pub use project::{
    load_project_file, parse_project, save_project_file, write_project, Project, ProjectInfo,
    ProjectSettings, TraverseType,
};
pub use report::render_report;
pub use shared::{CalculatorOptions, Units};
