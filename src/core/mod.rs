//! Fachlicher Kern: Richtungsparser, Polygonzug-Modell und Ausgleichung.

pub mod adjustment;
pub mod bearing;
pub mod error;
pub mod leg;
pub mod traverse;

pub use adjustment::{
    adjust_angles, apply_compass_rule, compute_components, derive_interior_angles,
    evaluate_closure, propagate_azimuths, resolve_leg, solve, AngularAdjustment, ClosureMetrics,
    CompassCorrection, LegResult, LinearClosure, RelativeAccuracy, TraverseSolution,
    CLOSURE_EPSILON,
};
pub use bearing::{format_bearing, parse_bearing, parse_bearing_strict, Quadrant};
pub use error::TraverseError;
pub use leg::{Leg, LegObservation};
pub use traverse::{Traverse, MIN_SIDES};
