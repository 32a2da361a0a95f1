//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;
pub mod units;

pub use options::CalculatorOptions;
pub use units::Units;
