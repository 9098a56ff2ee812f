//! Numeric constants registered by [`Ctxt::init`](crate::ctxt::Ctxt::init).

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

/// Archimedes' constant.
pub const PI: f64 = std::f64::consts::PI;
