//! Shared math types and physical constants

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for positions, velocities, and forces
pub type Vector = bevy::math::DVec2;

/// Newtonian gravitational constant, m^3 / (kg s^2)
pub const GRAVITATIONAL_CONSTANT: Scalar = 6.67428e-11;

/// One astronomical unit in meters
pub const ASTRONOMICAL_UNIT: Scalar = 149.6e6 * 1000.0;
