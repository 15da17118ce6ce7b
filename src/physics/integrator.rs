//! Semi-implicit Euler integration method (symplectic Euler)

use crate::physics::math::{Scalar, Vector};

/// First-order symplectic integrator that updates velocity before
/// position, providing better energy conservation than explicit Euler.
/// The velocity-then-position order within a tick must not change.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymplecticEuler;

impl SymplecticEuler {
    /// Advance a single body's state by one time step.
    pub fn advance(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        acceleration: Vector,
        dt: Scalar,
    ) {
        // Update velocity first: v(t+dt) = v(t) + a(t) * dt
        *velocity += acceleration * dt;

        // Then update position using the new velocity: x(t+dt) = x(t) + v(t+dt) * dt
        *position += *velocity * dt;
    }
}
