//! Pairwise Newtonian gravity engine
//!
//! Pure, ECS-free simulation core: body state, pairwise force
//! computation, and semi-implicit Euler integration. The Bevy plugins in
//! `crate::plugins` drive it once per fixed tick.

use std::fmt;

pub mod body;
pub mod engine;
pub mod integrator;
pub mod math;

pub use body::Body;
pub use engine::SolarSystem;
pub use integrator::SymplecticEuler;

use math::Scalar;

/// Fatal simulation errors.
///
/// None of these are recoverable mid-run: construction errors are
/// rejected before the first tick, and a failed tick halts the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    /// A body was given a non-positive or non-finite mass
    InvalidMass(Scalar),
    /// Two bodies occupy the exact same position, so the force magnitude
    /// would divide by zero
    CoincidentBodies,
    /// A body was updated against a collection containing no other bodies
    LoneBody,
    /// A system requires exactly one primary body
    PrimaryCount(usize),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass(mass) => {
                write!(f, "body mass must be positive and finite, got {mass}")
            }
            PhysicsError::CoincidentBodies => {
                write!(f, "two bodies occupy the same position")
            }
            PhysicsError::LoneBody => {
                write!(f, "cannot update a body without at least one other body")
            }
            PhysicsError::PrimaryCount(count) => {
                write!(f, "expected exactly one primary body, found {count}")
            }
        }
    }
}

impl std::error::Error for PhysicsError {}
