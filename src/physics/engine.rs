//! Per-tick stepping: force accumulation, integration, trail tracking

use crate::physics::PhysicsError;
use crate::physics::body::Body;
use crate::physics::integrator::SymplecticEuler;
use crate::physics::math::{Scalar, Vector};

/// An ordered collection of bodies advanced along a single time axis.
///
/// Bodies are updated strictly in storage order within a tick, and each
/// body's position is written back before the next body's forces are
/// summed, so later bodies observe the already-advanced positions of
/// earlier ones. Runs are deterministic for a fixed body order.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarSystem {
    bodies: Vec<Body>,
    trail_limit: usize,
}

impl SolarSystem {
    /// Creates a system from an ordered body collection.
    ///
    /// Exactly one body must be marked primary; otherwise the
    /// distance-to-primary tracking is meaningless.
    pub fn new(bodies: Vec<Body>) -> Result<Self, PhysicsError> {
        let primaries = bodies.iter().filter(|body| body.is_primary()).count();
        if primaries != 1 {
            return Err(PhysicsError::PrimaryCount(primaries));
        }

        Ok(Self {
            bodies,
            trail_limit: usize::MAX,
        })
    }

    /// Caps every trail at `limit` points, discarding the oldest point on
    /// overflow. Trails are unbounded by default.
    pub fn with_trail_limit(mut self, limit: usize) -> Self {
        self.trail_limit = limit;
        self
    }

    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Advances every body by one tick of `dt` simulated seconds.
    ///
    /// An error leaves the system partially advanced; callers must treat
    /// it as fatal and stop ticking.
    pub fn step(&mut self, dt: Scalar) -> Result<(), PhysicsError> {
        for index in 0..self.bodies.len() {
            self.update(index, dt)?;
        }

        Ok(())
    }

    /// Clears every body's orbit history.
    pub fn clear_trails(&mut self) {
        for body in &mut self.bodies {
            body.clear_trail();
        }
    }

    /// Sums pairwise forces on `bodies[index]`, integrates its velocity
    /// and position, and records the new position in its trail.
    fn update(&mut self, index: usize, dt: Scalar) -> Result<(), PhysicsError> {
        if self.bodies.len() < 2 {
            return Err(PhysicsError::LoneBody);
        }

        let mut net_force = Vector::ZERO;
        for other_index in 0..self.bodies.len() {
            if other_index == index {
                continue;
            }

            let (body, other) = pair_mut(&mut self.bodies, index, other_index);
            net_force += body.attraction(other)?;
        }

        let body = &mut self.bodies[index];
        let acceleration = net_force / body.mass();
        SymplecticEuler.advance(&mut body.position, &mut body.velocity, acceleration, dt);

        body.trail.push(body.position);
        if body.trail.len() > self.trail_limit {
            body.trail.remove(0);
        }

        Ok(())
    }
}

/// Splits mutable access to `bodies[index]` from shared access to
/// `bodies[other_index]`.
fn pair_mut(bodies: &mut [Body], index: usize, other_index: usize) -> (&mut Body, &Body) {
    debug_assert_ne!(index, other_index);

    if index < other_index {
        let (head, tail) = bodies.split_at_mut(other_index);
        (&mut head[index], &tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(index);
        (&mut tail[0], &head[other_index])
    }
}
