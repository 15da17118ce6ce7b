//! Celestial body state and pairwise gravitational attraction

use crate::physics::PhysicsError;
use crate::physics::math::{GRAVITATIONAL_CONSTANT, Scalar, Vector};

/// A single celestial body: a point mass, its kinematic state, and the
/// orbit history used to draw its path.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(super) position: Vector,
    pub(super) velocity: Vector,
    mass: Scalar,
    primary: bool,
    pub(super) distance_to_primary: Scalar,
    pub(super) trail: Vec<Vector>,
}

impl Body {
    /// Creates a body from its initial kinematic state.
    ///
    /// Mass must be positive and finite; integration divides by it.
    pub fn new(position: Vector, velocity: Vector, mass: Scalar) -> Result<Self, PhysicsError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(PhysicsError::InvalidMass(mass));
        }

        Ok(Self {
            position,
            velocity,
            mass,
            primary: false,
            distance_to_primary: 0.0,
            trail: Vec::new(),
        })
    }

    /// Marks this body as the system's primary, the star that satellites
    /// track their distance against.
    pub fn as_primary(mut self) -> Self {
        self.primary = true;
        self
    }

    #[inline]
    pub fn position(&self) -> Vector {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Distance to the primary as of the last force computation that
    /// paired this body with it. Stays 0.0 for the primary itself.
    #[inline]
    pub fn distance_to_primary(&self) -> Scalar {
        self.distance_to_primary
    }

    /// Past positions, oldest first.
    #[inline]
    pub fn trail(&self) -> &[Vector] {
        &self.trail
    }

    /// Clears the orbit history. Position and velocity are untouched.
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Gravitational force exerted on `self` by `other`.
    ///
    /// Coincident bodies are a fatal configuration error: the magnitude
    /// divides by the squared distance, and a NaN result must never leak
    /// into the integration state.
    ///
    /// Side effect: when `other` is the primary, the computed distance is
    /// stored in `self.distance_to_primary`.
    pub fn attraction(&mut self, other: &Body) -> Result<Vector, PhysicsError> {
        let offset = other.position - self.position;
        let distance = offset.length();

        if distance == 0.0 {
            return Err(PhysicsError::CoincidentBodies);
        }

        if other.primary {
            self.distance_to_primary = distance;
        }

        let force = GRAVITATIONAL_CONSTANT * self.mass * other.mass / (distance * distance);
        let theta = offset.y.atan2(offset.x);

        Ok(Vector::new(force * theta.cos(), force * theta.sin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: Scalar, y: Scalar, mass: Scalar) -> Body {
        Body::new(Vector::new(x, y), Vector::ZERO, mass).unwrap()
    }

    #[test]
    fn rejects_non_positive_mass() {
        let position = Vector::ZERO;

        assert_eq!(
            Body::new(position, Vector::ZERO, 0.0),
            Err(PhysicsError::InvalidMass(0.0))
        );
        assert_eq!(
            Body::new(position, Vector::ZERO, -5.98e24),
            Err(PhysicsError::InvalidMass(-5.98e24))
        );
        assert!(matches!(
            Body::new(position, Vector::ZERO, Scalar::NAN),
            Err(PhysicsError::InvalidMass(_))
        ));
        assert!(matches!(
            Body::new(position, Vector::ZERO, Scalar::INFINITY),
            Err(PhysicsError::InvalidMass(_))
        ));
    }

    #[test]
    fn attraction_is_equal_and_opposite() {
        let mut a = body_at(0.0, 0.0, 1.98892e30);
        let mut b = body_at(1.496e11, 7.3e10, 5.98e24);

        let on_a = a.attraction(&b).unwrap();
        let on_b = b.attraction(&a).unwrap();

        let residual = (on_a + on_b).length();
        assert!(
            residual <= on_a.length() * 1e-12,
            "forces should cancel, residual {residual}"
        );
    }

    #[test]
    fn attraction_points_toward_the_other_body() {
        let mut a = body_at(0.0, 0.0, 1.0e30);
        let b = body_at(1.0e11, 0.0, 1.0e30);

        let force = a.attraction(&b).unwrap();
        assert!(force.x > 0.0);
        assert!(force.y.abs() < force.x * 1e-12);
    }

    #[test]
    fn attraction_records_distance_to_primary() {
        let mut satellite = body_at(1.496e11, 0.0, 5.98e24);
        let sun = body_at(0.0, 0.0, 1.98892e30).as_primary();

        satellite.attraction(&sun).unwrap();
        assert_eq!(satellite.distance_to_primary(), 1.496e11);
    }

    #[test]
    fn attraction_ignores_distance_for_non_primary() {
        let mut a = body_at(0.0, 0.0, 1.0e24);
        let b = body_at(4.0e10, 0.0, 1.0e24);

        a.attraction(&b).unwrap();
        assert_eq!(a.distance_to_primary(), 0.0);
    }

    #[test]
    fn coincident_bodies_fail_instead_of_dividing_by_zero() {
        let mut a = body_at(1.0e11, -2.0e10, 1.0e24);
        let b = body_at(1.0e11, -2.0e10, 1.0e24);

        assert_eq!(a.attraction(&b), Err(PhysicsError::CoincidentBodies));
    }

    #[test]
    fn clear_trail_keeps_kinematic_state() {
        let mut body = Body::new(Vector::new(1.0, 2.0), Vector::new(3.0, 4.0), 1.0).unwrap();
        body.trail.push(body.position);
        body.clear_trail();

        assert!(body.trail().is_empty());
        assert_eq!(body.position(), Vector::new(1.0, 2.0));
        assert_eq!(body.velocity(), Vector::new(3.0, 4.0));
    }
}
