use crate::physics::SolarSystem;
use crate::physics::math::Scalar;
use bevy::prelude::*;

/// The running physics system
#[derive(Resource, Deref, DerefMut, Clone, Debug)]
pub struct GravitationalSystem(pub SolarSystem);

/// Simulated seconds advanced per tick
#[derive(Resource, Deref, DerefMut, Copy, Clone, PartialEq, Debug)]
pub struct SimulationTimeStep(pub Scalar);

impl Default for SimulationTimeStep {
    fn default() -> Self {
        Self(86_400.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_time_step_is_one_day() {
        assert_eq!(*SimulationTimeStep::default(), 86_400.0);
    }
}
