use crate::physics::math::{ASTRONOMICAL_UNIT, Scalar, Vector};
use crate::physics::{Body, PhysicsError, SolarSystem};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub rendering: RenderingConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            rendering: RenderingConfig::default(),
            bodies: default_bodies(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Simulated seconds advanced per tick
    pub time_step: Scalar,
    /// Wall-clock tick rate of the simulation loop
    pub ticks_per_second: f64,
    /// Oldest orbit points are discarded past this count
    pub max_trail_points: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            time_step: 86_400.0, // one day
            ticks_per_second: 100.0,
            max_trail_points: 20_000,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderingConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Screen-space span of one astronomical unit
    pub pixels_per_au: Scalar,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            window_width: 1500.0,
            window_height: 800.0,
            pixels_per_au: 140.0,
        }
    }
}

/// Initial state for one body of the simulated system
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    /// Starting position in astronomical units
    pub position_au: [Scalar; 2],
    /// Starting velocity in meters per second
    pub velocity: [Scalar; 2],
    /// Mass in kilograms
    pub mass: Scalar,
    #[serde(default)]
    pub primary: bool,
    /// Display radius in pixels
    pub radius_px: f32,
    /// Display color, sRGB
    pub color: [u8; 3],
}

impl BodyConfig {
    pub fn to_body(&self) -> Result<Body, PhysicsError> {
        let position = Vector::from(self.position_au) * ASTRONOMICAL_UNIT;
        let velocity = Vector::from(self.velocity);

        let body = Body::new(position, velocity, self.mass)?;
        Ok(if self.primary { body.as_primary() } else { body })
    }

    pub fn color(&self) -> Color {
        Color::srgb_u8(self.color[0], self.color[1], self.color[2])
    }
}

impl SimulationConfig {
    /// Builds the physics system described by the `bodies` table.
    pub fn build_system(&self) -> Result<SolarSystem, PhysicsError> {
        let bodies = self
            .bodies
            .iter()
            .map(BodyConfig::to_body)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SolarSystem::new(bodies)?.with_trail_limit(self.physics.max_trail_points))
    }

    /// Loads configuration from the per-user config directory, falling
    /// back to defaults when no usable file exists.
    pub fn load_from_user_config() -> Self {
        match Self::user_config_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                warn!("Could not determine a user config directory. Using defaults.");
                Self::default()
            }
        }
    }

    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "orrery")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn default_bodies() -> Vec<BodyConfig> {
    vec![
        BodyConfig {
            name: "Sun".to_string(),
            position_au: [0.0, 0.0],
            velocity: [0.0, 0.0],
            mass: 1.98892e30,
            primary: true,
            radius_px: 30.0,
            color: [255, 255, 0],
        },
        BodyConfig {
            name: "Mercury".to_string(),
            position_au: [0.39, 0.0],
            velocity: [0.0, -47_890.0],
            mass: 3.3011e23,
            primary: false,
            radius_px: 8.0,
            color: [128, 128, 128],
        },
        BodyConfig {
            name: "Venus".to_string(),
            position_au: [0.723, 0.0],
            velocity: [0.0, -35_020.0],
            mass: 4.87e24,
            primary: false,
            radius_px: 14.0,
            color: [255, 165, 0],
        },
        BodyConfig {
            name: "Earth".to_string(),
            position_au: [-1.0, 0.0],
            velocity: [0.0, 29_783.0],
            mass: 5.98e24,
            primary: false,
            radius_px: 16.0,
            color: [100, 149, 237],
        },
        BodyConfig {
            name: "Mars".to_string(),
            position_au: [-1.524, 0.0],
            velocity: [0.0, 24_070.0],
            mass: 6.42e23,
            primary: false,
            radius_px: 12.0,
            color: [188, 39, 50],
        },
        BodyConfig {
            name: "Jupiter".to_string(),
            position_au: [5.203, 0.0],
            velocity: [0.0, -13_070.0],
            mass: 1.9e27,
            primary: false,
            radius_px: 24.0,
            color: [255, 255, 0],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_builds_a_valid_system() {
        let config = SimulationConfig::default();
        let system = config.build_system().unwrap();

        assert_eq!(system.bodies().len(), 6);
        assert_eq!(
            system.bodies().iter().filter(|b| b.is_primary()).count(),
            1
        );

        // Earth starts one astronomical unit out on the negative x axis
        let earth = &system.bodies()[3];
        assert_eq!(earth.position(), Vector::new(-ASTRONOMICAL_UNIT, 0.0));
        assert_eq!(earth.velocity(), Vector::new(0.0, 29_783.0));
    }

    #[test]
    fn toml_round_trip_preserves_the_config() {
        let config = SimulationConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: SimulationConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn primary_flag_defaults_to_false_when_omitted() {
        let body: BodyConfig = toml::from_str(
            r#"
            name = "Ceres"
            position_au = [2.77, 0.0]
            velocity = [0.0, -17900.0]
            mass = 9.38e20
            radius_px = 4.0
            color = [200, 200, 200]
            "#,
        )
        .unwrap();

        assert!(!body.primary);
        assert!(!body.to_body().unwrap().is_primary());
    }

    #[test]
    fn invalid_mass_in_config_is_rejected_before_any_tick() {
        let mut config = SimulationConfig::default();
        config.bodies[2].mass = -4.87e24;

        assert_eq!(
            config.build_system(),
            Err(PhysicsError::InvalidMass(-4.87e24))
        );
    }

    #[test]
    fn save_writes_a_loadable_file() {
        let path = std::env::temp_dir().join(format!(
            "orrery-config-test-{}.toml",
            std::process::id()
        ));

        let config = SimulationConfig::default();
        config.save(&path).unwrap();
        let loaded = SimulationConfig::load_or_default(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(config, loaded);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let loaded = SimulationConfig::load_or_default("/nonexistent/orrery/config.toml");
        assert_eq!(loaded, SimulationConfig::default());
    }
}
