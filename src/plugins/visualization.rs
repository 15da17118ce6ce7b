//! Visualization plugin - Self-contained plugin pattern
//!
//! Spawns one orb entity per body, keeps its transform in sync with the
//! physics position, and draws each orbit trail as a gizmo linestrip.
//! Both systems run every frame, paused or not.

use crate::prelude::*;

pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_projection, spawn_body_orbs).chain());
        app.add_systems(Update, (sync_orb_transforms, draw_trails));
    }
}

/// Projection from physical coordinates (meters) to screen coordinates.
/// The camera sits at the window center, so projecting is a pure scale.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenProjection {
    pixels_per_meter: Scalar,
}

impl ScreenProjection {
    pub fn new(pixels_per_au: Scalar) -> Self {
        Self {
            pixels_per_meter: pixels_per_au / ASTRONOMICAL_UNIT,
        }
    }

    pub fn project(&self, position: Vector) -> Vec2 {
        (position * self.pixels_per_meter).as_vec2()
    }
}

/// Rendered orb, pointing back at its body by index
#[derive(Component, Debug)]
pub struct BodyOrb {
    pub index: usize,
}

fn setup_projection(mut commands: Commands, config: Res<SimulationConfig>) {
    commands.insert_resource(ScreenProjection::new(config.rendering.pixels_per_au));
}

fn spawn_body_orbs(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    system: Res<GravitationalSystem>,
    config: Res<SimulationConfig>,
    projection: Res<ScreenProjection>,
) {
    for (index, (body, settings)) in system.bodies().iter().zip(&config.bodies).enumerate() {
        commands.spawn((
            Name::new(settings.name.clone()),
            BodyOrb { index },
            Mesh2d(meshes.add(Circle::new(settings.radius_px))),
            MeshMaterial2d(materials.add(settings.color())),
            Transform::from_translation(projection.project(body.position()).extend(1.0)),
        ));
    }
}

fn sync_orb_transforms(
    system: Res<GravitationalSystem>,
    projection: Res<ScreenProjection>,
    mut orbs: Query<(&BodyOrb, &mut Transform)>,
) {
    for (orb, mut transform) in orbs.iter_mut() {
        if let Some(body) = system.bodies().get(orb.index) {
            transform.translation = projection.project(body.position()).extend(1.0);
        }
    }
}

fn draw_trails(
    mut gizmos: Gizmos,
    system: Res<GravitationalSystem>,
    config: Res<SimulationConfig>,
    projection: Res<ScreenProjection>,
) {
    for (body, settings) in system.bodies().iter().zip(&config.bodies) {
        if body.trail().len() > 2 {
            gizmos.linestrip_2d(
                body.trail().iter().map(|point| projection.project(*point)),
                settings.color(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn one_astronomical_unit_spans_the_configured_pixels() {
        let projection = ScreenProjection::new(140.0);

        let projected = projection.project(Vector::new(ASTRONOMICAL_UNIT, 0.0));
        assert!((projected.x - 140.0).abs() < 1e-3);
        assert_eq!(projected.y, 0.0);

        let origin = projection.project(Vector::ZERO);
        assert_eq!(origin, Vec2::ZERO);
    }

    #[test]
    fn projection_is_linear_in_both_axes() {
        let projection = ScreenProjection::new(140.0);

        let projected = projection.project(Vector::new(-ASTRONOMICAL_UNIT, 0.5 * ASTRONOMICAL_UNIT));
        assert!((projected.x + 140.0).abs() < 1e-3);
        assert!((projected.y - 70.0).abs() < 1e-3);
    }

    #[test]
    fn spawns_one_orb_per_body() {
        let mut app = create_test_app();
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<ColorMaterial>>();

        let config = SimulationConfig::default();
        let system = config.build_system().unwrap();
        app.insert_resource(ScreenProjection::new(config.rendering.pixels_per_au));
        app.insert_resource(GravitationalSystem(system));
        app.insert_resource(config);

        app.world_mut().run_system_once(spawn_body_orbs).unwrap();

        let mut orbs = app.world_mut().query::<&BodyOrb>();
        assert_eq!(orbs.iter(app.world()).count(), 6);
    }
}
