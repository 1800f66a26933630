//! Demo scene: a player and a camera looking at it.

use engine_component::{Component, ComponentError, Entity, World};
use engine_math::{Quaternion, Vector3};

/// Hit points of a game object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    /// A health component at full HP.
    #[must_use]
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage, clamping to zero.
    pub fn damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }
}

impl Component for Health {
    fn type_name() -> &'static str {
        "Health"
    }
}

/// Camera lens settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
}

impl Component for Camera {
    fn type_name() -> &'static str {
        "Camera"
    }
}

/// Entities created by [`build`].
#[derive(Debug, Clone, Copy)]
pub struct DemoScene {
    pub player: Entity,
    pub camera: Entity,
}

/// What [`report`] measured about the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneReport {
    /// Distance from the camera to the player.
    pub distance: f32,
    /// Angle in degrees between the camera's forward axis and the player.
    pub view_angle: f32,
    /// Whether the player is inside the camera's field of view.
    pub player_visible: bool,
    /// The player's remaining HP as a fraction of the maximum.
    pub player_health: f32,
}

/// Spawn the player and camera and attach their components.
///
/// # Errors
///
/// Propagates [`ComponentError`] from the world; a fresh world never fails.
pub fn build(world: &mut World) -> Result<DemoScene, ComponentError> {
    let player = world.spawn_named("Player");
    world.transform_mut(player)?.position = Vector3::new(0.0, 0.0, 10.0);
    world
        .add_component(player, Health::full(100.0))?
        .set_tag("Player");

    let camera = world.spawn_named("Main Camera");
    {
        let transform = world.transform_mut(camera)?;
        transform.position = Vector3::new(0.0, 2.0, 0.0);
        transform.rotation = Quaternion::from_euler(5.0, 0.0, 0.0);
    }
    world.add_component(
        camera,
        Camera {
            field_of_view: 60.0,
        },
    )?;

    world.get_component_mut::<Health>(player)?.damage(25.0);

    Ok(DemoScene { player, camera })
}

/// Measure the camera's view of the player.
///
/// # Errors
///
/// Fails if either game object was despawned or lost its component.
pub fn report(world: &World, scene: &DemoScene) -> Result<SceneReport, ComponentError> {
    let camera = world.transform(scene.camera)?;
    let player = world.transform(scene.player)?;
    let lens = world.get_component::<Camera>(scene.camera)?;
    let health = world.get_component::<Health>(scene.player)?;

    let to_player = player.position - camera.position;
    let view_angle = camera.forward().angle(to_player);

    Ok(SceneReport {
        distance: camera.position.distance(player.position),
        view_angle,
        player_visible: view_angle <= lens.field_of_view * 0.5,
        player_health: health.current / health.max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_attaches_components() {
        let mut world = World::new();
        let scene = build(&mut world).unwrap();
        assert_eq!(world.entity_count(), 2);
        assert_eq!(world.find("Player"), Some(scene.player));
        assert_eq!(world.find("Main Camera"), Some(scene.camera));
        assert_eq!(world.entities_with::<Camera>(), vec![scene.camera]);
        assert!(world.handle::<Health>(scene.player).unwrap().compare_tag("Player"));
    }

    #[test]
    fn test_report() {
        let mut world = World::new();
        let scene = build(&mut world).unwrap();
        let report = report(&world, &scene).unwrap();
        assert!((report.distance - 104.0_f32.sqrt()).abs() < 1e-4);
        assert!(report.player_visible);
        assert_eq!(report.player_health, 0.75);
    }

    #[test]
    fn test_report_after_despawn() {
        let mut world = World::new();
        let scene = build(&mut world).unwrap();
        world.despawn(scene.player);
        assert_eq!(
            report(&world, &scene),
            Err(ComponentError::EntityNotFound(scene.player))
        );
    }

    #[test]
    fn test_health_damage_clamps() {
        let mut health = Health::full(10.0);
        health.damage(25.0);
        assert_eq!(health.current, 0.0);
    }
}
