//! Simulation setup and the per-tick schedule.
//!
//! [`Simulation`] owns the ECS [`World`] and the [`Schedule`] that advances it.
//! A tick runs these systems, in this order:
//!
//! 1. message buffer updates
//! 2. player registry refresh and camera follow
//! 3. badguy update (activation, behavior, own physics)
//! 4. standalone path walkers and other rigid bodies
//! 5. collision detection, then badguy collision dispatch
//! 6. player reactions to what badguys did
//! 7. removal of flagged badguys and dead-script dispatch
//!
//! Level content comes from [`LevelData`]; see [`Simulation::load_level`].

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};

use crate::components::badguy::{BadGuy, BadGuyState};
use crate::components::boxcollider::BoxCollider;
use crate::components::bullet::Bullet;
use crate::components::collision::CollisionGroup;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::solid::Solid;
use crate::error::ConfigError;
use crate::events::collision::CollisionEvent;
use crate::events::player::PlayerMessage;
use crate::resources::camera2d::Camera2D;
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::LevelData;
use crate::resources::pathstore::PathStore;
use crate::resources::players::PlayerRegistry;
use crate::resources::scripts::ScriptQueue;
use crate::resources::solidmap::SolidMap;
use crate::resources::worldtime::WorldTime;
use crate::systems::badguy::{badguy_collision, badguy_removal, badguy_update};
use crate::systems::collision::collision_detector;
use crate::systems::messages::update_messages;
use crate::systems::movement::movement;
use crate::systems::pathwalker::path_walker_system;
use crate::systems::player::{camera_follow_player, player_reaction, refresh_player_registry};
use crate::systems::scripts::dispatch_dead_scripts;
use crate::systems::time::update_world_time;

/// One line of the end-of-run report.
#[derive(Debug, Clone, PartialEq)]
pub struct BadGuySummary {
    pub entity: Entity,
    pub kind: &'static str,
    pub sprite: String,
    pub state: BadGuyState,
    pub position: Vec2,
}

pub struct Simulation {
    world: World,
    schedule: Schedule,
}

impl Simulation {
    pub fn new(config: GameConfig) -> Self {
        let mut world = World::new();

        let camera = Camera2D::new(config.viewport_width as f32, config.viewport_height as f32)
            .with_margin(config.viewport_margin);
        world.insert_resource(WorldTime::default());
        world.insert_resource(camera);
        world.insert_resource(config);
        world.insert_resource(PlayerRegistry::default());
        world.insert_resource(SolidMap::default());
        world.insert_resource(ScriptQueue::default());
        world.insert_resource(PathStore::new());
        world.init_resource::<Messages<CollisionEvent>>();
        world.init_resource::<Messages<PlayerMessage>>();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                update_messages::<CollisionEvent>,
                update_messages::<PlayerMessage>,
                refresh_player_registry,
                camera_follow_player,
                badguy_update,
                path_walker_system,
                movement,
                collision_detector,
                badguy_collision,
                player_reaction,
                badguy_removal,
                dispatch_dead_scripts,
            )
                .chain(),
        );

        Self { world, schedule }
    }

    /// Spawn everything described by `level`.
    ///
    /// Paths and badguys are validated before anything is spawned, so a bad
    /// level leaves the world untouched.
    pub fn load_level(&mut self, level: &LevelData) -> Result<(), ConfigError> {
        let tuning = self.world.resource::<GameConfig>().badguy;
        let paths = level.build_paths()?;
        let badguys = level.build_badguys(&paths, tuning)?;

        for data in &level.players {
            self.world.spawn((
                Player {
                    invincible: data.invincible,
                    stone: data.stone,
                    ..Default::default()
                },
                MapPosition::new(data.x, data.y),
                BoxCollider::new(data.width, data.height),
                RigidBody::new(),
                CollisionGroup::Moving,
            ));
        }

        for data in &level.solids {
            self.world.spawn((
                Solid::with_attributes(data.attributes),
                MapPosition::new(data.x, data.y),
                BoxCollider::new(data.width, data.height),
                CollisionGroup::Static,
            ));
            self.world.resource_mut::<SolidMap>().add(data.rect());
        }

        for badguy in badguys {
            let bbox = badguy.core().bbox();
            debug!(
                "spawning {} badguy '{}' at {:?}",
                badguy.kind(),
                badguy.core().sprite_name,
                bbox.min
            );
            self.world.spawn((
                MapPosition::new(bbox.min.x, bbox.min.y),
                BoxCollider::new(bbox.width(), bbox.height()),
                CollisionGroup::Disabled,
                badguy,
            ));
        }

        for data in &level.bullets {
            let mut body = RigidBody::new();
            body.set_velocity(Vec2::new(data.vx, data.vy));
            self.world.spawn((
                Bullet::new(data.kind),
                MapPosition::new(data.x, data.y),
                BoxCollider::new(8.0, 8.0),
                body,
                CollisionGroup::Moving,
            ));
        }

        info!(
            "Level loaded: {} players, {} solids, {} paths, {} badguys, {} bullets",
            level.players.len(),
            level.solids.len(),
            paths.len(),
            level.badguys.len(),
            level.bullets.len()
        );
        self.world.insert_resource(paths);
        Ok(())
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
    }

    pub fn run(&mut self, ticks: u32, dt: f32) {
        for _ in 0..ticks {
            self.step(dt);
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Every living badguy, in no particular order.
    pub fn badguys(&mut self) -> Vec<BadGuySummary> {
        let mut query = self.world.query::<(Entity, &BadGuy)>();
        query
            .iter(&self.world)
            .map(|(entity, badguy)| BadGuySummary {
                entity,
                kind: badguy.kind(),
                sprite: badguy.core().sprite_name.clone(),
                state: badguy.state(),
                position: badguy.core().position(),
            })
            .collect()
    }
}
