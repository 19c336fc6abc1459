//! Shared setup helpers for hand interaction benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench interaction
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench interaction -- tick
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench interaction -- overlap

use glam::Vec3;
use hand_interactions::ecs::bridge::{spawn_hand, spawn_interactable, HandEntities};
use hand_interactions::ecs::components::physics::Collider;
use hand_interactions::ecs::components::transform::Transform;
use hand_interactions::{
    InteractableBehavior, InteractableConfig, InteractableId, InteractionWorld, InteractorConfig,
    InteractorId, TrackingPointId,
};

// ---------------------------------------------------------------------------
// Interaction world only
// ---------------------------------------------------------------------------

/// One interactor whose tracking points all overlap `n` grabbable objects.
///
/// The start window is effectively infinite, so every tick re-evaluates all
/// `n` candidates without ever committing.
pub fn setup_candidates(
    n: usize,
    points: usize,
) -> anyhow::Result<(InteractionWorld, InteractorId)> {
    let mut world = InteractionWorld::new();
    let hand = world.spawn_interactor(InteractorConfig {
        tracking_points: points,
        start_confirmation_time: 1.0e9,
        ..Default::default()
    })?;
    let targets: Vec<InteractableId> = (0..n)
        .map(|_| {
            world.spawn_interactable(InteractableConfig {
                behavior: InteractableBehavior::grab(),
                ..Default::default()
            })
        })
        .collect();
    for target in targets {
        for point in 0..points {
            world.overlap_begin(hand, TrackingPointId(point as u32), target)?;
        }
    }
    world.tick(0.0);
    Ok((world, hand))
}

// ---------------------------------------------------------------------------
// ECS scenes
// ---------------------------------------------------------------------------

/// A two-finger hand among `n` small cubes laid out on a grid, roughly one in
/// ten of them within reach of the fingers.
pub fn setup_cube_field(
    n: usize,
) -> anyhow::Result<(hecs::World, InteractionWorld, HandEntities)> {
    let mut world = hecs::World::new();
    let mut interactions = InteractionWorld::new();

    let hand = spawn_hand(
        &mut world,
        &mut interactions,
        InteractorConfig::default(),
        Transform::from_position(Vec3::ZERO),
        &[
            Transform::from_position(Vec3::new(0.01, 0.0, 0.0)),
            Transform::from_position(Vec3::new(-0.01, 0.0, 0.0)),
        ],
    )?;

    let cols = (n as f32).sqrt().ceil() as usize;
    for i in 0..n {
        let x = (i % cols) as f32 * 0.05 - 0.1;
        let z = (i / cols) as f32 * 0.05 - 0.1;
        spawn_interactable(
            &mut world,
            &mut interactions,
            InteractableConfig::default(),
            Collider::cuboid(Vec3::splat(0.03)),
            Transform::from_position(Vec3::new(x, 0.0, z)),
        );
    }
    Ok((world, interactions, hand))
}
