use bevy::prelude::*;

/// Gentle wobble tuning: damping (0.85-0.95) sets how long motion lasts
const DAMPING: f32 = 0.88;
const SPRING_STIFFNESS: f32 = 5.0;

/// Physics state for a node; the spring pulls it back to its layout
/// position after a feedback impulse
#[derive(Component, Debug)]
pub struct NodePhysics {
    /// Current position (mirrored into the Transform each step)
    pub position: Vec2,
    /// Current velocity
    pub velocity: Vec2,
    /// Accumulated forces this frame
    pub forces: Vec2,
    /// Mass (affects acceleration)
    pub mass: f32,
    /// Damping factor (0.0 = full damping, 1.0 = no damping)
    pub damping: f32,
    /// Rest position (where the node wants to be)
    pub rest_position: Vec2,
    /// Spring stiffness back to rest position
    pub spring_stiffness: f32,
}

impl Default for NodePhysics {
    fn default() -> Self {
        NodePhysics {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            forces: Vec2::ZERO,
            mass: 1.0,
            damping: DAMPING,
            rest_position: Vec2::ZERO,
            spring_stiffness: SPRING_STIFFNESS,
        }
    }
}

impl NodePhysics {
    /// A node sitting at its layout position
    pub fn at_rest(position: Vec2) -> Self {
        NodePhysics {
            position,
            rest_position: position,
            ..Default::default()
        }
    }

    /// Apply a force to this node
    pub fn apply_force(&mut self, force: Vec2) {
        self.forces += force;
    }

    /// Apply an impulse (instant velocity change)
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse / self.mass;
    }
}

/// Core physics simulation system (integration loop)
pub fn simulate_node_physics(
    time: Res<Time>,
    mut nodes: Query<(&mut NodePhysics, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (mut physics, mut transform) in &mut nodes {
        // Spring force back to rest position (Hooke's law: F = -kx)
        let displacement = physics.position - physics.rest_position;
        let spring_force = -displacement * physics.spring_stiffness;
        physics.apply_force(spring_force);

        // Calculate acceleration: F = ma -> a = F/m
        let acceleration = physics.forces / physics.mass;

        // Update velocity (Euler integration)
        physics.velocity += acceleration * dt;

        // Apply damping (exponential decay)
        let damping = physics.damping;
        physics.velocity *= damping;

        // Update position
        let velocity = physics.velocity;
        physics.position += velocity * dt;

        // Clear forces for next frame
        physics.forces = Vec2::ZERO;

        transform.translation = physics.position.extend(transform.translation.z);
    }
}
