use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Mat4};

const CLOCK_STEP: f32 = 0.008;
const KNOT_SPIN: f32 = 0.006;
const KNOT_WOBBLE: f32 = 0.0015;
const KNOT_TILT_STEP: f32 = 0.002;
const RING_SPIN: f32 = 0.002;
const PARTICLE_SPIN: f32 = 0.0008;

/// Per-frame rotation of the three scene objects.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMotion {
    pub clock: f32,
    pub knot_x: f32,
    pub knot_y: f32,
    pub ring_z: f32,
    pub particles_y: f32,
}

impl Default for SceneMotion {
    fn default() -> Self {
        Self {
            clock: 0.0,
            knot_x: 0.4,
            knot_y: 0.0,
            ring_z: 0.0,
            particles_y: 0.0,
        }
    }
}

impl SceneMotion {
    pub fn advance(&mut self) {
        self.clock += CLOCK_STEP;
        self.knot_y += KNOT_SPIN + self.clock.sin() * KNOT_WOBBLE;
        self.knot_x += KNOT_TILT_STEP;
        self.ring_z += RING_SPIN;
        self.particles_y += PARTICLE_SPIN;
    }

    pub fn knot_model(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.knot_x, self.knot_y, 0.0)
    }

    /// The ring lies flat, a quarter turn about X, spinning about its own axis.
    pub fn ring_model(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, FRAC_PI_2, 0.0, self.ring_z)
    }

    pub fn particles_model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.particles_y)
    }
}
