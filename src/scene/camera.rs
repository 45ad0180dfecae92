use glam::{Mat4, Vec2, Vec3};

pub const FOV_Y_DEG: f32 = 45.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;
pub const START: Vec3 = Vec3::new(0.0, 0.0, 45.0);

/// How far the camera drifts for a pointer at the screen edge.
pub const DRIFT: Vec2 = Vec2::new(8.0, 6.0);
/// Fraction of the remaining distance covered per frame.
pub const EASING: f32 = 0.03;

/// Maps a pointer position to -1..1 around the centre of the viewport.
/// Down on screen is positive y.
pub fn normalize_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Vec2 {
    let axis = |pos: f64, extent: f64| {
        if extent <= 0.0 {
            0.0
        } else {
            ((pos - extent / 2.0) / extent * 2.0) as f32
        }
    };
    Vec2::new(axis(client_x, width), axis(client_y, height))
}

/// Perspective camera that eases toward the pointer and always looks at the
/// origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    position: Vec3,
    pointer: Vec2,
    aspect: f32,
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: START,
            pointer: Vec2::ZERO,
            aspect: sanitize_aspect(aspect),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// One frame of easing.
    pub fn step(&mut self) {
        let target = Vec2::new(self.pointer.x * DRIFT.x, -self.pointer.y * DRIFT.y);
        self.position.x += (target.x - self.position.x) * EASING;
        self.position.y += (target.y - self.position.y) * EASING;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(FOV_Y_DEG.to_radians(), self.aspect, NEAR, FAR)
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
