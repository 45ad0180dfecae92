//! Fixed parameters and pure maths behind the hero visual. Nothing here
//! touches WebGL; `wasm::render` turns it into draw calls.

pub mod camera;
pub mod geometry;
pub mod motion;

use glam::Vec3;

pub use camera::{normalize_pointer, CameraRig};
pub use geometry::{particle_field, torus, torus_knot, Mesh};
pub use motion::SceneMotion;

/// `0xRRGGBB` to a 0..1 colour.
pub fn rgb(hex: u32) -> Vec3 {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    Vec3::new(channel(16), channel(8), channel(0))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnotStyle {
    pub radius: f32,
    pub tube: f32,
    pub tubular_segments: u32,
    pub radial_segments: u32,
    pub p: u32,
    pub q: u32,
    pub color: u32,
    pub emissive: u32,
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
}

pub const KNOT: KnotStyle = KnotStyle {
    radius: 8.0,
    tube: 2.2,
    tubular_segments: 160,
    radial_segments: 28,
    p: 2,
    q: 3,
    color: 0xffb84d,
    emissive: 0x222200,
    emissive_intensity: 0.06,
    metalness: 0.6,
    roughness: 0.28,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    pub radius: f32,
    pub tube: f32,
    pub radial_segments: u32,
    pub tubular_segments: u32,
    pub color: u32,
    pub opacity: f32,
}

pub const RING: RingStyle = RingStyle {
    radius: 18.0,
    tube: 0.03,
    radial_segments: 16,
    tubular_segments: 120,
    color: 0xffb84d,
    opacity: 0.08,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleStyle {
    pub count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Full elevation spread in degrees, centred on the horizon.
    pub elevation_spread_deg: f32,
    pub vertical_squash: f32,
    pub size: f32,
    pub color: u32,
    pub opacity: f32,
}

pub const PARTICLES: ParticleStyle = ParticleStyle {
    count: 600,
    min_radius: 12.0,
    max_radius: 45.0,
    elevation_spread_deg: 60.0,
    vertical_squash: 0.6,
    size: 0.6,
    color: 0xffe2a0,
    opacity: 0.9,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient_color: u32,
    pub ambient_intensity: f32,
    pub key_color: u32,
    pub key_intensity: f32,
    pub key_position: Vec3,
}

pub const LIGHTING: Lighting = Lighting {
    ambient_color: 0xffffff,
    ambient_intensity: 0.6,
    key_color: 0xffc986,
    key_intensity: 0.8,
    key_position: Vec3::new(10.0, 10.0, 10.0),
};

/// Upper bound on the device pixel ratio used for the drawing buffer.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Drawing-buffer size for a container measured in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub css_width: u32,
    pub css_height: u32,
    pub pixel_ratio: f64,
}

impl SurfaceSize {
    pub fn from_container(client_width: i32, client_height: i32, device_pixel_ratio: f64) -> Self {
        let pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        Self {
            css_width: client_width.max(1) as u32,
            css_height: client_height.max(1) as u32,
            pixel_ratio,
        }
    }

    pub fn buffer_width(&self) -> u32 {
        (f64::from(self.css_width) * self.pixel_ratio).round() as u32
    }

    pub fn buffer_height(&self) -> u32 {
        (f64::from(self.css_height) * self.pixel_ratio).round() as u32
    }

    pub fn aspect(&self) -> f32 {
        self.css_width as f32 / self.css_height as f32
    }
}
