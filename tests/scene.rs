#![cfg(not(target_arch = "wasm32"))]

use rand::rngs::SmallRng;
use rand::SeedableRng;

use glam::Vec2;
use studio_site_wasm::scene::{
    self, normalize_pointer, particle_field, rgb, torus, torus_knot, CameraRig, SceneMotion,
    SurfaceSize,
};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

fn vertices(flat: &[f32]) -> impl Iterator<Item = [f32; 3]> + '_ {
    flat.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
}

#[test]
fn knot_mesh_has_expected_topology() {
    let k = scene::KNOT;
    let mesh = torus_knot(
        k.radius,
        k.tube,
        k.tubular_segments,
        k.radial_segments,
        k.p,
        k.q,
    );

    let expected_vertices = ((k.tubular_segments + 1) * (k.radial_segments + 1)) as usize;
    assert_eq!(mesh.vertex_count(), expected_vertices);
    assert_eq!(mesh.normals.len(), mesh.positions.len());
    assert_eq!(
        mesh.indices.len(),
        (6 * k.tubular_segments * k.radial_segments) as usize
    );
    let max_index = mesh.indices.iter().copied().max().unwrap_or(0) as usize;
    assert!(max_index < expected_vertices);

    for [x, y, z] in vertices(&mesh.normals) {
        let len = (x * x + y * y + z * z).sqrt();
        assert!(approx(len, 1.0, 1e-3), "normal length {len}");
    }
}

#[test]
fn ring_vertices_sit_on_the_tube_surface() {
    let r = scene::RING;
    let mesh = torus(r.radius, r.tube, r.radial_segments, r.tubular_segments);

    assert_eq!(
        mesh.vertex_count(),
        ((r.radial_segments + 1) * (r.tubular_segments + 1)) as usize
    );
    assert_eq!(
        mesh.indices.len(),
        (6 * r.radial_segments * r.tubular_segments) as usize
    );

    for [x, y, z] in vertices(&mesh.positions) {
        let from_axis = (x * x + y * y).sqrt() - r.radius;
        let to_core = (from_axis * from_axis + z * z).sqrt();
        assert!(approx(to_core, r.tube, 1e-4), "distance {to_core}");
    }
}

#[test]
fn particles_stay_inside_the_shell() {
    let style = scene::PARTICLES;
    let mut rng = SmallRng::seed_from_u64(7);
    let positions = particle_field(&style, &mut rng);
    assert_eq!(positions.len(), style.count * 3);

    let max_elevation = (style.elevation_spread_deg / 2.0).to_radians();
    let min_horizontal = style.min_radius * max_elevation.cos();
    let max_height = style.max_radius * max_elevation.sin() * style.vertical_squash;
    for [x, y, z] in vertices(&positions) {
        let horizontal = (x * x + z * z).sqrt();
        assert!(
            horizontal >= min_horizontal - 1e-3 && horizontal <= style.max_radius + 1e-3
        );
        assert!(y.abs() <= max_height + 1e-3);
    }
}

#[test]
fn same_seed_same_field() {
    let style = scene::PARTICLES;
    let a = particle_field(&style, &mut SmallRng::seed_from_u64(42));
    let b = particle_field(&style, &mut SmallRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn pointer_is_normalized_around_the_centre() {
    assert_eq!(normalize_pointer(500.0, 300.0, 1000.0, 600.0), Vec2::ZERO);
    assert_eq!(
        normalize_pointer(1000.0, 0.0, 1000.0, 600.0),
        Vec2::new(1.0, -1.0)
    );
    assert_eq!(
        normalize_pointer(0.0, 600.0, 1000.0, 600.0),
        Vec2::new(-1.0, 1.0)
    );
    assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 0.0), Vec2::ZERO);
}

#[test]
fn camera_eases_toward_pointer_target() {
    let mut rig = CameraRig::new(16.0 / 9.0);
    assert_eq!(rig.position(), scene::camera::START);

    rig.set_pointer(Vec2::new(1.0, -1.0));
    rig.step();
    let first = rig.position();
    assert!(approx(first.x, 8.0 * 0.03, 1e-6));
    assert!(approx(first.y, 6.0 * 0.03, 1e-6));
    assert_eq!(first.z, 45.0);

    for _ in 0..1000 {
        rig.step();
    }
    let settled = rig.position();
    assert!(approx(settled.x, 8.0, 1e-3));
    assert!(approx(settled.y, 6.0, 1e-3));
}

#[test]
fn camera_rejects_degenerate_aspect() {
    let mut rig = CameraRig::new(f32::NAN);
    assert_eq!(rig.aspect(), 1.0);
    rig.set_aspect(0.0);
    assert_eq!(rig.aspect(), 1.0);
    rig.set_aspect(2.0);
    assert_eq!(rig.aspect(), 2.0);
    assert!(rig.projection().is_finite());
}

#[test]
fn surface_caps_pixel_ratio() {
    let s = SurfaceSize::from_container(400, 300, 3.0);
    assert_eq!(s.pixel_ratio, 2.0);
    assert_eq!((s.buffer_width(), s.buffer_height()), (800, 600));

    let s = SurfaceSize::from_container(400, 300, 1.5);
    assert_eq!((s.buffer_width(), s.buffer_height()), (600, 450));

    let collapsed = SurfaceSize::from_container(0, 0, f64::NAN);
    assert_eq!(collapsed.pixel_ratio, 1.0);
    assert_eq!((collapsed.css_width, collapsed.css_height), (1, 1));
    assert_eq!(collapsed.aspect(), 1.0);
}

#[test]
fn motion_advances_every_object() {
    let mut motion = SceneMotion::default();
    motion.advance();
    assert!(approx(motion.clock, 0.008, 1e-7));
    assert!(approx(motion.knot_x, 0.402, 1e-6));
    assert!(approx(motion.knot_y, 0.006 + 0.008f32.sin() * 0.0015, 1e-7));
    assert!(approx(motion.ring_z, 0.002, 1e-7));
    assert!(approx(motion.particles_y, 0.0008, 1e-7));
}

#[test]
fn ring_model_lies_flat() {
    let ring = SceneMotion::default().ring_model();
    // The ring's own Z axis (its spin axis) ends up pointing along world -Y or +Y.
    let axis = ring.transform_vector3(glam::Vec3::Z);
    assert!(approx(axis.y.abs(), 1.0, 1e-6));
}

#[test]
fn hex_colours_convert() {
    let c = rgb(0xffb84d);
    assert!(approx(c.x, 1.0, 1e-6));
    assert!(approx(c.y, 184.0 / 255.0, 1e-6));
    assert!(approx(c.z, 77.0 / 255.0, 1e-6));
}
