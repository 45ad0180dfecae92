use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlCanvasElement, HtmlElement, MouseEvent, WebGl2RenderingContext as GL, Window,
};

use crate::scene::{
    self, normalize_pointer, particle_field, rgb, torus, torus_knot, CameraRig, SceneMotion,
    SurfaceSize,
};
use super::dom::{listen, report};
use super::frame_loop::FrameLoop;
use super::gl::{GpuMesh, Program};

const MESH_VS: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;
out vec3 v_normal;
out vec3 v_world;
void main() {
    vec4 world = u_model * vec4(a_position, 1.0);
    v_world = world.xyz;
    v_normal = mat3(u_model) * a_normal;
    gl_Position = u_projection * u_view * world;
}
"#;

const MESH_FS: &str = r#"#version 300 es
precision highp float;
in vec3 v_normal;
in vec3 v_world;
uniform vec3 u_color;
uniform vec3 u_emissive;
uniform float u_opacity;
uniform float u_lit;
uniform vec3 u_camera;
uniform vec3 u_ambient;
uniform vec3 u_light_color;
uniform vec3 u_light_dir;
uniform float u_metalness;
uniform float u_roughness;
out vec4 frag;
void main() {
    if (u_lit < 0.5) {
        frag = vec4(u_color, u_opacity);
        return;
    }
    vec3 n = normalize(v_normal);
    vec3 l = normalize(u_light_dir);
    vec3 v = normalize(u_camera - v_world);
    vec3 h = normalize(l + v);
    float diffuse = max(dot(n, l), 0.0);
    float shininess = mix(8.0, 128.0, 1.0 - u_roughness);
    float specular = pow(max(dot(n, h), 0.0), shininess);
    vec3 albedo = u_color * (1.0 - 0.5 * u_metalness);
    vec3 tint = mix(vec3(0.04), u_color, u_metalness);
    vec3 color = albedo * (u_ambient + u_light_color * diffuse)
        + tint * u_light_color * specular
        + u_emissive;
    frag = vec4(color, u_opacity);
}
"#;

const POINTS_VS: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;
uniform float u_size;
uniform float u_scale;
void main() {
    vec4 eye = u_view * u_model * vec4(a_position, 1.0);
    gl_Position = u_projection * eye;
    gl_PointSize = u_size * (u_scale / -eye.z);
}
"#;

const POINTS_FS: &str = r#"#version 300 es
precision highp float;
uniform vec3 u_color;
uniform float u_opacity;
out vec4 frag;
void main() {
    frag = vec4(u_color, u_opacity);
}
"#;

const MESH_UNIFORMS: &[&str] = &[
    "u_model",
    "u_view",
    "u_projection",
    "u_color",
    "u_emissive",
    "u_opacity",
    "u_lit",
    "u_camera",
    "u_ambient",
    "u_light_color",
    "u_light_dir",
    "u_metalness",
    "u_roughness",
];

const POINTS_UNIFORMS: &[&str] = &[
    "u_model",
    "u_view",
    "u_projection",
    "u_size",
    "u_scale",
    "u_color",
    "u_opacity",
];

/// The hero visual: rotating knot, faint ring and particle field.
pub struct HeroScene {
    gl: GL,
    canvas: HtmlCanvasElement,
    container: HtmlElement,
    mesh_program: Program,
    points_program: Program,
    knot: GpuMesh,
    ring: GpuMesh,
    particles: GpuMesh,
    camera: CameraRig,
    motion: SceneMotion,
    surface: SurfaceSize,
}

impl HeroScene {
    /// Creates a canvas inside `container` and uploads the scene geometry.
    pub fn new(
        document: &Document,
        window: &Window,
        container: HtmlElement,
    ) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        container.append_child(&canvas)?;

        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        let mesh_program = Program::new(&gl, MESH_VS, MESH_FS, MESH_UNIFORMS)?;
        let points_program = Program::new(&gl, POINTS_VS, POINTS_FS, POINTS_UNIFORMS)?;

        let k = scene::KNOT;
        let knot = GpuMesh::indexed(
            &gl,
            &torus_knot(
                k.radius,
                k.tube,
                k.tubular_segments,
                k.radial_segments,
                k.p,
                k.q,
            ),
        )?;
        let r = scene::RING;
        let ring = GpuMesh::indexed(
            &gl,
            &torus(r.radius, r.tube, r.radial_segments, r.tubular_segments),
        )?;

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = GpuMesh::points(&gl, &particle_field(&scene::PARTICLES, &mut rng))?;

        let surface = measure(window, &container);
        let hero = Self {
            gl,
            canvas,
            container,
            mesh_program,
            points_program,
            knot,
            ring,
            particles,
            camera: CameraRig::new(surface.aspect()),
            motion: SceneMotion::default(),
            surface,
        };
        hero.apply_surface()?;
        Ok(hero)
    }

    /// Matches the drawing buffer to the container's current size.
    pub fn resize(&mut self, window: &Window) -> Result<(), JsValue> {
        self.surface = measure(window, &self.container);
        self.camera.set_aspect(self.surface.aspect());
        self.apply_surface()
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.camera.set_pointer(pointer);
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    fn apply_surface(&self) -> Result<(), JsValue> {
        let s = self.surface;
        self.canvas.set_width(s.buffer_width());
        self.canvas.set_height(s.buffer_height());
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", s.css_width))?;
        style.set_property("height", &format!("{}px", s.css_height))?;
        Ok(())
    }

    pub fn frame(&mut self) {
        self.motion.advance();
        self.camera.step();
        self.draw();
    }

    fn draw(&self) {
        let gl = &self.gl;
        gl.viewport(
            0,
            0,
            self.surface.buffer_width() as i32,
            self.surface.buffer_height() as i32,
        );
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        let view = self.camera.view();
        let projection = self.camera.projection();
        let light = scene::LIGHTING;
        let knot = scene::KNOT;

        // opaque pass
        gl.enable(GL::DEPTH_TEST);
        gl.depth_mask(true);
        gl.disable(GL::BLEND);

        let p = &self.mesh_program;
        p.bind(gl);
        p.set_mat4(gl, "u_view", &view);
        p.set_mat4(gl, "u_projection", &projection);
        p.set_vec3(gl, "u_camera", self.camera.position());
        let ambient = rgb(light.ambient_color) * light.ambient_intensity;
        let key = rgb(light.key_color) * light.key_intensity;
        p.set_vec3(gl, "u_ambient", ambient);
        p.set_vec3(gl, "u_light_color", key);
        p.set_vec3(gl, "u_light_dir", light.key_position.normalize());

        p.set_mat4(gl, "u_model", &self.motion.knot_model());
        p.set_vec3(gl, "u_color", rgb(knot.color));
        let emissive = rgb(knot.emissive) * knot.emissive_intensity;
        p.set_vec3(gl, "u_emissive", emissive);
        p.set_f32(gl, "u_metalness", knot.metalness);
        p.set_f32(gl, "u_roughness", knot.roughness);
        p.set_f32(gl, "u_opacity", 1.0);
        p.set_f32(gl, "u_lit", 1.0);
        self.knot.draw(gl, GL::TRIANGLES);

        // translucent pass
        gl.enable(GL::BLEND);
        gl.blend_func_separate(
            GL::SRC_ALPHA,
            GL::ONE_MINUS_SRC_ALPHA,
            GL::ONE,
            GL::ONE_MINUS_SRC_ALPHA,
        );
        gl.depth_mask(false);

        let ring = scene::RING;
        p.set_mat4(gl, "u_model", &self.motion.ring_model());
        p.set_vec3(gl, "u_color", rgb(ring.color));
        p.set_vec3(gl, "u_emissive", Vec3::ZERO);
        p.set_f32(gl, "u_opacity", ring.opacity);
        p.set_f32(gl, "u_lit", 0.0);
        self.ring.draw(gl, GL::TRIANGLES);

        let dots = scene::PARTICLES;
        let p = &self.points_program;
        p.bind(gl);
        p.set_mat4(gl, "u_model", &self.motion.particles_model());
        p.set_mat4(gl, "u_view", &view);
        p.set_mat4(gl, "u_projection", &projection);
        p.set_f32(gl, "u_size", dots.size);
        p.set_f32(gl, "u_scale", self.surface.buffer_height() as f32 * 0.5);
        p.set_vec3(gl, "u_color", rgb(dots.color));
        p.set_f32(gl, "u_opacity", dots.opacity);
        self.particles.draw(gl, GL::POINTS);

        gl.depth_mask(true);
    }
}

fn measure(window: &Window, container: &HtmlElement) -> SurfaceSize {
    SurfaceSize::from_container(
        container.client_width(),
        container.client_height(),
        window.device_pixel_ratio(),
    )
}

/// Builds the scene in `container`, hooks resize and pointer tracking, and
/// starts drawing. The returned handle owns the render loop.
pub fn start(
    window: &Window,
    document: &Document,
    container: HtmlElement,
) -> Result<FrameLoop, JsValue> {
    let hero = Rc::new(RefCell::new(HeroScene::new(document, window, container)?));

    // Resize canvas to fit its container
    {
        let hero = hero.clone();
        let win = window.clone();
        listen(window, "resize", move |_| {
            report("scene resize", hero.borrow_mut().resize(&win));
        })?;
    }

    // Camera drift follows the pointer across the whole page.
    {
        let hero = hero.clone();
        let win = window.clone();
        listen(document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let width = win.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
            let height = win.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
            let pointer = normalize_pointer(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                width,
                height,
            );
            hero.borrow_mut().set_pointer(pointer);
        })?;
    }

    log::debug!("hero scene running at {:?}", hero.borrow().surface());
    FrameLoop::start(window.clone(), move |_| hero.borrow_mut().frame())
}
