use std::collections::HashMap;

use glam::{Mat4, Vec3};
use web_sys::{
    WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation,
    WebGlVertexArrayObject,
};

use crate::error::SiteError;
use crate::scene::Mesh;

pub const POSITION_LOCATION: u32 = 0;
pub const NORMAL_LOCATION: u32 = 1;

/// A linked program plus the uniform locations it was asked to resolve.
pub struct Program {
    program: WebGlProgram,
    uniforms: HashMap<&'static str, WebGlUniformLocation>,
}

impl Program {
    pub fn new(
        gl: &GL,
        vertex: &str,
        fragment: &str,
        uniforms: &[&'static str],
    ) -> Result<Self, SiteError> {
        let vs = compile_shader(gl, GL::VERTEX_SHADER, vertex)?;
        let fs = compile_shader(gl, GL::FRAGMENT_SHADER, fragment)?;
        let program = gl
            .create_program()
            .ok_or_else(|| SiteError::Graphics("create_program failed".into()))?;
        gl.attach_shader(&program, &vs);
        gl.attach_shader(&program, &fs);
        gl.link_program(&program);
        // Linked programs keep their own copy.
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));

        let linked = gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !linked {
            let log = gl.get_program_info_log(&program).unwrap_or_default();
            gl.delete_program(Some(&program));
            return Err(SiteError::Graphics(format!("link failed: {log}")));
        }

        // Unused uniforms are optimised out and simply never set.
        let uniforms = uniforms
            .iter()
            .filter_map(|name| {
                let location = gl.get_uniform_location(&program, name)?;
                Some((*name, location))
            })
            .collect();
        Ok(Self { program, uniforms })
    }

    pub fn bind(&self, gl: &GL) {
        gl.use_program(Some(&self.program));
    }

    pub fn set_mat4(&self, gl: &GL, name: &str, value: &Mat4) {
        gl.uniform_matrix4fv_with_f32_array(self.uniforms.get(name), false, &value.to_cols_array());
    }

    pub fn set_vec3(&self, gl: &GL, name: &str, value: Vec3) {
        gl.uniform3f(self.uniforms.get(name), value.x, value.y, value.z);
    }

    pub fn set_f32(&self, gl: &GL, name: &str, value: f32) {
        gl.uniform1f(self.uniforms.get(name), value);
    }
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, SiteError> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| SiteError::Graphics("create_shader failed".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(SiteError::Graphics(format!("shader compile failed: {log}")))
    }
}

/// Geometry resident on the GPU behind one vertex array object.
pub struct GpuMesh {
    vao: WebGlVertexArrayObject,
    count: i32,
    indexed: bool,
    _buffers: Vec<WebGlBuffer>,
}

impl GpuMesh {
    pub fn indexed(gl: &GL, mesh: &Mesh) -> Result<Self, SiteError> {
        let vao = create_vao(gl)?;
        let positions = upload_attribute(gl, POSITION_LOCATION, &mesh.positions)?;
        let normals = upload_attribute(gl, NORMAL_LOCATION, &mesh.normals)?;

        let indices = gl
            .create_buffer()
            .ok_or_else(|| SiteError::Graphics("create_buffer failed".into()))?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&indices));
        gl.buffer_data_with_array_buffer_view(
            GL::ELEMENT_ARRAY_BUFFER,
            &js_sys::Uint32Array::from(mesh.indices.as_slice()),
            GL::STATIC_DRAW,
        );
        gl.bind_vertex_array(None);

        Ok(Self {
            vao,
            count: element_count(mesh.indices.len())?,
            indexed: true,
            _buffers: vec![positions, normals, indices],
        })
    }

    /// Unindexed positions, drawn as `GL::POINTS`.
    pub fn points(gl: &GL, positions: &[f32]) -> Result<Self, SiteError> {
        let vao = create_vao(gl)?;
        let buffer = upload_attribute(gl, POSITION_LOCATION, positions)?;
        gl.bind_vertex_array(None);
        Ok(Self {
            vao,
            count: element_count(positions.len() / 3)?,
            indexed: false,
            _buffers: vec![buffer],
        })
    }

    pub fn draw(&self, gl: &GL, mode: u32) {
        gl.bind_vertex_array(Some(&self.vao));
        if self.indexed {
            gl.draw_elements_with_i32(mode, self.count, GL::UNSIGNED_INT, 0);
        } else {
            gl.draw_arrays(mode, 0, self.count);
        }
        gl.bind_vertex_array(None);
    }
}

fn create_vao(gl: &GL) -> Result<WebGlVertexArrayObject, SiteError> {
    let vao = gl
        .create_vertex_array()
        .ok_or_else(|| SiteError::Graphics("create_vertex_array failed".into()))?;
    gl.bind_vertex_array(Some(&vao));
    Ok(vao)
}

fn upload_attribute(gl: &GL, location: u32, data: &[f32]) -> Result<WebGlBuffer, SiteError> {
    let buffer = gl
        .create_buffer()
        .ok_or_else(|| SiteError::Graphics("create_buffer failed".into()))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(
        GL::ARRAY_BUFFER,
        &js_sys::Float32Array::from(data),
        GL::STATIC_DRAW,
    );
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, 3, GL::FLOAT, false, 0, 0);
    Ok(buffer)
}

fn element_count(len: usize) -> Result<i32, SiteError> {
    i32::try_from(len).map_err(|_| {
        SiteError::Graphics(format!("{len} elements is too many to draw"))
    })
}
