use glow::{HasContext, NativeBuffer, NativeVertexArray};

use crate::scene::{SceneConfig, ShapeConfig};
use crate::state::{FillMode, RenderState};

pub mod mesh;
pub mod shader;

use mesh::Vertex;
use shader::ShaderProgram;

/// Point sprite size while the Point fill mode is active.
const POINT_SIZE: f32 = 10.0;

struct GpuShape {
    vao: NativeVertexArray,
    vbo: NativeBuffer,
    vertex_count: i32,
    config: ShapeConfig,
}

/// Owns every GL object the demos touch and issues the fixed
/// clear -> uniforms -> draw sequence once per frame.
pub struct Renderer {
    gl: glow::Context,
    program: ShaderProgram,
    shapes: Vec<GpuShape>,
    clear_color: [f32; 4],
    clear_mask: u32,
}

impl Renderer {
    /// Compiles the shared shader, applies the scene's GL capabilities and
    /// uploads one VAO/VBO pair per shape.
    pub fn new(gl: glow::Context, scene: &SceneConfig) -> Self {
        let program = ShaderProgram::compile(&gl);

        let mut clear_mask = glow::COLOR_BUFFER_BIT;
        unsafe {
            if scene.depth_test {
                gl.enable(glow::DEPTH_TEST);
                clear_mask |= glow::DEPTH_BUFFER_BIT;
            }
            if scene.blending {
                gl.enable(glow::BLEND);
                gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
            }
        }

        let shapes = scene
            .shapes
            .iter()
            .map(|shape| upload_shape(&gl, shape))
            .collect();

        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
        }

        Self {
            gl,
            program,
            shapes,
            clear_color: scene.clear_color,
            clear_mask,
        }
    }

    /// Renders one frame. Order is fixed: clear, fill mode, program, then
    /// each shape's uniforms immediately before its draw call. The caller
    /// swaps buffers afterwards.
    pub fn draw_frame(&self, state: &RenderState) {
        let gl = &self.gl;
        unsafe {
            let [r, g, b, a] = self.clear_color;
            gl.clear_color(r, g, b, a);
            gl.clear(self.clear_mask);
        }

        self.apply_fill_mode(state.fill_mode);
        self.program.bind(gl);

        for shape in &self.shapes {
            let uniforms = shape.config.uniforms(state);
            self.program.set_offset(gl, uniforms.offset);
            self.program.set_alpha(gl, uniforms.alpha);
            unsafe {
                gl.bind_vertex_array(Some(shape.vao));
                gl.draw_arrays(glow::TRIANGLES, 0, shape.vertex_count);
            }
        }
    }

    fn apply_fill_mode(&self, mode: FillMode) {
        let gl = &self.gl;
        unsafe {
            match mode {
                FillMode::Fill => gl.polygon_mode(glow::FRONT_AND_BACK, glow::FILL),
                FillMode::Line => gl.polygon_mode(glow::FRONT_AND_BACK, glow::LINE),
                FillMode::Point => {
                    gl.point_size(POINT_SIZE);
                    gl.polygon_mode(glow::FRONT_AND_BACK, glow::POINT);
                }
            }
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe { self.gl.viewport(0, 0, width as i32, height as i32) }
    }

    /// Deletes every GL object. Called once when the event loop winds down.
    pub fn destroy(&mut self) {
        let gl = &self.gl;
        unsafe {
            for shape in self.shapes.drain(..) {
                gl.delete_vertex_array(shape.vao);
                gl.delete_buffer(shape.vbo);
            }
        }
        self.program.destroy(gl);
    }
}

fn upload_shape(gl: &glow::Context, shape: &ShapeConfig) -> GpuShape {
    unsafe {
        // bind the VAO first so it records the buffer and attrib state
        let vao = gl.create_vertex_array().expect("failed to create vertex array");
        gl.bind_vertex_array(Some(vao));

        let vbo = gl.create_buffer().expect("failed to create buffer");
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, shape.mesh.as_bytes(), glow::STATIC_DRAW);

        gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, Vertex::STRIDE, 0);
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, Vertex::STRIDE, Vertex::COLOR_OFFSET);
        gl.enable_vertex_attrib_array(1);

        GpuShape {
            vao,
            vbo,
            vertex_count: shape.mesh.vertex_count(),
            config: shape.clone(),
        }
    }
}
