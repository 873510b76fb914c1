use glow::{HasContext, NativeProgram, NativeShader, NativeUniformLocation};
use log::error;

const VERTEX_SOURCE: &str = include_str!("shape.vert");
const FRAGMENT_SOURCE: &str = include_str!("shape.frag");

/// The compiled passthrough program shared by all demos, with its two
/// uniforms resolved up front.
///
/// Compile and link errors are logged and otherwise ignored: the returned
/// program then renders nothing, but the frame loop keeps running. This
/// mirrors the lecture code's behavior on purpose.
pub struct ShaderProgram {
    program: NativeProgram,
    offset: Option<NativeUniformLocation>,
    alpha: Option<NativeUniformLocation>,
}

impl ShaderProgram {
    pub fn compile(gl: &glow::Context) -> Self {
        unsafe {
            let program = gl.create_program().expect("failed to create program object");

            let vertex = compile_stage(gl, glow::VERTEX_SHADER, VERTEX_SOURCE);
            let fragment = compile_stage(gl, glow::FRAGMENT_SHADER, FRAGMENT_SOURCE);

            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);
            if !gl.get_program_link_status(program) {
                error!(
                    "shader program link failed: {}",
                    gl.get_program_info_log(program)
                );
            }

            // the linked program owns the stages now
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            let offset = gl.get_uniform_location(program, "offset");
            let alpha = gl.get_uniform_location(program, "uAlpha");

            Self {
                program,
                offset,
                alpha,
            }
        }
    }

    pub(crate) fn bind(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.program)) }
    }

    pub(crate) fn set_offset(&self, gl: &glow::Context, offset: [f32; 2]) {
        unsafe { gl.uniform_2_f32(self.offset.as_ref(), offset[0], offset[1]) }
    }

    pub(crate) fn set_alpha(&self, gl: &glow::Context, alpha: f32) {
        unsafe { gl.uniform_1_f32(self.alpha.as_ref(), alpha) }
    }

    pub(crate) fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) }
    }
}

fn compile_stage(gl: &glow::Context, stage: u32, source: &str) -> NativeShader {
    unsafe {
        let shader = gl.create_shader(stage).expect("failed to create shader object");
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let kind = if stage == glow::VERTEX_SHADER {
                "vertex"
            } else {
                "fragment"
            };
            error!(
                "{kind} shader compile failed: {}",
                gl.get_shader_info_log(shader)
            );
        }
        shader
    }
}
