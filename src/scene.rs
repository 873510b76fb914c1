//! Scene description consumed by the renderer. The two demos differ only in
//! the values they put here.

use crate::render::mesh::Mesh;
use crate::state::{Controls, RenderState};

/// One shape slot: an immutable mesh plus the uniform values the frame
/// renderer writes right before this shape's draw call.
#[derive(Clone, Debug)]
pub struct ShapeConfig {
    pub mesh: Mesh,
    pub alpha: f32,
    pub tracks_offset: bool,
}

/// Per-draw uniform values resolved from the frame state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeUniforms {
    pub offset: [f32; 2],
    pub alpha: f32,
}

impl ShapeConfig {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            alpha: 1.0,
            tracks_offset: false,
        }
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Make this shape follow the movement offset. Shapes that don't opt in
    /// are always drawn at offset (0, 0), whatever the frame state says.
    pub fn tracks_offset(mut self) -> Self {
        self.tracks_offset = true;
        self
    }

    pub fn uniforms(&self, state: &RenderState) -> ShapeUniforms {
        ShapeUniforms {
            offset: if self.tracks_offset {
                state.offset
            } else {
                [0.0, 0.0]
            },
            alpha: self.alpha,
        }
    }
}

/// Everything that varies between demos: window title, clear color, GL
/// capabilities, which keys do anything, and the shapes in draw order.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub title: String,
    pub clear_color: [f32; 4],
    pub depth_test: bool,
    pub blending: bool,
    pub controls: Controls,
    pub shapes: Vec<ShapeConfig>,
}

impl SceneConfig {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            // beige, the lecture background
            clear_color: [0.90, 0.85, 0.75, 1.0],
            depth_test: false,
            blending: false,
            controls: Controls::NONE,
            shapes: Vec::new(),
        }
    }

    /// Appends a shape; shapes are drawn in the order they are added.
    pub fn shape(mut self, shape: ShapeConfig) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_depth_test(mut self) -> Self {
        self.depth_test = true;
        self
    }

    pub fn with_blending(mut self) -> Self {
        self.blending = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::mesh::Vertex;

    fn dot() -> Mesh {
        Mesh::new(vec![Vertex::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0])])
    }

    #[test]
    fn static_shape_ignores_frame_offset() {
        // a shape without tracks_offset always resolves to (0, 0)
        let shape = ShapeConfig::new(dot()).alpha(0.6);
        let state = RenderState {
            offset: [0.25, -0.5],
            ..Default::default()
        };

        let uniforms = shape.uniforms(&state);
        assert_eq!(uniforms.offset, [0.0, 0.0]);
        assert_eq!(uniforms.alpha, 0.6);
    }

    #[test]
    fn tracking_shape_follows_frame_offset() {
        let shape = ShapeConfig::new(dot()).tracks_offset();
        let state = RenderState {
            offset: [0.1, 0.2],
            ..Default::default()
        };

        let uniforms = shape.uniforms(&state);
        assert_eq!(uniforms.offset, [0.1, 0.2]);
        assert_eq!(uniforms.alpha, 1.0); // opaque by default
    }

    #[test]
    fn scene_builder_preserves_draw_order() {
        let scene = SceneConfig::new("test")
            .shape(ShapeConfig::new(dot()))
            .shape(ShapeConfig::new(dot()).alpha(0.6));

        assert_eq!(scene.shapes.len(), 2);
        assert_eq!(scene.shapes[0].alpha, 1.0);
        assert_eq!(scene.shapes[1].alpha, 0.6);
        assert!(!scene.depth_test);
        assert!(!scene.blending);
    }
}
