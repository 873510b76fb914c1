use bytemuck::{Pod, Zeroable};

/// One interleaved attribute tuple, laid out to match the shader's
/// location 0 (position) and location 1 (color) inputs.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    /// Byte distance between consecutive vertices in a buffer.
    pub const STRIDE: i32 = size_of::<Vertex>() as i32;
    /// Byte offset of the color attribute within a vertex.
    pub const COLOR_OFFSET: i32 = size_of::<[f32; 3]>() as i32;

    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// A fixed vertex list, uploaded to the GPU once and never mutated.
#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertices.len() as i32
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_matches_attrib_pointers() {
        // the GL attrib pointer setup assumes a 24-byte stride with color at 12
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 12);
    }

    #[test]
    fn mesh_byte_length() {
        let mesh = Mesh::new(vec![
            Vertex::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            Vertex::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Vertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ]);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.as_bytes().len(), 3 * Vertex::STRIDE as usize);
    }
}
