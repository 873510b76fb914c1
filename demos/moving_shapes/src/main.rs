//! Arrow keys slide the triangle around, Enter switches to wireframe,
//! Space to points. The rectangle stays centered and 60% opaque, blended
//! over whatever the triangle left behind it.

use std::process;

use easel::{App, Controls, Mesh, SceneConfig, ShapeConfig, Vertex};
use log::error;

const MAROON: [f32; 3] = [0.3, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 0.3, 0.0];

// sits at z = 0.5 so the depth test keeps it behind the rectangle
fn triangle() -> Mesh {
    Mesh::new(vec![
        Vertex::new([0.0, -0.3, 0.5], MAROON),
        Vertex::new([0.6, -0.3, 0.5], MAROON),
        Vertex::new([0.3, 0.3, 0.5], MAROON),
    ])
}

// two triangles forming a quad; no index buffer, corner vertices repeat
fn rectangle() -> Mesh {
    Mesh::new(vec![
        Vertex::new([-0.3, -0.3, 0.0], GREEN),
        Vertex::new([0.3, -0.3, 0.0], GREEN),
        Vertex::new([0.3, 0.3, 0.0], GREEN),
        Vertex::new([-0.3, -0.3, 0.0], GREEN),
        Vertex::new([0.3, 0.3, 0.0], GREEN),
        Vertex::new([-0.3, 0.3, 0.0], GREEN),
    ])
}

fn main() {
    let scene = SceneConfig::new("easel - moving shapes")
        .with_depth_test()
        .with_blending()
        .controls(Controls::ALL)
        .shape(ShapeConfig::new(triangle()).tracks_offset())
        .shape(ShapeConfig::new(rectangle()).alpha(0.6));

    if let Err(err) = App::new(scene).run() {
        error!("{err}");
        process::exit(-1);
    }
}
