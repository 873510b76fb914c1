//! Static triangle and rectangle on a beige background. No movement, no
//! fill-mode toggles; Escape (or closing the window) quits.

use std::process;

use easel::{App, Mesh, SceneConfig, ShapeConfig, Vertex};
use log::error;

const MAROON: [f32; 3] = [0.3, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 0.3, 0.0];

fn triangle() -> Mesh {
    Mesh::new(vec![
        Vertex::new([0.2, -0.3, 0.0], MAROON),
        Vertex::new([0.6, -0.3, 0.0], MAROON),
        Vertex::new([0.4, 0.3, 0.0], MAROON),
    ])
}

// two triangles forming a quad; no index buffer, corner vertices repeat
fn rectangle() -> Mesh {
    Mesh::new(vec![
        Vertex::new([-0.6, -0.3, 0.0], GREEN),
        Vertex::new([-0.2, -0.3, 0.0], GREEN),
        Vertex::new([-0.2, 0.3, 0.0], GREEN),
        Vertex::new([-0.6, -0.3, 0.0], GREEN),
        Vertex::new([-0.2, 0.3, 0.0], GREEN),
        Vertex::new([-0.6, 0.3, 0.0], GREEN),
    ])
}

fn main() {
    let scene = SceneConfig::new("easel - flat shapes")
        .shape(ShapeConfig::new(triangle()))
        .shape(ShapeConfig::new(rectangle()));

    if let Err(err) = App::new(scene).run() {
        error!("{err}");
        process::exit(-1);
    }
}
