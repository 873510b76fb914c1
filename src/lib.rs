pub mod app;
pub mod input;
pub mod render;
pub mod scene;
pub mod state;

pub use app::{App, AppError};
pub use input::{Input, KeyCode};
pub use render::mesh::{Mesh, Vertex};
pub use scene::{SceneConfig, ShapeConfig, ShapeUniforms};
pub use state::{Controls, FillMode, Keys, MOVE_SPEED, RenderState, Step};
