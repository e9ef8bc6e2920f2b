pub mod color;
pub mod constants;
pub mod content;
pub mod controls;
pub mod elements;
pub mod mesh;
pub mod scene;
pub mod state;

pub use color::*;
pub use content::*;
pub use controls::*;
pub use elements::*;
pub use mesh::*;
pub use scene::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static LABEL_WGSL: &str = include_str!("../shaders/label.wgsl");
