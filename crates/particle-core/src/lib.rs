pub mod color;
pub mod constants;
pub mod gesture;
pub mod motion;
pub mod params;
#[cfg(feature = "gpu")]
pub mod render;
pub mod shapes;
pub mod slot;
pub mod system;
pub mod view;

pub use color::*;
pub use constants::*;
pub use gesture::*;
pub use params::*;
pub use shapes::ShapeKind;
pub use slot::Latest;
pub use system::ParticleSystem;
pub use view::*;

// Shader bundled as a string constant
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
