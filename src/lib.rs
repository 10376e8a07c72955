pub mod icosphere;
pub mod shaders;
pub mod stage;

pub use stage::*;
