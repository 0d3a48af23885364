pub mod ai;
pub mod input;
pub mod movement;
pub mod scoring;
pub mod transform;

pub use ai::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;
pub use transform::*;
