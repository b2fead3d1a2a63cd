pub mod components;
pub mod markup;
pub mod renderer;
pub mod traits;

pub use components::*;
pub use markup::*;
pub use renderer::*;
pub use traits::*;
