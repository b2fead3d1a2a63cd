pub mod builtin;
pub mod decorator;
pub mod registry;

pub use decorator::*;
pub use registry::*;
