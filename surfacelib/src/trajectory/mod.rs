pub mod objects;
pub use objects::*;

pub mod loader;
pub use loader::*;

pub mod writer;
pub use writer::*;

pub mod errors;
pub use errors::LoadError;
