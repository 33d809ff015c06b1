pub mod benchmarks;
pub mod presets;

pub use benchmarks::*;
pub use presets::*;
