pub mod animation;
pub mod functions;
pub mod logging;
pub mod surface;
pub mod trajectory;
pub mod util;
