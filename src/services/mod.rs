pub mod discovery;
pub mod fallback;

pub use discovery::*;
pub use fallback::*;
