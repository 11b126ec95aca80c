mod helpers;
pub use helpers::*;
mod logger;
pub use logger::*;
