pub mod detector;
pub mod probe;

pub use detector::*;
pub use probe::*;
