// Domain models

pub mod check_in;
pub mod coordinate;
pub mod gym;

pub use check_in::*;
pub use coordinate::*;
pub use gym::*;
