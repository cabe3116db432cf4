pub mod scenario;
pub mod simulation;

pub use scenario::*;
pub use simulation::*;
