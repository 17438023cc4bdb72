pub mod collision;
pub mod diagnostics;
pub mod gravity;
pub mod integrator;
pub mod spawn;
pub mod vector;
