pub mod achievements;
pub mod scheduler;
pub mod timer;
