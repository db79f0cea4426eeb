pub mod difficulty;
pub mod input;
pub mod session;
pub mod state;
