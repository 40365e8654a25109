pub mod scheduler;
pub mod scroll;
pub mod stage;
