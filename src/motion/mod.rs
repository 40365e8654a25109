pub mod navbar;
pub mod preload;
pub mod sequencer;
pub mod trail;
