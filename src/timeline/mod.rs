pub mod player;
pub mod position;
#[allow(clippy::module_inception)]
pub mod timeline;
pub mod tween;
