// Engine services shared by every screen
//
// - assets.rs: bitmap registration by name
// - input.rs: SDL2 events folded into a per-frame touch queue
// - timing.rs: elapsed time, frame pacing and average frame rate

pub mod assets;
pub mod input;
pub mod timing;

pub use timing::FrameClock;
