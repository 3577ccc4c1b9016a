// World module - screens and the entities they own
//
// - game_object.rs: positioned, bitmap-backed objects and their bounds
// - entity.rs: the closed set of things a screen can own
// - screen.rs: ScreenBase state and the GameScreen trait

pub mod entity;
pub mod game_object;
pub mod screen;

pub use entity::Entity;
pub use game_object::GameObject;
pub use screen::{GameScreen, ScreenBase};
