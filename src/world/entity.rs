use super::game_object::GameObject;
use crate::engine::timing::ElapsedTime;
use crate::graphics::{Graphics2D, GraphicsError};
use crate::ui::PushButton;

/// Anything a screen owns and draws each frame.
///
/// An enum rather than a trait object: screens need to get back at their
/// buttons by index, and the set of entity kinds is closed.
#[derive(Debug, Clone)]
pub enum Entity {
    Object(GameObject),
    Button(PushButton),
}

impl Entity {
    pub fn draw(&self, elapsed: &ElapsedTime, graphics: &mut dyn Graphics2D) -> Result<(), GraphicsError> {
        match self {
            Entity::Object(object) => object.draw(elapsed, graphics),
            Entity::Button(button) => button.draw(elapsed, graphics),
        }
    }

    pub fn as_button(&self) -> Option<&PushButton> {
        match self {
            Entity::Button(button) => Some(button),
            Entity::Object(_) => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut PushButton> {
        match self {
            Entity::Button(button) => Some(button),
            Entity::Object(_) => None,
        }
    }
}
