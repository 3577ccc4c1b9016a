//! Touch push button
//!
//! A bitmap-backed button that reports two things per frame:
//! - `is_pushed()`: a touch is currently down (or dragged) inside it
//! - `is_push_triggered()`: a touch was released inside it this frame
//!
//! Both flags are recomputed on every `update` from the frame's touch events.

use crate::engine::assets::AssetStore;
use crate::engine::input::{Input, TouchType};
use crate::engine::timing::ElapsedTime;
use crate::graphics::{Graphics2D, GraphicsError, Paint};
use crate::world::GameObject;

/// Bitmap alpha while the button is held down
const PUSHED_ALPHA: u8 = 170;

#[derive(Debug, Clone)]
pub struct PushButton {
    object: GameObject,
    icon: String,
    pushed: bool,
    push_triggered: bool,
}

impl PushButton {
    /// Creates a button centred on `(x, y)` using the bitmap registered as `icon`
    pub fn new(x: f32, y: f32, width: f32, height: f32, icon: &str, assets: &AssetStore) -> Self {
        let bitmap = assets.get_bitmap(icon).cloned();
        if bitmap.is_none() {
            log::warn!("Push button icon '{}' is not registered", icon);
        }

        PushButton {
            object: GameObject::new(x, y, width, height, bitmap),
            icon: icon.to_string(),
            pushed: false,
            push_triggered: false,
        }
    }

    /// Recompute pushed/triggered state from this frame's touch events
    pub fn update(&mut self, input: &Input) {
        self.pushed = false;
        self.push_triggered = false;

        let bound = self.object.bound();
        for event in input.touch_events() {
            if !bound.contains(event.x, event.y) {
                continue;
            }
            match event.kind {
                TouchType::Down | TouchType::Dragged => self.pushed = true,
                TouchType::Up => self.push_triggered = true,
            }
        }

        if self.push_triggered {
            log::debug!("Push button '{}' triggered", self.icon);
        }
    }

    pub fn is_pushed(&self) -> bool {
        self.pushed
    }

    pub fn is_push_triggered(&self) -> bool {
        self.push_triggered
    }

    #[cfg(test)]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[cfg(test)]
    pub fn object(&self) -> &GameObject {
        &self.object
    }

    pub fn draw(&self, _elapsed: &ElapsedTime, graphics: &mut dyn Graphics2D) -> Result<(), GraphicsError> {
        let mut paint = Paint::default();
        if self.is_pushed() {
            paint.set_alpha(PUSHED_ALPHA);
        }
        self.object.draw_with_paint(graphics, &paint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::TouchEvent;
    use crate::graphics::recording::{DrawCommand, RecordingGraphics};

    fn button() -> PushButton {
        let mut assets = AssetStore::new("assets");
        assets.load_and_add_bitmap("CardDemoIcon", "img/CardBackground1.png");
        PushButton::new(100.0, 100.0, 50.0, 50.0, "CardDemoIcon", &assets)
    }

    fn input_with(events: &[TouchEvent]) -> Input {
        let mut input = Input::new(640, 360);
        for event in events {
            input.push_touch_event(*event);
        }
        input
    }

    #[test]
    fn test_release_inside_triggers() {
        let mut button = button();
        button.update(&input_with(&[TouchEvent::new(TouchType::Up, 110.0, 90.0, 0)]));
        assert!(button.is_push_triggered());
        assert!(!button.is_pushed());
    }

    #[test]
    fn test_release_outside_does_not_trigger() {
        let mut button = button();
        button.update(&input_with(&[TouchEvent::new(TouchType::Up, 200.0, 200.0, 0)]));
        assert!(!button.is_push_triggered());
    }

    #[test]
    fn test_press_inside_pushes_without_triggering() {
        let mut button = button();
        button.update(&input_with(&[TouchEvent::new(TouchType::Down, 100.0, 100.0, 0)]));
        assert!(button.is_pushed());
        assert!(!button.is_push_triggered());
    }

    #[test]
    fn test_state_resets_each_update() {
        let mut button = button();
        button.update(&input_with(&[TouchEvent::new(TouchType::Up, 100.0, 100.0, 0)]));
        assert!(button.is_push_triggered());

        button.update(&input_with(&[]));
        assert!(!button.is_push_triggered());
    }

    #[test]
    fn test_pushed_button_draws_dimmed() {
        let mut button = button();
        button.update(&input_with(&[TouchEvent::new(TouchType::Down, 100.0, 100.0, 0)]));

        let mut graphics = RecordingGraphics::new(640, 360);
        button.draw(&ElapsedTime::default(), &mut graphics).unwrap();

        match &graphics.commands[..] {
            [DrawCommand::Bitmap { key, alpha, .. }] => {
                assert_eq!(key, "CardDemoIcon");
                assert_eq!(*alpha, PUSHED_ALPHA);
            }
            other => panic!("unexpected commands: {:?}", other),
        }
    }

    #[test]
    fn test_released_button_draws_opaque() {
        let mut button = button();
        button.update(&input_with(&[TouchEvent::new(TouchType::Down, 300.0, 300.0, 0)]));
        assert!(!button.is_pushed());

        let mut graphics = RecordingGraphics::new(640, 360);
        button.draw(&ElapsedTime::default(), &mut graphics).unwrap();

        match &graphics.commands[..] {
            [DrawCommand::Bitmap { alpha, .. }] => assert_eq!(*alpha, 255),
            other => panic!("unexpected commands: {:?}", other),
        }
    }

    #[test]
    fn test_unregistered_icon_still_builds() {
        let assets = AssetStore::new("assets");
        let button = PushButton::new(0.0, 0.0, 10.0, 10.0, "Missing", &assets);
        assert_eq!(button.icon(), "Missing");
        assert!(button.object().bitmap().is_none());
    }
}
