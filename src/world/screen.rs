//! Game Screens
//!
//! A screen is a self-contained section of the game (a menu, a level, a demo)
//! with its own update/draw cycle. Concrete screens embed a [`ScreenBase`] for
//! the state every screen shares and implement [`GameScreen`] for behaviour.
//!
//! The owning [`Game`] is never stored in a screen. It is handed to `update`
//! each frame, and screens ask it for transitions instead of touching the
//! screen manager directly.

use super::entity::Entity;
use crate::engine::timing::ElapsedTime;
use crate::game::Game;
use crate::graphics::{Graphics2D, GraphicsError, Paint};

/// Ticks between frame-counter refreshes unless configured otherwise
pub const DEFAULT_TICK_REFRESH: i64 = 60;

/// Left edge of the frame-counter text
const FRAME_COUNTER_X: f32 = 10.0;

/// State shared by every screen
pub struct ScreenBase {
    name: String,

    /// Style reused by the frame-counter overlay; mutated in place per draw
    pub paint: Paint,

    /// Owned entities, drawn in insertion order
    pub entities: Vec<Entity>,

    ticks: i64,
    tick_refresh: i64,
    frame_counter: String,
}

impl ScreenBase {
    pub fn new(name: impl Into<String>, game: &Game) -> Self {
        let mut paint = Paint::default();
        paint.set_argb(255, 84, 192, 220);
        paint.set_text_size(game.screen_height() as f32 / 20.0);

        ScreenBase {
            name: name.into(),
            paint,
            entities: Vec::new(),
            ticks: -1,
            tick_refresh: game.tick_refresh().max(1),
            frame_counter: "0".to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of ticks elapsed; -1 before the first update
    #[cfg(test)]
    pub fn ticks(&self) -> i64 {
        self.ticks
    }

    #[cfg(test)]
    pub fn frame_counter(&self) -> &str {
        &self.frame_counter
    }

    /// Advance the tick count, refreshing the frame-counter text every
    /// `tick_refresh` ticks. Returns `true` when the text was refreshed.
    pub fn tick_frame_counter(&mut self, average_fps: f32) -> bool {
        self.ticks += 1;

        if self.ticks % self.tick_refresh == 0 {
            self.frame_counter = format!("{:.0}", average_fps);
            true
        } else {
            false
        }
    }

    /// Draw the frame counter in the top-left corner, sized relative to the
    /// surface height
    pub fn draw_frame_counter(&mut self, graphics: &mut dyn Graphics2D) -> Result<(), GraphicsError> {
        // The canvas logical size is the configured screen size
        let text_size = graphics.surface_height() as f32 / 12.0;
        self.paint.set_text_size(text_size);
        self.paint.set_fake_bold_text(true);

        graphics.draw_text(&self.frame_counter, FRAME_COUNTER_X, text_size, &self.paint)
    }

    /// Draw every entity in insertion order
    pub fn draw_entities(&self, elapsed: &ElapsedTime, graphics: &mut dyn Graphics2D) -> Result<(), GraphicsError> {
        for entity in &self.entities {
            entity.draw(elapsed, graphics)?;
        }
        Ok(())
    }
}

/// Behaviour of a screen. Invoked by the game loop on the active screen only.
pub trait GameScreen {
    fn base(&self) -> &ScreenBase;

    fn name(&self) -> &str {
        self.base().name()
    }

    /// Advance the screen by one frame.
    ///
    /// Must not return until all update work for the frame is complete, even
    /// if an implementation fans work out internally.
    fn update(&mut self, game: &mut Game, elapsed: &ElapsedTime);

    /// Render the screen through the facade
    fn draw(&mut self, elapsed: &ElapsedTime, graphics: &mut dyn Graphics2D) -> Result<(), GraphicsError>;

    /// The application lost focus
    fn pause(&mut self) {}

    /// The application regained focus
    fn resume(&mut self) {}

    /// The screen is being discarded
    fn dispose(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::graphics::recording::{DrawCommand, RecordingGraphics};
    use sdl2::pixels::Color;

    fn base() -> ScreenBase {
        let game = Game::new(&GameConfig::default());
        ScreenBase::new("TestScreen", &game)
    }

    #[test]
    fn test_new_screen_defaults() {
        let base = base();
        assert_eq!(base.name(), "TestScreen");
        assert_eq!(base.ticks(), -1);
        assert_eq!(base.frame_counter(), "0");
        assert!(base.entities.is_empty());
        assert_eq!(base.paint.color, Color::RGBA(84, 192, 220, 255));
        assert_eq!(base.paint.text_size, 360.0 / 20.0);
    }

    #[test]
    fn test_frame_counter_refreshes_only_on_multiples_of_refresh() {
        let mut base = base();

        // First tick moves -1 -> 0, which refreshes
        assert!(base.tick_frame_counter(59.6));
        assert_eq!(base.frame_counter(), "60");

        for tick in 1..60 {
            assert!(!base.tick_frame_counter(30.0), "refreshed on tick {}", tick);
            assert_eq!(base.frame_counter(), "60");
        }

        assert!(base.tick_frame_counter(30.2));
        assert_eq!(base.ticks(), 60);
        assert_eq!(base.frame_counter(), "30");
    }

    #[test]
    fn test_draw_frame_counter_mutates_shared_paint() {
        let mut base = base();
        let mut graphics = RecordingGraphics::new(640, 360);

        base.draw_frame_counter(&mut graphics).unwrap();

        assert_eq!(base.paint.text_size, 30.0);
        assert!(base.paint.fake_bold);
        assert_eq!(
            graphics.commands,
            vec![DrawCommand::Text {
                text: "0".to_string(),
                x: 10.0,
                y: 30.0,
                text_size: 30.0,
                fake_bold: true,
            }]
        );
    }
}
