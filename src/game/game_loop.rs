use super::{Game, ScreenManager};
use crate::engine::input::LifecycleSignal;
use crate::engine::timing::ElapsedTime;
use crate::graphics::{Graphics2D, GraphicsError};
use sdl2::rect::Rect;

/// Drives the active screen once per frame.
///
/// Each frame is strictly sequential:
/// 1. record frame timing
/// 2. `update` on the active screen
/// 3. apply the screen transitions it requested (same frame)
/// 4. `draw` on whichever screen is active now
pub struct GameLoop {
    pub game: Game,
    pub screens: ScreenManager,
}

impl GameLoop {
    pub fn new(game: Game) -> Self {
        GameLoop {
            game,
            screens: ScreenManager::new(),
        }
    }

    pub fn update(&mut self, elapsed: &ElapsedTime) {
        self.game.record_frame(elapsed.step_time);

        if let Some(screen) = self.screens.current_screen_mut() {
            screen.update(&mut self.game, elapsed);
        }

        let requests = self.game.take_screen_requests();
        if !requests.is_empty() {
            self.screens.apply(requests);
        }
    }

    pub fn draw(&mut self, elapsed: &ElapsedTime, graphics: &mut dyn Graphics2D) -> Result<(), GraphicsError> {
        let surface = Rect::new(0, 0, graphics.surface_width(), graphics.surface_height());
        graphics.clip_rect(surface);

        match self.screens.current_screen_mut() {
            Some(screen) => screen.draw(elapsed, graphics),
            None => Ok(()),
        }
    }

    /// Forward a lifecycle change to the screens
    pub fn handle_lifecycle(&mut self, signal: LifecycleSignal) {
        match signal {
            LifecycleSignal::Pause => {
                log::debug!("Pausing active screen");
                self.screens.pause();
            }
            LifecycleSignal::Resume => {
                log::debug!("Resuming active screen");
                self.screens.resume();
            }
            LifecycleSignal::Quit => self.screens.dispose(),
        }
    }
}
