//! Main Menu Screen
//!
//! A background and three push buttons, one per demo. Releasing a touch over
//! a button replaces the menu with that demo's screen.
//!
//! # Layout
//!
//! The screen is divided into a 5x3 grid of cells. Each button is one cell in
//! size, vertically centred, at 1.0, 2.5 and 4.0 cells across.

use super::{DemoKind, DemoScreen};
use crate::engine::timing::ElapsedTime;
use crate::game::Game;
use crate::graphics::{Graphics2D, GraphicsError};
use crate::ui::PushButton;
use crate::world::{Entity, GameObject, GameScreen, ScreenBase};

pub const MENU_SCREEN_NAME: &str = "MenuScreen";

const MENU_TARGET_FPS: u32 = 60;
const BACKGROUND_KEY: &str = "Background";
const BACKGROUND_PATH: &str = "img/stage.png";

/// Horizontal button centre, in grid cells
fn button_column(kind: DemoKind) -> f32 {
    match kind {
        DemoKind::Spaceship => 1.0,
        DemoKind::Card => 2.5,
        DemoKind::Platform => 4.0,
    }
}

pub struct MenuScreen {
    base: ScreenBase,
    /// Each demo's button and its index in `base.entities`, in trigger priority order
    buttons: [(DemoKind, usize); 3],
}

impl MenuScreen {
    pub fn new(game: &mut Game) -> Self {
        game.set_target_frames_per_second(MENU_TARGET_FPS);

        let assets = game.asset_manager_mut();
        for kind in DemoKind::ALL {
            assets.load_and_add_bitmap(kind.icon_key(), kind.icon_path());
        }
        assets.load_and_add_bitmap(BACKGROUND_KEY, BACKGROUND_PATH);

        let mut base = ScreenBase::new(MENU_SCREEN_NAME, game);
        let assets = game.asset_manager();

        let spacing_x = (game.screen_width() / 5) as f32;
        let spacing_y = (game.screen_height() / 3) as f32;

        let background = GameObject::new(
            (game.screen_width() / 2) as f32,
            (game.screen_height() / 2) as f32,
            game.screen_width() as f32,
            game.screen_height() as f32,
            assets.get_bitmap(BACKGROUND_KEY).cloned(),
        );
        base.entities.push(Entity::Object(background));

        let buttons = DemoKind::ALL.map(|kind| {
            let button = PushButton::new(
                spacing_x * button_column(kind),
                spacing_y * 1.5,
                spacing_x,
                spacing_y,
                kind.icon_key(),
                assets,
            );
            base.entities.push(Entity::Button(button));
            (kind, base.entities.len() - 1)
        });

        MenuScreen { base, buttons }
    }

    /// The first demo, in priority order, whose button was triggered this frame
    fn triggered_demo(&self) -> Option<DemoKind> {
        self.buttons
            .iter()
            .find(|&&(_, index)| {
                self.base.entities[index]
                    .as_button()
                    .is_some_and(PushButton::is_push_triggered)
            })
            .map(|&(kind, _)| kind)
    }

    /// Remove this screen and make `screen` the active one
    fn change_to_screen(&self, game: &mut Game, screen: Box<dyn GameScreen>) {
        log::info!("Switching from '{}' to '{}'", self.name(), screen.name());
        game.request_remove_screen(self.name());
        game.request_add_screen(screen);
    }
}

impl GameScreen for MenuScreen {
    fn base(&self) -> &ScreenBase {
        &self.base
    }

    fn update(&mut self, game: &mut Game, _elapsed: &ElapsedTime) {
        self.base.tick_frame_counter(game.average_frames_per_second());

        // Only the first touch of the frame gates the buttons, so pressing
        // with several fingers is not handled specially.
        let Some(first) = game.input().touch_events().first() else {
            return;
        };
        log::trace!("Menu sampled {:?} at ({:.0}, {:.0})", first.kind, first.x, first.y);

        for &(_, index) in &self.buttons {
            if let Some(button) = self.base.entities[index].as_button_mut() {
                button.update(game.input());
            }
        }

        if let Some(kind) = self.triggered_demo() {
            let demo = DemoScreen::new(kind, game);
            self.change_to_screen(game, Box::new(demo));
        }
    }

    fn draw(&mut self, elapsed: &ElapsedTime, graphics: &mut dyn Graphics2D) -> Result<(), GraphicsError> {
        self.base.draw_entities(elapsed, graphics)?;
        self.base.draw_frame_counter(graphics)
    }
}
