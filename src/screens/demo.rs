//! Demo placeholder screens
//!
//! Stand-ins for the spaceship, card and platform demos. Each shows its menu
//! icon spinning around the screen centre with a title, and goes back to the
//! menu when a touch is released anywhere.

use super::menu::MenuScreen;
use super::DemoKind;
use crate::engine::assets::Bitmap;
use crate::engine::input::TouchType;
use crate::engine::timing::ElapsedTime;
use crate::game::Game;
use crate::graphics::font;
use crate::graphics::{Graphics2D, GraphicsError, Matrix, Paint};
use crate::world::{GameScreen, ScreenBase};
use sdl2::pixels::Color;

const SPIN_DEGREES_PER_SECOND: f32 = 90.0;
const ICON_SCALE: f32 = 0.5;
const HINT_TEXT: &str = "TAP TO RETURN";

pub struct DemoScreen {
    base: ScreenBase,
    kind: DemoKind,
    icon: Option<Bitmap>,
    title_paint: Paint,
    rotation: f32,
    transform: Matrix,
}

impl DemoScreen {
    pub fn new(kind: DemoKind, game: &Game) -> Self {
        let mut title_paint = Paint::with_color(Color::RGB(255, 255, 255));
        title_paint.set_text_size(game.screen_height() as f32 / 12.0);

        DemoScreen {
            base: ScreenBase::new(kind.screen_name(), game),
            kind,
            icon: game.asset_manager().get_bitmap(kind.icon_key()).cloned(),
            title_paint,
            rotation: 0.0,
            transform: Matrix::identity(),
        }
    }

    #[cfg(test)]
    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    fn draw_centred_text(
        &self,
        graphics: &mut dyn Graphics2D,
        text: &str,
        baseline: f32,
        paint: &Paint,
    ) -> Result<(), GraphicsError> {
        let width = font::text_width(text, font::scale_for_text_size(paint.text_size)) as f32;
        let x = (graphics.surface_width() as f32 - width) / 2.0;
        graphics.draw_text(text, x, baseline, paint)
    }
}

impl GameScreen for DemoScreen {
    fn base(&self) -> &ScreenBase {
        &self.base
    }

    fn update(&mut self, game: &mut Game, elapsed: &ElapsedTime) {
        self.base.tick_frame_counter(game.average_frames_per_second());
        self.rotation = (self.rotation + SPIN_DEGREES_PER_SECOND * elapsed.step_time as f32) % 360.0;

        let released = game
            .input()
            .touch_events()
            .iter()
            .any(|event| event.kind == TouchType::Up);

        if released {
            let menu = MenuScreen::new(game);
            log::info!("Leaving '{}' for the menu", self.name());
            game.request_remove_screen(self.name());
            game.request_add_screen(Box::new(menu));
        }
    }

    fn draw(&mut self, _elapsed: &ElapsedTime, graphics: &mut dyn Graphics2D) -> Result<(), GraphicsError> {
        let width = graphics.surface_width() as f32;
        let height = graphics.surface_height() as f32;

        graphics.clear(self.kind.clear_color());

        if let Some(icon) = &self.icon {
            let mut placement = Matrix::identity();
            placement.post_scale(ICON_SCALE, ICON_SCALE);
            placement.post_translate(width / 2.0, height / 2.0);

            // Spin about the centre after placing
            self.transform.reset();
            self.transform.post_rotate_about(self.rotation, width / 2.0, height / 2.0);
            self.transform.pre_concat(&placement);
            graphics.draw_bitmap_transformed(icon, &self.transform, &Paint::default())?;
        }

        self.draw_centred_text(graphics, self.kind.title(), height * 0.25, &self.title_paint)?;

        let mut hint_paint = self.title_paint.clone();
        hint_paint.set_text_size(self.title_paint.text_size / 2.0);
        self.draw_centred_text(graphics, HINT_TEXT, height * 0.9, &hint_paint)?;

        self.base.draw_frame_counter(graphics)
    }
}
