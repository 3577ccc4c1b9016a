// Game module - the context screens run inside
//
// This module contains:
// - mod.rs: Game, the per-run context handed to the active screen
// - screen_manager.rs: ordered screens, the top one is active
// - game_loop.rs: one frame of update -> transitions -> draw

pub mod game_loop;
pub mod screen_manager;

pub use game_loop::GameLoop;
pub use screen_manager::ScreenManager;

use crate::config::GameConfig;
use crate::engine::assets::AssetStore;
use crate::engine::input::Input;
use crate::engine::timing::{FrameRateTracker, FRAME_RATE_WINDOW};
use crate::world::GameScreen;

/// A screen transition requested during `update`
pub enum ScreenRequest {
    Remove(String),
    Add(Box<dyn GameScreen>),
}

/// Services a screen may use while updating.
///
/// Screens receive `&mut Game` in `update` and never hold on to it. Screen
/// changes are queued here and applied by the game loop as soon as the
/// update returns, within the same frame.
pub struct Game {
    screen_width: u32,
    screen_height: u32,
    tick_refresh: i64,
    target_fps: u32,
    assets: AssetStore,
    input: Input,
    frame_rate: FrameRateTracker,
    screen_requests: Vec<ScreenRequest>,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Game {
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            tick_refresh: config.tick_refresh,
            target_fps: config.target_fps,
            assets: AssetStore::new(&config.asset_root),
            input: Input::new(config.screen_width, config.screen_height),
            frame_rate: FrameRateTracker::new(FRAME_RATE_WINDOW),
            screen_requests: Vec::new(),
        }
    }

    pub fn screen_width(&self) -> u32 {
        self.screen_width
    }

    pub fn screen_height(&self) -> u32 {
        self.screen_height
    }

    pub fn tick_refresh(&self) -> i64 {
        self.tick_refresh
    }

    pub fn asset_manager(&self) -> &AssetStore {
        &self.assets
    }

    pub fn asset_manager_mut(&mut self) -> &mut AssetStore {
        &mut self.assets
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    pub fn target_frames_per_second(&self) -> u32 {
        self.target_fps
    }

    pub fn set_target_frames_per_second(&mut self, fps: u32) {
        self.target_fps = fps;
    }

    pub fn average_frames_per_second(&self) -> f32 {
        self.frame_rate.average_frames_per_second()
    }

    pub(crate) fn record_frame(&mut self, step_seconds: f64) {
        self.frame_rate.record(step_seconds);
    }

    /// Ask for the named screen to be removed once the current update returns
    pub fn request_remove_screen(&mut self, name: &str) {
        self.screen_requests.push(ScreenRequest::Remove(name.to_string()));
    }

    /// Ask for a screen to be added (and become active) once the current
    /// update returns
    pub fn request_add_screen(&mut self, screen: Box<dyn GameScreen>) {
        self.screen_requests.push(ScreenRequest::Add(screen));
    }

    pub(crate) fn take_screen_requests(&mut self) -> Vec<ScreenRequest> {
        std::mem::take(&mut self.screen_requests)
    }
}
