mod config;
mod engine;
mod game;
mod graphics;
mod screens;
mod ui;
mod world;

use config::GameConfig;
use engine::input::LifecycleSignal;
use engine::FrameClock;
use game::{Game, GameLoop};
use graphics::{SdlGraphics, TextureCache};
use screens::MenuScreen;

/// Pick a window scale that fits the monitor, leaving room for decorations
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, config: &GameConfig) -> u32 {
    if config.window_scale > 0 {
        return config.window_scale;
    }

    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / config.screen_width.max(1) as i32;
            let max_scale_h = usable_h / config.screen_height.max(1) as i32;

            max_scale_w.min(max_scale_h).clamp(1, 6) as u32
        }
        Err(e) => {
            log::warn!("Could not detect monitor size ({}), using 2x scale", e);
            2
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = calculate_window_scale(&video_subsystem, &config);
    let window_width = config.screen_width * window_scale;
    let window_height = config.screen_height * window_scale;
    log::info!(
        "Window {}x{} ({}x scale of {}x{})",
        window_width,
        window_height,
        window_scale,
        config.screen_width,
        config.screen_height
    );

    let window = video_subsystem
        .window(&config.window_title, window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Screens lay out in logical pixels; SDL scales to the window
    canvas
        .set_logical_size(config.screen_width, config.screen_height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut textures = TextureCache::new(&texture_creator);
    let mut event_pump = sdl_context.event_pump()?;

    let mut game_loop = GameLoop::new(Game::new(&config));
    let menu = MenuScreen::new(&mut game_loop.game);
    game_loop.screens.add_screen(Box::new(menu));

    let mut clock = FrameClock::new();

    'running: loop {
        game_loop.game.input_mut().begin_frame();
        for signal in game_loop.game.input_mut().poll_events(&mut event_pump) {
            if signal == LifecycleSignal::Quit {
                break 'running;
            }
            game_loop.handle_lifecycle(signal);
        }

        let elapsed = clock.tick();
        game_loop.update(&elapsed);

        {
            let mut graphics = SdlGraphics::new(&mut canvas, &mut textures);
            game_loop.draw(&elapsed, &mut graphics)?;
        }
        canvas.present();

        if game_loop.screens.is_empty() {
            log::info!("No screens left, exiting");
            break;
        }

        clock.wait_for_next_frame(game_loop.game.target_frames_per_second());
    }

    game_loop.handle_lifecycle(LifecycleSignal::Quit);
    Ok(())
}
