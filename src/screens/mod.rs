// Screens - the concrete screens the game ships with
//
// - menu.rs: MenuScreen, three buttons leading to the demos
// - demo.rs: DemoScreen, one placeholder per demo kind

pub mod demo;
pub mod menu;

pub use demo::DemoScreen;
pub use menu::MenuScreen;

use sdl2::pixels::Color;

/// The demos reachable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    Spaceship,
    Card,
    Platform,
}

impl DemoKind {
    /// Every demo, in the order menu buttons are checked for a trigger
    pub const ALL: [DemoKind; 3] = [DemoKind::Spaceship, DemoKind::Card, DemoKind::Platform];

    pub fn screen_name(&self) -> &'static str {
        match self {
            DemoKind::Spaceship => "SpaceshipDemoScreen",
            DemoKind::Card => "CardDemoScreen",
            DemoKind::Platform => "PlatformDemoScreen",
        }
    }

    /// Asset store key of the menu icon
    pub fn icon_key(&self) -> &'static str {
        match self {
            DemoKind::Spaceship => "SpaceshipDemoIcon",
            DemoKind::Card => "CardDemoIcon",
            DemoKind::Platform => "PlatformDemoIcon",
        }
    }

    /// Icon path relative to the asset root
    pub fn icon_path(&self) -> &'static str {
        match self {
            DemoKind::Spaceship => "img/Spaceship1.png",
            DemoKind::Card => "img/CardBackground1.png",
            DemoKind::Platform => "img/Platform1.png",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DemoKind::Spaceship => "SPACESHIP DEMO",
            DemoKind::Card => "CARD DEMO",
            DemoKind::Platform => "PLATFORM DEMO",
        }
    }

    pub fn clear_color(&self) -> Color {
        match self {
            DemoKind::Spaceship => Color::RGB(10, 10, 30),
            DemoKind::Card => Color::RGB(20, 60, 30),
            DemoKind::Platform => Color::RGB(40, 30, 60),
        }
    }
}
