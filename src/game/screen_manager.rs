//! Screen manager
//!
//! Keeps screens in the order they were added. The most recently added (or
//! explicitly selected) screen is the only active one: it alone receives
//! update, draw and lifecycle calls.

use super::ScreenRequest;
use crate::world::GameScreen;

#[derive(Default)]
pub struct ScreenManager {
    screens: Vec<Box<dyn GameScreen>>,
}

impl ScreenManager {
    pub fn new() -> Self {
        ScreenManager { screens: Vec::new() }
    }

    /// Adds a screen and makes it active.
    ///
    /// Returns `false` (and drops the screen) if a screen with the same name
    /// is already managed.
    pub fn add_screen(&mut self, screen: Box<dyn GameScreen>) -> bool {
        if self.get_screen(screen.name()).is_some() {
            log::warn!("Screen '{}' already added, ignoring", screen.name());
            return false;
        }

        log::info!("Screen '{}' is now active", screen.name());
        self.screens.push(screen);
        true
    }

    /// Removes and disposes the named screen. Returns `false` if no such
    /// screen exists.
    pub fn remove_screen(&mut self, name: &str) -> bool {
        let Some(index) = self.screens.iter().position(|s| s.name() == name) else {
            log::warn!("Screen '{}' not found, nothing removed", name);
            return false;
        };

        let mut screen = self.screens.remove(index);
        screen.dispose();
        log::info!("Screen '{}' removed", name);
        true
    }

    /// Makes the named screen active without removing any other
    #[allow(dead_code)] // Reserved for screens that return to a kept-alive screen
    pub fn set_as_current_screen(&mut self, name: &str) -> bool {
        let Some(index) = self.screens.iter().position(|s| s.name() == name) else {
            return false;
        };

        let screen = self.screens.remove(index);
        self.screens.push(screen);
        true
    }

    #[cfg(test)]
    pub fn current_screen(&self) -> Option<&dyn GameScreen> {
        self.screens.last().map(|s| s.as_ref())
    }

    pub fn current_screen_mut(&mut self) -> Option<&mut (dyn GameScreen + 'static)> {
        self.screens.last_mut().map(|s| s.as_mut())
    }

    pub fn get_screen(&self, name: &str) -> Option<&dyn GameScreen> {
        self.screens.iter().find(|s| s.name() == name).map(|s| s.as_ref())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Apply queued transitions in the order they were requested
    pub fn apply(&mut self, requests: Vec<ScreenRequest>) {
        for request in requests {
            match request {
                ScreenRequest::Remove(name) => {
                    self.remove_screen(&name);
                }
                ScreenRequest::Add(screen) => {
                    self.add_screen(screen);
                }
            }
        }
    }

    pub fn pause(&mut self) {
        if let Some(screen) = self.current_screen_mut() {
            screen.pause();
        }
    }

    pub fn resume(&mut self) {
        if let Some(screen) = self.current_screen_mut() {
            screen.resume();
        }
    }

    /// Dispose and drop every screen
    pub fn dispose(&mut self) {
        for mut screen in self.screens.drain(..).rev() {
            screen.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::timing::ElapsedTime;
    use crate::game::Game;
    use crate::graphics::{Graphics2D, GraphicsError};
    use crate::world::ScreenBase;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct ProbeScreen {
        base: ScreenBase,
        log: Log,
    }

    impl ProbeScreen {
        fn boxed(name: &str, log: &Log) -> Box<dyn GameScreen> {
            let game = Game::new(&GameConfig::default());
            Box::new(ProbeScreen {
                base: ScreenBase::new(name, &game),
                log: Rc::clone(log),
            })
        }

        fn record(&self, what: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.base.name(), what));
        }
    }

    impl GameScreen for ProbeScreen {
        fn base(&self) -> &ScreenBase {
            &self.base
        }

        fn update(&mut self, _game: &mut Game, _elapsed: &ElapsedTime) {}

        fn draw(&mut self, _elapsed: &ElapsedTime, _graphics: &mut dyn Graphics2D) -> Result<(), GraphicsError> {
            Ok(())
        }

        fn pause(&mut self) {
            self.record("pause");
        }

        fn resume(&mut self) {
            self.record("resume");
        }

        fn dispose(&mut self) {
            self.record("dispose");
        }
    }

    fn current_name(manager: &ScreenManager) -> Option<String> {
        manager.current_screen().map(|s| s.name().to_string())
    }

    #[test]
    fn test_last_added_is_current() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        assert!(manager.add_screen(ProbeScreen::boxed("A", &log)));
        assert!(manager.add_screen(ProbeScreen::boxed("B", &log)));

        assert_eq!(current_name(&manager), Some("B".to_string()));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        assert!(manager.add_screen(ProbeScreen::boxed("A", &log)));
        assert!(!manager.add_screen(ProbeScreen::boxed("A", &log)));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_remove_disposes() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.add_screen(ProbeScreen::boxed("A", &log));

        assert!(manager.remove_screen("A"));
        assert!(!manager.remove_screen("A"));
        assert!(manager.is_empty());
        assert_eq!(*log.borrow(), vec!["A:dispose".to_string()]);
    }

    #[test]
    fn test_set_as_current_screen() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.add_screen(ProbeScreen::boxed("A", &log));
        manager.add_screen(ProbeScreen::boxed("B", &log));

        assert!(manager.set_as_current_screen("A"));
        assert_eq!(current_name(&manager), Some("A".to_string()));
        assert!(!manager.set_as_current_screen("C"));
    }

    #[test]
    fn test_lifecycle_goes_to_current_only() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.add_screen(ProbeScreen::boxed("A", &log));
        manager.add_screen(ProbeScreen::boxed("B", &log));

        manager.pause();
        manager.resume();
        assert_eq!(*log.borrow(), vec!["B:pause".to_string(), "B:resume".to_string()]);
    }

    #[test]
    fn test_apply_replaces_screen_in_order() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.add_screen(ProbeScreen::boxed("Menu", &log));

        manager.apply(vec![
            ScreenRequest::Remove("Menu".to_string()),
            ScreenRequest::Add(ProbeScreen::boxed("Demo", &log)),
        ]);

        assert_eq!(manager.len(), 1);
        assert_eq!(current_name(&manager), Some("Demo".to_string()));
        assert_eq!(*log.borrow(), vec!["Menu:dispose".to_string()]);
    }

    #[test]
    fn test_dispose_all() {
        let log = Log::default();
        let mut manager = ScreenManager::new();
        manager.add_screen(ProbeScreen::boxed("A", &log));
        manager.add_screen(ProbeScreen::boxed("B", &log));

        manager.dispose();
        assert!(manager.is_empty());
        assert_eq!(*log.borrow(), vec!["B:dispose".to_string(), "A:dispose".to_string()]);
    }
}
