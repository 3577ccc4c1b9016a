use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;
use std::collections::HashMap;

/// SDL reports touches a second time as mouse events from this device id
const TOUCH_MOUSE_ID: u32 = u32::MAX;

/// Pointer id used for the left mouse button
pub const MOUSE_POINTER: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchType {
    Down,
    Up,
    Dragged,
}

/// A single touch (or left-mouse) event in logical screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub kind: TouchType,
    pub x: f32,
    pub y: f32,
    pub pointer: i64,
}

impl TouchEvent {
    pub fn new(kind: TouchType, x: f32, y: f32, pointer: i64) -> Self {
        TouchEvent { kind, x, y, pointer }
    }
}

/// Application lifecycle changes the game loop forwards to the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    Pause,
    Resume,
    Quit,
}

/// Result of translating one SDL2 event
#[derive(Debug, Clone, Copy, PartialEq)]
enum Translated {
    Touch(TouchEvent),
    Lifecycle(LifecycleSignal),
}

/// Per-frame touch input.
///
/// SDL2 mouse and finger events are folded into a single touch event queue
/// that screens read during `update`. The queue is cleared at the start of
/// every frame; held pointers persist across frames.
pub struct Input {
    surface_width: u32,
    surface_height: u32,
    touch_events: Vec<TouchEvent>,
    held_pointers: HashMap<i64, (f32, f32)>,
}

impl Input {
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Input {
            surface_width,
            surface_height,
            touch_events: Vec::new(),
            held_pointers: HashMap::new(),
        }
    }

    /// Drop the previous frame's touch events
    pub fn begin_frame(&mut self) {
        self.touch_events.clear();
    }

    /// Touch events received since the start of this frame, oldest first
    pub fn touch_events(&self) -> &[TouchEvent] {
        &self.touch_events
    }

    pub fn is_touch_down(&self, pointer: i64) -> bool {
        self.held_pointers.contains_key(&pointer)
    }

    /// Last known position of a held pointer
    #[cfg(test)]
    pub fn touch_position(&self, pointer: i64) -> Option<(f32, f32)> {
        self.held_pointers.get(&pointer).copied()
    }

    pub fn push_touch_event(&mut self, event: TouchEvent) {
        match event.kind {
            TouchType::Down | TouchType::Dragged => {
                self.held_pointers.insert(event.pointer, (event.x, event.y));
            }
            TouchType::Up => {
                self.held_pointers.remove(&event.pointer);
            }
        }
        log::trace!("Touch {:?} at ({:.0}, {:.0}) pointer {}", event.kind, event.x, event.y, event.pointer);
        self.touch_events.push(event);
    }

    /// Drain pending SDL2 events into the touch queue.
    ///
    /// Returns the lifecycle signals seen this frame, in arrival order.
    pub fn poll_events(&mut self, event_pump: &mut EventPump) -> Vec<LifecycleSignal> {
        let mut signals = Vec::new();

        for event in event_pump.poll_iter() {
            match self.translate(&event) {
                Some(Translated::Touch(touch)) => self.push_touch_event(touch),
                Some(Translated::Lifecycle(signal)) => signals.push(signal),
                None => {}
            }
        }

        signals
    }

    fn translate(&self, event: &Event) -> Option<Translated> {
        match *event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => Some(Translated::Lifecycle(LifecycleSignal::Quit)),
            Event::Window { ref win_event, .. } => match win_event {
                WindowEvent::FocusLost | WindowEvent::Minimized => {
                    Some(Translated::Lifecycle(LifecycleSignal::Pause))
                }
                WindowEvent::FocusGained | WindowEvent::Restored => {
                    Some(Translated::Lifecycle(LifecycleSignal::Resume))
                }
                _ => None,
            },
            Event::MouseButtonDown {
                which,
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } if which != TOUCH_MOUSE_ID => Some(Self::mouse_touch(TouchType::Down, x, y)),
            Event::MouseButtonUp {
                which,
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } if which != TOUCH_MOUSE_ID => Some(Self::mouse_touch(TouchType::Up, x, y)),
            Event::MouseMotion { which, x, y, .. }
                if which != TOUCH_MOUSE_ID && self.is_touch_down(MOUSE_POINTER) =>
            {
                Some(Self::mouse_touch(TouchType::Dragged, x, y))
            }
            Event::FingerDown { finger_id, x, y, .. } => Some(self.finger_touch(TouchType::Down, finger_id, x, y)),
            Event::FingerUp { finger_id, x, y, .. } => Some(self.finger_touch(TouchType::Up, finger_id, x, y)),
            Event::FingerMotion { finger_id, x, y, .. } => {
                Some(self.finger_touch(TouchType::Dragged, finger_id, x, y))
            }
            _ => None,
        }
    }

    fn mouse_touch(kind: TouchType, x: i32, y: i32) -> Translated {
        Translated::Touch(TouchEvent::new(kind, x as f32, y as f32, MOUSE_POINTER))
    }

    /// Finger coordinates arrive normalised to 0..1
    fn finger_touch(&self, kind: TouchType, finger_id: i64, x: f32, y: f32) -> Translated {
        Translated::Touch(TouchEvent::new(
            kind,
            x * self.surface_width as f32,
            y * self.surface_height as f32,
            finger_id.wrapping_add(1),
        ))
    }
}
