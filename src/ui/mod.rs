//! Touch UI Components
//!
//! Widgets screens place into their entity lists. They read touch input from
//! [`crate::engine::input::Input`] during `update` and draw through the render facade.
//!
//! # Available Components
//!
//! - [`PushButton`] - bitmap button triggered by releasing a touch over it

pub mod push_button;

pub use push_button::PushButton;
