//! Input subsystem.
//!
//! `raw` polls crossterm and normalizes terminal events; `service` runs the key state machine
//! and yields domain-level `InputAction`s for the application loop.

pub mod raw;
pub mod service;

// Modules outside this crate should prefer importing from `crate::input` rather than reaching
// into submodules.
pub use raw::ScrollDirection;
pub use service::{
    spawn_input_thread, HorizontalDirection, InputAction, InputService, InputState,
    InputStateMachine,
};
