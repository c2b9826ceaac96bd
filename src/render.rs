//! Rendering subsystem.
//!
//! `UIRenderer` is the seam between the application loop and the terminal. `TerminalUI` draws
//! with ratatui; tests substitute `MockUIRenderer`.

pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

pub use renderer::UIRenderer;
pub use state::{MenuEntry, Overlay, StatusLine, ViewState};
pub use terminal::TerminalUI;
pub use theme::ColorTheme;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
