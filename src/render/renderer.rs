//! UI renderer trait
//!
//! This module defines the `UIRenderer` trait for drawing the browser and managing terminal
//! lifecycle hooks such as initialization and cleanup.

use crate::browser::Browser;
use crate::error::Result;
use crate::render::state::ViewState;

/// Core trait for UI rendering
pub trait UIRenderer {
    /// Draw the browser's derived state (filtered rows, projected columns, catalogs, selected
    /// record) through the presentation state in `view_state`.
    fn render(&mut self, browser: &Browser, view_state: &ViewState) -> Result<()>;

    /// Enter raw mode and the alternate screen
    fn initialize(&mut self) -> Result<()>;

    /// Restore terminal state
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::records::{parse_records, sample::SAMPLE_RECORDS_JSON};
    use crate::render::state::Overlay;
    use std::path::Path;

    /// Mock UI renderer for testing
    ///
    /// Records what each render call saw so application tests can assert on it.
    pub struct MockUIRenderer {
        pub render_count: usize,
        pub terminal_size: (u16, u16),
        pub is_initialized: bool,
        pub last_patient_count: Option<usize>,
        pub last_overlay: Option<Overlay>,
    }

    impl Default for MockUIRenderer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUIRenderer {
        pub fn new() -> Self {
            Self {
                render_count: 0,
                terminal_size: (120, 30),
                is_initialized: false,
                last_patient_count: None,
                last_overlay: None,
            }
        }

        /// Set terminal size for testing
        pub fn set_terminal_size(&mut self, width: u16, height: u16) {
            self.terminal_size = (width, height);
        }
    }

    impl UIRenderer for MockUIRenderer {
        fn render(&mut self, browser: &Browser, view_state: &ViewState) -> Result<()> {
            self.render_count += 1;
            self.last_patient_count = Some(browser.patient_count());
            self.last_overlay = Some(view_state.overlay);
            Ok(())
        }

        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            Ok(())
        }

        fn get_terminal_size(&self) -> Result<(u16, u16)> {
            Ok(self.terminal_size)
        }
    }

    #[test]
    fn test_mock_renderer_basic() {
        let browser = Browser::new(parse_records(SAMPLE_RECORDS_JSON, Path::new("sample")).unwrap());
        let mut renderer = MockUIRenderer::new();
        let view_state = ViewState::new("sample data", 120, 30);

        assert!(!renderer.is_initialized);
        renderer.initialize().unwrap();
        assert!(renderer.is_initialized);

        renderer.render(&browser, &view_state).unwrap();
        assert_eq!(renderer.render_count, 1);
        assert_eq!(renderer.last_patient_count, Some(10));
        assert_eq!(renderer.last_overlay, Some(Overlay::None));

        renderer.cleanup().unwrap();
        assert!(!renderer.is_initialized);
    }

    #[test]
    fn test_mock_renderer_resize_handling() {
        let mut renderer = MockUIRenderer::new();
        renderer.set_terminal_size(80, 24);
        assert_eq!(renderer.get_terminal_size().unwrap(), (80, 24));
    }
}
