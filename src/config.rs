use log::Level;

use crate::state::AccordionMode;

/// Offset past which the navbar switches to its compact, blurred style.
pub const NAV_SCROLL_THRESHOLD: u32 = 20;
/// Offset past which the floating "back to top" button is shown.
pub const SCROLL_TOP_THRESHOLD: u32 = 400;
/// Minimum gap between two scroll notifications reaching the controller.
pub const SCROLL_THROTTLE_MS: u32 = 16;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state transitions while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollThresholds {
    pub nav: u32,
    pub scroll_top: u32,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            nav: NAV_SCROLL_THRESHOLD,
            scroll_top: SCROLL_TOP_THRESHOLD,
        }
    }
}

/// How the FAQ accordion starts and behaves.
///
/// The page has shipped both with the first question pre-opened and fully
/// collapsed, so the initial entry is a setting rather than a constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqConfig {
    pub initial_open: Option<usize>,
    pub mode: AccordionMode,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            initial_open: Some(0),
            mode: AccordionMode::SingleOpen,
        }
    }
}
