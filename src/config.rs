//! Application-level configuration constants.

use log::LevelFilter;

// Timer behavior
pub const DEFAULT_LIMIT_MINUTES: u32 = 25;
pub const MIN_LIMIT_MINUTES: u32 = 1;
pub const SECONDS_PER_MINUTE: u32 = 60;
pub const TICK_INTERVAL_MS: u32 = 1_000;

// Logging
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

// Icons for the start/pause and reset buttons
pub const PLAY_ICON_URL: &str = "https://assets.ccbp.in/frontend/react-js/play-icon-img.png";
pub const PAUSE_ICON_URL: &str = "https://assets.ccbp.in/frontend/react-js/pause-icon-img.png";
pub const RESET_ICON_URL: &str = "https://assets.ccbp.in/frontend/react-js/reset-icon-img.png";
pub const PLAY_ICON_ALT: &str = "play icon";
pub const PAUSE_ICON_ALT: &str = "pause icon";
pub const RESET_ICON_ALT: &str = "reset";
