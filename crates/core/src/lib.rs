//! Booo! GAMES Core Library
//!
//! Shared pieces for the site server:
//! - Configuration loading (XDG-compliant)
//! - Defaults shared between the server and its tests

mod config;

pub use config::{find_config_file, load_config, ConfigSource};

/// Application name used for XDG paths
pub const APP_NAME: &str = "booo-games";

/// Default site port
pub const DEFAULT_SITE_PORT: u16 = 8080;

/// Schedule document served beside the page, inside the static directory
pub const DEFAULT_SCHEDULE_FILE: &str = "schedule.json";

/// Id of the element the event list is rendered into
pub const DEFAULT_CONTAINER_ID: &str = "upcoming-events";

/// Delay before the first event card is revealed
pub const DEFAULT_REVEAL_INITIAL_DELAY_MS: u64 = 100;

/// Delay between two consecutive card reveals
pub const DEFAULT_REVEAL_STAGGER_MS: u64 = 100;
