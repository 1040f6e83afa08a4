use std::{env, time::Duration};

use booo_core::{
    find_config_file, load_config, ConfigSource, DEFAULT_CONTAINER_ID,
    DEFAULT_REVEAL_INITIAL_DELAY_MS, DEFAULT_REVEAL_STAGGER_MS, DEFAULT_SCHEDULE_FILE,
    DEFAULT_SITE_PORT,
};
use clap::Parser;
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use log::LevelFilter;
use time::{format_description::well_known::Iso8601, OffsetDateTime};

use crate::{dom::RevealPlan, ScheduleSettings};

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "Booo! GAMES site - landing page and event schedule server"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $BOOO_SITE_CONFIG, ./site.toml,
    /// $XDG_CONFIG_HOME/booo-games/site.toml, /etc/booo-games/site.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "BOOO_SITE_LEVEL")]
    pub level: Option<String>,

    /// Host to listen on (use 0.0.0.0 for all interfaces)
    #[arg(long, env = "BOOO_SITE_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "BOOO_SITE_PORT")]
    pub port: Option<String>,

    /// Directory served under /static
    #[arg(long, env = "BOOO_SITE_STATIC_DIR")]
    #[serde(alias = "ui_dir")]
    pub static_dir: Option<String>,

    /// Schedule document: a file path or an http(s) URL
    #[arg(short, long, env = "BOOO_SITE_SCHEDULE")]
    pub schedule: Option<String>,

    /// Give up reading the schedule after this many seconds (default: wait)
    #[arg(long, env = "BOOO_SITE_FETCH_TIMEOUT_SECS")]
    pub fetch_timeout_secs: Option<u64>,

    /// Id of the element the event list is rendered into
    #[arg(long, env = "BOOO_SITE_CONTAINER_ID")]
    pub container_id: Option<String>,

    /// Delay before the first event card fades in
    #[arg(long, env = "BOOO_SITE_REVEAL_INITIAL_DELAY_MS")]
    pub reveal_initial_delay_ms: Option<u64>,

    /// Delay between consecutive event cards fading in
    #[arg(long, env = "BOOO_SITE_REVEAL_STAGGER_MS")]
    pub reveal_stagger_ms: Option<u64>,

    /// Account shown in the embedded Twitter timeline
    #[arg(short, long, env = "BOOO_SITE_TWITTER_HANDLE")]
    pub twitter_handle: Option<String>,
}

impl Cli {
    pub fn host(&self) -> String {
        self.host.clone().unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> String {
        self.port
            .clone()
            .unwrap_or_else(|| DEFAULT_SITE_PORT.to_string())
    }

    pub fn static_dir(&self) -> String {
        self.static_dir
            .clone()
            .unwrap_or_else(|| "./static".to_string())
    }

    /// Configured schedule location, else the `schedule.json` in the
    /// static directory
    pub fn schedule(&self) -> String {
        self.schedule.clone().unwrap_or_else(|| {
            format!(
                "{}/{}",
                self.static_dir().trim_end_matches('/'),
                DEFAULT_SCHEDULE_FILE
            )
        })
    }

    pub fn twitter_handle(&self) -> String {
        self.twitter_handle
            .clone()
            .unwrap_or_else(|| "booo_games".to_string())
    }

    pub fn reveal_plan(&self) -> RevealPlan {
        RevealPlan::new(
            Duration::from_millis(
                self.reveal_initial_delay_ms
                    .unwrap_or(DEFAULT_REVEAL_INITIAL_DELAY_MS),
            ),
            Duration::from_millis(self.reveal_stagger_ms.unwrap_or(DEFAULT_REVEAL_STAGGER_MS)),
        )
    }

    pub fn schedule_settings(&self) -> ScheduleSettings {
        ScheduleSettings {
            location: self.schedule(),
            timeout: self.fetch_timeout_secs.map(Duration::from_secs),
            container_id: self
                .container_id
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTAINER_ID.to_string()),
            reveal: self.reveal_plan(),
        }
    }

    /// Fill every unset value from `file`
    fn or(self, file: Cli) -> Cli {
        Cli {
            config: self.config,
            level: self.level.or(file.level),
            host: self.host.or(file.host),
            port: self.port.or(file.port),
            static_dir: self.static_dir.or(file.static_dir),
            schedule: self.schedule.or(file.schedule),
            fetch_timeout_secs: self.fetch_timeout_secs.or(file.fetch_timeout_secs),
            container_id: self.container_id.or(file.container_id),
            reveal_initial_delay_ms: self
                .reveal_initial_delay_ms
                .or(file.reveal_initial_delay_ms),
            reveal_stagger_ms: self.reveal_stagger_ms.or(file.reveal_stagger_ms),
            twitter_handle: self.twitter_handle.or(file.twitter_handle),
        }
    }
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    let cli_args = Cli::parse();

    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("BOOO_SITE_CONFIG", "site.toml")
    };

    if let Some(path) = source.path() {
        log::info!("Loading config from: {}", path.display());
    }

    let file_config: Cli = load_config(&source).unwrap_or_default();

    // CLI args override file config (env vars are handled by clap)
    cli_args.or(file_config)
}

pub fn get_log_level(cli: &Cli) -> LevelFilter {
    let level_str = cli
        .level
        .clone()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    match level_str.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logger() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}: {}",
                OffsetDateTime::now_utc()
                    .format(&Iso8601::DEFAULT)
                    .unwrap_or_default(),
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .chain(std::io::stdout())
}
