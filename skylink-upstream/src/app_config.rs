use serde::Deserialize;
use std::env;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Base URLs of the services this BFF fronts
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub flights_url: String,
    pub customers_url: String,
    pub bookings_url: String,
    pub tasks_url: String,
    /// Per-call timeout applied by the transport
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

/// Environment variables understood by earlier deployments, mapped onto config keys
const LEGACY_ENV: [(&str, &str); 6] = [
    ("FLIGHTS_API_URL", "upstream.flights_url"),
    ("CUSTOMERS_API_URL", "upstream.customers_url"),
    ("BOOKINGS_API_URL", "upstream.bookings_url"),
    ("TASKS_API_URL", "upstream.tasks_url"),
    ("LOG_LEVEL", "log.filter"),
    ("PORT", "server.port"),
];

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &run_mode, |key| env::var(key).ok())
    }

    /// Layers, lowest precedence first: built-in defaults, `default`, `{run_mode}`
    /// and `local` files in `dir` (all optional), `SKYLINK__SECTION__KEY`
    /// variables, then the legacy variables resolved through `lookup`.
    pub fn load_from<F>(dir: &Path, run_mode: &str, lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = |name: &str| config::File::from(dir.join(name)).required(false);

        let mut builder = config::Config::builder()
            .set_default("server.port", 3000)?
            .set_default("upstream.flights_url", "http://localhost:3001")?
            .set_default("upstream.customers_url", "http://localhost:3002")?
            .set_default("upstream.bookings_url", "http://localhost:3003")?
            .set_default("upstream.tasks_url", "http://localhost:3001")?
            .set_default("upstream.timeout_ms", 10_000)?
            .set_default(
                "log.filter",
                "skylink_api=debug,skylink_core=info,skylink_upstream=info,tower_http=debug",
            )?
            .add_source(file("default"))
            .add_source(file(run_mode))
            .add_source(file("local"))
            .add_source(config::Environment::with_prefix("SKYLINK").separator("__"));

        for (var, key) in LEGACY_ENV {
            builder = builder.set_override_option(key, lookup(var))?;
        }

        builder.build()?.try_deserialize()
    }
}
