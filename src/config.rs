use crate::auth::directory::AdminAccount;
use crate::auth::token::DEFAULT_SESSION_TTL_SECS;
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Session token signing secret
    #[arg(long, env = "SESSION_SECRET", hide_env_values = true)]
    pub session_secret: Option<String>,

    /// Mark the session cookie Secure (disable for plain-HTTP development)
    #[arg(long, env = "COOKIE_SECURE")]
    pub cookie_secure: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub security: SecurityConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecurityConfig {
    /// HMAC-SHA256 signing secret. Absence is a startup warning and a hard
    /// failure on the first issue/verify, never a silent bypass.
    pub session_secret: Option<String>,
    /// Session lifetime in seconds (default 7 days).
    pub session_ttl_secs: i64,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

/// Admin accounts allowed to log in. Lists don't map onto env vars, so this
/// section comes from the config file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub admins: Vec<AdminAccount>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Layered load: defaults, then config file (`--config` / `CONFIG_FILE`,
    /// falling back to `./config.yaml`), then `FLUENTGATE_`-prefixed env
    /// vars, then CLI flags.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("security.session_ttl_secs", DEFAULT_SESSION_TTL_SECS)?
            .set_default("security.cookie_name", "fluentgate_session")?
            .set_default("security.cookie_secure", true)?;

        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else if Path::new("config.yaml").exists() {
            builder = builder.add_source(File::with_name("config.yaml"));
        }

        // Environment variables prefixed with FLUENTGATE_,
        // e.g. FLUENTGATE_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("FLUENTGATE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags (and their clap-level env vars) win over file and prefix
        // env sources.
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(secret) = cli.session_secret {
            builder = builder.set_override("security.session_secret", secret)?;
        }
        if let Some(secure) = cli.cookie_secure {
            builder = builder.set_override("security.cookie_secure", secure)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
