// src/config.rs
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;

pub const USAGE: &str = "usage: chatbot-web [--port PORT]\n\n\
options:\n  --port PORT  port to run the server on (default: 5000)\n  -h, --help   show this help message and exit";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("argument --port: expected one argument")]
    MissingValue(String),

    #[error("argument --port: invalid int value: '{0}'")]
    InvalidPort(String),

    #[error("unrecognized arguments: {0}")]
    UnknownArgument(String),

    #[error("help requested")]
    HelpRequested,

    #[error("{name} is not a valid address: '{value}'")]
    InvalidHost { name: &'static str, value: String },
}

/// Where static files come from.
///
/// Relative paths are resolved against the working directory the server is
/// started from, not the location of the binary: launch from the site
/// directory for the default root of `.`, or use `..` when launching from a
/// subdirectory of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFiles {
    pub root: PathBuf,
    /// Directory behind `/assets/`; `None` leaves that prefix to the root.
    pub assets: Option<PathBuf>,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let assets = Some(root.join("assets"));
        Self { root, assets }
    }

    pub fn without_assets(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            assets: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub static_files: StaticFiles,
    pub upstream_url: Option<String>,
}

impl Config {
    /// `.env`, then the process environment, then the command line.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_sources(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    pub fn from_sources<I, F>(args: I, lookup: F) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(args)?.unwrap_or(DEFAULT_PORT);

        let host = match lookup("CHATBOT_HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidHost {
                name: "CHATBOT_HOST",
                value,
            })?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let root = PathBuf::from(lookup("CHATBOT_STATIC_ROOT").unwrap_or_else(|| ".".to_string()));
        let static_files = match lookup("CHATBOT_ASSETS_DIR") {
            Some(dir) if dir.is_empty() => StaticFiles::without_assets(root),
            Some(dir) => StaticFiles {
                root,
                assets: Some(PathBuf::from(dir)),
            },
            None => StaticFiles::new(root),
        };

        let upstream_url = lookup("CHATBOT_UPSTREAM_URL").filter(|url| !url.trim().is_empty());

        Ok(Self {
            host,
            port,
            static_files,
            upstream_url,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_port<I>(args: I) -> Result<Option<u16>, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut port = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let value = match arg.as_str() {
            "-h" | "--help" => return Err(ConfigError::HelpRequested),
            "--port" => args
                .next()
                .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?,
            other => match other.strip_prefix("--port=") {
                Some(value) => value.to_string(),
                None => return Err(ConfigError::UnknownArgument(arg)),
            },
        };
        // Last occurrence wins.
        port = Some(value.parse().map_err(|_| ConfigError::InvalidPort(value))?);
    }

    Ok(port)
}
