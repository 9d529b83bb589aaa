use crate::Result;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "infosession.toml";
const DEFAULT_DIST_PATH: &str = "app/dist";
const DEFAULT_NOTICES_PATH: &str = "notices.toml";
const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://0.0.0.0:8080", "http://localhost:8080"];

/// Server configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Address to bind to. By default this is 0.0.0.0:3000.
    pub listen: SocketAddr,
    /// Directory with the built app, served for every non-API path.
    pub dist: PathBuf,
    /// TOML file holding the notices.
    pub notices: PathBuf,
    /// Origins allowed to call the API from another host, e.g. `trunk serve`.
    pub allowed_origins: Vec<String>,
}

#[derive(Deserialize)]
struct Serialized {
    #[serde(default)]
    listen: Option<SocketAddr>,
    #[serde(default)]
    dist: Option<PathBuf>,
    #[serde(default)]
    notices: Option<PathBuf>,
    #[serde(default)]
    allowed_origins: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 3000)),
            dist: PathBuf::from(DEFAULT_DIST_PATH),
            notices: PathBuf::from(DEFAULT_NOTICES_PATH),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.map(String::from).to_vec(),
        }
    }
}

impl Config {
    /// Read from `path` or, if not given, from infosession.toml if that exists. Missing keys fall
    /// back to the defaults.
    pub fn new(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_PATH);

                if path.exists() && path.is_file() {
                    Self::from_toml(&std::fs::read_to_string(path)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_toml(content: &str) -> Result<Self> {
        let config: Serialized = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(Self {
            listen: config.listen.unwrap_or(defaults.listen),
            dist: config.dist.unwrap_or(defaults.dist),
            notices: config.notices.unwrap_or(defaults.notices),
            allowed_origins: config.allowed_origins.unwrap_or(defaults.allowed_origins),
        })
    }
}
