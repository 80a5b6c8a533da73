//! Server configuration.
//!
//! Defaults are overridden by environment variables, which are in turn
//! overridden by command-line flags.

use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Environment variable holding the listen address.
pub const ENV_ADDR: &str = "ENTITY_REGISTRY_ADDR";
/// Environment variable holding the log level / filter directive.
pub const ENV_LOG: &str = "ENTITY_REGISTRY_LOG";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
entity-registry-server - in-memory entity REST API

USAGE:
    entity-registry-server [OPTIONS]

OPTIONS:
    -a, --addr <ADDR>         Address to listen on [default: 127.0.0.1:8080]
    -p, --port <PORT>         Port to listen on (keeps the host)
    -l, --log-level <LEVEL>   trace|debug|info|warn|error [default: info]
        --no-seed             Start with an empty store
        --no-cors             Disable permissive CORS headers
    -h, --help                Print help information

ENVIRONMENT:
    ENTITY_REGISTRY_ADDR      Listen address
    ENTITY_REGISTRY_LOG       Log level (RUST_LOG takes precedence)";

/// Errors produced while building a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{flag} requires a value")]
    MissingValue {
        flag: String,
    },

    #[error("invalid value '{value}' for {flag}")]
    InvalidValue {
        flag: String,
        value: String,
    },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// What the binary should do after parsing its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchMode {
    /// Run the server with this configuration.
    Serve(ServerConfig),
    /// Print usage and exit.
    Help,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub addr: SocketAddr,
    /// Load the example records at startup.
    pub seed: bool,
    /// Attach permissive CORS headers.
    pub enable_cors: bool,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            seed: true,
            enable_cors: true,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Builds a configuration from the process environment and arguments.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for unknown flags or malformed values.
    pub fn from_env_and_args() -> Result<LaunchMode, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_args(std::env::args().skip(1))
    }

    /// Applies environment overrides using the given lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the address does not parse.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(ENV_ADDR) {
            self.addr = parse_addr(ENV_ADDR, &addr)?;
        }
        if let Some(level) = lookup(ENV_LOG) {
            if !level.trim().is_empty() {
                self.log_level = level.trim().to_string();
            }
        }
        Ok(())
    }

    /// Applies command-line flags (program name already stripped).
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for unknown flags, missing or malformed values.
    pub fn apply_args<I, S>(mut self, args: I) -> Result<LaunchMode, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--addr" | "-a" => {
                    let value = next_value(&mut args, &arg)?;
                    self.addr = parse_addr(&arg, &value)?;
                }
                "--port" | "-p" => {
                    let value = next_value(&mut args, &arg)?;
                    let port = value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                        flag: arg.clone(),
                        value: value.clone(),
                    })?;
                    self.addr.set_port(port);
                }
                "--log-level" | "-l" => {
                    self.log_level = next_value(&mut args, &arg)?;
                }
                "--no-seed" => self.seed = false,
                "--no-cors" => self.enable_cors = false,
                "--help" | "-h" => return Ok(LaunchMode::Help),
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(LaunchMode::Serve(self))
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ConfigError> {
    args.next().ok_or_else(|| ConfigError::MissingValue {
        flag: flag.to_string(),
    })
}

fn parse_addr(flag: &str, value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse::<SocketAddr>()
        .map_err(|_| ConfigError::InvalidValue {
            flag: flag.to_string(),
            value: value.to_string(),
        })
}
