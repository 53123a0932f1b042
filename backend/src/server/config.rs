//! Start-up configuration: listening port, bind host and the server config
//! object handed to [`super::create_server`].

use std::ffi::OsString;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use backend::domain::UserStore;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Environment variable selecting the listening port.
pub const PORT_ENV: &str = "PORT";
/// Port used when [`PORT_ENV`] is absent or empty.
pub const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Errors raised while resolving start-up configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a port number between 0 and 65535, got {value:?}")]
    InvalidPort { value: String },
    #[error("bind host must be an IP address, got {value:?}")]
    InvalidBindHost { value: String },
}

/// Resolve the listening port from the raw `PORT` value.
///
/// Absent or blank values fall back to [`DEFAULT_PORT`].
pub fn resolve_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
            value: value.to_owned(),
        }),
    }
}

/// Settings loaded via OrthoConfig from `USER_SERVICE_*` variables or CLI
/// flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct ServerSettings {
    /// IP address to bind; defaults to all interfaces.
    #[ortho_config(default = DEFAULT_BIND_HOST.to_owned())]
    pub bind_host: String,
}

impl ServerSettings {
    /// Return the configured bind host.
    pub fn bind_host(&self) -> &str {
        self.bind_host.as_str()
    }

    /// Combine the bind host with `port` into a socket address.
    pub fn bind_addr(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        let host = self.bind_host().trim();
        let ip: IpAddr = host.parse().map_err(|_| ConfigError::InvalidBindHost {
            value: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, port))
    }
}

/// Resolve the listening address the way the binary does at start-up:
/// settings from `args` and `USER_SERVICE_*`, port from the bare `PORT`
/// variable.
///
/// # Errors
/// Returns an [`std::io::Error`] wrapping the settings, port or bind-host
/// failure.
pub fn startup_bind_addr<I, T>(args: I) -> std::io::Result<SocketAddr>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let settings = ServerSettings::load_from_iter(args)
        .map_err(|e| std::io::Error::other(format!("failed to load server settings: {e}")))?;
    let port = resolve_port(std::env::var(PORT_ENV).ok().as_deref())
        .map_err(std::io::Error::other)?;
    settings.bind_addr(port).map_err(std::io::Error::other)
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Arc<UserStore>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Configuration serving the seeded store on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: Arc::new(UserStore::seeded()),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Serve a caller-supplied store instead of the seed dataset.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server tests with custom stores")
    )]
    #[must_use]
    pub fn with_store(mut self, store: Arc<UserStore>) -> Self {
        self.store = store;
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    #[case(None, 8080)]
    #[case(Some(""), 8080)]
    #[case(Some("   "), 8080)]
    #[case(Some("3000"), 3000)]
    #[case(Some(" 9090 "), 9090)]
    #[case(Some("0"), 0)]
    fn resolves_port(#[case] raw: Option<&str>, #[case] expected: u16) {
        assert_eq!(resolve_port(raw), Ok(expected));
    }

    #[rstest]
    #[case("http")]
    #[case("65536")]
    #[case("-1")]
    #[case("80a")]
    fn rejects_invalid_ports(#[case] raw: &str) {
        let err = resolve_port(Some(raw)).expect_err("port should be rejected");
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                value: raw.to_owned()
            }
        );
        assert!(err.to_string().contains(PORT_ENV));
    }

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("user-service")])
            .expect("config should load")
    }

    #[rstest]
    fn bind_host_defaults_to_all_interfaces() {
        let _guard = lock_env([("USER_SERVICE_BIND_HOST", None::<String>)]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_host(), "0.0.0.0");
        assert_eq!(
            settings.bind_addr(DEFAULT_PORT),
            Ok(SocketAddr::from(([0, 0, 0, 0], 8080)))
        );
    }

    #[rstest]
    fn bind_host_reads_environment() {
        let _guard = lock_env([("USER_SERVICE_BIND_HOST", Some("127.0.0.1".to_owned()))]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(3000),
            Ok(SocketAddr::from(([127, 0, 0, 1], 3000)))
        );
    }

    #[rstest]
    fn bind_addr_rejects_hostnames() {
        let settings = ServerSettings {
            bind_host: "localhost".to_owned(),
        };
        assert_eq!(
            settings.bind_addr(8080),
            Err(ConfigError::InvalidBindHost {
                value: "localhost".to_owned()
            })
        );
    }

    #[rstest]
    fn startup_defaults_to_all_interfaces_on_8080() {
        let _guard = lock_env([
            ("USER_SERVICE_BIND_HOST", None::<String>),
            (PORT_ENV, None::<String>),
        ]);

        let addr = startup_bind_addr([OsString::from("user-service")])
            .expect("default configuration should start");
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));
    }

    #[rstest]
    fn startup_combines_bind_host_and_port() {
        let _guard = lock_env([
            ("USER_SERVICE_BIND_HOST", Some("127.0.0.1".to_owned())),
            (PORT_ENV, Some("3000".to_owned())),
        ]);

        let addr = startup_bind_addr([OsString::from("user-service")])
            .expect("configuration should load");
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
    }

    #[rstest]
    fn startup_rejects_invalid_port() {
        let _guard = lock_env([
            ("USER_SERVICE_BIND_HOST", None::<String>),
            (PORT_ENV, Some("http".to_owned())),
        ]);

        let err = startup_bind_addr([OsString::from("user-service")])
            .expect_err("invalid PORT should abort start-up");
        assert!(err.to_string().contains(PORT_ENV), "unexpected error: {err}");
    }
}
