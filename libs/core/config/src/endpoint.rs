use crate::{env_or_default, ConfigError};

/// Address of a remote gRPC service, resolved from `<PREFIX>_HOST` / `<PREFIX>_PORT`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub host: String,
    pub port: u16,
}

impl ServiceEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Reads `<prefix>_HOST` and `<prefix>_PORT`, falling back to the given
    /// defaults when a variable is unset or empty.
    ///
    /// ```ignore
    /// // OFFERS_SERVICE_HOST / OFFERS_SERVICE_PORT
    /// let endpoint = ServiceEndpoint::from_env_prefixed("OFFERS_SERVICE", "127.0.0.1", 57051)?;
    /// ```
    pub fn from_env_prefixed(
        prefix: &str,
        default_host: &str,
        default_port: u16,
    ) -> Result<Self, ConfigError> {
        let host_key = format!("{prefix}_HOST");
        let port_key = format!("{prefix}_PORT");

        let host = env_or_default(&host_key, default_host);
        let port = env_or_default(&port_key, &default_port.to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: port_key,
                details: format!("{}", e),
            })?;

        Ok(Self { host, port })
    }

    /// The endpoint as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The endpoint as a URI suitable for a tonic `Endpoint`.
    ///
    /// Bare IPv6 literals are bracketed.
    pub fn uri(&self, tls: bool) -> String {
        let scheme = if tls { "https" } else { "http" };
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("{scheme}://[{}]:{}", self.host, self.port)
        } else {
            format!("{scheme}://{}:{}", self.host, self.port)
        }
    }
}
