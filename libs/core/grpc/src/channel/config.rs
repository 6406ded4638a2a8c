use std::time::Duration;
use tonic::transport::{ClientTlsConfig, Endpoint};

use crate::error::{GrpcError, GrpcResult};

/// Configuration for gRPC channel creation
///
/// Provides builder pattern for customizing HTTP/2, TCP and TLS settings.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
  // HTTP/2 Keep-Alive
  pub http2_keep_alive_interval: Option<Duration>,
  pub keep_alive_timeout: Duration,
  pub keep_alive_while_idle: bool,

  // Connection settings
  pub connect_timeout: Duration,
  /// Channel-wide request timeout. `None` leaves deadlines to each request.
  pub timeout: Option<Duration>,

  // TCP settings
  pub tcp_nodelay: bool,
  pub tcp_keepalive: Option<Duration>,

  // Transport security; `None` is plaintext
  pub tls: Option<ClientTlsConfig>,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      http2_keep_alive_interval: Some(Duration::from_secs(30)),
      keep_alive_timeout: Duration::from_secs(10),
      keep_alive_while_idle: true,
      connect_timeout: Duration::from_secs(5),
      timeout: None,
      tcp_nodelay: true,
      tcp_keepalive: Some(Duration::from_secs(30)),
      tls: None,
    }
  }
}

impl ChannelConfig {
  /// Create a new configuration with production defaults
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the connection timeout
  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  /// Set a channel-wide timeout for individual RPCs
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Set the HTTP/2 keep-alive interval
  ///
  /// # Example
  /// ```ignore
  /// let config = ChannelConfig::new()
  ///     .with_keep_alive_interval(Duration::from_secs(60));
  /// ```
  pub fn with_keep_alive_interval(mut self, interval: Duration) -> Self {
    self.http2_keep_alive_interval = Some(interval);
    self
  }

  /// Set how long to wait for a keep-alive ping ack before closing the connection
  pub fn with_keep_alive_timeout(mut self, timeout: Duration) -> Self {
    self.keep_alive_timeout = timeout;
    self
  }

  /// Disable HTTP/2 keep-alive
  pub fn without_keep_alive(mut self) -> Self {
    self.http2_keep_alive_interval = None;
    self
  }

  /// Secure the channel with TLS
  ///
  /// # Example
  /// ```ignore
  /// let material = TlsConfig::from_env(TlsTarget::OffersClient).load()?;
  /// let config = ChannelConfig::new().with_tls(client_tls_config(&material));
  /// ```
  pub fn with_tls(mut self, tls: ClientTlsConfig) -> Self {
    self.tls = Some(tls);
    self
  }

  pub fn is_tls(&self) -> bool {
    self.tls.is_some()
  }

  pub(crate) fn validate(&self) -> GrpcResult<()> {
    if self.connect_timeout.is_zero() {
      return Err(GrpcError::InvalidConfig(
        "connect timeout must be greater than zero".to_string(),
      ));
    }
    if self.http2_keep_alive_interval.is_some_and(|interval| interval.is_zero()) {
      return Err(GrpcError::InvalidConfig(
        "keep-alive interval must be greater than zero".to_string(),
      ));
    }
    Ok(())
  }

  /// Apply this configuration to a tonic Endpoint
  pub(crate) fn apply_to_endpoint(self, mut endpoint: Endpoint) -> GrpcResult<Endpoint> {
    self.validate()?;

    if let Some(interval) = self.http2_keep_alive_interval {
      endpoint = endpoint.http2_keep_alive_interval(interval);
    }
    endpoint = endpoint
      .keep_alive_timeout(self.keep_alive_timeout)
      .keep_alive_while_idle(self.keep_alive_while_idle)
      .connect_timeout(self.connect_timeout)
      .tcp_nodelay(self.tcp_nodelay)
      .tcp_keepalive(self.tcp_keepalive);

    if let Some(timeout) = self.timeout {
      endpoint = endpoint.timeout(timeout);
    }

    if let Some(tls) = self.tls {
      endpoint = endpoint.tls_config(tls).map_err(|e| {
        tracing::error!(target: "grpc_client", error = ?e, "Invalid TLS configuration");
        GrpcError::Tls(e)
      })?;
    }

    Ok(endpoint)
  }
}
