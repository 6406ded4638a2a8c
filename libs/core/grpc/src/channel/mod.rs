pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Creates a lazy gRPC channel that connects on first request
///
/// Unlike [`create_channel_with_config`], this returns immediately without
/// establishing a connection. URI, configuration and TLS errors are still
/// reported here; connection errors surface on the first RPC.
///
/// ## Example
/// ```ignore
/// use grpc_client::{create_channel_lazy_with_config, ChannelConfig};
/// use rpc::offers::v1::offers_client::OffersClient;
///
/// // Returns immediately, no connection attempt yet
/// let channel = create_channel_lazy_with_config("http://127.0.0.1:57051", ChannelConfig::default())?;
/// let client = OffersClient::new(channel);
/// ```
pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr_string = addr.into();
  let endpoint = build_endpoint(&addr_string, config)?;

  tracing::debug!(
    target: "grpc_client",
    addr = %addr_string,
    "Creating lazy gRPC channel (connects on first request)"
  );

  Ok(endpoint.connect_lazy())
}

/// Creates a gRPC channel with custom configuration
///
/// The connection is established before returning, bounded by
/// `config.connect_timeout`.
///
/// ## Example
/// ```ignore
/// use grpc_client::{create_channel_with_config, ChannelConfig};
/// use std::time::Duration;
///
/// let config = ChannelConfig::default()
///     .with_connect_timeout(Duration::from_secs(10))
///     .with_tls(tls);
///
/// let channel = create_channel_with_config("https://offers.internal:57051", config).await?;
/// ```
pub async fn create_channel_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr_string = addr.into();
  let endpoint = build_endpoint(&addr_string, config)?;

  tracing::debug!(
    target: "grpc_client",
    addr = %addr_string,
    "Creating gRPC channel"
  );

  endpoint.connect().await.map_err(|e| {
    tracing::error!(
      target: "grpc_client",
      addr = %addr_string,
      error = ?e,
      "Failed to connect to gRPC service"
    );
    GrpcError::ConnectionFailed {
      addr: addr_string.clone(),
      source: e,
    }
  })
}

fn build_endpoint(addr: &str, config: ChannelConfig) -> GrpcResult<Endpoint> {
  let endpoint = Endpoint::from_shared(addr.to_string()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %addr, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;

  config.apply_to_endpoint(endpoint)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  async fn unused_local_addr() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
  }

  #[tokio::test]
  async fn test_invalid_uri() {
    let result = create_channel_with_config("not a valid uri", ChannelConfig::default()).await;
    assert!(matches!(result, Err(GrpcError::InvalidUri(_))));
  }

  #[tokio::test]
  async fn test_connection_failed_reports_address() {
    let addr = unused_local_addr().await;
    let config = ChannelConfig::new().with_connect_timeout(Duration::from_millis(500));

    let err = create_channel_with_config(addr.clone(), config).await.unwrap_err();
    match &err {
      GrpcError::ConnectionFailed { addr: failed, .. } => assert_eq!(failed, &addr),
      other => panic!("expected ConnectionFailed, got {other:?}"),
    }
    assert!(err.to_string().contains(&addr));
  }

  #[tokio::test]
  async fn test_lazy_channel_does_not_connect() {
    let addr = unused_local_addr().await;
    let result = create_channel_lazy_with_config(addr, ChannelConfig::default());
    assert!(result.is_ok());
  }

  #[tokio::test]
  async fn test_lazy_channel_validates_config() {
    let config = ChannelConfig::new().with_connect_timeout(Duration::ZERO);
    let result = create_channel_lazy_with_config("http://127.0.0.1:57051", config);
    assert!(matches!(result, Err(GrpcError::InvalidConfig(_))));
  }
}
