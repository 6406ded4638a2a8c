//! Client-side tracing interceptor with W3C Trace Context propagation
//!
//! Injects correlation headers into outgoing gRPC requests.

use tonic::{Request, Status};

use super::caller::CALLER_METADATA_KEY;

/// Metadata key carrying the per-request correlation id
pub const REQUEST_ID_METADATA_KEY: &str = "x-request-id";
/// W3C Trace Context header
pub const TRACEPARENT_METADATA_KEY: &str = "traceparent";

/// Interceptor for request correlation
///
/// Headers injected when absent:
/// - `x-request-id`: UUID for request correlation
/// - `traceparent`: W3C Trace Context format (version-trace_id-span_id-flags)
///
/// Values already set on the request are kept, so a caller can forward the
/// ids of an inbound request.
///
/// # Example
/// ```ignore
/// use grpc_client::interceptors::ClientTracingInterceptor;
/// use rpc::offers::v1::offers_client::OffersClient;
///
/// let channel = create_channel_lazy_with_config("http://127.0.0.1:57051", ChannelConfig::default())?;
/// let client = OffersClient::with_interceptor(channel, ClientTracingInterceptor::new());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClientTracingInterceptor;

impl ClientTracingInterceptor {
  pub fn new() -> Self {
    Self
  }

  /// Generate a W3C traceparent header value
  ///
  /// Format: {version}-{trace_id}-{parent_id}-{trace_flags}
  /// Example: 00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01
  fn generate_traceparent() -> String {
    let trace_id = uuid::Uuid::new_v4().as_simple().to_string();
    let span_id = &uuid::Uuid::new_v4().as_simple().to_string()[..16];
    format!("00-{trace_id}-{span_id}-01")
  }
}

impl tonic::service::Interceptor for ClientTracingInterceptor {
  fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
    let metadata = request.metadata_mut();

    if !metadata.contains_key(REQUEST_ID_METADATA_KEY) {
      let request_id = uuid::Uuid::new_v4().to_string();
      metadata.insert(
        REQUEST_ID_METADATA_KEY,
        request_id
          .parse()
          .map_err(|_| Status::internal("Failed to create request ID"))?,
      );
    }

    if !metadata.contains_key(TRACEPARENT_METADATA_KEY) {
      metadata.insert(
        TRACEPARENT_METADATA_KEY,
        Self::generate_traceparent()
          .parse()
          .map_err(|_| Status::internal("Failed to create traceparent header"))?,
      );
    }

    let extractor = MetadataExtractor(request.metadata());
    tracing::debug!(
      target: "grpc_client",
      request_id = extractor.request_id().as_deref().unwrap_or_default(),
      trace_id = extractor.trace_id().as_deref().unwrap_or_default(),
      caller = extractor.caller().as_deref().unwrap_or_default(),
      "Outgoing gRPC request"
    );

    Ok(request)
  }
}

/// Helper for reading correlation metadata, on either side of a call
pub struct MetadataExtractor<'a>(pub &'a tonic::metadata::MetadataMap);

impl MetadataExtractor<'_> {
  fn get(&self, key: &str) -> Option<String> {
    self.0.get(key).and_then(|v| v.to_str().ok()).map(String::from)
  }

  /// Extract trace ID from traceparent header
  pub fn trace_id(&self) -> Option<String> {
    self
      .get(TRACEPARENT_METADATA_KEY)
      .and_then(|tp| tp.split('-').nth(1).map(String::from))
  }

  /// Extract request ID
  pub fn request_id(&self) -> Option<String> {
    self.get(REQUEST_ID_METADATA_KEY)
  }

  /// Extract the calling service name
  pub fn caller(&self) -> Option<String> {
    self.get(CALLER_METADATA_KEY)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tonic::service::Interceptor;

  #[test]
  fn test_tracing_interceptor() {
    let mut tracing = ClientTracingInterceptor::new();
    let req = tracing.call(Request::new(())).unwrap();

    let id_str = req.metadata().get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id_str).is_ok());

    let tp_str = req.metadata().get("traceparent").unwrap().to_str().unwrap();
    let parts: Vec<&str> = tp_str.split('-').collect();
    assert_eq!(parts.len(), 4);
    assert_eq!(parts[0], "00"); // version
    assert_eq!(parts[1].len(), 32); // trace_id
    assert_eq!(parts[2].len(), 16); // span_id
    assert_eq!(parts[3], "01"); // flags
  }

  #[test]
  fn test_keeps_forwarded_request_id() {
    let mut tracing = ClientTracingInterceptor::new();
    let mut request = Request::new(());
    request
      .metadata_mut()
      .insert("x-request-id", "upstream-id".parse().unwrap());

    let req = tracing.call(request).unwrap();
    assert_eq!(req.metadata().get("x-request-id").unwrap(), "upstream-id");
  }

  #[test]
  fn test_unique_ids_per_request() {
    let mut tracing = ClientTracingInterceptor::new();
    let first = tracing.call(Request::new(())).unwrap();
    let second = tracing.call(Request::new(())).unwrap();
    assert_ne!(
      first.metadata().get("x-request-id"),
      second.metadata().get("x-request-id")
    );
  }

  #[test]
  fn test_metadata_extractor() {
    let mut metadata = tonic::metadata::MetadataMap::new();
    metadata.insert(
      "traceparent",
      "00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01"
        .parse()
        .unwrap(),
    );
    metadata.insert("x-request-id", "test-request-id".parse().unwrap());
    metadata.insert("service-client", "billing-service".parse().unwrap());

    let extractor = MetadataExtractor(&metadata);
    assert_eq!(
      extractor.trace_id(),
      Some("0af7651916cd43dd8448eb211c80319c".to_string())
    );
    assert_eq!(extractor.request_id(), Some("test-request-id".to_string()));
    assert_eq!(extractor.caller(), Some("billing-service".to_string()));
  }

  #[test]
  fn test_metadata_extractor_empty() {
    let metadata = tonic::metadata::MetadataMap::new();
    let extractor = MetadataExtractor(&metadata);
    assert_eq!(extractor.trace_id(), None);
    assert_eq!(extractor.request_id(), None);
    assert_eq!(extractor.caller(), None);
  }
}
