use tonic::metadata::{Ascii, MetadataValue};
use tonic::{Request, Status};

use crate::error::{GrpcError, GrpcResult};

/// Metadata key naming the calling service on every request
pub const CALLER_METADATA_KEY: &str = "service-client";

/// Interceptor that identifies the calling service to the remote end
///
/// Sets `service-client: <caller>` on every outgoing request, replacing any
/// value already present. The value is validated once at construction, so
/// the interceptor itself never fails.
///
/// # Example
/// ```ignore
/// use grpc_client::interceptors::CallerInterceptor;
/// use rpc::offers::v1::offers_client::OffersClient;
///
/// let caller = CallerInterceptor::new("billing-service")?;
/// let channel = create_channel_lazy_with_config("http://127.0.0.1:57051", ChannelConfig::default())?;
/// let client = OffersClient::with_interceptor(channel, caller);
/// ```
#[derive(Clone, Debug)]
pub struct CallerInterceptor {
  name: String,
  caller: MetadataValue<Ascii>,
}

impl CallerInterceptor {
  /// Create an interceptor for `caller`
  ///
  /// Fails with [`GrpcError::InvalidMetadata`] if the name cannot be sent as
  /// ASCII metadata.
  pub fn new(caller: impl Into<String>) -> GrpcResult<Self> {
    let name = caller.into();
    let invalid = || GrpcError::InvalidMetadata {
      key: CALLER_METADATA_KEY.to_string(),
      value: name.clone(),
    };

    // Only printable ASCII may travel as a metadata value
    if !name.bytes().all(|b| b.is_ascii_graphic() || b == b' ') {
      return Err(invalid());
    }
    let caller = name.parse::<MetadataValue<Ascii>>().map_err(|_| invalid())?;

    Ok(Self { name, caller })
  }

  /// The caller name sent with each request
  pub fn caller(&self) -> &str {
    &self.name
  }
}

impl tonic::service::Interceptor for CallerInterceptor {
  fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
    request
      .metadata_mut()
      .insert(CALLER_METADATA_KEY, self.caller.clone());
    Ok(request)
  }
}
