use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors that can occur during gRPC channel creation and configuration
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Invalid URI provided for connection
  #[error("Invalid URI: {0}")]
  InvalidUri(#[source] tonic::transport::Error),

  /// Failed to establish connection
  #[error("Connection to {addr} failed: {source}")]
  ConnectionFailed {
    addr: String,
    #[source]
    source: tonic::transport::Error,
  },

  /// TLS credentials could not be applied to the endpoint
  #[error("Invalid TLS configuration: {0}")]
  Tls(#[source] tonic::transport::Error),

  /// Value cannot be sent as ASCII gRPC metadata
  #[error("Invalid metadata value for '{key}': {value:?}")]
  InvalidMetadata { key: String, value: String },

  /// Invalid configuration
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),
}

impl From<GrpcError> for tonic::Status {
  fn from(err: GrpcError) -> Self {
    match err {
      GrpcError::InvalidUri(_)
      | GrpcError::InvalidConfig(_)
      | GrpcError::InvalidMetadata { .. } => tonic::Status::invalid_argument(err.to_string()),
      GrpcError::ConnectionFailed { .. } | GrpcError::Tls(_) => {
        tonic::Status::unavailable(err.to_string())
      }
    }
  }
}

// ============================================================================
// Generic Error Conversion Traits
// ============================================================================

/// Extension trait for Option types to convert None to tonic::Status errors
///
/// # Example
/// ```ignore
/// use grpc_client::error::ToTonicOption;
///
/// let offer: Option<Offer> = None;
/// let offer = offer.ok_or_not_found("offer not found")?;
/// ```
pub trait ToTonicOption<T> {
  /// Convert None to a tonic::Status with NOT_FOUND code
  fn ok_or_not_found(self, message: impl Into<String>) -> Result<T, tonic::Status>;

  /// Convert None to a tonic::Status with INVALID_ARGUMENT code
  fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status>;
}

impl<T> ToTonicOption<T> for Option<T> {
  fn ok_or_not_found(self, message: impl Into<String>) -> Result<T, tonic::Status> {
    self.ok_or_else(|| tonic::Status::not_found(message.into()))
  }

  fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status> {
    self.ok_or_else(|| tonic::Status::invalid_argument(message.into()))
  }
}
