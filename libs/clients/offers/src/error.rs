use core_config::ConfigError;
use grpc_client::GrpcError;
use thiserror::Error;

/// Errors raised while constructing or shutting down an offers client
///
/// Individual calls do not use this type; they return the remote
/// `tonic::Status` unchanged (see [`CallResult`]).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid offers client configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid offers client options: {0}")]
    InvalidOptions(String),

    #[error("Failed to load offers client TLS material: {0}")]
    TlsMaterial(#[source] ConfigError),

    #[error("Offers client TLS setup failed: {0}")]
    Tls(#[source] GrpcError),

    #[error("Invalid caller identity: {0}")]
    InvalidCaller(#[source] GrpcError),

    #[error("Offers client failed to connect: {0}")]
    Connect(#[source] GrpcError),

    #[error("Offers client connection is already closed")]
    AlreadyClosed,
}

impl ClientError {
    /// Sort a channel error into the construction stage it came from
    pub(crate) fn from_channel(err: GrpcError) -> Self {
        match err {
            GrpcError::Tls(_) => ClientError::Tls(err),
            GrpcError::InvalidMetadata { .. } => ClientError::InvalidCaller(err),
            GrpcError::InvalidConfig(details) => ClientError::InvalidOptions(details),
            _ => ClientError::Connect(err),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Outcome of a single remote call
pub type CallResult<T> = Result<T, tonic::Status>;
