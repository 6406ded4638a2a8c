//! # gRPC Client Library
//!
//! Channel creation with HTTP/2 keep-alive tuning, optional TLS, and
//! interceptors that identify the caller and add correlation headers.
//!
//! ## Quick Start
//!
//! ### Basic Usage
//! ```ignore
//! use grpc_client::{ChannelConfig, client_interceptor, create_channel_with_config};
//! use rpc::offers::v1::offers_client::OffersClient;
//!
//! let channel = create_channel_with_config("http://127.0.0.1:57051", ChannelConfig::default()).await?;
//! let client = OffersClient::with_interceptor(channel, client_interceptor("billing-service")?);
//! ```
//!
//! ### With TLS
//! ```ignore
//! use core_config::{TlsConfig, TlsTarget};
//! use grpc_client::{ChannelConfig, client_tls_config, create_channel_with_config};
//! use std::time::Duration;
//!
//! let material = TlsConfig::from_env(TlsTarget::OffersClient).load()?;
//! let config = ChannelConfig::default()
//!     .with_connect_timeout(Duration::from_secs(2))
//!     .with_tls(client_tls_config(&material));
//!
//! let channel = create_channel_with_config("https://offers.internal:57051", config).await?;
//! ```

pub mod channel;
pub mod conversions;
pub mod error;
pub mod interceptors;
pub mod tls;

// Re-export main types and functions for convenience
pub use channel::{ChannelConfig, create_channel_lazy_with_config, create_channel_with_config};
pub use error::{GrpcError, GrpcResult, ToTonicOption};
pub use tls::client_tls_config;

// Re-export interceptors for convenience
pub use interceptors::{
  CALLER_METADATA_KEY, CallerInterceptor, ClientInterceptor, ClientTracingInterceptor,
  ComposedInterceptor, MetadataExtractor, REQUEST_ID_METADATA_KEY, client_interceptor,
  compose_interceptors,
};
/// Re-export tonic's Interceptor trait for convenience
pub use tonic::service::Interceptor;
