//! # Offers Client
//!
//! Client for the remote `offers.v1.Offers` gRPC service.
//!
//! One long-lived TLS channel per client. Every call carries the caller's
//! identity as `service-client` metadata and is bounded by the dial timeout.
//! Remote errors come back as the service's `tonic::Status`, untouched.
//!
//! ```ignore
//! use offers_client::{CallOptions, ClientOptions, OffersApi, OffersGrpcClient};
//! use offers_client::proto::GetOfferRequest;
//!
//! let client = OffersGrpcClient::connect(ClientOptions::new().with_caller("billing-service")).await?;
//! let offer = client
//!     .get_offer(GetOfferRequest { id }, CallOptions::new())
//!     .await?;
//! client.close().await?;
//! ```

mod call;
pub mod client;
pub mod error;
pub mod options;

pub use client::{
    DEFAULT_SERVICE_HOST, DEFAULT_SERVICE_PORT, OffersApi, OffersGrpcClient, SERVICE_ENV_PREFIX,
};
#[cfg(any(test, feature = "mock"))]
pub use client::MockOffersApi;
pub use error::{CallResult, ClientError, ClientResult};
pub use options::{
    CallOptions, ClientOptions, DEFAULT_CALLER, DEFAULT_DIAL_TIMEOUT, DEFAULT_KEEP_ALIVE,
    DEFAULT_KEEP_ALIVE_TIMEOUT,
};

pub use futures::future::{AbortHandle, AbortRegistration};

/// Wire types of the offers service
pub use rpc::offers::v1 as proto;
