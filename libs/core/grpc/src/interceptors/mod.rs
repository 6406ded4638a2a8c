//! Client-side gRPC interceptors
//!
//! These interceptors run on every outgoing call to identify the caller and
//! inject correlation headers.

pub mod caller;
pub mod compose;
pub mod tracing;

pub use caller::{CALLER_METADATA_KEY, CallerInterceptor};
pub use compose::{ComposedInterceptor, compose_interceptors};
pub use tracing::{ClientTracingInterceptor, MetadataExtractor, REQUEST_ID_METADATA_KEY};

/// The standard client stack: caller identity, then correlation headers
pub type ClientInterceptor = ComposedInterceptor<CallerInterceptor, ClientTracingInterceptor>;

/// Build the standard client interceptor stack for `caller`
pub fn client_interceptor(caller: impl Into<String>) -> crate::GrpcResult<ClientInterceptor> {
  Ok(compose_interceptors(
    CallerInterceptor::new(caller)?,
    ClientTracingInterceptor::new(),
  ))
}
