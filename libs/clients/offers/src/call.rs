use std::future::Future;
use std::time::Duration;

use futures::future::{AbortRegistration, Abortable};
use grpc_client::{CALLER_METADATA_KEY, GrpcError};
use tonic::metadata::{Ascii, MetadataKey, MetadataValue};
use tonic::{Request, Response, Status};

use crate::error::CallResult;
use crate::options::{CallOptions, ClientOptions};

/// Deadline and metadata for one outbound call
///
/// Built fresh for every call and consumed by [`CallContext::run`]; the
/// deadline timer is dropped on every exit path.
#[derive(Debug)]
pub(crate) struct CallContext {
    rpc: &'static str,
    deadline: Duration,
    metadata: Vec<(String, String)>,
    abort: Option<AbortRegistration>,
}

impl CallContext {
    pub(crate) fn new(rpc: &'static str, client: &ClientOptions, call: CallOptions) -> Self {
        let deadline = match call.timeout {
            Some(timeout) => timeout.min(client.dial_timeout()),
            None => client.dial_timeout(),
        };

        Self {
            rpc,
            deadline,
            metadata: call.metadata,
            abort: call.abort,
        }
    }

    #[cfg(test)]
    pub(crate) fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Wrap `message` with the deadline header and extra metadata
    fn request<T>(&self, message: T) -> CallResult<Request<T>> {
        let mut request = Request::new(message);
        request.set_timeout(self.deadline);

        for (key, value) in &self.metadata {
            if key.eq_ignore_ascii_case(CALLER_METADATA_KEY) {
                tracing::debug!(
                    target: "offers_client",
                    rpc = self.rpc,
                    "Ignoring call-level override of caller metadata"
                );
                continue;
            }

            let name = MetadataKey::<Ascii>::from_bytes(key.as_bytes())
                .map_err(|_| Status::invalid_argument(format!("Invalid metadata key '{key}'")))?;
            let value = value.parse::<MetadataValue<Ascii>>().map_err(|_| {
                Status::from(GrpcError::InvalidMetadata {
                    key: key.clone(),
                    value: value.clone(),
                })
            })?;
            request.metadata_mut().append(name, value);
        }

        Ok(request)
    }

    /// Issue the call, bounded by the deadline and the caller's abort handle
    ///
    /// The remote status is returned unchanged. Local deadline expiry yields
    /// `DEADLINE_EXCEEDED` and an abort yields `CANCELLED`.
    pub(crate) async fn run<T, R, F, Fut>(self, message: T, call: F) -> CallResult<R>
    where
        F: FnOnce(Request<T>) -> Fut,
        Fut: Future<Output = Result<Response<R>, Status>>,
    {
        let request = self.request(message)?;
        let rpc = self.rpc;
        let deadline = self.deadline;

        let timed = tokio::time::timeout(deadline, call(request));
        let outcome = match self.abort {
            Some(registration) => match Abortable::new(timed, registration).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::debug!(target: "offers_client", rpc, "Offers call aborted by caller");
                    return Err(Status::cancelled(format!("{rpc} cancelled by caller")));
                }
            },
            None => timed.await,
        };

        let result = match outcome {
            Ok(response) => response.map(Response::into_inner),
            Err(_) => Err(Status::deadline_exceeded(format!(
                "{rpc} exceeded deadline of {deadline:?}"
            ))),
        };

        if let Err(status) = &result {
            tracing::debug!(
                target: "offers_client",
                rpc,
                code = ?status.code(),
                message = status.message(),
                "Offers call failed"
            );
        }

        result
    }
}
