use std::time::Duration;

use futures::future::AbortRegistration;
use grpc_client::ChannelConfig;

use crate::error::{ClientError, ClientResult};

/// Caller identity sent when none is configured
pub const DEFAULT_CALLER: &str = "comfforts-offers-client";

pub const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(30);
pub const DEFAULT_KEEP_ALIVE_TIMEOUT: Duration = Duration::from_secs(10);

/// Client-wide settings, fixed once the client is built
///
/// The dial timeout bounds both connection setup and every call made
/// through the client.
///
/// ```ignore
/// let options = ClientOptions::new()
///     .with_caller("billing-service")
///     .with_dial_timeout(Duration::from_secs(2));
/// let client = OffersGrpcClient::connect(options).await?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    dial_timeout: Duration,
    keep_alive: Duration,
    keep_alive_timeout: Duration,
    caller: String,
    lazy_connect: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            dial_timeout: DEFAULT_DIAL_TIMEOUT,
            keep_alive: DEFAULT_KEEP_ALIVE,
            keep_alive_timeout: DEFAULT_KEEP_ALIVE_TIMEOUT,
            caller: DEFAULT_CALLER.to_string(),
            lazy_connect: false,
        }
    }
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dial_timeout(mut self, timeout: Duration) -> Self {
        self.dial_timeout = timeout;
        self
    }

    /// HTTP/2 keep-alive ping interval
    pub fn with_keep_alive(mut self, interval: Duration) -> Self {
        self.keep_alive = interval;
        self
    }

    pub fn with_keep_alive_timeout(mut self, timeout: Duration) -> Self {
        self.keep_alive_timeout = timeout;
        self
    }

    /// Identity sent as `service-client` metadata. Blank names fall back to
    /// [`DEFAULT_CALLER`].
    pub fn with_caller(mut self, caller: impl Into<String>) -> Self {
        let caller = caller.into();
        self.caller = if caller.trim().is_empty() {
            DEFAULT_CALLER.to_string()
        } else {
            caller
        };
        self
    }

    /// Defer connecting until the first call
    pub fn lazy_connect(mut self, lazy: bool) -> Self {
        self.lazy_connect = lazy;
        self
    }

    pub fn dial_timeout(&self) -> Duration {
        self.dial_timeout
    }

    pub fn keep_alive(&self) -> Duration {
        self.keep_alive
    }

    pub fn keep_alive_timeout(&self) -> Duration {
        self.keep_alive_timeout
    }

    pub fn caller(&self) -> &str {
        &self.caller
    }

    pub fn is_lazy(&self) -> bool {
        self.lazy_connect
    }

    /// Reject durations the channel and call deadlines cannot use
    pub(crate) fn validate(&self) -> ClientResult<()> {
        let durations = [
            ("dial timeout", self.dial_timeout),
            ("keep-alive interval", self.keep_alive),
            ("keep-alive timeout", self.keep_alive_timeout),
        ];
        for (name, value) in durations {
            if value.is_zero() {
                return Err(ClientError::InvalidOptions(format!(
                    "{name} must be greater than zero"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn channel_config(&self) -> ChannelConfig {
        ChannelConfig::new()
            .with_connect_timeout(self.dial_timeout)
            .with_keep_alive_interval(self.keep_alive)
            .with_keep_alive_timeout(self.keep_alive_timeout)
    }
}

/// Overrides for a single call
///
/// ```ignore
/// let (abort, registration) = AbortHandle::new_pair();
/// let options = CallOptions::new()
///     .timeout(Duration::from_millis(500))
///     .metadata("x-tenant", "acme")
///     .abortable(registration);
/// ```
#[derive(Debug, Default)]
pub struct CallOptions {
    pub(crate) timeout: Option<Duration>,
    pub(crate) metadata: Vec<(String, String)>,
    pub(crate) abort: Option<AbortRegistration>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorten the deadline for this call. It never extends past the
    /// client's dial timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send an extra ASCII metadata entry. `service-client` is reserved for
    /// the configured caller and is ignored here.
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }

    /// Cancel the call when the paired `AbortHandle` is aborted
    pub fn abortable(mut self, registration: AbortRegistration) -> Self {
        self.abort = Some(registration);
        self
    }
}
