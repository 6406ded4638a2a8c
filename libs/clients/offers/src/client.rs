use async_trait::async_trait;
use core_config::{ServiceEndpoint, TlsConfig, TlsTarget};
use grpc_client::{
    ClientInterceptor, client_interceptor, client_tls_config, create_channel_lazy_with_config,
    create_channel_with_config,
};
use rpc::offers::v1::offers_client::OffersClient;
use rpc::offers::v1::{
    CreateOfferRequest, DeleteOfferRequest, DeleteResponse, GetOfferRequest, GetOffersRequest,
    OfferResponse, OfferStatusesRequest, OfferStatusesResponse, OfferTypesRequest,
    OfferTypesResponse, OffersResponse, UpdateOfferRequest,
};
use tokio::sync::RwLock;
use tonic::Status;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;
use tracing::{error, info, instrument};

use crate::call::CallContext;
use crate::error::{CallResult, ClientError, ClientResult};
use crate::options::{CallOptions, ClientOptions};

pub const DEFAULT_SERVICE_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVICE_PORT: u16 = 57051;

/// Env prefix for the service address (`OFFERS_SERVICE_HOST`, `OFFERS_SERVICE_PORT`)
pub const SERVICE_ENV_PREFIX: &str = "OFFERS_SERVICE";

const CLOSED_MESSAGE: &str = "offers client connection is closed";

/// Operations exposed by the remote offers service
///
/// Every call takes the request message plus per-call [`CallOptions`] and
/// returns the remote response, or the remote `tonic::Status` unchanged.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait OffersApi: Send + Sync {
    /// All offer status values known to the service
    async fn get_offer_statuses(
        &self,
        request: OfferStatusesRequest,
        options: CallOptions,
    ) -> CallResult<OfferStatusesResponse>;

    /// All offer type values known to the service
    async fn get_offer_types(
        &self,
        request: OfferTypesRequest,
        options: CallOptions,
    ) -> CallResult<OfferTypesResponse>;

    /// Create an offer; new offers start out `OPEN`
    async fn create_offer(
        &self,
        request: CreateOfferRequest,
        options: CallOptions,
    ) -> CallResult<OfferResponse>;

    async fn update_offer(
        &self,
        request: UpdateOfferRequest,
        options: CallOptions,
    ) -> CallResult<OfferResponse>;

    async fn get_offer(
        &self,
        request: GetOfferRequest,
        options: CallOptions,
    ) -> CallResult<OfferResponse>;

    /// Offers matching every non-empty filter field
    async fn get_offers(
        &self,
        request: GetOffersRequest,
        options: CallOptions,
    ) -> CallResult<OffersResponse>;

    /// Offers attached to `request.schedule_id`
    async fn get_schedule_offers(
        &self,
        request: GetOffersRequest,
        options: CallOptions,
    ) -> CallResult<OffersResponse>;

    async fn delete_offer(
        &self,
        request: DeleteOfferRequest,
        options: CallOptions,
    ) -> CallResult<DeleteResponse>;

    /// Release the connection. Only the first call succeeds.
    async fn close(&self) -> ClientResult<()>;
}

type OffersRpcClient = OffersClient<InterceptedService<Channel, ClientInterceptor>>;

/// gRPC implementation of [`OffersApi`]
///
/// Holds one multiplexed channel. Each call clones the handle, so the client
/// can be shared across tasks behind an `Arc`.
pub struct OffersGrpcClient {
    options: ClientOptions,
    inner: RwLock<Option<OffersRpcClient>>,
}

impl OffersGrpcClient {
    /// Connect to the service named by `OFFERS_SERVICE_HOST` / `OFFERS_SERVICE_PORT`
    /// using the `offers-client` TLS profile.
    pub async fn connect(options: ClientOptions) -> ClientResult<Self> {
        let endpoint = ServiceEndpoint::from_env_prefixed(
            SERVICE_ENV_PREFIX,
            DEFAULT_SERVICE_HOST,
            DEFAULT_SERVICE_PORT,
        )
        .map_err(|e| {
            error!(target: "offers_client", error = %e, "Invalid offers service address");
            e
        })?;

        let tls = TlsConfig::from_env(TlsTarget::OffersClient);
        Self::connect_with(options, endpoint, Some(tls)).await
    }

    /// Connect to an explicit endpoint. `tls: None` opens a plaintext channel.
    pub async fn connect_with(
        options: ClientOptions,
        endpoint: ServiceEndpoint,
        tls: Option<TlsConfig>,
    ) -> ClientResult<Self> {
        options.validate().map_err(|e| {
            error!(target: "offers_client", error = %e, "Invalid offers client options");
            e
        })?;

        let interceptor = client_interceptor(options.caller()).map_err(|e| {
            error!(target: "offers_client", error = %e, "Invalid offers client caller");
            ClientError::InvalidCaller(e)
        })?;

        let mut config = options.channel_config();
        if let Some(tls) = &tls {
            let material = tls.load().map_err(|e| {
                error!(target: "offers_client", error = %e, "Error setting offers service client TLS");
                ClientError::TlsMaterial(e)
            })?;
            config = config.with_tls(client_tls_config(&material));
        }

        let uri = endpoint.uri(tls.is_some());
        let channel = if options.is_lazy() {
            create_channel_lazy_with_config(uri, config)
        } else {
            create_channel_with_config(uri, config).await
        };
        let channel = channel.map_err(|e| {
            error!(
                target: "offers_client",
                host = %endpoint.host,
                port = endpoint.port,
                error = %e,
                "Offers client failed to connect"
            );
            ClientError::from_channel(e)
        })?;

        info!(
            target: "offers_client",
            host = %endpoint.host,
            port = endpoint.port,
            caller = options.caller(),
            tls = tls.is_some(),
            lazy = options.is_lazy(),
            "Offers client connected"
        );

        Ok(Self::bind(channel, options, interceptor))
    }

    /// Wrap an existing channel, e.g. one built with custom transport settings
    pub fn from_channel(channel: Channel, options: ClientOptions) -> ClientResult<Self> {
        options.validate()?;
        let interceptor = client_interceptor(options.caller()).map_err(ClientError::InvalidCaller)?;
        Ok(Self::bind(channel, options, interceptor))
    }

    fn bind(channel: Channel, options: ClientOptions, interceptor: ClientInterceptor) -> Self {
        Self {
            options,
            inner: RwLock::new(Some(OffersClient::with_interceptor(channel, interceptor))),
        }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub async fn is_closed(&self) -> bool {
        self.inner.read().await.is_none()
    }

    async fn handle(&self) -> CallResult<OffersRpcClient> {
        self.inner
            .read()
            .await
            .clone()
            .ok_or_else(|| Status::unavailable(CLOSED_MESSAGE))
    }

    fn context(&self, rpc: &'static str, options: CallOptions) -> CallContext {
        CallContext::new(rpc, &self.options, options)
    }
}

#[async_trait]
impl OffersApi for OffersGrpcClient {
    #[instrument(skip_all)]
    async fn get_offer_statuses(
        &self,
        request: OfferStatusesRequest,
        options: CallOptions,
    ) -> CallResult<OfferStatusesResponse> {
        let mut client = self.handle().await?;
        self.context("GetOfferStatuses", options)
            .run(request, move |req| async move { client.get_offer_statuses(req).await })
            .await
    }

    #[instrument(skip_all)]
    async fn get_offer_types(
        &self,
        request: OfferTypesRequest,
        options: CallOptions,
    ) -> CallResult<OfferTypesResponse> {
        let mut client = self.handle().await?;
        self.context("GetOfferTypes", options)
            .run(request, move |req| async move { client.get_offer_types(req).await })
            .await
    }

    #[instrument(skip_all, fields(actor_id = %request.actor_id, transaction_id = %request.transaction_id))]
    async fn create_offer(
        &self,
        request: CreateOfferRequest,
        options: CallOptions,
    ) -> CallResult<OfferResponse> {
        let mut client = self.handle().await?;
        self.context("CreateOffer", options)
            .run(request, move |req| async move { client.create_offer(req).await })
            .await
    }

    #[instrument(skip_all, fields(offer_id = %request.id))]
    async fn update_offer(
        &self,
        request: UpdateOfferRequest,
        options: CallOptions,
    ) -> CallResult<OfferResponse> {
        let mut client = self.handle().await?;
        self.context("UpdateOffer", options)
            .run(request, move |req| async move { client.update_offer(req).await })
            .await
    }

    #[instrument(skip_all, fields(offer_id = %request.id))]
    async fn get_offer(
        &self,
        request: GetOfferRequest,
        options: CallOptions,
    ) -> CallResult<OfferResponse> {
        let mut client = self.handle().await?;
        self.context("GetOffer", options)
            .run(request, move |req| async move { client.get_offer(req).await })
            .await
    }

    #[instrument(skip_all)]
    async fn get_offers(
        &self,
        request: GetOffersRequest,
        options: CallOptions,
    ) -> CallResult<OffersResponse> {
        let mut client = self.handle().await?;
        self.context("GetOffers", options)
            .run(request, move |req| async move { client.get_offers(req).await })
            .await
    }

    #[instrument(skip_all, fields(schedule_id = %request.schedule_id))]
    async fn get_schedule_offers(
        &self,
        request: GetOffersRequest,
        options: CallOptions,
    ) -> CallResult<OffersResponse> {
        let mut client = self.handle().await?;
        self.context("GetScheduleOffers", options)
            .run(request, move |req| async move { client.get_schedule_offers(req).await })
            .await
    }

    #[instrument(skip_all, fields(offer_id = %request.id))]
    async fn delete_offer(
        &self,
        request: DeleteOfferRequest,
        options: CallOptions,
    ) -> CallResult<DeleteResponse> {
        let mut client = self.handle().await?;
        self.context("DeleteOffer", options)
            .run(request, move |req| async move { client.delete_offer(req).await })
            .await
    }

    async fn close(&self) -> ClientResult<()> {
        // Dropping the last handle shuts the channel down once in-flight calls finish
        match self.inner.write().await.take() {
            Some(_) => {
                info!(target: "offers_client", "Offers client connection closed");
                Ok(())
            }
            None => {
                error!(
                    target: "offers_client",
                    "Error closing offers client connection: already closed"
                );
                Err(ClientError::AlreadyClosed)
            }
        }
    }
}
