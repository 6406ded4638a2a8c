//! In-process offers service for integration tests.
//!
//! Keeps offers in memory and applies the same request rules as the real
//! service: `requested_by` is required on writes, actor/participant/
//! transaction triples are unique, and unknown ids are `NOT_FOUND`.
//! Every request's correlation metadata is recorded for assertions.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use core_config::ServiceEndpoint;
use grpc_client::conversions::datetime_to_timestamp;
use grpc_client::{MetadataExtractor, ToTonicOption};
use offers_client::proto::offers_server::{Offers, OffersServer};
use offers_client::proto::{
    CreateOfferRequest, DeleteOfferRequest, DeleteResponse, GetOfferRequest, GetOffersRequest,
    Offer, OfferResponse, OfferStatus, OfferStatusesRequest, OfferStatusesResponse, OfferType,
    OfferTypesRequest, OfferTypesResponse, OffersResponse, UpdateOfferRequest,
};
use offers_client::{ClientOptions, OffersGrpcClient};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Server, ServerTlsConfig};
use tonic::{Request, Response, Status};

pub const TEST_CALLER: &str = "offers-client-test";
pub const TEST_REQUESTER: &str = "test-offer-client@gmail.com";
pub const TEST_ACTOR_ID: &str = "test-offer-client-shop";
pub const TEST_PARTICIPANT_ID: &str = "test-offer-client-courier";
pub const TEST_TRANSACTION_ID: &str = "CL1eCr341e0r620ff3r";
pub const TEST_WORKFLOW_ID: &str = "offer-client-test-wkflid";
pub const TEST_RUN_ID: &str = "offer-client-test-wkflrunid";

/// Metadata seen by the fake service, one entry per request
#[derive(Clone, Debug, Default)]
pub struct SeenMetadata {
    pub callers: Vec<Option<String>>,
    pub request_ids: Vec<Option<String>>,
    pub tenants: Vec<Option<String>>,
}

#[derive(Default)]
struct FakeState {
    offers: HashMap<String, Offer>,
    seen: SeenMetadata,
}

#[derive(Clone, Default)]
pub struct FakeOffers {
    state: Arc<Mutex<FakeState>>,
    delay: Option<Duration>,
}

impl FakeOffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every response for `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn seen(&self) -> SeenMetadata {
        self.state.lock().unwrap().seen.clone()
    }

    pub fn offer_count(&self) -> usize {
        self.state.lock().unwrap().offers.len()
    }

    async fn record<T>(&self, request: &Request<T>) {
        let metadata = MetadataExtractor(request.metadata());
        {
            let mut state = self.state.lock().unwrap();
            state.seen.callers.push(metadata.caller());
            state.seen.request_ids.push(metadata.request_id());
            state.seen.tenants.push(
                request
                    .metadata()
                    .get("x-tenant")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from),
            );
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

fn require(value: &str, field: &str) -> Result<(), Status> {
    if value.trim().is_empty() {
        return Err(Status::invalid_argument(format!("{field} is required")));
    }
    Ok(())
}

fn matches_filter(offer: &Offer, filter: &GetOffersRequest) -> bool {
    let field_matches = |wanted: &str, actual: &str| wanted.is_empty() || wanted == actual;

    field_matches(&filter.actor_id, &offer.actor_id)
        && field_matches(&filter.participant_id, &offer.participant_id)
        && field_matches(&filter.transaction_id, &offer.transaction_id)
        && field_matches(&filter.schedule_id, &offer.schedule_id)
        && filter.status.is_none_or(|status| status == offer.status)
}

#[tonic::async_trait]
impl Offers for FakeOffers {
    async fn get_offer_statuses(
        &self,
        request: Request<OfferStatusesRequest>,
    ) -> Result<Response<OfferStatusesResponse>, Status> {
        self.record(&request).await;
        let statuses = [
            OfferStatus::Open,
            OfferStatus::AcceptParticipant,
            OfferStatus::RejectParticipant,
            OfferStatus::AcceptActor,
            OfferStatus::RejectActor,
            OfferStatus::Scheduled,
            OfferStatus::InProgress,
            OfferStatus::Completed,
            OfferStatus::Cancelled,
            OfferStatus::Expired,
        ];
        Ok(Response::new(OfferStatusesResponse {
            statuses: statuses.into_iter().map(|s| s as i32).collect(),
        }))
    }

    async fn get_offer_types(
        &self,
        request: Request<OfferTypesRequest>,
    ) -> Result<Response<OfferTypesResponse>, Status> {
        self.record(&request).await;
        Ok(Response::new(OfferTypesResponse {
            types: vec![OfferType::Delivery as i32],
        }))
    }

    async fn create_offer(
        &self,
        request: Request<CreateOfferRequest>,
    ) -> Result<Response<OfferResponse>, Status> {
        self.record(&request).await;
        let input = request.into_inner();

        require(&input.requested_by, "requested_by")?;
        require(&input.actor_id, "actor_id")?;
        require(&input.participant_id, "participant_id")?;
        require(&input.transaction_id, "transaction_id")?;

        let mut state = self.state.lock().unwrap();
        let duplicate = state.offers.values().any(|offer| {
            offer.actor_id == input.actor_id
                && offer.participant_id == input.participant_id
                && offer.transaction_id == input.transaction_id
        });
        if duplicate {
            return Err(Status::already_exists("offer already exists"));
        }

        let now = datetime_to_timestamp(Utc::now());
        let offer = Offer {
            id: uuid::Uuid::new_v4().simple().to_string(),
            actor_id: input.actor_id,
            participant_id: input.participant_id,
            transaction_id: input.transaction_id,
            status: OfferStatus::Open as i32,
            min: input.min,
            max: input.max,
            duration: input.duration,
            distance: input.distance,
            workflow_id: input.workflow_id,
            run_id: input.run_id,
            r#type: input.r#type,
            created_by: input.requested_by.clone(),
            updated_by: input.requested_by,
            created_at: now,
            updated_at: now,
            ..Default::default()
        };
        state.offers.insert(offer.id.clone(), offer.clone());

        Ok(Response::new(OfferResponse { offer: Some(offer) }))
    }

    async fn update_offer(
        &self,
        request: Request<UpdateOfferRequest>,
    ) -> Result<Response<OfferResponse>, Status> {
        self.record(&request).await;
        let input = request.into_inner();
        require(&input.id, "id")?;
        require(&input.requested_by, "requested_by")?;

        let mut state = self.state.lock().unwrap();
        let offer = state.offers.get_mut(&input.id).ok_or_not_found("offer not found")?;

        offer.status = input.status;
        if !input.schedule_id.is_empty() {
            offer.schedule_id = input.schedule_id;
        }
        if input.value != 0.0 {
            offer.value = input.value;
        }
        if input.min != 0.0 {
            offer.min = input.min;
        }
        if input.max != 0.0 {
            offer.max = input.max;
        }
        offer.updated_by = input.requested_by;
        offer.updated_at = datetime_to_timestamp(Utc::now());

        Ok(Response::new(OfferResponse {
            offer: Some(offer.clone()),
        }))
    }

    async fn get_offer(
        &self,
        request: Request<GetOfferRequest>,
    ) -> Result<Response<OfferResponse>, Status> {
        self.record(&request).await;
        let id = request.into_inner().id;
        require(&id, "id")?;

        let state = self.state.lock().unwrap();
        let offer = state.offers.get(&id).cloned().ok_or_not_found("offer not found")?;
        Ok(Response::new(OfferResponse { offer: Some(offer) }))
    }

    async fn get_offers(
        &self,
        request: Request<GetOffersRequest>,
    ) -> Result<Response<OffersResponse>, Status> {
        self.record(&request).await;
        let filter = request.into_inner();
        if filter.actor_id.is_empty()
            && filter.participant_id.is_empty()
            && filter.transaction_id.is_empty()
            && filter.schedule_id.is_empty()
            && filter.status.is_none()
        {
            return Err(Status::invalid_argument("at least one filter is required"));
        }

        let state = self.state.lock().unwrap();
        let offers = state
            .offers
            .values()
            .filter(|offer| matches_filter(offer, &filter))
            .cloned()
            .collect();
        Ok(Response::new(OffersResponse { offers }))
    }

    async fn get_schedule_offers(
        &self,
        request: Request<GetOffersRequest>,
    ) -> Result<Response<OffersResponse>, Status> {
        self.record(&request).await;
        let schedule_id = request.into_inner().schedule_id;
        require(&schedule_id, "schedule_id")?;

        let state = self.state.lock().unwrap();
        let offers = state
            .offers
            .values()
            .filter(|offer| offer.schedule_id == schedule_id)
            .cloned()
            .collect();
        Ok(Response::new(OffersResponse { offers }))
    }

    async fn delete_offer(
        &self,
        request: Request<DeleteOfferRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        self.record(&request).await;
        let id = request.into_inner().id;
        require(&id, "id")?;

        let mut state = self.state.lock().unwrap();
        state.offers.remove(&id).ok_or_not_found("offer not found")?;
        Ok(Response::new(DeleteResponse { ok: true }))
    }
}

/// A fake offers service listening on a random local port
pub struct FakeServer {
    pub addr: SocketAddr,
    pub fake: FakeOffers,
    shutdown: Option<oneshot::Sender<()>>,
}

impl FakeServer {
    pub async fn start(fake: FakeOffers) -> Self {
        Self::spawn(fake, None).await
    }

    /// Serve over TLS with the given server identity
    pub async fn start_tls(fake: FakeOffers, tls: ServerTlsConfig) -> Self {
        Self::spawn(fake, Some(tls)).await
    }

    async fn spawn(fake: FakeOffers, tls: Option<ServerTlsConfig>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, signal) = oneshot::channel::<()>();

        let mut builder = Server::builder();
        if let Some(tls) = tls {
            builder = builder.tls_config(tls).unwrap();
        }

        let service = OffersServer::new(fake.clone());
        tokio::spawn(async move {
            builder
                .add_service(service)
                .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async {
                    let _ = signal.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            fake,
            shutdown: Some(shutdown),
        }
    }

    pub fn endpoint(&self) -> ServiceEndpoint {
        ServiceEndpoint::new("127.0.0.1", self.addr.port())
    }

    /// Connect a plaintext client to this server
    pub async fn client(&self, options: ClientOptions) -> OffersGrpcClient {
        OffersGrpcClient::connect_with(options, self.endpoint(), None)
            .await
            .expect("client should connect to the fake server")
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

pub fn test_options() -> ClientOptions {
    ClientOptions::new().with_caller(TEST_CALLER)
}

pub fn create_request() -> CreateOfferRequest {
    CreateOfferRequest {
        actor_id: TEST_ACTOR_ID.to_string(),
        participant_id: TEST_PARTICIPANT_ID.to_string(),
        transaction_id: TEST_TRANSACTION_ID.to_string(),
        requested_by: TEST_REQUESTER.to_string(),
        min: 12.0,
        max: 15.0,
        duration: Duration::from_secs(12 * 60).as_nanos() as i64,
        distance: 10.0,
        workflow_id: TEST_WORKFLOW_ID.to_string(),
        run_id: TEST_RUN_ID.to_string(),
        r#type: OfferType::Delivery as i32,
    }
}
