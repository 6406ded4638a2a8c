//! Offers CLI
//!
//! Forwards one offers service operation per invocation and prints the
//! response. The service address and TLS material come from the same
//! environment as any other offers client (`OFFERS_SERVICE_HOST`,
//! `OFFERS_SERVICE_PORT`, `CERTS_PATH`).

use std::fmt::Debug;
use std::time::Duration;

use clap::Parser;
use core_config::Environment;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::{Result, WrapErr};
use offers_client::proto::{
    DeleteOfferRequest, GetOfferRequest, GetOffersRequest, OfferStatusesRequest, OfferTypesRequest,
};
use offers_client::{
    AbortHandle, CallOptions, CallResult, ClientOptions, OffersApi, OffersGrpcClient,
};
use tracing::{info, warn};

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let cli = Cli::parse();

    let mut options =
        ClientOptions::new().with_dial_timeout(Duration::from_millis(cli.dial_timeout_ms));
    if let Some(caller) = cli.caller {
        options = options.with_caller(caller);
    }

    let client = OffersGrpcClient::connect(options)
        .await
        .wrap_err("Failed to connect to the offers service")?;

    // Ctrl-C cancels the in-flight call; the client is still closed below
    let (abort, registration) = AbortHandle::new_pair();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling call");
            abort.abort();
        }
    });
    let call = CallOptions::new().abortable(registration);

    let result = run(&client, cli.command, call).await;
    interrupt.abort();

    client
        .close()
        .await
        .wrap_err("Failed to close the offers client")?;

    result
}

async fn run(client: &OffersGrpcClient, command: Command, call: CallOptions) -> Result<()> {
    match command {
        Command::Statuses => print(client.get_offer_statuses(OfferStatusesRequest {}, call).await),
        Command::Types => print(client.get_offer_types(OfferTypesRequest {}, call).await),
        Command::Get { id } => print(client.get_offer(GetOfferRequest { id }, call).await),
        Command::List(args) => print(client.get_offers(args.into(), call).await),
        Command::Schedule { schedule_id } => {
            let filter = GetOffersRequest {
                schedule_id,
                ..Default::default()
            };
            print(client.get_schedule_offers(filter, call).await)
        }
        Command::Create(args) => {
            info!(actor_id = %args.actor_id, transaction_id = %args.transaction_id, "Creating offer");
            print(client.create_offer(args.into(), call).await)
        }
        Command::Update(args) => {
            info!(offer_id = %args.id, "Updating offer");
            print(client.update_offer(args.into(), call).await)
        }
        Command::Delete { id } => print(client.delete_offer(DeleteOfferRequest { id }, call).await),
    }
}

fn print<T: Debug>(response: CallResult<T>) -> Result<()> {
    match response {
        Ok(response) => {
            println!("{response:#?}");
            Ok(())
        }
        Err(status) => Err(eyre::eyre!(
            "Offers service returned {:?}: {}",
            status.code(),
            status.message()
        )),
    }
}
