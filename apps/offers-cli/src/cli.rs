use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use grpc_client::conversions::duration_to_nanos;
use offers_client::proto::{
    CreateOfferRequest, GetOffersRequest, OfferStatus, OfferType, UpdateOfferRequest,
};

#[derive(Parser, Debug)]
#[command(name = "offers-cli")]
#[command(about = "Call the offers service from the command line")]
pub struct Cli {
    /// Caller identity sent as `service-client` metadata
    #[arg(long)]
    pub caller: Option<String>,

    /// Dial timeout, also the upper bound for each call
    #[arg(long, default_value_t = 5000)]
    pub dial_timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List offer status values
    Statuses,

    /// List offer type values
    Types,

    /// Fetch one offer
    Get {
        #[arg(long)]
        id: String,
    },

    /// List offers matching a filter
    List(ListArgs),

    /// List offers attached to a schedule
    Schedule {
        #[arg(long)]
        schedule_id: String,
    },

    /// Create an offer
    Create(CreateArgs),

    /// Update an offer's status, schedule or price
    Update(UpdateArgs),

    /// Delete an offer
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, default_value = "")]
    pub actor_id: String,
    #[arg(long, default_value = "")]
    pub participant_id: String,
    #[arg(long, default_value = "")]
    pub transaction_id: String,
    #[arg(long, default_value = "")]
    pub schedule_id: String,
    /// Status name, e.g. `open` or `accept-participant`
    #[arg(long, value_parser = parse_status)]
    pub status: Option<OfferStatus>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub actor_id: String,
    #[arg(long)]
    pub participant_id: String,
    #[arg(long)]
    pub transaction_id: String,
    #[arg(long)]
    pub requested_by: String,
    #[arg(long, default_value_t = 0.0)]
    pub min: f32,
    #[arg(long, default_value_t = 0.0)]
    pub max: f32,
    /// Estimated duration in seconds
    #[arg(long, default_value_t = 0)]
    pub duration_secs: u64,
    #[arg(long, default_value_t = 0.0)]
    pub distance: f32,
    #[arg(long, default_value = "")]
    pub workflow_id: String,
    #[arg(long, default_value = "")]
    pub run_id: String,
    #[arg(long = "type", value_parser = parse_type, default_value = "delivery")]
    pub offer_type: OfferType,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long, value_parser = parse_status)]
    pub status: OfferStatus,
    #[arg(long)]
    pub requested_by: String,
    #[arg(long, default_value = "")]
    pub schedule_id: String,
    #[arg(long, default_value_t = 0.0)]
    pub value: f32,
    #[arg(long, default_value_t = 0.0)]
    pub min: f32,
    #[arg(long, default_value_t = 0.0)]
    pub max: f32,
}

impl From<ListArgs> for GetOffersRequest {
    fn from(args: ListArgs) -> Self {
        Self {
            actor_id: args.actor_id,
            participant_id: args.participant_id,
            transaction_id: args.transaction_id,
            schedule_id: args.schedule_id,
            status: args.status.map(|status| status as i32),
        }
    }
}

impl From<CreateArgs> for CreateOfferRequest {
    fn from(args: CreateArgs) -> Self {
        Self {
            actor_id: args.actor_id,
            participant_id: args.participant_id,
            transaction_id: args.transaction_id,
            requested_by: args.requested_by,
            min: args.min,
            max: args.max,
            duration: duration_to_nanos(Duration::from_secs(args.duration_secs)),
            distance: args.distance,
            workflow_id: args.workflow_id,
            run_id: args.run_id,
            r#type: args.offer_type as i32,
        }
    }
}

impl From<UpdateArgs> for UpdateOfferRequest {
    fn from(args: UpdateArgs) -> Self {
        Self {
            id: args.id,
            status: args.status as i32,
            schedule_id: args.schedule_id,
            value: args.value,
            min: args.min,
            max: args.max,
            requested_by: args.requested_by,
        }
    }
}

/// Accepts the proto name in any case, with `-` or `_` separators
fn proto_name(value: &str) -> String {
    value.trim().to_ascii_uppercase().replace('-', "_")
}

fn parse_status(value: &str) -> Result<OfferStatus, String> {
    OfferStatus::from_str_name(&proto_name(value))
        .ok_or_else(|| format!("unknown offer status '{value}'"))
}

fn parse_type(value: &str) -> Result<OfferType, String> {
    OfferType::from_str_name(&proto_name(value))
        .ok_or_else(|| format!("unknown offer type '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_names() {
        assert_eq!(parse_status("open"), Ok(OfferStatus::Open));
        assert_eq!(parse_status("accept-participant"), Ok(OfferStatus::AcceptParticipant));
        assert_eq!(parse_status("IN_PROGRESS"), Ok(OfferStatus::InProgress));
        assert!(parse_status("pending").is_err());
    }

    #[test]
    fn test_create_command() {
        let cli = Cli::try_parse_from([
            "offers-cli",
            "--caller",
            "ops",
            "create",
            "--actor-id",
            "shop-1",
            "--participant-id",
            "courier-1",
            "--transaction-id",
            "delivery-1",
            "--requested-by",
            "ops@example.com",
            "--duration-secs",
            "720",
        ])
        .unwrap();

        assert_eq!(cli.caller.as_deref(), Some("ops"));
        assert_eq!(cli.dial_timeout_ms, 5000);
        let Command::Create(args) = cli.command else {
            panic!("expected create command");
        };
        let request = CreateOfferRequest::from(args);
        assert_eq!(request.duration, 720_000_000_000);
        assert_eq!(request.r#type(), OfferType::Delivery);
    }

    #[test]
    fn test_list_command_status_filter() {
        let cli = Cli::try_parse_from([
            "offers-cli",
            "list",
            "--actor-id",
            "shop-1",
            "--status",
            "expired",
        ])
        .unwrap();
        assert!(cli.caller.is_none());
        let Command::List(args) = cli.command else {
            panic!("expected list command");
        };
        let request = GetOffersRequest::from(args);
        assert_eq!(request.actor_id, "shop-1");
        assert_eq!(request.status, Some(OfferStatus::Expired as i32));
    }

    #[test]
    fn test_update_requires_status() {
        let result = Cli::try_parse_from([
            "offers-cli",
            "update",
            "--id",
            "offer-1",
            "--requested-by",
            "ops@example.com",
        ]);
        assert!(result.is_err());
    }
}
