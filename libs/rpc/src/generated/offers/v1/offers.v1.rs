// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Offer {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub actor_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub participant_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub transaction_id: ::prost::alloc::string::String,
    #[prost(enumeration = "OfferStatus", tag = "5")]
    pub status: i32,
    #[prost(float, tag = "6")]
    pub min: f32,
    #[prost(float, tag = "7")]
    pub max: f32,
    #[prost(float, tag = "8")]
    pub value: f32,
    /// Estimated duration in nanoseconds.
    #[prost(int64, tag = "9")]
    pub duration: i64,
    #[prost(float, tag = "10")]
    pub distance: f32,
    #[prost(string, tag = "11")]
    pub schedule_id: ::prost::alloc::string::String,
    #[prost(string, tag = "12")]
    pub workflow_id: ::prost::alloc::string::String,
    #[prost(string, tag = "13")]
    pub run_id: ::prost::alloc::string::String,
    #[prost(enumeration = "OfferType", tag = "14")]
    pub r#type: i32,
    #[prost(string, tag = "15")]
    pub created_by: ::prost::alloc::string::String,
    #[prost(string, tag = "16")]
    pub updated_by: ::prost::alloc::string::String,
    /// Unix timestamps (seconds).
    #[prost(int64, tag = "17")]
    pub created_at: i64,
    #[prost(int64, tag = "18")]
    pub updated_at: i64,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct OfferStatusesRequest {}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct OfferStatusesResponse {
    #[prost(enumeration = "OfferStatus", repeated, tag = "1")]
    pub statuses: ::prost::alloc::vec::Vec<i32>,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct OfferTypesRequest {}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct OfferTypesResponse {
    #[prost(enumeration = "OfferType", repeated, tag = "1")]
    pub types: ::prost::alloc::vec::Vec<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateOfferRequest {
    #[prost(string, tag = "1")]
    pub actor_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub participant_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub transaction_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub requested_by: ::prost::alloc::string::String,
    #[prost(float, tag = "5")]
    pub min: f32,
    #[prost(float, tag = "6")]
    pub max: f32,
    #[prost(int64, tag = "7")]
    pub duration: i64,
    #[prost(float, tag = "8")]
    pub distance: f32,
    #[prost(string, tag = "9")]
    pub workflow_id: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub run_id: ::prost::alloc::string::String,
    #[prost(enumeration = "OfferType", tag = "11")]
    pub r#type: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateOfferRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(enumeration = "OfferStatus", tag = "2")]
    pub status: i32,
    #[prost(string, tag = "3")]
    pub schedule_id: ::prost::alloc::string::String,
    #[prost(float, tag = "4")]
    pub value: f32,
    #[prost(float, tag = "5")]
    pub min: f32,
    #[prost(float, tag = "6")]
    pub max: f32,
    #[prost(string, tag = "7")]
    pub requested_by: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetOfferRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetOffersRequest {
    #[prost(string, tag = "1")]
    pub actor_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub participant_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub transaction_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub schedule_id: ::prost::alloc::string::String,
    #[prost(enumeration = "OfferStatus", optional, tag = "5")]
    pub status: ::core::option::Option<i32>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteOfferRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OfferResponse {
    #[prost(message, optional, tag = "1")]
    pub offer: ::core::option::Option<Offer>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OffersResponse {
    #[prost(message, repeated, tag = "1")]
    pub offers: ::prost::alloc::vec::Vec<Offer>,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteResponse {
    #[prost(bool, tag = "1")]
    pub ok: bool,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OfferStatus {
    Open = 0,
    AcceptParticipant = 1,
    RejectParticipant = 2,
    AcceptActor = 3,
    RejectActor = 4,
    Scheduled = 5,
    InProgress = 6,
    Completed = 7,
    Cancelled = 8,
    Expired = 9,
}
impl OfferStatus {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::AcceptParticipant => "ACCEPT_PARTICIPANT",
            Self::RejectParticipant => "REJECT_PARTICIPANT",
            Self::AcceptActor => "ACCEPT_ACTOR",
            Self::RejectActor => "REJECT_ACTOR",
            Self::Scheduled => "SCHEDULED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Expired => "EXPIRED",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "OPEN" => Some(Self::Open),
            "ACCEPT_PARTICIPANT" => Some(Self::AcceptParticipant),
            "REJECT_PARTICIPANT" => Some(Self::RejectParticipant),
            "ACCEPT_ACTOR" => Some(Self::AcceptActor),
            "REJECT_ACTOR" => Some(Self::RejectActor),
            "SCHEDULED" => Some(Self::Scheduled),
            "IN_PROGRESS" => Some(Self::InProgress),
            "COMPLETED" => Some(Self::Completed),
            "CANCELLED" => Some(Self::Cancelled),
            "EXPIRED" => Some(Self::Expired),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OfferType {
    Delivery = 0,
}
impl OfferType {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Delivery => "DELIVERY",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "DELIVERY" => Some(Self::Delivery),
            _ => None,
        }
    }
}
