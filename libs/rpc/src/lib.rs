// @generated
// This file wires up buf-generated protobuf code from proto/offers/v1/offers.proto

pub mod offers {
    pub mod v1 {
        include!("generated/offers/v1/offers.v1.rs");
        include!("generated/offers/v1/offers.v1.tonic.rs");
    }
}
