//! Generic protobuf ↔ domain conversions
//!
//! Wire messages carry times as plain integers:
//! - Timestamps as `i64` Unix seconds (`0` when unset)
//! - Durations as `i64` nanoseconds
//!
//! ## Usage
//!
//! ```ignore
//! use grpc_client::conversions::*;
//! use chrono::Utc;
//! use std::time::Duration;
//!
//! let timestamp = datetime_to_timestamp(Utc::now());
//! let nanos = duration_to_nanos(Duration::from_secs(90));
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};

// ============================================================================
// Timestamp Conversions (Unix timestamp ↔ DateTime<Utc>)
// ============================================================================

/// Convert DateTime<Utc> to Unix timestamp (seconds since epoch)
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> i64 {
  dt.timestamp()
}

// ============================================================================
// Duration Conversions (nanoseconds ↔ Duration)
// ============================================================================

/// Convert a Duration to wire nanoseconds, saturating at `i64::MAX`
pub fn duration_to_nanos(duration: Duration) -> i64 {
  i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX)
}
