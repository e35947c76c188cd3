//! Response envelope around an extracted record.
//!
//! The JSON API nests each record one level under its category key, next
//! to an `information` block:
//!
//! ```json
//! { "worlds": { ... }, "information": { "api_version": 3, "timestamp": "..." } }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::record::Record;

/// API version written into every envelope.
pub const API_VERSION: u32 = 3;

/// Metadata block of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Information {
    pub api_version: u32,
    /// Generation time, RFC 3339 UTC with second precision.
    pub timestamp: String,
}

impl Information {
    /// Information stamped with the given time.
    #[must_use]
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            api_version: API_VERSION,
            timestamp: format_timestamp(time),
        }
    }

    /// Information stamped with the current time.
    #[must_use]
    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

/// A record together with its information block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub record: Record,
    pub information: Information,
}

impl Envelope {
    /// Wrap a record, stamping it with the current time.
    #[must_use]
    pub fn new(record: Record) -> Self {
        Self::with_information(record, Information::now())
    }

    #[must_use]
    pub fn with_information(record: Record, information: Information) -> Self {
        Self {
            record,
            information,
        }
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.record.category().response_key(), &self.record)?;
        map.serialize_entry("information", &self.information)?;
        map.end()
    }
}

/// Format a UTC time the way every timestamp in the API is written.
#[must_use]
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
