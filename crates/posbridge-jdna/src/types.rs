//! Location record types returned by the JDNA locations API.
//!
//! The API returns an open-ended JSON object per store; the fields the
//! pipeline branches on are modeled explicitly and everything else (address,
//! geo, hours, ...) is carried through a flattened map so downstream
//! consumers see it verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated store record from the locations API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Partner-assigned store identifier, unique within a banner.
    pub location_code: String,
    pub location_short_name: String,
    pub location_name: String,
    pub region: String,
    /// Retail channel label, e.g. `"DTLR"` or `"Shoe Palace"`. Kept as a
    /// string through validation; the rekeyer decides what it recognizes.
    pub channel: String,
    pub active_flag: bool,
    /// Remaining location attributes, passed through untouched.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, Value>,
}

/// Output value for a single directory entry: a [`LocationRecord`] with
/// `location_code` and `channel` removed — identity lives in the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub location_short_name: String,
    pub location_name: String,
    pub region: String,
    pub active_flag: bool,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, Value>,
}

/// The final keyed mapping: `<channel prefix><location_code>` to entry.
pub type LocationDirectory = BTreeMap<String, LocationEntry>;

/// Retail channels the rekeyer produces directory entries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Dtlr,
    ShoePalace,
}

impl Channel {
    /// Maps a channel label to a known channel. Returns `None` for any label
    /// outside the recognized set.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Channel> {
        match label {
            "DTLR" => Some(Channel::Dtlr),
            "Shoe Palace" => Some(Channel::ShoePalace),
            _ => None,
        }
    }

    /// Prefix prepended to `location_code` to form the directory key.
    #[must_use]
    pub fn key_prefix(self) -> &'static str {
        match self {
            Channel::Dtlr => "DTLR",
            Channel::ShoePalace => "SPC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_from_label_known() {
        assert_eq!(Channel::from_label("DTLR"), Some(Channel::Dtlr));
        assert_eq!(Channel::from_label("Shoe Palace"), Some(Channel::ShoePalace));
    }

    #[test]
    fn channel_from_label_unknown() {
        assert_eq!(Channel::from_label("dtlr"), None);
        assert_eq!(Channel::from_label("ShoePalace"), None);
        assert_eq!(Channel::from_label(""), None);
    }

    #[test]
    fn channel_key_prefixes() {
        assert_eq!(Channel::Dtlr.key_prefix(), "DTLR");
        assert_eq!(Channel::ShoePalace.key_prefix(), "SPC");
    }

    #[test]
    fn record_captures_extra_fields_via_flatten() {
        let raw = serde_json::json!({
            "location_code": "0042",
            "location_short_name": "MAIN",
            "location_name": "Main Street",
            "region": "Northeast",
            "channel": "DTLR",
            "active_flag": true,
            "address": { "line1": "1 Main St", "city": "Baltimore" },
            "latitude": 39.29
        });

        let record: LocationRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.location_code, "0042");
        assert!(record.attributes.contains_key("address"));
        assert!(record.attributes.contains_key("latitude"));
    }
}
