//! Client for the JDNA retail-locations API and the pipeline that turns its
//! raw store directory into a keyed [`types::LocationDirectory`] for
//! point-of-sale provisioning.
//!
//! The pipeline has four stages, run sequentially by
//! [`client::JdnaClient::get_locations`]:
//!
//! 1. fetch — one GET against the banner-selected endpoint ([`client`])
//! 2. validate — per-record schema check, best effort ([`validate`])
//! 3. filter — banner- and environment-specific policy ([`policy`])
//! 4. rekey — channel-prefixed store codes ([`directory`])

pub mod client;
pub mod directory;
pub mod error;
pub mod policy;
pub mod types;
pub mod validate;

pub use client::JdnaClient;
pub use error::JdnaError;
pub use types::{Channel, LocationDirectory, LocationEntry, LocationRecord};
