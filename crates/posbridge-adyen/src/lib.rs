//! Data contracts for the Adyen terminal-management API.
//!
//! Pure serde models with no logic attached: terminal-assignment and
//! store-provisioning workflows deserialize these payloads independently of
//! the locations pipeline.

pub mod types;

pub use types::{
    Address, AdyenLocation, AdyenLocationBody, AdyenRecord, AdyenStoreReturnItem,
    AdyenStoresReturn, Assignment, Cellular, Connectivity, Link, Links, ReassignmentTarget,
    SelfLink, StoreCreate, StoreData, StoresResponse, TerminalBoardData, TerminalBoardWebhook,
    TerminalData, TerminalsResponse, Wifi,
};
