//! Banner- and environment-specific inclusion/exclusion policies.
//!
//! Policies are data: named code lists per banner, with a small dispatch on
//! (banner, live?). In a live environment the exclusion lists trim the full
//! estate; in any non-live environment only the fixed test locations are
//! surfaced, so lower tiers exercise a small stable subset instead of the
//! whole directory.

use posbridge_core::AppEnv;

use crate::types::LocationRecord;

/// Banner value that selects the Shoe Palace endpoint and policy.
pub const SPC_BANNER: &str = "spc";

/// Shoe Palace stores that have closed but still appear in the source feed.
pub const SPC_CLOSED_LOCATIONS: [&str; 10] = [
    "1013", "1067", "1069", "1203", "1211", "1252", "1254", "9993", "9995", "9998",
];

/// Shoe Palace non-retail codes (warehouses, placeholders).
pub const SPC_OTHER_LOCATIONS: [&str; 7] = [
    "6000", "6001", "7001", "7777", "8001", "8002", "8888",
];

/// Shoe Palace test locations, the only ones surfaced outside live.
pub const SPC_TEST_LOCATIONS: [&str; 8] = [
    "9740", "9741", "9750", "9751", "9736", "9737", "9738", "9739",
];

/// DTLR test locations, the only ones surfaced outside live.
pub const DTLR_TEST_LOCATIONS: [&str; 7] = [
    "0780", "0800", "0810", "0820", "0830", "0840", "0850",
];

/// Regions excluded from the live DTLR estate.
pub const DTLR_EXCLUDED_REGIONS: [&str; 2] = ["Distribution Center", "E-Commerce"];

/// Placeholder location names excluded from the live DTLR estate.
pub const DTLR_EXCLUDED_NAMES: [&str; 3] = ["SA REQUIRED", "DO NOT USE", "Promo Use Only"];

/// Applies the policy selected by `(banner, app_env)` to the validated
/// records, preserving order. Banner comparison is exact-match; live-ness
/// comes from [`AppEnv::is_live`] (parsed case-insensitively upstream).
#[must_use]
pub fn filter_locations(
    banner: Option<&str>,
    app_env: AppEnv,
    records: Vec<LocationRecord>,
) -> Vec<LocationRecord> {
    let keep: fn(&LocationRecord) -> bool = match (banner, app_env.is_live()) {
        (Some(SPC_BANNER), true) => spc_live,
        (Some(SPC_BANNER), false) => spc_non_live,
        (_, true) => dtlr_live,
        (_, false) => dtlr_non_live,
    };

    records.into_iter().filter(keep).collect()
}

fn spc_live(record: &LocationRecord) -> bool {
    let code = record.location_code.as_str();
    !SPC_CLOSED_LOCATIONS.contains(&code)
        && !SPC_OTHER_LOCATIONS.contains(&code)
        && !SPC_TEST_LOCATIONS.contains(&code)
}

fn spc_non_live(record: &LocationRecord) -> bool {
    SPC_TEST_LOCATIONS.contains(&record.location_code.as_str())
}

fn dtlr_live(record: &LocationRecord) -> bool {
    !DTLR_EXCLUDED_REGIONS.contains(&record.region.as_str())
        && !DTLR_EXCLUDED_NAMES.contains(&record.location_name.as_str())
        && !DTLR_TEST_LOCATIONS.contains(&record.location_code.as_str())
}

fn dtlr_non_live(record: &LocationRecord) -> bool {
    DTLR_TEST_LOCATIONS.contains(&record.location_code.as_str())
}
