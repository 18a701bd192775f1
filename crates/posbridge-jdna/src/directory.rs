//! Rekeying of filtered records into the channel-prefixed directory.

use crate::types::{Channel, LocationDirectory, LocationEntry, LocationRecord};

/// Builds the directory keyed by `<channel prefix><location_code>`.
///
/// Records with an unrecognized channel produce no entry; the drop is logged
/// at debug level so the loss is diagnosable. If two records map to the same
/// key the last one wins and a warning names the key.
#[must_use]
pub fn build_directory(records: Vec<LocationRecord>) -> LocationDirectory {
    let mut directory = LocationDirectory::new();

    for record in records {
        let LocationRecord {
            location_code,
            location_short_name,
            location_name,
            region,
            channel,
            active_flag,
            attributes,
        } = record;

        let Some(known) = Channel::from_label(&channel) else {
            tracing::debug!(
                location_code = %location_code,
                channel = %channel,
                "unrecognized channel, record skipped"
            );
            continue;
        };

        let key = format!("{}{location_code}", known.key_prefix());
        let entry = LocationEntry {
            location_short_name,
            location_name,
            region,
            active_flag,
            attributes,
        };

        if directory.insert(key.clone(), entry).is_some() {
            tracing::warn!(key = %key, "duplicate directory key, previous entry overwritten");
        }
    }

    directory
}
