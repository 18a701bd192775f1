//! Adyen management API payload models.
//!
//! Shapes follow the management API wire format: camelCase fields, a
//! `_links` paging envelope on list responses, and HAL-style `self` links on
//! individual resources.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Minimal store identity as tracked against the management API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdyenRecord {
    pub id: String,
    pub merchant_id: String,
}

/// A location keyed by its management-API store id.
///
/// The body mirrors a directory location record with `location_short_name`,
/// `location_code`, and `active_flag` omitted; identity lives in `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdyenLocation {
    pub id: String,
    pub value: AdyenLocationBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdyenLocationBody {
    pub location_name: String,
    pub region: String,
    pub channel: String,
    /// Remaining location attributes, passed through untouched.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, Value>,
}

/// A single HAL link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Paging links on list responses. `first`/`last`/`next` are absent on
/// single-page results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(rename = "self")]
    pub self_link: Link,
}

/// Response envelope for `GET /terminals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalsResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub items_total: u32,
    pub pages_total: u32,
    pub data: Vec<TerminalData>,
}

/// Response envelope for `GET /stores`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoresResponse {
    #[serde(rename = "_links")]
    pub links: Links,
    pub items_total: u32,
    pub pages_total: u32,
    pub data: Vec<StoreData>,
}

/// A store as returned by the management API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    pub id: String,
    pub description: String,
    pub reference: String,
    pub status: String,
    pub merchant_id: String,
    pub phone_number: String,
    pub address: Address,
    #[serde(rename = "_links")]
    pub links: SelfLink,
}

/// Link block carrying only the resource's own URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfLink {
    #[serde(rename = "self")]
    pub self_link: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    #[serde(default)]
    pub line3: String,
    pub city: String,
    pub postal_code: String,
    pub state_or_province: String,
    pub country: String,
}

/// A payment terminal and its current assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalData {
    pub id: String,
    pub model: String,
    pub serial_number: String,
    pub firmware_version: String,
    pub assignment: Assignment,
    pub connectivity: Connectivity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub company_id: String,
    pub merchant_id: String,
    pub store_id: String,
    pub status: String,
    pub reassignment_target: ReassignmentTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassignmentTarget {
    pub inventory: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connectivity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cellular: Option<Cellular>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wifi: Option<Wifi>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cellular {
    pub iccid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wifi {
    pub ip_address: String,
    pub mac_address: String,
}

/// Webhook sent when a terminal is boarded to a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalBoardWebhook {
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: String,
    pub environment: String,
    pub data: TerminalBoardData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalBoardData {
    pub company_id: String,
    pub merchant_id: String,
    pub store_id: String,
    pub unique_terminal_id: String,
}

/// Response envelope for store listings that carry the external reference
/// and shopper statement alongside the base store fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdyenStoresReturn {
    #[serde(rename = "_links")]
    pub links: Links,
    pub items_total: u32,
    pub pages_total: u32,
    pub data: Vec<AdyenStoreReturnItem>,
}

/// A store item from [`AdyenStoresReturn`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdyenStoreReturnItem {
    pub id: String,
    pub address: Address,
    pub description: String,
    pub external_reference_id: String,
    pub merchant_id: String,
    pub phone_number: String,
    pub reference: String,
    pub shopper_statement: String,
    pub status: String,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// Payload for creating a store, echoed back with id and links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCreate {
    pub id: String,
    pub address: Address,
    pub description: String,
    pub merchant_id: String,
    pub shopper_statement: String,
    pub phone_number: String,
    pub reference: String,
    pub status: String,
    #[serde(rename = "_links")]
    pub links: SelfLink,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminals_response_deserializes() {
        let body = serde_json::json!({
            "_links": {
                "first": { "href": "https://management.example.com/terminals?pageNumber=1" },
                "last": { "href": "https://management.example.com/terminals?pageNumber=3" },
                "next": { "href": "https://management.example.com/terminals?pageNumber=2" },
                "self": { "href": "https://management.example.com/terminals?pageNumber=1" }
            },
            "itemsTotal": 55,
            "pagesTotal": 3,
            "data": [
                {
                    "id": "S1F2-000150000000001",
                    "model": "S1F2",
                    "serialNumber": "000150000000001",
                    "firmwareVersion": "1.80.9",
                    "assignment": {
                        "companyId": "CM001",
                        "merchantId": "ME001",
                        "storeId": "ST001",
                        "status": "boarded",
                        "reassignmentTarget": { "inventory": false }
                    },
                    "connectivity": {
                        "cellular": { "iccid": "8910390000012345678" },
                        "wifi": { "ipAddress": "10.0.4.21", "macAddress": "00:1B:44:11:3A:B7" }
                    }
                }
            ]
        });

        let parsed: TerminalsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.items_total, 55);
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].assignment.store_id, "ST001");
        assert_eq!(
            parsed.data[0].connectivity.wifi.as_ref().unwrap().ip_address,
            "10.0.4.21"
        );
    }

    #[test]
    fn terminals_response_allows_missing_connectivity_blocks() {
        let body = serde_json::json!({
            "_links": { "self": { "href": "https://management.example.com/terminals" } },
            "itemsTotal": 1,
            "pagesTotal": 1,
            "data": [
                {
                    "id": "V400m-324689776",
                    "model": "V400m",
                    "serialNumber": "324689776",
                    "firmwareVersion": "1.77.4",
                    "assignment": {
                        "companyId": "CM001",
                        "merchantId": "ME001",
                        "storeId": "ST002",
                        "status": "inventory",
                        "reassignmentTarget": { "inventory": true }
                    },
                    "connectivity": {}
                }
            ]
        });

        let parsed: TerminalsResponse = serde_json::from_value(body).unwrap();
        assert!(parsed.links.next.is_none());
        assert!(parsed.data[0].connectivity.cellular.is_none());
        assert!(parsed.data[0].connectivity.wifi.is_none());
    }

    #[test]
    fn stores_response_deserializes() {
        let body = serde_json::json!({
            "_links": { "self": { "href": "https://management.example.com/stores" } },
            "itemsTotal": 1,
            "pagesTotal": 1,
            "data": [
                {
                    "id": "ST001",
                    "description": "DTLR Lexington Market",
                    "reference": "DTLR0100",
                    "status": "active",
                    "merchantId": "ME001",
                    "phoneNumber": "+14105550100",
                    "address": {
                        "line1": "1 Main St",
                        "line2": "",
                        "line3": "",
                        "city": "Baltimore",
                        "postalCode": "21201",
                        "stateOrProvince": "MD",
                        "country": "US"
                    },
                    "_links": { "self": { "href": "https://management.example.com/stores/ST001" } }
                }
            ]
        });

        let parsed: StoresResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.data[0].reference, "DTLR0100");
        assert_eq!(parsed.data[0].address.city, "Baltimore");
    }

    #[test]
    fn board_webhook_deserializes() {
        let body = serde_json::json!({
            "type": "terminal.boarded",
            "createdAt": "2025-11-03T10:15:12+01:00",
            "environment": "live",
            "data": {
                "companyId": "CM001",
                "merchantId": "ME001",
                "storeId": "ST001",
                "uniqueTerminalId": "S1F2-000150000000001"
            }
        });

        let parsed: TerminalBoardWebhook = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.event_type, "terminal.boarded");
        assert_eq!(parsed.data.unique_terminal_id, "S1F2-000150000000001");
    }

    #[test]
    fn adyen_location_deserializes_with_passthrough_attributes() {
        let body = serde_json::json!({
            "id": "ST001",
            "value": {
                "location_name": "Lexington Market",
                "region": "Mid-Atlantic",
                "channel": "DTLR",
                "address": { "line1": "1 Main St", "city": "Baltimore" },
                "latitude": 39.29
            }
        });

        let parsed: AdyenLocation = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.id, "ST001");
        assert_eq!(parsed.value.location_name, "Lexington Market");
        assert_eq!(parsed.value.channel, "DTLR");
        assert!(parsed.value.attributes.contains_key("address"));
        assert!(parsed.value.attributes.contains_key("latitude"));

        // Identity fields stay out of the body.
        let rendered = serde_json::to_value(&parsed.value).unwrap();
        assert!(rendered.get("location_code").is_none());
        assert!(rendered.get("location_short_name").is_none());
        assert!(rendered.get("active_flag").is_none());
    }

    #[test]
    fn adyen_record_deserializes() {
        let body = serde_json::json!({ "id": "ST001", "merchantId": "ME001" });
        let parsed: AdyenRecord = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.id, "ST001");
        assert_eq!(parsed.merchant_id, "ME001");
    }

    #[test]
    fn stores_return_deserializes() {
        let body = serde_json::json!({
            "_links": { "self": { "href": "https://management.example.com/stores" } },
            "itemsTotal": 1,
            "pagesTotal": 1,
            "data": [
                {
                    "id": "ST001",
                    "address": {
                        "line1": "1 Main St",
                        "city": "Baltimore",
                        "postalCode": "21201",
                        "stateOrProvince": "MD",
                        "country": "US"
                    },
                    "description": "DTLR Lexington Market",
                    "externalReferenceId": "DTLR0100",
                    "merchantId": "ME001",
                    "phoneNumber": "+14105550100",
                    "reference": "DTLR0100",
                    "shopperStatement": "DTLR",
                    "status": "active",
                    "_links": {
                        "self": { "href": "https://management.example.com/stores/ST001" }
                    }
                }
            ]
        });

        let parsed: AdyenStoresReturn = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.items_total, 1);
        assert_eq!(parsed.data[0].external_reference_id, "DTLR0100");
        assert_eq!(parsed.data[0].shopper_statement, "DTLR");
        assert!(parsed.data[0].links.next.is_none());
    }

    #[test]
    fn store_create_round_trips() {
        let create = StoreCreate {
            id: "ST003".to_string(),
            address: Address {
                line1: "170 S Market St".to_string(),
                line2: String::new(),
                line3: String::new(),
                city: "San Jose".to_string(),
                postal_code: "95113".to_string(),
                state_or_province: "CA".to_string(),
                country: "US".to_string(),
            },
            description: "Shoe Palace San Jose".to_string(),
            merchant_id: "ME002".to_string(),
            shopper_statement: "SHOE PALACE".to_string(),
            phone_number: "+14085550100".to_string(),
            reference: "SPC1001".to_string(),
            status: "active".to_string(),
            links: SelfLink {
                self_link: Link {
                    href: "https://management.example.com/stores/ST003".to_string(),
                },
            },
        };

        let value = serde_json::to_value(&create).unwrap();
        assert_eq!(value["merchantId"], "ME002");
        assert!(value["_links"]["self"]["href"]
            .as_str()
            .unwrap()
            .ends_with("ST003"));
        let back: StoreCreate = serde_json::from_value(value).unwrap();
        assert_eq!(back.reference, "SPC1001");
    }
}
