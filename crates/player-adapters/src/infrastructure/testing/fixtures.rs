//! Simple test fixtures used across unit tests.

use augment_player_ports::{BridgeConstants, ProductDescriptor};

/// Event identifiers as the native module exports them
pub const TEST_PROGRESS_EVENT: &str = "AUGMENT_EVENT_LOADING_PROGRESS";
pub const TEST_OVER_EVENT: &str = "AUGMENT_EVENT_LOADING_OVER";

pub fn test_constants() -> BridgeConstants {
    BridgeConstants::new(TEST_PROGRESS_EVENT, TEST_OVER_EVENT)
}

pub fn sample_product() -> ProductDescriptor {
    ProductDescriptor::new(serde_json::json!({
        "identifier": "84",
        "brand": "Samsung",
        "name": "Galaxy S7",
        "ean": "8806088252034"
    }))
}
