use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dealership document.
///
/// Only `id` and `state` are interpreted by the service; every other field of
/// the seed document (city, address, coordinates, names, ...) is kept in
/// `details` and returned unchanged.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealership {
    /// Identifier from the seed data
    pub id: i64,
    /// The state the dealership is located in
    pub state: String,
    /// Remaining descriptive fields
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptive_fields_pass_through() {
        let document = json!({
            "id": 1,
            "city": "El Paso",
            "state": "Texas",
            "address": "3 Nova Court",
            "zip": "88563",
            "lat": 31.6948,
            "long": -106.3,
            "short_name": "Holdlamis",
            "full_name": "Holdlamis Car Dealership"
        });

        let dealership: Dealership = serde_json::from_value(document.clone()).unwrap();
        assert_eq!(dealership.id, 1);
        assert_eq!(dealership.state, "Texas");
        assert_eq!(dealership.details["city"], "El Paso");
        assert!(!dealership.details.contains_key("state"));

        assert_eq!(serde_json::to_value(&dealership).unwrap(), document);
    }
}
