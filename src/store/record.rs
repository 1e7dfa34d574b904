use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A farm record as the store sends it.
///
/// Only `id`, `boundaryCoordinates` and `approved` carry subsystem meaning;
/// the remaining fields feed display labels and filters and default to empty
/// when the store omits them. `boundary_coordinates` stays raw JSON until it
/// passes through `parse_ring`; the store is loosely structured and this
/// crate validates in exactly one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmRecord {
    pub id: String,
    #[serde(default)]
    pub boundary_coordinates: Value,
    pub approved: bool,
    #[serde(default)]
    pub farm_name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub crop_type: String,
    #[serde(default)]
    pub farmer_name: String,
}
