use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::catalog::{Catalog, FarmBoundary};

use super::Focus;

/// One drawable boundary, as plain data for the map layer.
/// No presentation logic lives here; styling decisions key off `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFeature {
    pub farm_id: String,
    /// Ring vertices as `[lat, lng]`, implicitly closed.
    pub ring_points: Vec<[f64; 2]>,
    /// "approved" or "pending".
    pub status: String,
    pub title: String,
    pub description: String,
}

impl RenderFeature {
    fn from_boundary(boundary: &FarmBoundary) -> Option<Self> {
        let ring = boundary.ring.as_ref().filter(|r| r.is_complete())?;
        Some(Self {
            farm_id: boundary.farm_id.to_string(),
            ring_points: ring.iter().map(|p| [p.y(), p.x()]).collect(),
            status: boundary.approval.to_str().to_string(),
            title: boundary.label.to_string(),
            description: boundary.descriptor(),
        })
    }
}

/// Derive the set of boundaries the map should draw.
///
/// Always rederived from (catalog, focus), never patched in place, so a
/// catalog refresh updates what is shown by construction. `AllVisible`
/// yields every farm with a complete ring, in catalog order; `Focused`
/// yields exactly that farm's boundary, or nothing when it has no drawable
/// ring (the detail panel still reads its metadata from the catalog).
pub fn render_set(catalog: &Catalog, focus: &Focus) -> Vec<RenderFeature> {
    match focus {
        Focus::AllVisible => catalog.iter().filter_map(RenderFeature::from_boundary).collect(),
        Focus::Focused(farm_id) => catalog
            .get(farm_id)
            .and_then(RenderFeature::from_boundary)
            .into_iter()
            .collect(),
    }
}

/// Bounding box of every vertex in the set, in (lng, lat). `None` when
/// nothing is drawable. Presentation code uses this to fit the viewport.
pub fn render_set_bounds(features: &[RenderFeature]) -> Option<Rect<f64>> {
    let mut min = Coord { x: f64::INFINITY, y: f64::INFINITY };
    let mut max = Coord { x: f64::NEG_INFINITY, y: f64::NEG_INFINITY };
    let mut any = false;

    for &[lat, lng] in features.iter().flat_map(|f| &f.ring_points) {
        min.x = min.x.min(lng);
        min.y = min.y.min(lat);
        max.x = max.x.max(lng);
        max.y = max.y.max(lat);
        any = true;
    }

    any.then(|| Rect::new(min, max))
}

/// Export a render set as a GeoJSON FeatureCollection.
///
/// GeoJSON wants (lng, lat) order and an explicitly closed ring, so both are
/// rewritten here; status, title and description ship as feature properties
/// and the farm id doubles as the feature id.
pub fn render_set_to_geojson(features: &[RenderFeature]) -> Value {
    let features: Vec<Value> = features
        .iter()
        .map(|feature| {
            let mut ring: Vec<[f64; 2]> =
                feature.ring_points.iter().map(|&[lat, lng]| [lng, lat]).collect();
            if let Some(&first) = ring.first() {
                ring.push(first);
            }

            json!({
                "type": "Feature",
                "id": feature.farm_id,
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [ring],
                },
                "properties": {
                    "status": feature.status,
                    "title": feature.title,
                    "description": feature.description,
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
