use std::sync::Arc;

use crate::ring::BoundaryRing;
use crate::types::{ApprovalStatus, FarmId};

/// A farm's boundary plus the display metadata the map and detail panel need.
///
/// Created when a farm record is hydrated from the store and replaced
/// wholesale on the next catalog refresh. Boundaries are never deleted here;
/// that is a farm-record operation outside this subsystem.
#[derive(Debug, Clone)]
pub struct FarmBoundary {
    pub farm_id: FarmId,
    /// `None` when the record had no parsable coordinates; the farm still
    /// shows in listings and search, just without a shape.
    pub ring: Option<BoundaryRing>,
    /// Mirrors the farm's approval state; read-only here.
    pub approval: ApprovalStatus,
    /// Farm name, the map label.
    pub label: Arc<str>,
    pub farmer_name: Arc<str>,
    pub region: Arc<str>,
    pub district: Arc<str>,
    pub crop_type: Arc<str>,
    /// Derived from `ring` on hydrate, never authoritative; 0.0 when the
    /// ring is absent or incomplete.
    pub area_m2: f64,
}

impl FarmBoundary {
    /// True iff the farm has a ring the map may draw.
    #[inline]
    pub fn has_shape(&self) -> bool {
        self.ring.as_ref().is_some_and(|r| r.is_complete())
    }

    /// Detail-panel line derived from farmer/crop/region data.
    pub fn descriptor(&self) -> String {
        [&self.farmer_name, &self.crop_type, &self.region, &self.district]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use geo::Point;

    use crate::ring::BoundaryRing;
    use crate::types::{ApprovalStatus, FarmId};

    use super::FarmBoundary;

    fn boundary(ring: Option<BoundaryRing>) -> FarmBoundary {
        FarmBoundary {
            farm_id: FarmId::new("farm-1"),
            ring,
            approval: ApprovalStatus::Pending,
            label: Arc::from("River plot"),
            farmer_name: Arc::from("Kofi Mensah"),
            region: Arc::from("Ashanti"),
            district: Arc::from(""),
            crop_type: Arc::from("Cocoa"),
            area_m2: 0.0,
        }
    }

    #[test]
    fn incomplete_or_absent_rings_are_not_shapes() {
        assert!(!boundary(None).has_shape());

        let short = BoundaryRing::from_points(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(!boundary(Some(short)).has_shape());

        let full = BoundaryRing::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        assert!(boundary(Some(full)).has_shape());
    }

    #[test]
    fn descriptor_skips_empty_fields() {
        assert_eq!(boundary(None).descriptor(), "Kofi Mensah, Cocoa, Ashanti");
    }
}
