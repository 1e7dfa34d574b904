use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use crate::error::BoundaryError;
use crate::ring::parse_ring;
use crate::store::{BoundaryStore, FarmRecord};
use crate::types::{ApprovalStatus, FarmId};

use super::{BoundaryFilter, FarmBoundary};

/// Hydrated collection of every known farm boundary.
///
/// The catalog is a pure projection of the store: it is rebuilt wholesale by
/// `load_all`/`refresh` and mutated no other way. Farms whose coordinates
/// fail to parse stay listed (search, detail panel) without a shape.
#[derive(Debug, Default)]
pub struct Catalog {
    index: HashMap<FarmId, u32>, // farm_id -> position in `boundaries`
    boundaries: Vec<FarmBoundary>,
}

impl Catalog {
    /// Hydrate a catalog from the store's full farm listing.
    ///
    /// A store failure yields `LoadFailure` and no catalog; the caller
    /// presents empty, never partial or stale. A bad coordinate payload only
    /// costs that one farm its shape.
    pub fn load_all(store: &dyn BoundaryStore) -> Result<Self, BoundaryError> {
        let records = store.list_boundaries().map_err(BoundaryError::LoadFailure)?;

        let mut catalog = Self::default();
        for record in records {
            catalog.insert(record);
        }

        debug!("[catalog] hydrated {} farms", catalog.len());
        Ok(catalog)
    }

    /// Full re-hydration from the store of record, run after every committed
    /// edit. Never a partial patch.
    pub fn refresh(&mut self, store: &dyn BoundaryStore) -> Result<(), BoundaryError> {
        *self = Self::load_all(store)?;
        Ok(())
    }

    fn insert(&mut self, record: FarmRecord) {
        let farm_id = FarmId::new(&record.id);

        let ring = match parse_ring(&record.boundary_coordinates) {
            Ok(ring) if ring.is_empty() => None,
            Ok(ring) => Some(ring),
            Err(err) => {
                warn!("[catalog] skipping shape of farm {farm_id}: {err}");
                None
            }
        };
        let area_m2 = ring.as_ref().map_or(0.0, |r| r.area_m2());

        self.index.insert(farm_id.clone(), self.boundaries.len() as u32);
        self.boundaries.push(FarmBoundary {
            farm_id,
            ring,
            approval: ApprovalStatus::from_approved(record.approved),
            label: Arc::from(record.farm_name.as_str()),
            farmer_name: Arc::from(record.farmer_name.as_str()),
            region: Arc::from(record.region.as_str()),
            district: Arc::from(record.district.as_str()),
            crop_type: Arc::from(record.crop_type.as_str()),
            area_m2,
        });
    }

    #[inline] pub fn len(&self) -> usize { self.boundaries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.boundaries.is_empty() }

    pub fn get(&self, farm_id: &FarmId) -> Option<&FarmBoundary> {
        self.index.get(farm_id).map(|&i| &self.boundaries[i as usize])
    }

    pub fn iter(&self) -> impl Iterator<Item = &FarmBoundary> {
        self.boundaries.iter()
    }

    /// Apply a filter query; see `BoundaryFilter` for the match semantics.
    pub fn filter(&self, query: &BoundaryFilter) -> Vec<&FarmBoundary> {
        self.boundaries.iter().filter(|b| query.matches(b)).collect()
    }

    /// Distinct region names, sorted, for filter drop-downs.
    pub fn regions(&self) -> Vec<Arc<str>> {
        let mut regions: Vec<Arc<str>> = self
            .boundaries
            .iter()
            .filter(|b| !b.region.is_empty())
            .map(|b| b.region.clone())
            .collect();
        regions.sort();
        regions.dedup();
        regions
    }
}
