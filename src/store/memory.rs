use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Result, bail};

use crate::ring::{BoundaryRing, serialize_ring};
use crate::types::FarmId;

use super::{BoundaryStore, FarmRecord};

/// In-memory `BoundaryStore` for tests and offline use.
///
/// Writes mutate the held records, so a subsequent `list_boundaries` sees the
/// replacement the way a re-hydration from the remote store would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    farms: Mutex<Vec<FarmRecord>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new(farms: Vec<FarmRecord>) -> Self {
        Self { farms: Mutex::new(farms), fail_writes: AtomicBool::new(false) }
    }

    /// Make every subsequent `replace_boundary` fail, to exercise
    /// persistence-failure paths.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Snapshot of the held records.
    pub fn records(&self) -> Vec<FarmRecord> {
        self.farms.lock().unwrap().clone()
    }
}

impl BoundaryStore for MemoryStore {
    fn list_boundaries(&self) -> Result<Vec<FarmRecord>> {
        Ok(self.farms.lock().unwrap().clone())
    }

    fn replace_boundary(&self, farm_id: &FarmId, ring: &BoundaryRing) -> Result<()> {
        if self.fail_writes.load(Ordering::Relaxed) {
            bail!("write rejected (fail_writes is set)");
        }

        let mut farms = self.farms.lock().unwrap();
        match farms.iter_mut().find(|f| f.id == farm_id.as_str()) {
            Some(farm) => {
                farm.boundary_coordinates = serialize_ring(ring);
                Ok(())
            }
            None => bail!("unknown farm: {farm_id}"),
        }
    }
}
