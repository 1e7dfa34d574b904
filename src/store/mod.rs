#[cfg(feature = "http")]
mod http;
mod memory;
mod record;

#[cfg(feature = "http")]
pub use http::HttpStore;
pub use memory::MemoryStore;
pub use record::FarmRecord;

use anyhow::Result;

use crate::ring::BoundaryRing;
use crate::types::FarmId;

/// Narrow interface to the external farm-record store.
///
/// Writes are full overwrites with last-write-wins semantics; no concurrency
/// token is exchanged, so two clients editing the same farm will silently
/// lose one edit. Implementations block the caller until the store responds;
/// any timeout policy is theirs.
pub trait BoundaryStore {
    /// List every farm record, including farms without a boundary.
    fn list_boundaries(&self) -> Result<Vec<FarmRecord>>;

    /// Overwrite the boundary of `farm_id` with `ring`. Never a merge, and
    /// no other field of the farm record is touched.
    fn replace_boundary(&self, farm_id: &FarmId, ring: &BoundaryRing) -> Result<()>;
}
