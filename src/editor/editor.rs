use geo::Point;
use log::info;

use crate::catalog::Catalog;
use crate::error::BoundaryError;
use crate::ring::BoundaryRing;
use crate::store::BoundaryStore;
use crate::types::FarmId;

/// Transient working state for one boundary being drawn or reshaped.
/// Exists only between `begin` and `commit`/`cancel`.
#[derive(Debug, Clone)]
pub struct EditorSession {
    farm_id: FarmId,
    working: BoundaryRing,
    dirty: bool,
}

impl EditorSession {
    #[inline] pub fn farm_id(&self) -> &FarmId { &self.farm_id }

    #[inline] pub fn working_ring(&self) -> &BoundaryRing { &self.working }

    #[inline] pub fn is_dirty(&self) -> bool { self.dirty }
}

/// Point-by-point construction and modification of a farm's boundary.
///
/// At most one session is active per editor: `Idle` moves to `Drawing` via
/// `begin`, and back via `commit` or `cancel`. The session owns a working
/// copy of the ring; the catalog and the store are untouched until a commit
/// succeeds.
#[derive(Debug, Default)]
pub struct BoundaryEditor {
    session: Option<EditorSession>,
}

impl BoundaryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start drawing a boundary for `farm_id`, seeded from `existing` when
    /// reshaping one already on record. Fails with `AlreadyEditing` while a
    /// session is active; the caller must commit or cancel it first.
    pub fn begin(
        &mut self,
        farm_id: FarmId,
        existing: Option<&BoundaryRing>,
    ) -> Result<(), BoundaryError> {
        if let Some(session) = &self.session {
            return Err(BoundaryError::AlreadyEditing { farm_id: session.farm_id.clone() });
        }

        self.session = Some(EditorSession {
            farm_id,
            working: existing.cloned().unwrap_or_default(),
            dirty: false,
        });
        Ok(())
    }

    /// Append a vertex (x = lng, y = lat) to the working ring. No upper
    /// bound, and consecutive duplicates are kept: repeated taps are
    /// legitimate field input, not a defect.
    pub fn add_point(&mut self, point: Point<f64>) -> Result<(), BoundaryError> {
        let session = self.session.as_mut().ok_or(BoundaryError::NotEditing)?;
        session.working.push(point);
        session.dirty = true;
        Ok(())
    }

    /// Reset the working ring to empty without leaving the session.
    pub fn clear_points(&mut self) -> Result<(), BoundaryError> {
        let session = self.session.as_mut().ok_or(BoundaryError::NotEditing)?;
        session.working.clear();
        session.dirty = true;
        Ok(())
    }

    /// Persist the working ring as the farm's new boundary.
    ///
    /// Below 3 points this fails with `InsufficientPoints` and the session
    /// stays open. A store failure yields `PersistenceFailure` with the
    /// working ring intact, so the user can retry; nothing is silently
    /// discarded. On success the session is destroyed and the catalog
    /// re-hydrated from the store of record.
    pub fn commit(
        &mut self,
        store: &dyn BoundaryStore,
        catalog: &mut Catalog,
    ) -> Result<(), BoundaryError> {
        let session = self.session.as_ref().ok_or(BoundaryError::NotEditing)?;

        if !session.working.is_complete() {
            return Err(BoundaryError::InsufficientPoints { got: session.working.len() });
        }

        store
            .replace_boundary(&session.farm_id, &session.working)
            .map_err(BoundaryError::PersistenceFailure)?;

        info!(
            "[editor] committed boundary of farm {} ({} points)",
            session.farm_id,
            session.working.len()
        );
        self.session = None;
        catalog.refresh(store)
    }

    /// Discard the working ring unconditionally and return to idle.
    /// Safe to call when no session is active.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    #[inline] pub fn is_editing(&self) -> bool { self.session.is_some() }

    pub fn editing_farm(&self) -> Option<&FarmId> {
        self.session.as_ref().map(|s| &s.farm_id)
    }

    /// The live working ring, for the map's draft layer.
    pub fn working_ring(&self) -> Option<&BoundaryRing> {
        self.session.as_ref().map(|s| &s.working)
    }

    pub fn is_dirty(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.dirty)
    }
}
