use crate::catalog::Catalog;
use crate::types::FarmId;

use super::{RenderFeature, render_set};

/// Which boundaries the map shows: everything, or one isolated farm.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    AllVisible,
    Focused(FarmId),
}

impl Focus {
    #[inline]
    pub fn focused_farm(&self) -> Option<&FarmId> {
        match self {
            Focus::AllVisible => None,
            Focus::Focused(farm_id) => Some(farm_id),
        }
    }
}

type RenderListener = Box<dyn FnMut(&[RenderFeature])>;

/// Tracks the focus state and pushes rederived render sets to subscribers.
///
/// The controller holds no map-library state; presentation code subscribes
/// here and owns the viewport. Selecting while focused on another farm is a
/// direct transition, and at most one farm is focused at a time by
/// construction.
#[derive(Default)]
pub struct FocusController {
    focus: Focus,
    listeners: Vec<RenderListener>,
}

impl FocusController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    /// Register a listener for render-set changes. Listeners fire on
    /// `select`, `clear_focus` and `catalog_refreshed`.
    pub fn subscribe(&mut self, listener: impl FnMut(&[RenderFeature]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Isolate one farm's boundary.
    pub fn select(&mut self, farm_id: FarmId, catalog: &Catalog) -> Vec<RenderFeature> {
        self.focus = Focus::Focused(farm_id);
        self.emit(catalog)
    }

    /// Show every complete boundary again.
    pub fn clear_focus(&mut self, catalog: &Catalog) -> Vec<RenderFeature> {
        self.focus = Focus::AllVisible;
        self.emit(catalog)
    }

    /// Rederive after the catalog was re-hydrated; the focus survives.
    pub fn catalog_refreshed(&mut self, catalog: &Catalog) -> Vec<RenderFeature> {
        self.emit(catalog)
    }

    fn emit(&mut self, catalog: &Catalog) -> Vec<RenderFeature> {
        let features = render_set(catalog, &self.focus);
        for listener in &mut self.listeners {
            listener(&features);
        }
        features
    }
}
