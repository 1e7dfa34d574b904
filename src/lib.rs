#![doc = "Farmbound public API"]
mod catalog;
mod editor;
mod error;
mod ring;
mod store;
mod types;
mod view;

#[doc(inline)]
pub use types::{ApprovalStatus, FarmId};

#[doc(inline)]
pub use error::BoundaryError;

#[doc(inline)]
pub use ring::{BoundaryRing, METERS_PER_DEGREE, parse_ring, serialize_ring};

#[doc(inline)]
pub use catalog::{BoundaryFilter, Catalog, FarmBoundary};

#[doc(inline)]
pub use view::{Focus, FocusController, RenderFeature, render_set, render_set_bounds, render_set_to_geojson};

#[doc(inline)]
pub use editor::{BoundaryEditor, EditorSession};

#[doc(inline)]
pub use store::{BoundaryStore, FarmRecord, MemoryStore};

#[cfg(feature = "http")]
#[doc(inline)]
pub use store::HttpStore;
