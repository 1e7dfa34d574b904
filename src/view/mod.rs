mod focus;
mod render;

pub use focus::{Focus, FocusController};
pub use render::{RenderFeature, render_set, render_set_bounds, render_set_to_geojson};
