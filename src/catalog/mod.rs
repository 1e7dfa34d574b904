mod boundary;
mod catalog;
mod filter;

pub use boundary::FarmBoundary;
pub use catalog::Catalog;
pub use filter::BoundaryFilter;
