pub mod fixtures;
pub mod store;
pub mod yard;

pub use store::{CatalogStore, YardFilter};
pub use yard::{Amenity, Yard, YardSummary};
