//! Collaborators of the creation flow.
//!
//! The core only sees these traits. Real implementations (remote product
//! API, device camera, database) live with the host; the ones here are
//! in-process stand-ins.

mod camera;
mod lookup;
mod repository;

pub use camera::{Camera, FileCamera};
pub use lookup::{CatalogLookup, LookupError, ProductLookup};
pub use repository::{InMemoryItemRepository, ItemRepository, RepositoryError};
