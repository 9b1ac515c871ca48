pub mod catalog;
pub mod cultivar;
pub mod raw;

pub use catalog::{Catalog, CatalogError};
pub use cultivar::{Cultivar, CultivarStatus};
pub use raw::RawCultivar;
