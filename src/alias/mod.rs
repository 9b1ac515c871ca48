pub mod loader;
pub mod table;

pub use loader::AliasEntry;
pub use table::{resolve, AliasTable, AliasTableError};
pub use crate::types::identifiers::AliasTableVersion;
