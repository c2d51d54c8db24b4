pub mod doc;
pub mod error;

pub use doc::{ClassSymbol, FileDocs, FolderDocs, ModuleSymbols};
pub use error::{Result, SkelError};
