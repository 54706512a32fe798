//! Asset discovery and naming.
//!
//! - [`scan`]: walk the scan root and list eligible files
//! - [`ident`]: derive the import alias / export name for one file
//! - [`collision`]: reject passes where two files share an export name

pub mod collision;
mod ext;
mod file;
pub mod ident;
mod scan;

// Types
pub use ext::{ExtensionSet, extension_of};
pub use file::{AssetEntry, AssetFile, is_hidden_name};
pub use ident::derive;

// Pipeline stages
pub use collision::check_unique;
pub use scan::scan_assets;
