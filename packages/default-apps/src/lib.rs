//! Default applications - Load preferred-application candidates from XML.
//!
//! This crate reads the XML lists a desktop ships to describe candidate
//! default applications (web browsers, mail readers, terminals, media
//! players, image viewers, text editors, file managers and accessibility
//! tools), keeps only the entries whose executable is installed, and
//! collects them per category for a settings UI.
//!
//! # Example
//!
//! ```
//! use default_apps::{Capplet, Loader, LoaderConfig};
//! use default_apps::locale::LanguageNames;
//! use default_apps::path::SearchPath;
//!
//! let config = LoaderConfig::new("/nonexistent")
//!     .with_languages(LanguageNames::new(["C"]))
//!     .with_search_path(SearchPath::new(["/nonexistent/bin"]));
//!
//! let mut capplet = Capplet::new();
//! Loader::new(config).load_list(&mut capplet);
//! assert!(capplet.is_empty());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and loader settings
//! - [`error`]: Error types and Result alias
//! - [`locale`]: The user's acceptable languages
//! - [`path`]: Executable lookup on the search path
//! - [`xml`]: XML navigation and field extraction
//! - [`items`]: Typed default application records
//! - [`category`]: Categories and their XML tags
//! - [`capplet`]: The per-category aggregate
//! - [`loader`]: Directory and document loading
//! - [`cli`]: Command-line interface

pub mod capplet;
pub mod category;
pub mod cli;
pub mod config;
pub mod error;
pub mod items;
pub mod loader;
pub mod locale;
pub mod path;
pub mod xml;

// Re-export main functions
pub use loader::{load_capplet, Loader};

// Re-export commonly used items
pub use capplet::Capplet;
pub use category::Category;
pub use config::LoaderConfig;
pub use error::{DefaultAppsError, Result};
pub use items::{
    FileItem, GenericItem, ImageItem, Item, ItemKind, MobilityItem, SimpleItem, TermItem,
    TextItem, VisualItem, WebItem,
};
