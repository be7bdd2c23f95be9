//! Sidebar registry for documentation sites.
//!
//! This crate provides:
//! - [`RawRegistry`]: the unvalidated configuration literal
//! - [`SidebarRegistry`]: the validated, immutable tree of sidebars
//! - Pagination order, navigation trees and breadcrumbs derived from it
//!
//! The crate performs structural validation only. Whether referenced
//! documents exist is decided by the site engine consuming the registry.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sb_sidebars::{RawRegistry, SidebarRegistry, ValidationPolicy};
//!
//! let raw: RawRegistry = serde_json::from_str(
//!     r#"{"docsSidebar": ["intro", {"type": "category", "label": "Guides", "items": ["a"]}]}"#,
//! )?;
//! let registry = SidebarRegistry::validate(&raw, &ValidationPolicy::default())?;
//!
//! let order = registry.resolve_order("docsSidebar").unwrap_or_default();
//! assert_eq!(order.len(), 2);
//! # Ok(())
//! # }
//! ```

mod error;
mod model;
mod navigation;
mod order;
mod path;
mod raw;
mod registry;
mod validate;

pub use error::{SchemaError, SchemaErrorKind, SchemaWarning, WarningKind};
pub use model::{
    Autogenerated, Category, CategoryLink, DocIndexLink, DocLink, ExternalLink,
    GeneratedIndexLink, SidebarNode,
};
pub use navigation::{BreadcrumbItem, NavItem, NavItemKind};
pub use order::{NodeHandle, Pagination, StopKind};
pub use path::NodePath;
pub use raw::RawRegistry;
pub use registry::{Sidebar, SidebarRegistry};
pub use validate::{DuplicatePolicy, EmptyCategoryPolicy, ValidationPolicy};
