//! Validated sidebar registry.
//!
//! [`SidebarRegistry`] is built once by [`SidebarRegistry::validate`] and is
//! read-only afterwards. Sidebars are stored in declaration order with a
//! name index for O(1) lookups. Each sidebar's pagination order is computed
//! once at construction, and a document index maps every referenced id to
//! its first stop.

use std::collections::{HashMap, HashSet};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{SchemaError, SchemaWarning};
use crate::model::SidebarNode;
use crate::navigation::{BreadcrumbItem, NavItem, build_nav_items, find_trail};
use crate::order::{NodeHandle, Pagination, Stop, collect_stops};
use crate::path::NodePath;
use crate::raw::RawRegistry;
use crate::validate::{ValidationPolicy, Validator};

/// One named navigation tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Sidebar {
    /// Sidebar name (`sidebarId`).
    pub name: String,
    /// Top-level items in declared order.
    pub items: Vec<SidebarNode>,
    stops: Vec<Stop>,
}

impl Sidebar {
    pub(crate) fn new(name: String, items: Vec<SidebarNode>) -> Self {
        let stops = collect_stops(&items, &NodePath::sidebar(&name));
        Self { name, items, stops }
    }

    /// Pagination order of this sidebar.
    ///
    /// Depth-first pre-order over the tree: every document reference, plus
    /// every category whose link is a `DocIndexLink`, positioned before the
    /// category's children.
    #[must_use]
    pub fn order(&self) -> Vec<NodeHandle<'_>> {
        self.stops.iter().map(Stop::handle).collect()
    }
}

/// Validated, immutable mapping from sidebar name to sidebar.
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarRegistry {
    sidebars: Vec<Sidebar>,
    index: HashMap<String, usize>,
    /// Document id to (sidebar, position) of its first stop.
    doc_index: HashMap<String, (usize, usize)>,
    warnings: Vec<SchemaWarning>,
}

impl SidebarRegistry {
    pub(crate) fn new(sidebars: Vec<Sidebar>, warnings: Vec<SchemaWarning>) -> Self {
        let index = sidebars
            .iter()
            .enumerate()
            .map(|(i, sidebar)| (sidebar.name.clone(), i))
            .collect();

        let mut doc_index = HashMap::new();
        for (s, sidebar) in sidebars.iter().enumerate() {
            for (position, stop) in sidebar.stops.iter().enumerate() {
                doc_index.entry(stop.id.clone()).or_insert((s, position));
            }
        }

        Self {
            sidebars,
            index,
            doc_index,
            warnings,
        }
    }

    /// Validate a raw configuration literal.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] describing the first offending node.
    pub fn validate(raw: &RawRegistry, policy: &ValidationPolicy) -> Result<Self, SchemaError> {
        Validator::new(policy).registry(raw)
    }

    /// Get a sidebar by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Sidebar> {
        self.index.get(name).map(|&i| &self.sidebars[i])
    }

    /// All sidebars in declaration order.
    #[must_use]
    pub fn sidebars(&self) -> &[Sidebar] {
        &self.sidebars
    }

    /// Sidebar names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sidebars.iter().map(|sidebar| sidebar.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Soft findings recorded during validation.
    #[must_use]
    pub fn warnings(&self) -> &[SchemaWarning] {
        &self.warnings
    }

    /// Flatten one sidebar into its pagination order.
    ///
    /// Returns `None` if no sidebar has this name.
    #[must_use]
    pub fn resolve_order(&self, sidebar: &str) -> Option<Vec<NodeHandle<'_>>> {
        self.get(sidebar).map(Sidebar::order)
    }

    /// Name of the first sidebar (declaration order) whose pagination order
    /// contains `doc_id`.
    #[must_use]
    pub fn sidebar_for_doc(&self, doc_id: &str) -> Option<&str> {
        let &(s, _) = self.doc_index.get(doc_id)?;
        Some(self.sidebars[s].name.as_str())
    }

    /// Previous/next stops around the first occurrence of `doc_id`.
    ///
    /// Uses the first sidebar containing the document. Returns `None` if no
    /// sidebar contains it.
    #[must_use]
    pub fn pagination(&self, doc_id: &str) -> Option<Pagination<'_>> {
        let &(s, position) = self.doc_index.get(doc_id)?;
        let sidebar = &self.sidebars[s];
        Some(Pagination {
            sidebar: &sidebar.name,
            previous: position
                .checked_sub(1)
                .and_then(|p| sidebar.stops.get(p))
                .map(Stop::handle),
            next: sidebar.stops.get(position + 1).map(Stop::handle),
        })
    }

    /// Navigation tree of one sidebar for the rendering layer.
    #[must_use]
    pub fn navigation(&self, sidebar: &str) -> Option<Vec<NavItem>> {
        self.get(sidebar).map(|sidebar| build_nav_items(&sidebar.items))
    }

    /// Categories enclosing the first occurrence of `doc_id` in a sidebar,
    /// outermost first. The document itself is not included.
    ///
    /// Returns an empty list for unknown sidebars or documents.
    #[must_use]
    pub fn breadcrumbs(&self, sidebar: &str, doc_id: &str) -> Vec<BreadcrumbItem> {
        let Some(sidebar) = self.get(sidebar) else {
            return Vec::new();
        };

        let mut trail = Vec::new();
        if !find_trail(&sidebar.items, doc_id, &mut trail) {
            return Vec::new();
        }

        trail
            .into_iter()
            .map(|category| BreadcrumbItem {
                label: category.label.clone(),
                doc_id: category.index_doc().map(str::to_owned),
            })
            .collect()
    }

    /// Every document id referenced by any sidebar, in first-seen order.
    ///
    /// Includes leaf references and `DocIndexLink` targets; intended for the
    /// site engine's existence check.
    #[must_use]
    pub fn doc_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.sidebars
            .iter()
            .flat_map(|sidebar| &sidebar.stops)
            .map(|stop| stop.id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Canonical configuration literal of the registry.
    ///
    /// Validating the result yields a registry equal to `self`.
    #[must_use]
    pub fn to_raw(&self) -> RawRegistry {
        self.sidebars
            .iter()
            .map(|sidebar| {
                let items = sidebar.items.iter().map(SidebarNode::to_value).collect();
                (sidebar.name.clone(), Value::Array(items))
            })
            .collect()
    }
}

impl Serialize for SidebarRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sidebars.len()))?;
        for sidebar in &self.sidebars {
            map.serialize_entry(&sidebar.name, &sidebar.items)?;
        }
        map.end()
    }
}
