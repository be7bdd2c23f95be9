//! Navigation tree for the rendering layer.

use serde::Serialize;

use crate::model::{Category, CategoryLink, SidebarNode};

/// Kind of a [`NavItem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavItemKind {
    Doc,
    Category,
    Link,
    Autogenerated,
}

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    #[serde(rename = "type")]
    pub kind: NavItemKind,
    /// Explicit label. Document titles are resolved by the site engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Document id, URL or directory, depending on `kind`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// True when the category landing page is synthesized.
    #[serde(rename = "generatedIndex", skip_serializing_if = "std::ops::Not::not")]
    pub generated_index: bool,
    /// Initial collapsed state (categories only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Category breadcrumb.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Category label.
    pub label: String,
    /// Category landing document, if it has one.
    #[serde(rename = "docId", skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
}

pub(crate) fn build_nav_items(items: &[SidebarNode]) -> Vec<NavItem> {
    items.iter().map(build_nav_item).collect()
}

fn build_nav_item(node: &SidebarNode) -> NavItem {
    match node {
        SidebarNode::DocReference(id) => leaf(NavItemKind::Doc, None, id),
        SidebarNode::DocLink(link) => leaf(NavItemKind::Doc, link.label.as_deref(), &link.id),
        SidebarNode::ExternalLink(link) => {
            leaf(NavItemKind::Link, Some(link.label.as_str()), &link.href)
        }
        SidebarNode::Autogenerated(auto) => leaf(NavItemKind::Autogenerated, None, &auto.dir_name),
        SidebarNode::Category(category) => NavItem {
            kind: NavItemKind::Category,
            label: Some(category.label.clone()),
            target: category.index_doc().map(str::to_owned),
            generated_index: matches!(category.link, Some(CategoryLink::GeneratedIndex(_))),
            collapsed: category.collapsed,
            children: build_nav_items(&category.items),
        },
    }
}

fn leaf(kind: NavItemKind, label: Option<&str>, target: &str) -> NavItem {
    NavItem {
        kind,
        label: label.map(str::to_owned),
        target: Some(target.to_owned()),
        generated_index: false,
        collapsed: None,
        children: Vec::new(),
    }
}

/// Push the categories enclosing `doc_id` onto `trail`.
///
/// Returns `true` once the document is found; `trail` then holds the
/// enclosing categories, outermost first.
pub(crate) fn find_trail<'a>(
    items: &'a [SidebarNode],
    doc_id: &str,
    trail: &mut Vec<&'a Category>,
) -> bool {
    for node in items {
        if let SidebarNode::Category(category) = node {
            if category.index_doc() == Some(doc_id) {
                return true;
            }
            trail.push(category);
            if find_trail(&category.items, doc_id, trail) {
                return true;
            }
            trail.pop();
        } else if node.doc_id() == Some(doc_id) {
            return true;
        }
    }
    false
}
