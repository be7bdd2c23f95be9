//! Pagination order.
//!
//! A sidebar's order is the depth-first, pre-order sequence of its navigable
//! stops. It drives the next/previous links rendered under each document.

use serde::Serialize;

use crate::model::SidebarNode;
use crate::path::NodePath;

/// What kind of node produced a stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopKind {
    /// Document reference (shorthand string or `DocLink`).
    Doc,
    /// Category whose landing page is an authored document.
    CategoryIndex,
}

/// One stop of a sidebar's pagination order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeHandle<'a> {
    /// Document id.
    pub id: &'a str,
    /// Explicit label (`DocLink` label or category label), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    pub kind: StopKind,
    /// Location of the node in the configuration.
    #[serde(skip)]
    pub path: NodePath,
}

/// Previous/next stops around a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pagination<'a> {
    /// Sidebar the pagination was computed in.
    pub sidebar: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<NodeHandle<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NodeHandle<'a>>,
}

/// Owned stop computed once when a sidebar is validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Stop {
    pub(crate) id: String,
    label: Option<String>,
    kind: StopKind,
    path: NodePath,
}

impl Stop {
    pub(crate) fn handle(&self) -> NodeHandle<'_> {
        NodeHandle {
            id: &self.id,
            label: self.label.as_deref(),
            kind: self.kind,
            path: self.path.clone(),
        }
    }
}

/// Stops of `items` (located at `list_path`) in pre-order.
pub(crate) fn collect_stops(items: &[SidebarNode], list_path: &NodePath) -> Vec<Stop> {
    let mut stops = Vec::new();
    push_stops(items, list_path, &mut stops);
    stops
}

fn push_stops(items: &[SidebarNode], list_path: &NodePath, out: &mut Vec<Stop>) {
    for (i, node) in items.iter().enumerate() {
        let (id, label, kind) = match node {
            SidebarNode::DocReference(id) => (id.as_str(), None, StopKind::Doc),
            SidebarNode::DocLink(link) => (link.id.as_str(), link.label.as_deref(), StopKind::Doc),
            SidebarNode::Category(category) => {
                let path = list_path.index(i);
                if let Some(id) = category.index_doc() {
                    out.push(Stop {
                        id: id.to_owned(),
                        label: Some(category.label.clone()),
                        kind: StopKind::CategoryIndex,
                        path: path.clone(),
                    });
                }
                push_stops(&category.items, &path.field("items"), out);
                continue;
            }
            SidebarNode::ExternalLink(_) | SidebarNode::Autogenerated(_) => continue,
        };
        out.push(Stop {
            id: id.to_owned(),
            label: label.map(str::to_owned),
            kind,
            path: list_path.index(i),
        });
    }
}
