//! Typed sidebar tree.
//!
//! The tree mirrors the configuration literal one-to-one. Canonical output
//! (see [`SidebarNode::to_value`]) writes document references as bare
//! strings and every other node as an object tagged by `type`, omitting unset
//! optional attributes.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// One entry of a sidebar.
#[derive(Clone, Debug, PartialEq)]
pub enum SidebarNode {
    /// Shorthand document reference (`"intro"`).
    DocReference(String),
    /// Grouping node with ordered children.
    Category(Category),
    /// Structured document reference (`{type: "doc", id}`).
    DocLink(DocLink),
    /// Link to an arbitrary URL (`{type: "link", href, label}`).
    ExternalLink(ExternalLink),
    /// Placeholder expanded from a docs directory by the site engine.
    Autogenerated(Autogenerated),
}

/// Category node.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    /// Display label.
    pub label: String,
    /// Landing page of the category.
    pub link: Option<CategoryLink>,
    /// Ordered children.
    pub items: Vec<SidebarNode>,
    /// Initial collapsed state.
    pub collapsed: Option<bool>,
    /// Whether the category can be collapsed at all.
    pub collapsible: Option<bool>,
    /// Extra CSS class for the rendered entry.
    pub class_name: Option<String>,
    /// Opaque properties passed through to the renderer.
    pub custom_props: Option<Value>,
}

/// Landing page of a category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryLink {
    /// Landing page synthesized by the site engine.
    GeneratedIndex(GeneratedIndexLink),
    /// Landing page backed by an authored document.
    DocIndex(DocIndexLink),
}

/// `{type: "generated-index"}` category link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedIndexLink {
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub keywords: Vec<String>,
}

/// `{type: "doc", id}` category link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocIndexLink {
    /// Document shown when the category label is clicked.
    pub id: String,
}

/// `{type: "doc"}` item.
#[derive(Clone, Debug, PartialEq)]
pub struct DocLink {
    pub id: String,
    /// Label overriding the document title.
    pub label: Option<String>,
    pub class_name: Option<String>,
    pub custom_props: Option<Value>,
}

/// `{type: "link"}` item.
#[derive(Clone, Debug, PartialEq)]
pub struct ExternalLink {
    pub href: String,
    pub label: String,
    pub class_name: Option<String>,
    pub custom_props: Option<Value>,
}

/// `{type: "autogenerated"}` item.
#[derive(Clone, Debug, PartialEq)]
pub struct Autogenerated {
    /// Docs directory to generate entries from, relative to the docs root.
    pub dir_name: String,
    pub class_name: Option<String>,
    pub custom_props: Option<Value>,
}

impl SidebarNode {
    /// Document id of a leaf reference (`DocReference` or `DocLink`).
    #[must_use]
    pub fn doc_id(&self) -> Option<&str> {
        match self {
            Self::DocReference(id) => Some(id),
            Self::DocLink(link) => Some(&link.id),
            Self::Category(_) | Self::ExternalLink(_) | Self::Autogenerated(_) => None,
        }
    }

    /// Variant name as used by the `type` discriminator.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::DocReference(_) | Self::DocLink(_) => "doc",
            Self::Category(_) => "category",
            Self::ExternalLink(_) => "link",
            Self::Autogenerated(_) => "autogenerated",
        }
    }

    /// Canonical configuration literal for this node.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::DocReference(id) => Value::String(id.clone()),
            Self::Category(category) => category.to_value(),
            Self::DocLink(link) => {
                let mut obj = tagged("doc");
                obj.insert("id".to_owned(), Value::String(link.id.clone()));
                insert_opt(&mut obj, "label", link.label.as_deref());
                insert_common(&mut obj, link.class_name.as_deref(), link.custom_props.as_ref());
                Value::Object(obj)
            }
            Self::ExternalLink(link) => {
                let mut obj = tagged("link");
                obj.insert("href".to_owned(), Value::String(link.href.clone()));
                obj.insert("label".to_owned(), Value::String(link.label.clone()));
                insert_common(&mut obj, link.class_name.as_deref(), link.custom_props.as_ref());
                Value::Object(obj)
            }
            Self::Autogenerated(auto) => {
                let mut obj = tagged("autogenerated");
                obj.insert("dirName".to_owned(), Value::String(auto.dir_name.clone()));
                insert_common(&mut obj, auto.class_name.as_deref(), auto.custom_props.as_ref());
                Value::Object(obj)
            }
        }
    }
}

impl Category {
    /// Create a category with only a label and items.
    #[must_use]
    pub fn new(label: impl Into<String>, items: Vec<SidebarNode>) -> Self {
        Self {
            label: label.into(),
            link: None,
            items,
            collapsed: None,
            collapsible: None,
            class_name: None,
            custom_props: None,
        }
    }

    /// Attach a landing page link.
    #[must_use]
    pub fn with_link(mut self, link: CategoryLink) -> Self {
        self.link = Some(link);
        self
    }

    /// Document backing the category label, if the link is a `DocIndexLink`.
    #[must_use]
    pub fn index_doc(&self) -> Option<&str> {
        match &self.link {
            Some(CategoryLink::DocIndex(link)) => Some(&link.id),
            Some(CategoryLink::GeneratedIndex(_)) | None => None,
        }
    }

    fn to_value(&self) -> Value {
        let mut obj = tagged("category");
        obj.insert("label".to_owned(), Value::String(self.label.clone()));
        if let Some(link) = &self.link {
            obj.insert("link".to_owned(), link.to_value());
        }
        obj.insert(
            "items".to_owned(),
            Value::Array(self.items.iter().map(SidebarNode::to_value).collect()),
        );
        if let Some(collapsed) = self.collapsed {
            obj.insert("collapsed".to_owned(), Value::Bool(collapsed));
        }
        if let Some(collapsible) = self.collapsible {
            obj.insert("collapsible".to_owned(), Value::Bool(collapsible));
        }
        insert_common(&mut obj, self.class_name.as_deref(), self.custom_props.as_ref());
        Value::Object(obj)
    }
}

impl CategoryLink {
    /// Shorthand for a `{type: "doc", id}` link.
    #[must_use]
    pub fn doc(id: impl Into<String>) -> Self {
        Self::DocIndex(DocIndexLink { id: id.into() })
    }

    /// Shorthand for a generated index with a description.
    #[must_use]
    pub fn generated_index(description: impl Into<String>) -> Self {
        Self::GeneratedIndex(GeneratedIndexLink {
            description: Some(description.into()),
            ..GeneratedIndexLink::default()
        })
    }

    /// Canonical configuration literal for this link.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::DocIndex(link) => {
                let mut obj = tagged("doc");
                obj.insert("id".to_owned(), Value::String(link.id.clone()));
                Value::Object(obj)
            }
            Self::GeneratedIndex(index) => {
                let mut obj = tagged("generated-index");
                insert_opt(&mut obj, "title", index.title.as_deref());
                insert_opt(&mut obj, "description", index.description.as_deref());
                insert_opt(&mut obj, "slug", index.slug.as_deref());
                if !index.keywords.is_empty() {
                    obj.insert(
                        "keywords".to_owned(),
                        Value::Array(index.keywords.iter().cloned().map(Value::String).collect()),
                    );
                }
                Value::Object(obj)
            }
        }
    }
}

impl Serialize for SidebarNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl Serialize for CategoryLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

fn tagged(kind: &str) -> Map<String, Value> {
    let mut obj = Map::new();
    obj.insert("type".to_owned(), Value::String(kind.to_owned()));
    obj
}

fn insert_opt(obj: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        obj.insert(key.to_owned(), Value::String(value.to_owned()));
    }
}

fn insert_common(obj: &mut Map<String, Value>, class_name: Option<&str>, props: Option<&Value>) {
    insert_opt(obj, "className", class_name);
    if let Some(props) = props {
        obj.insert("customProps".to_owned(), props.clone());
    }
}
