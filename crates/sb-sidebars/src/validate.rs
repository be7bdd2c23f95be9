//! Structural validation of the raw literal.
//!
//! Each node's variant is decided once by [`detect_variant`]: a plain string
//! is a document reference, an object is dispatched on its `type` attribute.
//! Anything else is rejected with the path of the node.
//!
//! Attributes are checked against a closed list per variant:
//!
//! | Variant | Accepted attributes |
//! |---------|---------------------|
//! | category | `label`, `link`, `items`, `collapsed`, `collapsible`, `className`, `customProps` |
//! | doc | `id`, `label`, `className`, `customProps` |
//! | link | `href`, `label`, `className`, `customProps` |
//! | autogenerated | `dirName`, `className`, `customProps` |
//! | generated-index link | `title`, `description`, `slug`, `keywords` |
//! | doc link | `id` |
//!
//! Any other attribute, including ones a site generator may understand such
//! as `key`, `description` on items or `autoAddBaseUrl`, is rejected as
//! `invalid-variant`. Per-item data for the rendering layer goes in
//! `customProps`, which is carried through untouched.

use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};

use crate::error::{SchemaError, SchemaWarning, WarningKind};
use crate::model::{
    Autogenerated, Category, CategoryLink, DocIndexLink, DocLink, ExternalLink,
    GeneratedIndexLink, SidebarNode,
};
use crate::path::NodePath;
use crate::raw::{RawRegistry, value_kind};
use crate::registry::{Sidebar, SidebarRegistry};

const CATEGORY_ATTRIBUTES: &[&str] = &[
    "type",
    "label",
    "link",
    "items",
    "collapsed",
    "collapsible",
    "className",
    "customProps",
];
const DOC_ATTRIBUTES: &[&str] = &["type", "id", "label", "className", "customProps"];
const LINK_ATTRIBUTES: &[&str] = &["type", "href", "label", "className", "customProps"];
const AUTOGENERATED_ATTRIBUTES: &[&str] = &["type", "dirName", "className", "customProps"];
const GENERATED_INDEX_ATTRIBUTES: &[&str] = &["type", "title", "description", "slug", "keywords"];
const DOC_INDEX_ATTRIBUTES: &[&str] = &["type", "id"];

/// Handling of a document listed twice in the same `items` list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Record a [`SchemaWarning`] and keep both entries.
    #[default]
    Warn,
    /// Fail with `SchemaError::DuplicateKey`.
    Error,
}

/// Handling of categories with no items and no link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyCategoryPolicy {
    /// Accept silently.
    Allow,
    /// Record a [`SchemaWarning`].
    #[default]
    Warn,
    /// Fail with `SchemaError::EmptyCategory`.
    Error,
}

/// Policy for soft findings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub duplicate_entries: DuplicatePolicy,
    pub empty_categories: EmptyCategoryPolicy,
}

impl ValidationPolicy {
    /// Policy that turns every soft finding into an error.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            duplicate_entries: DuplicatePolicy::Error,
            empty_categories: EmptyCategoryPolicy::Error,
        }
    }
}

/// Result of variant detection.
enum Variant<'a> {
    DocReference(&'a str),
    Category(&'a Map<String, Value>),
    DocLink(&'a Map<String, Value>),
    ExternalLink(&'a Map<String, Value>),
    Autogenerated(&'a Map<String, Value>),
}

/// Decide which variant a raw node is.
fn detect_variant<'a>(value: &'a Value, path: &NodePath) -> Result<Variant<'a>, SchemaError> {
    match value {
        Value::String(id) => Ok(Variant::DocReference(id.as_str())),
        Value::Object(obj) => match type_tag(obj, path)? {
            "category" => Ok(Variant::Category(obj)),
            "doc" => Ok(Variant::DocLink(obj)),
            "link" => Ok(Variant::ExternalLink(obj)),
            "autogenerated" => Ok(Variant::Autogenerated(obj)),
            other => Err(SchemaError::invalid(
                path,
                format!("unknown item type `{other}`"),
            )),
        },
        other => Err(SchemaError::invalid(
            path,
            format!(
                "expected a document id or an item object, found {}",
                value_kind(other)
            ),
        )),
    }
}

/// Validation state: policy plus collected warnings.
pub(crate) struct Validator<'p> {
    policy: &'p ValidationPolicy,
    warnings: Vec<SchemaWarning>,
}

impl<'p> Validator<'p> {
    pub(crate) fn new(policy: &'p ValidationPolicy) -> Self {
        Self {
            policy,
            warnings: Vec::new(),
        }
    }

    /// Validate the whole literal.
    pub(crate) fn registry(mut self, raw: &RawRegistry) -> Result<SidebarRegistry, SchemaError> {
        let mut sidebars: Vec<Sidebar> = Vec::with_capacity(raw.entries().len());
        let mut seen: HashSet<&str> = HashSet::new();

        for (name, value) in raw.entries() {
            let path = NodePath::sidebar(name);
            if name.trim().is_empty() {
                return Err(SchemaError::invalid(&path, "sidebar name must not be empty"));
            }
            if seen.contains(name.as_str()) {
                return Err(SchemaError::DuplicateKey {
                    path,
                    key: name.clone(),
                });
            }

            let Value::Array(values) = value else {
                return Err(SchemaError::invalid(
                    &path,
                    format!("sidebar must be a list of items, found {}", value_kind(value)),
                ));
            };
            let items = self.items(values, &path)?;

            tracing::debug!(sidebar = %name, item_count = items.len(), "Sidebar validated");
            seen.insert(name.as_str());
            sidebars.push(Sidebar::new(name.clone(), items));
        }

        Ok(SidebarRegistry::new(sidebars, self.warnings))
    }

    /// Validate an `items` list located at `list_path`.
    fn items(
        &mut self,
        values: &[Value],
        list_path: &NodePath,
    ) -> Result<Vec<SidebarNode>, SchemaError> {
        let nodes = values
            .iter()
            .enumerate()
            .map(|(i, value)| self.node(value, &list_path.index(i)))
            .collect::<Result<Vec<_>, _>>()?;
        self.check_duplicates(&nodes, list_path)?;
        Ok(nodes)
    }

    fn node(&mut self, value: &Value, path: &NodePath) -> Result<SidebarNode, SchemaError> {
        match detect_variant(value, path)? {
            Variant::DocReference(id) => {
                require_doc_id(id, path)?;
                Ok(SidebarNode::DocReference(id.to_owned()))
            }
            Variant::Category(obj) => self.category(obj, path).map(SidebarNode::Category),
            Variant::DocLink(obj) => doc_link(obj, path).map(SidebarNode::DocLink),
            Variant::ExternalLink(obj) => external_link(obj, path).map(SidebarNode::ExternalLink),
            Variant::Autogenerated(obj) => autogenerated(obj, path).map(SidebarNode::Autogenerated),
        }
    }

    fn category(
        &mut self,
        obj: &Map<String, Value>,
        path: &NodePath,
    ) -> Result<Category, SchemaError> {
        check_attributes(obj, CATEGORY_ATTRIBUTES, "category", path)?;
        let label = required_str(obj, "label", path)?;

        let link = match present(obj, "link") {
            Some(value) => Some(category_link(value, &path.field("link"))?),
            None => None,
        };

        let items_path = path.field("items");
        let items = match present(obj, "items") {
            Some(Value::Array(values)) => self.items(values, &items_path)?,
            Some(other) => {
                return Err(SchemaError::invalid(
                    &items_path,
                    format!("`items` must be a list, found {}", value_kind(other)),
                ));
            }
            None => {
                return Err(SchemaError::MissingField {
                    path: path.clone(),
                    field: "items",
                });
            }
        };

        // A category that only links to its landing page is a legitimate leaf.
        if items.is_empty() && link.is_none() {
            self.empty_category(label, path)?;
        }

        Ok(Category {
            label: label.to_owned(),
            link,
            items,
            collapsed: optional_bool(obj, "collapsed", path)?,
            collapsible: optional_bool(obj, "collapsible", path)?,
            class_name: optional_str(obj, "className", path)?.map(str::to_owned),
            custom_props: present(obj, "customProps").cloned(),
        })
    }

    fn empty_category(&mut self, label: &str, path: &NodePath) -> Result<(), SchemaError> {
        match self.policy.empty_categories {
            EmptyCategoryPolicy::Allow => Ok(()),
            EmptyCategoryPolicy::Warn => {
                tracing::warn!(path = %path, label, "Category has no items and no link");
                self.warnings.push(SchemaWarning {
                    path: path.clone(),
                    kind: WarningKind::EmptyCategory {
                        label: label.to_owned(),
                    },
                });
                Ok(())
            }
            EmptyCategoryPolicy::Error => Err(SchemaError::EmptyCategory {
                path: path.clone(),
                label: label.to_owned(),
            }),
        }
    }

    /// Flag sibling leaves that reference the same document.
    fn check_duplicates(
        &mut self,
        nodes: &[SidebarNode],
        list_path: &NodePath,
    ) -> Result<(), SchemaError> {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();

        for (i, node) in nodes.iter().enumerate() {
            let Some(id) = node.doc_id() else {
                continue;
            };
            if first_seen.insert(id, i).is_none() {
                continue;
            }

            let path = list_path.index(i);
            match self.policy.duplicate_entries {
                DuplicatePolicy::Error => {
                    return Err(SchemaError::DuplicateKey {
                        path,
                        key: id.to_owned(),
                    });
                }
                DuplicatePolicy::Warn => {
                    tracing::warn!(
                        path = %path,
                        id,
                        "Document listed twice in the same items list"
                    );
                    self.warnings.push(SchemaWarning {
                        path,
                        kind: WarningKind::DuplicateEntry { id: id.to_owned() },
                    });
                }
            }
        }

        Ok(())
    }
}

fn category_link(value: &Value, path: &NodePath) -> Result<CategoryLink, SchemaError> {
    let Value::Object(obj) = value else {
        return Err(SchemaError::invalid(
            path,
            format!("category link must be an object, found {}", value_kind(value)),
        ));
    };

    match type_tag(obj, path)? {
        "generated-index" => {
            check_attributes(obj, GENERATED_INDEX_ATTRIBUTES, "generated-index link", path)?;
            Ok(CategoryLink::GeneratedIndex(GeneratedIndexLink {
                title: optional_str(obj, "title", path)?.map(str::to_owned),
                description: optional_str(obj, "description", path)?.map(str::to_owned),
                slug: optional_str(obj, "slug", path)?.map(str::to_owned),
                keywords: optional_str_list(obj, "keywords", path)?,
            }))
        }
        "doc" => {
            check_attributes(obj, DOC_INDEX_ATTRIBUTES, "doc link", path)?;
            let id = required_str(obj, "id", path)?;
            require_doc_id(id, &path.field("id"))?;
            Ok(CategoryLink::DocIndex(DocIndexLink { id: id.to_owned() }))
        }
        other => Err(SchemaError::invalid(
            path,
            format!("unknown category link type `{other}`"),
        )),
    }
}

fn doc_link(obj: &Map<String, Value>, path: &NodePath) -> Result<DocLink, SchemaError> {
    check_attributes(obj, DOC_ATTRIBUTES, "doc item", path)?;
    let id = required_str(obj, "id", path)?;
    require_doc_id(id, &path.field("id"))?;

    Ok(DocLink {
        id: id.to_owned(),
        label: optional_str(obj, "label", path)?.map(str::to_owned),
        class_name: optional_str(obj, "className", path)?.map(str::to_owned),
        custom_props: present(obj, "customProps").cloned(),
    })
}

fn external_link(obj: &Map<String, Value>, path: &NodePath) -> Result<ExternalLink, SchemaError> {
    check_attributes(obj, LINK_ATTRIBUTES, "link item", path)?;
    let href = required_str(obj, "href", path)?;
    let label = required_str(obj, "label", path)?;
    if href.trim().is_empty() {
        return Err(SchemaError::invalid(&path.field("href"), "`href` must not be empty"));
    }

    Ok(ExternalLink {
        href: href.to_owned(),
        label: label.to_owned(),
        class_name: optional_str(obj, "className", path)?.map(str::to_owned),
        custom_props: present(obj, "customProps").cloned(),
    })
}

fn autogenerated(obj: &Map<String, Value>, path: &NodePath) -> Result<Autogenerated, SchemaError> {
    check_attributes(obj, AUTOGENERATED_ATTRIBUTES, "autogenerated item", path)?;
    let dir_name = required_str(obj, "dirName", path)?;

    Ok(Autogenerated {
        dir_name: dir_name.to_owned(),
        class_name: optional_str(obj, "className", path)?.map(str::to_owned),
        custom_props: present(obj, "customProps").cloned(),
    })
}

/// Read the `type` discriminator of an object node.
fn type_tag<'a>(obj: &'a Map<String, Value>, path: &NodePath) -> Result<&'a str, SchemaError> {
    match obj.get("type") {
        Some(Value::String(tag)) => Ok(tag.as_str()),
        Some(other) => Err(SchemaError::invalid(
            &path.field("type"),
            format!("`type` must be a string, found {}", value_kind(other)),
        )),
        None => Err(SchemaError::invalid(path, "object has no `type` attribute")),
    }
}

fn check_attributes(
    obj: &Map<String, Value>,
    allowed: &[&str],
    what: &str,
    path: &NodePath,
) -> Result<(), SchemaError> {
    match obj.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(SchemaError::invalid(
            path,
            format!("unknown attribute `{key}` on {what}"),
        )),
        None => Ok(()),
    }
}

/// Attribute value, treating an explicit `null` as absent.
fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|value| !value.is_null())
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
    path: &NodePath,
) -> Result<&'a str, SchemaError> {
    optional_str(obj, field, path)?.ok_or_else(|| SchemaError::MissingField {
        path: path.clone(),
        field,
    })
}

fn optional_str<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
    path: &NodePath,
) -> Result<Option<&'a str>, SchemaError> {
    match present(obj, field) {
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(SchemaError::invalid(
            &path.field(field),
            format!("`{field}` must be a string, found {}", value_kind(other)),
        )),
        None => Ok(None),
    }
}

fn optional_bool(
    obj: &Map<String, Value>,
    field: &'static str,
    path: &NodePath,
) -> Result<Option<bool>, SchemaError> {
    match present(obj, field) {
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(SchemaError::invalid(
            &path.field(field),
            format!("`{field}` must be a boolean, found {}", value_kind(other)),
        )),
        None => Ok(None),
    }
}

fn optional_str_list(
    obj: &Map<String, Value>,
    field: &'static str,
    path: &NodePath,
) -> Result<Vec<String>, SchemaError> {
    let Some(value) = present(obj, field) else {
        return Ok(Vec::new());
    };
    let field_path = path.field(field);
    let Value::Array(values) = value else {
        return Err(SchemaError::invalid(
            &field_path,
            format!("`{field}` must be a list of strings, found {}", value_kind(value)),
        ));
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(SchemaError::invalid(
                &field_path.index(i),
                format!("expected a string, found {}", value_kind(other)),
            )),
        })
        .collect()
}

fn require_doc_id(id: &str, path: &NodePath) -> Result<(), SchemaError> {
    if id.trim().is_empty() {
        return Err(SchemaError::invalid(path, "document id must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::error::SchemaErrorKind;

    fn raw(value: Value) -> RawRegistry {
        RawRegistry::from_value(value).unwrap()
    }

    fn validate(value: Value) -> Result<SidebarRegistry, SchemaError> {
        SidebarRegistry::validate(&raw(value), &ValidationPolicy::default())
    }

    fn validate_strict(value: Value) -> Result<SidebarRegistry, SchemaError> {
        SidebarRegistry::validate(&raw(value), &ValidationPolicy::strict())
    }

    #[test]
    fn test_validate_shorthand_and_category() {
        let registry = validate(json!({
            "docsSidebar": [
                "intro",
                {"type": "category", "label": "Overview", "items": ["overview/a", "overview/b"]}
            ]
        }))
        .unwrap();

        let sidebar = registry.get("docsSidebar").unwrap();
        assert_eq!(
            sidebar.items,
            vec![
                SidebarNode::DocReference("intro".to_owned()),
                SidebarNode::Category(Category::new(
                    "Overview",
                    vec![
                        SidebarNode::DocReference("overview/a".to_owned()),
                        SidebarNode::DocReference("overview/b".to_owned()),
                    ],
                )),
            ]
        );
        assert!(registry.warnings().is_empty());
    }

    #[test]
    fn test_validate_category_links() {
        let registry = validate(json!({
            "docs": [{
                "type": "category",
                "label": "Overview",
                "link": {"type": "generated-index", "description": "Overview Description"},
                "items": [{
                    "type": "category",
                    "label": "Architecture",
                    "link": {"type": "doc", "id": "overview/architecture"},
                    "items": ["overview/tags"]
                }]
            }]
        }))
        .unwrap();

        let SidebarNode::Category(outer) = &registry.get("docs").unwrap().items[0] else {
            panic!("expected category");
        };
        assert_eq!(outer.link, Some(CategoryLink::generated_index("Overview Description")));
        let SidebarNode::Category(inner) = &outer.items[0] else {
            panic!("expected nested category");
        };
        assert_eq!(inner.link, Some(CategoryLink::doc("overview/architecture")));
    }

    #[test]
    fn test_validate_generated_index_full() {
        let registry = validate(json!({
            "docs": [{
                "type": "category",
                "label": "Guides",
                "link": {
                    "type": "generated-index",
                    "title": "All guides",
                    "slug": "/guides",
                    "keywords": ["guides", "howto"]
                },
                "items": ["guides/a"]
            }]
        }))
        .unwrap();

        let SidebarNode::Category(category) = &registry.get("docs").unwrap().items[0] else {
            panic!("expected category");
        };
        assert_eq!(
            category.link,
            Some(CategoryLink::GeneratedIndex(GeneratedIndexLink {
                title: Some("All guides".to_owned()),
                description: None,
                slug: Some("/guides".to_owned()),
                keywords: vec!["guides".to_owned(), "howto".to_owned()],
            }))
        );
    }

    #[test]
    fn test_validate_other_item_types() {
        let registry = validate(json!({
            "docs": [
                {"type": "doc", "id": "intro", "label": "Start here"},
                {"type": "link", "href": "https://example.com", "label": "Example"},
                {"type": "autogenerated", "dirName": "guides"}
            ]
        }))
        .unwrap();

        let items = &registry.get("docs").unwrap().items;
        assert_eq!(items[0].doc_id(), Some("intro"));
        assert_eq!(items[1].type_name(), "link");
        assert_eq!(items[2].type_name(), "autogenerated");
    }

    #[test]
    fn test_duplicate_sidebar_name_is_error() {
        let raw: RawRegistry =
            serde_json::from_str(r#"{"docs": ["a"], "api": ["b"], "docs": ["c"]}"#).unwrap();

        let err = SidebarRegistry::validate(&raw, &ValidationPolicy::default()).unwrap_err();

        assert_eq!(err.kind(), SchemaErrorKind::DuplicateKey);
        assert_eq!(err.path().to_string(), "docs");
    }

    #[test]
    fn test_category_missing_label() {
        let err = validate(json!({"docs": ["intro", {"type": "category", "items": ["a"]}]}))
            .unwrap_err();

        assert_eq!(
            err,
            SchemaError::MissingField {
                path: NodePath::sidebar("docs").index(1),
                field: "label",
            }
        );
    }

    #[test]
    fn test_category_missing_items() {
        let err = validate(json!({"docs": [{"type": "category", "label": "A"}]})).unwrap_err();

        assert_eq!(err.kind(), SchemaErrorKind::MissingField);
        assert!(err.to_string().contains("`items`"));
    }

    #[test]
    fn test_doc_index_link_missing_id() {
        let err = validate(json!({
            "docs": [{"type": "category", "label": "A", "link": {"type": "doc"}, "items": ["a"]}]
        }))
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::MissingField {
                path: NodePath::sidebar("docs").index(0).field("link"),
                field: "id",
            }
        );
    }

    #[test]
    fn test_link_item_requires_href_and_label() {
        let err = validate(json!({"docs": [{"type": "link", "label": "X"}]})).unwrap_err();
        assert_eq!(err.kind(), SchemaErrorKind::MissingField);
        assert!(err.to_string().contains("`href`"));

        let err =
            validate(json!({"docs": [{"type": "link", "href": "https://x.dev"}]})).unwrap_err();
        assert!(err.to_string().contains("`label`"));
    }

    #[test]
    fn test_autogenerated_requires_dir_name() {
        let err = validate(json!({"docs": [{"type": "autogenerated"}]})).unwrap_err();

        assert_eq!(err.kind(), SchemaErrorKind::MissingField);
        assert!(err.to_string().contains("`dirName`"));
    }

    #[test]
    fn test_invalid_variant_number() {
        let err = validate(json!({"docs": ["intro", 42]})).unwrap_err();

        assert_eq!(err.kind(), SchemaErrorKind::InvalidVariant);
        assert_eq!(err.path().to_string(), "docs[1]");
    }

    #[test]
    fn test_invalid_variant_unknown_type() {
        let err = validate(json!({"docs": [{"type": "html", "value": "<hr>"}]})).unwrap_err();

        assert_eq!(err.kind(), SchemaErrorKind::InvalidVariant);
        assert!(err.to_string().contains("`html`"));
    }

    #[test]
    fn test_invalid_variant_object_without_type() {
        let err = validate(json!({"docs": [{"label": "A", "items": []}]})).unwrap_err();

        assert_eq!(err.kind(), SchemaErrorKind::InvalidVariant);
    }

    #[test]
    fn test_invalid_variant_nested_path() {
        let err = validate(json!({
            "docs": [{"type": "category", "label": "A", "items": ["a", ["nested"]]}]
        }))
        .unwrap_err();

        assert_eq!(err.path().to_string(), "docs[0].items[1]");
    }

    #[test]
    fn test_wrong_attribute_kind_is_invalid_variant() {
        let err = validate(json!({"docs": [{"type": "category", "label": 7, "items": []}]}))
            .unwrap_err();

        assert_eq!(err.kind(), SchemaErrorKind::InvalidVariant);
        assert_eq!(err.path().to_string(), "docs[0].label");
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let err = validate(json!({"docs": [{"type": "doc", "id": "a", "colour": "red"}]}))
            .unwrap_err();

        assert_eq!(err.kind(), SchemaErrorKind::InvalidVariant);
        assert!(err.to_string().contains("`colour`"));
    }

    #[test]
    fn test_generator_specific_attributes_rejected() {
        let cases = [
            (json!({"type": "category", "label": "C", "items": ["a"], "key": "c"}), "`key`"),
            (
                json!({"type": "category", "label": "C", "items": ["a"], "description": "d"}),
                "`description`",
            ),
            (
                json!({"type": "link", "href": "/x", "label": "X", "autoAddBaseUrl": false}),
                "`autoAddBaseUrl`",
            ),
        ];

        for (node, attribute) in cases {
            let err = validate(json!({"docs": [node]})).unwrap_err();
            assert_eq!(err.kind(), SchemaErrorKind::InvalidVariant);
            assert_eq!(err.path().to_string(), "docs[0]");
            assert!(err.to_string().contains(attribute), "{err}");
        }
    }

    #[test]
    fn test_custom_props_carried_through() {
        let registry = validate(json!({
            "docs": [{"type": "doc", "id": "a", "customProps": {"key": "a", "badge": "new"}}]
        }))
        .unwrap();

        let SidebarNode::DocLink(link) = &registry.get("docs").unwrap().items[0] else {
            panic!("expected a doc link");
        };
        assert_eq!(link.custom_props, Some(json!({"key": "a", "badge": "new"})));
    }

    #[test]
    fn test_unknown_category_link_type() {
        let err = validate(json!({
            "docs": [{"type": "category", "label": "A", "link": {"type": "page"}, "items": ["a"]}]
        }))
        .unwrap_err();

        assert_eq!(err.path().to_string(), "docs[0].link");
    }

    #[test]
    fn test_sidebar_must_be_list() {
        let err = validate(json!({"docs": {"type": "doc", "id": "a"}})).unwrap_err();

        assert_eq!(err.kind(), SchemaErrorKind::InvalidVariant);
        assert_eq!(err.path().to_string(), "docs");
    }

    #[test]
    fn test_empty_doc_id_rejected() {
        let err = validate(json!({"docs": ["  "]})).unwrap_err();

        assert_eq!(err.kind(), SchemaErrorKind::InvalidVariant);
    }

    #[test]
    fn test_empty_sidebar_name_rejected() {
        let err = validate(json!({"": ["a"]})).unwrap_err();

        assert_eq!(err.kind(), SchemaErrorKind::InvalidVariant);
    }

    #[test]
    fn test_duplicate_sibling_entries_warn_by_default() {
        let registry = validate(json!({"docs": ["intro", "guide", "intro"]})).unwrap();

        assert_eq!(
            registry.warnings(),
            &[SchemaWarning {
                path: NodePath::sidebar("docs").index(2),
                kind: WarningKind::DuplicateEntry {
                    id: "intro".to_owned()
                },
            }]
        );
        assert_eq!(registry.get("docs").unwrap().items.len(), 3);
    }

    #[test]
    fn test_duplicate_sibling_entries_error_when_strict() {
        let err = validate_strict(json!({
            "docs": [{"type": "category", "label": "A", "items": ["a", {"type": "doc", "id": "a"}]}]
        }))
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::DuplicateKey {
                path: NodePath::sidebar("docs").index(0).field("items").index(1),
                key: "a".to_owned(),
            }
        );
    }

    #[test]
    fn test_same_doc_in_different_lists_is_legal() {
        let registry = validate_strict(json!({
            "docs": [
                "a",
                {"type": "category", "label": "Again", "items": ["a"]}
            ],
            "other": [
                {
                    "type": "category",
                    "label": "X",
                    "link": {"type": "doc", "id": "overview/x"},
                    "items": ["b"]
                }
            ],
            "third": [
                {
                    "type": "category",
                    "label": "Y",
                    "link": {"type": "doc", "id": "overview/x"},
                    "items": ["c"]
                }
            ]
        }))
        .unwrap();

        assert!(registry.warnings().is_empty());
    }

    #[test]
    fn test_empty_category_policies() {
        let value = json!({"docs": [{"type": "category", "label": "Empty", "items": []}]});

        let warned = validate(value.clone()).unwrap();
        assert_eq!(
            warned.warnings()[0].kind,
            WarningKind::EmptyCategory {
                label: "Empty".to_owned()
            }
        );

        let allow = ValidationPolicy {
            empty_categories: EmptyCategoryPolicy::Allow,
            ..ValidationPolicy::default()
        };
        let allowed = SidebarRegistry::validate(&raw(value.clone()), &allow).unwrap();
        assert!(allowed.warnings().is_empty());

        let err = validate_strict(value).unwrap_err();
        assert_eq!(err.kind(), SchemaErrorKind::EmptyCategory);
    }

    #[test]
    fn test_empty_category_with_link_is_accepted() {
        let registry = validate_strict(json!({
            "docs": [{
                "type": "category",
                "label": "Landing",
                "link": {"type": "doc", "id": "landing"},
                "items": []
            }]
        }))
        .unwrap();

        assert!(registry.warnings().is_empty());
    }

    #[test]
    fn test_null_optional_attribute_treated_as_absent() {
        let registry = validate(json!({
            "docs": [{"type": "category", "label": "A", "link": null, "items": ["a"]}]
        }))
        .unwrap();

        let SidebarNode::Category(category) = &registry.get("docs").unwrap().items[0] else {
            panic!("expected category");
        };
        assert!(category.link.is_none());
    }
}
