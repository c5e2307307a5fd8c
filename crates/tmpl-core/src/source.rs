//! # Loading Documents and Templates
//!
//! Converts parsed JSON/YAML into [`Document`] and [`Template`] trees, and
//! loads them from files.
//!
//! - JSON objects become branches. Key order is preserved (`serde_json`
//!   is built with `preserve_order`), so file order drives leaf order.
//! - Document leaves: integers that fit in `i64` become `Integer`, every
//!   other number becomes `Float`, arrays become `List`.
//! - Template leaves must be strings naming a [`TypeTag`].
//!
//! YAML input is deserialized straight into a JSON value, so both formats
//! go through one code path.

use std::path::Path;

use serde_json::Value as Json;

use crate::error::TmplError;
use crate::tree::{Document, Mapping, Node, Template};
use crate::value::{TypeTag, Value};

/// Build a document from a parsed JSON value. The root must be an object.
pub fn document_from_json(json: &Json) -> Result<Document, TmplError> {
    let object = root_object(json, "document")?;
    document_mapping(object, "")
}

/// Build a template from a parsed JSON value. The root must be an object
/// and every leaf must name a type tag.
pub fn template_from_json(json: &Json) -> Result<Template, TmplError> {
    let object = root_object(json, "template")?;
    template_mapping(object, "")
}

/// Read a document file (JSON, or YAML by extension).
pub fn load_document(path: &Path) -> Result<Document, TmplError> {
    let json = load_json_value(path)?;
    let document = document_from_json(&json)?;
    tracing::info!(path = %path.display(), entries = document.len(), "loaded document");
    Ok(document)
}

/// Read a template file (JSON, or YAML by extension).
pub fn load_template(path: &Path) -> Result<Template, TmplError> {
    let json = load_json_value(path)?;
    let template = template_from_json(&json)?;
    tracing::info!(path = %path.display(), entries = template.len(), "loaded template");
    Ok(template)
}

/// Read a file and parse it as JSON, or as YAML when the extension is
/// `.yaml`/`.yml`.
pub fn load_json_value(path: &Path) -> Result<Json, TmplError> {
    let content = std::fs::read_to_string(path).map_err(|e| TmplError::Load {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "yaml" | "yml" => serde_yaml::from_str::<Json>(&content).map_err(|e| TmplError::Load {
            path: path.display().to_string(),
            reason: format!("invalid YAML: {e}"),
        }),
        _ => serde_json::from_str(&content).map_err(|e| TmplError::Load {
            path: path.display().to_string(),
            reason: format!("invalid JSON: {e}"),
        }),
    }
}

fn root_object<'a>(
    json: &'a Json,
    what: &'static str,
) -> Result<&'a serde_json::Map<String, Json>, TmplError> {
    json.as_object().ok_or_else(|| TmplError::NotAMapping {
        what,
        found: describe(json).to_string(),
    })
}

fn document_mapping(
    object: &serde_json::Map<String, Json>,
    prefix: &str,
) -> Result<Document, TmplError> {
    let mut mapping = Mapping::new();
    for (key, json) in object {
        let path = join_path(prefix, key);
        let node = match json {
            Json::Object(inner) => Node::Branch(document_mapping(inner, &path)?),
            other => Node::Leaf(leaf_value(other, &path)?),
        };
        mapping.insert(key.clone(), node);
    }
    Ok(mapping)
}

fn leaf_value(json: &Json, path: &str) -> Result<Value, TmplError> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Ok(Value::Integer(i)),
            None => n.as_f64().map(Value::Float).ok_or_else(|| {
                TmplError::Serialization(format!("number at '{path}' is not representable: {n}"))
            }),
        },
        Json::String(s) => Ok(Value::Text(s.clone())),
        Json::Array(items) => {
            let values: Result<Vec<Value>, TmplError> = items
                .iter()
                .enumerate()
                .map(|(i, item)| leaf_value(item, &format!("{path}[{i}]")))
                .collect();
            Ok(Value::List(values?))
        }
        Json::Object(_) => Err(TmplError::Serialization(format!(
            "mapping inside a list at '{path}' is not supported"
        ))),
    }
}

fn template_mapping(
    object: &serde_json::Map<String, Json>,
    prefix: &str,
) -> Result<Template, TmplError> {
    let mut mapping = Mapping::new();
    for (key, json) in object {
        let path = join_path(prefix, key);
        let node = match json {
            Json::Object(inner) => Node::Branch(template_mapping(inner, &path)?),
            Json::String(name) => {
                let tag = name
                    .parse::<TypeTag>()
                    .map_err(|_| TmplError::InvalidTemplateLeaf {
                        path: path.clone(),
                        found: format!("unknown type {name:?}"),
                    })?;
                Node::Leaf(tag)
            }
            other => {
                return Err(TmplError::InvalidTemplateLeaf {
                    path,
                    found: describe(other).to_string(),
                })
            }
        };
        mapping.insert(key.clone(), node);
    }
    Ok(mapping)
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn describe(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "a list",
        Json::Object(_) => "a mapping",
    }
}
