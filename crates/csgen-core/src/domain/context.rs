//! Template context snapshot.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// Name → value mapping shared by every template render in a run.
///
/// Built once from the context struct a generator declares; read-only after
/// that.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetadataContext {
    values: Map<String, Value>,
}

impl MetadataContext {
    /// Snapshot a serializable value.
    ///
    /// Structs and maps become the top-level names; unit values give an
    /// empty context. Anything else cannot be addressed by name and is
    /// rejected.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, DomainError> {
        let value = serde_json::to_value(value)
            .map_err(|e| DomainError::InvalidContext(e.to_string()))?;

        match value {
            Value::Object(values) => Ok(Self { values }),
            Value::Null => Ok(Self::default()),
            other => Err(DomainError::InvalidContext(format!(
                "expected a struct or map, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Resolve a dotted path such as `presenter.name` or `views.0`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.values.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The context as a JSON object, for renderers that take one.
    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a map",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Presenter {
        name: String,
        events: Vec<String>,
    }

    #[derive(Serialize)]
    struct TriadContext {
        name: String,
        namespace: String,
        presenter: Presenter,
        with_tests: bool,
    }

    fn sample() -> TriadContext {
        TriadContext {
            name: "Login".into(),
            namespace: "Puzzle".into(),
            presenter: Presenter {
                name: "LoginPresenter".into(),
                events: vec!["Submit".into(), "Cancel".into()],
            },
            with_tests: true,
        }
    }

    #[test]
    fn struct_fields_become_top_level_names() {
        let ctx = MetadataContext::from_serialize(&sample()).unwrap();
        let mut keys: Vec<_> = ctx.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["name", "namespace", "presenter", "with_tests"]);
        assert_eq!(ctx.get("name"), Some(&json!("Login")));
        assert_eq!(ctx.get("with_tests"), Some(&json!(true)));
    }

    #[test]
    fn dotted_access_reaches_nested_values() {
        let ctx = MetadataContext::from_serialize(&sample()).unwrap();
        assert_eq!(ctx.get("presenter.name"), Some(&json!("LoginPresenter")));
        assert_eq!(ctx.get("presenter.events.1"), Some(&json!("Cancel")));
        assert!(ctx.get("presenter.events.7").is_none());
        assert!(ctx.get("presenter.missing").is_none());
        assert!(ctx.get("name.length").is_none());
    }

    #[test]
    fn unit_context_is_empty() {
        #[derive(Serialize)]
        struct Nothing;

        let ctx = MetadataContext::from_serialize(&Nothing).unwrap();
        assert!(ctx.is_empty());
    }

    #[test]
    fn maps_are_accepted() {
        let mut map = BTreeMap::new();
        map.insert("project", "Puzzle");
        let ctx = MetadataContext::from_serialize(&map).unwrap();
        assert_eq!(ctx.len(), 1);
        assert!(ctx.contains("project"));
    }

    #[test]
    fn scalars_are_rejected() {
        let err = MetadataContext::from_serialize("just a string").unwrap_err();
        assert!(matches!(err, DomainError::InvalidContext(_)));
    }

    #[test]
    fn to_value_is_an_object() {
        let ctx = MetadataContext::from_serialize(&sample()).unwrap();
        assert!(ctx.to_value().is_object());
    }
}
