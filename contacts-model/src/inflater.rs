//! Turning stored row values into user-facing text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::resources::{ResourceResolver, resource_text};
use crate::EditType;
use contacts_types::ResId;

/// Read access to one row of data, as materialized from a query.
pub trait DataRow {
    fn get_str(&self, column: &str) -> Option<&str>;

    /// Integer value of `column`. The default parses the string value.
    fn get_i64(&self, column: &str) -> Option<i64> {
        self.get_str(column).and_then(|s| s.trim().parse().ok())
    }
}

/// Plain column→value map of pending edits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentValues(Map<String, Value>);

impl ContentValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(column.into(), value.into());
        self
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.put(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.0.remove(column)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl DataRow for ContentValues {
    fn get_str(&self, column: &str) -> Option<&str> {
        self.0.get(column).and_then(Value::as_str)
    }

    fn get_i64(&self, column: &str) -> Option<i64> {
        match self.0.get(column)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Strategy for rendering a row of a data kind as text.
///
/// The query-row and pending-edit entry points must agree for equivalent
/// data; the default for pending edits reads them as a row.
pub trait StringInflater: Send + Sync {
    fn inflate_row(&self, resolver: &dyn ResourceResolver, row: &dyn DataRow) -> Option<String>;

    fn inflate_values(
        &self,
        resolver: &dyn ResourceResolver,
        values: &ContentValues,
    ) -> Option<String> {
        self.inflate_row(resolver, values)
    }
}

/// Renders a column value, a string resource, or the column value formatted
/// into the string resource when both are present.
#[derive(Debug, Clone, Default)]
pub struct SimpleInflater {
    column: Option<String>,
    string_res: ResId,
}

impl SimpleInflater {
    pub fn column(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            string_res: ResId::UNSET,
        }
    }

    pub fn string_res(string_res: ResId) -> Self {
        Self {
            column: None,
            string_res,
        }
    }

    pub fn formatted(string_res: ResId, column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            string_res,
        }
    }
}

impl StringInflater for SimpleInflater {
    fn inflate_row(&self, resolver: &dyn ResourceResolver, row: &dyn DataRow) -> Option<String> {
        let text = resource_text(resolver, None, self.string_res, None);
        let value = self.column.as_deref().and_then(|c| row.get_str(c));
        match (text, value) {
            (Some(text), Some(value)) => Some(substitute(&text, value)),
            (Some(text), None) => Some(text),
            (None, value) => value.map(str::to_owned),
        }
    }
}

/// Replaces the first `%1$s` (or `%s`) placeholder in `template`.
fn substitute(template: &str, value: &str) -> String {
    for placeholder in ["%1$s", "%s"] {
        if let Some(at) = template.find(placeholder) {
            let mut out = String::with_capacity(template.len() + value.len());
            out.push_str(&template[..at]);
            out.push_str(value);
            out.push_str(&template[at + placeholder.len()..]);
            return out;
        }
    }
    template.to_owned()
}

/// Renders the label of a row's edit type.
///
/// Variants with a custom column use the row's own label when it has one.
#[derive(Debug, Clone)]
pub struct TypeLabelInflater {
    type_column: String,
    types: Vec<EditType>,
    package: Option<String>,
}

impl TypeLabelInflater {
    pub fn new(type_column: impl Into<String>, types: Vec<EditType>) -> Self {
        Self {
            type_column: type_column.into(),
            types,
            package: None,
        }
    }

    /// Resolve labels from `package` instead of the current context.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}

impl StringInflater for TypeLabelInflater {
    fn inflate_row(&self, resolver: &dyn ResourceResolver, row: &dyn DataRow) -> Option<String> {
        let raw = row.get_i64(&self.type_column)?;
        let edit_type = self.types.iter().find(|t| i64::from(t.raw_value) == raw)?;

        let custom = edit_type
            .custom_column
            .as_deref()
            .and_then(|c| row.get_str(c))
            .filter(|label| !label.is_empty());
        if let Some(label) = custom {
            return Some(label.to_owned());
        }
        resource_text(resolver, self.package.as_deref(), edit_type.label_res, None)
    }
}
