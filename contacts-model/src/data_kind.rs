use contacts_types::ResId;
use std::fmt;
use std::sync::Arc;

use crate::{EditField, EditType, StringInflater};

/// A category of contact data (phone, email, postal address, ...) as
/// supported by one account type.
///
/// Cardinality is expressed twice: `type_overall_max` caps rows of the kind
/// across all variants, and each [`EditType::specific_max`] caps rows of a
/// single variant. When `type_list` is non-empty it holds the only valid raw
/// type values for rows of this kind.
#[derive(Clone)]
pub struct DataKind {
    pub mime_type: String,
    /// Stamped from the owning account type on registration.
    pub res_package_name: Option<String>,
    pub title_res: ResId,
    /// Lower sorts first.
    pub weight: i32,
    pub editable: bool,
    /// Column holding each row's raw type value.
    pub type_column: Option<String>,
    /// Rows allowed across all variants. `None` is unbounded.
    pub type_overall_max: Option<u32>,
    pub type_list: Vec<EditType>,
    pub field_list: Vec<EditField>,
    pub action_header: Option<Arc<dyn StringInflater>>,
    pub action_body: Option<Arc<dyn StringInflater>>,
}

impl DataKind {
    #[must_use]
    pub fn new(
        mime_type: impl Into<String>,
        title_res: ResId,
        weight: i32,
        editable: bool,
    ) -> Self {
        Self {
            mime_type: mime_type.into(),
            res_package_name: None,
            title_res,
            weight,
            editable,
            type_column: None,
            type_overall_max: None,
            type_list: Vec::new(),
            field_list: Vec::new(),
            action_header: None,
            action_body: None,
        }
    }

    #[must_use]
    pub fn type_column(mut self, column: impl Into<String>) -> Self {
        self.type_column = Some(column.into());
        self
    }

    #[must_use]
    pub fn type_overall_max(mut self, max: u32) -> Self {
        self.type_overall_max = Some(max);
        self
    }

    #[must_use]
    pub fn with_type(mut self, edit_type: impl Into<EditType>) -> Self {
        self.type_list.push(edit_type.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: EditField) -> Self {
        self.field_list.push(field);
        self
    }

    #[must_use]
    pub fn action_header(mut self, inflater: impl StringInflater + 'static) -> Self {
        self.action_header = Some(Arc::new(inflater));
        self
    }

    #[must_use]
    pub fn action_body(mut self, inflater: impl StringInflater + 'static) -> Self {
        self.action_body = Some(Arc::new(inflater));
        self
    }

    /// Finds the variant with the given raw value.
    pub fn edit_type(&self, raw_value: i32) -> Option<&EditType> {
        self.type_list.iter().find(|t| t.raw_value == raw_value)
    }

    /// Whether `existing` rows already use up `type_overall_max`.
    ///
    /// `existing` holds the raw type value of every row of this kind.
    pub fn overall_limit_reached(&self, existing: &[i32]) -> bool {
        self.type_overall_max
            .is_some_and(|max| existing.len() >= max as usize)
    }

    /// Variants that may be used for one more row.
    ///
    /// Secondary variants are skipped unless `include_secondary`.
    /// `force_include` keeps one raw value regardless of limits, typically the
    /// variant of the row being edited.
    pub fn valid_types(
        &self,
        existing: &[i32],
        include_secondary: bool,
        force_include: Option<i32>,
    ) -> Vec<&EditType> {
        if self.overall_limit_reached(existing) {
            return self
                .type_list
                .iter()
                .filter(|t| Some(t.raw_value) == force_include)
                .collect();
        }

        self.type_list
            .iter()
            .filter(|t| {
                if Some(t.raw_value) == force_include {
                    return true;
                }
                if t.secondary && !include_secondary {
                    return false;
                }
                match t.specific_max {
                    None => true,
                    Some(max) => count_of(existing, t.raw_value) < max as usize,
                }
            })
            .collect()
    }

    /// The variant a new row should get: `exact` when it is still valid,
    /// else the first valid variant. `None` when the kind has no variants or
    /// all of them are used up.
    pub fn best_valid_type(
        &self,
        existing: &[i32],
        include_secondary: bool,
        exact: Option<i32>,
    ) -> Option<&EditType> {
        let valid = self.valid_types(existing, include_secondary, None);
        exact
            .and_then(|raw| valid.iter().copied().find(|t| t.raw_value == raw))
            .or_else(|| valid.first().copied())
    }

    /// Whether one more row of this kind may be inserted.
    pub fn can_insert(&self, existing: &[i32]) -> bool {
        if self.type_list.is_empty() {
            return !self.overall_limit_reached(existing);
        }
        self.best_valid_type(existing, true, None).is_some()
    }
}

fn count_of(existing: &[i32], raw_value: i32) -> usize {
    existing.iter().filter(|&&raw| raw == raw_value).count()
}

impl fmt::Debug for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataKind")
            .field("mime_type", &self.mime_type)
            .field("res_package_name", &self.res_package_name)
            .field("weight", &self.weight)
            .field("type_overall_max", &self.type_overall_max)
            .field("type_list", &self.type_list)
            .field("field_list", &self.field_list)
            .field("action_header", &self.action_header.is_some())
            .field("action_body", &self.action_body.is_some())
            .finish_non_exhaustive()
    }
}
