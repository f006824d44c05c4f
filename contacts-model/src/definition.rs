//! Account types declared in JSON by a data source.

use contacts_types::{InputType, ResId};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::error::{ModelError, ModelResult};
use crate::inflater::{SimpleInflater, TypeLabelInflater};
use crate::resources::ResourceResolver;
use crate::{AccountType, AccountTypeInfo, DataKind, EditField, EditType, EventEditType};

/// Declarative description of an account type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountTypeDefinition {
    pub account_type: Option<String>,
    pub data_set: Option<String>,
    pub res_package_name: Option<String>,
    pub summary_res_package_name: Option<String>,
    pub title_res: ResId,
    pub icon_res: ResId,
    pub read_only: bool,
    pub group_membership_editable: bool,
    /// ARGB colors.
    pub header_color: u32,
    pub side_bar_color: u32,
    pub edit_contact_activity: Option<String>,
    pub create_contact_activity: Option<String>,
    pub invite_contact_activity: Option<String>,
    pub invite_action_label_res: ResId,
    pub view_contact_notify_service: Option<String>,
    pub view_group_activity: Option<String>,
    pub view_stream_item_activity: Option<String>,
    pub view_stream_item_photo_activity: Option<String>,
    pub extension_package_names: Vec<String>,
    pub kinds: Vec<DataKindDefinition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataKindDefinition {
    pub mime_type: String,
    pub title_res: ResId,
    pub weight: i32,
    pub editable: bool,
    pub type_column: Option<String>,
    /// Negative values, such as the platform's `-1`, mean unbounded.
    #[serde(deserialize_with = "row_limit")]
    pub type_overall_max: Option<u32>,
    pub types: Vec<EditTypeDefinition>,
    pub fields: Vec<EditFieldDefinition>,
    /// Column rendered as the row's action body.
    pub summary_column: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditTypeDefinition {
    pub raw_value: i32,
    pub label_res: ResId,
    pub secondary: bool,
    #[serde(deserialize_with = "row_limit")]
    pub specific_max: Option<u32>,
    pub custom_column: Option<String>,
    /// Present only on event variants.
    pub year_optional: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditFieldDefinition {
    pub column: String,
    pub title_res: ResId,
    pub input_type: InputType,
    pub min_lines: u32,
    pub optional: bool,
    pub short_form: bool,
    pub long_form: bool,
    pub is_full_name: bool,
}

/// Reads a row limit, mapping negative values and `null` to unbounded.
fn row_limit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let limit = Option::<i64>::deserialize(deserializer)?;
    match limit {
        Some(max) if max >= 0 => u32::try_from(max)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("row limit {max} out of range"))),
        _ => Ok(None),
    }
}

impl AccountTypeDefinition {
    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl EditTypeDefinition {
    fn build(&self) -> EditType {
        let mut edit_type = match self.year_optional {
            Some(year_optional) => EventEditType::new(self.raw_value, self.label_res)
                .year_optional(year_optional)
                .into_edit_type(),
            None => EditType::new(self.raw_value, self.label_res),
        };
        edit_type.secondary = self.secondary;
        edit_type.specific_max = self.specific_max;
        edit_type.custom_column = self.custom_column.clone();
        edit_type
    }
}

impl EditFieldDefinition {
    fn build(&self) -> EditField {
        EditField::with_input_type(self.column.clone(), self.title_res, self.input_type)
            .min_lines(self.min_lines)
            .optional(self.optional)
            .short_form(self.short_form)
            .long_form(self.long_form)
            .full_name(self.is_full_name)
    }
}

impl DataKindDefinition {
    fn build(&self, index: usize, res_package_name: Option<&str>) -> ModelResult<DataKind> {
        if self.mime_type.trim().is_empty() {
            return Err(ModelError::EmptyMimeType { index });
        }

        let mut seen = HashSet::new();
        let mut kind = DataKind::new(
            self.mime_type.clone(),
            self.title_res,
            self.weight,
            self.editable,
        );
        kind.type_overall_max = self.type_overall_max;
        for def in &self.types {
            if !seen.insert(def.raw_value) {
                return Err(ModelError::DuplicateEditType {
                    mime_type: self.mime_type.clone(),
                    raw_value: def.raw_value,
                });
            }
            kind.type_list.push(def.build());
        }
        kind.field_list = self.fields.iter().map(EditFieldDefinition::build).collect();

        if let Some(column) = &self.type_column {
            let mut header = TypeLabelInflater::new(column.clone(), kind.type_list.clone());
            if let Some(package) = res_package_name {
                header = header.package(package);
            }
            kind = kind.type_column(column.clone()).action_header(header);
        }
        if let Some(column) = &self.summary_column {
            kind = kind.action_body(SimpleInflater::column(column.clone()));
        }
        Ok(kind)
    }
}

/// An account type provided by a third-party package through a definition.
#[derive(Debug, Clone)]
pub struct ExternalAccountType {
    info: AccountTypeInfo,
    definition: AccountTypeDefinition,
}

impl ExternalAccountType {
    pub fn from_definition(definition: AccountTypeDefinition) -> ModelResult<Self> {
        let mut info = AccountTypeInfo::new(
            definition.account_type.as_deref(),
            definition.data_set.as_deref(),
        );
        info.res_package_name = definition.res_package_name.clone();
        info.summary_res_package_name = definition.summary_res_package_name.clone();
        info.title_res = definition.title_res;
        info.icon_res = definition.icon_res;
        info.read_only = definition.read_only;

        for (index, kind_def) in definition.kinds.iter().enumerate() {
            let kind = kind_def.build(index, info.res_package_name.as_deref())?;
            info.add_kind(kind);
        }

        debug!(
            account_type = ?info.account_type,
            data_set = ?info.data_set,
            kinds = info.kinds().len(),
            "loaded external account type"
        );
        Ok(Self { info, definition })
    }

    pub fn from_json(json: &str) -> ModelResult<Self> {
        Self::from_definition(AccountTypeDefinition::from_json(json)?)
    }

    pub fn definition(&self) -> &AccountTypeDefinition {
        &self.definition
    }
}

impl AccountType for ExternalAccountType {
    fn info(&self) -> &AccountTypeInfo {
        &self.info
    }

    fn is_group_membership_editable(&self) -> bool {
        self.definition.group_membership_editable
    }

    fn header_color(&self, _resolver: &dyn ResourceResolver) -> u32 {
        self.definition.header_color
    }

    fn side_bar_color(&self, _resolver: &dyn ResourceResolver) -> u32 {
        self.definition.side_bar_color
    }

    fn is_external(&self) -> bool {
        true
    }

    fn edit_contact_activity_class_name(&self) -> Option<&str> {
        self.definition.edit_contact_activity.as_deref()
    }

    fn create_contact_activity_class_name(&self) -> Option<&str> {
        self.definition.create_contact_activity.as_deref()
    }

    fn invite_contact_activity_class_name(&self) -> Option<&str> {
        self.definition.invite_contact_activity.as_deref()
    }

    fn view_contact_notify_service_class_name(&self) -> Option<&str> {
        self.definition.view_contact_notify_service.as_deref()
    }

    fn view_group_activity(&self) -> Option<&str> {
        self.definition.view_group_activity.as_deref()
    }

    fn view_stream_item_activity(&self) -> Option<&str> {
        self.definition.view_stream_item_activity.as_deref()
    }

    fn view_stream_item_photo_activity(&self) -> Option<&str> {
        self.definition.view_stream_item_photo_activity.as_deref()
    }

    fn invite_contact_action_res_id(&self, _resolver: &dyn ResourceResolver) -> ResId {
        self.definition.invite_action_label_res
    }

    fn extension_package_names(&self) -> Vec<String> {
        self.definition.extension_package_names.clone()
    }
}
