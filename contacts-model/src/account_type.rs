use contacts_types::{AccountTypeWithDataSet, Icon, ResId};

use crate::registry::KindRegistry;
use crate::resources::{ResourceResolver, resource_text};
use crate::DataKind;

/// State shared by every account type: identity, resource packages and the
/// registered data kinds.
#[derive(Debug, Clone, Default)]
pub struct AccountTypeInfo {
    pub account_type: Option<String>,
    pub data_set: Option<String>,
    /// Package resources are loaded from, also stamped on every kind.
    pub res_package_name: Option<String>,
    /// Package the title and icon are loaded from.
    pub summary_res_package_name: Option<String>,
    pub title_res: ResId,
    pub icon_res: ResId,
    pub read_only: bool,
    kinds: KindRegistry,
}

impl AccountTypeInfo {
    pub fn new(account_type: Option<&str>, data_set: Option<&str>) -> Self {
        Self {
            account_type: account_type.map(str::to_owned),
            data_set: data_set.map(str::to_owned),
            ..Self::default()
        }
    }

    /// Registers `kind` under this account type. See [`KindRegistry::add_kind`].
    pub fn add_kind(&mut self, kind: DataKind) -> &mut DataKind {
        self.kinds.add_kind(kind, self.res_package_name.as_deref())
    }

    pub fn kinds(&self) -> &KindRegistry {
        &self.kinds
    }
}

/// Constraints and presentation of one contact data source.
///
/// Implementors provide [`AccountType::info`] and the required presentation
/// methods. Every optional hook defaults to "not present".
pub trait AccountType: Send + Sync {
    fn info(&self) -> &AccountTypeInfo;

    /// Whether groups under this source accept membership edits.
    fn is_group_membership_editable(&self) -> bool;

    fn header_color(&self, resolver: &dyn ResourceResolver) -> u32;

    fn side_bar_color(&self, resolver: &dyn ResourceResolver) -> u32;

    /// `true` for third-party extension sources.
    fn is_external(&self) -> bool {
        false
    }

    /// Custom edit activity, resident in the `res_package_name` package.
    fn edit_contact_activity_class_name(&self) -> Option<&str> {
        None
    }

    fn create_contact_activity_class_name(&self) -> Option<&str> {
        None
    }

    fn invite_contact_activity_class_name(&self) -> Option<&str> {
        None
    }

    /// Service started whenever a contact of this source is viewed.
    fn view_contact_notify_service_class_name(&self) -> Option<&str> {
        None
    }

    fn view_group_activity(&self) -> Option<&str> {
        None
    }

    fn view_stream_item_activity(&self) -> Option<&str> {
        None
    }

    fn view_stream_item_photo_activity(&self) -> Option<&str> {
        None
    }

    fn invite_contact_action_res_id(&self, resolver: &dyn ResourceResolver) -> ResId {
        let _ = resolver;
        ResId::UNSET
    }

    /// Additional packages to inspect as external account types.
    fn extension_package_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn account_type_and_data_set(&self) -> AccountTypeWithDataSet {
        let info = self.info();
        AccountTypeWithDataSet::new(info.account_type.as_deref(), info.data_set.as_deref())
    }

    /// Title text, or the raw account type string when no title is set.
    fn display_label(&self, resolver: &dyn ResourceResolver) -> Option<String> {
        let info = self.info();
        resource_text(
            resolver,
            info.summary_res_package_name.as_deref(),
            info.title_res,
            info.account_type.as_deref(),
        )
    }

    /// Label of the "invite contact" action, empty when not defined.
    fn invite_contact_action_label(&self, resolver: &dyn ResourceResolver) -> Option<String> {
        resource_text(
            resolver,
            self.info().summary_res_package_name.as_deref(),
            self.invite_contact_action_res_id(resolver),
            Some(""),
        )
    }

    /// Icon of this source. Gated on `title_res` being set, not `icon_res`.
    fn display_icon(&self, resolver: &dyn ResourceResolver) -> Option<Icon> {
        let info = self.info();
        if !info.title_res.is_set() {
            return None;
        }
        match info.summary_res_package_name.as_deref() {
            Some(package) => resolver.package_icon(package, info.icon_res),
            None => resolver.local_icon(info.icon_res),
        }
    }

    /// Registered kinds by ascending weight, ties in registration order.
    fn sorted_data_kinds(&self) -> Vec<&DataKind> {
        self.info().kinds().sorted()
    }

    fn kind_for_mimetype(&self, mime_type: &str) -> Option<&DataKind> {
        self.info().kinds().kind_for_mimetype(mime_type)
    }
}
