//! Resource lookup delegated to the host platform.

use contacts_types::{Icon, ResId};
use std::collections::HashMap;

/// Resolves text and icons either from a named package or from the current
/// context. Implementations may perform I/O; behavior for missing packages
/// or resources is up to the implementation.
pub trait ResourceResolver: Send + Sync {
    fn package_text(&self, package: &str, res_id: ResId) -> Option<String>;

    fn local_text(&self, res_id: ResId) -> Option<String>;

    fn package_icon(&self, package: &str, res_id: ResId) -> Option<Icon>;

    fn local_icon(&self, res_id: ResId) -> Option<Icon>;
}

/// Text for `res_id`, from `package` when one is named, else from the
/// current context. An unset `res_id` yields `default` untouched.
pub fn resource_text(
    resolver: &dyn ResourceResolver,
    package: Option<&str>,
    res_id: ResId,
    default: Option<&str>,
) -> Option<String> {
    match package {
        Some(package) if res_id.is_set() => resolver.package_text(package, res_id),
        _ if res_id.is_set() => resolver.local_text(res_id),
        _ => default.map(str::to_owned),
    }
}

/// A [`ResourceResolver`] backed by in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResources {
    local_text: HashMap<ResId, String>,
    package_text: HashMap<(String, ResId), String>,
    local_icons: HashMap<ResId, Icon>,
    package_icons: HashMap<(String, ResId), Icon>,
}

impl InMemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local_text(mut self, res_id: ResId, text: impl Into<String>) -> Self {
        self.local_text.insert(res_id, text.into());
        self
    }

    pub fn with_package_text(
        mut self,
        package: impl Into<String>,
        res_id: ResId,
        text: impl Into<String>,
    ) -> Self {
        self.package_text.insert((package.into(), res_id), text.into());
        self
    }

    pub fn with_local_icon(mut self, res_id: ResId, icon: Icon) -> Self {
        self.local_icons.insert(res_id, icon);
        self
    }

    pub fn with_package_icon(
        mut self,
        package: impl Into<String>,
        res_id: ResId,
        icon: Icon,
    ) -> Self {
        self.package_icons.insert((package.into(), res_id), icon);
        self
    }
}

impl ResourceResolver for InMemoryResources {
    fn package_text(&self, package: &str, res_id: ResId) -> Option<String> {
        self.package_text.get(&(package.to_owned(), res_id)).cloned()
    }

    fn local_text(&self, res_id: ResId) -> Option<String> {
        self.local_text.get(&res_id).cloned()
    }

    fn package_icon(&self, package: &str, res_id: ResId) -> Option<Icon> {
        self.package_icons.get(&(package.to_owned(), res_id)).cloned()
    }

    fn local_icon(&self, res_id: ResId) -> Option<Icon> {
        self.local_icons.get(&res_id).cloned()
    }
}
