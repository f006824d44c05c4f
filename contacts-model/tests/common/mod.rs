//! Shared test helpers for model tests.

#![allow(dead_code)]

use contacts_model::{AccountType, AccountTypeInfo, DataKind, ResourceResolver};
use contacts_types::ResId;

/// Minimal account type with every optional hook left at its default.
pub struct TestAccountType {
    pub info: AccountTypeInfo,
}

impl TestAccountType {
    pub fn new(account_type: Option<&str>) -> Self {
        Self {
            info: AccountTypeInfo::new(account_type, None),
        }
    }

    pub fn with_package(account_type: &str, package: &str) -> Self {
        let mut t = Self::new(Some(account_type));
        t.info.res_package_name = Some(package.to_string());
        t
    }

    pub fn titled(account_type: &str, summary_package: Option<&str>, title_res: ResId) -> Self {
        let mut t = Self::new(Some(account_type));
        t.info.summary_res_package_name = summary_package.map(str::to_owned);
        t.info.title_res = title_res;
        t
    }
}

impl AccountType for TestAccountType {
    fn info(&self) -> &AccountTypeInfo {
        &self.info
    }

    fn is_group_membership_editable(&self) -> bool {
        false
    }

    fn header_color(&self, _resolver: &dyn ResourceResolver) -> u32 {
        0xFF00_0000
    }

    fn side_bar_color(&self, _resolver: &dyn ResourceResolver) -> u32 {
        0xFFFF_FFFF
    }
}

pub fn kind(mime_type: &str, weight: i32) -> DataKind {
    DataKind::new(mime_type, ResId::UNSET, weight, true)
}

pub fn mime_types(kinds: &[&DataKind]) -> Vec<String> {
    kinds.iter().map(|k| k.mime_type.clone()).collect()
}
