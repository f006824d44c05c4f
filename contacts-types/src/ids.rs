//! Identity of an account source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The `(account_type, data_set)` pair that identifies one account source.
///
/// Either half may be absent: the local-device source has no account type,
/// and most sync adapters publish no data set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountTypeWithDataSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_set: Option<String>,
}

impl AccountTypeWithDataSet {
    #[must_use]
    pub fn new(account_type: Option<&str>, data_set: Option<&str>) -> Self {
        Self {
            account_type: account_type.map(str::to_owned),
            data_set: data_set.map(str::to_owned),
        }
    }

    /// Shorthand for a source without a data set.
    #[must_use]
    pub fn account_type(account_type: &str) -> Self {
        Self::new(Some(account_type), None)
    }

    /// Returns `true` when a non-empty data set is present.
    #[must_use]
    pub fn has_data_set(&self) -> bool {
        self.data_set.as_deref().is_some_and(|s| !s.is_empty())
    }
}

impl fmt::Display for AccountTypeWithDataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account_type = self.account_type.as_deref().unwrap_or("");
        match self.data_set.as_deref() {
            Some(data_set) => write!(f, "{account_type}/{data_set}"),
            None => write!(f, "{account_type}"),
        }
    }
}
