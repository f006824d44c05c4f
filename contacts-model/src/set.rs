//! Host-side collection of account types.

use contacts_types::AccountTypeWithDataSet;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::comparator::{Collator, DisplayLabelComparator};
use crate::resources::ResourceResolver;
use crate::{AccountType, DataKind, FallbackAccountType};

/// Every known account type, keyed by `(account_type, data_set)`, plus the
/// fallback type consulted when a source lacks a kind.
///
/// Built once and read afterwards; share it behind an `Arc` for concurrent
/// readers.
pub struct AccountTypeSet {
    types: HashMap<AccountTypeWithDataSet, Arc<dyn AccountType>>,
    fallback: Arc<dyn AccountType>,
}

impl AccountTypeSet {
    pub fn new() -> Self {
        Self::with_fallback(Arc::new(FallbackAccountType::new()))
    }

    pub fn with_fallback(fallback: Arc<dyn AccountType>) -> Self {
        Self {
            types: HashMap::new(),
            fallback,
        }
    }

    /// Adds `account_type`, replacing any type with the same identity.
    pub fn insert(&mut self, account_type: Arc<dyn AccountType>) -> Option<Arc<dyn AccountType>> {
        let key = account_type.account_type_and_data_set();
        debug!(account_type = %key, external = account_type.is_external(), "adding account type");
        self.types.insert(key, account_type)
    }

    pub fn get(&self, key: &AccountTypeWithDataSet) -> Option<&Arc<dyn AccountType>> {
        self.types.get(key)
    }

    /// The registered type, or the fallback type for unknown sources.
    pub fn get_or_fallback(&self, key: &AccountTypeWithDataSet) -> &Arc<dyn AccountType> {
        self.types.get(key).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &Arc<dyn AccountType> {
        &self.fallback
    }

    /// The kind for `mime_type` on the given source, falling back to the
    /// fallback type's kind when the source is unknown or lacks it.
    pub fn kind_or_fallback(
        &self,
        account_type: Option<&str>,
        data_set: Option<&str>,
        mime_type: &str,
    ) -> Option<&DataKind> {
        let key = AccountTypeWithDataSet::new(account_type, data_set);
        self.types
            .get(&key)
            .and_then(|t| t.kind_for_mimetype(mime_type))
            .or_else(|| self.fallback.kind_for_mimetype(mime_type))
    }

    /// All registered types ordered by display label, then by identity.
    pub fn sorted_by_label(
        &self,
        resolver: &dyn ResourceResolver,
        collator: impl Collator,
    ) -> Vec<&Arc<dyn AccountType>> {
        let comparator = DisplayLabelComparator::new(resolver, collator);
        let mut sorted: Vec<&Arc<dyn AccountType>> = self.types.values().collect();
        sorted.sort_by(|a, b| {
            comparator
                .compare(Arc::as_ref(a), Arc::as_ref(b))
                .then_with(|| a.account_type_and_data_set().cmp(&b.account_type_and_data_set()))
        });
        sorted
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for AccountTypeSet {
    fn default() -> Self {
        Self::new()
    }
}
