//! Ordered, MIME-indexed storage for the kinds of one account type.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::DataKind;

/// The data kinds registered on an account type.
///
/// Kinds are kept in registration order with a MIME-type index over them.
/// Both are updated together by [`KindRegistry::add_kind`], the only way a
/// kind becomes visible.
///
/// Registering a MIME type twice keeps both kinds in the ordered list while
/// the index points at the later one.
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    kinds: Vec<DataKind>,
    mime_index: HashMap<String, usize>,
}

impl KindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `kind`, stamping `res_package_name` over whatever it held.
    /// Returns the registered kind for further adjustment.
    pub fn add_kind(
        &mut self,
        mut kind: DataKind,
        res_package_name: Option<&str>,
    ) -> &mut DataKind {
        kind.res_package_name = res_package_name.map(str::to_owned);

        let position = self.kinds.len();
        debug!(mime_type = %kind.mime_type, weight = kind.weight, "registering data kind");
        if let Some(previous) = self.mime_index.insert(kind.mime_type.clone(), position) {
            warn!(
                mime_type = %kind.mime_type,
                previous_weight = self.kinds[previous].weight,
                "data kind registered twice, lookups now resolve to the newer entry"
            );
        }
        self.kinds.push(kind);
        &mut self.kinds[position]
    }

    pub fn kind_for_mimetype(&self, mime_type: &str) -> Option<&DataKind> {
        self.mime_index.get(mime_type).map(|&i| &self.kinds[i])
    }

    /// All kinds by ascending weight, registration order among equal weights.
    pub fn sorted(&self) -> Vec<&DataKind> {
        let mut sorted: Vec<&DataKind> = self.kinds.iter().collect();
        sorted.sort_by_key(|kind| kind.weight);
        sorted
    }

    /// All kinds in registration order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &DataKind> {
        self.kinds.iter()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
