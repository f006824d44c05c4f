//! Ordering of account types by display label.

use std::cmp::Ordering;

use crate::resources::ResourceResolver;
use crate::AccountType;

/// Locale-aware string ordering supplied by the host.
///
/// Results depend on the collation rules of the configured locale, so tests
/// that sort accented or non-Latin labels must pin their collator.
pub trait Collator: Send + Sync {
    fn compare(&self, lhs: &str, rhs: &str) -> Ordering;
}

/// Locale-independent fallback: case-insensitive, then case-sensitive to
/// keep the order total.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootCollator;

impl Collator for RootCollator {
    fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        let folded = lhs
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(rhs.chars().flat_map(char::to_lowercase));
        folded.then_with(|| lhs.cmp(rhs))
    }
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering + Send + Sync,
{
    fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        self(lhs, rhs)
    }
}

/// Compares account types by [`AccountType::display_label`] through a
/// [`Collator`]. A missing label compares as the empty string.
pub struct DisplayLabelComparator<'a, C = RootCollator> {
    resolver: &'a dyn ResourceResolver,
    collator: C,
}

impl<'a> DisplayLabelComparator<'a> {
    /// Comparator using [`RootCollator`].
    pub fn with_root_collator(resolver: &'a dyn ResourceResolver) -> Self {
        Self::new(resolver, RootCollator)
    }
}

impl<'a, C: Collator> DisplayLabelComparator<'a, C> {
    pub fn new(resolver: &'a dyn ResourceResolver, collator: C) -> Self {
        Self { resolver, collator }
    }

    fn label(&self, account_type: &dyn AccountType) -> String {
        account_type.display_label(self.resolver).unwrap_or_default()
    }

    pub fn compare(&self, lhs: &dyn AccountType, rhs: &dyn AccountType) -> Ordering {
        self.collator.compare(&self.label(lhs), &self.label(rhs))
    }
}
