mod common;

use common::{TestAccountType, kind, mime_types};
use contacts_model::{AccountType, InMemoryResources, KindRegistry};
use contacts_types::{AccountTypeWithDataSet, Icon, ResId};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tracing_test::traced_test;

// ── add_kind ─────────────────────────────────────────────────────

#[test]
fn add_kind_makes_kind_visible() {
    let mut t = TestAccountType::with_package("com.example", "com.example.sync");
    t.info.add_kind(kind("phone", 10));

    let found = t.kind_for_mimetype("phone").unwrap();
    assert_eq!(found.mime_type, "phone");
    assert_eq!(found.weight, 10);
}

#[test]
fn add_kind_stamps_res_package_name() {
    let mut t = TestAccountType::with_package("com.example", "com.example.sync");
    let mut k = kind("phone", 10);
    k.res_package_name = Some("something.else".to_string());
    t.info.add_kind(k);

    assert_eq!(
        t.kind_for_mimetype("phone").unwrap().res_package_name.as_deref(),
        Some("com.example.sync")
    );
}

#[test]
fn add_kind_clears_package_when_owner_has_none() {
    let mut t = TestAccountType::new(None);
    let mut k = kind("phone", 10);
    k.res_package_name = Some("stale".to_string());
    t.info.add_kind(k);

    assert_eq!(t.kind_for_mimetype("phone").unwrap().res_package_name, None);
}

#[test]
fn add_kind_returns_registered_kind_for_chaining() {
    let mut t = TestAccountType::new(None);
    t.info.add_kind(kind("phone", 10)).weight = 3;
    assert_eq!(t.kind_for_mimetype("phone").unwrap().weight, 3);
}

#[test]
fn lookup_miss_is_none() {
    let t = TestAccountType::new(None);
    assert!(t.kind_for_mimetype("phone").is_none());
}

// ── Sorted kinds ─────────────────────────────────────────────────

#[test]
fn sorted_kinds_ascending_weight() {
    let mut t = TestAccountType::new(None);
    t.info.add_kind(kind("phone", 10));
    t.info.add_kind(kind("email", 5));

    assert_eq!(mime_types(&t.sorted_data_kinds()), vec!["email", "phone"]);
}

#[test]
fn equal_weights_keep_registration_order() {
    let mut t = TestAccountType::new(None);
    t.info.add_kind(kind("c", 1));
    t.info.add_kind(kind("a", 0));
    t.info.add_kind(kind("b", 1));
    t.info.add_kind(kind("d", 1));

    assert_eq!(mime_types(&t.sorted_data_kinds()), vec!["a", "c", "b", "d"]);
}

#[test]
fn sorting_is_repeatable() {
    let mut t = TestAccountType::new(None);
    t.info.add_kind(kind("x", 3));
    t.info.add_kind(kind("y", -1));
    t.info.add_kind(kind("z", 3));

    let first = mime_types(&t.sorted_data_kinds());
    let second = mime_types(&t.sorted_data_kinds());
    assert_eq!(first, second);
}

#[test]
fn sorting_does_not_disturb_lookup() {
    let mut t = TestAccountType::new(None);
    t.info.add_kind(kind("phone", 10));
    t.info.add_kind(kind("email", 5));
    let _ = t.sorted_data_kinds();

    assert_eq!(t.kind_for_mimetype("phone").unwrap().weight, 10);
    assert_eq!(t.kind_for_mimetype("email").unwrap().weight, 5);
}

// ── Duplicate MIME types ─────────────────────────────────────────

#[test]
fn duplicate_mime_type_lookup_returns_latest() {
    let mut t = TestAccountType::new(None);
    t.info.add_kind(kind("x", 1));
    t.info.add_kind(kind("x", 2));

    assert_eq!(t.kind_for_mimetype("x").unwrap().weight, 2);
}

#[test]
fn duplicate_mime_type_stays_in_sorted_list() {
    let mut t = TestAccountType::new(None);
    t.info.add_kind(kind("x", 2));
    t.info.add_kind(kind("x", 1));

    let weights: Vec<i32> = t.sorted_data_kinds().iter().map(|k| k.weight).collect();
    assert_eq!(weights, vec![1, 2]);
    assert_eq!(t.info.kinds().len(), 2);
    // Lookup follows registration, not weight.
    assert_eq!(t.kind_for_mimetype("x").unwrap().weight, 1);
}

#[test]
#[traced_test]
fn duplicate_mime_type_logs_warning() {
    let mut t = TestAccountType::new(None);
    t.info.add_kind(kind("x", 1));
    assert!(!logs_contain("registered twice"));

    t.info.add_kind(kind("x", 2));
    assert!(logs_contain("registered twice"));
}

#[test]
fn registry_is_empty_by_default() {
    let registry = KindRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.sorted().is_empty());
}

#[test]
fn registry_iter_is_registration_order() {
    let mut registry = KindRegistry::new();
    registry.add_kind(kind("b", 2), None);
    registry.add_kind(kind("a", 1), Some("pkg"));
    let order: Vec<&str> = registry.iter().map(|k| k.mime_type.as_str()).collect();
    assert_eq!(order, vec!["b", "a"]);
    assert_eq!(registry.kind_for_mimetype("a").unwrap().res_package_name.as_deref(), Some("pkg"));
}

proptest! {
    #[test]
    fn sorted_kinds_are_a_stable_sort(weights in prop::collection::vec(-5i32..5, 0..30)) {
        let mut t = TestAccountType::new(None);
        for (i, w) in weights.iter().enumerate() {
            t.info.add_kind(kind(&format!("k{i}"), *w));
        }

        let mut expected: Vec<(i32, usize)> = weights.iter().copied().zip(0..).collect();
        expected.sort_by_key(|&(w, _)| w);
        let expected: Vec<String> = expected.iter().map(|(_, i)| format!("k{i}")).collect();

        let sorted = mime_types(&t.sorted_data_kinds());
        prop_assert_eq!(&sorted, &expected);
        prop_assert_eq!(mime_types(&t.sorted_data_kinds()), sorted);
    }

    #[test]
    fn every_registered_mime_type_is_found(count in 1usize..20) {
        let mut t = TestAccountType::with_package("acct", "pkg");
        for i in 0..count {
            t.info.add_kind(kind(&format!("m{i}"), i as i32));
        }
        for i in 0..count {
            let found = t.kind_for_mimetype(&format!("m{i}"));
            prop_assert!(found.is_some());
            prop_assert_eq!(found.unwrap().res_package_name.as_deref(), Some("pkg"));
        }
    }
}

// ── Optional hooks ───────────────────────────────────────────────

#[test]
fn optional_hooks_default_to_absent() {
    let t = TestAccountType::new(Some("com.example"));
    let resources = InMemoryResources::new();

    assert!(!t.is_external());
    assert_eq!(t.edit_contact_activity_class_name(), None);
    assert_eq!(t.create_contact_activity_class_name(), None);
    assert_eq!(t.invite_contact_activity_class_name(), None);
    assert_eq!(t.view_contact_notify_service_class_name(), None);
    assert_eq!(t.view_group_activity(), None);
    assert_eq!(t.view_stream_item_activity(), None);
    assert_eq!(t.view_stream_item_photo_activity(), None);
    assert_eq!(t.invite_contact_action_res_id(&resources), ResId::UNSET);
    assert!(t.extension_package_names().is_empty());
}

#[test]
fn invite_label_defaults_to_empty_string() {
    let t = TestAccountType::new(Some("com.example"));
    let resources = InMemoryResources::new();
    assert_eq!(t.invite_contact_action_label(&resources).as_deref(), Some(""));
}

#[test]
fn account_type_and_data_set() {
    let mut t = TestAccountType::new(Some("com.example"));
    t.info.data_set = Some("plus".to_string());
    assert_eq!(
        t.account_type_and_data_set(),
        AccountTypeWithDataSet::new(Some("com.example"), Some("plus"))
    );
}

// ── Display label / icon ─────────────────────────────────────────

#[test]
fn display_label_from_summary_package() {
    let t = TestAccountType::titled("com.example", Some("com.example.res"), ResId::new(7));
    let resources = InMemoryResources::new()
        .with_package_text("com.example.res", ResId::new(7), "Example")
        .with_local_text(ResId::new(7), "Local");
    assert_eq!(t.display_label(&resources).as_deref(), Some("Example"));
}

#[test]
fn display_label_from_local_context_without_package() {
    let t = TestAccountType::titled("com.example", None, ResId::new(7));
    let resources = InMemoryResources::new().with_local_text(ResId::new(7), "Local");
    assert_eq!(t.display_label(&resources).as_deref(), Some("Local"));
}

#[test]
fn display_label_falls_back_to_account_type_string() {
    let t = TestAccountType::titled("com.example", Some("com.example.res"), ResId::UNSET);
    let resources = InMemoryResources::new();
    assert_eq!(t.display_label(&resources).as_deref(), Some("com.example"));
}

#[test]
fn display_label_absent_without_title_or_account_type() {
    let t = TestAccountType::new(None);
    assert_eq!(t.display_label(&InMemoryResources::new()), None);
}

#[test]
fn display_icon_from_summary_package() {
    let mut t = TestAccountType::titled("com.example", Some("com.example.res"), ResId::new(7));
    t.info.icon_res = ResId::new(8);
    let icon = Icon::from_bytes(vec![1u8]);
    let resources =
        InMemoryResources::new().with_package_icon("com.example.res", ResId::new(8), icon.clone());
    assert_eq!(t.display_icon(&resources), Some(icon));
}

#[test]
fn display_icon_from_local_context() {
    let mut t = TestAccountType::titled("com.example", None, ResId::new(7));
    t.info.icon_res = ResId::new(8);
    let icon = Icon::from_bytes(vec![2u8]);
    let resources = InMemoryResources::new().with_local_icon(ResId::new(8), icon.clone());
    assert_eq!(t.display_icon(&resources), Some(icon));
}

#[test]
fn display_icon_requires_title_res() {
    // An icon without a title is never shown.
    let mut t = TestAccountType::titled("com.example", None, ResId::UNSET);
    t.info.icon_res = ResId::new(8);
    let resources =
        InMemoryResources::new().with_local_icon(ResId::new(8), Icon::from_bytes(vec![2u8]));
    assert_eq!(t.display_icon(&resources), None);
}
