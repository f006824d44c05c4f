use contacts_model::{EditType, EventEditType};
use contacts_types::ResId;
use proptest::prelude::*;
use std::collections::HashSet;

// ── Construction defaults ────────────────────────────────────────

#[test]
fn new_edit_type_is_unbounded_primary() {
    let t = EditType::new(1, ResId::new(10));
    assert_eq!(t.raw_value, 1);
    assert_eq!(t.label_res, ResId::new(10));
    assert!(!t.secondary);
    assert_eq!(t.specific_max, None);
    assert_eq!(t.custom_column, None);
    assert!(!t.is_event());
    assert!(!t.is_year_optional());
}

#[test]
fn fluent_setters_chain() {
    let t = EditType::new(0, ResId::new(11))
        .secondary(true)
        .specific_max(2)
        .custom_column("data3");
    assert!(t.secondary);
    assert_eq!(t.specific_max, Some(2));
    assert_eq!(t.custom_column.as_deref(), Some("data3"));
}

#[test]
fn event_edit_type_defaults_year_required() {
    let t = EventEditType::new(3, ResId::new(12));
    assert!(t.is_event());
    assert!(!t.is_year_optional());
}

#[test]
fn event_edit_type_keeps_traits_through_conversion() {
    let t: EditType = EventEditType::new(3, ResId::new(12))
        .year_optional(true)
        .specific_max(1)
        .into();
    assert!(t.is_event());
    assert!(t.is_year_optional());
    assert_eq!(t.specific_max, Some(1));
}

// ── Equality ─────────────────────────────────────────────────────

#[test]
fn equality_ignores_everything_but_raw_value() {
    let a = EditType::new(2, ResId::new(1));
    let b = EditType::new(2, ResId::new(99)).secondary(true).specific_max(1).custom_column("x");
    assert_eq!(a, b);
    assert_ne!(a, EditType::new(3, ResId::new(1)));
}

#[test]
fn event_and_plain_types_compare_by_raw_value() {
    let plain = EditType::new(3, ResId::new(1));
    let event = EventEditType::new(3, ResId::new(2)).year_optional(true);
    assert!(plain == event);
    assert!(event == plain);

    let converted: EditType = event.into();
    assert_eq!(plain, converted);
}

#[test]
fn hash_set_deduplicates_by_raw_value() {
    let mut set = HashSet::new();
    set.insert(EditType::new(1, ResId::new(1)));
    set.insert(EditType::new(1, ResId::new(2)).secondary(true));
    set.insert(EventEditType::new(1, ResId::new(3)).into());
    set.insert(EditType::new(2, ResId::new(1)));
    assert_eq!(set.len(), 2);
}

proptest! {
    #[test]
    fn equal_iff_raw_values_equal(
        a in any::<i32>(),
        b in any::<i32>(),
        la in any::<i32>(),
        lb in any::<i32>(),
        secondary in any::<bool>(),
        event in any::<bool>(),
    ) {
        let lhs = EditType::new(a, ResId::new(la)).secondary(secondary);
        let rhs: EditType = if event {
            EventEditType::new(b, ResId::new(lb)).year_optional(true).into()
        } else {
            EditType::new(b, ResId::new(lb))
        };
        prop_assert_eq!(lhs == rhs, a == b);
    }

    #[test]
    fn equal_types_collapse_in_hash_set(
        raw in any::<i32>(),
        la in any::<i32>(),
        lb in any::<i32>(),
    ) {
        let mut set = HashSet::new();
        set.insert(EditType::new(raw, ResId::new(la)));
        set.insert(EditType::new(raw, ResId::new(lb)).specific_max(1));
        prop_assert_eq!(set.len(), 1);
    }
}
