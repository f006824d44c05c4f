use contacts_model::EditField;
use contacts_types::{InputType, ResId};

#[test]
fn new_field_has_empty_flags() {
    let f = EditField::new("data1", ResId::new(5));
    assert_eq!(f.column, "data1");
    assert_eq!(f.title_res, ResId::new(5));
    assert_eq!(f.input_type, InputType::empty());
    assert_eq!(f.min_lines, 0);
    assert!(!f.optional);
    assert!(!f.short_form);
    assert!(!f.long_form);
    assert!(!f.is_full_name);
}

#[test]
fn fluent_setters_chain() {
    let f = EditField::new("data1", ResId::new(5))
        .optional(true)
        .short_form(true)
        .long_form(true)
        .min_lines(3)
        .full_name(true);
    assert!(f.optional);
    assert!(f.short_form);
    assert!(f.long_form);
    assert_eq!(f.min_lines, 3);
    assert!(f.is_full_name);
}

#[test]
fn multi_line_follows_input_type_bit() {
    let multi = EditField::with_input_type(
        "data1",
        ResId::new(5),
        InputType::CLASS_TEXT | InputType::FLAG_MULTI_LINE,
    );
    assert!(multi.is_multi_line());

    let single = EditField::with_input_type(
        "data1",
        ResId::new(5),
        InputType::CLASS_TEXT | InputType::FLAG_CAP_WORDS,
    );
    assert!(!single.is_multi_line());
}

#[test]
fn clearing_bit_clears_multi_line() {
    let mut f = EditField::with_input_type("data1", ResId::UNSET, InputType::FLAG_MULTI_LINE);
    assert!(f.is_multi_line());
    f.input_type.remove(InputType::FLAG_MULTI_LINE);
    assert!(!f.is_multi_line());
}
