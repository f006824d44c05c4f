use contacts_types::ResId;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// One labeled variant of a data kind, such as "Home" or "Work".
///
/// Identity is the `raw_value` alone: two edit types with the same raw code
/// are equal and hash alike whatever their other attributes, event or not.
#[derive(Debug, Clone)]
pub struct EditType {
    /// Integer code stored in the kind's type column.
    pub raw_value: i32,
    pub label_res: ResId,
    /// Minor or uncommon variant, hidden unless explicitly requested.
    pub secondary: bool,
    /// Rows of this variant a contact may have. `None` is unbounded.
    pub specific_max: Option<u32>,
    /// Column holding the user-defined label for this variant.
    pub custom_column: Option<String>,
    event: Option<EventTraits>,
}

#[derive(Debug, Clone, Copy, Default)]
struct EventTraits {
    year_optional: bool,
}

impl EditType {
    #[must_use]
    pub fn new(raw_value: i32, label_res: ResId) -> Self {
        Self {
            raw_value,
            label_res,
            secondary: false,
            specific_max: None,
            custom_column: None,
            event: None,
        }
    }

    #[must_use]
    pub fn secondary(mut self, secondary: bool) -> Self {
        self.secondary = secondary;
        self
    }

    #[must_use]
    pub fn specific_max(mut self, specific_max: u32) -> Self {
        self.specific_max = Some(specific_max);
        self
    }

    #[must_use]
    pub fn custom_column(mut self, column: impl Into<String>) -> Self {
        self.custom_column = Some(column.into());
        self
    }

    /// Returns `true` for variants built through [`EventEditType`].
    #[must_use]
    pub fn is_event(&self) -> bool {
        self.event.is_some()
    }

    /// Whether a date of this variant may omit its year. Always `false` for
    /// non-event variants.
    #[must_use]
    pub fn is_year_optional(&self) -> bool {
        self.event.is_some_and(|e| e.year_optional)
    }
}

impl PartialEq for EditType {
    fn eq(&self, other: &Self) -> bool {
        self.raw_value == other.raw_value
    }
}

impl Eq for EditType {}

impl Hash for EditType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw_value.hash(state);
    }
}

/// Edit type for date-valued kinds (birthdays, anniversaries).
///
/// Converts into a plain [`EditType`] that keeps the event traits, so event
/// and non-event variants share one type list.
#[derive(Debug, Clone)]
pub struct EventEditType(EditType);

impl EventEditType {
    #[must_use]
    pub fn new(raw_value: i32, label_res: ResId) -> Self {
        let mut inner = EditType::new(raw_value, label_res);
        inner.event = Some(EventTraits::default());
        Self(inner)
    }

    #[must_use]
    pub fn year_optional(mut self, year_optional: bool) -> Self {
        self.0.event = Some(EventTraits { year_optional });
        self
    }

    #[must_use]
    pub fn secondary(self, secondary: bool) -> Self {
        Self(self.0.secondary(secondary))
    }

    #[must_use]
    pub fn specific_max(self, specific_max: u32) -> Self {
        Self(self.0.specific_max(specific_max))
    }

    #[must_use]
    pub fn custom_column(self, column: impl Into<String>) -> Self {
        Self(self.0.custom_column(column))
    }

    #[must_use]
    pub fn into_edit_type(self) -> EditType {
        self.0
    }
}

impl Deref for EventEditType {
    type Target = EditType;

    fn deref(&self) -> &EditType {
        &self.0
    }
}

impl From<EventEditType> for EditType {
    fn from(event: EventEditType) -> Self {
        event.0
    }
}

impl PartialEq for EventEditType {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for EventEditType {}

impl Hash for EventEditType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialEq<EditType> for EventEditType {
    fn eq(&self, other: &EditType) -> bool {
        self.0 == *other
    }
}

impl PartialEq<EventEditType> for EditType {
    fn eq(&self, other: &EventEditType) -> bool {
        *self == other.0
    }
}
