use contacts_types::{InputType, ResId};

/// One user-editable attribute of a data-kind row, such as the number of a
/// phone row. Describes the storage column and the editor hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditField {
    pub column: String,
    pub title_res: ResId,
    pub input_type: InputType,
    pub min_lines: u32,
    pub optional: bool,
    /// Shown in the collapsed editor.
    pub short_form: bool,
    /// Shown in the expanded editor.
    pub long_form: bool,
    pub is_full_name: bool,
}

impl EditField {
    #[must_use]
    pub fn new(column: impl Into<String>, title_res: ResId) -> Self {
        Self::with_input_type(column, title_res, InputType::empty())
    }

    #[must_use]
    pub fn with_input_type(
        column: impl Into<String>,
        title_res: ResId,
        input_type: InputType,
    ) -> Self {
        Self {
            column: column.into(),
            title_res,
            input_type,
            min_lines: 0,
            optional: false,
            short_form: false,
            long_form: false,
            is_full_name: false,
        }
    }

    #[must_use]
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    #[must_use]
    pub fn short_form(mut self, short_form: bool) -> Self {
        self.short_form = short_form;
        self
    }

    #[must_use]
    pub fn long_form(mut self, long_form: bool) -> Self {
        self.long_form = long_form;
        self
    }

    #[must_use]
    pub fn min_lines(mut self, min_lines: u32) -> Self {
        self.min_lines = min_lines;
        self
    }

    #[must_use]
    pub fn full_name(mut self, is_full_name: bool) -> Self {
        self.is_full_name = is_full_name;
        self
    }

    /// Returns `true` iff the multi-line bit is set in `input_type`.
    #[must_use]
    pub fn is_multi_line(&self) -> bool {
        self.input_type.is_multi_line()
    }
}
