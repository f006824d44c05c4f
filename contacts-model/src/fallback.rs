//! The local-device account type with the standard data kinds.

use contacts_types::{InputType, ResId, mime};

use crate::inflater::{SimpleInflater, TypeLabelInflater};
use crate::res;
use crate::resources::ResourceResolver;
use crate::{AccountType, AccountTypeInfo, DataKind, EditField, EditType, EventEditType};

/// Generic data columns shared by every kind.
mod column {
    pub const DATA1: &str = "data1";
    pub const DATA2: &str = "data2";
    pub const DATA3: &str = "data3";
    pub const DATA4: &str = "data4";
    pub const DATA5: &str = "data5";
    pub const DATA6: &str = "data6";
}

const TEXT: InputType = InputType::CLASS_TEXT;
const PERSON_NAME: InputType = InputType::CLASS_TEXT
    .union(InputType::VARIATION_PERSON_NAME)
    .union(InputType::FLAG_CAP_WORDS);

/// Raw type values of the standard kinds.
pub mod raw {
    pub const CUSTOM: i32 = 0;

    pub const PHONE_HOME: i32 = 1;
    pub const PHONE_MOBILE: i32 = 2;
    pub const PHONE_WORK: i32 = 3;
    pub const PHONE_FAX_WORK: i32 = 4;
    pub const PHONE_FAX_HOME: i32 = 5;
    pub const PHONE_PAGER: i32 = 6;
    pub const PHONE_OTHER: i32 = 7;

    pub const EMAIL_HOME: i32 = 1;
    pub const EMAIL_WORK: i32 = 2;
    pub const EMAIL_OTHER: i32 = 3;
    pub const EMAIL_MOBILE: i32 = 4;

    pub const POSTAL_HOME: i32 = 1;
    pub const POSTAL_WORK: i32 = 2;
    pub const POSTAL_OTHER: i32 = 3;

    pub const IM_CUSTOM: i32 = -1;
    pub const IM_AIM: i32 = 0;
    pub const IM_MSN: i32 = 1;
    pub const IM_YAHOO: i32 = 2;
    pub const IM_SKYPE: i32 = 3;
    pub const IM_QQ: i32 = 4;
    pub const IM_GOOGLE_TALK: i32 = 5;
    pub const IM_ICQ: i32 = 6;
    pub const IM_JABBER: i32 = 7;

    pub const EVENT_ANNIVERSARY: i32 = 1;
    pub const EVENT_OTHER: i32 = 2;
    pub const EVENT_BIRTHDAY: i32 = 3;
}

const HEADER_COLOR: u32 = 0xFF_33_33_33;
const SIDE_BAR_COLOR: u32 = 0xFF_DD_DD_DD;

/// Account type used for contacts stored only on the device, and as the
/// source of fallback kinds for sources that lack one.
#[derive(Debug, Clone)]
pub struct FallbackAccountType {
    info: AccountTypeInfo,
}

impl FallbackAccountType {
    pub fn new() -> Self {
        let mut info = AccountTypeInfo::new(None, None);
        info.title_res = res::ACCOUNT_PHONE;
        info.icon_res = res::ICON_PHONE;

        info.add_kind(structured_name());
        info.add_kind(nickname());
        info.add_kind(phone());
        info.add_kind(email());
        info.add_kind(structured_postal());
        info.add_kind(im());
        info.add_kind(organization());
        info.add_kind(note());
        info.add_kind(website());
        info.add_kind(event());
        info.add_kind(group_membership());

        Self { info }
    }
}

impl Default for FallbackAccountType {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountType for FallbackAccountType {
    fn info(&self) -> &AccountTypeInfo {
        &self.info
    }

    fn is_group_membership_editable(&self) -> bool {
        true
    }

    fn header_color(&self, _resolver: &dyn ResourceResolver) -> u32 {
        HEADER_COLOR
    }

    fn side_bar_color(&self, _resolver: &dyn ResourceResolver) -> u32 {
        SIDE_BAR_COLOR
    }
}

fn structured_name() -> DataKind {
    DataKind::new(mime::STRUCTURED_NAME, res::NAME_TITLE, -1, true)
        .type_overall_max(1)
        .action_header(SimpleInflater::string_res(res::NAME_TITLE))
        .action_body(SimpleInflater::column(column::DATA1))
        .with_field(name_field(column::DATA1, res::NAME_FULL).full_name(true).short_form(true))
        .with_field(name_field(column::DATA4, res::NAME_PREFIX).optional(true).long_form(true))
        .with_field(name_field(column::DATA2, res::NAME_GIVEN).long_form(true))
        .with_field(name_field(column::DATA5, res::NAME_MIDDLE).optional(true).long_form(true))
        .with_field(name_field(column::DATA3, res::NAME_FAMILY).long_form(true))
        .with_field(name_field(column::DATA6, res::NAME_SUFFIX).optional(true).long_form(true))
}

fn name_field(column: &str, title_res: ResId) -> EditField {
    EditField::with_input_type(column, title_res, PERSON_NAME)
}

fn nickname() -> DataKind {
    DataKind::new(mime::NICKNAME, res::NICKNAME_TITLE, 115, true)
        .type_overall_max(1)
        .action_header(SimpleInflater::string_res(res::NICKNAME_TITLE))
        .action_body(SimpleInflater::column(column::DATA1))
        .with_field(name_field(column::DATA1, res::NICKNAME_TITLE))
}

fn phone_types() -> Vec<EditType> {
    vec![
        EditType::new(raw::PHONE_HOME, res::PHONE_HOME),
        EditType::new(raw::PHONE_MOBILE, res::PHONE_MOBILE),
        EditType::new(raw::PHONE_WORK, res::PHONE_WORK),
        EditType::new(raw::PHONE_FAX_WORK, res::PHONE_FAX_WORK).secondary(true),
        EditType::new(raw::PHONE_FAX_HOME, res::PHONE_FAX_HOME).secondary(true),
        EditType::new(raw::PHONE_PAGER, res::PHONE_PAGER).secondary(true),
        EditType::new(raw::PHONE_OTHER, res::PHONE_OTHER),
        EditType::new(raw::CUSTOM, res::PHONE_CUSTOM)
            .secondary(true)
            .custom_column(column::DATA3),
    ]
}

fn phone() -> DataKind {
    let types = phone_types();
    let mut kind = DataKind::new(mime::PHONE, res::PHONE_TITLE, 10, true)
        .type_column(column::DATA2)
        .action_header(TypeLabelInflater::new(column::DATA2, types.clone()))
        .action_body(SimpleInflater::formatted(res::PHONE_CALL, column::DATA1))
        .with_field(EditField::with_input_type(
            column::DATA1,
            res::PHONE_TITLE,
            InputType::CLASS_PHONE,
        ));
    kind.type_list = types;
    kind
}

fn email_types() -> Vec<EditType> {
    vec![
        EditType::new(raw::EMAIL_HOME, res::EMAIL_HOME),
        EditType::new(raw::EMAIL_WORK, res::EMAIL_WORK),
        EditType::new(raw::EMAIL_OTHER, res::EMAIL_OTHER),
        EditType::new(raw::EMAIL_MOBILE, res::EMAIL_MOBILE),
        EditType::new(raw::CUSTOM, res::EMAIL_CUSTOM)
            .secondary(true)
            .custom_column(column::DATA3),
    ]
}

fn email() -> DataKind {
    let types = email_types();
    let mut kind = DataKind::new(mime::EMAIL, res::EMAIL_TITLE, 15, true)
        .type_column(column::DATA2)
        .action_header(TypeLabelInflater::new(column::DATA2, types.clone()))
        .action_body(SimpleInflater::formatted(res::EMAIL_SEND, column::DATA1))
        .with_field(EditField::with_input_type(
            column::DATA1,
            res::EMAIL_TITLE,
            TEXT.union(InputType::VARIATION_EMAIL_ADDRESS),
        ));
    kind.type_list = types;
    kind
}

fn structured_postal() -> DataKind {
    let types = vec![
        EditType::new(raw::POSTAL_HOME, res::POSTAL_HOME),
        EditType::new(raw::POSTAL_WORK, res::POSTAL_WORK),
        EditType::new(raw::POSTAL_OTHER, res::POSTAL_OTHER),
        EditType::new(raw::CUSTOM, res::POSTAL_CUSTOM)
            .secondary(true)
            .custom_column(column::DATA3),
    ];
    let address = TEXT
        .union(InputType::VARIATION_POSTAL_ADDRESS)
        .union(InputType::FLAG_CAP_WORDS)
        .union(InputType::FLAG_MULTI_LINE);
    let mut kind = DataKind::new(mime::STRUCTURED_POSTAL, res::POSTAL_TITLE, 25, true)
        .type_column(column::DATA2)
        .action_header(TypeLabelInflater::new(column::DATA2, types.clone()))
        .action_body(SimpleInflater::column(column::DATA1))
        .with_field(
            EditField::with_input_type(column::DATA1, res::POSTAL_ADDRESS, address).min_lines(3),
        );
    kind.type_list = types;
    kind
}

fn im() -> DataKind {
    let types = vec![
        EditType::new(raw::IM_AIM, res::IM_AIM),
        EditType::new(raw::IM_MSN, res::IM_MSN),
        EditType::new(raw::IM_YAHOO, res::IM_YAHOO),
        EditType::new(raw::IM_SKYPE, res::IM_SKYPE),
        EditType::new(raw::IM_QQ, res::IM_QQ),
        EditType::new(raw::IM_GOOGLE_TALK, res::IM_GOOGLE_TALK),
        EditType::new(raw::IM_ICQ, res::IM_ICQ),
        EditType::new(raw::IM_JABBER, res::IM_JABBER),
        EditType::new(raw::IM_CUSTOM, res::IM_CUSTOM)
            .secondary(true)
            .custom_column(column::DATA6),
    ];
    // Protocol lives in data5; data2 is the rarely used home/work type.
    let mut kind = DataKind::new(mime::IM, res::IM_TITLE, 140, true)
        .type_column(column::DATA5)
        .action_header(TypeLabelInflater::new(column::DATA5, types.clone()))
        .action_body(SimpleInflater::column(column::DATA1))
        .with_field(EditField::with_input_type(
            column::DATA1,
            res::IM_TITLE,
            TEXT.union(InputType::VARIATION_EMAIL_ADDRESS),
        ));
    kind.type_list = types;
    kind
}

fn organization() -> DataKind {
    DataKind::new(mime::ORGANIZATION, res::ORGANIZATION_TITLE, 5, true)
        .type_overall_max(1)
        .action_header(SimpleInflater::column(column::DATA1))
        .action_body(SimpleInflater::column(column::DATA4))
        .with_field(EditField::with_input_type(
            column::DATA1,
            res::ORGANIZATION_COMPANY,
            TEXT.union(InputType::FLAG_CAP_WORDS),
        ))
        .with_field(EditField::with_input_type(
            column::DATA4,
            res::ORGANIZATION_JOB_TITLE,
            TEXT.union(InputType::FLAG_CAP_WORDS),
        ))
}

fn note() -> DataKind {
    DataKind::new(mime::NOTE, res::NOTE_TITLE, 130, true)
        .type_overall_max(1)
        .action_header(SimpleInflater::string_res(res::NOTE_TITLE))
        .action_body(SimpleInflater::column(column::DATA1))
        .with_field(
            EditField::with_input_type(
                column::DATA1,
                res::NOTE_TITLE,
                TEXT.union(InputType::FLAG_CAP_SENTENCES).union(InputType::FLAG_MULTI_LINE),
            )
            .min_lines(2),
        )
}

fn website() -> DataKind {
    DataKind::new(mime::WEBSITE, res::WEBSITE_TITLE, 160, true)
        .action_header(SimpleInflater::string_res(res::WEBSITE_TITLE))
        .action_body(SimpleInflater::column(column::DATA1))
        .with_field(EditField::with_input_type(
            column::DATA1,
            res::WEBSITE_TITLE,
            TEXT.union(InputType::VARIATION_URI),
        ))
}

fn event() -> DataKind {
    let types: Vec<EditType> = vec![
        EventEditType::new(raw::EVENT_BIRTHDAY, res::EVENT_BIRTHDAY)
            .year_optional(true)
            .specific_max(1)
            .into(),
        EventEditType::new(raw::EVENT_ANNIVERSARY, res::EVENT_ANNIVERSARY).into(),
        EventEditType::new(raw::EVENT_OTHER, res::EVENT_OTHER).into(),
        EventEditType::new(raw::CUSTOM, res::EVENT_CUSTOM)
            .secondary(true)
            .custom_column(column::DATA3)
            .into(),
    ];
    let mut kind = DataKind::new(mime::EVENT, res::EVENT_TITLE, 120, true)
        .type_column(column::DATA2)
        .action_header(TypeLabelInflater::new(column::DATA2, types.clone()))
        .action_body(SimpleInflater::column(column::DATA1))
        .with_field(EditField::with_input_type(
            column::DATA1,
            res::EVENT_TITLE,
            InputType::CLASS_DATETIME,
        ));
    kind.type_list = types;
    kind
}

fn group_membership() -> DataKind {
    DataKind::new(mime::GROUP_MEMBERSHIP, res::GROUPS_TITLE, 150, true)
        .type_overall_max(1)
        .with_field(EditField::new(column::DATA1, ResId::UNSET))
}
