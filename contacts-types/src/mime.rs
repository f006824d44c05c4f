//! MIME types of the standard contact data kinds.

pub const STRUCTURED_NAME: &str = "vnd.android.cursor.item/name";
pub const NICKNAME: &str = "vnd.android.cursor.item/nickname";
pub const PHONE: &str = "vnd.android.cursor.item/phone_v2";
pub const EMAIL: &str = "vnd.android.cursor.item/email_v2";
pub const STRUCTURED_POSTAL: &str = "vnd.android.cursor.item/postal-address_v2";
pub const IM: &str = "vnd.android.cursor.item/im";
pub const ORGANIZATION: &str = "vnd.android.cursor.item/organization";
pub const NOTE: &str = "vnd.android.cursor.item/note";
pub const WEBSITE: &str = "vnd.android.cursor.item/website";
pub const EVENT: &str = "vnd.android.cursor.item/contact_event";
pub const GROUP_MEMBERSHIP: &str = "vnd.android.cursor.item/group_membership";
