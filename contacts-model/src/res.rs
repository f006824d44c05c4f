//! Local resource ids of the built-in labels, icons and titles.
//!
//! Hosts map these to localized text through their [`ResourceResolver`].
//!
//! [`ResourceResolver`]: crate::ResourceResolver

use contacts_types::ResId;

pub const ACCOUNT_PHONE: ResId = ResId::new(1000);
pub const ICON_PHONE: ResId = ResId::new(1001);

pub const NAME_TITLE: ResId = ResId::new(1100);
pub const NAME_GIVEN: ResId = ResId::new(1101);
pub const NAME_FAMILY: ResId = ResId::new(1102);
pub const NAME_PREFIX: ResId = ResId::new(1103);
pub const NAME_MIDDLE: ResId = ResId::new(1104);
pub const NAME_SUFFIX: ResId = ResId::new(1105);
pub const NAME_FULL: ResId = ResId::new(1106);
pub const NICKNAME_TITLE: ResId = ResId::new(1110);

pub const PHONE_TITLE: ResId = ResId::new(1200);
pub const PHONE_HOME: ResId = ResId::new(1201);
pub const PHONE_MOBILE: ResId = ResId::new(1202);
pub const PHONE_WORK: ResId = ResId::new(1203);
pub const PHONE_FAX_WORK: ResId = ResId::new(1204);
pub const PHONE_FAX_HOME: ResId = ResId::new(1205);
pub const PHONE_PAGER: ResId = ResId::new(1206);
pub const PHONE_OTHER: ResId = ResId::new(1207);
pub const PHONE_CUSTOM: ResId = ResId::new(1208);
pub const PHONE_CALL: ResId = ResId::new(1209);

pub const EMAIL_TITLE: ResId = ResId::new(1300);
pub const EMAIL_HOME: ResId = ResId::new(1301);
pub const EMAIL_WORK: ResId = ResId::new(1302);
pub const EMAIL_OTHER: ResId = ResId::new(1303);
pub const EMAIL_MOBILE: ResId = ResId::new(1304);
pub const EMAIL_CUSTOM: ResId = ResId::new(1305);
pub const EMAIL_SEND: ResId = ResId::new(1306);

pub const POSTAL_TITLE: ResId = ResId::new(1400);
pub const POSTAL_HOME: ResId = ResId::new(1401);
pub const POSTAL_WORK: ResId = ResId::new(1402);
pub const POSTAL_OTHER: ResId = ResId::new(1403);
pub const POSTAL_CUSTOM: ResId = ResId::new(1404);
pub const POSTAL_ADDRESS: ResId = ResId::new(1405);

pub const IM_TITLE: ResId = ResId::new(1500);
pub const IM_AIM: ResId = ResId::new(1501);
pub const IM_MSN: ResId = ResId::new(1502);
pub const IM_YAHOO: ResId = ResId::new(1503);
pub const IM_SKYPE: ResId = ResId::new(1504);
pub const IM_QQ: ResId = ResId::new(1505);
pub const IM_GOOGLE_TALK: ResId = ResId::new(1506);
pub const IM_ICQ: ResId = ResId::new(1507);
pub const IM_JABBER: ResId = ResId::new(1508);
pub const IM_CUSTOM: ResId = ResId::new(1509);

pub const ORGANIZATION_TITLE: ResId = ResId::new(1600);
pub const ORGANIZATION_COMPANY: ResId = ResId::new(1601);
pub const ORGANIZATION_JOB_TITLE: ResId = ResId::new(1602);

pub const NOTE_TITLE: ResId = ResId::new(1700);
pub const WEBSITE_TITLE: ResId = ResId::new(1800);

pub const EVENT_TITLE: ResId = ResId::new(1900);
pub const EVENT_BIRTHDAY: ResId = ResId::new(1901);
pub const EVENT_ANNIVERSARY: ResId = ResId::new(1902);
pub const EVENT_OTHER: ResId = ResId::new(1903);
pub const EVENT_CUSTOM: ResId = ResId::new(1904);

pub const GROUPS_TITLE: ResId = ResId::new(2000);
