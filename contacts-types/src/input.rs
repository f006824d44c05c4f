//! Editor input-type bitmask.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Input hints applied to the editor widget of an edit field.
    ///
    /// The low nibble holds the input class, bits `0x0ff0` the variation and
    /// the high bits independent flags. Values match the host platform's
    /// encoding so they can be passed through unchanged; unknown bits are
    /// retained.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputType: u32 {
        const CLASS_TEXT = 0x0000_0001;
        const CLASS_NUMBER = 0x0000_0002;
        const CLASS_PHONE = 0x0000_0003;
        const CLASS_DATETIME = 0x0000_0004;

        const VARIATION_URI = 0x0000_0010;
        const VARIATION_EMAIL_ADDRESS = 0x0000_0020;
        const VARIATION_PERSON_NAME = 0x0000_0060;
        const VARIATION_POSTAL_ADDRESS = 0x0000_0070;

        const FLAG_CAP_CHARACTERS = 0x0000_1000;
        const FLAG_CAP_WORDS = 0x0000_2000;
        const FLAG_CAP_SENTENCES = 0x0000_4000;
        const FLAG_AUTO_CORRECT = 0x0000_8000;
        const FLAG_MULTI_LINE = 0x0002_0000;

        const _ = !0;
    }
}

impl InputType {
    /// Returns `true` when the multi-line flag is set.
    #[must_use]
    pub const fn is_multi_line(self) -> bool {
        self.contains(Self::FLAG_MULTI_LINE)
    }
}

// Serialized as the raw integer so definitions can carry platform values.
impl Serialize for InputType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for InputType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::from_bits_retain)
    }
}
