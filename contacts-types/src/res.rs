//! Resource handles resolved by the host platform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Identifier of a string or drawable resource.
///
/// Resource ids are opaque integers assigned by the host. `-1` is the
/// "unset" sentinel and is also the [`Default`], so definitions that omit a
/// resource deserialize to [`ResId::UNSET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResId(i32);

impl ResId {
    /// The "no resource" sentinel.
    pub const UNSET: ResId = ResId(-1);

    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw integer id.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns `true` unless this is the `-1` sentinel.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != -1
    }
}

impl Default for ResId {
    fn default() -> Self {
        Self::UNSET
    }
}

impl From<i32> for ResId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ResId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResId {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| crate::Error::InvalidResId(s.to_string()))
    }
}

/// Opaque icon handle returned by a resource resolver.
///
/// Holds the encoded image bytes; decoding is up to the host.
#[derive(Clone, PartialEq, Eq)]
pub struct Icon(Arc<[u8]>);

impl Icon {
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self(bytes.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icon").field("len", &self.0.len()).finish()
    }
}
