//! Principal value types.
//!
//! Three independent, immutable principals:
//!
//! - [`UserPrincipal`]: a generic user or account name.
//! - [`NtUserPrincipal`]: a Windows user name.
//! - [`UnixNumericGroupPrincipal`]: a Unix GID plus a primary-group flag.
//!
//! [`AnyPrincipal`] wraps any of them for code that persists or passes
//! around mixed principals by value.

pub mod nt_user;
pub mod unix_group;
pub mod user;

pub use nt_user::{NtUserPrincipal, NtUserPrincipalRecord};
pub use unix_group::{UnixNumericGroupPrincipal, UnixNumericGroupPrincipalRecord};
pub use user::{UserPrincipal, UserPrincipalRecord};

use crate::error::Result;
use crate::persist::PersistedPrincipal;
use crate::traits::{Principal, PrincipalKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Any one of the principal types.
///
/// Persisted with a `"type"` tag next to the principal's own fields:
///
/// ```
/// use principal_core::{AnyPrincipal, UnixNumericGroupPrincipal};
///
/// let any = AnyPrincipal::from(UnixNumericGroupPrincipal::from_gid(100, false));
/// let json = serde_json::to_value(&any).unwrap();
/// assert_eq!(json["type"], "unix_numeric_group");
/// assert_eq!(json["name"], "100");
/// assert_eq!(json["primary_group"], false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AnyPrincipalRecord", into = "AnyPrincipalRecord")]
pub enum AnyPrincipal {
    /// A [`UserPrincipal`].
    User(UserPrincipal),

    /// An [`NtUserPrincipal`].
    NtUser(NtUserPrincipal),

    /// A [`UnixNumericGroupPrincipal`].
    UnixNumericGroup(UnixNumericGroupPrincipal),
}

impl AnyPrincipal {
    /// Borrow the wrapped principal through the shared trait.
    pub fn as_principal(&self) -> &dyn Principal {
        match self {
            Self::User(p) => p,
            Self::NtUser(p) => p,
            Self::UnixNumericGroup(p) => p,
        }
    }

    /// The wrapped principal's name.
    pub fn name(&self) -> &str {
        self.as_principal().name()
    }

    /// The wrapped principal's kind.
    pub fn kind(&self) -> PrincipalKind {
        self.as_principal().kind()
    }

    /// Move the wrapped principal into a trait object.
    pub fn into_boxed(self) -> Box<dyn Principal> {
        match self {
            Self::User(p) => Box::new(p),
            Self::NtUser(p) => Box::new(p),
            Self::UnixNumericGroup(p) => Box::new(p),
        }
    }
}

impl fmt::Display for AnyPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_principal(), f)
    }
}

impl From<UserPrincipal> for AnyPrincipal {
    fn from(p: UserPrincipal) -> Self {
        Self::User(p)
    }
}

impl From<NtUserPrincipal> for AnyPrincipal {
    fn from(p: NtUserPrincipal) -> Self {
        Self::NtUser(p)
    }
}

impl From<UnixNumericGroupPrincipal> for AnyPrincipal {
    fn from(p: UnixNumericGroupPrincipal) -> Self {
        Self::UnixNumericGroup(p)
    }
}

/// Persisted form of an [`AnyPrincipal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnyPrincipalRecord {
    /// A user principal record.
    User(UserPrincipalRecord),

    /// A Windows user principal record.
    NtUser(NtUserPrincipalRecord),

    /// A Unix numeric group principal record.
    UnixNumericGroup(UnixNumericGroupPrincipalRecord),
}

impl PersistedPrincipal for AnyPrincipal {
    type Record = AnyPrincipalRecord;

    fn to_record(&self) -> AnyPrincipalRecord {
        match self {
            Self::User(p) => AnyPrincipalRecord::User(p.to_record()),
            Self::NtUser(p) => AnyPrincipalRecord::NtUser(p.to_record()),
            Self::UnixNumericGroup(p) => AnyPrincipalRecord::UnixNumericGroup(p.to_record()),
        }
    }

    fn restore(record: AnyPrincipalRecord) -> Result<Self> {
        Ok(match record {
            AnyPrincipalRecord::User(r) => Self::User(UserPrincipal::restore(r)?),
            AnyPrincipalRecord::NtUser(r) => Self::NtUser(NtUserPrincipal::restore(r)?),
            AnyPrincipalRecord::UnixNumericGroup(r) => {
                Self::UnixNumericGroup(UnixNumericGroupPrincipal::restore(r)?)
            }
        })
    }
}

impl From<AnyPrincipal> for AnyPrincipalRecord {
    fn from(principal: AnyPrincipal) -> Self {
        principal.to_record()
    }
}

impl TryFrom<AnyPrincipalRecord> for AnyPrincipal {
    type Error = crate::error::Error;

    fn try_from(record: AnyPrincipalRecord) -> Result<Self> {
        Self::restore(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_never_compare_equal() {
        let user = AnyPrincipal::from(UserPrincipal::new("7"));
        let nt_user = AnyPrincipal::from(NtUserPrincipal::new("7"));
        let group = AnyPrincipal::from(UnixNumericGroupPrincipal::new("7", true));

        assert_ne!(user, nt_user);
        assert_ne!(user, group);
        assert_ne!(nt_user, group);
        assert_eq!(user.name(), group.name());
    }

    #[test]
    fn test_display_and_kind_delegate() {
        let any = AnyPrincipal::from(NtUserPrincipal::new("frank"));
        assert_eq!(any.kind(), PrincipalKind::NtUser);
        assert_eq!(any.to_string(), "NTUserPrincipal: frank");

        let boxed = any.clone().into_boxed();
        assert!(boxed.principal_eq(any.as_principal()));
    }
}
