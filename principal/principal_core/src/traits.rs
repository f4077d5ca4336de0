//! The principal capability.
//!
//! A principal is a named value representing one claimed aspect of an
//! authenticated subject, such as a user name or a group membership. The
//! concrete principal types share no fields and no equality rules, so the
//! shared behavior lives in the [`Principal`] trait rather than a common
//! struct.
//!
//! `dyn Principal` implements `PartialEq`, `Eq`, `Hash` and `Display`, which
//! lets heterogeneous principals live in one collection:
//!
//! ```
//! use principal_core::{NtUserPrincipal, Principal, UserPrincipal};
//! use std::collections::HashSet;
//!
//! let mut set: HashSet<Box<dyn Principal>> = HashSet::new();
//! set.insert(Box::new(UserPrincipal::new("alice")));
//! set.insert(Box::new(NtUserPrincipal::new("alice")));
//! set.insert(Box::new(UserPrincipal::new("alice")));
//!
//! // Same name, different principal types: both are kept.
//! assert_eq!(set.len(), 2);
//! ```

use crate::message::MessageFormatter;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The concrete kind of a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalKind {
    /// A user identified by a user or account name.
    User,

    /// A Windows user.
    NtUser,

    /// A Unix group identified by its numeric GID.
    UnixNumericGroup,
}

impl PrincipalKind {
    /// Stable name of this kind, as used in persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::NtUser => "nt_user",
            Self::UnixNumericGroup => "unix_numeric_group",
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core trait for principals.
///
/// Implementations are immutable values: every method is a pure read.
pub trait Principal: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The principal's name.
    fn name(&self) -> &str;

    /// The concrete kind of this principal.
    fn kind(&self) -> PrincipalKind;

    /// Human-readable form rendered through `formatter`.
    ///
    /// The `Display` implementation is equivalent to calling this with the
    /// default resource bundle.
    fn describe(&self, formatter: &dyn MessageFormatter) -> String;

    /// Upcast for downcasting in [`Principal::principal_eq`].
    fn as_any(&self) -> &dyn Any;

    /// Equality across principal types.
    ///
    /// Returns `true` only when `other` is the same concrete type and equal
    /// to `self` under that type's own equality.
    fn principal_eq(&self, other: &dyn Principal) -> bool;

    /// Feed this principal into a type-erased hasher, consistently with
    /// [`Principal::principal_eq`].
    fn principal_hash(&self, state: &mut dyn Hasher);
}

/// Implements the type-erased parts of [`Principal`] for a type that is
/// already `PartialEq + Hash`.
macro_rules! impl_erased_principal {
    () => {
        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn principal_eq(&self, other: &dyn $crate::traits::Principal) -> bool {
            other
                .as_any()
                .downcast_ref::<Self>()
                .is_some_and(|other| self == other)
        }

        fn principal_hash(&self, mut state: &mut dyn ::std::hash::Hasher) {
            ::std::hash::Hash::hash(self, &mut state)
        }
    };
}

pub(crate) use impl_erased_principal;

impl PartialEq for dyn Principal {
    fn eq(&self, other: &Self) -> bool {
        self.principal_eq(other)
    }
}

impl Eq for dyn Principal {}

impl Hash for dyn Principal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.principal_hash(state)
    }
}

/// Compare a principal against a possibly absent one.
///
/// An absent principal is never equal to anything.
pub fn principal_equals(this: &dyn Principal, other: Option<&dyn Principal>) -> bool {
    other.is_some_and(|other| this.principal_eq(other))
}
