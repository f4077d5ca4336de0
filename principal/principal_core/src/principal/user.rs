//! A user principal identified by a user or account name.

use crate::error::{PrincipalError, Result};
use crate::message::{Message, MessageFormatter};
use crate::persist::{self, PersistedPrincipal};
use crate::traits::{impl_erased_principal, Principal, PrincipalKind};
use serde::{Deserialize, Serialize};
use std::fmt;

const NULL_NAME: &str = "null name is illegal";

/// A user principal identified by a user name or account name.
///
/// After successful authentication, a `UserPrincipal` can be associated with
/// a subject to augment it with an additional identity. Its display form is
/// the name itself, with no localization.
///
/// This type is immutable.
///
/// # Examples
///
/// ```
/// use principal_core::UserPrincipal;
///
/// let alice = UserPrincipal::new("alice");
/// assert_eq!(alice.name(), "alice");
/// assert_eq!(alice.to_string(), "alice");
/// assert_eq!(alice, UserPrincipal::new(String::from("alice")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "UserPrincipalRecord", into = "UserPrincipalRecord")]
pub struct UserPrincipal {
    name: String,
}

impl UserPrincipal {
    /// Create a principal with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Create a principal from a name that may be absent.
    ///
    /// # Errors
    ///
    /// [`PrincipalError::InvalidArgument`] if `name` is `None`.
    pub fn try_new(name: Option<String>) -> Result<Self> {
        match name {
            Some(name) => Ok(Self::new(name)),
            None => Err(PrincipalError::InvalidArgument(Message::text(NULL_NAME)).into()),
        }
    }

    /// The principal's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consume the principal, returning its name.
    pub fn into_name(self) -> String {
        self.name
    }
}

impl From<&str> for UserPrincipal {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for UserPrincipal {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for UserPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Principal for UserPrincipal {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PrincipalKind {
        PrincipalKind::User
    }

    fn describe(&self, _formatter: &dyn MessageFormatter) -> String {
        self.name.clone()
    }

    impl_erased_principal!();
}

/// Persisted form of a [`UserPrincipal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPrincipalRecord {
    /// The principal's name.
    pub name: Option<String>,
}

impl PersistedPrincipal for UserPrincipal {
    type Record = UserPrincipalRecord;

    fn to_record(&self) -> UserPrincipalRecord {
        UserPrincipalRecord {
            name: Some(self.name.clone()),
        }
    }

    fn restore(record: UserPrincipalRecord) -> Result<Self> {
        let name = persist::require_name(PrincipalKind::User, record.name, || {
            Message::text(NULL_NAME)
        })?;
        Ok(Self { name })
    }
}

impl From<UserPrincipal> for UserPrincipalRecord {
    fn from(principal: UserPrincipal) -> Self {
        Self {
            name: Some(principal.name),
        }
    }
}

impl TryFrom<UserPrincipalRecord> for UserPrincipal {
    type Error = crate::error::Error;

    fn try_from(record: UserPrincipalRecord) -> Result<Self> {
        Self::restore(record)
    }
}
