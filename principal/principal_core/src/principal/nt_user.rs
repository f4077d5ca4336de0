//! Windows user principal.

use crate::error::{PrincipalError, Result};
use crate::message::{default_bundle, keys, Message, MessageFormatter};
use crate::persist::{self, PersistedPrincipal};
use crate::traits::{impl_erased_principal, Principal, PrincipalKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A principal representing a Windows user, identified by account name.
///
/// Its display form comes from the `NTUserPrincipal.name` message resource.
///
/// # Examples
///
/// ```
/// use principal_core::{NtUserPrincipal, Principal};
/// use principal_core::message::KeyEchoFormatter;
///
/// let user = NtUserPrincipal::new("CORP\\alice");
/// assert_eq!(user.to_string(), "NTUserPrincipal: CORP\\alice");
/// assert_eq!(user.describe(&KeyEchoFormatter), "NTUserPrincipal.name(CORP\\alice)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "NtUserPrincipalRecord", into = "NtUserPrincipalRecord")]
pub struct NtUserPrincipal {
    name: String,
}

impl NtUserPrincipal {
    /// Create a principal for the given Windows user name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Create a principal from a user name that may be absent.
    ///
    /// # Errors
    ///
    /// [`PrincipalError::InvalidArgument`] if `name` is `None`.
    pub fn try_new(name: Option<String>) -> Result<Self> {
        name.map(Self::new)
            .ok_or_else(|| PrincipalError::InvalidArgument(Message::null_input("name")).into())
    }

    /// The Windows user name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NtUserPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(default_bundle()))
    }
}

impl Principal for NtUserPrincipal {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PrincipalKind {
        PrincipalKind::NtUser
    }

    fn describe(&self, formatter: &dyn MessageFormatter) -> String {
        formatter.format(keys::NT_USER_NAME, &[self.name.as_str()])
    }

    impl_erased_principal!();
}

/// Persisted form of an [`NtUserPrincipal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NtUserPrincipalRecord {
    /// The Windows user name.
    pub name: Option<String>,
}

impl PersistedPrincipal for NtUserPrincipal {
    type Record = NtUserPrincipalRecord;

    fn to_record(&self) -> NtUserPrincipalRecord {
        NtUserPrincipalRecord {
            name: Some(self.name.clone()),
        }
    }

    fn restore(record: NtUserPrincipalRecord) -> Result<Self> {
        let name = persist::require_name(PrincipalKind::NtUser, record.name, || {
            Message::null_input("name")
        })?;
        Ok(Self { name })
    }
}

impl From<NtUserPrincipal> for NtUserPrincipalRecord {
    fn from(principal: NtUserPrincipal) -> Self {
        Self {
            name: Some(principal.name),
        }
    }
}

impl TryFrom<NtUserPrincipalRecord> for NtUserPrincipal {
    type Error = crate::error::Error;

    fn try_from(record: NtUserPrincipalRecord) -> Result<Self> {
        Self::restore(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::message::KeyEchoFormatter;

    #[test]
    fn test_display_uses_message_resource() {
        let user = NtUserPrincipal::new("dave");
        assert_eq!(user.name(), "dave");
        assert_eq!(user.to_string(), "NTUserPrincipal: dave");
        assert_eq!(user.describe(&KeyEchoFormatter), "NTUserPrincipal.name(dave)");
    }

    #[test]
    fn test_absent_name_message() {
        let err = NtUserPrincipal::try_new(None).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidArgument));

        let crate::error::Error::Principal(err) = err else {
            panic!("expected a principal error");
        };
        let message = err.message().unwrap();
        assert_eq!(message.key(), Some(keys::INVALID_NULL_INPUT));
        assert_eq!(message.args(), ["name".to_string()]);
        assert_eq!(err.to_string(), "invalid null input: name");
    }

    #[test]
    fn test_restore_absent_name() {
        let err = NtUserPrincipal::restore(NtUserPrincipalRecord { name: None }).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidPersistedState));
    }

    #[test]
    fn test_equality_by_name() {
        assert_eq!(NtUserPrincipal::new("eve"), NtUserPrincipal::new("eve"));
        assert_ne!(NtUserPrincipal::new("eve"), NtUserPrincipal::new("Eve"));
    }
}
