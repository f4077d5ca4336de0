//! Unix numeric group principal.

use crate::error::{PrincipalError, Result};
use crate::message::{default_bundle, keys, Message, MessageFormatter};
use crate::persist::{self, PersistedPrincipal};
use crate::traits::{impl_erased_principal, Principal, PrincipalKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A principal representing one of a user's Unix group identification
/// numbers (GID).
///
/// The GID is stored as text. Whether that text is actually numeric is only
/// checked by [`UnixNumericGroupPrincipal::long_value`]; construction accepts
/// any string.
///
/// Two group principals are equal when both the GID text and the primary
/// group flag match.
///
/// # Examples
///
/// ```
/// use principal_core::UnixNumericGroupPrincipal;
///
/// let wheel = UnixNumericGroupPrincipal::from_gid(10, true);
/// assert_eq!(wheel.name(), "10");
/// assert_eq!(wheel.long_value().unwrap(), 10);
/// assert_eq!(wheel.to_string(), "UnixNumericGroupPrincipal [Primary Group]: 10");
///
/// let staff = UnixNumericGroupPrincipal::new("10", false);
/// assert_ne!(wheel, staff);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(
    try_from = "UnixNumericGroupPrincipalRecord",
    into = "UnixNumericGroupPrincipalRecord"
)]
pub struct UnixNumericGroupPrincipal {
    name: String,
    primary_group: bool,
}

impl UnixNumericGroupPrincipal {
    /// Create a group principal from the textual GID.
    pub fn new(name: impl Into<String>, primary_group: bool) -> Self {
        Self {
            name: name.into(),
            primary_group,
        }
    }

    /// Create a group principal from a textual GID that may be absent.
    ///
    /// # Errors
    ///
    /// [`PrincipalError::InvalidArgument`] if `name` is `None`.
    pub fn try_new(name: Option<String>, primary_group: bool) -> Result<Self> {
        match name {
            Some(name) => Ok(Self::new(name, primary_group)),
            None => Err(PrincipalError::InvalidArgument(Message::null_input("name")).into()),
        }
    }

    /// Create a group principal from a numeric GID.
    pub fn from_gid(gid: i64, primary_group: bool) -> Self {
        Self::new(gid.to_string(), primary_group)
    }

    /// The GID as stored.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The GID parsed as a signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// [`PrincipalError::NumberFormat`] if the stored name is not a decimal
    /// integer or does not fit in an `i64`.
    pub fn long_value(&self) -> Result<i64> {
        self.name.parse::<i64>().map_err(|source| {
            PrincipalError::NumberFormat {
                value: self.name.clone(),
                source,
            }
            .into()
        })
    }

    /// Whether this GID is the user's primary group.
    pub fn is_primary_group(&self) -> bool {
        self.primary_group
    }

    fn display_key(&self) -> &'static str {
        if self.primary_group {
            keys::UNIX_PRIMARY_GROUP_NAME
        } else {
            keys::UNIX_SUPPLEMENTARY_GROUP_NAME
        }
    }
}

impl fmt::Display for UnixNumericGroupPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(default_bundle()))
    }
}

impl Principal for UnixNumericGroupPrincipal {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PrincipalKind {
        PrincipalKind::UnixNumericGroup
    }

    fn describe(&self, formatter: &dyn MessageFormatter) -> String {
        formatter.format(self.display_key(), &[self.name.as_str()])
    }

    impl_erased_principal!();
}

/// Persisted form of a [`UnixNumericGroupPrincipal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnixNumericGroupPrincipalRecord {
    /// The textual GID.
    pub name: Option<String>,

    /// Whether the GID is the primary group. Defaults to `false` when absent.
    #[serde(default)]
    pub primary_group: bool,
}

impl PersistedPrincipal for UnixNumericGroupPrincipal {
    type Record = UnixNumericGroupPrincipalRecord;

    fn to_record(&self) -> UnixNumericGroupPrincipalRecord {
        UnixNumericGroupPrincipalRecord {
            name: Some(self.name.clone()),
            primary_group: self.primary_group,
        }
    }

    fn restore(record: UnixNumericGroupPrincipalRecord) -> Result<Self> {
        let name = persist::require_name(PrincipalKind::UnixNumericGroup, record.name, || {
            Message::null_input("name")
        })?;
        Ok(Self {
            name,
            primary_group: record.primary_group,
        })
    }
}

impl From<UnixNumericGroupPrincipal> for UnixNumericGroupPrincipalRecord {
    fn from(principal: UnixNumericGroupPrincipal) -> Self {
        Self {
            name: Some(principal.name),
            primary_group: principal.primary_group,
        }
    }
}

impl TryFrom<UnixNumericGroupPrincipalRecord> for UnixNumericGroupPrincipal {
    type Error = crate::error::Error;

    fn try_from(record: UnixNumericGroupPrincipalRecord) -> Result<Self> {
        Self::restore(record)
    }
}
