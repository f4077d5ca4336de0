//! Persisted-state round trip.
//!
//! Every principal converts to and from a plain record type. Decoding a
//! record never bypasses the construction invariants: the record is first
//! decoded as-is, then passed through [`PersistedPrincipal::restore`], which
//! re-applies the checks the constructors perform. A record that fails them
//! is rejected with [`PrincipalError::InvalidPersistedState`] rather than
//! producing a principal with an absent name.
//!
//! # Examples
//!
//! ```
//! use principal_core::persist;
//! use principal_core::{ErrorKind, UserPrincipal};
//!
//! let json = persist::to_json(&UserPrincipal::new("alice")).unwrap();
//! let restored: UserPrincipal = persist::from_json(&json).unwrap();
//! assert_eq!(restored, UserPrincipal::new("alice"));
//!
//! let err = persist::from_json::<UserPrincipal>("{}").unwrap_err();
//! assert_eq!(err.kind(), Some(ErrorKind::InvalidPersistedState));
//! ```

use crate::error::{PrincipalError, Result};
use crate::log_event;
use crate::message::Message;
use crate::traits::PrincipalKind;
use crate::utils::LogLevel;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A principal with a persisted record form.
pub trait PersistedPrincipal: Sized {
    /// The persisted record.
    type Record: Serialize + DeserializeOwned;

    /// Snapshot this principal as a record.
    fn to_record(&self) -> Self::Record;

    /// Rebuild a principal from a record, re-validating its invariants.
    ///
    /// # Errors
    ///
    /// [`PrincipalError::InvalidPersistedState`] if the record violates an
    /// invariant the constructor enforces.
    fn restore(record: Self::Record) -> Result<Self>;
}

/// Encode a principal as a JSON string.
pub fn to_json<P: PersistedPrincipal>(principal: &P) -> Result<String> {
    Ok(serde_json::to_string(&principal.to_record())?)
}

/// Decode a principal from a JSON string.
///
/// Malformed JSON yields `Error::Serialization`; a well-formed record that
/// violates an invariant yields [`PrincipalError::InvalidPersistedState`].
pub fn from_json<P: PersistedPrincipal>(data: &str) -> Result<P> {
    let record: P::Record = serde_json::from_str(data)?;
    P::restore(record)
}

/// Encode a principal as a JSON value.
pub fn to_json_value<P: PersistedPrincipal>(principal: &P) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(principal.to_record())?)
}

/// Decode a principal from a JSON value.
pub fn from_json_value<P: PersistedPrincipal>(value: serde_json::Value) -> Result<P> {
    let record: P::Record = serde_json::from_value(value)?;
    P::restore(record)
}

/// Require the restored `name` field to be present.
pub(crate) fn require_name(
    kind: PrincipalKind,
    name: Option<String>,
    message: impl FnOnce() -> Message,
) -> Result<String> {
    match name {
        Some(name) => Ok(name),
        None => {
            let message = message();
            log_event!(LogLevel::Warning, "Rejected persisted principal",
                kind => kind,
                reason => message,
            );
            Err(PrincipalError::InvalidPersistedState(message).into())
        }
    }
}
