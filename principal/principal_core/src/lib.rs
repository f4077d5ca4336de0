//! # Principal Core
//!
//! `principal_core` provides immutable principal value types: named values
//! that represent one claimed aspect of an authenticated subject, such as a
//! user name or a group membership. An external subject or credential
//! framework aggregates them and bases authorization decisions on them; this
//! crate performs no authentication and makes no access decisions.
//!
//! ## Principals
//!
//! - [`UserPrincipal`]: a generic user or account name, displayed verbatim.
//! - [`NtUserPrincipal`]: a Windows user name.
//! - [`UnixNumericGroupPrincipal`]: a Unix GID with a primary-group flag.
//!
//! All three implement the [`Principal`] trait (name, equality, hash,
//! display form) and [`PersistedPrincipal`](persist::PersistedPrincipal)
//! (record round trip with validation on reload).
//!
//! ## Crate Structure
//!
//! - **error**: Error types
//! - **message**: Localized message resources used for display strings and
//!   error messages
//! - **traits**: The `Principal` capability
//! - **principal**: The principal value types
//! - **persist**: Persisted-state encoding and validated decoding
//! - **utils**: Configuration and log levels
//! - **macros**: Logging macro

pub mod error;
pub mod macros;
pub mod message;
pub mod persist;
pub mod principal;
pub mod traits;
pub mod utils;

// Re-export key types and traits for convenience
pub use error::{Error, ErrorKind, PrincipalError, Result};
pub use message::{KeyEchoFormatter, Message, MessageFormatter, ResourceBundle};
pub use persist::PersistedPrincipal;
pub use principal::{AnyPrincipal, NtUserPrincipal, UnixNumericGroupPrincipal, UserPrincipal};
pub use traits::{principal_equals, Principal, PrincipalKind};
pub use utils::{LogLevel, MessageConfig};
