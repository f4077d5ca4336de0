//! Localized message resources.
//!
//! Principals never build human-readable strings themselves. They name a
//! resource key and a list of positional arguments, and a
//! [`MessageFormatter`] turns that pair into text. The built-in
//! [`ResourceBundle::auth`] bundle carries the English strings; callers can
//! inject their own formatter (for another locale, or a deterministic stub in
//! tests) through [`Principal::describe`](crate::traits::Principal::describe)
//! and [`Message::render`].
//!
//! # Examples
//!
//! ```
//! use principal_core::message::{keys, MessageFormatter, ResourceBundle};
//!
//! let bundle = ResourceBundle::auth();
//! assert_eq!(
//!     bundle.format(keys::NT_USER_NAME, &["alice"]),
//!     "NTUserPrincipal: alice"
//! );
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Resource keys used by the principal types.
pub mod keys {
    /// A required input was absent. Argument: the input's name.
    pub const INVALID_NULL_INPUT: &str = "invalid.null.input.value";

    /// Display form of a Windows user principal. Argument: the user name.
    pub const NT_USER_NAME: &str = "NTUserPrincipal.name";

    /// Display form of a primary Unix group. Argument: the GID.
    pub const UNIX_PRIMARY_GROUP_NAME: &str = "UnixNumericGroupPrincipal.Primary.Group.name";

    /// Display form of a supplementary Unix group. Argument: the GID.
    pub const UNIX_SUPPLEMENTARY_GROUP_NAME: &str =
        "UnixNumericGroupPrincipal.Supplementary.Group.name";
}

/// Turns a resource key and positional arguments into display text.
pub trait MessageFormatter: Send + Sync {
    /// Format the message registered under `key` with `args`.
    fn format(&self, key: &str, args: &[&str]) -> String;
}

impl<F> MessageFormatter for F
where
    F: Fn(&str, &[&str]) -> String + Send + Sync,
{
    fn format(&self, key: &str, args: &[&str]) -> String {
        self(key, args)
    }
}

/// A keyed set of message templates for one locale.
///
/// Templates use positional placeholders (`{0}`, `{1}`, ...). A single quote
/// starts or ends a quoted section whose braces are copied literally, and
/// `''` stands for one quote character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    locale: String,
    templates: HashMap<String, String>,
}

impl ResourceBundle {
    /// Create an empty bundle for `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            templates: HashMap::new(),
        }
    }

    /// The built-in English bundle for the auth principals.
    pub fn auth() -> Self {
        Self::new("en")
            .with_template(keys::INVALID_NULL_INPUT, "invalid null input: {0}")
            .with_template(keys::NT_USER_NAME, "NTUserPrincipal: {0}")
            .with_template(
                keys::UNIX_PRIMARY_GROUP_NAME,
                "UnixNumericGroupPrincipal [Primary Group]: {0}",
            )
            .with_template(
                keys::UNIX_SUPPLEMENTARY_GROUP_NAME,
                "UnixNumericGroupPrincipal [Supplementary Group]: {0}",
            )
    }

    /// Add or replace a template, returning the bundle for chaining.
    pub fn with_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    /// Add or replace a template, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) -> Option<String> {
        self.templates.insert(key.into(), template.into())
    }

    /// Look up the raw template for `key`.
    pub fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// Iterate over `(key, template)` pairs in no particular order.
    pub fn templates(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates
            .iter()
            .map(|(key, template)| (key.as_str(), template.as_str()))
    }

    /// The locale tag this bundle was built for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of templates in the bundle.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the bundle has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for ResourceBundle {
    fn default() -> Self {
        Self::auth()
    }
}

impl MessageFormatter for ResourceBundle {
    fn format(&self, key: &str, args: &[&str]) -> String {
        match self.template(key) {
            Some(template) => format_template(template, args),
            None => KeyEchoFormatter.format(key, args),
        }
    }
}

/// The process-wide bundle used by `Display` implementations.
pub fn default_bundle() -> &'static ResourceBundle {
    static BUNDLE: OnceLock<ResourceBundle> = OnceLock::new();
    BUNDLE.get_or_init(ResourceBundle::auth)
}

/// Formatter that ignores templates and echoes the key with its arguments.
///
/// The output is `key` when there are no arguments and `key(a, b)` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyEchoFormatter;

impl MessageFormatter for KeyEchoFormatter {
    fn format(&self, key: &str, args: &[&str]) -> String {
        if args.is_empty() {
            key.to_string()
        } else {
            format!("{}({})", key, args.join(", "))
        }
    }
}

/// Substitute positional `args` into `template`.
///
/// Placeholders may carry a format suffix (`{0,number}`); only the index is
/// used. Placeholders whose index has no argument are copied through as-is.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                } else {
                    quoted = !quoted;
                }
            }
            '{' if !quoted => {
                let mut placeholder = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    placeholder.push(c);
                }

                let arg = placeholder
                    .split(',')
                    .next()
                    .and_then(|index| index.trim().parse::<usize>().ok())
                    .and_then(|index| args.get(index));

                match arg {
                    Some(arg) if closed => out.push_str(arg),
                    _ => {
                        out.push('{');
                        out.push_str(&placeholder);
                        if closed {
                            out.push('}');
                        }
                    }
                }
            }
            c => out.push(c),
        }
    }

    out
}

/// A message that is rendered only when someone needs the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Fixed text, never localized.
    Text(String),

    /// A resource key plus positional arguments.
    Resource {
        /// The resource key.
        key: &'static str,
        /// Positional arguments.
        args: Vec<String>,
    },
}

impl Message {
    /// Fixed text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// A resource reference.
    pub fn resource<I, S>(key: &'static str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Resource {
            key,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The "absent input" message for the input named `what`.
    pub fn null_input(what: &str) -> Self {
        Self::resource(keys::INVALID_NULL_INPUT, [what])
    }

    /// The resource key, if this is a resource message.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Text(_) => None,
            Self::Resource { key, .. } => Some(*key),
        }
    }

    /// The positional arguments. Empty for fixed text.
    pub fn args(&self) -> &[String] {
        match self {
            Self::Text(_) => &[],
            Self::Resource { args, .. } => args,
        }
    }

    /// Render with the given formatter.
    pub fn render(&self, formatter: &dyn MessageFormatter) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Resource { key, args } => {
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                formatter.format(key, &args)
            }
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(default_bundle()))
    }
}
