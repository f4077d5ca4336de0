//! Convenience macros.

/// Log an event with the given level, prefixed with the calling module.
///
/// Optional `key => value` pairs are appended as `key=value` metadata.
///
/// # Examples
///
/// ```
/// use principal_core::log_event;
/// use principal_core::utils::LogLevel;
///
/// log_event!(LogLevel::Info, "Loaded message bundle");
///
/// log_event!(LogLevel::Debug, "Loaded message bundle",
///     locale => "en",
///     templates => 4,
/// );
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:expr, $message:expr) => {
        match $level {
            $crate::utils::LogLevel::Error => log::error!("[{}] {}", module_path!(), $message),
            $crate::utils::LogLevel::Warning => log::warn!("[{}] {}", module_path!(), $message),
            $crate::utils::LogLevel::Info => log::info!("[{}] {}", module_path!(), $message),
            $crate::utils::LogLevel::Debug => log::debug!("[{}] {}", module_path!(), $message),
            $crate::utils::LogLevel::Trace => log::trace!("[{}] {}", module_path!(), $message),
        }
    };

    ($level:expr, $message:expr, $($key:ident => $value:expr),+ $(,)?) => {
        {
            let metadata = vec![$(format!("{}={}", stringify!($key), $value)),+].join(" ");
            match $level {
                $crate::utils::LogLevel::Error => log::error!("[{}] {}: {}", module_path!(), $message, metadata),
                $crate::utils::LogLevel::Warning => log::warn!("[{}] {}: {}", module_path!(), $message, metadata),
                $crate::utils::LogLevel::Info => log::info!("[{}] {}: {}", module_path!(), $message, metadata),
                $crate::utils::LogLevel::Debug => log::debug!("[{}] {}: {}", module_path!(), $message, metadata),
                $crate::utils::LogLevel::Trace => log::trace!("[{}] {}: {}", module_path!(), $message, metadata),
            }
        }
    };
}
