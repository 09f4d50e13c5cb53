//! Logging macros that capture the call site
//!
//! Each macro takes a store (anything that derefs to [`LogStore`]) followed by
//! message parts; every part is converted with `ToString`.
//!
//! ```no_run
//! use glyphlog::{log_info, log_with, LoggerConfig, LogComplexity, LogOptions, LogStore};
//!
//! let store = LogStore::new(LoggerConfig::default());
//! log_info!(store, "loaded", 3, "items");
//! log_with!(store, LogOptions::default().with_complexity(LogComplexity::Complex), "detailed");
//! ```
//!
//! [`LogStore`]: crate::LogStore

/// Path of the enclosing function, e.g. `my_crate::module::function`
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __glyphlog_here() {}
        fn __glyphlog_type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __glyphlog_type_name_of(__glyphlog_here);
        let name = name.strip_suffix("::__glyphlog_here").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// [`CallSite`](crate::CallSite) of the macro invocation
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::std::file!(), ::std::line!(), $crate::function_name!())
    };
}

/// Log with explicit [`LogOptions`](crate::LogOptions)
#[macro_export]
macro_rules! log_with {
    ($store:expr, $options:expr $(, $part:expr)* $(,)?) => {
        $store.log(
            ::std::vec![$(::std::string::ToString::to_string(&$part)),*],
            $options,
            $crate::call_site!(),
        )
    };
}

/// Log at `level` with the configured default complexity
#[macro_export]
macro_rules! log_at {
    ($store:expr, $level:expr $(, $part:expr)* $(,)?) => {
        $crate::log_with!($store, $crate::LogOptions::level($level) $(, $part)*)
    };
}

/// Log with the configured default level and complexity
#[macro_export]
macro_rules! log_entry {
    ($store:expr $(, $part:expr)* $(,)?) => {
        $crate::log_with!($store, $crate::LogOptions::default() $(, $part)*)
    };
}

/// Log a fatal entry; the process terminates afterwards
#[macro_export]
macro_rules! log_fatal {
    ($store:expr $(, $part:expr)* $(,)?) => {
        $crate::log_at!($store, $crate::LogLevel::Fatal $(, $part)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($store:expr $(, $part:expr)* $(,)?) => {
        $crate::log_at!($store, $crate::LogLevel::Error $(, $part)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($store:expr $(, $part:expr)* $(,)?) => {
        $crate::log_at!($store, $crate::LogLevel::Warn $(, $part)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($store:expr $(, $part:expr)* $(,)?) => {
        $crate::log_at!($store, $crate::LogLevel::Info $(, $part)*)
    };
}

#[macro_export]
macro_rules! log_success {
    ($store:expr $(, $part:expr)* $(,)?) => {
        $crate::log_at!($store, $crate::LogLevel::Success $(, $part)*)
    };
}

#[macro_export]
macro_rules! log_working {
    ($store:expr $(, $part:expr)* $(,)?) => {
        $crate::log_at!($store, $crate::LogLevel::Working $(, $part)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($store:expr $(, $part:expr)* $(,)?) => {
        $crate::log_at!($store, $crate::LogLevel::Debug $(, $part)*)
    };
}
