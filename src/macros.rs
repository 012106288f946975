// src/macros.rs
//
// Call-site capture and leveled emit macros for `Logger` handles.

/// Name of the enclosing function, without its module path.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        name.rsplit("::").next().unwrap_or(name)
    }};
}

/// `Location` of the macro call site.
#[macro_export]
macro_rules! location {
    () => {
        $crate::record::Location::new(
            ::core::module_path!(),
            ::core::file!(),
            ::core::line!(),
            $crate::function_name!(),
        )
    };
}

/// Emits on a logger at an explicit level. The message is only formatted
/// when the logger is enabled for that level.
#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {{
        let __logger = &$logger;
        let __lvl: $crate::level::Level = $lvl;
        if __logger.is_enabled_for(__lvl) {
            __logger.log(__lvl, ::core::format_args!($($arg)+), $crate::location!());
        }
    }};
}

#[macro_export]
macro_rules! logger_debug {
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::level::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! logger_info {
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::level::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! logger_warning {
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::level::Level::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! logger_error {
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::level::Level::Error, $($arg)+) };
}

#[macro_export]
macro_rules! logger_critical {
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::level::Level::Critical, $($arg)+) };
}
