/// Captures the current source location as a [`CallSite`](crate::CallSite).
///
/// Expands to the enclosing file, line and function name. Inside a closure
/// the name of the enclosing function is used.
///
/// # Example
///
/// ```
/// let site = server_report::call_site!();
/// assert!(site.file().ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let mut path = name_of(here);
        path = path.strip_suffix("::here").unwrap_or(path);
        while let Some(enclosing) = path.strip_suffix("::{{closure}}") {
            path = enclosing;
        }
        let function = path.rsplit("::").next().unwrap_or(path);
        $crate::CallSite::new(file!(), line!(), function)
    }};
}

/// Reports `error` as a `ServerError` captured at the current call site.
///
/// Shorthand for
/// [`capture_server_exception`](crate::reporter::capture_server_exception)
/// with [`call_site!`].
///
/// # Example
///
/// ```rust,no_run
/// if let Err(err) = std::fs::read_to_string("config.toml") {
///     let _ = server_report::capture_server_exception!(&err);
/// }
/// ```
#[macro_export]
macro_rules! capture_server_exception {
    ($error:expr) => {
        $crate::reporter::capture_server_exception($error, $crate::call_site!())
    };
}
