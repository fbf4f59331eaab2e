//! Logging of failed bootstrap steps.

use std::fmt::Display;

/// Adds [`log`](ResultExt::log) to `Result`.
pub trait ResultExt<T, E> {
    /// Emit a `tracing` error naming the bootstrap `step` (resolving the
    /// config, connecting, probing the server) when the result is `Err`.
    ///
    /// The result is returned untouched so the caller can still `?` it.
    ///
    /// ```ignore
    /// use dashboard_db::ResultExt;
    ///
    /// let conn = connect(&config).await.log("opening database connection")?;
    /// ```
    fn log(self, step: &str) -> Result<T, E>;
}

impl<T, E: Display> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    fn log(self, step: &str) -> Result<T, E> {
        let at = std::panic::Location::caller();
        self.inspect_err(|e| {
            tracing::error!(
                target: "dashboard_db",
                step,
                error = %e,
                at = %format_args!("{}:{}", at.file(), at.line()),
                "Dashboard database bootstrap failed"
            );
        })
    }
}
