//! Tracing support for Writer logs.
//!
//! A [`Writer`] keeps its log as plain data. At the edge of a program, where
//! the value is finally consumed, [`WriterTracingExt::emit`] replays that log
//! as `tracing` events so it ends up in whatever subscriber the application
//! installed. Feature-gated behind `#[cfg(feature = "tracing")]`.

use std::fmt::Debug;

use crate::Writer;

/// Extension trait for replaying a Writer's log through `tracing`.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait WriterTracingExt<T, W> {
    /// Emit one `INFO` event per log entry, oldest first, then return the value.
    ///
    /// Each event carries the entry's position as `index` and the entry
    /// itself as `entry` (formatted with `Debug`).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use tidepool::tracing::WriterTracingExt;
    /// use tidepool::Writer;
    ///
    /// let total = Writer::tell("loaded config")
    ///     .then(Writer::new(3, vec!["counted rows"]))
    ///     .emit();
    /// assert_eq!(total, 3);
    /// ```
    fn emit(self) -> T;

    /// Like [`emit`](WriterTracingExt::emit), with every event recorded
    /// inside `span`.
    ///
    /// ```rust,ignore
    /// use tidepool::tracing::WriterTracingExt;
    /// use tracing::info_span;
    ///
    /// let user = load_user(id).emit_in(info_span!("load_user", %id));
    /// ```
    fn emit_in(self, span: ::tracing::Span) -> T;
}

impl<T, W: Debug> WriterTracingExt<T, W> for Writer<T, W> {
    fn emit(self) -> T {
        let (value, log) = self.into_parts();
        for (index, entry) in log.iter().enumerate() {
            ::tracing::info!(index, entry = ?entry, "writer log entry");
        }
        value
    }

    fn emit_in(self, span: ::tracing::Span) -> T {
        let _entered = span.enter();
        self.emit()
    }
}
