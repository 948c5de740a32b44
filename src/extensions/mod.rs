//! Extension points hosts plug into a chart session.

pub mod observers;

pub use observers::{SessionContext, SessionEvent, SessionObserver};
