//! Immutable document views
//!
//! A [`DocumentSnapshot`] pairs a text with its line table, so offsets found
//! by a scan and the positions published for them come from the same text.

pub mod line_index;
pub mod snapshot;

pub use line_index::LineIndex;
pub use snapshot::DocumentSnapshot;
