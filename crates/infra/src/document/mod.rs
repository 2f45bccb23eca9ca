//! Document adapters
//!
//! In-memory implementations of the document ports. Position mapping comes
//! from [`piiguard_core::DocumentSnapshot`].

pub mod memory;
pub mod workspace;

pub use memory::InMemoryDocument;
pub use workspace::InMemoryWorkspace;
