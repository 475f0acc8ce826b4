// Core types and sampling primitives

pub mod distributions;
pub mod lexicon;
pub mod strong_types;

// Re-export commonly used types
pub use distributions::{Choices, Weighted};
pub use lexicon::Lexicon;
pub use strong_types::{
    ClinicId, CommentId, EntityKind, FamilyId, IncidentId, InterventionId, NurseId, PostId, TeamId,
};
