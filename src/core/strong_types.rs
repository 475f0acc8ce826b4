// Strong Types - newtype identifiers for every generated entity
// Keeps a clinic id from being handed where a team id is expected

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Get the raw UUID value
            pub fn value(self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Identifier of a generated clinic
    ClinicId
);
entity_id!(
    /// Identifier of a generated family
    FamilyId
);
entity_id!(
    /// Identifier of a generated team
    TeamId
);
entity_id!(
    /// Identifier of a generated intervention
    InterventionId
);
entity_id!(
    /// Identifier of a generated nurse
    NurseId
);
entity_id!(
    /// Identifier of a generated incident
    IncidentId
);
entity_id!(
    /// Identifier of a generated comment
    CommentId
);
entity_id!(
    /// Identifier of a generated misinformation post
    PostId
);

/// Entity kinds that receive generated identifiers.
///
/// Uniqueness is tracked per kind, so the same UUID may in principle
/// appear under two kinds without being a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Clinic,
    Family,
    Team,
    Intervention,
    Nurse,
    Incident,
    Comment,
    Post,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Clinic => "clinic",
            EntityKind::Family => "family",
            EntityKind::Team => "team",
            EntityKind::Intervention => "intervention",
            EntityKind::Nurse => "nurse",
            EntityKind::Incident => "incident",
            EntityKind::Comment => "comment",
            EntityKind::Post => "post",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_hyphenated_strings() {
        let raw = Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
        let id = NurseId::from(raw);

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"01234567-89ab-cdef-0123-456789abcdef\"");
        assert_eq!(id.to_string(), "01234567-89ab-cdef-0123-456789abcdef");
        assert_eq!(Uuid::from(id), raw);
    }

    #[test]
    fn test_entity_kind_names() {
        assert_eq!(EntityKind::Post.as_str(), "post");
        assert_eq!(EntityKind::Intervention.to_string(), "intervention");
    }
}
