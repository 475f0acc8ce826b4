// Entity ID Generator - 128-bit random identifiers drawn from the pipeline RNG

use std::collections::{HashMap, HashSet};

use rand::Rng;
use tracing::debug;
use uuid::{Builder, Uuid};

use crate::core::EntityKind;

/// Issues identifiers that are unique per entity kind for the lifetime of one run.
///
/// Each identifier is a version-4 UUID built from 16 random bytes. A redraw
/// happens on the (astronomically unlikely) event of a repeat within a kind.
#[derive(Debug, Default)]
pub struct IdGenerator {
    issued: HashMap<EntityKind, HashSet<Uuid>>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next identifier for `kind`
    pub fn next_id<R: Rng + ?Sized>(&mut self, kind: EntityKind, rng: &mut R) -> Uuid {
        let issued = self.issued.entry(kind).or_default();
        loop {
            let bytes: [u8; 16] = rng.random();
            let id = Builder::from_random_bytes(bytes).into_uuid();
            if issued.insert(id) {
                return id;
            }
            debug!("Redrawing duplicate {} id {}", kind, id);
        }
    }

    /// Number of identifiers issued so far for `kind`
    #[cfg(test)]
    fn issued_count(&self, kind: EntityKind) -> usize {
        self.issued.get(&kind).map_or(0, HashSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_id_generation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut generator = IdGenerator::new();

        let id1 = generator.next_id(EntityKind::Nurse, &mut rng);
        let id2 = generator.next_id(EntityKind::Nurse, &mut rng);
        let id3 = generator.next_id(EntityKind::Clinic, &mut rng);

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_eq!(id1.get_version_num(), 4);
        assert_eq!(generator.issued_count(EntityKind::Nurse), 2);
        assert_eq!(generator.issued_count(EntityKind::Clinic), 1);
        assert_eq!(generator.issued_count(EntityKind::Team), 0);
    }

    #[test]
    fn test_seeded_ids_repeat() {
        let mut first = IdGenerator::new();
        let mut second = IdGenerator::new();
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        for _ in 0..10 {
            assert_eq!(
                first.next_id(EntityKind::Post, &mut rng_a),
                second.next_id(EntityKind::Post, &mut rng_b)
            );
        }
    }
}
