use kennel_common::error::{Conflict, EntityKind};

use crate::owner::OwnerHandle;
use crate::registry::{Registered, Registry};

pub type OwnerRegistry = Registry<OwnerHandle>;

impl Registered for OwnerHandle {
    const KIND: EntityKind = EntityKind::Owner;

    fn name(&self) -> String {
        OwnerHandle::name(self)
    }

    /// An owner stays until every animal has been released.
    fn removal_conflict(&self) -> Option<Conflict> {
        match self.animal_count() {
            0 => None,
            count => Some(Conflict::HasAnimals { count }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::AnimalHandle;
    use kennel_common::error::RegisterError;

    #[test]
    fn owners_are_unique_and_sorted() {
        let mut registry = OwnerRegistry::new();
        for name in ["mia", "ann", "Zoe", "bob"] {
            registry.add(OwnerHandle::new(name)).unwrap();
        }
        assert!(registry.add(OwnerHandle::new("ANN")).is_err());

        let names: Vec<String> = registry.list_all().iter().map(OwnerHandle::name).collect();
        assert_eq!(names, vec!["Ann", "Bob", "Mia", "Zoe"]);
    }

    #[test]
    fn removal_shifts_remaining_owners() {
        let mut registry = OwnerRegistry::new();
        for name in ["ann", "bob", "cid"] {
            registry.add(OwnerHandle::new(name)).unwrap();
        }

        registry.remove("Bob").unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.find("bob").is_none());
        assert!(registry.find("cid").is_some());
        assert!(registry.remove("bob").is_err());
    }

    #[test]
    fn owner_with_animals_cannot_be_removed() {
        let mut registry = OwnerRegistry::new();
        registry.add(OwnerHandle::new("ann")).unwrap();
        let ann = registry.find("ann").unwrap();
        let rex = AnimalHandle::new("rex", "tax", 1, 1);
        ann.add_animal(&rex).unwrap();

        let err = registry.remove("ann").unwrap_err();
        assert_eq!(
            err,
            RegisterError::OwnershipConflict {
                name: "Ann".into(),
                conflict: Conflict::HasAnimals { count: 1 },
            }
        );
        assert!(registry.contains("ann"));
        assert!(rex.is_owned_by(&ann));

        rex.release_owner().unwrap();
        assert!(registry.remove_entry(&ann).is_ok());
        assert!(registry.is_empty());
    }
}
