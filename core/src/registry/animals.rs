use kennel_common::error::{Conflict, EntityKind};

use crate::animal::AnimalHandle;
use crate::compare;
use crate::registry::{Registered, Registry};

pub type AnimalRegistry = Registry<AnimalHandle>;

impl Registered for AnimalHandle {
    const KIND: EntityKind = EntityKind::Animal;

    fn name(&self) -> String {
        AnimalHandle::name(self)
    }

    /// An owned animal stays until it is released.
    fn removal_conflict(&self) -> Option<Conflict> {
        self.owner().map(|owner| Conflict::StillOwned { owner: owner.name() })
    }
}

impl Registry<AnimalHandle> {
    /// Animals whose tail is at least `threshold` long, shortest tail first
    /// and by name on equal tails.
    pub fn list_with_min_tail_length(&self, threshold: f64) -> Vec<AnimalHandle> {
        self.sorted_by(compare::by_tail_length_then_name)
            .into_iter()
            .filter(|animal| animal.tail_length() >= threshold)
            .collect()
    }
}
