//! # Registries
//!
//! A [`Registry`] is a name-indexed collection that enforces unique names
//! (compared case-insensitively) and refuses to drop an entry while it is
//! still part of an ownership relation.
//!
//! The entity-specific parts live in the submodules:
//! * [`animals`]: [`AnimalRegistry`] and the tail-length view.
//! * [`owners`]: [`OwnerRegistry`].

pub mod animals;
pub mod owners;

pub use animals::AnimalRegistry;
pub use owners::OwnerRegistry;

use kennel_common::error::{Conflict, EntityKind, RegisterError, Result};
use kennel_common::text;
use tracing::info;

use crate::compare;
use crate::sorter;

/// An entity that can be kept in a [`Registry`].
pub trait Registered: Clone {
    const KIND: EntityKind;

    fn name(&self) -> String;

    /// Why the entry may not be removed right now, if anything.
    fn removal_conflict(&self) -> Option<Conflict>;
}

#[derive(Debug)]
pub struct Registry<T> {
    entries: Vec<T>,
}

impl<T: Registered> Registry<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `entry` unless one with the same name is already present.
    pub fn add(&mut self, entry: T) -> Result<()> {
        let name: String = entry.name();
        if self.contains(&name) {
            return Err(RegisterError::duplicate(T::KIND, name));
        }
        self.entries.push(entry);
        let kind: EntityKind = T::KIND;
        info!(%kind, %name, "registered");
        Ok(())
    }

    /// Removes the entry called `name`.
    ///
    /// Refused while [`Registered::removal_conflict`] reports a conflict.
    pub fn remove(&mut self, name: &str) -> Result<T> {
        let Some(index) = self.index_of(name) else {
            return Err(RegisterError::not_found(T::KIND, name));
        };

        if let Some(conflict) = self.entries[index].removal_conflict() {
            return Err(RegisterError::conflict(self.entries[index].name(), conflict));
        }

        let removed: T = self.entries.remove(index);
        let kind: EntityKind = T::KIND;
        info!(%kind, name = %removed.name(), "removed");
        Ok(removed)
    }

    pub fn remove_entry(&mut self, entry: &T) -> Result<T> {
        self.remove(&entry.name())
    }

    pub fn find(&self, name: &str) -> Option<T> {
        self.index_of(name).map(|index| self.entries[index].clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Every entry, ordered by name.
    pub fn list_all(&self) -> Vec<T> {
        self.sorted_by(compare::by_name)
    }

    /// A sorted copy of the entries; the collection itself is left alone.
    pub(crate) fn sorted_by<F>(&self, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        let mut snapshot: Vec<T> = self.entries.clone();
        sorter::selection_sort(&mut snapshot, compare);
        snapshot
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| text::eq_ignore_case(&entry.name(), name))
    }
}

impl<T: Registered> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
