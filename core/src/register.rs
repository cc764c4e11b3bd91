//! # Register Facade
//!
//! The operations the console drives. Every name argument is normalised to
//! title case before it is looked up or stored, so errors always quote the
//! normalised name.

use kennel_common::error::{Conflict, EntityKind, RegisterError, Result};
use kennel_common::text;
use tracing::info;

use crate::animal::AnimalHandle;
use crate::owner::OwnerHandle;
use crate::registry::{AnimalRegistry, OwnerRegistry};

#[derive(Debug, Default)]
pub struct Register {
    animals: AnimalRegistry,
    owners: OwnerRegistry,
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animals(&self) -> &AnimalRegistry {
        &self.animals
    }

    pub fn owners(&self) -> &OwnerRegistry {
        &self.owners
    }

    pub fn register_animal(
        &mut self,
        name: &str,
        breed: &str,
        age: u32,
        weight: u32,
    ) -> Result<AnimalHandle> {
        let animal = AnimalHandle::new(name, breed, age, weight);
        self.animals.add(animal.clone())?;
        Ok(animal)
    }

    pub fn register_owner(&mut self, name: &str) -> Result<OwnerHandle> {
        let owner = OwnerHandle::new(name);
        self.owners.add(owner.clone())?;
        Ok(owner)
    }

    /// Releases the animal from its owner, if it has one, then removes it.
    pub fn remove_animal(&mut self, name: &str) -> Result<AnimalHandle> {
        let animal: AnimalHandle = self.find_animal(name)?;
        if animal.has_owner() {
            animal.release_owner()?;
        }
        self.animals.remove_entry(&animal)
    }

    /// Refused while the owner still has animals.
    pub fn remove_owner(&mut self, name: &str) -> Result<OwnerHandle> {
        let owner: OwnerHandle = self.find_owner(name)?;
        self.owners.remove_entry(&owner)
    }

    pub fn find_animal(&self, name: &str) -> Result<AnimalHandle> {
        let name: String = text::to_title_case(name);
        self.animals
            .find(&name)
            .ok_or_else(|| RegisterError::not_found(EntityKind::Animal, name))
    }

    pub fn find_owner(&self, name: &str) -> Result<OwnerHandle> {
        let name: String = text::to_title_case(name);
        self.owners
            .find(&name)
            .ok_or_else(|| RegisterError::not_found(EntityKind::Owner, name))
    }

    pub fn list_animals(&self) -> Vec<AnimalHandle> {
        self.animals.list_all()
    }

    pub fn list_owners(&self) -> Vec<OwnerHandle> {
        self.owners.list_all()
    }

    pub fn list_animals_with_min_tail_length(&self, threshold: f64) -> Vec<AnimalHandle> {
        self.animals.list_with_min_tail_length(threshold)
    }

    /// Returns the new age, which saturates at `u32::MAX`.
    pub fn increase_age(&mut self, name: &str) -> Result<u32> {
        let animal: AnimalHandle = self.find_animal(name)?;
        let age: u32 = animal.increase_age();
        info!(animal = %animal.name(), age, "age increased");
        Ok(age)
    }

    /// Gives an unowned animal to an owner.
    pub fn assign_owner(&mut self, animal_name: &str, owner_name: &str) -> Result<()> {
        let animal: AnimalHandle = self.find_animal(animal_name)?;
        if let Some(current) = animal.owner() {
            return Err(RegisterError::conflict(
                animal.name(),
                Conflict::AlreadyOwned { owner: current.name() },
            ));
        }
        let owner: OwnerHandle = self.find_owner(owner_name)?;
        animal.set_owner(Some(&owner))?;
        info!(animal = %animal.name(), owner = %owner.name(), "owner assigned");
        Ok(())
    }

    pub fn release_owner(&mut self, animal_name: &str) -> Result<()> {
        let animal: AnimalHandle = self.find_animal(animal_name)?;
        animal.release_owner()?;
        info!(animal = %animal.name(), "owner released");
        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
