//! # Animal Entity
//!
//! An [`Animal`] is shared through an [`AnimalHandle`]. Its owner is held as
//! a [`Weak`] back-reference: the owner keeps the animal alive, never the
//! other way round.
//!
//! The animal half of the relationship manager lives here
//! ([`AnimalHandle::set_owner`], [`AnimalHandle::release_owner`]); the owner
//! half lives in [`crate::owner`].

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use kennel_common::error::{Conflict, RegisterError, Result};
use kennel_common::text;
use tracing::debug;

use crate::owner::{Owner, OwnerHandle};

/// Tail length of every dachshund, whatever its age or weight.
pub const DACHSHUND_TAIL_LENGTH: f64 = 3.7;

/// Names the dachshund goes by.
const DACHSHUND_BREEDS: [&str; 4] = ["tax", "dachshund", "mäyräkoira", "teckel"];

#[derive(Debug)]
pub struct Animal {
    name: String,
    breed: String,
    age: u32,
    weight: u32,
    owner: Option<Weak<RefCell<Owner>>>,
}

impl Animal {
    /// Name and breed are stored in title case.
    pub fn new(name: &str, breed: &str, age: u32, weight: u32) -> Self {
        Self {
            name: text::to_title_case(name),
            breed: text::to_title_case(breed),
            age,
            weight,
            owner: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn is_dachshund(&self) -> bool {
        DACHSHUND_BREEDS
            .iter()
            .any(|breed| text::eq_ignore_case(breed, &self.breed))
    }

    /// `age * weight / 10`, or [`DACHSHUND_TAIL_LENGTH`] for dachshunds.
    pub fn tail_length(&self) -> f64 {
        if self.is_dachshund() {
            return DACHSHUND_TAIL_LENGTH;
        }
        f64::from(self.age) * f64::from(self.weight) / 10.0
    }

    /// Saturates at `u32::MAX`.
    pub fn increase_age(&mut self) -> u32 {
        self.age = self.age.saturating_add(1);
        self.age
    }
}

/// Shared, identity-compared reference to an [`Animal`].
#[derive(Debug, Clone)]
pub struct AnimalHandle(Rc<RefCell<Animal>>);

impl AnimalHandle {
    pub fn new(name: &str, breed: &str, age: u32, weight: u32) -> Self {
        Self::from(Animal::new(name, breed, age, weight))
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn breed(&self) -> String {
        self.0.borrow().breed.clone()
    }

    pub fn age(&self) -> u32 {
        self.0.borrow().age
    }

    pub fn weight(&self) -> u32 {
        self.0.borrow().weight
    }

    pub fn tail_length(&self) -> f64 {
        self.0.borrow().tail_length()
    }

    pub fn increase_age(&self) -> u32 {
        self.0.borrow_mut().increase_age()
    }

    /// The current owner, if it is still alive.
    pub fn owner(&self) -> Option<OwnerHandle> {
        self.0
            .borrow()
            .owner
            .as_ref()
            .and_then(Weak::upgrade)
            .map(OwnerHandle::from)
    }

    pub fn has_owner(&self) -> bool {
        self.owner().is_some()
    }

    pub fn is_owned_by(&self, owner: &OwnerHandle) -> bool {
        self.owner().is_some_and(|current| &current == owner)
    }

    /// Gives the animal to `owner`, or releases it when `owner` is `None`.
    ///
    /// An animal that already has an owner is refused, even when `owner` is
    /// that same owner: it has to be released before it can be re-homed.
    /// If `owner` does not list the animal yet it is asked to add it.
    pub fn set_owner(&self, owner: Option<&OwnerHandle>) -> Result<()> {
        let Some(owner) = owner else {
            return self.release_owner();
        };

        if let Some(current) = self.owner() {
            return Err(RegisterError::conflict(
                self.name(),
                Conflict::AlreadyOwned { owner: current.name() },
            ));
        }

        self.0.borrow_mut().owner = Some(owner.downgrade());
        debug!(animal = %self.name(), owner = %owner.name(), "owner set");

        if !owner.lists(self) {
            crate::callbacks::record();
            owner.add_animal(self)?;
        }

        Ok(())
    }

    /// Clears the owner reference, asking the owner to drop the animal if it
    /// still lists it.
    pub fn release_owner(&self) -> Result<()> {
        let Some(owner) = self.owner() else {
            return Err(RegisterError::conflict(self.name(), Conflict::NotOwned));
        };

        self.0.borrow_mut().owner = None;
        debug!(animal = %self.name(), owner = %owner.name(), "owner released");

        if owner.lists(self) {
            crate::callbacks::record();
            owner.remove_animal(self)?;
        }

        Ok(())
    }
}

impl From<Animal> for AnimalHandle {
    fn from(animal: Animal) -> Self {
        Self(Rc::new(RefCell::new(animal)))
    }
}

impl PartialEq for AnimalHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for AnimalHandle {}

impl fmt::Display for AnimalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let owner: Option<String> = self.owner().map(|owner| owner.name());
        let animal = self.0.borrow();
        write!(
            f,
            "{} ({}), age {}, weight {}, tail length {:.2}",
            animal.name,
            animal.breed,
            animal.age,
            animal.weight,
            animal.tail_length()
        )?;
        if let Some(owner) = owner {
            write!(f, ", owned by {owner}")?;
        }
        Ok(())
    }
}
