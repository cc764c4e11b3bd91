//! # Owner Entity
//!
//! An [`Owner`] holds strong handles to its animals. The owner half of the
//! relationship manager lives here ([`OwnerHandle::add_animal`],
//! [`OwnerHandle::remove_animal`]).
//!
//! Each side updates its own state before calling the other side, and only
//! calls when the other side is still out of step. Any of the four
//! relationship operations therefore makes exactly one cross-entity call,
//! and no `RefCell` borrow is held while it runs.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use kennel_common::error::{Conflict, RegisterError, Result};
use kennel_common::text;
use tracing::debug;

use crate::animal::AnimalHandle;

#[derive(Debug)]
pub struct Owner {
    name: String,
    animals: Vec<AnimalHandle>,
}

impl Owner {
    /// The name is stored in title case.
    pub fn new(name: &str) -> Self {
        Self {
            name: text::to_title_case(name),
            animals: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn animals(&self) -> &[AnimalHandle] {
        &self.animals
    }
}

/// Shared, identity-compared reference to an [`Owner`].
#[derive(Debug, Clone)]
pub struct OwnerHandle(Rc<RefCell<Owner>>);

impl OwnerHandle {
    pub fn new(name: &str) -> Self {
        Self::from(Owner::new(name))
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    /// A copy of the owned animals, in the order they were added.
    pub fn animals(&self) -> Vec<AnimalHandle> {
        self.0.borrow().animals.clone()
    }

    pub fn animal_count(&self) -> usize {
        self.0.borrow().animals.len()
    }

    pub fn has_animals(&self) -> bool {
        !self.0.borrow().animals.is_empty()
    }

    /// True when this owner's collection contains `animal`.
    pub fn lists(&self, animal: &AnimalHandle) -> bool {
        self.0.borrow().animals.contains(animal)
    }

    /// Adds `animal` to this owner's collection.
    ///
    /// Refused when the animal belongs to another owner or is already
    /// listed here. If the animal has no owner yet it is asked to take
    /// this one.
    pub fn add_animal(&self, animal: &AnimalHandle) -> Result<()> {
        if let Some(current) = animal.owner() {
            if &current != self {
                return Err(RegisterError::conflict(
                    animal.name(),
                    Conflict::AlreadyOwned { owner: current.name() },
                ));
            }
        }

        if self.lists(animal) {
            return Err(RegisterError::conflict(
                animal.name(),
                Conflict::AlreadyListed { owner: self.name() },
            ));
        }

        self.0.borrow_mut().animals.push(animal.clone());
        debug!(owner = %self.name(), animal = %animal.name(), "animal added");

        if !animal.has_owner() {
            crate::callbacks::record();
            animal.set_owner(Some(self))?;
        }

        Ok(())
    }

    /// Removes `animal` from this owner's collection.
    ///
    /// If the animal still points at this owner it is asked to let go.
    pub fn remove_animal(&self, animal: &AnimalHandle) -> Result<()> {
        let position: Option<usize> = self
            .0
            .borrow()
            .animals
            .iter()
            .position(|listed| listed == animal);

        let Some(position) = position else {
            return Err(RegisterError::conflict(
                animal.name(),
                Conflict::NotListed { owner: self.name() },
            ));
        };

        self.0.borrow_mut().animals.remove(position);
        debug!(owner = %self.name(), animal = %animal.name(), "animal removed");

        if animal.is_owned_by(self) {
            crate::callbacks::record();
            animal.release_owner()?;
        }

        Ok(())
    }

    pub(crate) fn downgrade(&self) -> Weak<RefCell<Owner>> {
        Rc::downgrade(&self.0)
    }
}

impl From<Owner> for OwnerHandle {
    fn from(owner: Owner) -> Self {
        Self(Rc::new(RefCell::new(owner)))
    }
}

impl From<Rc<RefCell<Owner>>> for OwnerHandle {
    fn from(inner: Rc<RefCell<Owner>>) -> Self {
        Self(inner)
    }
}

impl PartialEq for OwnerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for OwnerHandle {}

impl fmt::Display for OwnerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let owner = self.0.borrow();
        if owner.animals.is_empty() {
            return write!(f, "{} [animals: none]", owner.name);
        }
        let names: Vec<String> = owner.animals.iter().map(AnimalHandle::name).collect();
        write!(f, "{} [animals: {}]", owner.name, names.join(", "))
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
