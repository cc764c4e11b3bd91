use std::io::{BufRead, Write};

use kennel_common::error::{Conflict, EntityKind, RegisterError};
use kennel_core::AnimalHandle;

use crate::session::Session;
use crate::terminal::input::InputError;
use crate::terminal::print;

impl<R: BufRead, W: Write> Session<R, W> {
    /// Both registers must have entries before anything is asked.
    fn require_animals_and_owners(&mut self) -> Result<bool, InputError> {
        if self.register.animals().is_empty() {
            self.report(RegisterError::empty(EntityKind::Animal))?;
            return Ok(false);
        }
        if self.register.owners().is_empty() {
            self.report(RegisterError::empty(EntityKind::Owner))?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Asks for the animal first and refuses an owned one before asking
    /// for the owner.
    pub(crate) fn give_animal_to_owner(&mut self) -> Result<(), InputError> {
        if !self.require_animals_and_owners()? {
            return Ok(());
        }

        let animal_name: String = self.input.text(&mut self.out, "Animal name")?;
        let animal: AnimalHandle = match self.register.find_animal(&animal_name) {
            Ok(animal) => animal,
            Err(err) => return self.report(err),
        };
        if let Some(owner) = animal.owner() {
            let conflict = Conflict::AlreadyOwned { owner: owner.name() };
            return self.report(RegisterError::conflict(animal.name(), conflict));
        }

        let owner_name: String = self.input.text(&mut self.out, "Owner name")?;
        match self.register.assign_owner(&animal.name(), &owner_name) {
            Ok(()) => {
                let owner: String = animal.owner().map(|owner| owner.name()).unwrap_or_default();
                print::success(
                    &mut self.out,
                    format!("{} is now owned by {}", animal.name(), owner),
                )?
            }
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    pub(crate) fn remove_animal_from_owner(&mut self) -> Result<(), InputError> {
        if !self.require_animals_and_owners()? {
            return Ok(());
        }

        let animal_name: String = self.input.text(&mut self.out, "Animal name")?;
        let animal: AnimalHandle = match self.register.find_animal(&animal_name) {
            Ok(animal) => animal,
            Err(err) => return self.report(err),
        };

        match self.register.release_owner(&animal.name()) {
            Ok(()) => print::success(
                &mut self.out,
                format!("{} no longer has an owner", animal.name()),
            )?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }
}
