use std::io::{BufRead, Write};

use kennel_common::error::{EntityKind, RegisterError};
use kennel_common::text;
use kennel_core::AnimalHandle;

use crate::session::Session;
use crate::terminal::input::InputError;
use crate::terminal::{format, print};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Asks for the name first so a duplicate is refused before the other
    /// questions.
    pub(crate) fn register_new_animal(&mut self) -> Result<(), InputError> {
        let name: String = self.input.text(&mut self.out, "Animal name")?;
        if let Ok(existing) = self.register.find_animal(&name) {
            return self.report(RegisterError::duplicate(EntityKind::Animal, existing.name()));
        }

        let breed: String = self.input.text(&mut self.out, "Breed")?;
        let age: u32 = self.input.number(&mut self.out, "Age")?;
        let weight: u32 = self.input.number(&mut self.out, "Weight")?;

        match self.register.register_animal(&name, &breed, age, weight) {
            Ok(animal) => print::success(
                &mut self.out,
                format!("{} has been added to the register", animal.name()),
            )?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    pub(crate) fn remove_animal(&mut self) -> Result<(), InputError> {
        if self.register.animals().is_empty() {
            return self.report(RegisterError::empty(EntityKind::Animal));
        }

        let name: String = self.input.text(&mut self.out, "Animal name")?;
        match self.register.remove_animal(&name) {
            Ok(animal) => print::success(
                &mut self.out,
                format!("{} has been removed from the register", animal.name()),
            )?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    pub(crate) fn list_animals(&mut self) -> Result<(), InputError> {
        if self.register.animals().is_empty() {
            return self.report(RegisterError::empty(EntityKind::Animal));
        }

        print::header(&mut self.out, "animals in register", self.cfg.quiet)?;
        let animals: Vec<AnimalHandle> = self.register.list_animals();
        self.print_animals(&animals)?;
        Ok(())
    }

    pub(crate) fn list_animals_by_tail(&mut self) -> Result<(), InputError> {
        if self.register.animals().is_empty() {
            return self.report(RegisterError::empty(EntityKind::Animal));
        }

        let threshold: f64 = loop {
            let value: f64 = self.input.number(&mut self.out, "Minimum tail length")?;
            if value.is_finite() {
                break value;
            }
            print::error(&mut self.out, "Minimum tail length must be a finite number")?;
        };

        let animals: Vec<AnimalHandle> = self.register.list_animals_with_min_tail_length(threshold);
        if animals.is_empty() {
            print::status(
                &mut self.out,
                format!("No animals have a tail length of at least {threshold:.2}"),
            )?;
            return Ok(());
        }

        print::header(&mut self.out, "animals by tail length", self.cfg.quiet)?;
        self.print_animals(&animals)?;
        Ok(())
    }

    pub(crate) fn increase_age(&mut self) -> Result<(), InputError> {
        if self.register.animals().is_empty() {
            return self.report(RegisterError::empty(EntityKind::Animal));
        }

        let name: String = self.input.text(&mut self.out, "Animal name")?;
        match self.register.increase_age(&name) {
            Ok(age) => {
                let animal: String = text::to_title_case(&name);
                print::success(&mut self.out, format!("{animal} is now {age} years old"))?
            }
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn print_animals(&mut self, animals: &[AnimalHandle]) -> std::io::Result<()> {
        for (idx, animal) in animals.iter().enumerate() {
            print::tree_head(&mut self.out, idx, &animal.name())?;
            print::as_tree_one_level(&mut self.out, &format::animal_details(animal))?;
        }
        Ok(())
    }
}
