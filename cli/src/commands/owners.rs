use std::io::{BufRead, Write};

use kennel_common::error::{EntityKind, RegisterError};
use kennel_core::OwnerHandle;

use crate::session::Session;
use crate::terminal::input::InputError;
use crate::terminal::{format, print};

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn register_new_owner(&mut self) -> Result<(), InputError> {
        let name: String = self.input.text(&mut self.out, "Owner name")?;
        match self.register.register_owner(&name) {
            Ok(owner) => print::success(
                &mut self.out,
                format!("{} has been added to the register", owner.name()),
            )?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    /// Owners that still have animals are kept.
    pub(crate) fn remove_owner(&mut self) -> Result<(), InputError> {
        if self.register.owners().is_empty() {
            return self.report(RegisterError::empty(EntityKind::Owner));
        }

        let name: String = self.input.text(&mut self.out, "Owner name")?;
        match self.register.remove_owner(&name) {
            Ok(owner) => print::success(
                &mut self.out,
                format!("{} has been removed from the register", owner.name()),
            )?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    pub(crate) fn list_owners(&mut self) -> Result<(), InputError> {
        if self.register.owners().is_empty() {
            return self.report(RegisterError::empty(EntityKind::Owner));
        }

        print::header(&mut self.out, "owners in register", self.cfg.quiet)?;
        let owners: Vec<OwnerHandle> = self.register.list_owners();
        for (idx, owner) in owners.iter().enumerate() {
            print::tree_head(&mut self.out, idx, &owner.name())?;
            print::as_tree_one_level(&mut self.out, &format::owner_details(owner))?;
        }
        Ok(())
    }
}
