//! # Console Session
//!
//! Reads commands from the prompt and dispatches them to the handlers in
//! [`crate::commands`] until `exit` or end of input.
//!
//! Register errors are printed and the loop carries on; only I/O failures of
//! the console itself end the session with an error.

use std::io::{BufRead, Write};

use colored::*;
use kennel_common::config::Config;
use kennel_common::error::RegisterError;
use kennel_core::Register;
use tracing::debug;

use crate::commands::{COMMANDS, ConsoleCommand};
use crate::terminal::input::{Input, InputError};
use crate::terminal::{colors, print};

pub struct Session<R, W> {
    pub(crate) register: Register,
    pub(crate) input: Input<R>,
    pub(crate) out: W,
    pub(crate) cfg: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(register: Register, reader: R, out: W, cfg: Config) -> Self {
        Self {
            register,
            input: Input::new(reader),
            out,
            cfg,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        print::banner(&mut self.out, self.cfg.show_banner())?;
        if self.cfg.quiet < 2 {
            self.print_commands()?;
        }

        loop {
            let line: String = match self.input.line(&mut self.out, "Command") {
                Ok(line) => line,
                Err(InputError::Closed) => break,
                Err(InputError::Io(err)) => return Err(err.into()),
            };

            if line.trim().is_empty() {
                continue;
            }

            let command: ConsoleCommand = match line.parse() {
                Ok(command) => command,
                Err(msg) => {
                    print::error(&mut self.out, msg)?;
                    continue;
                }
            };

            if command == ConsoleCommand::Exit {
                break;
            }

            debug!(?command, "executing");
            match self.execute(command) {
                Ok(()) => {}
                Err(InputError::Closed) => break,
                Err(InputError::Io(err)) => return Err(err.into()),
            }
        }

        self.shut_down()?;
        Ok(())
    }

    fn execute(&mut self, command: ConsoleCommand) -> Result<(), InputError> {
        match command {
            ConsoleCommand::RegisterAnimal => self.register_new_animal(),
            ConsoleCommand::RemoveAnimal => self.remove_animal(),
            ConsoleCommand::RegisterOwner => self.register_new_owner(),
            ConsoleCommand::RemoveOwner => self.remove_owner(),
            ConsoleCommand::ListAnimals => self.list_animals(),
            ConsoleCommand::ListAnimalsByTail => self.list_animals_by_tail(),
            ConsoleCommand::ListOwners => self.list_owners(),
            ConsoleCommand::IncreaseAge => self.increase_age(),
            ConsoleCommand::GiveAnimalToOwner => self.give_animal_to_owner(),
            ConsoleCommand::RemoveAnimalFromOwner => self.remove_animal_from_owner(),
            ConsoleCommand::Help => Ok(self.print_commands()?),
            ConsoleCommand::Exit => Ok(()),
        }
    }

    /// Prints a register error; the session continues.
    pub(crate) fn report(&mut self, err: RegisterError) -> Result<(), InputError> {
        debug!(%err, "command refused");
        print::error(&mut self.out, err)?;
        Ok(())
    }

    fn print_commands(&mut self) -> std::io::Result<()> {
        print::header(&mut self.out, "commands", self.cfg.quiet)?;
        let width: usize = COMMANDS.iter().map(|spec| spec.name.len()).max().unwrap_or(0);
        for spec in COMMANDS {
            let name: String = format!("{:<width$}", spec.name);
            let alias: String = format!("{:<4}", spec.alias);
            print::status(
                &mut self.out,
                format!(
                    "{} {} {}",
                    name.color(colors::PRIMARY),
                    alias.color(colors::ACCENT),
                    spec.about
                ),
            )?;
        }
        Ok(())
    }

    fn shut_down(&mut self) -> std::io::Result<()> {
        if self.cfg.quiet == 0 {
            print::fat_separator(&mut self.out)?;
        }
        print::status(&mut self.out, "Animal register shutting down")?;
        if self.cfg.quiet == 0 {
            print::end_of_program(&mut self.out)?;
        }
        self.out.flush()
    }
}
