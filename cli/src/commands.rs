pub mod animals;
pub mod owners;
pub mod ownership;

use std::str::FromStr;

use clap::{ArgAction, Parser};
use kennel_common::config::Config;

#[derive(Parser)]
#[command(name = "kennel")]
#[command(about = "An in-memory register of animals and their owners.")]
pub struct CommandLine {
    /// Do not print the welcome banner
    #[arg(long)]
    pub no_banner: bool,
    /// Print less decoration (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Log more detail to stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

/// A command typed at the session prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    RegisterAnimal,
    RemoveAnimal,
    RegisterOwner,
    RemoveOwner,
    ListAnimals,
    ListAnimalsByTail,
    ListOwners,
    IncreaseAge,
    GiveAnimalToOwner,
    RemoveAnimalFromOwner,
    Help,
    Exit,
}

pub struct CommandSpec {
    pub command: ConsoleCommand,
    pub name: &'static str,
    pub alias: &'static str,
    pub about: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: ConsoleCommand::RegisterAnimal,
        name: "register new animal",
        alias: "rna",
        about: "Add an animal to the register",
    },
    CommandSpec {
        command: ConsoleCommand::RemoveAnimal,
        name: "remove animal",
        alias: "ra",
        about: "Remove an animal, releasing it from its owner",
    },
    CommandSpec {
        command: ConsoleCommand::RegisterOwner,
        name: "register new owner",
        alias: "rno",
        about: "Add an owner to the register",
    },
    CommandSpec {
        command: ConsoleCommand::RemoveOwner,
        name: "remove owner",
        alias: "ro",
        about: "Remove an owner that has no animals",
    },
    CommandSpec {
        command: ConsoleCommand::ListAnimals,
        name: "list animals",
        alias: "la",
        about: "List every animal by name",
    },
    CommandSpec {
        command: ConsoleCommand::ListAnimalsByTail,
        name: "list animals by tail",
        alias: "lat",
        about: "List animals with a minimum tail length",
    },
    CommandSpec {
        command: ConsoleCommand::ListOwners,
        name: "list owners",
        alias: "lo",
        about: "List every owner and their animals",
    },
    CommandSpec {
        command: ConsoleCommand::IncreaseAge,
        name: "increase age",
        alias: "ia",
        about: "Make an animal one year older",
    },
    CommandSpec {
        command: ConsoleCommand::GiveAnimalToOwner,
        name: "give animal to owner",
        alias: "gato",
        about: "Give an unowned animal to an owner",
    },
    CommandSpec {
        command: ConsoleCommand::RemoveAnimalFromOwner,
        name: "remove animal from owner",
        alias: "rafo",
        about: "Release an animal from its owner",
    },
    CommandSpec {
        command: ConsoleCommand::Help,
        name: "help",
        alias: "h",
        about: "Show this list",
    },
    CommandSpec {
        command: ConsoleCommand::Exit,
        name: "exit",
        alias: "q",
        about: "Leave the register",
    },
];

impl FromStr for ConsoleCommand {
    type Err = String;

    /// Accepts the long name or the alias, in any case and with any amount
    /// of whitespace between words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ")
            .to_lowercase();

        COMMANDS
            .iter()
            .find(|spec| spec.name == normalized || spec.alias == normalized)
            .map(|spec| spec.command)
            .ok_or_else(|| format!("'{}' is not a command, type 'help' to list them", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("rna".parse(), Ok(ConsoleCommand::RegisterAnimal));
        assert_eq!(
            "  Register   NEW animal ".parse(),
            Ok(ConsoleCommand::RegisterAnimal)
        );
        assert_eq!("LAT".parse(), Ok(ConsoleCommand::ListAnimalsByTail));
        assert_eq!("exit".parse(), Ok(ConsoleCommand::Exit));
        assert_eq!("q".parse(), Ok(ConsoleCommand::Exit));
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!("register".parse::<ConsoleCommand>().is_err());
        assert!("".parse::<ConsoleCommand>().is_err());
    }

    #[test]
    fn every_command_has_a_unique_name_and_alias() {
        for (i, a) in COMMANDS.iter().enumerate() {
            for b in &COMMANDS[i + 1..] {
                assert_ne!(a.command, b.command);
                assert_ne!(a.name, b.name);
                assert_ne!(a.alias, b.alias);
            }
        }
    }

    #[test]
    fn arguments_build_the_config() {
        let cli = CommandLine::parse_from(["kennel", "-qq", "-v", "--no-banner"]);
        let cfg = cli.config();
        assert!(cfg.no_banner);
        assert_eq!(cfg.quiet, 2);
        assert_eq!(cfg.verbose, 1);
    }
}
