//! # Register Errors
//!
//! Every failure the register can report. All of them are policy violations
//! the user can correct; none is fatal.

use std::fmt;

use thiserror::Error;

pub type Result<T, E = RegisterError> = std::result::Result<T, E>;

/// The two entity kinds held by the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Animal,
    Owner,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Animal => f.write_str("animal"),
            EntityKind::Owner => f.write_str("owner"),
        }
    }
}

/// Why an ownership change or a guarded removal was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// The animal already has an owner and must be released first.
    AlreadyOwned { owner: String },
    /// The animal has no owner to release.
    NotOwned,
    /// The owner does not list the animal.
    NotListed { owner: String },
    /// The owner already lists the animal.
    AlreadyListed { owner: String },
    /// Removal refused while the animal still has an owner.
    StillOwned { owner: String },
    /// Removal refused while the owner still has animals.
    HasAnimals { count: usize },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::AlreadyOwned { owner } => write!(f, "already owned by {owner}"),
            Conflict::NotOwned => f.write_str("does not have an owner"),
            Conflict::NotListed { owner } => write!(f, "is not owned by {owner}"),
            Conflict::AlreadyListed { owner } => write!(f, "is already owned by {owner}"),
            Conflict::StillOwned { owner } => write!(f, "is still owned by {owner}"),
            Conflict::HasAnimals { count } => {
                let unit = if *count == 1 { "animal" } else { "animals" };
                write!(f, "still owns {count} {unit}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("{name} is already registered")]
    DuplicateEntity { kind: EntityKind, name: String },

    #[error("{name} is not a registered {kind}")]
    NotFound { kind: EntityKind, name: String },

    #[error("{name} {conflict}")]
    OwnershipConflict { name: String, conflict: Conflict },

    #[error("no {kind}s in the register")]
    EmptyCollection { kind: EntityKind },
}

impl RegisterError {
    pub fn duplicate(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::DuplicateEntity { kind, name: name.into() }
    }

    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::NotFound { kind, name: name.into() }
    }

    pub fn conflict(name: impl Into<String>, conflict: Conflict) -> Self {
        Self::OwnershipConflict { name: name.into(), conflict }
    }

    pub fn empty(kind: EntityKind) -> Self {
        Self::EmptyCollection { kind }
    }
}
