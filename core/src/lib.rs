//! # Kennel Core
//!
//! The in-memory register of animals and their owners.
//!
//! ## Layout
//! * **[`animal`]** / **[`owner`]**: the two entities and, split between
//!   them, the relationship manager that keeps `animal.owner` and
//!   `owner.animals` in agreement.
//! * **[`sorter`]** / **[`compare`]**: the selection sort and the comparators
//!   that give every listing its order.
//! * **[`registry`]**: name-indexed collections with guarded removal.
//! * **[`register`]**: the facade the console drives.
//!
//! Handles are reference counted (`Rc`) and therefore `!Send`; the register
//! is meant to be driven from a single thread.

pub mod animal;
pub mod compare;
pub mod owner;
pub mod register;
pub mod registry;
pub mod sorter;

pub use animal::{Animal, AnimalHandle};
pub use owner::{Owner, OwnerHandle};
pub use register::Register;
pub use registry::{AnimalRegistry, OwnerRegistry, Registry};

/// Counts the cross-entity calls made by the relationship manager so tests
/// can check that every operation makes exactly one.
pub(crate) mod callbacks {
    #[cfg(test)]
    use std::cell::Cell;

    #[cfg(test)]
    thread_local! {
        static COUNT: Cell<usize> = const { Cell::new(0) };
    }

    #[inline]
    pub(crate) fn record() {
        #[cfg(test)]
        COUNT.with(|count| count.set(count.get() + 1));
    }

    /// Returns the count and resets it.
    #[cfg(test)]
    pub(crate) fn take() -> usize {
        COUNT.with(|count| count.replace(0))
    }
}
