#![cfg(test)]
use kennel_core::{AnimalHandle, OwnerHandle, Register};
use proptest::prelude::*;

const ANIMALS: [&str; 5] = ["rex", "FIDO", "bella", "Karo", "alfie"];
const OWNERS: [&str; 3] = ["ann", "Bob", "CEDRIC"];
const BREEDS: [&str; 4] = ["tax", "Teckel", "labrador", "pug"];

#[derive(Debug, Clone)]
enum Op {
    RegisterAnimal { name: usize, breed: usize, age: u32, weight: u32 },
    RegisterOwner(usize),
    RemoveAnimal(usize),
    RemoveOwner(usize),
    IncreaseAge(usize),
    Assign { animal: usize, owner: usize },
    Release(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..ANIMALS.len(), 0..BREEDS.len(), 0u32..30, 0u32..100).prop_map(
            |(name, breed, age, weight)| Op::RegisterAnimal { name, breed, age, weight }
        ),
        (0..OWNERS.len()).prop_map(Op::RegisterOwner),
        (0..ANIMALS.len()).prop_map(Op::RemoveAnimal),
        (0..OWNERS.len()).prop_map(Op::RemoveOwner),
        (0..ANIMALS.len()).prop_map(Op::IncreaseAge),
        (0..ANIMALS.len(), 0..OWNERS.len())
            .prop_map(|(animal, owner)| Op::Assign { animal, owner }),
        (0..ANIMALS.len()).prop_map(Op::Release),
    ]
}

/// Applies the operation; refusals are part of the game.
fn apply(register: &mut Register, op: &Op) {
    let _ = match *op {
        Op::RegisterAnimal { name, breed, age, weight } => register
            .register_animal(ANIMALS[name], BREEDS[breed], age, weight)
            .map(drop),
        Op::RegisterOwner(name) => register.register_owner(OWNERS[name]).map(drop),
        Op::RemoveAnimal(name) => register.remove_animal(ANIMALS[name]).map(drop),
        Op::RemoveOwner(name) => register.remove_owner(OWNERS[name]).map(drop),
        Op::IncreaseAge(name) => register.increase_age(ANIMALS[name]).map(drop),
        Op::Assign { animal, owner } => register.assign_owner(ANIMALS[animal], OWNERS[owner]),
        Op::Release(name) => register.release_owner(ANIMALS[name]),
    };
}

fn assert_consistent(register: &Register) -> Result<(), TestCaseError> {
    let animals: Vec<AnimalHandle> = register.list_animals();
    let owners: Vec<OwnerHandle> = register.list_owners();

    for animal in &animals {
        for owner in &owners {
            prop_assert_eq!(animal.is_owned_by(owner), owner.lists(animal));
        }
        if let Some(owner) = animal.owner() {
            prop_assert!(owners.contains(&owner), "{} has an unregistered owner", animal.name());
        }
    }

    for owner in &owners {
        let listed: Vec<AnimalHandle> = owner.animals();
        for (idx, animal) in listed.iter().enumerate() {
            prop_assert!(!listed[idx + 1..].contains(animal));
            prop_assert!(animals.contains(animal), "{} lists a removed animal", owner.name());
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn ownership_stays_mutual(ops in proptest::collection::vec(op(), 0..64)) {
        let mut register: Register = Register::new();
        for op in &ops {
            apply(&mut register, op);
            assert_consistent(&register)?;
        }
    }

    #[test]
    fn names_stay_unique(ops in proptest::collection::vec(op(), 0..64)) {
        let mut register: Register = Register::new();
        for op in &ops {
            apply(&mut register, op);
        }

        let animals: Vec<String> = register.list_animals().iter().map(AnimalHandle::name).collect();
        let mut deduped: Vec<String> = animals.clone();
        deduped.dedup();
        prop_assert_eq!(&animals, &deduped);
        prop_assert!(animals.windows(2).all(|pair| pair[0] <= pair[1]));

        let owners: Vec<String> = register.list_owners().iter().map(OwnerHandle::name).collect();
        let mut deduped: Vec<String> = owners.clone();
        deduped.dedup();
        prop_assert_eq!(&owners, &deduped);
        prop_assert!(owners.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn tail_listing_is_filtered_and_ordered(
        ops in proptest::collection::vec(op(), 0..64),
        threshold in 0.0f64..50.0,
    ) {
        let mut register: Register = Register::new();
        for op in &ops {
            apply(&mut register, op);
        }

        let listed: Vec<AnimalHandle> = register.list_animals_with_min_tail_length(threshold);
        let expected: usize = register
            .list_animals()
            .iter()
            .filter(|animal| animal.tail_length() >= threshold)
            .count();

        prop_assert_eq!(listed.len(), expected);
        for pair in listed.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.tail_length() < b.tail_length()
                    || (a.tail_length() == b.tail_length() && a.name() <= b.name())
            );
        }
    }
}
