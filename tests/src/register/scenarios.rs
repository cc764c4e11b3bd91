#![cfg(test)]
use kennel_common::error::{Conflict, EntityKind, RegisterError};
use kennel_core::{AnimalHandle, OwnerHandle, Register};

/*************************************************************
                    Register walkthroughs
**************************************************************/

#[test]
fn dachshund_keeps_its_tail_length() {
    let mut register: Register = Register::new();
    let rex: AnimalHandle = register.register_animal("rex", "dachshund", 2, 50).unwrap();

    assert_eq!(rex.name(), "Rex");
    assert_eq!(rex.tail_length(), 3.7);

    register.increase_age("REX").unwrap();
    assert_eq!(rex.age(), 3);
    assert_eq!(rex.tail_length(), 3.7);
}

#[test]
fn other_breeds_follow_age_and_weight() {
    let mut register: Register = Register::new();
    let fido: AnimalHandle = register.register_animal("fido", "labrador", 2, 50).unwrap();

    assert_eq!(fido.tail_length(), 10.0);
    register.increase_age("fido").unwrap();
    assert_eq!(fido.tail_length(), 15.0);
}

#[test]
fn give_refuse_and_release() {
    let mut register: Register = Register::new();
    let rex: AnimalHandle = register.register_animal("rex", "tax", 1, 10).unwrap();
    let ann: OwnerHandle = register.register_owner("ann").unwrap();
    register.register_owner("bob").unwrap();

    register.assign_owner("rex", "ann").unwrap();
    assert_eq!(rex.owner(), Some(ann.clone()));
    assert_eq!(ann.animals(), vec![rex.clone()]);

    let err: RegisterError = register.assign_owner("rex", "bob").unwrap_err();
    assert_eq!(
        err,
        RegisterError::conflict("Rex", Conflict::AlreadyOwned { owner: "Ann".into() })
    );

    register.release_owner("rex").unwrap();
    assert!(!rex.has_owner());
    assert!(!ann.has_animals());

    let err: RegisterError = register.release_owner("rex").unwrap_err();
    assert_eq!(err, RegisterError::conflict("Rex", Conflict::NotOwned));
}

#[test]
fn owner_with_animals_stays_registered() {
    let mut register: Register = Register::new();
    register.register_animal("rex", "tax", 1, 10).unwrap();
    register.register_owner("ann").unwrap();
    register.assign_owner("rex", "ann").unwrap();

    let err: RegisterError = register.remove_owner("ann").unwrap_err();
    assert_eq!(err, RegisterError::conflict("Ann", Conflict::HasAnimals { count: 1 }));
    assert_eq!(err.to_string(), "Ann still owns 1 animal");

    register.remove_animal("rex").unwrap();
    let ann: OwnerHandle = register.remove_owner("ann").unwrap();
    assert!(!ann.has_animals());
    assert!(register.owners().is_empty());
}

#[test]
fn removing_an_owned_animal_frees_the_owner() {
    let mut register: Register = Register::new();
    let rex: AnimalHandle = register.register_animal("rex", "tax", 1, 10).unwrap();
    let ann: OwnerHandle = register.register_owner("ann").unwrap();
    register.assign_owner("rex", "ann").unwrap();

    let removed: AnimalHandle = register.remove_animal("Rex").unwrap();
    assert_eq!(removed, rex);
    assert!(!rex.has_owner());
    assert!(!ann.lists(&rex));
    assert_eq!(
        register.find_animal("rex").unwrap_err(),
        RegisterError::not_found(EntityKind::Animal, "Rex")
    );
}

#[test]
fn names_are_unique_whatever_the_case() {
    let mut register: Register = Register::new();
    register.register_animal("bella", "pug", 1, 1).unwrap();
    register.register_owner("ann").unwrap();

    assert_eq!(
        register.register_animal("BELLA", "lab", 2, 2).unwrap_err(),
        RegisterError::duplicate(EntityKind::Animal, "Bella")
    );
    assert_eq!(
        register.register_owner("aNN").unwrap_err(),
        RegisterError::duplicate(EntityKind::Owner, "Ann")
    );
    assert_eq!(register.animals().len(), 1);
    assert_eq!(register.owners().len(), 1);
}

#[test]
fn age_saturates() {
    let mut register: Register = Register::new();
    register.register_animal("old", "lab", u32::MAX, u32::MAX).unwrap();

    assert_eq!(register.increase_age("old").unwrap(), u32::MAX);
    let old: AnimalHandle = register.find_animal("old").unwrap();
    assert!(old.tail_length().is_finite());
}

#[test]
fn tail_listing_orders_by_length_then_name() {
    let mut register: Register = Register::new();
    register.register_animal("fido", "lab", 2, 50).unwrap();
    register.register_animal("rex", "teckel", 1, 1).unwrap();
    register.register_animal("karo", "Mäyräkoira", 9, 9).unwrap();
    register.register_animal("alfie", "pug", 1, 40).unwrap();
    register.register_animal("bella", "pug", 1, 10).unwrap();

    let names: Vec<String> = register
        .list_animals_with_min_tail_length(3.7)
        .iter()
        .map(AnimalHandle::name)
        .collect();

    assert_eq!(names, ["Karo", "Rex", "Alfie", "Fido"]);
}

#[test]
fn listing_does_not_reorder_storage() {
    let mut register: Register = Register::new();
    for name in ["zed", "amy", "mo"] {
        register.register_owner(name).unwrap();
    }

    let listed: Vec<String> = register.list_owners().iter().map(OwnerHandle::name).collect();
    assert_eq!(listed, ["Amy", "Mo", "Zed"]);

    register.remove_owner("amy").unwrap();
    let listed: Vec<String> = register.list_owners().iter().map(OwnerHandle::name).collect();
    assert_eq!(listed, ["Mo", "Zed"]);
}
