use colored::*;
use kennel_core::compare;
use kennel_core::sorter;
use kennel_core::{AnimalHandle, OwnerHandle};

use crate::terminal::colors;

type Detail = (String, ColoredString);

pub fn tail_length(value: f64) -> ColoredString {
    format!("{value:.2}").color(colors::TAIL_LENGTH)
}

pub fn animal_details(animal: &AnimalHandle) -> Vec<Detail> {
    let owner: ColoredString = match animal.owner() {
        Some(owner) => owner.name().color(colors::OWNER),
        None => "none".dimmed(),
    };

    vec![
        ("Breed".to_string(), animal.breed().color(colors::TEXT_DEFAULT)),
        ("Age".to_string(), animal.age().to_string().color(colors::ACCENT)),
        ("Weight".to_string(), animal.weight().to_string().color(colors::ACCENT)),
        ("Tail".to_string(), tail_length(animal.tail_length())),
        ("Owner".to_string(), owner),
    ]
}

/// One line per animal, ordered by name.
pub fn owner_details(owner: &OwnerHandle) -> Vec<Detail> {
    let mut animals: Vec<AnimalHandle> = owner.animals();
    if animals.is_empty() {
        return vec![("Animals".to_string(), "none".dimmed())];
    }

    sorter::selection_sort(&mut animals, compare::by_name);
    animals
        .iter()
        .map(|animal| {
            let value: String = format!("{} ({})", animal.name(), animal.breed());
            ("Animal".to_string(), value.color(colors::PRIMARY))
        })
        .collect()
}
