//! Pet Catalog
//!
//! Static list of adoptable pets and id lookup for the detail route.

use crate::error::PetLookupError;
use crate::models::{Gender, Pet};

pub const PETS: &[Pet] = &[
    Pet {
        id: 1,
        name: "Milo",
        breed: "Golden Retriever",
        gender: Gender::Male,
        age: "2 Yrs",
        image: "/milo.png",
        bio: "Milo is a bundle of joy who loves tennis balls and swimming.",
    },
    Pet {
        id: 2,
        name: "Bella",
        breed: "Siamese Cat",
        gender: Gender::Female,
        age: "1 Yr",
        image: "/bella.png",
        bio: "Bella is an elegant lady who enjoys sunny spots and naps.",
    },
    Pet {
        id: 3,
        name: "Rocky",
        breed: "German Shepherd",
        gender: Gender::Male,
        age: "3 Yrs",
        image: "/rocky.png",
        bio: "Rocky is a loyal protector who loves training and fetch.",
    },
];

/// Parse a route parameter into a pet id from its leading digits, so `1abc` and `1.5` both give 1
pub fn parse_pet_id(raw: &str) -> Result<u32, PetLookupError> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end]
        .parse::<u32>()
        .map_err(|_| PetLookupError::InvalidId(raw.to_string()))
}

/// Resolve a raw `:id` parameter to a catalog entry
pub fn find_pet(raw: &str) -> Result<&'static Pet, PetLookupError> {
    let id = parse_pet_id(raw)?;
    PETS.iter()
        .find(|pet| pet.id == id)
        .ok_or(PetLookupError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_pet() {
        let pet = find_pet("1").unwrap();
        assert_eq!(pet.name, "Milo");
        assert_eq!(pet.bio, "Milo is a bundle of joy who loves tennis balls and swimming.");
        assert_eq!(pet.href(), "/pets/1");
    }

    #[test]
    fn test_find_missing_pet() {
        assert_eq!(find_pet("999"), Err(PetLookupError::NotFound(999)));
    }

    #[test]
    fn test_find_invalid_id() {
        assert_eq!(find_pet("milo"), Err(PetLookupError::InvalidId("milo".to_string())));
        assert_eq!(find_pet("-1"), Err(PetLookupError::InvalidId("-1".to_string())));
        assert_eq!(find_pet(""), Err(PetLookupError::InvalidId(String::new())));
    }

    #[test]
    fn test_leading_digits_resolve() {
        assert_eq!(find_pet("1abc").unwrap().name, "Milo");
        assert_eq!(find_pet("1.5").unwrap().name, "Milo");
        assert_eq!(find_pet(" 2 ").unwrap().name, "Bella");
        assert_eq!(parse_pet_id("abc1"), Err(PetLookupError::InvalidId("abc1".to_string())));
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<u32> = PETS.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PETS.len());
    }
}
