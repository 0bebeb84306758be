use vastucart_core::{ALL_GRAHAS, LetterSystem, MASTER_NUMBERS, name_number};
use vastucart_numerology::tables::{
    COLORS, PROFILE_NUMBERS, color_for_graha, house_profile, name_catalog, number_profile,
    planet_for_number, planet_profile,
};
use vastucart_numerology::{Gender, compatible_numbers};

#[test]
fn every_number_has_a_profile() {
    for n in 1..=9u8 {
        assert_eq!(number_profile(n).number, n);
        assert_eq!(house_profile(n).number, n);
        assert_eq!(planet_for_number(n).graha.number(), n);
        assert!(!compatible_numbers(n).is_empty());
    }
    for n in MASTER_NUMBERS {
        assert!(PROFILE_NUMBERS.contains(&n));
        assert_eq!(number_profile(n).number, n);
    }
}

#[test]
fn every_graha_has_planet_and_colour() {
    for g in ALL_GRAHAS {
        assert_eq!(planet_profile(g).graha, g);
        assert_eq!(color_for_graha(g).graha, g);
    }
    assert!(COLORS.len() >= 9);
}

#[test]
fn catalog_numbers_match_letter_values() {
    for entry in name_catalog() {
        for system in [LetterSystem::Pythagorean, LetterSystem::Chaldean] {
            assert_eq!(entry.number(system), name_number(entry.name, system), "{}", entry.name);
        }
    }
}

#[test]
fn catalog_covers_each_gender() {
    for g in [Gender::Boy, Gender::Girl, Gender::Unisex] {
        assert!(name_catalog().iter().any(|e| e.gender == g), "{g}");
    }
}

#[test]
fn catalog_names_unique() {
    let names = name_catalog();
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            assert!(!a.name.eq_ignore_ascii_case(b.name), "duplicate {}", a.name);
        }
    }
}

#[test]
fn bilingual_text_complete() {
    for entry in name_catalog() {
        assert!(!entry.meaning.en.is_empty());
        assert!(!entry.meaning.hi.is_empty());
    }
    for n in PROFILE_NUMBERS {
        let p = number_profile(n);
        assert!(!p.title.hi.is_empty());
        assert!(!p.description.hi.is_empty());
    }
}
