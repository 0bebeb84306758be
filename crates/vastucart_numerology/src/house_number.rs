//! House (address) numerology.

use serde::Serialize;
use vastucart_core::{BilingualText as T, Graha, LetterSystem, MasterPolicy, letter_value, reduce};

use crate::tables::house::{HouseProfile, house_profile};
use crate::tables::planets::planet_profile;

/// One character of the address that contributed to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponent {
    pub ch: char,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseNumberResult {
    pub address: String,
    pub components: Vec<AddressComponent>,
    pub total: u32,
    pub number: u8,
    /// Set when the address had no digits or letters and profile 1 was used.
    pub is_fallback: bool,
    pub ruling_planet: Graha,
    pub profile: &'static HouseProfile,
    pub colors: &'static [T],
}

/// Digits count at face value and letters at their Pythagorean value.
pub fn address_components(address: &str) -> Vec<AddressComponent> {
    address
        .chars()
        .filter_map(|c| {
            if let Some(d) = c.to_digit(10) {
                return Some(AddressComponent { ch: c, value: d as u8 });
            }
            letter_value(c, LetterSystem::Pythagorean).map(|value| AddressComponent { ch: c, value })
        })
        .collect()
}

/// Numerology of a house or flat number such as `"B-204"`.
pub fn calculate_house_number(address: &str) -> HouseNumberResult {
    let components = address_components(address);
    let total: u32 = components.iter().map(|c| c.value as u32).sum();
    let number = reduce(total, MasterPolicy::None);
    let is_fallback = number == 0;
    let profile = house_profile(number);
    let ruling_planet = Graha::from_number(profile.number);

    log::debug!("house number {address:?}: total {total} -> {number} (fallback {is_fallback})");

    HouseNumberResult {
        address: address.to_string(),
        components,
        total,
        number: profile.number,
        is_fallback,
        ruling_planet,
        profile,
        colors: planet_profile(ruling_planet).colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits() {
        // B=2, 2+0+4 = 6 -> 8
        let r = calculate_house_number("B-204");
        assert_eq!(r.total, 8);
        assert_eq!(r.number, 8);
        assert_eq!(r.ruling_planet, Graha::Shani);
        assert!(!r.is_fallback);
        assert_eq!(r.components.len(), 4);
    }

    #[test]
    fn masters_reduce_fully() {
        // 29 -> 11 -> 2 under the single-digit policy
        let r = calculate_house_number("29");
        assert_eq!(r.number, 2);
        let r = calculate_house_number("33");
        assert_eq!(r.number, 6);
    }

    #[test]
    fn empty_address_falls_back() {
        for addr in ["", "---", " / "] {
            let r = calculate_house_number(addr);
            assert!(r.is_fallback, "{addr:?}");
            assert_eq!(r.number, 1);
            assert_eq!(r.total, 0);
        }
    }

    #[test]
    fn lowercase_letters_count() {
        assert_eq!(
            calculate_house_number("12a").number,
            calculate_house_number("12A").number
        );
    }
}
