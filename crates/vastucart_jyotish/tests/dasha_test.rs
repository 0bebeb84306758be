//! Integration tests for Vimshottari periods.

use chrono::NaiveDate;
use proptest::prelude::*;
use vastucart_core::{BirthDate, Graha};
use vastucart_jyotish::{
    MahadashaRequest, NAKSHATRA_SPAN, Nakshatra, VIMSHOTTARI_TOTAL_YEARS,
    calculate_mahadasha, vimshottari_years,
};

fn birth() -> BirthDate {
    BirthDate::new(15, 7, 1990).unwrap()
}

#[test]
fn revati_moon_starts_with_mercury() {
    let moon = 26.0 * NAKSHATRA_SPAN + 1.0;
    let r = calculate_mahadasha(&MahadashaRequest::new(birth(), moon)).unwrap();
    assert_eq!(r.moon.nakshatra, Nakshatra::Revati);
    assert_eq!(r.balance.lord, Graha::Buddh);
    let lords: Vec<Graha> = r.mahadashas.iter().map(|m| m.period.lord).collect();
    assert_eq!(
        lords,
        vec![
            Graha::Buddh,
            Graha::Ketu,
            Graha::Shukra,
            Graha::Surya,
            Graha::Chandra,
            Graha::Mangal,
            Graha::Rahu,
            Graha::Guru,
            Graha::Shani,
        ]
    );
}

#[test]
fn periods_are_contiguous() {
    let r = calculate_mahadasha(&MahadashaRequest::new(birth(), 123.4)).unwrap();
    assert_eq!(
        r.mahadashas[0].period.start,
        NaiveDate::from_ymd_opt(1990, 7, 15).unwrap()
    );
    for pair in r.mahadashas.windows(2) {
        assert_eq!(pair[0].period.end, pair[1].period.start);
    }
    for m in &r.mahadashas {
        assert_eq!(m.antardashas.first().map(|a| a.start), Some(m.period.start));
        assert_eq!(m.antardashas.last().map(|a| a.end), Some(m.period.end));
        for pair in m.antardashas.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}

#[test]
fn json_shape() {
    let on = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let r = calculate_mahadasha(&MahadashaRequest::new(birth(), 200.0).on(on)).unwrap();
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["birthDate"], "1990-07-15");
    assert!(v["balance"]["remainingYears"].is_number());
    assert!(v["mahadashas"][0]["lord"].is_string());
    assert!(v["mahadashas"][0]["antardashas"].is_array());
    assert!(v["active"]["antardasha"]["start"].is_string());
}

proptest! {
    /// Birth balance plus the eight full periods that follow.
    #[test]
    fn total_years_match_balance(moon in 0.0f64..360.0) {
        let r = calculate_mahadasha(&MahadashaRequest::new(birth(), moon)).unwrap();
        let total: f64 = r.mahadashas.iter().map(|m| m.period.years).sum();
        let spent = vimshottari_years(r.balance.lord) - r.balance.remaining_years;
        prop_assert!((total + spent - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-6);
    }

    #[test]
    fn antardashas_fill_their_mahadasha(moon in 0.0f64..360.0) {
        let r = calculate_mahadasha(&MahadashaRequest::new(birth(), moon)).unwrap();
        for m in &r.mahadashas {
            let sum: f64 = m.antardashas.iter().map(|a| a.years).sum();
            prop_assert!((sum - m.period.years).abs() < 1e-6);
        }
    }
}
