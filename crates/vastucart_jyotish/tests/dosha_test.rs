//! Manglik, kalsarp and sade-sati checks over one chart.

use vastucart_core::Graha;
use vastucart_jyotish::{
    ChartInput, KalsarpStatus, KalsarpType, ManglikSeverity, Rashi, check_kalsarp,
    check_manglik, check_sade_sati,
};

// Surya Chandra Mangal Buddh Guru Shukra Shani Rahu Ketu
fn sample_chart() -> ChartInput {
    let lons = [95.0, 62.0, 275.0, 110.0, 140.0, 82.0, 130.0, 52.0, 232.0];
    ChartInput::from_longitudes(20.0, lons).unwrap()
}

#[test]
fn sample_chart_placements() {
    let c = sample_chart();
    assert_eq!(c.lagna, Rashi::Mesha);
    assert_eq!(c.rashi_of(Graha::Mangal), Rashi::Makara);
    assert_eq!(c.house_of(Graha::Mangal), 10);
    assert_eq!(c.house_of(Graha::Rahu), 2);
}

#[test]
fn manglik_from_moon_and_venus() {
    // Moon and Venus share Mithuna; Mars in Makara is 8th from both.
    let r = check_manglik(&sample_chart());
    assert_eq!(r.dosha_count, 2);
    assert_eq!(r.severity, ManglikSeverity::Partial);
    assert!(!r.is_manglik, "exalted Mars cancels");
}

#[test]
fn kalsarp_partial_by_mars() {
    let r = check_kalsarp(&sample_chart());
    assert_eq!(r.status, KalsarpStatus::Partial);
    assert_eq!(r.outside, vec![Graha::Mangal]);
    assert_eq!(r.kalsarp_type, Some(KalsarpType::Kulik));
}

#[test]
fn sade_sati_against_moon_sign() {
    let moon = sample_chart().rashi_of(Graha::Chandra);
    assert!(check_sade_sati(moon, Rashi::Vrishabha).in_sade_sati);
    assert!(!check_sade_sati(moon, Rashi::Dhanu).in_sade_sati);
}

#[test]
fn manglik_json_is_camel_case() {
    let v = serde_json::to_value(check_manglik(&sample_chart())).unwrap();
    assert!(v.get("doshaCount").is_some());
    assert!(v.get("isManglik").is_some());
    assert_eq!(v["severity"], "partial");
    assert_eq!(v["cancellations"][0], "mars-exalted");
}
