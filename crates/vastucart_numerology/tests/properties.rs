use proptest::prelude::*;
use vastucart_core::BirthDate;
use vastucart_numerology::{
    ChildNameRequest, Gender, LuckyNumberRequest, Partner, calculate_child_name_suggestions,
    calculate_love_compatibility, calculate_lucky_colors, compatibility_score,
};

fn birth_date() -> impl Strategy<Value = BirthDate> {
    (0i64..45_000).prop_map(|days| {
        let base = chrono::NaiveDate::from_ymd_opt(1920, 1, 1).unwrap();
        BirthDate::from(base + chrono::Duration::days(days))
    })
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Boy), Just(Gender::Girl), Just(Gender::Unisex)]
}

proptest! {
    /// Invariant: the pair table is symmetric, including master numbers.
    #[test]
    fn pair_score_symmetric(a in 0u8..40, b in 0u8..40) {
        prop_assert_eq!(compatibility_score(a, b), compatibility_score(b, a));
    }

    /// Invariant: love compatibility does not depend on partner order.
    #[test]
    fn love_symmetric(
        na in "[A-Za-z]{1,10}",
        nb in "[A-Za-z]{1,10}",
        da in birth_date(),
        db in birth_date(),
    ) {
        let a = Partner::new(na, da);
        let b = Partner::new(nb, db);
        let ab = calculate_love_compatibility(&a, &b);
        let ba = calculate_love_compatibility(&b, &a);
        prop_assert_eq!(ab.compatibility_score, ba.compatibility_score);
        prop_assert_eq!(ab.level, ba.level);
        prop_assert!(ab.compatibility_score <= 100);
        prop_assert!((3..=4).contains(&ab.strengths.len()));
    }

    /// Invariant: child-name scores stay within 0–100 and come sorted.
    #[test]
    fn child_scores_bounded(f in birth_date(), m in birth_date(), g in gender(), limit in 1usize..30) {
        let req = ChildNameRequest::new(f, m, g).with_limit(limit).unwrap();
        let r = calculate_child_name_suggestions(&req);
        prop_assert!(!r.suggestions.is_empty());
        prop_assert!(r.suggestions.len() <= limit);
        prop_assert!(r.suggestions.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert!(r.suggestions.iter().all(|s| s.score <= 100));
    }

    /// Invariant: lucky colour scores stay within 0–100.
    #[test]
    fn colour_scores_bounded(d in birth_date(), name in "[A-Za-z ]{0,16}") {
        let r = calculate_lucky_colors(&LuckyNumberRequest::new(d).with_name(name));
        prop_assert!(!r.primary.is_empty());
        prop_assert!(r.primary.iter().all(|s| s.score <= 100 && s.score > 0));
        prop_assert_eq!(r.weekly.len(), 7);
    }
}
