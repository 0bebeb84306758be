//! Plain-text rendering of calculator results.

use vastucart_core::{BilingualText, Lang, Reduction};
use vastucart_jyotish::{KalsarpResult, MahadashaResult, ManglikResult, SadeSatiResult};
use vastucart_numerology::{
    ChildNameResult, HouseNumberResult, LoveCompatibilityResult, LuckyColorResult,
    LuckyNumberResult, NameAnalysis,
};
use vastucart_vastu::RoomAdvice;

fn list(items: &[BilingualText], lang: Lang) -> String {
    items.iter().map(|t| t.get(lang)).collect::<Vec<_>>().join(", ")
}

fn numbers(ns: &[u8]) -> String {
    ns.iter().map(u8::to_string).collect::<Vec<_>>().join(", ")
}

fn bullets(title: &str, items: &[BilingualText], lang: Lang) {
    if items.is_empty() {
        return;
    }
    println!("{title}:");
    for item in items {
        println!("  - {}", item.get(lang));
    }
}

pub fn reduction(r: &Reduction) {
    let chain: Vec<String> = std::iter::once(r.start)
        .chain(r.steps.iter().copied())
        .map(|n| n.to_string())
        .collect();
    println!("{}", chain.join(" -> "));
}

pub fn name_analysis(r: &NameAnalysis, lang: Lang) {
    println!("{} ({}), total {}", r.normalized, r.system, r.total);
    for (label, reading) in [
        ("Expression", &r.expression),
        ("Soul urge", &r.soul_urge),
        ("Personality", &r.personality),
    ] {
        println!(
            "{label:<12} {:>2}  {}",
            reading.number,
            reading.profile.title.get(lang)
        );
    }
}

pub fn child_names(r: &ChildNameResult, lang: Lang) {
    println!(
        "Father LP {} / BD {}, mother LP {} / BD {}, harmony {}",
        r.father.life_path,
        r.father.birth_day,
        r.mother.life_path,
        r.mother.birth_day,
        r.harmony_number
    );
    println!("Recommended numbers: {}", numbers(&r.recommended_numbers));
    let letters: String = r.recommended_letters.iter().collect();
    println!("Recommended letters: {letters}");
    if r.letter_filter_relaxed {
        println!("(no names with the requested letter; showing all letters)");
    }
    for s in &r.suggestions {
        println!(
            "{:>3}  {:<12} {}  {}",
            s.score,
            s.name,
            s.meaning.get(lang),
            s.match_reason.get(lang)
        );
    }
}

pub fn lucky_numbers(r: &LuckyNumberResult, lang: Lang) {
    println!("{}", r.summary.get(lang));
    println!("Lucky numbers:   {}", numbers(&r.lucky_numbers));
    println!("Unlucky numbers: {}", numbers(&r.unlucky_numbers));
    println!("Lucky dates:     {}", numbers(&r.lucky_dates));
    println!("Lucky days:      {}", list(&r.lucky_days, lang));
    println!("Gemstone:        {}", r.gemstone.get(lang));
    println!("Colours:         {}", list(r.colors, lang));
}

pub fn lucky_colors(r: &LuckyColorResult, lang: Lang) {
    println!("Ruling planet: {}", r.ruling_planet.label().get(lang));
    for c in &r.primary {
        println!(
            "{:>3}  {:<14} {}  {}",
            c.score,
            c.color.name.get(lang),
            c.color.hex,
            c.reason.get(lang)
        );
    }
    let avoid: Vec<&str> = r.avoid.iter().map(|c| c.name.get(lang)).collect();
    if !avoid.is_empty() {
        println!("Avoid: {}", avoid.join(", "));
    }
    for d in &r.weekly {
        println!("  {:<10} {}", d.day.get(lang), d.color.name.get(lang));
    }
}

pub fn love(r: &LoveCompatibilityResult, lang: Lang) {
    println!(
        "{}% ({})  life path {}, name {}, birth day {}",
        r.compatibility_score,
        r.level_label.get(lang),
        r.life_path_score,
        r.name_score,
        r.birth_day_score
    );
    println!("{}", r.summary.get(lang));
    bullets("Strengths", &r.strengths, lang);
    bullets("Challenges", &r.challenges, lang);
    bullets("Advice", &r.advice, lang);
}

pub fn house_number(r: &HouseNumberResult, lang: Lang) {
    println!(
        "{}: {} -> {} ({})",
        r.address,
        r.total,
        r.number,
        r.ruling_planet.label().get(lang)
    );
    println!("{}", r.profile.description.get(lang));
    bullets("Best for", r.profile.best_for, lang);
    bullets("Remedies", r.profile.remedies, lang);
}

pub fn room_advice(r: &RoomAdvice, lang: Lang) {
    println!(
        "{} / {}: {} ({})",
        r.room.label().get(lang),
        r.direction.label().get(lang),
        r.suitability_label.get(lang),
        r.score
    );
    println!("{}", r.summary.get(lang));
    bullets("Remedies", &r.remedies, lang);
    bullets("Tips", r.tips, lang);
}

pub fn room_report(rs: &[RoomAdvice], lang: Lang) {
    for r in rs {
        println!(
            "{:<12} {:>3}  {}",
            r.direction.label().get(lang),
            r.score,
            r.suitability_label.get(lang)
        );
    }
}

pub fn manglik(r: &ManglikResult, lang: Lang) {
    println!("{}", r.summary.get(lang));
    for p in &r.positions {
        let mark = if p.is_dosha { "*" } else { " " };
        println!("{mark} from {:<6} house {}", p.reference.label().get(lang), p.house);
    }
    for c in &r.cancellations {
        println!("  cancelled: {}", c.label().get(lang));
    }
    bullets("Remedies", r.remedies, lang);
}

pub fn kalsarp(r: &KalsarpResult, lang: Lang) {
    println!("{}", r.summary.get(lang));
    println!(
        "Rahu in {} (house {}), Ketu in {}",
        r.rahu_rashi.label().get(lang),
        r.rahu_house,
        r.ketu_rashi.label().get(lang)
    );
    if r.approximate {
        println!("(positions estimated from signs)");
    }
    bullets("Remedies", r.remedies, lang);
}

pub fn sade_sati(r: &SadeSatiResult, lang: Lang) {
    println!("{}", r.description.get(lang));
    bullets("Remedies", r.remedies, lang);
}

pub fn mahadasha(r: &MahadashaResult, lang: Lang) {
    println!(
        "Moon in {} pada {}; {} balance {:.2} of {} years",
        r.moon.nakshatra.name(),
        r.moon.pada,
        r.balance.lord.label().get(lang),
        r.balance.remaining_years,
        r.balance.total_years
    );
    for m in &r.mahadashas {
        println!(
            "{:<10} {} .. {}",
            m.period.lord.label().get(lang),
            m.period.start,
            m.period.end
        );
    }
    if let Some(a) = &r.active {
        println!(
            "On {}: {} / {} (until {})",
            a.on,
            a.mahadasha.lord.label().get(lang),
            a.antardasha.lord.label().get(lang),
            a.antardasha.end
        );
    }
}
