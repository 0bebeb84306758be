mod render;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use vastucart_core::{
    BirthDate, Lang, LetterSystem, MasterPolicy, life_path_reduction, name_number_with, name_sum,
    reduce_with_steps,
};
use vastucart_jyotish::{
    ChartInput, MahadashaRequest, Rashi, calculate_mahadasha, check_kalsarp, check_manglik,
    check_sade_sati,
};
use vastucart_numerology::{
    ChildNameRequest, Gender, LuckyNumberRequest, Partner, Quality, analyze_name,
    calculate_child_name_suggestions, calculate_house_number, calculate_love_compatibility,
    calculate_lucky_colors, calculate_lucky_numbers,
};
use vastucart_vastu::{Direction, RoomType, advise_room, room_report};

#[derive(Parser)]
#[command(
    name = "vastucart",
    version,
    about = "VastuCart numerology, vastu and jyotish calculators"
)]
struct Cli {
    /// Language for text output (en or hi)
    #[arg(long, global = true, env = "VASTUCART_LANG", default_value = "en")]
    lang: Lang,

    /// Print the full result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a number to a single digit or master number
    Reduce {
        number: u32,
        /// Master numbers to keep: none, 11-22 or all
        #[arg(long, default_value = "all")]
        masters: MasterPolicy,
    },
    /// Name number of a name
    NameNumber {
        name: String,
        /// Letter system: pythagorean or chaldean
        #[arg(long, default_value = "pythagorean")]
        system: LetterSystem,
        /// Master numbers to keep: none, 11-22 or all
        #[arg(long, default_value = "all")]
        masters: MasterPolicy,
    },
    /// Life path number of a birth date
    LifePath {
        /// Birth date (YYYY-MM-DD)
        date: BirthDate,
        /// Master numbers to keep: none, 11-22 or all
        #[arg(long, default_value = "all")]
        masters: MasterPolicy,
    },
    /// Expression, soul urge and personality numbers of a full name
    NameAnalysis {
        name: String,
        /// Letter system: pythagorean or chaldean
        #[arg(long, default_value = "pythagorean")]
        system: LetterSystem,
    },
    /// Suggest baby names from the parents' birth dates
    ChildNames {
        /// Father's birth date (YYYY-MM-DD)
        #[arg(long)]
        father: BirthDate,
        /// Mother's birth date (YYYY-MM-DD)
        #[arg(long)]
        mother: BirthDate,
        /// boy, girl or unisex
        #[arg(long, default_value = "unisex")]
        gender: Gender,
        /// Preferred first letter
        #[arg(long)]
        letter: Option<char>,
        /// Desired qualities, comma separated
        #[arg(long, value_delimiter = ',')]
        quality: Vec<Quality>,
        /// Maximum number of suggestions
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Lucky numbers, days and dates
    LuckyNumber {
        /// Birth date (YYYY-MM-DD)
        date: BirthDate,
        /// Full name, adds the name number
        #[arg(long)]
        name: Option<String>,
    },
    /// Lucky colours and the weekly colour guide
    LuckyColor {
        /// Birth date (YYYY-MM-DD)
        date: BirthDate,
        /// Full name, adds the name number
        #[arg(long)]
        name: Option<String>,
    },
    /// Love compatibility of two partners
    Love {
        #[arg(long)]
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: BirthDate,
        #[arg(long)]
        partner_name: String,
        /// Partner's birth date (YYYY-MM-DD)
        #[arg(long)]
        partner_date: BirthDate,
    },
    /// Numerology of a house or flat number
    HouseNumber { address: String },
    /// Vastu advice for a room; every zone when no direction is given
    Room {
        /// Room type, e.g. kitchen or master-bedroom
        room: RoomType,
        /// Zone, e.g. north-east or NE
        direction: Option<Direction>,
    },
    /// Manglik dosha check
    Manglik(ChartArgs),
    /// Kalsarp dosha check
    Kalsarp(ChartArgs),
    /// Sade-sati and dhaiya from the Moon and Saturn signs
    SadeSati {
        /// Natal Moon rashi
        #[arg(long)]
        moon: Rashi,
        /// Rashi Saturn is transiting
        #[arg(long)]
        saturn: Rashi,
    },
    /// Vimshottari mahadashas from the Moon's sidereal longitude
    Mahadasha {
        /// Birth date (YYYY-MM-DD)
        date: BirthDate,
        /// Sidereal longitude of the natal Moon, degrees
        #[arg(long, allow_hyphen_values = true)]
        moon: f64,
        /// Show the periods running on this date (YYYY-MM-DD)
        #[arg(long)]
        on: Option<NaiveDate>,
    },
}

/// Chart positions. Ketu is taken opposite Rahu.
#[derive(Args, Debug)]
struct ChartArgs {
    /// Read every position as a sidereal longitude in degrees
    #[arg(long)]
    degrees: bool,
    /// Ascendant: rashi name or 1-12 (degrees with --degrees)
    #[arg(long)]
    lagna: String,
    #[arg(long)]
    sun: String,
    #[arg(long)]
    moon: String,
    #[arg(long)]
    mars: String,
    #[arg(long)]
    mercury: String,
    #[arg(long)]
    jupiter: String,
    #[arg(long)]
    venus: String,
    #[arg(long)]
    saturn: String,
    #[arg(long)]
    rahu: String,
}

impl ChartArgs {
    /// Flag name and raw value, Surya to Rahu.
    fn positions(&self) -> [(&'static str, &str); 8] {
        [
            ("sun", &self.sun),
            ("moon", &self.moon),
            ("mars", &self.mars),
            ("mercury", &self.mercury),
            ("jupiter", &self.jupiter),
            ("venus", &self.venus),
            ("saturn", &self.saturn),
            ("rahu", &self.rahu),
        ]
    }

    fn to_chart(&self) -> Result<ChartInput> {
        if self.degrees {
            let lagna = parse_degrees("lagna", &self.lagna)?;
            let mut longitudes = [0.0; 9];
            for (slot, (flag, raw)) in longitudes.iter_mut().zip(self.positions()) {
                *slot = parse_degrees(flag, raw)?;
            }
            longitudes[8] = longitudes[7] + 180.0;
            Ok(ChartInput::from_longitudes(lagna, longitudes)?)
        } else {
            let lagna: Rashi = self.lagna.parse().context("--lagna")?;
            let mut placements = [Rashi::Mesha; 9];
            for (slot, (flag, raw)) in placements.iter_mut().zip(self.positions()) {
                *slot = raw.parse().with_context(|| format!("--{flag}"))?;
            }
            placements[8] = placements[7].offset(6);
            Ok(ChartInput::new(lagna, placements))
        }
    }
}

fn parse_degrees(flag: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .with_context(|| format!("--{flag} expects degrees, got {raw:?}"))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NameNumberOutput<'a> {
    name: &'a str,
    system: LetterSystem,
    total: u32,
    number: u8,
}

/// Print `result` as JSON or through its text renderer.
fn emit<R: Serialize>(json: bool, result: &R, text: impl FnOnce(&R)) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(result).context("serializing result")?;
        println!("{out}");
    } else {
        text(result);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let (json, lang) = (cli.json, cli.lang);
    match cli.command {
        Commands::Reduce { number, masters } => {
            let r = reduce_with_steps(number, masters);
            emit(json, &r, render::reduction)
        }

        Commands::NameNumber {
            name,
            system,
            masters,
        } => {
            let out = NameNumberOutput {
                name: &name,
                system,
                total: name_sum(&name, system),
                number: name_number_with(&name, system, masters),
            };
            emit(json, &out, |o| {
                println!("{} ({}): {} -> {}", o.name, o.system, o.total, o.number)
            })
        }

        Commands::LifePath { date, masters } => {
            let r = life_path_reduction(date, masters);
            emit(json, &r, render::reduction)
        }

        Commands::NameAnalysis { name, system } => {
            let r = analyze_name(&name, system);
            emit(json, &r, |r| render::name_analysis(r, lang))
        }

        Commands::ChildNames {
            father,
            mother,
            gender,
            letter,
            quality,
            limit,
        } => {
            let mut req = ChildNameRequest::new(father, mother, gender).with_qualities(quality);
            if let Some(c) = letter {
                req = req.with_starting_letter(c).context("--letter")?;
            }
            if let Some(n) = limit {
                req = req.with_limit(n).context("--limit")?;
            }
            let r = calculate_child_name_suggestions(&req);
            emit(json, &r, |r| render::child_names(r, lang))
        }

        Commands::LuckyNumber { date, name } => {
            let mut req = LuckyNumberRequest::new(date);
            if let Some(n) = name {
                req = req.with_name(n);
            }
            let r = calculate_lucky_numbers(&req);
            emit(json, &r, |r| render::lucky_numbers(r, lang))
        }

        Commands::LuckyColor { date, name } => {
            let mut req = LuckyNumberRequest::new(date);
            if let Some(n) = name {
                req = req.with_name(n);
            }
            let r = calculate_lucky_colors(&req);
            emit(json, &r, |r| render::lucky_colors(r, lang))
        }

        Commands::Love {
            name,
            date,
            partner_name,
            partner_date,
        } => {
            let a = Partner::new(name, date);
            let b = Partner::new(partner_name, partner_date);
            let r = calculate_love_compatibility(&a, &b);
            emit(json, &r, |r| render::love(r, lang))
        }

        Commands::HouseNumber { address } => {
            let r = calculate_house_number(&address);
            emit(json, &r, |r| render::house_number(r, lang))
        }

        Commands::Room { room, direction } => match direction {
            Some(d) => {
                let r = advise_room(room, d);
                emit(json, &r, |r| render::room_advice(r, lang))
            }
            None => {
                let r = room_report(room);
                emit(json, &r, |r| render::room_report(r, lang))
            }
        },

        Commands::Manglik(args) => {
            let chart = args.to_chart().context("invalid chart")?;
            let r = check_manglik(&chart);
            emit(json, &r, |r| render::manglik(r, lang))
        }

        Commands::Kalsarp(args) => {
            let chart = args.to_chart().context("invalid chart")?;
            let r = check_kalsarp(&chart);
            emit(json, &r, |r| render::kalsarp(r, lang))
        }

        Commands::SadeSati { moon, saturn } => {
            let r = check_sade_sati(moon, saturn);
            emit(json, &r, |r| render::sade_sati(r, lang))
        }

        Commands::Mahadasha { date, moon, on } => {
            let mut req = MahadashaRequest::new(date, moon);
            if let Some(d) = on {
                req = req.on(d);
            }
            let r = calculate_mahadasha(&req).context("--moon")?;
            emit(json, &r, |r| render::mahadasha(r, lang))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    log::debug!("language {}", cli.lang.code());
    run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["vastucart", "life-path", "1990-07-15", "--json", "--lang", "hi"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.lang, Lang::Hi);
        assert!(matches!(cli.command, Commands::LifePath { .. }));
    }

    #[test]
    fn rejects_bad_date() {
        assert!(Cli::try_parse_from(["vastucart", "life-path", "15-07-1990"]).is_err());
    }

    #[test]
    fn qualities_split_on_commas() {
        let cli = Cli::try_parse_from([
            "vastucart",
            "child-names",
            "--father",
            "1985-04-01",
            "--mother",
            "1990-02-03",
            "--quality",
            "leadership,wisdom",
        ])
        .unwrap();
        match cli.command {
            Commands::ChildNames { quality, .. } => assert_eq!(quality.len(), 2),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn chart_from_signs_puts_ketu_opposite_rahu() {
        let cli = Cli::try_parse_from([
            "vastucart", "manglik", "--lagna", "mesha", "--sun", "leo", "--moon", "4", "--mars",
            "makara", "--mercury", "kanya", "--jupiter", "dhanu", "--venus", "tula", "--saturn",
            "kumbha", "--rahu", "mithuna",
        ])
        .unwrap();
        let Commands::Manglik(args) = cli.command else {
            panic!("wrong subcommand");
        };
        let chart = args.to_chart().unwrap();
        assert_eq!(chart.rashi_of(vastucart_core::Graha::Ketu), Rashi::Dhanu);
        assert_eq!(chart.rashi_of(vastucart_core::Graha::Chandra), Rashi::Karka);
    }

    #[test]
    fn chart_from_degrees() {
        let cli = Cli::try_parse_from([
            "vastucart", "kalsarp", "--degrees", "--lagna", "5", "--sun", "20", "--moon", "50",
            "--mars", "80", "--mercury", "100", "--jupiter", "120", "--venus", "150", "--saturn",
            "170", "--rahu", "10",
        ])
        .unwrap();
        let Commands::Kalsarp(args) = cli.command else {
            panic!("wrong subcommand");
        };
        let chart = args.to_chart().unwrap();
        assert_eq!(chart.longitude_of(vastucart_core::Graha::Ketu), 190.0);
    }
}
