use clap::{Parser, Subcommand};
use ziwei_calendar::{Moment, four_pillars, solar_to_lunar};
use ziwei_chart::{Chart, natal_chart, transformed_stars};
use ziwei_core::{ALL_BRANCHES, ALL_STEMS, BirthRecord, Gender, HeavenlyStem, days_in_month};
use ziwei_fortune::{TransitKind, major_limits, minor_limit, transit};

#[derive(Parser)]
#[command(name = "ziwei", about = "Zi Wei Dou Shu chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full natal chart
    Chart {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Birth time (hh:mm)
        time: String,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
    },
    /// Four pillars and lunar date of a moment
    Pillars {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Time (hh:mm)
        time: String,
    },
    /// All twelve ten-year limits
    MajorLimits {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Birth time (hh:mm)
        time: String,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
    },
    /// Minor limit house at a nominal age
    MinorLimit {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Birth time (hh:mm)
        time: String,
        /// Nominal age (1 = birth year)
        #[arg(long)]
        age: u16,
    },
    /// Transit overlay for a moment (defaults to the current UTC time)
    Transit {
        /// Target date (YYYY-MM-DD)
        date: Option<String>,
        /// Target time (hh:mm)
        time: Option<String>,
        /// Granularity: annual, monthly or daily
        #[arg(long, default_value = "annual")]
        kind: String,
    },
    /// Four transformations of a stem
    Transformations {
        /// Heavenly stem (甲..癸 or 0-9)
        stem: String,
    },
}

fn try_parse_date(s: &str) -> Option<(i32, u8, u8)> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() == 3
        && let (Ok(y), Ok(m), Ok(d)) = (
            parts[0].parse::<i32>(),
            parts[1].parse::<u8>(),
            parts[2].parse::<u8>(),
        )
        && (1..=12).contains(&m)
        && d >= 1
        && d <= days_in_month(y, m)
    {
        return Some((y, m, d));
    }
    None
}

fn parse_date(s: &str) -> (i32, u8, u8) {
    match try_parse_date(s) {
        Some(date) => date,
        None => {
            eprintln!("Invalid date: {s} (expected YYYY-MM-DD)");
            std::process::exit(1);
        }
    }
}

fn try_parse_time(s: &str) -> Option<(u8, u8)> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() == 2
        && let (Ok(h), Ok(m)) = (parts[0].parse::<u8>(), parts[1].parse::<u8>())
        && h <= 23
        && m <= 59
    {
        return Some((h, m));
    }
    None
}

fn parse_time(s: &str) -> (u8, u8) {
    match try_parse_time(s) {
        Some(time) => time,
        None => {
            eprintln!("Invalid time: {s} (expected hh:mm, 00:00-23:59)");
            std::process::exit(1);
        }
    }
}

fn parse_gender(s: &str) -> Gender {
    match s {
        "male" | "m" | "男" => Gender::Male,
        "female" | "f" | "女" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s} (male or female)");
            std::process::exit(1);
        }
    }
}

fn parse_stem(s: &str) -> HeavenlyStem {
    if let Ok(i) = s.parse::<usize>()
        && i < 10
    {
        return ALL_STEMS[i];
    }
    if let Some(stem) = ALL_STEMS.into_iter().find(|st| st.name() == s) {
        return stem;
    }
    eprintln!("Invalid stem: {s} (甲..癸 or 0-9)");
    std::process::exit(1);
}

fn parse_kind(s: &str) -> TransitKind {
    match s {
        "annual" => TransitKind::Annual,
        "monthly" => TransitKind::Monthly,
        "daily" => TransitKind::Daily,
        _ => {
            eprintln!("Invalid transit kind: {s} (annual, monthly or daily)");
            std::process::exit(1);
        }
    }
}

/// Current UTC moment from the system clock.
fn now_utc() -> Moment {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    // 1970-01-01 is JDN 2440588.
    let date = ziwei_calendar::SolarDate::from_jdn(2440588 + secs as i64 / 86400);
    let rem = secs % 86400;
    Moment {
        date,
        hour: (rem / 3600) as u8,
        minute: (rem % 3600 / 60) as u8,
    }
}

fn birth_record(date: &str, time: &str, gender: Gender) -> BirthRecord {
    let (y, mo, d) = parse_date(date);
    let (h, mi) = parse_time(time);
    BirthRecord::new(y, mo, d, h, mi, gender)
}

fn print_chart(chart: &Chart) {
    println!(
        "四柱: {} {} {} {}",
        chart.pillars.year.name(),
        chart.pillars.month.name(),
        chart.pillars.day.name(),
        chart.pillars.hour.name()
    );
    println!(
        "農曆: {}年{}{}月{}日",
        chart.lunar.year,
        if chart.lunar.is_leap { "閏" } else { "" },
        chart.lunar.month,
        chart.lunar.day
    );
    println!(
        "命宮{} 身宮{} {}",
        chart.life_palace.name(),
        chart.body_palace.name(),
        chart.bureau.name()
    );
    for branch in ALL_BRANCHES {
        let house = chart.house(branch);
        let stars: Vec<String> = house
            .stars
            .iter()
            .map(|p| match p.transformation {
                Some(t) => format!("{}{}", p.star.name(), t.name()),
                None => p.star.name().to_string(),
            })
            .collect();
        println!(
            "{}{} {}: {}",
            house.stem.name(),
            house.branch.name(),
            house.label.name(),
            stars.join(" ")
        );
    }
}


fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Chart { date, time, gender } => {
            let record = birth_record(&date, &time, parse_gender(&gender));
            match natal_chart(&record) {
                Ok(chart) => print_chart(&chart),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Pillars { date, time } => {
            let (y, mo, d) = parse_date(&date);
            let (h, mi) = parse_time(&time);
            let moment = Moment::new(y, mo, d, h, mi);
            match (four_pillars(&moment), solar_to_lunar(moment.date)) {
                (Ok(p), Ok(lunar)) => {
                    println!(
                        "{} {} {} {}",
                        p.year.name(),
                        p.month.name(),
                        p.day.name(),
                        p.hour.name()
                    );
                    println!(
                        "農曆 {}年{}{}月{}日",
                        lunar.year,
                        if lunar.is_leap { "閏" } else { "" },
                        lunar.month,
                        lunar.day
                    );
                }
                (Err(e), _) | (_, Err(e)) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::MajorLimits { date, time, gender } => {
            let gender = parse_gender(&gender);
            let record = birth_record(&date, &time, gender);
            match natal_chart(&record) {
                Ok(chart) => {
                    for l in major_limits(&chart, gender) {
                        println!(
                            "{:2}-{:3}歲 {} {}",
                            l.start_age,
                            l.end_age,
                            l.branch.name(),
                            chart.house(l.branch).label.name()
                        );
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::MinorLimit { date, time, age } => {
            let record = birth_record(&date, &time, Gender::Male);
            let result = natal_chart(&record).map_err(ziwei_fortune::FortuneError::from);
            match result.and_then(|chart| {
                minor_limit(&chart, age).map(|b| (chart.house(b).label, b))
            }) {
                Ok((label, branch)) => {
                    println!("{age}歲 小限 {} {}", branch.name(), label.name());
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Transit { date, time, kind } => {
            let moment = match (date, time) {
                (Some(date), Some(time)) => {
                    let (y, mo, d) = parse_date(&date);
                    let (h, mi) = parse_time(&time);
                    Moment::new(y, mo, d, h, mi)
                }
                (Some(date), None) => {
                    let (y, mo, d) = parse_date(&date);
                    Moment::new(y, mo, d, 12, 0)
                }
                _ => now_utc(),
            };
            match transit(parse_kind(&kind), &moment) {
                Ok(t) => {
                    println!(
                        "{:04}-{:02}-{:02} .. {:04}-{:02}-{:02}",
                        t.first_day.year,
                        t.first_day.month,
                        t.first_day.day,
                        t.last_day.year,
                        t.last_day.month,
                        t.last_day.day
                    );
                    print_chart(&t.chart);
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Transformations { stem } => {
            let stem = parse_stem(&stem);
            let stars = transformed_stars(stem);
            println!(
                "{}: {}化祿 {}化權 {}化科 {}化忌",
                stem.name(),
                stars[0].name(),
                stars[1].name(),
                stars[2].name(),
                stars[3].name()
            );
        }
    }
}
