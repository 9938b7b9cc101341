use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use bazi_base::{Branch, DayBoundary, FourPillars, SexagenaryTerm, day_term, month_branch_slot};
use bazi_config::{BaziConfig, OutputFormat};
use bazi_rs::{ChartResult, FixedLocations, Location, LocationResolver, PillarRole, compute};
use bazi_time::{UtcOffset, datetime_to_jd, solar_corrected_time, sun_longitude_at};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "bazi", about = "Four-pillar (BaZi) chart CLI")]
struct Cli {
    /// Config file (default: $BAZI_CONFIG, then <config dir>/bazi/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart from a birth date, standard time and location
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
        /// Standard (zone) time of birth (HH:MM or HH:MM:SS)
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<f64>,
        /// UTC offset (8, -5, 5.5, +05:30, UTC+8)
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<UtcOffset>,
        /// Named place from the config `[places]` table
        #[arg(long, conflicts_with_all = ["longitude", "utc_offset"])]
        place: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Raw four pillars of an already solar-corrected timestamp
    Pillars {
        /// Local timestamp (YYYY-MM-DD HH:MM[:SS])
        #[arg(long, value_parser = parse_datetime)]
        datetime: NaiveDateTime,
        /// UTC offset; truncated to whole hours
        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        utc_offset: UtcOffset,
    },
    /// Longitude correction, equation of time and solar-corrected time
    SolarTime {
        /// Date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
        /// Standard time (HH:MM or HH:MM:SS)
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
        /// UTC offset (8, -5, 5.5, +05:30)
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: UtcOffset,
    },
    /// Julian Day and solar ecliptic longitude of a UT instant
    SunLongitude {
        /// UT timestamp (YYYY-MM-DD HH:MM[:SS])
        #[arg(long, value_parser = parse_datetime)]
        datetime: NaiveDateTime,
    },
    /// Look up a term of the 60-term cycle
    Cycle {
        /// Cycle index (wraps modulo 60)
        #[arg(long, allow_hyphen_values = true, required_unless_present = "date")]
        index: Option<i64>,
        /// Day whose term to show (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, conflicts_with = "index")]
        date: Option<NaiveDate>,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| format!("{s:?}: {e}"))
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| format!("{s:?}: {e}"))
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| format!("{s:?}: expected YYYY-MM-DD HH:MM[:SS]"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = BaziConfig::load(cli.config.as_deref())
        .context("loading configuration")?
        .unwrap_or_default();

    match cli.command {
        Commands::Chart {
            date,
            time,
            longitude,
            utc_offset,
            place,
            json,
        } => {
            let location = chart_location(&config, place.as_deref(), longitude, utc_offset)?;
            tracing::debug!(?location, "chart location");
            let chart = compute(date, time, location.longitude_deg, location.utc_offset_hours)
                .with_context(|| format!("computing chart for {date} {time}"))?;
            if json || config.output.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Pillars {
            datetime,
            utc_offset,
        } => {
            let fp = FourPillars::derive(datetime, utc_offset.whole_hours(), DayBoundary::Midnight);
            for role in PillarRole::ALL {
                let p = fp.get(role);
                let hidden: String = p.hidden_stems().iter().map(|s| s.character()).collect();
                println!("{:<6} {}  (hidden: {})", role.name(), p, hidden);
            }
        }

        Commands::SolarTime {
            date,
            time,
            longitude,
            utc_offset,
        } => {
            let st = solar_corrected_time(date, time, longitude, utc_offset.hours())?;
            println!("Standard time:        {}", st.standard);
            println!("Longitude correction: {:+.4} min", st.longitude_correction_min);
            println!("Equation of time:     {:+.4} min", st.equation_of_time_min);
            println!("Solar time:           {}", st.corrected);
        }

        Commands::SunLongitude { datetime } => {
            let jd = datetime_to_jd(datetime);
            let lon = sun_longitude_at(datetime);
            let slot = month_branch_slot(lon);
            println!("JD:        {jd:.6}");
            println!("Longitude: {lon:.6} deg");
            println!("Month:     slot {slot} ({})", Branch::from_index(slot + 2));
        }

        Commands::Cycle { index, date } => {
            let term = match (index, date) {
                (_, Some(d)) => day_term(d),
                (Some(i), None) => SexagenaryTerm::from_offset(i),
                (None, None) => bail!("either --index or --date is required"),
            };
            println!(
                "{:>2}  {}  {} {} / {} {}",
                term.index(),
                term,
                term.stem().pinyin(),
                term.branch().pinyin(),
                term.stem().element(),
                term.branch().animal()
            );
        }
    }
    Ok(())
}

/// Location from `--place`, explicit coordinates, or the config `[location]` table.
fn chart_location(
    config: &BaziConfig,
    place: Option<&str>,
    longitude: Option<f64>,
    utc_offset: Option<UtcOffset>,
) -> Result<Location> {
    if let Some(name) = place {
        return resolve_place(config, name);
    }
    let Some(longitude) = longitude.or(config.longitude()) else {
        bail!("no longitude: pass --longitude, --place, or set [location] in config");
    };
    let offset = match utc_offset {
        Some(o) => o,
        None => match config.utc_offset()? {
            Some(o) => o,
            None => bail!("no UTC offset: pass --utc-offset, --place, or set [location] in config"),
        },
    };
    Ok(Location::new(longitude, offset.hours()))
}

fn resolve_place(config: &BaziConfig, name: &str) -> Result<Location> {
    let mut places = FixedLocations::new();
    for (key, place) in &config.places {
        let offset = place
            .utc_offset
            .to_offset()
            .with_context(|| format!("place {key:?}"))?;
        places.insert(key, Location::new(place.longitude, offset.hours()));
    }
    places
        .resolve(name)
        .ok_or_else(|| bazi_rs::ChartError::UnresolvedPlace(name.to_string()))
        .context("add it under [places] in the config file")
}

fn print_chart(c: &ChartResult) {
    println!("Standard time:        {}", c.standard_timestamp);
    println!("Solar time:           {}", c.solar_corrected_timestamp);
    println!("Longitude correction: {:+.2} min", c.longitude_correction_minutes);
    println!("Equation of time:     {:+.2} min", c.equation_of_time_minutes);
    println!();

    let fp = c.pillars();
    // CJK glyphs are two columns wide
    let row = |cells: [char; 4]| cells.iter().map(|c| format!("{c}    ")).collect::<String>();
    println!("        Year  Month Day   Hour");
    println!("Stem    {}", row(fp.stems().map(|s| s.character())));
    println!("Branch  {}", row(fp.branches().map(|b| b.character())));
    for (role, hidden) in PillarRole::ALL.iter().zip(&c.hidden_stems_per_pillar) {
        let h: String = hidden.iter().map(|s| s.character()).collect();
        println!("  {:<6}hidden {}", role.name(), h);
    }
    println!();

    println!("Element  Vis  Hid  Ssn  DM  Total  Stars");
    for (e, b) in &c.element_breakdown {
        let rating = &c.star_meter[e];
        println!(
            "{:<7} {:>4} {:>4.1} {:>+4} {:>3} {:>6.1}  {}  {}",
            e.name(),
            b.visible,
            b.hidden,
            b.season,
            b.day_master,
            b.total,
            rating.stars,
            rating.label
        );
        if !b.visible_trace.is_empty() || !b.hidden_trace.is_empty() {
            println!("        visible: {}  hidden: {}", b.visible_trace, b.hidden_trace);
        }
    }
    println!();

    let dm = &c.day_master;
    println!(
        "Day Master: {} ({} {})  {}",
        dm.stem,
        dm.polarity.name(),
        dm.element,
        dm.title
    );
    println!("  {}", dm.traits);
    println!("  {}", dm.takeaway);
    println!(
        "Strength:   {} (score {:+})",
        c.strength_verdict, c.strength_score
    );
}
