use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use ganzhi_astro::{
    equation_of_time, parse_timestamp, solar_ecliptic_longitude, solar_time_offset_minutes,
    true_solar_time,
};
use ganzhi_cycle::CyclicCoordinate;
use ganzhi_engine::{
    Difference, EngineConfig, TemporalCoordinateEngine, add_operand, parse_operand,
    subtract_operand,
};
use ganzhi_search::{
    SolarTerm, SolarTermConfig, SolarTermEvent, next_solar_term, prev_solar_term,
    search_solar_terms,
};

#[derive(Parser)]
#[command(name = "ganzhi", about = "Sexagenary (ganzhi) Four Pillars calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four Pillars (year, month, day, hour) for a timestamp
    Pillars {
        /// Timestamp (RFC 3339, YYYY-MM-DDThh:mm:ss read as UTC, or YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Observer longitude in degrees, east positive
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        lon: f64,
        /// Use the civil UTC clock for Day and Hour instead of apparent solar time
        #[arg(long)]
        civil: bool,
        /// Print the full JSON record
        #[arg(long)]
        json: bool,
    },
    /// Equation of time for a day of the year
    Eot {
        /// Day of year (1-366)
        #[arg(long)]
        day: u32,
    },
    /// Apparent solar ecliptic longitude
    SolarLon {
        /// Timestamp
        #[arg(long)]
        date: String,
    },
    /// Apparent (true) solar time at a longitude
    TrueSolar {
        /// Timestamp
        #[arg(long)]
        date: String,
        /// Observer longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Next solar-term boundary after a timestamp
    NextTerm {
        /// Timestamp
        #[arg(long)]
        date: String,
    },
    /// Latest solar-term boundary at or before a timestamp
    PrevTerm {
        /// Timestamp
        #[arg(long)]
        date: String,
    },
    /// All solar-term boundaries in [start, end)
    Terms {
        /// Range start
        #[arg(long)]
        start: String,
        /// Range end (exclusive)
        #[arg(long)]
        end: String,
    },
    /// Details of a sexagenary coordinate
    Cycle {
        /// Any integer, reduced modulo 60
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Shift a coordinate by an integer operand
    Add {
        #[arg(allow_negative_numbers = true)]
        index: i64,
        /// Integer offset (JSON)
        #[arg(allow_hyphen_values = true)]
        operand: String,
    },
    /// Subtract an integer offset or a coordinate record from a coordinate
    Sub {
        #[arg(allow_negative_numbers = true)]
        index: i64,
        /// Integer offset or `{"index": n}` record (JSON)
        #[arg(allow_hyphen_values = true)]
        operand: String,
    },
    /// Distance and branch relations between two coordinates
    Relate {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
}

fn require_timestamp(s: &str) -> DateTime<Utc> {
    parse_timestamp(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn print_event(label: &str, ev: &SolarTermEvent) {
    println!("{label}: {} ({})", ev.term.name(), ev.term.glyphs());
    println!("  Time: {}", ev.instant);
    println!("  Solar lon: {:.4} deg", ev.longitude_deg);
}

fn describe(label: &str, c: CyclicCoordinate) {
    println!(
        "{label:<6} {:<10} {}  #{:<2} {} {}",
        c.name(),
        c.glyphs(),
        c.index(),
        c.element().name(),
        c.polarity().name()
    );
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pillars {
            date,
            lon,
            civil,
            json,
        } => {
            let config = EngineConfig {
                precision_mode: !civil,
                ..EngineConfig::standard()
            };
            let engine = TemporalCoordinateEngine::new(config).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let set = match engine.get_coordinates_str(&date, lon) {
                Ok(set) => set,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };
            if json {
                match set.to_json() {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
                return;
            }
            describe("Year:", set.year);
            describe("Month:", set.month);
            describe("Day:", set.day);
            describe("Hour:", set.hour);
            let term = &set.metadata.solar_term;
            println!(
                "Solar term: {} ({}) since {}",
                term.name, term.glyphs, term.started_at
            );
            println!(
                "Clock: {} ({})",
                set.metadata.solar_time,
                if set.metadata.precision_mode {
                    "apparent solar"
                } else {
                    "civil UTC"
                }
            );
        }

        Commands::Eot { day } => match equation_of_time(day) {
            Ok(minutes) => println!("Equation of time: {minutes:.3} min"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },

        Commands::SolarLon { date } => {
            let utc = require_timestamp(&date);
            let lon = solar_ecliptic_longitude(&utc);
            let term = SolarTerm::from_longitude(lon);
            println!("Solar lon: {lon:.6} deg");
            println!("Solar term: {} ({})", term.name(), term.glyphs());
        }

        Commands::TrueSolar { date, lon } => {
            let utc = require_timestamp(&date);
            let result = true_solar_time(&utc, lon)
                .and_then(|t| Ok((t, solar_time_offset_minutes(&utc, lon)?)));
            match result {
                Ok((solar, offset)) => {
                    println!("True solar time: {solar}");
                    println!("  Offset from UTC: {offset:+.3} min");
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::NextTerm { date } => {
            let utc = require_timestamp(&date);
            match next_solar_term(&utc, &SolarTermConfig::default()) {
                Ok(ev) => print_event("Next solar term", &ev),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::PrevTerm { date } => {
            let utc = require_timestamp(&date);
            match prev_solar_term(&utc, &SolarTermConfig::default()) {
                Ok(ev) => print_event("Previous solar term", &ev),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Terms { start, end } => {
            let start = require_timestamp(&start);
            let end = require_timestamp(&end);
            match search_solar_terms(&start, &end, &SolarTermConfig::default()) {
                Ok(events) => {
                    println!("{} solar terms", events.len());
                    for ev in &events {
                        println!(
                            "  {:<12} {}  {}  {:.4} deg",
                            ev.term.name(),
                            ev.term.glyphs(),
                            ev.instant,
                            ev.longitude_deg
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Cycle { index } => {
            let c = CyclicCoordinate::new(index);
            let stem = c.stem();
            let branch = c.branch();
            println!("{} ({}) index {}", c.name(), c.glyphs(), c.index());
            println!(
                "  Stem: {} ({}) {} {}",
                stem.name(),
                stem.glyph(),
                stem.element().name(),
                stem.polarity().name()
            );
            println!(
                "  Branch: {} ({}) {} {}",
                branch.name(),
                branch.glyph(),
                branch.animal(),
                branch.element().name()
            );
            let element = c.element();
            println!(
                "  Element: {} ({}) generates {}, overcomes {}",
                element.name(),
                element.glyph(),
                element.generates().name(),
                element.overcomes().name()
            );
            println!("  Clash: {}", branch.clash().name());
            println!("  Combination: {}", branch.combination().name());
        }

        Commands::Add { index, operand } => {
            let base = CyclicCoordinate::new(index);
            match add_operand(base, &parse_operand(&operand)) {
                Ok(c) => println!("{c} (index {})", c.index()),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Sub { index, operand } => {
            let base = CyclicCoordinate::new(index);
            match subtract_operand(base, &parse_operand(&operand)) {
                Ok(Difference::Coordinate(c)) => println!("{c} (index {})", c.index()),
                Ok(Difference::Distance(d)) => println!("Distance: {d}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Relate { a, b } => {
            let a = CyclicCoordinate::new(a);
            let b = CyclicCoordinate::new(b);
            println!("{a} -> {b}");
            println!("  Distance: {}", a.distance_from(b));
            println!("  Clash: {}", if a.is_clashing(b) { "yes" } else { "no" });
            println!(
                "  Combination: {}",
                if a.is_combining(b) { "yes" } else { "no" }
            );
        }
    }
}
