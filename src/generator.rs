//! Synthetic viewing data
//!
//! Produces ingestion lines for random boxes, titles and providers with a
//! viewing time somewhere in the 20 days from 2017-04-01 12:00.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::schema::Event;

pub const TITLES: [&str; 50] = [
    "Life",
    "Kong: Skull Island",
    "Harry Potter and the Goblet of Fire",
    "The Maze Runner",
    "Now You See Me",
    "Shutter Island",
    "Spectre",
    "Logan",
    "The Mother of Tears",
    "Alien",
    "The Hunger Games: Catching Fire",
    "Avatar",
    "Pirates of the Caribbean: Dead Men Tell No Tales",
    "Furious 7",
    "Chappie",
    "Insurgent",
    "The Prestige",
    "John Wick: Chapter 2",
    "Ted 2",
    "Fantastic Beasts and Where to Find Them",
    "Memento",
    "Terminator 2: Judgment Day",
    "Teen Titans: The Judas Contract",
    "Your Name.",
    "Harry Potter and the Deathly Hallows: Part 2",
    "The Magnificent Seven",
    "Ice Age",
    "Minions",
    "The Dark Knight Rises",
    "Harry Potter and the Philosopher's Stone",
    "Nocturnal Animals",
    "Fifty Shades Darker",
    "Spirited Away",
    "Captain America: Civil War",
    "Get Out",
    "Big Hero 6",
    "Django Unchained",
    "Aliens",
    "Tomorrow Everything Starts",
    "The Invisible Guest",
    "Se7en",
    "Aftermath",
    "Smurfs: The Lost Village",
    "The Hateful Eight",
    "Titanic",
    "Dogtooth",
    "Silence",
    "The Hobbit: An Unexpected Journey",
    "Lion",
    "The Revenant",
];

pub const PROVIDERS: [&str; 10] = [
    "Warner bros",
    "Buena Vista",
    "Paramount",
    "20th Century",
    "Sony Pictures",
    "Miramax",
    "DreamWorks",
    "New Line",
    "MGM",
    "Lionsgate",
];

const WINDOW_SECONDS: i64 = 20 * 24 * 60 * 60;

/// How much data to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of lines
    pub entries: usize,
    /// Box ids run from `stb1` to `stb{boxes}`
    pub boxes: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            entries: 100,
            boxes: 10,
        }
    }
}

fn window_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 4, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap_or_default()
}

/// Generates one random event
pub fn random_event<R: Rng>(rng: &mut R, boxes: u32) -> Event {
    let stb = format!("stb{}", rng.gen_range(1..=boxes.max(1)));
    let title = TITLES.choose(rng).copied().unwrap_or(TITLES[0]);
    let provider = PROVIDERS.choose(rng).copied().unwrap_or(PROVIDERS[0]);
    let watched = window_start() + Duration::seconds(rng.gen_range(0..WINDOW_SECONDS));
    let revenue: u32 = rng.gen_range(1..=10);

    Event::new(
        stb,
        watched.format("%Y-%m-%d").to_string(),
        title,
        provider,
        format!("{:.2}", f64::from(revenue)),
        watched.format("%H:%M").to_string(),
    )
}

/// Writes `config.entries` random lines to `writer`
pub fn generate<R: Rng, W: Write>(
    rng: &mut R,
    config: GeneratorConfig,
    writer: &mut W,
) -> io::Result<usize> {
    for _ in 0..config.entries {
        writeln!(writer, "{}", random_event(rng, config.boxes).to_line())?;
    }
    writer.flush()?;
    Ok(config.entries)
}

/// Appends random lines to the file at `path`, creating it if needed
pub fn generate_file(path: &Path, config: GeneratorConfig) -> io::Result<usize> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = io::BufWriter::new(file);
    generate(&mut rand::thread_rng(), config, &mut writer)
}
