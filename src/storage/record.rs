//! Entity document format
//!
//! One document per set-top-box:
//!
//! ```json
//! {
//!   "stb": "stb1",
//!   "2017-04-01": {
//!     "Titanic": {"rev": "6.00", "time": "12:30", "provider": "Paramount"}
//!   }
//! }
//! ```
//!
//! Every key other than `stb` is a date. A (date, title) pair holds at most
//! one viewing; a later write to the same pair replaces it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::Event;

/// The per-(date, title) slot of an entity document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewing {
    pub rev: String,
    pub time: String,
    pub provider: String,
}

/// All viewings of one entity, grouped by date then title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDocument {
    /// Entity id
    pub stb: String,
    /// date -> title -> viewing
    #[serde(flatten)]
    pub dates: BTreeMap<String, BTreeMap<String, Viewing>>,
}

impl EntityDocument {
    /// Creates an empty document for an entity
    pub fn new(stb: impl Into<String>) -> Self {
        Self {
            stb: stb.into(),
            dates: BTreeMap::new(),
        }
    }

    /// Inserts or overwrites the (date, title) slot of `event`.
    ///
    /// Returns the viewing previously held by the slot.
    pub fn upsert(&mut self, event: &Event) -> Option<Viewing> {
        self.dates.entry(event.date.clone()).or_default().insert(
            event.title.clone(),
            Viewing {
                rev: event.rev.clone(),
                time: event.time.clone(),
                provider: event.provider.clone(),
            },
        )
    }

    /// Returns the viewing at (date, title)
    pub fn viewing(&self, date: &str, title: &str) -> Option<&Viewing> {
        self.dates.get(date).and_then(|titles| titles.get(title))
    }

    /// Flattens the document into one event per (date, title) slot,
    /// ordered by date then title.
    pub fn events(&self) -> impl Iterator<Item = Event> + '_ {
        self.dates.iter().flat_map(move |(date, titles)| {
            titles.iter().map(move |(title, viewing)| Event {
                stb: self.stb.clone(),
                date: date.clone(),
                title: title.clone(),
                provider: viewing.provider.clone(),
                rev: viewing.rev.clone(),
                time: viewing.time.clone(),
            })
        })
    }

    /// Number of (date, title) slots
    pub fn len(&self) -> usize {
        self.dates.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
