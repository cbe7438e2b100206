//! Past/upcoming show partitioning.
//!
//! A show is past when `start_time <= reference` and upcoming when
//! `start_time > reference`, so a show starting exactly at the reference
//! instant counts as past.

use chrono::{DateTime, Utc};

/// Anything with a start instant.
pub trait Scheduled {
    /// When the show starts.
    fn start_time(&self) -> DateTime<Utc>;

    /// Whether the show starts strictly after `reference`.
    fn is_upcoming(&self, reference: DateTime<Utc>) -> bool {
        self.start_time() > reference
    }
}

/// A record's shows split around one reference instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowPartition<T> {
    /// Shows at or before the reference, in load order.
    pub past: Vec<T>,
    /// Shows after the reference, in load order.
    pub upcoming: Vec<T>,
}

impl<T: Scheduled> ShowPartition<T> {
    /// Splits `shows` around `reference`, keeping relative order.
    #[must_use]
    pub fn split(shows: Vec<T>, reference: DateTime<Utc>) -> Self {
        let (upcoming, past) = shows
            .into_iter()
            .partition(|show| show.is_upcoming(reference));
        Self { past, upcoming }
    }
}

impl<T> ShowPartition<T> {
    /// Number of past shows.
    #[must_use]
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    /// Number of upcoming shows.
    #[must_use]
    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

impl<T> Default for ShowPartition<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}
