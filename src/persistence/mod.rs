//! Persistence layer: PostgreSQL repositories for venues, artists and shows.
//!
//! Every repository function takes an explicit `&mut PgConnection`, so the
//! caller decides whether it runs inside a transaction. The service layer
//! opens one transaction per write request.

pub mod artist_repo;
pub mod pool;
pub mod show_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use pool::{connect, run_migrations};
pub use show_repo::ShowRepo;
pub use venue_repo::VenueRepo;

/// Builds an `ILIKE ... ESCAPE '\'` pattern matching `term` as a literal
/// substring.
#[must_use]
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_term_is_wrapped() {
        assert_eq!(contains_pattern("art"), "%art%");
    }

    #[test]
    fn empty_term_matches_everything() {
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(contains_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
    }
}
