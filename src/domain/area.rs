//! Venue listing grouped by (city, state).

use std::collections::BTreeMap;

use super::venue::VenueSummary;

/// Venues sharing one exact (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    /// City shared by every venue in the group.
    pub city: String,
    /// State shared by every venue in the group.
    pub state: String,
    /// Venues located there, in input order.
    pub venues: Vec<VenueSummary>,
}

/// Groups venues by exact (city, state) equality.
///
/// Groups come out ordered by state, then city.
#[must_use]
pub fn group_by_area(venues: Vec<VenueSummary>) -> Vec<Area> {
    let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for venue in venues {
        areas
            .entry((venue.state.clone(), venue.city.clone()))
            .or_default()
            .push(venue);
    }
    areas
        .into_iter()
        .map(|((state, city), venues)| Area {
            city,
            state,
            venues,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VenueId;

    fn venue(id: i64, name: &str, city: &str, state: &str) -> VenueSummary {
        VenueSummary {
            id: VenueId::new(id),
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            num_upcoming_shows: 0,
        }
    }

    fn names(area: &Area) -> Vec<&str> {
        area.venues.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn groups_by_exact_city_and_state() {
        let areas = group_by_area(vec![
            venue(1, "A", "X", "S"),
            venue(2, "C", "Y", "S"),
            venue(3, "B", "X", "S"),
        ]);

        assert_eq!(areas.len(), 2);
        let [first, second] = areas.as_slice() else {
            unreachable!("two groups asserted above");
        };
        assert_eq!((first.city.as_str(), first.state.as_str()), ("X", "S"));
        assert_eq!(names(first), vec!["A", "B"]);
        assert_eq!((second.city.as_str(), second.state.as_str()), ("Y", "S"));
        assert_eq!(names(second), vec!["C"]);
    }

    #[test]
    fn grouping_is_case_sensitive() {
        let areas = group_by_area(vec![
            venue(1, "A", "Austin", "TX"),
            venue(2, "B", "austin", "TX"),
        ]);
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn same_city_in_different_states_stays_apart() {
        let areas = group_by_area(vec![
            venue(1, "A", "Portland", "OR"),
            venue(2, "B", "Portland", "ME"),
        ]);
        let states: Vec<&str> = areas.iter().map(|a| a.state.as_str()).collect();
        assert_eq!(states, vec!["ME", "OR"]);
    }

    #[test]
    fn no_venues_no_groups() {
        assert!(group_by_area(Vec::new()).is_empty());
    }
}
