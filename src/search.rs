// Stay search - the search form's query-string contract
// The form produces `location`, `checkIn`, `checkOut`, and `guests`;
// this module builds that query string, parses it back, and runs the
// query against the catalog.

use crate::catalog::HotelRecord;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Guest counts offered by the search form
pub const GUEST_CHOICES: [u32; 6] = [1, 2, 3, 4, 5, 6];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub location: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
}

impl SearchQuery {
    pub fn new() -> Self {
        SearchQuery {
            location: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            guests: 1,
        }
    }

    /// The query string the search form appends to `/Search`
    pub fn to_query_string(&self) -> String {
        format!(
            "location={}&checkIn={}&checkOut={}&guests={}",
            urlencoding::encode(&self.location),
            urlencoding::encode(&self.check_in),
            urlencoding::encode(&self.check_out),
            self.guests
        )
    }

    /// Rebuild a query from already-decoded key/value pairs
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = SearchQuery::new();
        for (key, value) in pairs {
            match key {
                "location" => query.location = value.to_string(),
                "checkIn" => query.check_in = value.to_string(),
                "checkOut" => query.check_out = value.to_string(),
                "guests" => query.guests = value.parse().unwrap_or(1),
                _ => {}
            }
        }
        query
    }

    /// Parse a raw query string ("location=Diani%20Beach&guests=2")
    pub fn parse(query_string: &str) -> Self {
        let pairs = query_string
            .trim_start_matches('?')
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((key, value)) => (key, decode(value)),
                None => (part, Cow::Borrowed("")),
            })
            .collect::<Vec<_>>();

        Self::from_pairs(pairs.iter().map(|(k, v)| (*k, v.as_ref())))
    }

    /// Whether a hotel satisfies this query: the location term (if any)
    /// appears in its location or county, and the room sleeps the party
    pub fn matches(&self, hotel: &HotelRecord) -> bool {
        let term = self.location.trim().to_lowercase();

        let location_ok = term.is_empty()
            || hotel.location.to_lowercase().contains(&term)
            || hotel.county.to_lowercase().contains(&term);

        location_ok && hotel.max_guests() >= self.guests
    }

    /// The ordered sub-sequence of records satisfying the query
    pub fn run<'a>(&self, records: &'a [HotelRecord]) -> Vec<&'a HotelRecord> {
        records.iter().filter(|hotel| self.matches(hotel)).collect()
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(value: &str) -> Cow<'_, str> {
    urlencoding::decode(value).unwrap_or(Cow::Borrowed(value))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HotelCatalog;

    #[test]
    fn test_query_string_shape() {
        let query = SearchQuery {
            location: "Diani Beach".to_string(),
            check_in: "2026-09-01".to_string(),
            check_out: "2026-09-04".to_string(),
            guests: 2,
        };

        assert_eq!(
            query.to_query_string(),
            "location=Diani%20Beach&checkIn=2026-09-01&checkOut=2026-09-04&guests=2"
        );
    }

    #[test]
    fn test_parse_round_trips() {
        let query = SearchQuery {
            location: "Nairobi CBD".to_string(),
            check_in: "2026-09-01".to_string(),
            check_out: "2026-09-04".to_string(),
            guests: 4,
        };

        assert_eq!(SearchQuery::parse(&query.to_query_string()), query);
    }

    #[test]
    fn test_parse_tolerates_missing_and_unknown_keys() {
        let query = SearchQuery::parse("?location=Nyali&utm_source=mail");
        assert_eq!(query.location, "Nyali");
        assert_eq!(query.guests, 1);
        assert_eq!(query.check_in, "");

        let query = SearchQuery::parse("guests=banana");
        assert_eq!(query.guests, 1);
    }

    #[test]
    fn test_location_matches_location_or_county() {
        let catalog = HotelCatalog::with_defaults();

        let mut query = SearchQuery::new();
        query.location = "nairobi".to_string();

        // "Nairobi CBD" by location, Tribe Hotel via "Nairobi County"
        let ids: Vec<u32> = query.run(catalog.records()).iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 8]);
    }

    #[test]
    fn test_guest_capacity_uses_two_per_bed() {
        let catalog = HotelCatalog::with_defaults();

        let mut query = SearchQuery::new();
        query.guests = 5;

        // Only the three-bed records sleep five or more
        let ids: Vec<u32> = query.run(catalog.records()).iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![3, 9]);
    }

    #[test]
    fn test_empty_location_matches_everything() {
        let catalog = HotelCatalog::with_defaults();
        let query = SearchQuery::new();
        assert_eq!(query.run(catalog.records()).len(), catalog.len());
    }
}
