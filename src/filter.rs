// Filter Engine - facet predicates over the hotel listing
// AND across facets, OR across the selected values within a facet.
// Output preserves listing order; the engine never re-sorts.

use crate::catalog::HotelRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// PRICE RANGES
// ============================================================================

/// An enumerated nightly-price bracket
///
/// A price matches when `min <= price <= max`; both bounds are part of
/// the bracket as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Range tag used in facet selections ("price-0-10000", ...)
    pub id: String,

    /// Display label ("Under KSh 10,000", ...)
    pub label: String,

    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn new(id: &str, label: &str, min: u32, max: u32) -> Self {
        PriceRange {
            id: id.to_string(),
            label: label.to_string(),
            min,
            max,
        }
    }

    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }
}

/// The configured price brackets for the listing page
pub fn price_ranges() -> Vec<PriceRange> {
    vec![
        PriceRange::new("price-0-10000", "Under KSh 10,000", 0, 10000),
        PriceRange::new("price-10000-15000", "KSh 10,000 - 15,000", 10000, 15000),
        PriceRange::new("price-15000-20000", "KSh 15,000 - 20,000", 15000, 20000),
        PriceRange::new("price-20000-plus", "Above KSh 20,000", 20000, 100000),
    ]
}

// ============================================================================
// FACET SELECTION
// ============================================================================

/// The user's checkbox state across the three facets
///
/// An empty set for a facet means "no filter on this facet", never
/// "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    pub beds: BTreeSet<u32>,
    pub price_ranges: BTreeSet<String>,
    pub locations: BTreeSet<String>,
}

impl FacetSelection {
    pub fn new() -> Self {
        FacetSelection::default()
    }

    /// Flip a bed-count value in or out of the selection
    pub fn toggle_bed(&mut self, beds: u32) {
        if !self.beds.remove(&beds) {
            self.beds.insert(beds);
        }
    }

    /// Flip a price-range tag in or out of the selection
    pub fn toggle_price_range(&mut self, range_id: &str) {
        if !self.price_ranges.remove(range_id) {
            self.price_ranges.insert(range_id.to_string());
        }
    }

    /// Flip a location name in or out of the selection
    pub fn toggle_location(&mut self, location: &str) {
        if !self.locations.remove(location) {
            self.locations.insert(location.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.beds.is_empty() && self.price_ranges.is_empty() && self.locations.is_empty()
    }

    pub fn clear(&mut self) {
        self.beds.clear();
        self.price_ranges.clear();
        self.locations.clear();
    }
}

// ============================================================================
// FILTER ENGINE
// ============================================================================

pub struct FilterEngine {
    ranges: Vec<PriceRange>,
}

impl FilterEngine {
    /// Engine with the configured price brackets
    pub fn new() -> Self {
        FilterEngine {
            ranges: price_ranges(),
        }
    }

    /// Engine with custom price brackets
    pub fn with_ranges(ranges: Vec<PriceRange>) -> Self {
        FilterEngine { ranges }
    }

    pub fn ranges(&self) -> &[PriceRange] {
        &self.ranges
    }

    /// Check a single record against every non-empty facet
    pub fn matches(&self, hotel: &HotelRecord, selection: &FacetSelection) -> bool {
        // Filter by beds
        if !selection.beds.is_empty() && !selection.beds.contains(&hotel.beds) {
            return false;
        }

        // Filter by locations
        if !selection.locations.is_empty() && !selection.locations.contains(&hotel.location) {
            return false;
        }

        // Filter by price ranges: the price must fall in ANY selected bracket.
        // A selected tag that names no configured bracket matches nothing.
        if !selection.price_ranges.is_empty() {
            let in_any_range = self
                .ranges
                .iter()
                .filter(|range| selection.price_ranges.contains(&range.id))
                .any(|range| range.contains(hotel.price));

            if !in_any_range {
                return false;
            }
        }

        true
    }

    /// The ordered sub-sequence of records satisfying the selection
    pub fn apply<'a>(
        &self,
        records: &'a [HotelRecord],
        selection: &FacetSelection,
    ) -> Vec<&'a HotelRecord> {
        records
            .iter()
            .filter(|hotel| self.matches(hotel, selection))
            .collect()
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HotelCatalog;

    fn ids(hotels: &[&HotelRecord]) -> Vec<u32> {
        hotels.iter().map(|h| h.id).collect()
    }

    #[test]
    fn test_empty_selection_yields_full_listing() {
        let catalog = HotelCatalog::with_defaults();
        let engine = FilterEngine::new();

        let filtered = engine.apply(catalog.records(), &FacetSelection::new());
        assert_eq!(filtered.len(), catalog.len());
        assert_eq!(ids(&filtered), (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_bed_facet_two_beds() {
        let catalog = HotelCatalog::with_defaults();
        let engine = FilterEngine::new();

        let mut selection = FacetSelection::new();
        selection.toggle_bed(2);

        let filtered = engine.apply(catalog.records(), &selection);
        assert!(filtered.iter().all(|h| h.beds == 2));
        assert_eq!(ids(&filtered), vec![1, 4, 5, 7, 8, 10]);
    }

    #[test]
    fn test_bed_facet_is_or_of_values() {
        let catalog = HotelCatalog::with_defaults();
        let engine = FilterEngine::new();

        let mut selection = FacetSelection::new();
        selection.toggle_bed(1);
        selection.toggle_bed(3);

        let filtered = engine.apply(catalog.records(), &selection);
        assert_eq!(ids(&filtered), vec![2, 3, 6, 9]);
    }

    #[test]
    fn test_price_range_facet() {
        let catalog = HotelCatalog::with_defaults();
        let engine = FilterEngine::new();

        let mut selection = FacetSelection::new();
        selection.toggle_price_range("price-0-10000");

        // 9,500 / 8,000 are under the bracket cap; 10,500 is not
        let filtered = engine.apply(catalog.records(), &selection);
        assert_eq!(ids(&filtered), vec![3, 4]);
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let range = PriceRange::new("price-10000-15000", "KSh 10,000 - 15,000", 10000, 15000);
        assert!(range.contains(10000));
        assert!(range.contains(15000));
        assert!(!range.contains(9999));
        assert!(!range.contains(15001));
    }

    #[test]
    fn test_multiple_price_ranges_or_together() {
        let catalog = HotelCatalog::with_defaults();
        let engine = FilterEngine::new();

        let mut selection = FacetSelection::new();
        selection.toggle_price_range("price-0-10000");
        selection.toggle_price_range("price-20000-plus");

        let filtered = engine.apply(catalog.records(), &selection);
        assert_eq!(ids(&filtered), vec![3, 4, 9]);
    }

    #[test]
    fn test_unknown_price_tag_matches_nothing() {
        let catalog = HotelCatalog::with_defaults();
        let engine = FilterEngine::new();

        let mut selection = FacetSelection::new();
        selection.toggle_price_range("price-banana");

        assert!(engine.apply(catalog.records(), &selection).is_empty());
    }

    #[test]
    fn test_location_facet() {
        let catalog = HotelCatalog::with_defaults();
        let engine = FilterEngine::new();

        let mut selection = FacetSelection::new();
        selection.toggle_location("Gigiri");
        selection.toggle_location("Nyali");

        let filtered = engine.apply(catalog.records(), &selection);
        assert_eq!(ids(&filtered), vec![8, 10]);
    }

    #[test]
    fn test_facets_and_together() {
        let catalog = HotelCatalog::with_defaults();
        let engine = FilterEngine::new();

        // 2 beds AND 15,000-20,000: Sarova Stanley, Hemingways, Tribe
        let mut selection = FacetSelection::new();
        selection.toggle_bed(2);
        selection.toggle_price_range("price-15000-20000");

        let filtered = engine.apply(catalog.records(), &selection);
        assert_eq!(ids(&filtered), vec![1, 5, 8]);

        // Narrow further by location
        selection.toggle_location("Gigiri");
        let filtered = engine.apply(catalog.records(), &selection);
        assert_eq!(ids(&filtered), vec![8]);
    }

    #[test]
    fn test_filtered_output_is_order_preserving_subsequence() {
        let catalog = HotelCatalog::with_defaults();
        let engine = FilterEngine::new();

        let mut selection = FacetSelection::new();
        selection.toggle_bed(2);
        selection.toggle_bed(3);

        let filtered_ids = ids(&engine.apply(catalog.records(), &selection));

        // Same records, same relative order as a manual scan of the listing
        let expected: Vec<u32> = catalog
            .iter()
            .filter(|h| h.beds == 2 || h.beds == 3)
            .map(|h| h.id)
            .collect();
        assert_eq!(filtered_ids, expected);
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = FacetSelection::new();

        selection.toggle_bed(2);
        assert!(selection.beds.contains(&2));
        selection.toggle_bed(2);
        assert!(selection.beds.is_empty());

        selection.toggle_location("Nyali");
        selection.toggle_price_range("price-0-10000");
        assert!(!selection.is_empty());

        selection.clear();
        assert!(selection.is_empty());
    }
}
