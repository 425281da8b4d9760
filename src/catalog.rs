// Listing Store - the hotel catalog
// An ordered, in-memory set of hotel records, fixed at load time.
// Records are never mutated after load; the catalog only hands out
// shared references.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ============================================================================
// HOTEL RECORD
// ============================================================================

/// Amenity flags carried by every hotel record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenities {
    pub wifi: bool,
    pub breakfast: bool,
    pub room_service: bool,
}

impl Amenities {
    pub fn new(wifi: bool, breakfast: bool, room_service: bool) -> Self {
        Amenities {
            wifi,
            breakfast,
            room_service,
        }
    }
}

/// A single hotel listing
///
/// Identity: `id` (unique within the catalog, stable for the session)
/// Values: everything else, read-only after load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    pub id: u32,
    pub name: String,
    pub location: String,

    /// Administrative region ("Nairobi County", "Kwale County", ...)
    pub county: String,

    /// Star rating, 1-5
    pub stars: u8,

    pub amenities: Amenities,

    /// Nightly price in KSh, whole shillings
    pub price: u32,

    /// Primary image reference
    pub image_url: String,

    pub beds: u32,

    /// Optional gallery of image references
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    /// Optional long-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl HotelRecord {
    /// Guest capacity: two guests per bed
    pub fn max_guests(&self) -> u32 {
        self.beds * 2
    }

    /// Gallery images, falling back to the primary image when none exist
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image_url.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }
}

// ============================================================================
// CSV ROW
// ============================================================================

/// Flat row shape for CSV import/export (gallery joined with ';')
#[derive(Debug, Serialize, Deserialize)]
struct HotelCsvRow {
    #[serde(rename = "Id")]
    id: u32,

    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Location")]
    location: String,

    #[serde(rename = "County")]
    county: String,

    #[serde(rename = "Stars")]
    stars: u8,

    #[serde(rename = "Wifi")]
    wifi: bool,

    #[serde(rename = "Breakfast")]
    breakfast: bool,

    #[serde(rename = "Room_Service")]
    room_service: bool,

    #[serde(rename = "Price")]
    price: u32,

    #[serde(rename = "Beds")]
    beds: u32,

    #[serde(rename = "Image_Url")]
    image_url: String,

    #[serde(rename = "Images", default)]
    images: String,

    #[serde(rename = "Description", default)]
    description: String,
}

impl From<&HotelRecord> for HotelCsvRow {
    fn from(hotel: &HotelRecord) -> Self {
        HotelCsvRow {
            id: hotel.id,
            name: hotel.name.clone(),
            location: hotel.location.clone(),
            county: hotel.county.clone(),
            stars: hotel.stars,
            wifi: hotel.amenities.wifi,
            breakfast: hotel.amenities.breakfast,
            room_service: hotel.amenities.room_service,
            price: hotel.price,
            beds: hotel.beds,
            image_url: hotel.image_url.clone(),
            images: hotel.images.join(";"),
            description: hotel.description.clone().unwrap_or_default(),
        }
    }
}

impl From<HotelCsvRow> for HotelRecord {
    fn from(row: HotelCsvRow) -> Self {
        HotelRecord {
            id: row.id,
            name: row.name,
            location: row.location,
            county: row.county,
            stars: row.stars,
            amenities: Amenities::new(row.wifi, row.breakfast, row.room_service),
            price: row.price,
            image_url: row.image_url,
            beds: row.beds,
            images: row
                .images
                .split(';')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            description: if row.description.is_empty() {
                None
            } else {
                Some(row.description)
            },
        }
    }
}

// ============================================================================
// HOTEL CATALOG
// ============================================================================

/// Registry of all listed hotels
///
/// The listing is static for the lifetime of the process: load once,
/// read many. Ordering is the authoring order and is preserved by every
/// accessor.
#[derive(Debug, Clone)]
pub struct HotelCatalog {
    records: Vec<HotelRecord>,
}

impl HotelCatalog {
    /// Build a catalog from records, rejecting duplicate identifiers
    pub fn new(records: Vec<HotelRecord>) -> Result<Self> {
        let catalog = HotelCatalog { records };
        catalog.verify()?;
        Ok(catalog)
    }

    /// Catalog with the production listing pre-loaded
    pub fn with_defaults() -> Self {
        HotelCatalog {
            records: default_records(),
        }
    }

    /// Look up a hotel by identifier
    pub fn get(&self, id: u32) -> Option<&HotelRecord> {
        self.records.iter().find(|hotel| hotel.id == id)
    }

    pub fn records(&self) -> &[HotelRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &HotelRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct location names in order of first appearance
    pub fn unique_locations(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut locations = Vec::new();
        for hotel in &self.records {
            if seen.insert(hotel.location.as_str()) {
                locations.push(hotel.location.clone());
            }
        }
        locations
    }

    /// Check the identifier-uniqueness invariant
    pub fn verify(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for hotel in &self.records {
            if !seen.insert(hotel.id) {
                bail!("Duplicate hotel identifier in catalog: {}", hotel.id);
            }
        }
        Ok(())
    }

    /// Load a catalog from a CSV file
    pub fn from_csv(csv_path: &Path) -> Result<Self> {
        let mut rdr = csv::Reader::from_path(csv_path).context("Failed to open catalog CSV")?;

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let row: HotelCsvRow = result.context("Failed to deserialize hotel row")?;
            records.push(HotelRecord::from(row));
        }

        HotelCatalog::new(records)
    }

    /// Write the catalog to a CSV file
    pub fn export_csv(&self, csv_path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(csv_path).context("Failed to create catalog CSV")?;

        for hotel in &self.records {
            wtr.serialize(HotelCsvRow::from(hotel))
                .with_context(|| format!("Failed to serialize hotel {}", hotel.id))?;
        }

        wtr.flush().context("Failed to flush catalog CSV")?;
        Ok(())
    }
}

// ============================================================================
// DEFAULT LISTING
// ============================================================================

fn record(
    id: u32,
    name: &str,
    location: &str,
    county: &str,
    stars: u8,
    amenities: Amenities,
    price: u32,
    image_url: &str,
    beds: u32,
) -> HotelRecord {
    HotelRecord {
        id,
        name: name.to_string(),
        location: location.to_string(),
        county: county.to_string(),
        stars,
        amenities,
        price,
        image_url: image_url.to_string(),
        beds,
        images: Vec::new(),
        description: None,
    }
}

fn default_records() -> Vec<HotelRecord> {
    // 1. Sarova Stanley
    let mut sarova = record(
        1,
        "Sarova Stanley",
        "Nairobi CBD",
        "Nairobi County",
        5,
        Amenities::new(true, true, true),
        15000,
        "/bed.jpg",
        2,
    );
    sarova.description = Some(
        "Experience the elegance and timeless charm of Sarova Stanley, located in \
         the heart of Nairobi CBD. Our luxury rooms feature classic design with \
         modern amenities, offering a tranquil retreat from the bustling city. \
         Enjoy our world-class dining options, historic bar, and attentive service \
         that has made us a landmark destination since 1902."
            .to_string(),
    );
    sarova.images = vec![
        "/bed.jpg".to_string(),
        "/room1.jpg".to_string(),
        "/room2.jpg".to_string(),
        "/dining.jpg".to_string(),
    ];

    // 2. Diani Reef Beach Resort
    let mut diani = record(
        2,
        "Diani Reef Beach Resort",
        "Diani Beach",
        "Kwale County",
        4,
        Amenities::new(true, true, false),
        12000,
        "/bed1.jpg",
        1,
    );
    diani.description = Some(
        "Nestled along the pristine white sands of Diani Beach, our resort offers \
         breathtaking ocean views and direct beach access. Spacious rooms feature \
         private balconies, perfect for enjoying the sea breeze. Relax by our \
         infinity pool, indulge in spa treatments, or explore marine life through \
         our water sports center."
            .to_string(),
    );
    diani.images = vec![
        "/bed1.jpg".to_string(),
        "/beach1.jpg".to_string(),
        "/pool1.jpg".to_string(),
        "/spa1.jpg".to_string(),
    ];

    vec![
        sarova,
        diani,
        // 3. Lake Naivasha Sopa Resort
        record(
            3,
            "Lake Naivasha Sopa Resort",
            "Lake Naivasha",
            "Nakuru County",
            4,
            Amenities::new(true, false, true),
            9500,
            "/bed2.jpg",
            3,
        ),
        // 4. Serena Mountain Lodge
        record(
            4,
            "Serena Mountain Lodge",
            "Mount Kenya",
            "Nyeri County",
            3,
            Amenities::new(true, false, false),
            8000,
            "/bed3.jpg",
            2,
        ),
        // 5. Hemingways Watamu
        record(
            5,
            "Hemingways Watamu",
            "Watamu Beach",
            "Kilifi County",
            5,
            Amenities::new(true, true, true),
            18000,
            "/bed2.jpg",
            2,
        ),
        // 6. Great Rift Valley Lodge
        record(
            6,
            "Great Rift Valley Lodge",
            "Naivasha",
            "Nakuru County",
            4,
            Amenities::new(true, true, false),
            11000,
            "/bed3.jpg",
            1,
        ),
        // 7. Amboseli Serena Safari Lodge
        record(
            7,
            "Amboseli Serena Safari Lodge",
            "Amboseli National Park",
            "Kajiado County",
            4,
            Amenities::new(true, true, true),
            14500,
            "/bed.jpg",
            2,
        ),
        // 8. Tribe Hotel
        record(
            8,
            "Tribe Hotel",
            "Gigiri",
            "Nairobi County",
            5,
            Amenities::new(true, true, true),
            16000,
            "/bed1.jpg",
            2,
        ),
        // 9. Mara Serena Safari Lodge
        record(
            9,
            "Mara Serena Safari Lodge",
            "Maasai Mara",
            "Narok County",
            4,
            Amenities::new(true, true, true),
            25000,
            "/bed2.jpg",
            3,
        ),
        // 10. Voyager Beach Resort
        record(
            10,
            "Voyager Beach Resort",
            "Nyali",
            "Mombasa County",
            4,
            Amenities::new(true, true, true),
            10500,
            "/bed3.jpg",
            2,
        ),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listing_has_ten_hotels() {
        let catalog = HotelCatalog::with_defaults();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.verify().is_ok());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = HotelCatalog::with_defaults();

        let hotel = catalog.get(8).unwrap();
        assert_eq!(hotel.name, "Tribe Hotel");
        assert_eq!(hotel.location, "Gigiri");
        assert_eq!(hotel.stars, 5);
        assert_eq!(hotel.price, 16000);
    }

    #[test]
    fn test_get_unknown_id_returns_none() {
        let catalog = HotelCatalog::with_defaults();
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn test_unique_locations_keep_first_appearance_order() {
        let catalog = HotelCatalog::with_defaults();
        let locations = catalog.unique_locations();

        // Every hotel has a distinct location in the default listing
        assert_eq!(locations.len(), 10);
        assert_eq!(locations[0], "Nairobi CBD");
        assert_eq!(locations[9], "Nyali");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut records = default_records();
        records[3].id = 1;

        assert!(HotelCatalog::new(records).is_err());
    }

    #[test]
    fn test_max_guests_is_twice_beds() {
        let catalog = HotelCatalog::with_defaults();
        let hotel = catalog.get(9).unwrap();
        assert_eq!(hotel.beds, 3);
        assert_eq!(hotel.max_guests(), 6);
    }

    #[test]
    fn test_gallery_falls_back_to_primary_image() {
        let catalog = HotelCatalog::with_defaults();

        // Record 1 carries a gallery, record 3 does not
        assert_eq!(catalog.get(1).unwrap().gallery().len(), 4);
        assert_eq!(catalog.get(3).unwrap().gallery(), vec!["/bed2.jpg"]);
    }

    #[test]
    fn test_csv_round_trip() {
        let catalog = HotelCatalog::with_defaults();
        let path = std::env::temp_dir().join("safari_stays_catalog_test.csv");

        catalog.export_csv(&path).unwrap();
        let loaded = HotelCatalog::from_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), catalog.len());
        assert_eq!(loaded.get(1).unwrap(), catalog.get(1).unwrap());
        assert_eq!(loaded.get(10).unwrap().description, None);
    }
}
