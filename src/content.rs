// Site content - static marketing data
// Hero slides, featured hotels, exclusive offers, and testimonials are
// fixed at construction, the same way the catalog is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed hero rotation interval; timers live at the presentation edge
pub const HERO_ROTATION_INTERVAL: Duration = Duration::from_secs(7);

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

// ============================================================================
// HERO CAROUSEL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub src: String,
    pub title: String,
    pub description: String,
}

impl HeroSlide {
    fn new(src: &str, title: &str, description: &str) -> Self {
        HeroSlide {
            src: src.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Rotating hero imagery: advances one slide per tick, wrapping around
#[derive(Debug, Clone, Serialize)]
pub struct HeroCarousel {
    slides: Vec<HeroSlide>,
    active: usize,
}

impl HeroCarousel {
    pub fn new(slides: Vec<HeroSlide>) -> Self {
        HeroCarousel { slides, active: 0 }
    }

    pub fn slides(&self) -> &[HeroSlide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn current(&self) -> Option<&HeroSlide> {
        self.slides.get(self.active)
    }

    /// One rotation tick
    pub fn advance(&mut self) {
        if !self.slides.is_empty() {
            self.active = (self.active + 1) % self.slides.len();
        }
    }
}

// ============================================================================
// FEATURED HOTELS
// ============================================================================

/// Marketing card for the home page, distinct from the listing records:
/// ratings here are fractional reviewer scores, not star classes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedHotel {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub rating: f32,
    pub location: String,
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
}

impl FeaturedHotel {
    /// Whole stars rendered filled
    pub fn full_stars(&self) -> u32 {
        self.rating.floor() as u32
    }

    /// Whether a half star follows the filled ones
    pub fn has_half_star(&self) -> bool {
        self.rating.fract() >= 0.5
    }

    /// External map link: coordinates when present, encoded name otherwise
    pub fn map_url(&self) -> String {
        match &self.coordinates {
            Some(coordinates) => format!("{}{}", MAPS_SEARCH_URL, coordinates),
            None => format!("{}{}", MAPS_SEARCH_URL, urlencoding::encode(&self.location)),
        }
    }
}

// ============================================================================
// OFFERS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: u32,
    pub image_url: String,

    /// Discount label ("30%")
    pub discount: String,

    pub title: String,
    pub description: String,
    pub expiry_date: NaiveDate,
    pub link: String,
}

impl Offer {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expiry_date
    }

    /// Display label ("Expires August 31, 2025")
    pub fn expiry_label(&self) -> String {
        format!("Expires {}", self.expiry_date.format("%B %-d, %Y"))
    }
}

// ============================================================================
// TESTIMONIALS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub rating: u8,
    pub content: String,

    /// The stay being reviewed ("Luxury Suite, Maasai Mara")
    pub stay: String,

    pub image: String,
}

// ============================================================================
// SITE CONTENT
// ============================================================================

/// All static marketing sections, bundled for the home page
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub hero: Vec<HeroSlide>,
    pub featured: Vec<FeaturedHotel>,
    pub offers: Vec<Offer>,
    pub testimonials: Vec<Testimonial>,
}

impl SiteContent {
    /// The production marketing content
    pub fn with_defaults() -> Self {
        SiteContent {
            hero: default_hero_slides(),
            featured: default_featured_hotels(),
            offers: default_offers(),
            testimonials: default_testimonials(),
        }
    }

    pub fn hero_carousel(&self) -> HeroCarousel {
        HeroCarousel::new(self.hero.clone())
    }
}

fn default_hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide::new(
            "/logo1.jpg",
            "Discover Your Perfect Getaway Destination",
            "Unparalleled luxury and comfort await at the world's most exclusive \
             hotels and resorts. Start your journey today.",
        ),
        HeroSlide::new(
            "/logo2.jpg",
            "Tropical Island Retreat",
            "Crystal-clear waters and beachfront villas await you.",
        ),
        HeroSlide::new(
            "/logo3.jpg",
            "Urban Elegance Downtown",
            "Stay in style with premium comfort in the city center.",
        ),
        HeroSlide::new(
            "/logo4.jpg",
            "Luxury Escape in the Alps",
            "Indulge in serene mountain views and cozy chalet vibes.",
        ),
        HeroSlide::new(
            "/logo5.jpg",
            "Tropical Island Retreat",
            "Crystal-clear waters and beachfront villas await you.",
        ),
        HeroSlide::new(
            "/logo6.jpg",
            "Urban Elegance Downtown",
            "Stay in style with premium comfort in the city center.",
        ),
        HeroSlide::new(
            "/logo7.jpg",
            "Luxury Escape in the Alps",
            "Indulge in serene mountain views and cozy chalet vibes.",
        ),
        HeroSlide::new(
            "/logo8.jpg",
            "Tropical Island Retreat",
            "Crystal-clear waters and beachfront villas await you.",
        ),
        HeroSlide::new(
            "/logo3.jpg",
            "Urban Elegance Downtown",
            "Stay in style with premium comfort in the city center.",
        ),
    ]
}

fn default_featured_hotels() -> Vec<FeaturedHotel> {
    vec![
        FeaturedHotel {
            id: 1,
            name: "Serena Luxury Resort".to_string(),
            image: "/bed.jpg".to_string(),
            rating: 4.8,
            location: "Diani Beach, Kenya".to_string(),
            price: 25000,
            coordinates: Some("-4.3150,39.5753".to_string()),
        },
        FeaturedHotel {
            id: 2,
            name: "Mount Safari Lodge".to_string(),
            image: "/bed1.jpg".to_string(),
            rating: 4.5,
            location: "Mount Kenya".to_string(),
            price: 18000,
            coordinates: Some("0.1519,37.3082".to_string()),
        },
        FeaturedHotel {
            id: 3,
            name: "Maasai Mara Camp".to_string(),
            image: "/bed2.jpg".to_string(),
            rating: 4.7,
            location: "Maasai Mara".to_string(),
            price: 32000,
            coordinates: Some("-1.5815,35.2518".to_string()),
        },
        FeaturedHotel {
            id: 4,
            name: "Lamu Heritage House".to_string(),
            image: "/bed3.jpg".to_string(),
            rating: 4.9,
            location: "Lamu Island".to_string(),
            price: 28000,
            coordinates: Some("-2.2718,40.9020".to_string()),
        },
    ]
}

fn default_offers() -> Vec<Offer> {
    vec![
        Offer {
            id: 1,
            image_url: "/offer1.jpg".to_string(),
            discount: "30%".to_string(),
            title: "Summer Escape Package".to_string(),
            description: "Enjoy a complimentary night and daily breakfast".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap_or_default(),
            link: "/offers/summer-escape".to_string(),
        },
        Offer {
            id: 2,
            image_url: "/offer2.jpg".to_string(),
            discount: "25%".to_string(),
            title: "Weekend Getaway".to_string(),
            description: "Special rates for weekend stays with late checkout".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap_or_default(),
            link: "/offers/weekend-getaway".to_string(),
        },
        Offer {
            id: 3,
            image_url: "/offer3.jpg".to_string(),
            discount: "20%".to_string(),
            title: "Family Bundle".to_string(),
            description: "Kids stay free with discounted activities".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap_or_default(),
            link: "/offers/family-bundle".to_string(),
        },
    ]
}

fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: "Sarah Johnson".to_string(),
            role: "Frequent Traveler".to_string(),
            rating: 5,
            content: "The hospitality at QuickStay is unmatched. From the warm welcome \
                      to the personalized service, every stay feels like coming home."
                .to_string(),
            stay: "Luxury Suite, Maasai Mara".to_string(),
            image: "/testimonials.jpg".to_string(),
        },
        Testimonial {
            id: 2,
            name: "Michael Chen".to_string(),
            role: "Business Executive".to_string(),
            rating: 5,
            content: "The attention to detail is incredible. The concierge remembered \
                      my coffee preference from my last visit six months ago!"
                .to_string(),
            stay: "Executive Room, Nairobi".to_string(),
            image: "/testimonials.jpg".to_string(),
        },
        Testimonial {
            id: 3,
            name: "Amina & Raj Patel".to_string(),
            role: "Honeymooners".to_string(),
            rating: 5,
            content: "Our beachfront villa exceeded all expectations. The staff arranged \
                      the most romantic sunset dinner on the beach - pure magic!"
                .to_string(),
            stay: "Beach Villa, Diani".to_string(),
            image: "/testimonials.jpg".to_string(),
        },
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_fully_populated() {
        let content = SiteContent::with_defaults();
        assert_eq!(content.hero.len(), 9);
        assert_eq!(content.featured.len(), 4);
        assert_eq!(content.offers.len(), 3);
        assert_eq!(content.testimonials.len(), 3);
    }

    #[test]
    fn test_hero_advance_wraps_around() {
        let mut carousel = SiteContent::with_defaults().hero_carousel();
        assert_eq!(carousel.active_index(), 0);

        for _ in 0..carousel.len() {
            carousel.advance();
        }
        assert_eq!(carousel.active_index(), 0);

        carousel.advance();
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(carousel.current().unwrap().title, "Tropical Island Retreat");
    }

    #[test]
    fn test_advance_on_empty_carousel_is_a_no_op() {
        let mut carousel = HeroCarousel::new(Vec::new());
        carousel.advance();
        assert_eq!(carousel.active_index(), 0);
        assert!(carousel.current().is_none());
    }

    #[test]
    fn test_map_url_prefers_coordinates() {
        let content = SiteContent::with_defaults();
        let with_coords = &content.featured[0];
        assert_eq!(
            with_coords.map_url(),
            "https://www.google.com/maps/search/?api=1&query=-4.3150,39.5753"
        );

        let mut no_coords = with_coords.clone();
        no_coords.coordinates = None;
        assert_eq!(
            no_coords.map_url(),
            "https://www.google.com/maps/search/?api=1&query=Diani%20Beach%2C%20Kenya"
        );
    }

    #[test]
    fn test_star_breakdown() {
        let content = SiteContent::with_defaults();

        let lamu = &content.featured[3];
        assert_eq!(lamu.full_stars(), 4);
        assert!(lamu.has_half_star());

        let mount = &content.featured[1];
        assert_eq!(mount.full_stars(), 4);
        assert!(mount.has_half_star());
    }

    #[test]
    fn test_offer_expiry() {
        let content = SiteContent::with_defaults();
        let offer = &content.offers[0];

        assert_eq!(offer.expiry_label(), "Expires August 31, 2025");

        let on_expiry = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
        assert!(!offer.is_expired(on_expiry));
        assert!(offer.is_expired(on_expiry.succ_opt().unwrap()));
    }
}
