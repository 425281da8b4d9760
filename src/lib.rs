// Safari Stays - Core Library
// Domain logic for the hotel marketing site, shared by the TUI browser,
// the API server, and tests

pub mod catalog;
pub mod validation;
pub mod filter;
pub mod pagination;
pub mod booking;
pub mod auth;
pub mod content;
pub mod search;
pub mod routes;

// Re-export commonly used types
pub use catalog::{Amenities, HotelCatalog, HotelRecord};
pub use validation::{ValidationError, ValidationResult};
pub use filter::{price_ranges, FacetSelection, FilterEngine, PriceRange};
pub use pagination::{PaginationWindow, INITIAL_VISIBLE_COUNT, SHOW_MORE_STEP};
pub use booking::{
    BookingConfirmation, BookingForm, BookingRequest, BookingState, GUEST_OPTIONS,
    PROCESSING_DELAY,
};
pub use auth::{AuthForm, AuthMode, AuthOutcome, AuthRequest, AuthState, SIGN_IN_DELAY};
pub use content::{
    FeaturedHotel, HeroCarousel, HeroSlide, Offer, SiteContent, Testimonial,
    HERO_ROTATION_INTERVAL,
};
pub use search::{SearchQuery, GUEST_CHOICES};
pub use routes::{NotFoundPage, Route};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
