// Destiny Scanner - Core Library
// Numerology + zodiac engine exposed to the CLI, the terminal view and the API server

pub mod error;
pub mod reducer;        // Digit reducer with master numbers
pub mod birth_date;     // Validated date input
pub mod tables;         // Number record registry
pub mod numerology;     // Profile assembler
pub mod zodiac;         // Sun sign classifier
pub mod astrology;      // Moon / ascendant / influences
pub mod insight;        // Enhanced destiny + palm provider
pub mod reading;        // Full reading
pub mod config;
pub mod logging;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use error::{Result, ScannerError};
pub use reducer::{digit_sum, reduce_digits, reduce_str, DigitalRoot, MASTER_NUMBERS};
pub use birth_date::{parse_birth_time, validate_month_day, BirthDate};
pub use tables::{NumberRecord, NumerologyTables};
pub use numerology::{
    destiny_number, mulank, numerology_profile, power_number,
    NumberReading, NumerologyProfile, PowerReading, ProfileAssembler, RulingPlanet,
};
pub use zodiac::{zodiac_sign, Element, Planet, Quality, SignRecord, ZodiacSign};
pub use astrology::{AstrologicalDetails, ElementInfluence, Placement, PlanetaryInfluence};
pub use insight::{
    DestinyInsightProvider, EnhancedDestiny, LocalInsightProvider,
    PalmAnalysis, PalmAnalysisMode, PalmFeatures,
};
pub use reading::{Reading, ReadingRequest};
pub use config::ScannerConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
