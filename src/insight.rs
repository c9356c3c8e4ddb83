// 🔮 Insight Provider - enhanced destiny insights + palm analysis stub
//
// The provider is a trait so a remote backend can replace the in-process one.
// LocalInsightProvider answers from the numerology tables and hashes palm
// images: it never inspects pixels.

use crate::birth_date::BirthDate;
use crate::error::{Result, ScannerError};
use crate::reducer::DigitalRoot;
use crate::tables::{fallback, NumerologyTables};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;
use tracing::{debug, info};

const MOUNTS: [&str; 5] = ["Venus", "Jupiter", "Saturn", "Apollo", "Mercury"];
const FINGER_RATIO: [f64; 4] = [1.0, 1.1, 0.9, 0.95];

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedDestiny {
    pub destiny_number: DigitalRoot,
    pub insights: Vec<String>,
    pub compatibility: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PalmAnalysisMode {
    #[default]
    Basic,
    Advanced,
}

impl PalmAnalysisMode {
    pub fn confidence(&self) -> f64 {
        match self {
            PalmAnalysisMode::Basic => 0.78,
            PalmAnalysisMode::Advanced => 0.92,
        }
    }
}

impl FromStr for PalmAnalysisMode {
    type Err = ScannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(PalmAnalysisMode::Basic),
            "advanced" => Ok(PalmAnalysisMode::Advanced),
            other => Err(ScannerError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for PalmAnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PalmAnalysisMode::Basic => write!(f, "basic"),
            PalmAnalysisMode::Advanced => write!(f, "advanced"),
        }
    }
}

/// Line and mount readings, only produced in advanced mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalmFeatures {
    pub life_line_length: u8,
    pub life_line_clarity: f64,
    pub heart_line_strength: f64,
    pub head_line_depth: f64,
    pub fate_line_presence: bool,
    pub dominant_mount: String,
    pub finger_ratio: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalmAnalysis {
    pub destiny_number: DigitalRoot,
    pub confidence: f64,
    pub mode: PalmAnalysisMode,
    /// Hex SHA-256 of the image bytes
    pub image_digest: String,
    pub features: Option<PalmFeatures>,
}

// ============================================================================
// PROVIDER TRAIT
// ============================================================================

#[async_trait]
pub trait DestinyInsightProvider: Send + Sync {
    /// Destiny number plus insight sentences and compatible numbers
    async fn enhanced_destiny(&self, date: &BirthDate) -> Result<EnhancedDestiny>;

    /// Destiny number derived from a palm image
    async fn analyze_palm(&self, image: &[u8], mode: PalmAnalysisMode) -> Result<PalmAnalysis>;

    fn name(&self) -> &str;
}

// ============================================================================
// LOCAL PROVIDER
// ============================================================================

/// In-process provider backed by the numerology tables
#[derive(Debug, Clone, Copy)]
pub struct LocalInsightProvider {
    tables: &'static NumerologyTables,
}

impl LocalInsightProvider {
    pub fn new() -> Self {
        Self::with_tables(NumerologyTables::global())
    }

    pub fn with_tables(tables: &'static NumerologyTables) -> Self {
        LocalInsightProvider { tables }
    }

    fn insights_for(&self, number: DigitalRoot) -> EnhancedDestiny {
        let record = self.tables.get(number);
        let strength = record.map_or(fallback::STRENGTH, |r| r.strength);
        let attunement = record.map_or(fallback::ATTUNEMENT, |r| r.attunement);
        let planet = record.map_or(fallback::PLANET, |r| r.planet_short);
        let compatibility = record.map_or(fallback::INSIGHT_COMPATIBILITY, |r| r.compatible);

        EnhancedDestiny {
            destiny_number: number,
            insights: vec![
                format!(
                    "Your destiny number {} shows a particular strength in {}",
                    number, strength
                ),
                format!("You're particularly attuned to {}", attunement),
                format!("Planetary influence: {}", planet),
            ],
            compatibility: compatibility.to_vec(),
        }
    }
}

impl Default for LocalInsightProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DestinyInsightProvider for LocalInsightProvider {
    async fn enhanced_destiny(&self, date: &BirthDate) -> Result<EnhancedDestiny> {
        let destiny = self.insights_for(date.destiny_number());
        debug!(%date, number = %destiny.destiny_number, "enhanced destiny");
        Ok(destiny)
    }

    async fn analyze_palm(&self, image: &[u8], mode: PalmAnalysisMode) -> Result<PalmAnalysis> {
        if image.is_empty() {
            return Err(ScannerError::EmptyImage);
        }

        let digest = Sha256::digest(image);
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        let seed = u64::from_be_bytes(head);
        let destiny_number =
            DigitalRoot::reduce(NonZeroU64::new(seed).unwrap_or(NonZeroU64::MIN));

        let features = match mode {
            PalmAnalysisMode::Advanced => Some(PalmFeatures {
                life_line_length: digest[8] % 10 + 1,
                life_line_clarity: f64::from(digest[9] % 10) / 10.0,
                heart_line_strength: f64::from(digest[10] % 10) / 10.0,
                head_line_depth: f64::from(digest[11] % 10) / 10.0,
                fate_line_presence: digest[12] % 2 == 0,
                dominant_mount: MOUNTS[digest[13] as usize % MOUNTS.len()].to_string(),
                finger_ratio: FINGER_RATIO.to_vec(),
            }),
            PalmAnalysisMode::Basic => None,
        };

        info!(
            bytes = image.len(),
            %mode,
            number = %destiny_number,
            "palm analyzed"
        );

        Ok(PalmAnalysis {
            destiny_number,
            confidence: mode.confidence(),
            mode,
            image_digest: format!("{:x}", digest),
            features,
        })
    }

    fn name(&self) -> &str {
        "local"
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_enhanced_destiny_sentences() {
        let provider = LocalInsightProvider::new();
        let date = BirthDate::new(1990, 5, 7).unwrap();
        let destiny = provider.enhanced_destiny(&date).await.unwrap();

        assert_eq!(destiny.destiny_number.value(), 4);
        assert_eq!(
            destiny.insights,
            vec![
                "Your destiny number 4 shows a particular strength in stability",
                "You're particularly attuned to building foundations",
                "Planetary influence: Uranus",
            ]
        );
        assert_eq!(destiny.compatibility, vec![2, 7, 8]);
    }

    #[tokio::test]
    async fn test_master_number_insights() {
        // 1 + 1 + 2 + 0 + 0 + 7 = 11
        let provider = LocalInsightProvider::new();
        let date = BirthDate::new(2007, 1, 1).unwrap();
        let destiny = provider.enhanced_destiny(&date).await.unwrap();

        assert_eq!(destiny.destiny_number.value(), 11);
        assert!(destiny.insights[0].ends_with("intuition"));
        assert!(destiny.insights[1].ends_with("spiritual insight"));
        assert_eq!(destiny.insights[2], "Planetary influence: Sun/Moon");
    }

    #[tokio::test]
    async fn test_missing_row_uses_fallbacks() {
        let tables: &'static NumerologyTables = Box::leak(Box::new(NumerologyTables::empty()));
        let provider = LocalInsightProvider::with_tables(tables);
        let date = BirthDate::new(1990, 5, 7).unwrap();
        let destiny = provider.enhanced_destiny(&date).await.unwrap();

        assert_eq!(destiny.compatibility, vec![1, 2, 3]);
        assert_eq!(destiny.insights[2], "Planetary influence: Cosmic Forces");
    }

    #[tokio::test]
    async fn test_palm_is_deterministic() {
        let provider = LocalInsightProvider::new();
        let image = b"not really a jpeg";
        let a = provider.analyze_palm(image, PalmAnalysisMode::Basic).await.unwrap();
        let b = provider.analyze_palm(image, PalmAnalysisMode::Basic).await.unwrap();

        assert_eq!(a, b);
        assert_eq!(a.image_digest.len(), 64);
        assert!(DigitalRoot::ALL.contains(&a.destiny_number));
    }

    #[tokio::test]
    async fn test_palm_modes() {
        let provider = LocalInsightProvider::new();
        let image = [7u8; 256];

        let basic = provider.analyze_palm(&image, PalmAnalysisMode::Basic).await.unwrap();
        assert_eq!(basic.confidence, 0.78);
        assert!(basic.features.is_none());

        let advanced = provider.analyze_palm(&image, PalmAnalysisMode::Advanced).await.unwrap();
        assert_eq!(advanced.confidence, 0.92);
        assert_eq!(advanced.destiny_number, basic.destiny_number);

        let features = advanced.features.unwrap();
        assert!((1..=10).contains(&features.life_line_length));
        assert!(features.life_line_clarity < 1.0);
        assert!(MOUNTS.contains(&features.dominant_mount.as_str()));
        assert_eq!(features.finger_ratio, vec![1.0, 1.1, 0.9, 0.95]);
    }

    #[tokio::test]
    async fn test_empty_image_rejected() {
        let provider = LocalInsightProvider::new();
        let err = provider
            .analyze_palm(&[], PalmAnalysisMode::Advanced)
            .await
            .unwrap_err();
        assert!(matches!(err, ScannerError::EmptyImage));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("advanced".parse::<PalmAnalysisMode>().unwrap(), PalmAnalysisMode::Advanced);
        assert_eq!("Basic".parse::<PalmAnalysisMode>().unwrap(), PalmAnalysisMode::Basic);
        assert!("deep".parse::<PalmAnalysisMode>().is_err());
        assert_eq!(PalmAnalysisMode::default(), PalmAnalysisMode::Basic);
    }

    #[test]
    fn test_provider_is_object_safe() {
        let provider: Box<dyn DestinyInsightProvider> = Box::new(LocalInsightProvider::new());
        assert_eq!(provider.name(), "local");
    }
}
