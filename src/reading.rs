// 📜 Full Reading - everything the results view shows, in one value
//
// Reading = numerology profile + astrology + optional palm analysis,
// stamped with an id and a generation time.

use crate::astrology::{self, AstrologicalDetails};
use crate::birth_date::{parse_birth_time, BirthDate};
use crate::error::Result;
use crate::insight::{DestinyInsightProvider, EnhancedDestiny, PalmAnalysis, PalmAnalysisMode};
use crate::numerology::NumerologyProfile;
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Raw inputs from a form, CLI flags or query string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingRequest {
    pub name: Option<String>,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub name: Option<String>,
    pub birth_date: BirthDate,
    pub birth_time: Option<NaiveTime>,
    pub birth_location: Option<String>,
    pub profile: NumerologyProfile,
    pub astrology: AstrologicalDetails,
    pub insights: EnhancedDestiny,
    pub palm: Option<PalmAnalysis>,
}

impl ReadingRequest {
    pub fn new(date: impl Into<String>) -> Self {
        ReadingRequest {
            date: date.into(),
            ..Default::default()
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Reading {
    /// Validate the request and assemble every section.
    ///
    /// Blank optional fields count as absent. A palm image is analyzed only when given.
    pub async fn compute(
        request: &ReadingRequest,
        provider: &dyn DestinyInsightProvider,
        palm: Option<(&[u8], PalmAnalysisMode)>,
    ) -> Result<Reading> {
        let birth_date: BirthDate = request.date.parse()?;
        let birth_time = non_blank(&request.time).map(parse_birth_time).transpose()?;
        let birth_location = non_blank(&request.location).map(str::to_string);
        let name = non_blank(&request.name).map(str::to_string);

        let profile = NumerologyProfile::for_date(&birth_date);
        let astrology = astrology::details(&birth_date, birth_time, birth_location.as_deref());
        let insights = provider.enhanced_destiny(&birth_date).await?;

        let palm = match palm {
            Some((image, mode)) => Some(provider.analyze_palm(image, mode).await?),
            None => None,
        };

        let reading = Reading {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            name,
            birth_date,
            birth_time,
            birth_location,
            profile,
            astrology,
            insights,
            palm,
        };

        info!(
            id = %reading.id,
            date = %reading.birth_date,
            destiny = %reading.profile.bhagyank.number,
            sun = reading.astrology.sun_sign.name,
            "reading generated"
        );

        Ok(reading)
    }

    /// Name for headings, "Seeker" when none was given
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Seeker")
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// ============================================================================
// TESTS
// ============================================================================
