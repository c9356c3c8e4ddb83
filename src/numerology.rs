// 🔮 Numerology Engine - Profile Assembler
// BirthDate → (mulank, bhagyank, power number) → direct-key table lookups → NumerologyProfile
//
// Every lookup supplies a fallback. The domain is closed, so with the core tables
// a miss never happens; a registry with gaps still produces a full profile.

use crate::birth_date::{mulank_for_day, BirthDate};
use crate::error::Result;
use crate::reducer::DigitalRoot;
use crate::tables::{fallback, NumberRecord, NumerologyTables};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::num::NonZeroU64;
use tracing::{debug, warn};

// ============================================================================
// PROFILE TYPES
// ============================================================================

/// A reduced number with its interpretation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberReading {
    pub number: DigitalRoot,
    pub meaning: String,
    pub traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerReading {
    pub number: DigitalRoot,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulingPlanet {
    pub name: String,
    pub influence: String,
}

/// Denormalized numerology result. Derived fresh per request, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    /// Root of the birth day
    pub mulank: NumberReading,
    /// Root of the full date (destiny number)
    pub bhagyank: NumberReading,
    /// Root of mulank + bhagyank
    pub power_number: PowerReading,
    pub ruling_planet: RulingPlanet,
    pub compatible_numbers: Vec<u8>,
    pub incompatible_numbers: Vec<u8>,
    pub personality_overview: String,
    pub career_paths: Vec<String>,
    pub relationship_traits: Vec<String>,
    pub financial_traits: Vec<String>,
    pub health_traits: Vec<String>,
    pub life_challenges: Vec<String>,
    pub life_lessons: Vec<String>,
    pub lucky_colors: Vec<String>,
    pub lucky_gemstones: Vec<String>,
}

impl NumerologyProfile {
    /// Assemble against the global tables
    pub fn for_date(date: &BirthDate) -> Self {
        ProfileAssembler::new(NumerologyTables::global()).assemble(date)
    }
}

// ============================================================================
// CORE NUMBERS
// ============================================================================

/// Bhagyank for raw calendar fields. Invalid dates are rejected before reduction.
pub fn destiny_number(year: i32, month: u32, day: u32) -> Result<DigitalRoot> {
    Ok(BirthDate::new(year, month, day)?.destiny_number())
}

/// Mulank for a day of month (1..=31)
pub fn mulank(day: u32) -> Result<DigitalRoot> {
    mulank_for_day(day)
}

/// Power number: root of mulank + bhagyank
pub fn power_number(mulank: DigitalRoot, destiny: DigitalRoot) -> DigitalRoot {
    let sum = mulank.value() as u64 + destiny.value() as u64;
    DigitalRoot::reduce(NonZeroU64::new(sum).unwrap_or(NonZeroU64::MIN))
}

/// Full profile for raw calendar fields
pub fn numerology_profile(year: i32, month: u32, day: u32) -> Result<NumerologyProfile> {
    let date = BirthDate::new(year, month, day)?;
    Ok(NumerologyProfile::for_date(&date))
}

// ============================================================================
// ASSEMBLER
// ============================================================================

pub struct ProfileAssembler<'a> {
    tables: &'a NumerologyTables,
}

impl<'a> ProfileAssembler<'a> {
    pub fn new(tables: &'a NumerologyTables) -> Self {
        ProfileAssembler { tables }
    }

    pub fn assemble(&self, date: &BirthDate) -> NumerologyProfile {
        let mulank = date.mulank();
        let bhagyank = date.destiny_number();
        let power = power_number(mulank, bhagyank);

        debug!(%date, %mulank, %bhagyank, %power, "assembling numerology profile");

        let m = self.lookup(mulank);
        let b = self.lookup(bhagyank);
        let p = self.lookup(power);

        NumerologyProfile {
            mulank: NumberReading {
                number: mulank,
                meaning: m.map_or(fallback::MEANING, |r| r.mulank_meaning).to_string(),
                traits: strings(m.map_or(fallback::TRAITS, |r| r.mulank_traits)),
            },
            bhagyank: NumberReading {
                number: bhagyank,
                meaning: b.map_or(fallback::MEANING, |r| r.bhagyank_meaning).to_string(),
                traits: strings(b.map_or(fallback::TRAITS, |r| r.bhagyank_traits)),
            },
            power_number: PowerReading {
                number: power,
                meaning: p.map_or(fallback::POWER_MEANING, |r| r.power_meaning).to_string(),
            },
            ruling_planet: RulingPlanet {
                name: b.map_or(fallback::PLANET, |r| r.planet).to_string(),
                influence: b
                    .map_or(fallback::PLANET_INFLUENCE, |r| r.planet_influence)
                    .to_string(),
            },
            compatible_numbers: b.map_or(fallback::COMPATIBLE, |r| r.compatible).to_vec(),
            incompatible_numbers: b.map_or(fallback::INCOMPATIBLE, |r| r.incompatible).to_vec(),
            personality_overview: personality_overview(m, b, p),
            career_paths: merge_unique(
                b.map_or(&[][..], |r| r.careers),
                take(m.map_or(&[][..], |r| r.careers), 2),
            ),
            relationship_traits: strings(
                b.map_or(fallback::RELATIONSHIP_TRAITS, |r| r.relationship_traits),
            ),
            financial_traits: strings(b.map_or(fallback::FINANCIAL_TRAITS, |r| r.financial_traits)),
            health_traits: merge_unique(
                take(b.map_or(&[][..], |r| r.health_traits), 3),
                take(m.map_or(&[][..], |r| r.health_traits), 2),
            ),
            life_challenges: strings(b.map_or(fallback::LIFE_CHALLENGES, |r| r.life_challenges)),
            life_lessons: strings(b.map_or(fallback::LIFE_LESSONS, |r| r.life_lessons)),
            lucky_colors: strings(b.map_or(fallback::LUCKY_COLORS, |r| r.lucky_colors)),
            lucky_gemstones: strings(b.map_or(fallback::LUCKY_GEMSTONES, |r| r.lucky_gemstones)),
        }
    }

    fn lookup(&self, number: DigitalRoot) -> Option<&'a NumberRecord> {
        let record = self.tables.get(number);
        if record.is_none() {
            warn!(%number, "no table row for number, using fallback values");
        }
        record
    }
}

fn personality_overview(
    m: Option<&NumberRecord>,
    b: Option<&NumberRecord>,
    p: Option<&NumberRecord>,
) -> String {
    format!(
        "Your personality combines being {} with a life path focused on {}. \
         Your greatest potential emerges through {}, which gives you a distinct advantage in life's journey. \
         You naturally gravitate toward situations where you can express your authentic nature and fulfill your cosmic blueprint.",
        m.map_or(fallback::TEMPERAMENT, |r| r.temperament),
        b.map_or(fallback::LIFE_PATH, |r| r.life_path),
        p.map_or(fallback::POWER_INFLUENCE, |r| r.power_influence),
    )
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn take<'s>(list: &'s [&'static str], n: usize) -> &'s [&'static str] {
    &list[..list.len().min(n)]
}

/// Concatenate, keeping the first occurrence of each entry
fn merge_unique(primary: &[&str], secondary: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    primary
        .iter()
        .chain(secondary.iter())
        .filter(|entry| seen.insert(**entry))
        .map(|entry| entry.to_string())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
