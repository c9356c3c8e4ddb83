// 🌙 Astrological Details - sun sign + approximate moon/ascendant placements
//
// Moon and ascendant are deterministic index picks, not ephemeris results:
//   moon      = (day + month + hour) % 12
//   ascendant = (day + month + hour + location chars) % 12

use crate::birth_date::BirthDate;
use crate::zodiac::{Element, Planet, SignRecord, ZodiacSign};
use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use tracing::debug;

/// Moon or ascendant interpretation
#[derive(Debug, Serialize)]
pub struct Placement {
    pub name: &'static str,
    pub influence: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ElementInfluence {
    pub primary_element: &'static str,
    pub description: &'static str,
    pub traits: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct PlanetaryInfluence {
    pub dominant_planet: &'static str,
    pub description: &'static str,
    pub traits: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AstrologicalDetails {
    pub sun_sign: &'static SignRecord,
    /// Present only when a birth time is known
    pub moon_sign: Option<&'static Placement>,
    /// Present only when both birth time and location are known
    pub ascendant: Option<&'static Placement>,
    pub element_influence: &'static ElementInfluence,
    pub planetary_influence: &'static PlanetaryInfluence,
}

// ============================================================================
// CALCULATION
// ============================================================================

/// Assemble the astrology page for a birth date.
///
/// A blank location counts as absent.
pub fn details(
    date: &BirthDate,
    time: Option<NaiveTime>,
    location: Option<&str>,
) -> AstrologicalDetails {
    let sun_sign = ZodiacSign::for_date(date).record();
    let location = location.map(str::trim).filter(|l| !l.is_empty());

    let moon_sign = time.map(|t| moon_sign(date, t));
    let ascendant = match (time, location) {
        (Some(t), Some(l)) => Some(ascendant(date, t, l)),
        _ => None,
    };

    debug!(
        %date,
        sun = sun_sign.name,
        moon = ?moon_sign.map(|m| m.name),
        ascendant = ?ascendant.map(|a| a.name),
        "astrological details"
    );

    AstrologicalDetails {
        sun_sign,
        moon_sign,
        ascendant,
        element_influence: element_influence(sun_sign.element),
        planetary_influence: planetary_influence(sun_sign.primary_planet()),
    }
}

pub fn moon_sign(date: &BirthDate, time: NaiveTime) -> &'static Placement {
    let index = (date.day() + date.month() + time.hour()) % 12;
    &MOON_SIGNS[index as usize]
}

/// Location contributes its character count
pub fn ascendant(date: &BirthDate, time: NaiveTime, location: &str) -> &'static Placement {
    let location_len = location.chars().count() as u64;
    let index =
        (date.day() as u64 + date.month() as u64 + time.hour() as u64 + location_len) % 12;
    &ASCENDANTS[index as usize]
}

pub fn element_influence(element: Element) -> &'static ElementInfluence {
    match element {
        Element::Fire => &ELEMENT_INFLUENCES[0],
        Element::Earth => &ELEMENT_INFLUENCES[1],
        Element::Air => &ELEMENT_INFLUENCES[2],
        Element::Water => &ELEMENT_INFLUENCES[3],
    }
}

/// Influence of the primary ruler, "Cosmic Forces" when none is listed
pub fn planetary_influence(planet: Option<Planet>) -> &'static PlanetaryInfluence {
    let Some(planet) = planet else {
        return &COSMIC_FORCES;
    };
    PLANETARY_INFLUENCES
        .iter()
        .find(|p| p.dominant_planet == planet.as_str())
        .unwrap_or(&COSMIC_FORCES)
}

// ============================================================================
// STATIC DATA
// ============================================================================

static MOON_SIGNS: [Placement; 12] = [
    Placement { name: "Aries Moon", influence: "Emotional impulsivity, quick reactions, independent feelings" },
    Placement { name: "Taurus Moon", influence: "Emotional stability, sensual nature, comfort-seeking" },
    Placement { name: "Gemini Moon", influence: "Emotional adaptability, intellectual approach to feelings, communicative" },
    Placement { name: "Cancer Moon", influence: "Deeply emotional, nurturing, protective, moody" },
    Placement { name: "Leo Moon", influence: "Emotionally expressive, proud, dramatic, generous" },
    Placement { name: "Virgo Moon", influence: "Emotionally analytical, perfectionist, practical approach to feelings" },
    Placement { name: "Libra Moon", influence: "Emotionally balanced, partnership-oriented, diplomatic" },
    Placement { name: "Scorpio Moon", influence: "Intense emotions, deeply passionate, private, resilient" },
    Placement { name: "Sagittarius Moon", influence: "Emotionally optimistic, freedom-loving, philosophical" },
    Placement { name: "Capricorn Moon", influence: "Emotionally reserved, disciplined feelings, responsible" },
    Placement { name: "Aquarius Moon", influence: "Emotionally detached, humanitarian, innovative emotional responses" },
    Placement { name: "Pisces Moon", influence: "Emotionally sensitive, compassionate, intuitive, dreamy" },
];

static ASCENDANTS: [Placement; 12] = [
    Placement { name: "Aries Ascendant", influence: "Direct approach to life, assertive demeanor, pioneering" },
    Placement { name: "Taurus Ascendant", influence: "Steady approach to life, reliable appearance, practical" },
    Placement { name: "Gemini Ascendant", influence: "Communicative demeanor, curious approach, youthful energy" },
    Placement { name: "Cancer Ascendant", influence: "Nurturing presence, protective shell, emotional approach" },
    Placement { name: "Leo Ascendant", influence: "Charismatic presence, confident demeanor, expressive" },
    Placement { name: "Virgo Ascendant", influence: "Analytical approach, detail-oriented, service-focused" },
    Placement { name: "Libra Ascendant", influence: "Diplomatic demeanor, beauty-focused, partnership-oriented" },
    Placement { name: "Scorpio Ascendant", influence: "Mysterious presence, intense approach, transformative" },
    Placement { name: "Sagittarius Ascendant", influence: "Optimistic demeanor, philosophical approach, freedom-loving" },
    Placement { name: "Capricorn Ascendant", influence: "Reserved presence, ambitious approach, responsible" },
    Placement { name: "Aquarius Ascendant", influence: "Unique demeanor, humanitarian approach, intellectual" },
    Placement { name: "Pisces Ascendant", influence: "Mystical presence, dreamy approach, compassionate" },
];

static ELEMENT_INFLUENCES: [ElementInfluence; 4] = [
    ElementInfluence {
        primary_element: "Fire",
        description: "Dynamic, passionate, and energetic in nature",
        traits: &["Enthusiastic", "Action-oriented", "Impulsive", "Creative", "Inspiring"],
    },
    ElementInfluence {
        primary_element: "Earth",
        description: "Grounded, practical, and stabilizing in nature",
        traits: &["Reliable", "Pragmatic", "Patient", "Materialistic", "Secure"],
    },
    ElementInfluence {
        primary_element: "Air",
        description: "Intellectual, communicative, and social in nature",
        traits: &["Analytical", "Communicative", "Social", "Conceptual", "Objective"],
    },
    ElementInfluence {
        primary_element: "Water",
        description: "Emotional, intuitive, and deeply feeling in nature",
        traits: &["Empathetic", "Intuitive", "Emotional", "Nurturing", "Sensitive"],
    },
];

static PLANETARY_INFLUENCES: [PlanetaryInfluence; 10] = [
    PlanetaryInfluence {
        dominant_planet: "Sun",
        description: "The life force, vitality, and core identity",
        traits: &["Confident", "Proud", "Creative", "Authoritative", "Generous"],
    },
    PlanetaryInfluence {
        dominant_planet: "Moon",
        description: "The emotional nature, instincts, and subconscious",
        traits: &["Intuitive", "Nurturing", "Moody", "Protective", "Sensitive"],
    },
    PlanetaryInfluence {
        dominant_planet: "Mercury",
        description: "The mind, communication, and intellectual abilities",
        traits: &["Intelligent", "Communicative", "Analytical", "Curious", "Adaptable"],
    },
    PlanetaryInfluence {
        dominant_planet: "Venus",
        description: "Love, beauty, pleasure, and attraction",
        traits: &["Affectionate", "Artistic", "Diplomatic", "Sensual", "Charming"],
    },
    PlanetaryInfluence {
        dominant_planet: "Mars",
        description: "Energy, passion, drive, and determination",
        traits: &["Assertive", "Courageous", "Energetic", "Competitive", "Bold"],
    },
    PlanetaryInfluence {
        dominant_planet: "Jupiter",
        description: "Expansion, growth, wisdom, and abundance",
        traits: &["Optimistic", "Generous", "Philosophical", "Enthusiastic", "Lucky"],
    },
    PlanetaryInfluence {
        dominant_planet: "Saturn",
        description: "Discipline, responsibility, restrictions, and lessons",
        traits: &["Disciplined", "Responsible", "Patient", "Ambitious", "Persistent"],
    },
    PlanetaryInfluence {
        dominant_planet: "Uranus",
        description: "Innovation, rebellion, originality, and change",
        traits: &["Original", "Independent", "Inventive", "Progressive", "Unconventional"],
    },
    PlanetaryInfluence {
        dominant_planet: "Neptune",
        description: "Spirituality, dreams, illusions, and transcendence",
        traits: &["Imaginative", "Spiritual", "Compassionate", "Dreamy", "Idealistic"],
    },
    PlanetaryInfluence {
        dominant_planet: "Pluto",
        description: "Transformation, power, regeneration, and rebirth",
        traits: &["Transformative", "Intense", "Powerful", "Secretive", "Perceptive"],
    },
];

static COSMIC_FORCES: PlanetaryInfluence = PlanetaryInfluence {
    dominant_planet: "Cosmic Forces",
    description: "Multiple celestial influences at work",
    traits: &["Balanced", "Cosmic", "Multifaceted", "Universal", "Harmonious"],
};

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth_date::parse_birth_time;

    fn date() -> BirthDate {
        BirthDate::new(1990, 5, 7).unwrap()
    }

    #[test]
    fn test_date_only_has_no_moon_or_ascendant() {
        let d = details(&date(), None, Some("Mumbai"));
        assert_eq!(d.sun_sign.name, "Taurus");
        assert!(d.moon_sign.is_none());
        assert!(d.ascendant.is_none());
        assert_eq!(d.element_influence.primary_element, "Earth");
        assert_eq!(d.planetary_influence.dominant_planet, "Venus");
    }

    #[test]
    fn test_moon_sign_index() {
        // (7 + 5 + 14) % 12 = 2 -> Gemini
        let time = parse_birth_time("14:30").unwrap();
        let d = details(&date(), Some(time), None);
        assert_eq!(d.moon_sign.unwrap().name, "Gemini Moon");
        assert!(d.ascendant.is_none());
    }

    #[test]
    fn test_ascendant_uses_location_length() {
        // (7 + 5 + 14 + 6) % 12 = 8 -> Sagittarius
        let time = parse_birth_time("14:30").unwrap();
        let d = details(&date(), Some(time), Some("Mumbai"));
        assert_eq!(d.ascendant.unwrap().name, "Sagittarius Ascendant");
    }

    #[test]
    fn test_blank_location_is_absent() {
        let time = parse_birth_time("06:00").unwrap();
        let d = details(&date(), Some(time), Some("   "));
        assert!(d.moon_sign.is_some());
        assert!(d.ascendant.is_none());
    }

    #[test]
    fn test_primary_planet_drives_influence() {
        // Scorpio is ruled by Pluto first
        let scorpio = BirthDate::new(2000, 11, 1).unwrap();
        let d = details(&scorpio, None, None);
        assert_eq!(d.planetary_influence.dominant_planet, "Pluto");
    }

    #[test]
    fn test_missing_planet_falls_back() {
        let influence = planetary_influence(None);
        assert_eq!(influence.dominant_planet, "Cosmic Forces");
        assert_eq!(influence.traits.len(), 5);
    }

    #[test]
    fn test_every_planet_has_influence() {
        for planet in [
            Planet::Sun,
            Planet::Moon,
            Planet::Mercury,
            Planet::Venus,
            Planet::Mars,
            Planet::Jupiter,
            Planet::Saturn,
            Planet::Uranus,
            Planet::Neptune,
            Planet::Pluto,
        ] {
            assert_eq!(planetary_influence(Some(planet)).dominant_planet, planet.as_str());
        }
    }

    #[test]
    fn test_details_serialize() {
        let time = parse_birth_time("14:30").unwrap();
        let json = serde_json::to_value(details(&date(), Some(time), None)).unwrap();
        assert_eq!(json["sun_sign"]["name"], "Taurus");
        assert_eq!(json["moon_sign"]["name"], "Gemini Moon");
        assert!(json["ascendant"].is_null());
    }
}
