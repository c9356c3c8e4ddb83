// 📚 Numerology Tables - Rules as Data
// One row per reduced number {1..9, 11, 22, 33}, registered once and read-only afterwards.
//
// Lookups return Option: the assembler (numerology.rs) owns the fallback policy.

use crate::reducer::DigitalRoot;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// ============================================================================
// ROW DEFINITION
// ============================================================================

/// Everything the tables know about one reduced number
#[derive(Debug, Clone, PartialEq)]
pub struct NumberRecord {
    /// Meaning when the number is a mulank (birth-day root)
    pub mulank_meaning: &'static str,
    pub mulank_traits: &'static [&'static str],

    /// Meaning when the number is a bhagyank (destiny number)
    pub bhagyank_meaning: &'static str,
    pub bhagyank_traits: &'static [&'static str],

    pub power_meaning: &'static str,

    /// Ruling planet keyed by bhagyank
    pub planet: &'static str,
    pub planet_influence: &'static str,

    pub compatible: &'static [u8],
    pub incompatible: &'static [u8],

    /// Personality overview fragments
    pub temperament: &'static str,
    pub life_path: &'static str,
    pub power_influence: &'static str,

    pub careers: &'static [&'static str],
    pub relationship_traits: &'static [&'static str],
    pub financial_traits: &'static [&'static str],
    pub health_traits: &'static [&'static str],
    pub life_challenges: &'static [&'static str],
    pub life_lessons: &'static [&'static str],
    pub lucky_colors: &'static [&'static str],
    pub lucky_gemstones: &'static [&'static str],

    /// Insight provider phrases
    pub strength: &'static str,
    pub attunement: &'static str,
    pub planet_short: &'static str,
}

// ============================================================================
// FALLBACKS
// ============================================================================

/// Generic values used when a lookup misses
pub mod fallback {
    pub const MEANING: &str = "Unknown meaning";
    pub const TRAITS: &[&str] = &["Unknown traits"];
    pub const POWER_MEANING: &str =
        "Your power combines multiple cosmic influences, creating a unique energy signature.";
    pub const PLANET: &str = "Cosmic Forces";
    pub const PLANET_INFLUENCE: &str =
        "Multiple celestial influences work together in your chart, creating a unique cosmic signature.";
    pub const COMPATIBLE: &[u8] = &[1, 3, 9];
    pub const INCOMPATIBLE: &[u8] = &[4, 8];
    pub const TEMPERAMENT: &str = "multifaceted";
    pub const LIFE_PATH: &str = "unique cosmic purposes";
    pub const POWER_INFLUENCE: &str = "your unique combination of cosmic energies";
    pub const RELATIONSHIP_TRAITS: &[&str] = &[
        "Unique approach to relationships",
        "Balance of independence and togetherness",
        "Values authentic connection",
        "Intuitive about others' needs",
        "Evolving relationship style",
    ];
    pub const FINANCIAL_TRAITS: &[&str] = &[
        "Balanced approach to finances",
        "Adaptable money management style",
        "Potential for unexpected financial support",
        "Should trust inner guidance with investments",
        "Focus on sustainable abundance",
    ];
    pub const LIFE_CHALLENGES: &[&str] = &[
        "Finding your authentic path",
        "Balancing different aspects of life",
        "Trusting your inner guidance",
        "Creating sustainable success",
        "Maintaining physical wellbeing",
    ];
    pub const LIFE_LESSONS: &[&str] = &[
        "Finding your authentic path",
        "Balancing material and spiritual",
        "Service with boundaries",
        "Self-knowledge",
        "Living your highest potential",
    ];
    pub const LUCKY_COLORS: &[&str] = &["Blue", "Purple", "Gold", "Green", "White"];
    pub const LUCKY_GEMSTONES: &[&str] =
        &["Clear Quartz", "Amethyst", "Rose Quartz", "Citrine", "Jade"];
    pub const STRENGTH: &str = "cosmic balance";
    pub const ATTUNEMENT: &str = "the wider universe";
    pub const INSIGHT_COMPATIBILITY: &[u8] = &[1, 2, 3];
}

// ============================================================================
// TABLE REGISTRY
// ============================================================================

static GLOBAL_TABLES: Lazy<NumerologyTables> = Lazy::new(NumerologyTables::new);

/// Registry of number records keyed by reduced number
#[derive(Debug, Clone)]
pub struct NumerologyTables {
    records: HashMap<DigitalRoot, NumberRecord>,
}

impl NumerologyTables {
    /// Create a registry with the full core table set
    pub fn new() -> Self {
        let mut tables = NumerologyTables::empty();
        tables.register_core_records();
        tables
    }

    /// Registry with no rows; every lookup falls back
    pub fn empty() -> Self {
        NumerologyTables {
            records: HashMap::new(),
        }
    }

    /// Process-wide immutable instance
    pub fn global() -> &'static NumerologyTables {
        &GLOBAL_TABLES
    }

    fn register_core_records(&mut self) {
        for (number, record) in DigitalRoot::ALL.iter().zip(CORE_RECORDS.iter()) {
            self.register(*number, record.clone());
        }
    }

    /// Register (or replace) the row for a number
    pub fn register(&mut self, number: DigitalRoot, record: NumberRecord) {
        self.records.insert(number, record);
    }

    pub fn get(&self, number: DigitalRoot) -> Option<&NumberRecord> {
        self.records.get(&number)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for NumerologyTables {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CORE DATA (order matches DigitalRoot::ALL)
// ============================================================================

static CORE_RECORDS: [NumberRecord; 12] = [
    // 1
    NumberRecord {
        mulank_meaning: "The Leader - Independent, assertive, and pioneering. You have natural leadership abilities and innovative ideas.",
        mulank_traits: &["Original", "Independent", "Creative", "Self-reliant", "Determined"],
        bhagyank_meaning: "The Pioneer - Your destiny is to lead, innovate, and forge new paths. Independence and originality are your strengths.",
        bhagyank_traits: &["Leadership", "Innovation", "Independence", "Determination", "Pioneering"],
        power_meaning: "Your power lies in leadership and innovation. You have the ability to pioneer new paths and inspire others to follow.",
        planet: "Sun",
        planet_influence: "The Sun brings leadership qualities, vitality, and a strong sense of self. It illuminates your path with clarity and purpose.",
        compatible: &[3, 5, 9],
        incompatible: &[4, 8],
        temperament: "independent and innovative",
        life_path: "leadership and pioneering new paths",
        power_influence: "your leadership abilities",
        careers: &["Entrepreneur", "Executive", "Leader", "Inventor", "Independent Consultant"],
        relationship_traits: &["Independent in relationships", "Needs a partner who respects your space", "Loyal but requires freedom", "Direct and honest communication", "May struggle with compromise"],
        financial_traits: &["Natural ability to generate income", "Independent financial style", "Innovative money approaches", "May take financial risks", "Should focus on building sustainable wealth"],
        health_traits: &["Vitality connected to sense of purpose", "Headaches when resisting path", "Benefits from independent exercise", "May push body too hard", "Needs adequate rest"],
        life_challenges: &["Balancing independence with connection", "Overcoming egotism", "Learning to listen to others", "Developing patience", "Finding your unique voice"],
        life_lessons: &["Independence", "Courage", "Self-reliance", "Innovation", "Leadership without domination"],
        lucky_colors: &["Red", "Orange", "Gold", "Yellow", "Bronze"],
        lucky_gemstones: &["Ruby", "Garnet", "Red Jasper", "Carnelian", "Sunstone"],
        strength: "leadership",
        attunement: "self-expression",
        planet_short: "Sun",
    },
    // 2
    NumberRecord {
        mulank_meaning: "The Mediator - Diplomatic, cooperative, and sensitive. You excel in partnerships and creating harmony.",
        mulank_traits: &["Cooperative", "Sensitive", "Diplomatic", "Supportive", "Intuitive"],
        bhagyank_meaning: "The Diplomat - Your destiny is to create harmony, foster cooperation, and build meaningful partnerships.",
        bhagyank_traits: &["Diplomacy", "Cooperation", "Patience", "Sensitivity", "Balance"],
        power_meaning: "Your power lies in diplomacy and intuition. You excel at bringing harmony to situations and sensing subtle energies.",
        planet: "Moon",
        planet_influence: "The Moon brings emotional sensitivity, intuition, and nurturing qualities. It connects you to your inner world and subconscious.",
        compatible: &[4, 6, 8],
        incompatible: &[1, 7],
        temperament: "diplomatic and intuitive",
        life_path: "cooperation and peacemaking",
        power_influence: "your diplomatic skills",
        careers: &["Mediator", "Diplomat", "Counselor", "Partner in Business", "Team Coordinator"],
        relationship_traits: &["Naturally partnership-oriented", "Diplomatic and sensitive to others", "Seeks harmony in relationships", "Intuitive about partner's needs", "Avoids conflict, may hold back feelings"],
        financial_traits: &["Collaborative approach to finances", "Best financial success through partnerships", "Intuitive about timing in investments", "Careful money manager", "Should balance giving and receiving"],
        health_traits: &["Sensitive digestive system", "Emotional health affects physical", "Benefits from gentle exercise", "May absorb others' energies", "Needs emotional balance for wellbeing"],
        life_challenges: &["Making decisions without excessive input", "Standing up for yourself", "Addressing conflict directly", "Managing emotional sensitivity", "Setting healthy boundaries"],
        life_lessons: &["Cooperation", "Patience", "Diplomacy", "Intuitive listening", "Balance in relationships"],
        lucky_colors: &["Green", "White", "Cream", "Silver", "Peach"],
        lucky_gemstones: &["Moonstone", "Pearl", "Opal", "Rose Quartz", "Selenite"],
        strength: "collaboration",
        attunement: "partnerships",
        planet_short: "Moon",
    },
    // 3
    NumberRecord {
        mulank_meaning: "The Communicator - Expressive, creative, and social. You have natural charisma and artistic abilities.",
        mulank_traits: &["Creative", "Expressive", "Enthusiastic", "Social", "Optimistic"],
        bhagyank_meaning: "The Creator - Your destiny is to express yourself creatively, inspire others, and bring joy to the world.",
        bhagyank_traits: &["Creative expression", "Communication", "Joy", "Inspiration", "Sociability"],
        power_meaning: "Your power lies in creative expression and communication. You can inspire others through your words and artistic talents.",
        planet: "Jupiter",
        planet_influence: "Jupiter brings expansion, optimism, and wisdom. It blesses you with growth opportunities and a philosophical outlook.",
        compatible: &[1, 5, 9],
        incompatible: &[2, 8],
        temperament: "creative and expressive",
        life_path: "self-expression and inspiring joy",
        power_influence: "your creative expression",
        careers: &["Artist", "Writer", "Speaker", "Entertainer", "Creative Director"],
        relationship_traits: &["Charming and expressive in love", "Needs intellectual stimulation", "Communicates feelings openly", "Keeps relationships fun and light", "May be scattered in attention"],
        financial_traits: &["Creative approach to money", "Income often from creative talents", "Optimistic financial attitude", "May spend impulsively on pleasures", "Should develop discipline in savings"],
        health_traits: &["Throat and respiratory focus", "Expression important for health", "Benefits from creative movement", "May neglect consistent self-care", "Needs joy for wellbeing"],
        life_challenges: &["Focusing your creative energy", "Following through on projects", "Balancing expression with listening", "Managing scattered energy", "Disciplining your talents"],
        life_lessons: &["Creative expression", "Joy in life", "Effective communication", "Optimism", "Following through on ideas"],
        lucky_colors: &["Yellow", "Bright Pink", "Magenta", "Peach", "Lilac"],
        lucky_gemstones: &["Yellow Sapphire", "Citrine", "Amber", "Topaz", "Yellow Jade"],
        strength: "creativity",
        attunement: "communication",
        planet_short: "Jupiter",
    },
    // 4
    NumberRecord {
        mulank_meaning: "The Builder - Practical, disciplined, and hardworking. You create solid foundations in all areas of life.",
        mulank_traits: &["Practical", "Organized", "Reliable", "Hard-working", "Systematic"],
        bhagyank_meaning: "The Builder - Your destiny is to create lasting structures, establish order, and provide stability for others.",
        bhagyank_traits: &["Stability", "Organization", "Reliability", "Practicality", "Endurance"],
        power_meaning: "Your power lies in building and organizing. You excel at creating structures and systems that stand the test of time.",
        planet: "Uranus",
        planet_influence: "Uranus brings innovation, originality, and revolutionary thinking. It helps you break free from limitations and embrace new ideas.",
        compatible: &[2, 7, 8],
        incompatible: &[1, 9],
        temperament: "practical and organized",
        life_path: "building solid foundations",
        power_influence: "your organizational talents",
        careers: &["Manager", "Accountant", "Engineer", "Builder", "Systems Analyst"],
        relationship_traits: &["Loyal and stable partner", "Traditional approach to relationships", "Builds relationships slowly but solidly", "Reliable and trustworthy", "May be rigid in expectations"],
        financial_traits: &["Methodical money manager", "Builds wealth gradually and securely", "Conservative investment approach", "Good at budgeting", "Should allow for occasional indulgence"],
        health_traits: &["Strong constitution when balanced", "Skeletal and dental focus", "Benefits from routine exercise", "May work to exhaustion", "Needs regular rest patterns"],
        life_challenges: &["Embracing necessary changes", "Overcoming rigidity", "Finding joy in the process", "Balancing work and play", "Connecting to intuition"],
        life_lessons: &["Building solid foundations", "Order and system", "Patience in process", "Practical wisdom", "Reliability"],
        lucky_colors: &["Green", "Blue", "Brown", "Grey", "Navy"],
        lucky_gemstones: &["Sapphire", "Lapis Lazuli", "Emerald", "Jade", "Green Tourmaline"],
        strength: "stability",
        attunement: "building foundations",
        planet_short: "Uranus",
    },
    // 5
    NumberRecord {
        mulank_meaning: "The Freedom Seeker - Adaptable, adventurous, and versatile. You embrace change and new experiences.",
        mulank_traits: &["Versatile", "Freedom-loving", "Adventurous", "Adaptable", "Progressive"],
        bhagyank_meaning: "The Freedom Seeker - Your destiny is to experience life fully, embrace change, and inspire freedom in others.",
        bhagyank_traits: &["Freedom", "Adaptability", "Versatility", "Adventure", "Experience"],
        power_meaning: "Your power lies in adaptability and experiencing life fully. You bring progressive energy and excitement to any situation.",
        planet: "Mercury",
        planet_influence: "Mercury brings communication skills, versatility, and intelligence. It gives you adaptability and quick thinking.",
        compatible: &[1, 3, 7],
        incompatible: &[6, 8],
        temperament: "adventurous and freedom-loving",
        life_path: "embracing change and adventure",
        power_influence: "your adaptability",
        careers: &["Traveler", "Marketer", "Journalist", "Sales Representative", "Freedom-Based Entrepreneur"],
        relationship_traits: &["Needs freedom in relationships", "Exciting and adventurous partner", "Resists being controlled", "Adaptable to changes", "May struggle with long-term commitment"],
        financial_traits: &["Fluctuating financial patterns", "Money comes and goes with ease", "Versatile income sources", "Adaptable to financial changes", "Should create flexible stability"],
        health_traits: &["Nervous system sensitivity", "Benefits from varied exercise", "May experience digestive issues with restriction", "Needs freedom of movement", "Benefits from nature exposure"],
        life_challenges: &["Creating healthy commitments", "Finding depth in experiences", "Managing restless energy", "Creating sustainable freedom", "Focusing scattered attention"],
        life_lessons: &["Constructive freedom", "Adaptability", "Learning through experience", "Progressive change", "Versatility"],
        lucky_colors: &["Light Blue", "Silver", "White", "Gray", "Turquoise"],
        lucky_gemstones: &["Aquamarine", "Turquoise", "Light Amethyst", "Blue Lace Agate", "Sodalite"],
        strength: "adaptability",
        attunement: "freedom",
        planet_short: "Mercury",
    },
    // 6
    NumberRecord {
        mulank_meaning: "The Nurturer - Responsible, caring, and harmonious. You have a deep sense of duty to others.",
        mulank_traits: &["Responsible", "Caring", "Balanced", "Supportive", "Loving"],
        bhagyank_meaning: "The Nurturer - Your destiny is to care for others, create harmony in your community, and foster responsibility.",
        bhagyank_traits: &["Responsibility", "Love", "Service", "Harmony", "Compassion"],
        power_meaning: "Your power lies in nurturing and responsibility. You excel at caring for others and creating harmonious environments.",
        planet: "Venus",
        planet_influence: "Venus brings harmony, beauty, and love. It enhances your relationships and appreciation for the arts and pleasures of life.",
        compatible: &[2, 8, 9],
        incompatible: &[3, 5],
        temperament: "responsible and nurturing",
        life_path: "nurturing others and creating harmony",
        power_influence: "your nurturing nature",
        careers: &["Teacher", "Counselor", "Healthcare Provider", "Community Organizer", "Designer"],
        relationship_traits: &["Deeply responsible in relationships", "Nurturing and supportive", "Creates harmony at home", "Committed to working things out", "May be overly self-sacrificing"],
        financial_traits: &["Responsible financial approach", "Often financially supports others", "Balance in giving and receiving", "Good at managing home finances", "Should ensure self-care in finances"],
        health_traits: &["Heart and circulation focus", "Nurturing others affects health", "Benefits from balanced nutrition", "May neglect self-care for others", "Needs beauty for wellbeing"],
        life_challenges: &["Avoiding excessive responsibility", "Setting boundaries in relationships", "Balancing giving and receiving", "Releasing perfectionism", "Caring for yourself first"],
        life_lessons: &["Responsible love", "Balanced service", "Creating harmony", "Nurturing without control", "Beauty in life"],
        lucky_colors: &["Pink", "Blue", "Cream", "Peach", "Lavender"],
        lucky_gemstones: &["Emerald", "Pink Tourmaline", "Rose Quartz", "Pink Sapphire", "Jade"],
        strength: "nurturing",
        attunement: "harmony",
        planet_short: "Venus",
    },
    // 7
    NumberRecord {
        mulank_meaning: "The Seeker - Analytical, spiritual, and introspective. You search for deeper meaning and truth.",
        mulank_traits: &["Analytical", "Introspective", "Spiritual", "Perfectionist", "Studious"],
        bhagyank_meaning: "The Mystic - Your destiny is to seek truth, develop wisdom, and understand life's deeper mysteries.",
        bhagyank_traits: &["Analysis", "Understanding", "Spirituality", "Wisdom", "Introspection"],
        power_meaning: "Your power lies in analysis and spiritual insight. You can see beneath the surface and understand deeper truths.",
        planet: "Neptune",
        planet_influence: "Neptune brings spirituality, imagination, and intuition. It connects you to mystical realms and creative inspiration.",
        compatible: &[4, 5, 9],
        incompatible: &[2, 6],
        temperament: "analytical and spiritual",
        life_path: "seeking knowledge and spiritual truth",
        power_influence: "your analytical mind",
        careers: &["Researcher", "Scientist", "Analyst", "Spiritual Teacher", "Investigator"],
        relationship_traits: &["Selective in choosing partners", "Needs intellectual connection", "Values depth over surface attraction", "Appreciates spiritual connection", "May be emotionally reserved"],
        financial_traits: &["Analytical approach to money", "Often unusual sources of income", "Needs meaning in financial pursuits", "May undercharge for value", "Should trust intuition with investments"],
        health_traits: &["Highly sensitive physical system", "Mental health affects physical", "Benefits from meditative movement", "May overthink health issues", "Needs mental peace for wellbeing"],
        life_challenges: &["Translating knowledge to wisdom", "Sharing your insights with others", "Overcoming isolation tendencies", "Grounding spiritual insights", "Trusting your intuition"],
        life_lessons: &["Inner wisdom", "Spiritual connection", "Analysis and understanding", "Faith and trust", "Sacred knowledge"],
        lucky_colors: &["Purple", "Violet", "Silver", "White", "Pastel Blue"],
        lucky_gemstones: &["Amethyst", "Purple Fluorite", "Charoite", "Clear Quartz", "Lepidolite"],
        strength: "analysis",
        attunement: "introspection",
        planet_short: "Neptune",
    },
    // 8
    NumberRecord {
        mulank_meaning: "The Achiever - Ambitious, authoritative, and goal-oriented. You have natural business acumen.",
        mulank_traits: &["Ambitious", "Authoritative", "Goal-oriented", "Practical", "Efficient"],
        bhagyank_meaning: "The Empowered - Your destiny is to achieve material and spiritual abundance, and to use power wisely.",
        bhagyank_traits: &["Achievement", "Abundance", "Authority", "Management", "Manifestation"],
        power_meaning: "Your power lies in manifestation and achievement. You have the ability to create abundance in the material world.",
        planet: "Saturn",
        planet_influence: "Saturn brings discipline, responsibility, and achievement. It helps you build lasting structures and reach ambitious goals.",
        compatible: &[2, 4, 6],
        incompatible: &[1, 3],
        temperament: "ambitious and authoritative",
        life_path: "achieving material success and authority",
        power_influence: "your manifestation power",
        careers: &["Financial Advisor", "Executive", "Manager", "Real Estate Developer", "Business Owner"],
        relationship_traits: &["Power and security in relationships", "Protective of partner", "Generous but expects appreciation", "Goal-oriented approach to love", "May be controlling at times"],
        financial_traits: &["Natural wealth consciousness", "Strong manifestation abilities", "Executive approach to finances", "Good at large-scale money management", "Should balance material and spiritual"],
        health_traits: &["Robust physical energy when aligned", "Back and structural focus", "Benefits from strengthening exercise", "May ignore body's signals", "Needs success-rest balance"],
        life_challenges: &["Using power ethically", "Balancing material and spiritual", "Delegating effectively", "Managing workaholic tendencies", "Releasing control"],
        life_lessons: &["Abundance consciousness", "Ethical power", "Material mastery", "Achievement", "Balance of giving and receiving"],
        lucky_colors: &["Purple", "Dark Blue", "Green", "Gold", "Metallic tones"],
        lucky_gemstones: &["Diamond", "Blue Sapphire", "Lapis Lazuli", "Indigo Tourmaline", "Onyx"],
        strength: "ambition",
        attunement: "material success",
        planet_short: "Saturn",
    },
    // 9
    NumberRecord {
        mulank_meaning: "The Humanitarian - Compassionate, selfless, and idealistic. You have a universal perspective on life.",
        mulank_traits: &["Compassionate", "Idealistic", "Generous", "Universal", "Artistic"],
        bhagyank_meaning: "The Humanitarian - Your destiny is to serve humanity, offer compassion, and embody universal love.",
        bhagyank_traits: &["Compassion", "Universality", "Selflessness", "Completion", "Philanthropy"],
        power_meaning: "Your power lies in compassion and universal understanding. You can connect with diverse people and serve humanity.",
        planet: "Mars",
        planet_influence: "Mars brings energy, courage, and determination. It empowers you to take action and overcome challenges with force of will.",
        compatible: &[1, 3, 6, 7],
        incompatible: &[4, 5],
        temperament: "compassionate and idealistic",
        life_path: "serving humanity with compassion",
        power_influence: "your humanitarian perspective",
        careers: &["Humanitarian", "Social Worker", "Artist", "Healer", "International Relations"],
        relationship_traits: &["Universal love perspective", "Compassionate and forgiving", "Idealistic in relationships", "Seeks depth and meaning", "May prioritize others over relationship"],
        financial_traits: &["Humanitarian approach to wealth", "Money seen as energy for good", "Often receives unexpected financial support", "Generous with resources", "Should accept abundance as tool for service"],
        health_traits: &["All body systems interconnected", "Universal health perspective", "Benefits from compassionate self-care", "May sacrifice health for service", "Needs alignment with higher purpose"],
        life_challenges: &["Setting practical boundaries", "Completing life cycles", "Releasing attachment to outcomes", "Accepting human limitations", "Balancing idealism with reality"],
        life_lessons: &["Universal compassion", "Selfless service", "Letting go", "Forgiveness", "Higher perspective"],
        lucky_colors: &["Gold", "Red", "Orange", "Rose", "Purple"],
        lucky_gemstones: &["Red Coral", "Ruby", "Garnet", "Rhodonite", "Red Jasper"],
        strength: "compassion",
        attunement: "universal compassion",
        planet_short: "Mars",
    },
    // 11
    NumberRecord {
        mulank_meaning: "The Intuitive - Highly intuitive, spiritual, and inspired. You have unique insights and visionary abilities.",
        mulank_traits: &["Intuitive", "Inspired", "Idealistic", "Sensitive", "Visionary"],
        bhagyank_meaning: "The Illuminator - Your destiny is to inspire spiritual awareness, share intuitive insights, and illuminate paths for others.",
        bhagyank_traits: &["Inspiration", "Illumination", "Intuition", "Idealism", "Spirituality"],
        power_meaning: "Your power lies in spiritual insight and inspiration. You can access higher knowledge and illuminate paths for others.",
        planet: "Sun and Moon",
        planet_influence: "The combined influence of Sun and Moon brings illuminated intuition, balancing conscious and subconscious, light and shadow.",
        compatible: &[2, 4, 11, 22],
        incompatible: &[3, 7],
        temperament: "intuitive and inspired",
        life_path: "inspiring others with spiritual insights",
        power_influence: "your intuitive insights",
        careers: &["Spiritual Guide", "Inspirational Speaker", "Counselor", "Visionary Leader", "Intuitive Healer"],
        relationship_traits: &["Seeks spiritual connection", "Intuitive about relationship dynamics", "Idealistic expectations", "Needs space for spiritual growth", "May be overly sensitive"],
        financial_traits: &["Intuitive financial decisions", "Money may come through inspirational work", "Fluctuating relationship with material world", "Needs financial security for peace of mind", "Should trust inner guidance with money"],
        health_traits: &["Sensitive nervous system", "Spiritual health affects physical", "Benefits from energy practices", "May be affected by environmental energies", "Needs grounding practices"],
        life_challenges: &["Grounding spiritual insights", "Managing high sensitivity", "Balancing idealism with practicality", "Translating inspiration to action", "Maintaining physical wellbeing"],
        life_lessons: &["Spiritual awakening", "Inspired leadership", "Heightened intuition", "Illuminating others", "Idealism with practicality"],
        lucky_colors: &["White", "Ivory", "Silver", "Pale Blue", "Lavender"],
        lucky_gemstones: &["Clear Quartz", "Selenite", "Herkimer Diamond", "Labradorite", "Moonstone"],
        strength: "intuition",
        attunement: "spiritual insight",
        planet_short: "Sun/Moon",
    },
    // 22
    NumberRecord {
        mulank_meaning: "The Master Builder - Practical visionary, powerful, and capable of manifesting grand ideas into reality.",
        mulank_traits: &["Practical visionary", "Powerful", "Ambitious", "Disciplined", "Influential"],
        bhagyank_meaning: "The Master Builder - Your destiny is to transform dreams into reality on a large scale, benefiting many people.",
        bhagyank_traits: &["Manifestation", "Practicality", "Vision", "Leadership", "Empowerment"],
        power_meaning: "Your power lies in making dreams reality on a large scale. You can manifest great works that benefit many people.",
        planet: "Uranus and Neptune",
        planet_influence: "The combined influence of Uranus and Neptune brings practical mysticism, allowing you to manifest spiritual visions in reality.",
        compatible: &[4, 11, 22, 33],
        incompatible: &[1, 9],
        temperament: "visionary and masterful",
        life_path: "building large-scale, beneficial projects",
        power_influence: "your masterful building skills",
        careers: &["Architect", "City Planner", "Business Magnate", "Organizational Leader", "Foundation Director"],
        relationship_traits: &["Builds long-lasting relationships", "Practical approach to relationship challenges", "Creates secure foundation", "Visionary about family future", "May be workaholic"],
        financial_traits: &["Master builder of wealth", "Can create large-scale financial structures", "Practical and visionary with money", "Potential for significant abundance", "Should use wealth for greater good"],
        health_traits: &["Strong physical stamina potential", "Practical approach to health needed", "Benefits from structured exercise", "May overextend physically", "Needs balance between vision and body care"],
        life_challenges: &["Manifesting your vision practically", "Managing stress of large responsibilities", "Delegating effectively", "Balancing material mastery with spiritual purpose", "Maintaining personal relationships"],
        life_lessons: &["Manifesting visions", "Master building", "Practical spirituality", "Large-scale service", "Material and spiritual integration"],
        lucky_colors: &["Blue", "Gold", "Yellow", "Orange", "Brown"],
        lucky_gemstones: &["Amber", "Yellow Citrine", "Blue Sapphire", "Golden Topaz", "Azurite"],
        strength: "mastery",
        attunement: "manifestation",
        planet_short: "Uranus/Neptune",
    },
    // 33
    NumberRecord {
        mulank_meaning: "The Master Teacher - Highly compassionate, nurturing, and spiritual. You have a profound ability to uplift others.",
        mulank_traits: &["Altruistic", "Spiritual", "Compassionate", "Nurturing", "Inspirational"],
        bhagyank_meaning: "The Master Teacher - Your destiny is to uplift humanity through compassionate service and spiritual guidance.",
        bhagyank_traits: &["Compassion", "Healing", "Teaching", "Nurturing", "Enlightenment"],
        power_meaning: "Your power lies in spiritual teaching and healing. You can uplift others through compassionate service and wisdom.",
        planet: "Jupiter and Venus",
        planet_influence: "The combined influence of Jupiter and Venus brings expansive love, allowing you to nurture and teach with compassion and wisdom.",
        compatible: &[6, 9, 22, 33],
        incompatible: &[5, 8],
        temperament: "compassionate and enlightened",
        life_path: "uplifting humanity through teaching and healing",
        power_influence: "your enlightened teaching",
        careers: &["Spiritual Teacher", "Healer", "Philanthropist", "Community Leader", "Educational Innovator"],
        relationship_traits: &["Deeply compassionate partner", "Nurturing without conditions", "Teaching and guiding energy", "Selfless in giving love", "May neglect own needs for partner"],
        financial_traits: &["Money as tool for service", "Abundance through helping others", "Detachment from pure materialism", "Teaching others about abundance", "Should accept prosperity as divine support"],
        health_traits: &["Compassionate body awareness", "Teaching others affects health", "Benefits from gentle movement", "May neglect self for others' care", "Needs self-nurturing practices"],
        life_challenges: &["Setting appropriate boundaries", "Avoiding martyr syndrome", "Self-care while serving others", "Receiving as well as giving", "Maintaining personal identity"],
        life_lessons: &["Compassionate teaching", "Spiritual nurturing", "Selfless love", "Higher awareness", "Healing through presence"],
        lucky_colors: &["Pink", "Turquoise", "Light Purple", "White", "Aquamarine"],
        lucky_gemstones: &["Pink Tourmaline", "Kunzite", "Rose Quartz", "Pink Opal", "Pink Sapphire"],
        strength: "teaching",
        attunement: "spiritual teaching",
        planet_short: "Jupiter/Venus",
    },
];

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_tables_cover_closed_domain() {
        let tables = NumerologyTables::new();
        assert_eq!(tables.len(), 12);
        for number in DigitalRoot::ALL {
            assert!(tables.get(number).is_some(), "missing row for {}", number);
        }
    }

    #[test]
    fn test_rows_are_keyed_correctly() {
        let tables = NumerologyTables::global();
        let four = DigitalRoot::try_from(4).unwrap();
        let eleven = DigitalRoot::try_from(11).unwrap();

        assert_eq!(tables.get(four).unwrap().planet, "Uranus");
        assert_eq!(tables.get(eleven).unwrap().planet, "Sun and Moon");
        assert_eq!(tables.get(eleven).unwrap().compatible.to_vec(), vec![2, 4, 11, 22]);
    }

    #[test]
    fn test_compatibility_lists_stay_in_domain() {
        for number in DigitalRoot::ALL {
            let row = NumerologyTables::global().get(number).unwrap();
            for n in row.compatible.iter().chain(row.incompatible.iter()) {
                assert!(DigitalRoot::try_from(*n).is_ok());
            }
        }
    }

    #[test]
    fn test_every_list_has_five_entries() {
        for number in DigitalRoot::ALL {
            let row = NumerologyTables::global().get(number).unwrap();
            for list in [
                row.mulank_traits,
                row.bhagyank_traits,
                row.careers,
                row.relationship_traits,
                row.financial_traits,
                row.health_traits,
                row.life_challenges,
                row.life_lessons,
                row.lucky_colors,
                row.lucky_gemstones,
            ] {
                assert_eq!(list.len(), 5, "row {} has a short list", number);
            }
        }
    }

    #[test]
    fn test_empty_registry() {
        let tables = NumerologyTables::empty();
        assert!(tables.is_empty());
        assert!(tables.get(DigitalRoot::ALL[0]).is_none());
    }

    #[test]
    fn test_register_replaces_row() {
        let mut tables = NumerologyTables::new();
        let one = DigitalRoot::ALL[0];
        let mut row = tables.get(one).unwrap().clone();
        row.planet = "Vulcan";
        tables.register(one, row);

        assert_eq!(tables.len(), 12);
        assert_eq!(tables.get(one).unwrap().planet, "Vulcan");
        // The global instance is untouched
        assert_eq!(NumerologyTables::global().get(one).unwrap().planet, "Sun");
    }
}
