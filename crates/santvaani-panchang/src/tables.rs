//! Const lookup tables for the static Panchang generator.
//!
//! Name tables follow the traditional sequences (15 tithis per paksha,
//! 27 nakshatras, 27 yogas, 11 karanas). The festival table is a curated
//! list of known 2025-2026 dates.

/// Lunar-day names, one paksha (fortnight). Index 14 is Purnima for the
/// waxing half; the generator swaps it for Amavasya in the waning half.
pub const TITHIS: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

/// The 27 nakshatras in traditional order.
pub const NAKSHATRAS: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// The 27 yogas.
pub const YOGAS: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyana",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// The 11 karanas (7 movable + 4 fixed).
pub const KARANAS: [&str; 11] = [
    "Bava",
    "Balava",
    "Kaulava",
    "Taitila",
    "Garaja",
    "Vanija",
    "Vishti",
    "Shakuni",
    "Chatushpada",
    "Naga",
    "Kimstughna",
];

/// Rahukaal windows per weekday, Monday..Sunday, IST.
pub const RAHUKAAL_BY_WEEKDAY: [&str; 7] = [
    "07:30 - 09:00", // Monday
    "15:00 - 16:30", // Tuesday
    "12:00 - 13:30", // Wednesday
    "13:30 - 15:00", // Thursday
    "10:30 - 12:00", // Friday
    "09:00 - 10:30", // Saturday
    "16:30 - 18:00", // Sunday
];

/// Known festival dates for 2025-2026: (name, ISO date, kind).
pub const FESTIVALS: [(&str, &str, &str); 22] = [
    ("Krishna Janmashtami", "2025-08-16", "major"),
    ("Ganesh Chaturthi", "2025-08-27", "major"),
    ("Navratri Begins", "2025-09-22", "major"),
    ("Dussehra", "2025-10-02", "major"),
    ("Karwa Chauth", "2025-10-09", "vrat"),
    ("Dhanteras", "2025-10-18", "major"),
    ("Diwali", "2025-10-20", "major"),
    ("Govardhan Puja", "2025-10-21", "major"),
    ("Bhai Dooj", "2025-10-23", "major"),
    ("Chhath Puja", "2025-10-27", "major"),
    ("Kartik Purnima", "2025-11-05", "seasonal"),
    ("Gita Jayanti", "2025-12-01", "jayanti"),
    ("Makar Sankranti", "2026-01-14", "seasonal"),
    ("Vasant Panchami", "2026-01-23", "seasonal"),
    ("Maha Shivratri", "2026-02-15", "major"),
    ("Holi", "2026-03-04", "major"),
    ("Ram Navami", "2026-03-26", "major"),
    ("Hanuman Jayanti", "2026-04-02", "jayanti"),
    ("Guru Purnima", "2026-07-29", "jayanti"),
    ("Raksha Bandhan", "2026-08-28", "major"),
    ("Krishna Janmashtami", "2026-09-04", "major"),
    ("Ganesh Chaturthi", "2026-09-14", "major"),
];

/// Description/significance lookup, matched by substring against the
/// festival name. Falls back to a generic line when nothing matches.
pub const FESTIVAL_INFO: [(&str, &str, &str); 12] = [
    (
        "Diwali",
        "The festival of lights celebrating the return of Lord Rama to Ayodhya.",
        "Victory of light over darkness and good over evil.",
    ),
    (
        "Holi",
        "The festival of colors welcoming spring.",
        "Triumph of devotion, remembered through Prahlada and Holika.",
    ),
    (
        "Navratri",
        "Nine nights of worship of the Divine Mother in her nine forms.",
        "Shakti, discipline, and inner purification.",
    ),
    (
        "Dussehra",
        "Celebrates Lord Rama's victory over Ravana.",
        "Righteousness prevails over arrogance.",
    ),
    (
        "Janmashtami",
        "Birth anniversary of Lord Krishna.",
        "Divine love and the teachings of the Bhagavad Gita.",
    ),
    (
        "Shivratri",
        "The great night of Lord Shiva, observed with fasting and vigil.",
        "Overcoming darkness and ignorance within.",
    ),
    (
        "Ganesh",
        "Welcomes Lord Ganesha, remover of obstacles.",
        "Auspicious beginnings and wisdom.",
    ),
    (
        "Hanuman",
        "Birth anniversary of Lord Hanuman.",
        "Strength, devotion, and selfless service.",
    ),
    (
        "Ram Navami",
        "Birth anniversary of Lord Rama.",
        "The ideal of dharma in human form.",
    ),
    (
        "Raksha Bandhan",
        "Celebration of the bond between brothers and sisters.",
        "Protection, affection, and duty.",
    ),
    (
        "Sankranti",
        "Sun's transition into Capricorn; kite-flying and harvest gratitude.",
        "New beginnings and the northward journey of the sun.",
    ),
    (
        "Chhath",
        "Ancient worship of Surya, the sun god, at the riverbank.",
        "Gratitude, austerity, and purity.",
    ),
];

/// Look up (description, significance) for a festival name.
pub fn festival_info(name: &str) -> (&'static str, &'static str) {
    for (key, description, significance) in FESTIVAL_INFO {
        if name.contains(key) {
            return (description, significance);
        }
    }
    (
        "A sacred day in the Hindu calendar.",
        "A day for devotion, reflection, and seva.",
    )
}
