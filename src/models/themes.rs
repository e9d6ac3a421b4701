//! Birthday decoration themes, keyed by the age of the birthday person.
//! Static reference data; the booking payload carries only the theme id.

/// Fixed age ranges used to filter decoration themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Children,
    Teenagers,
    Adults,
    Seniors,
}

impl AgeBand {
    pub fn from_age(age: u32) -> AgeBand {
        match age {
            1..=12 => AgeBand::Children,
            13..=17 => AgeBand::Teenagers,
            18..=59 => AgeBand::Adults,
            _ => AgeBand::Seniors,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Children => "Children (1-12 years)",
            AgeBand::Teenagers => "Teenagers (13-17 years)",
            AgeBand::Adults => "Adults (18-59 years)",
            AgeBand::Seniors => "Seniors (60+ years)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayTheme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: i64,
    pub age_band: AgeBand,
}

pub const BIRTHDAY_THEMES: [BirthdayTheme; 16] = [
    // Children (1-12 years)
    BirthdayTheme {
        id: "children-colorful-balloons",
        name: "Colorful Balloon Paradise",
        description: "Bright colorful balloons, streamers, and fun decorations",
        price: 75,
        age_band: AgeBand::Children,
    },
    BirthdayTheme {
        id: "children-cartoon-theme",
        name: "Cartoon Character Theme",
        description: "Popular cartoon character decorations and themed accessories",
        price: 85,
        age_band: AgeBand::Children,
    },
    BirthdayTheme {
        id: "children-princess-theme",
        name: "Princess/Prince Theme",
        description: "Royal decorations with crowns, tiaras, and elegant touches",
        price: 90,
        age_band: AgeBand::Children,
    },
    BirthdayTheme {
        id: "children-superhero-theme",
        name: "Superhero Adventure",
        description: "Action-packed superhero decorations and themed elements",
        price: 85,
        age_band: AgeBand::Children,
    },
    // Teenagers (13-17 years)
    BirthdayTheme {
        id: "teenagers-modern-neon",
        name: "Modern Neon Lights",
        description: "LED neon decorations with contemporary styling",
        price: 95,
        age_band: AgeBand::Teenagers,
    },
    BirthdayTheme {
        id: "teenagers-music-theme",
        name: "Music & Entertainment",
        description: "Music-themed decorations with disco elements",
        price: 100,
        age_band: AgeBand::Teenagers,
    },
    BirthdayTheme {
        id: "teenagers-social-media",
        name: "Social Media Vibes",
        description: "Instagram-worthy decorations with photo props",
        price: 90,
        age_band: AgeBand::Teenagers,
    },
    BirthdayTheme {
        id: "teenagers-gaming-theme",
        name: "Gaming Paradise",
        description: "Gaming-themed decorations and LED lighting",
        price: 95,
        age_band: AgeBand::Teenagers,
    },
    // Adults (18-59 years)
    BirthdayTheme {
        id: "adults-elegant-gold",
        name: "Elegant Gold & Black",
        description: "Sophisticated gold and black decorations with premium touches",
        price: 120,
        age_band: AgeBand::Adults,
    },
    BirthdayTheme {
        id: "adults-champagne-luxury",
        name: "Champagne Luxury",
        description: "Luxurious champagne-themed decorations with crystal accents",
        price: 135,
        age_band: AgeBand::Adults,
    },
    BirthdayTheme {
        id: "adults-romantic-roses",
        name: "Romantic Rose Garden",
        description: "Romantic rose decorations with ambient lighting",
        price: 125,
        age_band: AgeBand::Adults,
    },
    BirthdayTheme {
        id: "adults-corporate-chic",
        name: "Corporate Chic",
        description: "Professional yet celebratory decorations for business occasions",
        price: 110,
        age_band: AgeBand::Adults,
    },
    // Seniors (60+ years)
    BirthdayTheme {
        id: "seniors-classic-elegance",
        name: "Classic Elegance",
        description: "Timeless elegant decorations with refined touches",
        price: 115,
        age_band: AgeBand::Seniors,
    },
    BirthdayTheme {
        id: "seniors-vintage-charm",
        name: "Vintage Charm",
        description: "Vintage-inspired decorations with nostalgic elements",
        price: 120,
        age_band: AgeBand::Seniors,
    },
    BirthdayTheme {
        id: "seniors-garden-party",
        name: "Garden Party Theme",
        description: "Fresh floral decorations with garden-inspired elements",
        price: 125,
        age_band: AgeBand::Seniors,
    },
    BirthdayTheme {
        id: "seniors-milestone-celebration",
        name: "Milestone Celebration",
        description: "Special milestone decorations for significant birthdays",
        price: 130,
        age_band: AgeBand::Seniors,
    },
];

/// Themes offered for a given birthday person's age.
pub fn themes_for_age(age: u32) -> Vec<&'static BirthdayTheme> {
    let band = AgeBand::from_age(age);
    BIRTHDAY_THEMES
        .iter()
        .filter(|theme| theme.age_band == band)
        .collect()
}

pub fn theme_by_id(id: &str) -> Option<&'static BirthdayTheme> {
    BIRTHDAY_THEMES.iter().find(|theme| theme.id == id)
}
