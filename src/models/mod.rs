use std::fmt::Display;

/// One of the eight mood categories the frontend offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Adventurous,
    Comforting,
    Energizing,
    Romantic,
    Cozy,
    Festive,
    Indulgent,
    Refreshing,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Adventurous,
        Mood::Comforting,
        Mood::Energizing,
        Mood::Romantic,
        Mood::Cozy,
        Mood::Festive,
        Mood::Indulgent,
        Mood::Refreshing,
    ];

    /// Case-insensitive lookup. Unknown strings are not an error: the
    /// recommendation prompt forwards them verbatim.
    pub fn parse(s: &str) -> Option<Mood> {
        match s.trim().to_lowercase().as_str() {
            "adventurous" => Some(Mood::Adventurous),
            "comforting" => Some(Mood::Comforting),
            "energizing" => Some(Mood::Energizing),
            "romantic" => Some(Mood::Romantic),
            "cozy" => Some(Mood::Cozy),
            "festive" => Some(Mood::Festive),
            "indulgent" => Some(Mood::Indulgent),
            "refreshing" => Some(Mood::Refreshing),
            _ => None,
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mood::Adventurous => "Adventurous",
            Mood::Comforting => "Comforting",
            Mood::Energizing => "Energizing",
            Mood::Romantic => "Romantic",
            Mood::Cozy => "Cozy",
            Mood::Festive => "Festive",
            Mood::Indulgent => "Indulgent",
            Mood::Refreshing => "Refreshing",
        };
        write!(f, "{}", name)
    }
}

/// Canonical display form of a mood string: known moods get their
/// title-cased name, anything else passes through untouched
pub fn canonical_mood(raw: &str) -> String {
    Mood::parse(raw)
        .map(|m| m.to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Translation target languages supported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Spanish,
    French,
    German,
    Romanian,
    English,
}

impl Language {
    pub fn parse(s: &str) -> Option<Language> {
        match s.trim().to_lowercase().as_str() {
            "spanish" => Some(Language::Spanish),
            "french" => Some(Language::French),
            "german" => Some(Language::German),
            "romanian" => Some(Language::Romanian),
            "english" => Some(Language::English),
            _ => None,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Romanian => "Romanian",
            Language::English => "English",
        };
        write!(f, "{}", name)
    }
}

/// The nine labeled fields a recommendation is expected to carry,
/// each mapped to the emoji the UI shows in front of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationField {
    Summary,
    Phone,
    Address,
    Moods,
    Highlight,
    Rating,
    Hours,
    Price,
    PopularItems,
}

impl RecommendationField {
    pub const ALL: [RecommendationField; 9] = [
        RecommendationField::Summary,
        RecommendationField::Phone,
        RecommendationField::Address,
        RecommendationField::Moods,
        RecommendationField::Highlight,
        RecommendationField::Rating,
        RecommendationField::Hours,
        RecommendationField::Price,
        RecommendationField::PopularItems,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecommendationField::Summary => "Summary",
            RecommendationField::Phone => "Phone",
            RecommendationField::Address => "Address",
            RecommendationField::Moods => "Moods",
            RecommendationField::Highlight => "Highlight",
            RecommendationField::Rating => "Rating",
            RecommendationField::Hours => "Hours",
            RecommendationField::Price => "Price",
            RecommendationField::PopularItems => "Popular Items",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RecommendationField::Summary => "📝",
            RecommendationField::Phone => "📞",
            RecommendationField::Address => "📍",
            RecommendationField::Moods => "😊",
            RecommendationField::Highlight => "✅",
            RecommendationField::Rating => "⭐",
            RecommendationField::Hours => "🕒",
            RecommendationField::Price => "💰",
            RecommendationField::PopularItems => "🍽️",
        }
    }

    /// Matches a response line against the known field labels.
    ///
    /// Only the text before the first colon is considered, matching is
    /// case-insensitive, and markdown bold markers around the label are
    /// ignored.
    pub fn from_line(line: &str) -> Option<RecommendationField> {
        let label_part = match line.split_once(':') {
            Some((before, _)) => before,
            None => line,
        };
        let normalized = label_part.replace('*', "").to_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|field| normalized.contains(&field.label().to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_parse_case_insensitive() {
        assert_eq!(Mood::parse("cozy"), Some(Mood::Cozy));
        assert_eq!(Mood::parse("COZY"), Some(Mood::Cozy));
        assert_eq!(Mood::parse(" Adventurous "), Some(Mood::Adventurous));
    }

    #[test]
    fn test_mood_parse_unknown() {
        assert_eq!(Mood::parse("hangry"), None);
        assert_eq!(Mood::parse(""), None);
    }

    #[test]
    fn test_all_moods_round_trip_through_display() {
        for mood in Mood::ALL {
            assert_eq!(Mood::parse(&mood.to_string()), Some(mood));
        }
    }

    #[test]
    fn test_canonical_mood_title_cases_known_moods() {
        assert_eq!(canonical_mood("festive"), "Festive");
        assert_eq!(canonical_mood("ROMANTIC"), "Romantic");
    }

    #[test]
    fn test_canonical_mood_passes_unknown_through() {
        assert_eq!(canonical_mood("hangry"), "hangry");
    }

    #[test]
    fn test_language_parse() {
        assert_eq!(Language::parse("Spanish"), Some(Language::Spanish));
        assert_eq!(Language::parse("english"), Some(Language::English));
        assert_eq!(Language::parse("Klingon"), None);
    }

    #[test]
    fn test_field_from_line_plain_label() {
        assert_eq!(
            RecommendationField::from_line("Summary: A cozy BYOB in Fishtown"),
            Some(RecommendationField::Summary)
        );
    }

    #[test]
    fn test_field_from_line_bold_label() {
        assert_eq!(
            RecommendationField::from_line("**Popular Items**: Cacio e pepe"),
            Some(RecommendationField::PopularItems)
        );
    }

    #[test]
    fn test_field_from_line_case_insensitive() {
        assert_eq!(
            RecommendationField::from_line("RATING: 4.5 stars"),
            Some(RecommendationField::Rating)
        );
    }

    #[test]
    fn test_field_from_line_ignores_text_after_colon() {
        // "Summary" in the value must not trigger a match
        assert_eq!(
            RecommendationField::from_line("Note: see the Summary above"),
            None
        );
    }

    #[test]
    fn test_field_from_line_unrecognized() {
        assert_eq!(RecommendationField::from_line("Just some prose"), None);
    }

    #[test]
    fn test_every_field_has_a_distinct_emoji() {
        let emojis: std::collections::HashSet<&str> =
            RecommendationField::ALL.iter().map(|f| f.emoji()).collect();
        assert_eq!(emojis.len(), 9);
    }
}
