use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Subject areas the generator picks from, each with example sub-topics that
/// ground the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Science,
    History,
    Geography,
    Technology,
    Health,
    Literature,
    Arts,
    SocialStudies,
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::Science,
        Topic::History,
        Topic::Geography,
        Topic::Technology,
        Topic::Health,
        Topic::Literature,
        Topic::Arts,
        Topic::SocialStudies,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Topic::Science => "science",
            Topic::History => "history",
            Topic::Geography => "geography",
            Topic::Technology => "technology",
            Topic::Health => "health",
            Topic::Literature => "literature",
            Topic::Arts => "arts",
            Topic::SocialStudies => "social studies",
        }
    }

    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            Topic::Science => &["animals", "space", "weather"],
            Topic::History => &["ancient civilizations", "important events"],
            Topic::Geography => &["countries", "landforms", "ecosystems"],
            Topic::Technology => &["inventions", "computers", "robots"],
            Topic::Health => &["nutrition", "exercise", "body systems"],
            Topic::Literature => &["famous stories", "authors"],
            Topic::Arts => &["music", "painting", "dance"],
            Topic::SocialStudies => &["cultures", "communities"],
        }
    }

    /// e.g. `science (e.g., animals, space, weather)`
    pub fn prompt_label(&self) -> String {
        format!("{} (e.g., {})", self.name(), self.examples().join(", "))
    }

    /// Pick a topic uniformly at random.
    pub fn random() -> Topic {
        *Topic::ALL.choose(&mut thread_rng()).unwrap_or(&Topic::Science)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Topic::ALL
            .iter()
            .copied()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Topic::ALL.iter().map(|t| t.name()).collect();
                format!("unknown topic '{}', expected one of: {}", s, names.join(", "))
            })
    }
}
