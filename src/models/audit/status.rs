use serde::{Deserialize, Serialize};
use std::fmt;

// Red/amber/green severity of a check
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RagStatus {
    Green,
    Amber,
    Red,
}

impl RagStatus {
    /// Ranking weight: red 3, amber 2, green 1.
    pub fn severity(self) -> u8 {
        match self {
            RagStatus::Red => 3,
            RagStatus::Amber => 2,
            RagStatus::Green => 1,
        }
    }
}

impl fmt::Display for RagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            RagStatus::Green => "green",
            RagStatus::Amber => "amber",
            RagStatus::Red => "red",
        };
        write!(f, "{}", status_str)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effort {
    S,
    M,
    L,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Impact {
    Low,
    Med,
    High,
}

impl Impact {
    pub fn weight(self) -> u8 {
        match self {
            Impact::High => 3,
            Impact::Med => 2,
            Impact::Low => 1,
        }
    }
}

// The five scored areas of a site
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Speed,
    #[serde(rename = "SEO")]
    Seo,
    Conversion,
    Trust,
    Visibility,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Speed,
        Category::Seo,
        Category::Conversion,
        Category::Trust,
        Category::Visibility,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Speed => "Speed",
            Category::Seo => "SEO",
            Category::Conversion => "Conversion",
            Category::Trust => "Trust",
            Category::Visibility => "Visibility",
        }
    }

    /// Lower-case tag used in leak lists.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Speed => "speed",
            Category::Seo => "seo",
            Category::Conversion => "conversion",
            Category::Trust => "trust",
            Category::Visibility => "visibility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    Heuristic,
    Hybrid,
}
