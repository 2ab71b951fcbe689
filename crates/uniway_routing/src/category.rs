use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Academic,
    Dining,
    Hostels,
    Recreation,
    Admin,
    Medical,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Academic,
        Category::Dining,
        Category::Hostels,
        Category::Recreation,
        Category::Admin,
        Category::Medical,
        Category::Other,
    ];
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::Academic => "academic",
                Category::Dining => "dining",
                Category::Hostels => "hostels",
                Category::Recreation => "recreation",
                Category::Admin => "admin",
                Category::Medical => "medical",
                Category::Other => "other",
            }
        )
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "academic" => Ok(Category::Academic),
            "dining" | "food" => Ok(Category::Dining),
            "hostels" | "hostel" | "residential" => Ok(Category::Hostels),
            "recreation" | "sports" => Ok(Category::Recreation),
            "admin" => Ok(Category::Admin),
            "medical" => Ok(Category::Medical),
            "other" => Ok(Category::Other),
            other => Err(format!("Unknown category {other}")),
        }
    }
}
