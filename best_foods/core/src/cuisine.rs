use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the cuisine labels showcased on the landing page.
///
/// Declaration order is display order; `Ord` follows it so ordered maps keyed
/// by cuisine iterate the way the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cuisine {
    Indian,
    American,
    Chinese,
    Italian,
    Mexican,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown cuisine: {0}")]
pub struct CuisineParseError(pub String);

impl Cuisine {
    /// Every cuisine, in display order.
    pub const ALL: [Cuisine; 5] = [
        Cuisine::Indian,
        Cuisine::American,
        Cuisine::Chinese,
        Cuisine::Italian,
        Cuisine::Mexican,
    ];

    /// The label sent to the API and shown as the section heading.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Indian => "Indian",
            Cuisine::American => "American",
            Cuisine::Chinese => "Chinese",
            Cuisine::Italian => "Italian",
            Cuisine::Mexican => "Mexican",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cuisine {
    type Err = CuisineParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cuisine::ALL
            .into_iter()
            .find(|cuisine| cuisine.as_str() == s)
            .ok_or_else(|| CuisineParseError(s.to_string()))
    }
}
