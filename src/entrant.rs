use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a seeded entrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntrantId(pub u32);

impl fmt::Display for EntrantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntrantId {
    fn from(id: u32) -> Self {
        EntrantId(id)
    }
}

/// One of the 64 teams in the tournament.
///
/// The rank is the 0-based seed within the entrant's bracket quarter and is
/// only used for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    pub id: EntrantId,
    pub rank: u8,

    /// City or school, e.g. "Oregon"
    pub home: String,

    /// Team nickname, e.g. "Ducks"
    pub name: String,
}

impl Entrant {
    pub fn new(id: u32, rank: u8, home: impl Into<String>, name: impl Into<String>) -> Self {
        Entrant {
            id: EntrantId(id),
            rank,
            home: home.into(),
            name: name.into(),
        }
    }

    /// Home and nickname joined, e.g. "Oregon Ducks"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.home, self.name)
    }

    /// 1-based seed as printed on a bracket
    pub fn seed(&self) -> u8 {
        self.rank + 1
    }
}

impl fmt::Display for Entrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.seed(), self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let e = Entrant::new(7, 0, "Oregon", "Ducks");
        assert_eq!(e.full_name(), "Oregon Ducks");
        assert_eq!(e.seed(), 1);
        assert_eq!(e.to_string(), "(1) Oregon Ducks");
        assert_eq!(e.id, EntrantId(7));
    }
}
