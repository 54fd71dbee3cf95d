//! Entry and Player data structures. Display metadata only; scheduling works on entry indices.

use serde::{Deserialize, Serialize};

/// A person taking part in an entry.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// What kind of participant unit an entry is.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entryType", rename_all = "camelCase")]
pub enum EntryKind {
    Singles { player: Player },
    Doubles { players: [Player; 2] },
    #[serde(rename_all = "camelCase")]
    Team { team_name: String, players: Vec<Player> },
}

/// A participant unit: single player, pair, or team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(flatten)]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seeding: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
}

impl Entry {
    pub fn singles(name: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Singles {
                player: Player::new(name),
            },
            seeding: None,
            club: None,
        }
    }

    pub fn doubles(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Doubles {
                players: [Player::new(first), Player::new(second)],
            },
            seeding: None,
            club: None,
        }
    }

    pub fn team(team_name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            kind: EntryKind::Team {
                team_name: team_name.into(),
                players,
            },
            seeding: None,
            club: None,
        }
    }

    /// Display name: player name, "A / B" for doubles, or the team name.
    /// Doubles with both names blank render as an empty string.
    pub fn name(&self) -> String {
        match &self.kind {
            EntryKind::Singles { player } => player.name.clone(),
            EntryKind::Doubles { players: [a, b] } => {
                if a.name.is_empty() && b.name.is_empty() {
                    String::new()
                } else {
                    format!("{} / {}", a.name, b.name)
                }
            }
            EntryKind::Team { team_name, .. } => team_name.clone(),
        }
    }
}
