//! Player action definitions

use serde::{Deserialize, Serialize};

use crate::timeline::Category;

/// The three things a player can spend an action point on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Vote,
    Talk,
    Post,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Vote, ActionKind::Talk, ActionKind::Post];

    /// Timeline category of the entry the action logs
    pub fn category(&self) -> Category {
        match self {
            ActionKind::Vote => Category::Action,
            ActionKind::Talk => Category::Friend,
            ActionKind::Post => Category::Sns,
        }
    }

    /// Action points consumed
    pub fn cost(&self) -> u32 {
        1
    }
}

impl std::str::FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vote" => Ok(ActionKind::Vote),
            "talk" => Ok(ActionKind::Talk),
            "post" => Ok(ActionKind::Post),
            other => Err(format!("unknown action: {}", other)),
        }
    }
}
