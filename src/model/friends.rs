//! Friends (NPCs) the player can talk to

use serde::{Deserialize, Serialize};

use crate::core::rng::RandomSource;
use crate::core::types::FriendId;
use crate::model::opinion::{OpinionShift, PublicOpinion};

/// Number of friends in a fresh roster
pub const ROSTER_SIZE: usize = 3;

const FRIEND_NAMES: [&str; ROSTER_SIZE] = ["Friend A", "Friend B", "Friend C"];

/// An NPC with its own political leaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    #[serde(flatten)]
    leaning: PublicOpinion,
}

impl Friend {
    pub fn new(name: impl Into<String>, leaning: PublicOpinion) -> Self {
        Self {
            id: FriendId::new(),
            name: name.into(),
            leaning,
        }
    }

    /// Random starting leaning: conservative and liberal in [30, 70],
    /// apathetic in [20, 60]
    pub fn random(name: impl Into<String>, rng: &mut dyn RandomSource) -> Self {
        let conservative = rng.range_inclusive(30, 70) as f64;
        let liberal = rng.range_inclusive(30, 70) as f64;
        let apathetic = rng.range_inclusive(20, 60) as f64;
        Self::new(name, PublicOpinion::new(conservative, liberal, apathetic))
    }

    pub fn leaning(&self) -> &PublicOpinion {
        &self.leaning
    }

    pub fn nudge(&mut self, shift: OpinionShift) {
        self.leaning.apply(shift);
    }
}

/// Ordered friend list. The first entry is the default talk target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    friends: Vec<Friend>,
}

impl Roster {
    pub fn new(friends: Vec<Friend>) -> Self {
        Self { friends }
    }

    /// Fresh roster with randomized leanings
    pub fn generate(rng: &mut dyn RandomSource) -> Self {
        let friends = FRIEND_NAMES
            .iter()
            .map(|name| Friend::random(*name, rng))
            .collect();
        Self { friends }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    pub fn get(&self, id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    /// The friend a talk action will target
    pub fn talk_target(&self) -> Option<&Friend> {
        self.friends.first()
    }

    pub fn talk_target_mut(&mut self) -> Option<&mut Friend> {
        self.friends.first_mut()
    }

    /// Move `id` to the front so it becomes the talk target.
    ///
    /// Returns false if the friend is unknown or already first.
    pub fn bring_to_front(&mut self, id: FriendId) -> bool {
        match self.friends.iter().position(|f| f.id == id) {
            Some(idx) if idx > 0 => {
                let picked = self.friends.remove(idx);
                self.friends.insert(0, picked);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{ScriptedRandom, SeededRandom};

    #[test]
    fn test_generate_roster_ranges() {
        let mut rng = SeededRandom::new(42);
        for _ in 0..50 {
            let roster = Roster::generate(&mut rng);
            assert_eq!(roster.len(), ROSTER_SIZE);
            for f in roster.iter() {
                let l = f.leaning();
                assert!((30.0..=70.0).contains(&l.conservative()));
                assert!((30.0..=70.0).contains(&l.liberal()));
                assert!((20.0..=60.0).contains(&l.apathetic()));
            }
        }
    }

    #[test]
    fn test_bring_to_front() {
        let mut rng = ScriptedRandom::constant(0.5);
        let mut roster = Roster::generate(&mut rng);
        let third = roster.iter().nth(2).unwrap().id;
        let first = roster.iter().next().unwrap().id;

        assert!(roster.bring_to_front(third));
        assert_eq!(roster.talk_target().unwrap().id, third);
        assert_eq!(roster.iter().nth(1).unwrap().id, first);

        assert!(!roster.bring_to_front(third));
        assert!(!roster.bring_to_front(FriendId::new()));
    }

    #[test]
    fn test_nudge_clamps() {
        let mut friend = Friend::new("Test", PublicOpinion::new(99.0, 1.0, 0.0));
        friend.nudge(OpinionShift::new(2.0, -2.0, -1.0));
        assert_eq!(friend.leaning().conservative(), 100.0);
        assert_eq!(friend.leaning().liberal(), 0.0);
        assert_eq!(friend.leaning().apathetic(), 0.0);
    }

    #[test]
    fn test_friend_serializes_flat() {
        let friend = Friend::new("Flat", PublicOpinion::new(40.0, 50.0, 30.0));
        let json = serde_json::to_value(&friend).unwrap();
        assert_eq!(json["conservative"], 40.0);
        assert_eq!(json["name"], "Flat");
    }
}
