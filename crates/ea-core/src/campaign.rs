//! The mission board: an ordered, fixed set of missions.

use serde::{Deserialize, Serialize};

use crate::mission::Mission;

/// Ordered missions available to the player.
///
/// Missions are never added or removed once the board is built. Completed
/// missions stay on the board and are skipped when picking the next target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionBoard {
    missions: Vec<Mission>,
}

impl MissionBoard {
    /// Build a board from missions in play order.
    pub fn new(missions: Vec<Mission>) -> Self {
        Self { missions }
    }

    /// The three missions of the Imperial campaign.
    pub fn imperial_campaign() -> Self {
        Self::new(vec![
            Mission::new(
                "Guard an Imperial base",
                "Protect the base from Rebel spies.",
                3,
            ),
            Mission::new(
                "Lead a raid on Rebels",
                "Attack and disable Rebel communications.",
                5,
            ),
            Mission::new(
                "Diplomatic meeting",
                "Negotiate with a criminal syndicate.",
                4,
            ),
        ])
    }

    /// All missions in order.
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Number of missions.
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    /// Whether the board has no missions at all.
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Number of completed missions.
    pub fn completed_count(&self) -> usize {
        self.missions.iter().filter(|m| m.completed()).count()
    }

    /// Whether every mission is completed.
    pub fn all_complete(&self) -> bool {
        self.missions.iter().all(Mission::completed)
    }

    /// The first incomplete mission in board order.
    pub fn next_open(&self) -> Option<&Mission> {
        self.missions.iter().find(|m| !m.completed())
    }

    /// Mutable access to the first incomplete mission.
    pub fn next_open_mut(&mut self) -> Option<&mut Mission> {
        self.missions.iter_mut().find(|m| !m.completed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;
    use crate::roll::ScriptedRolls;

    #[test]
    fn imperial_campaign_layout() {
        let board = MissionBoard::imperial_campaign();
        let summary: Vec<(&str, u32)> = board
            .missions()
            .iter()
            .map(|m| (m.title(), m.difficulty()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Guard an Imperial base", 3),
                ("Lead a raid on Rebels", 5),
                ("Diplomatic meeting", 4),
            ]
        );
        assert_eq!(board.completed_count(), 0);
        assert!(!board.all_complete());
    }

    #[test]
    fn next_open_skips_completed() {
        let mut board = MissionBoard::imperial_campaign();
        let mut c = Character::new("Kira", "Human", "loyal soldier");
        let mut rolls = ScriptedRolls::new([0]);

        board.next_open_mut().unwrap().execute(&mut c, &mut rolls);
        assert_eq!(board.next_open().unwrap().title(), "Lead a raid on Rebels");
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn failure_keeps_same_target() {
        let mut board = MissionBoard::imperial_campaign();
        let mut c = Character::new("Kira", "Human", "loyal soldier");

        board
            .next_open_mut()
            .unwrap()
            .execute(&mut c, &mut ScriptedRolls::new([99]));
        assert_eq!(board.next_open().unwrap().title(), "Guard an Imperial base");
    }

    #[test]
    fn three_successes_exhaust_board() {
        let mut board = MissionBoard::imperial_campaign();
        let mut c = Character::new("Kira", "Human", "loyal soldier");
        let mut rolls = ScriptedRolls::new([0]);

        for _ in 0..3 {
            let mission = board.next_open_mut().unwrap();
            assert!(mission.execute(&mut c, &mut rolls).succeeded());
        }

        assert!(board.all_complete());
        assert_eq!(board.completed_count(), 3);
        assert!(board.next_open().is_none());
        assert_eq!(board.len(), 3);
        assert_eq!(c.level(), 4);
        assert_eq!(c.rank(), 4);
    }

    #[test]
    fn empty_board() {
        let board = MissionBoard::default();
        assert!(board.is_empty());
        assert!(board.all_complete());
        assert!(board.next_open().is_none());
    }
}
