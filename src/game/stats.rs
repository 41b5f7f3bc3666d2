//! Player Statistics
//!
//! Per-player counters for one session plus the top-performer summary
//! shown on the arena status bar.

use serde::{Serialize, Deserialize};

use crate::core::PlayerId;
use crate::game::color::TeamColor;
use crate::host::{ScoreLine, Scoreboard};

/// Host limit on objective names.
const OBJECTIVE_NAME_LEN: usize = 16;

// =============================================================================
// PLAYER STATS
// =============================================================================

/// Counters for one active player. Lives only as long as the player is in
/// the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Player identity.
    pub id: PlayerId,
    /// Display name captured at join time.
    pub name: String,
    /// Team colour held for the session.
    pub color: TeamColor,
    /// Opponents knocked out.
    pub kills: u32,
    /// Times knocked out.
    pub deaths: u32,
    /// Hits landed.
    pub hits_given: u32,
    /// Hits received.
    pub hits_taken: u32,
    /// Score awarded by the host.
    pub points: u32,
}

impl PlayerStats {
    /// Fresh record with zeroed counters.
    pub fn new(id: PlayerId, name: impl Into<String>, color: TeamColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            kills: 0,
            deaths: 0,
            hits_given: 0,
            hits_taken: 0,
            points: 0,
        }
    }

    /// Count one kill.
    pub fn record_kill(&mut self) {
        self.kills = self.kills.saturating_add(1);
    }

    /// Count one death.
    pub fn record_death(&mut self) {
        self.deaths = self.deaths.saturating_add(1);
    }

    /// Count one hit landed.
    pub fn record_hit_given(&mut self) {
        self.hits_given = self.hits_given.saturating_add(1);
    }

    /// Count one hit received.
    pub fn record_hit_taken(&mut self) {
        self.hits_taken = self.hits_taken.saturating_add(1);
    }

    /// Add points, saturating at `u32::MAX`.
    pub fn add_points(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
    }

    /// Sidebar scoreboard for this player.
    pub fn scoreboard(&self) -> Scoreboard {
        let objective: String = self.id.to_uuid_string().chars().take(OBJECTIVE_NAME_LEN).collect();
        let line = |label: &str, score: u32| ScoreLine { label: label.to_string(), score };

        Scoreboard {
            objective,
            title: "Stats".to_string(),
            lines: vec![
                line("Kills", self.kills),
                line("Deaths", self.deaths),
                line("HitsGiven", self.hits_given),
                line("HitsTaken", self.hits_taken),
                line("Points", self.points),
            ],
        }
    }

    /// One-line summary shown when another player inspects this one.
    pub fn summary_line(&self) -> String {
        format!(
            "[{}]: Deaths: {} Kills: {} Points: {} HitsGiven: {} HitsTaken: {}",
            self.name, self.deaths, self.kills, self.points, self.hits_given, self.hits_taken,
        )
    }
}

// =============================================================================
// LEADERBOARD
// =============================================================================

/// Leader of one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopEntry {
    /// Leading player.
    pub player: PlayerId,
    /// Leader's display name.
    pub name: String,
    /// Leading count.
    pub value: u32,
}

/// Leaders for points, kills and deaths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopSummary {
    /// Most points.
    pub points: TopEntry,
    /// Most kills.
    pub kills: TopEntry,
    /// Most deaths.
    pub deaths: TopEntry,
}

impl TopSummary {
    /// Compute leaders. `None` when there are no players.
    ///
    /// Ties go to the smallest player identity, independent of input order.
    pub fn compute<'a>(players: impl IntoIterator<Item = &'a PlayerStats>) -> Option<Self> {
        let players: Vec<&PlayerStats> = players.into_iter().collect();

        Some(Self {
            points: top_by(&players, |s| s.points)?,
            kills: top_by(&players, |s| s.kills)?,
            deaths: top_by(&players, |s| s.deaths)?,
        })
    }

    /// Status bar title.
    pub fn title(&self) -> String {
        format!(
            "[KOW-TOP] points: {} ({}), kills: {} ({}), deaths: {} ({})",
            self.points.name, self.points.value,
            self.kills.name, self.kills.value,
            self.deaths.name, self.deaths.value,
        )
    }
}

fn top_by(players: &[&PlayerStats], key: impl Fn(&PlayerStats) -> u32) -> Option<TopEntry> {
    let best = players.iter().copied().reduce(|best, candidate| {
        let (b, c) = (key(best), key(candidate));
        if c > b || (c == b && candidate.id < best.id) {
            candidate
        } else {
            best
        }
    })?;

    Some(TopEntry {
        player: best.id,
        name: best.name.clone(),
        value: key(best),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(n: u8, points: u32, kills: u32, deaths: u32) -> PlayerStats {
        let mut s = PlayerStats::new(PlayerId::new([n; 16]), format!("p{}", n), TeamColor::Red);
        s.points = points;
        s.kills = kills;
        s.deaths = deaths;
        s
    }

    #[test]
    fn test_new_stats_are_zero() {
        let s = PlayerStats::new(PlayerId::new([1; 16]), "alice", TeamColor::Green);
        assert_eq!(
            (s.kills, s.deaths, s.hits_given, s.hits_taken, s.points),
            (0, 0, 0, 0, 0)
        );
        assert_eq!(s.color, TeamColor::Green);
    }

    #[test]
    fn test_counters_saturate() {
        let mut s = PlayerStats::new(PlayerId::new([1; 16]), "alice", TeamColor::Red);
        s.add_points(u32::MAX);
        s.add_points(5);
        assert_eq!(s.points, u32::MAX);

        s.record_kill();
        s.record_death();
        s.record_hit_given();
        s.record_hit_taken();
        s.record_hit_taken();
        assert_eq!((s.kills, s.deaths, s.hits_given, s.hits_taken), (1, 1, 1, 2));
    }

    #[test]
    fn test_scoreboard_lines() {
        let mut s = stats(3, 12, 2, 1);
        s.hits_given = 7;
        let board = s.scoreboard();

        assert_eq!(board.title, "Stats");
        assert_eq!(board.objective.len(), 16);
        assert_eq!(board.score("Kills"), Some(2));
        assert_eq!(board.score("Deaths"), Some(1));
        assert_eq!(board.score("HitsGiven"), Some(7));
        assert_eq!(board.score("HitsTaken"), Some(0));
        assert_eq!(board.score("Points"), Some(12));
    }

    #[test]
    fn test_summary_line() {
        let s = stats(1, 30, 4, 2);
        assert_eq!(
            s.summary_line(),
            "[p1]: Deaths: 2 Kills: 4 Points: 30 HitsGiven: 0 HitsTaken: 0"
        );
    }

    #[test]
    fn test_top_summary_empty() {
        assert_eq!(TopSummary::compute(std::iter::empty()), None);
    }

    #[test]
    fn test_top_summary_picks_highest() {
        let players = [stats(1, 10, 0, 5), stats(2, 40, 3, 1), stats(3, 20, 7, 0)];
        let top = TopSummary::compute(&players).unwrap();

        assert_eq!(top.points.player, PlayerId::new([2; 16]));
        assert_eq!(top.kills.player, PlayerId::new([3; 16]));
        assert_eq!(top.deaths.player, PlayerId::new([1; 16]));
        assert_eq!(
            top.title(),
            "[KOW-TOP] points: p2 (40), kills: p3 (7), deaths: p1 (5)"
        );
    }

    #[test]
    fn test_top_summary_tie_goes_to_smallest_id() {
        let forward = [stats(4, 50, 1, 1), stats(9, 50, 1, 1), stats(2, 50, 1, 1)];
        let reversed = [stats(2, 50, 1, 1), stats(9, 50, 1, 1), stats(4, 50, 1, 1)];

        for _ in 0..3 {
            let a = TopSummary::compute(&forward).unwrap();
            let b = TopSummary::compute(&reversed).unwrap();
            assert_eq!(a.points.player, PlayerId::new([2; 16]));
            assert_eq!(a, b);
        }
    }
}
