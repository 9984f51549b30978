use serde::{Deserialize, Serialize};

use crate::rubric::Rubric;

pub const MAX_TEAMS: usize = 10;

/// Opaque team identifier. Fresh for every created team, never reused after
/// deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(u64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    scores: Vec<Vec<u32>>,
}

impl Team {
    fn blank(id: TeamId, name: String, rubric: &Rubric) -> Self {
        let scores = rubric
            .criteria()
            .iter()
            .map(|criterion| vec![0; criterion.subcriteria.len()])
            .collect();
        Self { id, name, scores }
    }

    /// Dense score grid shaped like the rubric: outer index is the criterion
    /// position, inner index the sub-criterion position. Every cell exists
    /// from creation.
    pub fn scores(&self) -> &[Vec<u32>] {
        &self.scores
    }
}

/// Snapshot value object of the whole in-memory state, suitable for
/// serialization by a host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub teams: Vec<Team>,
    pub selected: Option<TeamId>,
}

/// Owns the session and provides its only mutation surface. Invalid input is
/// guarded at this boundary (capacity check, range clamp, unknown-reference
/// no-ops) rather than reported.
pub struct SessionStore {
    rubric: Rubric,
    session: Session,
    next_id: u64,
}

impl SessionStore {
    /// Starts with one auto-created, selected team.
    pub fn new(rubric: Rubric) -> Self {
        let mut store = Self {
            rubric,
            session: Session {
                teams: Vec::new(),
                selected: None,
            },
            next_id: 0,
        };
        let _ = store.add_team();
        store
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn teams(&self) -> &[Team] {
        &self.session.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.session.teams.iter().find(|t| t.id == id)
    }

    pub fn selected_id(&self) -> Option<TeamId> {
        self.session.selected
    }

    pub fn selected_team(&self) -> Option<&Team> {
        self.session.selected.and_then(|id| self.team(id))
    }

    /// Appends a fully-initialized team (all cells zero) and selects it.
    /// Silently rejected once the roster holds `MAX_TEAMS` teams; callers are
    /// expected to disable the affordance instead of handling an error.
    pub fn add_team(&mut self) -> Option<TeamId> {
        if self.session.teams.len() >= MAX_TEAMS {
            return None;
        }
        let id = TeamId(self.next_id);
        self.next_id += 1;
        let name = format!("Team {}", self.session.teams.len() + 1);
        self.session.teams.push(Team::blank(id, name, &self.rubric));
        self.session.selected = Some(id);
        Some(id)
    }

    /// Removes the team if it exists. When the removed team was selected, the
    /// selection moves to the first remaining team in list order, or clears.
    pub fn remove_team(&mut self, id: TeamId) {
        let before = self.session.teams.len();
        self.session.teams.retain(|t| t.id != id);
        if self.session.teams.len() == before {
            return;
        }
        if self.session.selected == Some(id) {
            self.session.selected = self.session.teams.first().map(|t| t.id);
        }
    }

    /// Any string is accepted, including empty; names are display-only and
    /// need not be unique.
    pub fn rename_team(&mut self, id: TeamId, name: &str) {
        if let Some(team) = self.team_mut(id) {
            team.name = name.to_string();
        }
    }

    pub fn select_team(&mut self, id: TeamId) {
        if self.team(id).is_some() {
            self.session.selected = Some(id);
        }
    }

    /// Writes exactly one cell, clamped to the sub-criterion maximum. The
    /// input widget already emits in-range values; the clamp here does not
    /// assume that. Unknown team or cell names are ignored.
    pub fn set_score(&mut self, id: TeamId, criterion: &str, subcriterion: &str, value: u32) {
        let Some(ci) = self.rubric.criterion_index(criterion) else {
            return;
        };
        let Some(si) = self.rubric.subcriterion_index(ci, subcriterion) else {
            return;
        };
        let max = self.rubric.criteria()[ci].subcriteria[si].max_points;
        if let Some(team) = self.team_mut(id) {
            team.scores[ci][si] = value.min(max);
        }
    }

    pub fn score(&self, id: TeamId, criterion: &str, subcriterion: &str) -> u32 {
        let Some(ci) = self.rubric.criterion_index(criterion) else {
            return 0;
        };
        let Some(si) = self.rubric.subcriterion_index(ci, subcriterion) else {
            return 0;
        };
        self.team(id).map(|t| t.scores[ci][si]).unwrap_or(0)
    }

    /// Sum of the sub-criterion scores under one criterion. Zero for an
    /// unknown team or criterion.
    pub fn criterion_score(&self, id: TeamId, criterion: &str) -> u32 {
        let Some(ci) = self.rubric.criterion_index(criterion) else {
            return 0;
        };
        self.team(id)
            .map(|t| t.scores[ci].iter().sum())
            .unwrap_or(0)
    }

    /// Sum of every cell of the team, recomputed from current state on each
    /// call.
    pub fn total_score(&self, id: TeamId) -> u32 {
        self.team(id)
            .map(|t| t.scores.iter().flatten().sum())
            .unwrap_or(0)
    }

    fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.session.teams.iter_mut().find(|t| t.id == id)
    }
}
