pub mod rubric;
pub mod session;

pub use rubric::{Criterion, Rubric, Subcriterion};
pub use session::{MAX_TEAMS, Session, SessionStore, Team, TeamId};
