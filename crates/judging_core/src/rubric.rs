use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcriterion {
    pub name: String,
    pub max_points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub max_points: u32,
    pub subcriteria: Vec<Subcriterion>,
}

impl Criterion {
    fn new(name: &str, max_points: u32, subcriteria: &[(&str, u32)]) -> Self {
        let subcriteria = subcriteria
            .iter()
            .map(|(name, max_points)| Subcriterion {
                name: (*name).to_string(),
                max_points: *max_points,
            })
            .collect();
        Self {
            name: name.to_string(),
            max_points,
            subcriteria,
        }
    }
}

/// Ordered scoring rubric. Loaded once, never mutated; shared read-only by
/// every component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    criteria: Vec<Criterion>,
}

impl Rubric {
    /// Invariant: each criterion's sub-criterion weights sum to its maximum.
    pub fn new(criteria: Vec<Criterion>) -> Self {
        debug_assert!(
            criteria.iter().all(|criterion| {
                let sum: u32 = criterion.subcriteria.iter().map(|s| s.max_points).sum();
                sum == criterion.max_points
            }),
            "sub-criterion weights must sum to the criterion maximum"
        );
        Self { criteria }
    }

    /// The fixed hackathon judging rubric: five criteria, 100 points total.
    pub fn hackathon() -> Self {
        Self::new(vec![
            Criterion::new(
                "Creativity",
                25,
                &[
                    ("Originality: How unique and innovative is the concept?", 9),
                    (
                        "Problem-solving: Does it address pharmacy challenges in novel ways?",
                        8,
                    ),
                    (
                        "Design: Is the virtual pharmacy aesthetically appealing and well-designed?",
                        8,
                    ),
                ],
            ),
            Criterion::new(
                "Interactivity",
                25,
                &[
                    ("User Experience: How intuitive and engaging is the interface?", 9),
                    (
                        "Functionality: Does it offer interactive features that enhance the pharmacy experience?",
                        8,
                    ),
                    (
                        "Accessibility: Is it easy for users of varying technical abilities to navigate?",
                        8,
                    ),
                ],
            ),
            Criterion::new(
                "Team Collaboration",
                15,
                &[
                    (
                        "Roles: Did team members have clearly defined and complementary roles?",
                        5,
                    ),
                    (
                        "Execution: How well did the team work together to bring the concept to life?",
                        5,
                    ),
                    ("Presentation: Was the project presented cohesively by the team?", 5),
                ],
            ),
            Criterion::new(
                "Traction",
                15,
                &[
                    ("Feasibility: How realistic is the implementation of this concept?", 5),
                    ("Scalability: Can the solution be easily expanded or adapted?", 5),
                    (
                        "Market Potential: Is there a clear target audience and business model?",
                        5,
                    ),
                ],
            ),
            Criterion::new(
                "Vision",
                20,
                &[
                    (
                        "Impact: How could this transform pharmacy services in the metaverse?",
                        7,
                    ),
                    (
                        "Future-readiness: Does it anticipate and address upcoming trends in healthcare?",
                        7,
                    ),
                    (
                        "Sustainability: Is there a long-term plan for maintaining and evolving the project?",
                        6,
                    ),
                ],
            ),
        ])
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn criterion_index(&self, name: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c.name == name)
    }

    pub fn subcriterion_index(&self, criterion: usize, name: &str) -> Option<usize> {
        self.criteria
            .get(criterion)?
            .subcriteria
            .iter()
            .position(|s| s.name == name)
    }

    /// Maximum achievable total, computed from the criteria rather than
    /// assumed.
    pub fn grand_max(&self) -> u32 {
        self.criteria.iter().map(|c| c.max_points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::Rubric;

    #[test]
    fn subcriterion_weights_sum_to_criterion_maximum() {
        let rubric = Rubric::hackathon();
        for criterion in rubric.criteria() {
            let sum: u32 = criterion.subcriteria.iter().map(|s| s.max_points).sum();
            assert_eq!(sum, criterion.max_points, "{}", criterion.name);
        }
    }

    #[test]
    fn hackathon_rubric_totals_one_hundred() {
        assert_eq!(Rubric::hackathon().grand_max(), 100);
    }

    #[test]
    fn lookup_by_name_follows_rubric_order() {
        let rubric = Rubric::hackathon();
        assert_eq!(rubric.criterion_index("Creativity"), Some(0));
        assert_eq!(rubric.criterion_index("Vision"), Some(4));
        assert_eq!(rubric.criterion_index("Speed"), None);

        let collaboration = rubric.criterion_index("Team Collaboration").unwrap();
        assert_eq!(
            rubric.subcriterion_index(
                collaboration,
                "Roles: Did team members have clearly defined and complementary roles?"
            ),
            Some(0)
        );
        assert_eq!(rubric.subcriterion_index(collaboration, "Speed"), None);
        assert_eq!(rubric.subcriterion_index(99, "Speed"), None);
    }
}
