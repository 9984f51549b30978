use judging_core::{Rubric, SessionStore};
use proptest::prelude::*;

// One write to an arbitrary cell of the hackathon rubric (5 criteria of 3
// sub-criteria each) with an arbitrary, possibly out-of-range value.
fn writes() -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
    proptest::collection::vec((0..5usize, 0..3usize, any::<u32>()), 0..64)
}

fn apply(store: &mut SessionStore, ops: &[(usize, usize, u32)]) {
    let id = store.selected_id().unwrap();
    let rubric = store.rubric().clone();
    for &(ci, si, value) in ops {
        let criterion = &rubric.criteria()[ci];
        let subcriterion = &criterion.subcriteria[si];
        store.set_score(id, &criterion.name, &subcriterion.name, value);
    }
}

proptest! {
    #[test]
    fn every_cell_stays_within_its_bound(ops in writes()) {
        let mut store = SessionStore::new(Rubric::hackathon());
        apply(&mut store, &ops);

        let team = store.selected_team().unwrap();
        for (criterion, row) in store.rubric().criteria().iter().zip(team.scores()) {
            for (subcriterion, &value) in criterion.subcriteria.iter().zip(row) {
                prop_assert!(value <= subcriterion.max_points);
            }
        }
    }

    #[test]
    fn total_equals_criterion_sums_and_cell_sum(ops in writes()) {
        let mut store = SessionStore::new(Rubric::hackathon());
        apply(&mut store, &ops);
        let id = store.selected_id().unwrap();

        let by_criterion: u32 = store
            .rubric()
            .criteria()
            .iter()
            .map(|c| store.criterion_score(id, &c.name))
            .sum();
        let by_cell: u32 = store
            .team(id)
            .unwrap()
            .scores()
            .iter()
            .flatten()
            .sum();

        prop_assert_eq!(store.total_score(id), by_criterion);
        prop_assert_eq!(store.total_score(id), by_cell);
        prop_assert!(store.total_score(id) <= store.rubric().grand_max());
    }

    #[test]
    fn writes_leave_other_teams_untouched(ops in writes()) {
        let mut store = SessionStore::new(Rubric::hackathon());
        let bystander = store.selected_id().unwrap();
        store.add_team().unwrap();
        apply(&mut store, &ops);

        prop_assert_eq!(store.total_score(bystander), 0);
    }
}
