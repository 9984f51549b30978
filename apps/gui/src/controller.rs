use crate::state::{AppState, SliderEvent};
use judging_core::{SessionStore, TeamId};

pub struct Controller;

impl Controller {
    pub fn add_team(store: &mut SessionStore) {
        match store.add_team() {
            Some(id) => log::info!("added and selected {id:?}"),
            None => log::debug!("add_team ignored: roster is full"),
        }
    }

    pub fn remove_team(store: &mut SessionStore, id: TeamId) {
        store.remove_team(id);
        log::info!("removed {id:?}, selection is now {:?}", store.selected_id());
    }

    pub fn rename_team(store: &mut SessionStore, id: TeamId, name: &str) {
        store.rename_team(id, name);
    }

    pub fn select_team(store: &mut SessionStore, id: TeamId) {
        store.select_team(id);
        log::debug!("selected {id:?}");
    }

    pub fn set_score(
        store: &mut SessionStore,
        id: TeamId,
        criterion: &str,
        subcriterion: &str,
        value: u32,
    ) {
        store.set_score(id, criterion, subcriterion, value);
    }

    pub fn begin_drag(state: &mut AppState) {
        let result = state.slider_machine.dispatch(SliderEvent::DragStart);
        if result.applied {
            log::debug!("score input {:?}", result.next_state);
        }
    }

    pub fn end_drag(state: &mut AppState) {
        let result = state.slider_machine.dispatch(SliderEvent::DragEnd);
        if result.applied {
            log::debug!("score input {:?}", result.next_state);
        }
    }
}
