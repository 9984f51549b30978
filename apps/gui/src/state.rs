/// Interaction state of the score input control: either displaying the bound
/// value or emitting intermediate values while the user drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderState {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    DragStart,
    DragEnd,
}

#[derive(Debug, Clone)]
pub struct TransitionResult {
    pub next_state: SliderState,
    pub applied: bool,
}

#[derive(Debug, Clone)]
pub struct SliderStateMachine {
    state: SliderState,
}

impl Default for SliderStateMachine {
    fn default() -> Self {
        Self {
            state: SliderState::Idle,
        }
    }
}

impl SliderStateMachine {
    pub fn current_state(&self) -> SliderState {
        self.state
    }

    pub fn dispatch(&mut self, event: SliderEvent) -> TransitionResult {
        let current = self.state;
        let (next, applied) = match (current, event) {
            (SliderState::Idle, SliderEvent::DragStart) => (SliderState::Dragging, true),
            (SliderState::Dragging, SliderEvent::DragEnd) => (SliderState::Idle, true),
            _ => (current, false),
        };
        if applied {
            self.state = next;
        }
        TransitionResult {
            next_state: self.state,
            applied,
        }
    }
}

#[derive(Default)]
pub struct AppState {
    pub slider_machine: SliderStateMachine,
}

#[cfg(test)]
mod tests {
    use super::{SliderEvent, SliderState, SliderStateMachine};

    #[test]
    fn drag_cycle_is_deterministic_and_resumable() {
        let mut sm = SliderStateMachine::default();
        assert_eq!(sm.current_state(), SliderState::Idle);

        assert!(sm.dispatch(SliderEvent::DragStart).applied);
        assert_eq!(sm.current_state(), SliderState::Dragging);

        assert!(sm.dispatch(SliderEvent::DragEnd).applied);
        assert_eq!(sm.current_state(), SliderState::Idle);

        // No terminal state: a new drag can always begin.
        assert!(sm.dispatch(SliderEvent::DragStart).applied);
        assert_eq!(sm.current_state(), SliderState::Dragging);
    }

    #[test]
    fn invalid_transition_is_rejected_without_state_change() {
        let mut sm = SliderStateMachine::default();
        let result = sm.dispatch(SliderEvent::DragEnd);
        assert!(!result.applied);
        assert_eq!(sm.current_state(), SliderState::Idle);

        sm.dispatch(SliderEvent::DragStart);
        let result = sm.dispatch(SliderEvent::DragStart);
        assert!(!result.applied);
        assert_eq!(sm.current_state(), SliderState::Dragging);
    }
}
