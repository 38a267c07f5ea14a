//! Turning a reconstructed path into numbered, labeled steps.

use crate::core::{Action, Capacities, Move, StatePath, Step};
use serde::{Deserialize, Serialize};

/// Which steps carry the terminal marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalMarker {
    /// Mark any step whose resulting state is `(0, 0)`, whether or not it
    /// holds the target. A shortest path never returns to the empty state,
    /// so this never fires on search output.
    #[default]
    ReturnToEmpty,

    /// Mark the final step when it holds the target.
    TargetReached,
}

/// Label every transition of `path`, numbering steps from 1.
///
/// Each step's action comes from [`Action::classify`]. The generating move is
/// taken from the path when recorded, otherwise recovered from the state pair.
///
/// # Example
///
/// ```rust
/// use jugpath::core::{Action, Capacities, JugState, StatePath};
/// use jugpath::search::{label_path, TerminalMarker};
///
/// let caps = Capacities::new(4, 3).unwrap();
/// let path = StatePath::from_states(&[
///     JugState::EMPTY,
///     JugState::new(4, 0),
///     JugState::new(0, 0),
/// ]);
///
/// let steps = label_path(&path, caps, 2, TerminalMarker::ReturnToEmpty);
/// assert_eq!(steps[0].action, Action::FillX);
/// assert!(!steps[0].terminal);
/// assert_eq!(steps[1].action, Action::EmptyX);
/// assert!(steps[1].terminal);
/// ```
pub fn label_path(
    path: &StatePath,
    caps: Capacities,
    target: u32,
    marker: TerminalMarker,
) -> Vec<Step> {
    let last = path.len().saturating_sub(1);
    path.transitions()
        .iter()
        .enumerate()
        .map(|(index, transition)| {
            let terminal = match marker {
                TerminalMarker::ReturnToEmpty => transition.to.is_empty(),
                TerminalMarker::TargetReached => {
                    index == last && transition.to.touches(target)
                }
            };
            Step {
                step: index + 1,
                jug_a: transition.to.x,
                jug_b: transition.to.y,
                action: Action::classify(transition.from, transition.to, caps),
                generated_by: transition
                    .generated_by
                    .or_else(|| Move::connecting(transition.from, transition.to, caps).next()),
                terminal,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::JugState;

    fn caps(x: u32, y: u32) -> Capacities {
        Capacities::new(x, y).unwrap()
    }

    fn states(pairs: &[(u32, u32)]) -> StatePath {
        let states: Vec<_> = pairs.iter().map(|&(x, y)| JugState::new(x, y)).collect();
        StatePath::from_states(&states)
    }

    #[test]
    fn empty_path_has_no_steps() {
        let steps = label_path(&StatePath::new(), caps(4, 3), 2, TerminalMarker::default());
        assert!(steps.is_empty());
    }

    #[test]
    fn steps_are_numbered_from_one() {
        let path = states(&[(0, 0), (0, 3), (3, 0), (3, 3), (4, 2)]);
        let steps = label_path(&path, caps(4, 3), 2, TerminalMarker::ReturnToEmpty);
        let numbers: Vec<_> = steps.iter().map(|s| s.step).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(steps[3].state(), JugState::new(4, 2));
    }

    #[test]
    fn precedence_labels_are_reproduced() {
        let path = states(&[(0, 0), (0, 3), (3, 0), (3, 3), (4, 2)]);
        let steps = label_path(&path, caps(4, 3), 2, TerminalMarker::ReturnToEmpty);
        let actions: Vec<_> = steps.iter().map(|s| s.action).collect();
        assert_eq!(
            actions,
            vec![Action::FillY, Action::EmptyY, Action::FillY, Action::FillX]
        );
        let moves: Vec<_> = steps.iter().map(|s| s.generated_by).collect();
        assert_eq!(
            moves,
            vec![
                Some(Move::FillY),
                Some(Move::PourYIntoX),
                Some(Move::FillY),
                Some(Move::PourYIntoX),
            ]
        );
    }

    #[test]
    fn return_to_empty_marks_every_empty_state() {
        let path = states(&[(0, 0), (4, 0), (0, 0), (0, 3), (0, 0)]);
        let steps = label_path(&path, caps(4, 3), 3, TerminalMarker::ReturnToEmpty);
        let marked: Vec<_> = steps.iter().map(|s| s.terminal).collect();
        assert_eq!(marked, vec![false, true, false, true]);
    }

    #[test]
    fn return_to_empty_ignores_target() {
        let path = states(&[(0, 0), (0, 3)]);
        let steps = label_path(&path, caps(4, 3), 3, TerminalMarker::ReturnToEmpty);
        assert!(!steps[0].terminal);
    }

    #[test]
    fn target_reached_marks_only_final_goal_step() {
        let path = states(&[(0, 0), (0, 3), (3, 0), (3, 3), (4, 2)]);
        let steps = label_path(&path, caps(4, 3), 2, TerminalMarker::TargetReached);
        let marked: Vec<_> = steps.iter().map(|s| s.terminal).collect();
        assert_eq!(marked, vec![false, false, false, true]);

        let steps = label_path(&path, caps(4, 3), 1, TerminalMarker::TargetReached);
        assert!(steps.iter().all(|s| !s.terminal));
    }

    #[test]
    fn unknown_transition_has_no_move() {
        let path = states(&[(2, 2), (1, 1)]);
        let steps = label_path(&path, caps(4, 3), 1, TerminalMarker::ReturnToEmpty);
        assert_eq!(steps[0].action, Action::Unknown);
        assert_eq!(steps[0].generated_by, None);
    }

    #[test]
    fn marker_serializes_snake_case() {
        let json = serde_json::to_string(&TerminalMarker::TargetReached).unwrap();
        assert_eq!(json, "\"target_reached\"");
    }
}
