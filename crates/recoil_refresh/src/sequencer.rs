//! Expand/collapse sequencing
//!
//! Holds at most one in-flight transition: the tween that moves the inset
//! contribution plus everything that has to happen once it settles. The
//! controller finalizes a step exactly once, either when its tween finishes
//! or when a newer command cancels it.

use recoil_animation::{Easing, Tween};
use recoil_core::PullState;

/// Callback for `start_loading_and_expand` and `finish_loading`
pub type Completion = Box<dyn FnOnce()>;

/// Transition to run after a step settles, before its completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowUp {
    #[default]
    None,
    /// Closing has collapsed; return to Normal
    SettleNormal,
}

/// A state transition whose `did` notification and completion are pending
pub struct Step {
    pub from: PullState,
    pub to: PullState,
    pub animated: bool,
    pub completion: Option<Completion>,
    pub follow_up: FollowUp,
}

impl Step {
    pub fn new(from: PullState, to: PullState, animated: bool) -> Self {
        Self {
            from,
            to,
            animated,
            completion: None,
            follow_up: FollowUp::None,
        }
    }

    pub fn with_completion(mut self, completion: Option<Completion>) -> Self {
        self.completion = completion;
        self
    }

    pub fn with_follow_up(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = follow_up;
        self
    }
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("animated", &self.animated)
            .field("has_completion", &self.completion.is_some())
            .field("follow_up", &self.follow_up)
            .finish()
    }
}

/// Result of advancing the sequencer by one frame
#[derive(Debug)]
pub enum SequencerTick {
    /// Nothing in flight
    Idle,
    /// Still animating; the contribution to apply this frame
    Running(f32),
    /// The tween reached its target and the step is ready to finalize
    Finished { value: f32, step: Step },
}

#[derive(Debug, Default)]
pub struct Sequencer {
    active: Option<(Step, Tween)>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Start tweening the contribution from `from` to `to` for `step`.
    /// Any step already in flight must be cancelled first.
    pub fn begin(&mut self, step: Step, from: f32, to: f32, duration_ms: u32, easing: Easing) {
        debug_assert!(self.active.is_none(), "previous step was not finalized");
        self.active = Some((step, Tween::new(from, to, duration_ms, easing)));
    }

    /// Stop the in-flight tween. Returns its step and the value it was
    /// heading to so the caller can jump there and finalize.
    pub fn cancel(&mut self) -> Option<(Step, f32)> {
        self.active.take().map(|(step, tween)| (step, tween.target()))
    }

    pub fn tick(&mut self, dt_ms: f32) -> SequencerTick {
        let Some((_, tween)) = self.active.as_mut() else {
            return SequencerTick::Idle;
        };

        if tween.tick(dt_ms) {
            return SequencerTick::Running(tween.value());
        }

        match self.active.take() {
            Some((step, tween)) => SequencerTick::Finished {
                value: tween.target(),
                step,
            },
            None => SequencerTick::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn step() -> Step {
        Step::new(PullState::Loading, PullState::Closing, true)
    }

    #[test]
    fn test_idle_without_step() {
        let mut sequencer = Sequencer::new();
        assert!(!sequencer.is_animating());
        assert!(matches!(sequencer.tick(16.0), SequencerTick::Idle));
    }

    #[test]
    fn test_runs_to_completion() {
        let mut sequencer = Sequencer::new();
        sequencer.begin(step(), 70.0, 0.0, 300, Easing::Linear);
        assert!(sequencer.is_animating());

        match sequencer.tick(150.0) {
            SequencerTick::Running(value) => assert!((value - 35.0).abs() < 1e-3),
            other => panic!("expected running, got {other:?}"),
        }

        match sequencer.tick(150.0) {
            SequencerTick::Finished { value, step } => {
                assert_eq!(value, 0.0);
                assert_eq!(step.to, PullState::Closing);
            }
            other => panic!("expected finished, got {other:?}"),
        }
        assert!(!sequencer.is_animating());
    }

    #[test]
    fn test_cancel_returns_step_and_target() {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        let mut sequencer = Sequencer::new();
        let step = step().with_completion(Some(Box::new(move || flag.set(true))));
        sequencer.begin(step, 0.0, 70.0, 300, Easing::EaseOut);
        sequencer.tick(50.0);

        let (step, target) = sequencer.cancel().unwrap();
        assert_eq!(target, 70.0);
        assert!(!sequencer.is_animating());

        // the completion travels with the step
        (step.completion.unwrap())();
        assert!(fired.get());
    }

    #[test]
    fn test_follow_up_defaults_to_none() {
        let step = step();
        assert_eq!(step.follow_up, FollowUp::None);
        let step = step.with_follow_up(FollowUp::SettleNormal);
        assert_eq!(step.follow_up, FollowUp::SettleNormal);
    }
}
