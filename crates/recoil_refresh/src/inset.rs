//! Inset coordination
//!
//! The container's total inset is always `baseline + contribution` on the
//! top edge. The baseline belongs to the host; the coordinator only ever
//! adds or removes its own contribution and never folds it back in.
//!
//! Every write is remembered until the container echoes it back, so
//! inset-change notifications caused by our own writes can be told apart
//! from changes made by the host.

use recoil_core::EdgeInsets;
use smallvec::SmallVec;
use tracing::debug;

use crate::host::ScrollContainer;

/// Writes remembered while waiting for their echo. Containers that never
/// echo would otherwise grow this without bound.
const MAX_PENDING_ECHOES: usize = 8;

/// Where an observed inset change came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsetOrigin {
    /// Echo of one of our own writes
    SelfWrite,
    /// Matches what we want applied already
    Unchanged,
    /// The host changed the inset; the baseline has been rebased
    Host,
}

#[derive(Debug, Clone, Default)]
pub struct InsetCoordinator {
    baseline: EdgeInsets,
    contribution: f32,
    last_written: Option<EdgeInsets>,
    pending_echoes: SmallVec<[EdgeInsets; MAX_PENDING_ECHOES]>,
    /// Set by a write, cleared by the next user drag. Scroll notifications
    /// inside this window are the container settling after our write.
    settling: bool,
}

impl InsetCoordinator {
    pub fn new(baseline: EdgeInsets) -> Self {
        Self {
            baseline,
            ..Default::default()
        }
    }

    pub fn baseline(&self) -> EdgeInsets {
        self.baseline
    }

    pub fn contribution(&self) -> f32 {
        self.contribution
    }

    pub fn last_written(&self) -> Option<EdgeInsets> {
        self.last_written
    }

    /// Total inset the control wants applied
    pub fn combined(&self) -> EdgeInsets {
        self.baseline.adding_top(self.contribution)
    }

    pub fn set_baseline(&mut self, baseline: EdgeInsets) {
        self.baseline = baseline;
    }

    pub fn set_contribution(&mut self, contribution: f32) {
        self.contribution = contribution.max(0.0);
    }

    /// Write the combined inset if the container doesn't already have it.
    /// Returns the inset that was written.
    pub fn apply(&mut self, container: &dyn ScrollContainer) -> Option<EdgeInsets> {
        let target = self.combined();
        if container.content_inset() == target {
            return None;
        }

        container.set_content_inset(target);
        self.last_written = Some(target);
        if self.pending_echoes.len() == MAX_PENDING_ECHOES {
            self.pending_echoes.remove(0);
        }
        self.pending_echoes.push(target);
        self.settling = true;

        debug!(
            top = target.top,
            contribution = self.contribution,
            "content inset written"
        );
        Some(target)
    }

    /// Classify an inset reported by the container.
    ///
    /// A host change rebases the baseline so that the combined inset equals
    /// what the host set, keeping the control's contribution on top of it.
    /// When the host's top is smaller than the contribution, the observed
    /// inset itself becomes the baseline and the combined inset no longer
    /// matches the container; the caller must reapply it.
    pub fn observe(&mut self, observed: EdgeInsets) -> InsetOrigin {
        if let Some(pos) = self.pending_echoes.iter().position(|i| *i == observed) {
            // older writes were superseded and will not echo
            self.pending_echoes.drain(..=pos);
            return InsetOrigin::SelfWrite;
        }
        if observed == self.combined() {
            return InsetOrigin::Unchanged;
        }

        let rebased = observed.adding_top(-self.contribution);
        self.baseline = if rebased.top < 0.0 { observed } else { rebased };
        self.baseline.top = self.baseline.top.max(0.0);
        self.pending_echoes.clear();
        debug!(baseline_top = self.baseline.top, "host rebased content inset");
        InsetOrigin::Host
    }

    pub fn is_settling(&self) -> bool {
        self.settling
    }

    /// The user took over scrolling again
    pub fn end_settling(&mut self) {
        self.settling = false;
    }
}
