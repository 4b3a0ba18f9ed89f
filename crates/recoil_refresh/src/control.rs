//! The refresh controller
//!
//! [`RefreshControl`] consumes the container's scroll notifications, turns
//! them into pull progress and state transitions, and keeps the
//! container's top inset in step with its expansion.
//!
//! Everything runs on the thread that delivers notifications. Animated
//! transitions advance when the host calls [`RefreshControl::tick`] from its
//! frame loop.

use std::rc::{Rc, Weak};
use std::time::SystemTime;

use recoil_animation::{Easing, PullCurve};
use recoil_core::{
    EdgeInsets, PullEvent, PullState, Rect, ScrollEvent, ScrollMetrics, ScrollPhase, Size,
    StateMachine, Transition,
};
use tracing::{debug, trace, warn};

use crate::config::{validate_expanded_height, RefreshConfig, SafeArea, Style};
use crate::content::StatusContentView;
use crate::error::Result;
use crate::geometry::{is_past_threshold, PullGeometry};
use crate::host::{ContentView, ControlStatus, RefreshDelegate, ScrollContainer};
use crate::inset::{InsetCoordinator, InsetOrigin};
use crate::sequencer::{Completion, FollowUp, Sequencer, SequencerTick, Step};

/// Per-gesture pull record. Reset when the gesture ends and whenever
/// loading starts or ends.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PullSession {
    /// Last reported offset along the pull axis
    pub offset: f32,
    /// Raw progress, before the pull curve
    pub progress: f32,
    pub dragging: bool,
}

impl PullSession {
    fn reset(&mut self) {
        self.progress = 0.0;
        self.dragging = false;
    }
}

/// Builder for [`RefreshControl`]
pub struct RefreshControlBuilder {
    container: Weak<dyn ScrollContainer>,
    delegate: Option<Weak<dyn RefreshDelegate>>,
    content_view: Option<Box<dyn ContentView>>,
    config: RefreshConfig,
}

impl RefreshControlBuilder {
    pub fn config(mut self, config: RefreshConfig) -> Self {
        self.config = config;
        self
    }

    pub fn delegate<D: RefreshDelegate + 'static>(mut self, delegate: &Rc<D>) -> Self {
        let weak = Rc::downgrade(delegate);
        let weak: Weak<dyn RefreshDelegate> = weak;
        self.delegate = Some(weak);
        self
    }

    /// Defaults to a [`StatusContentView`]
    pub fn content_view(mut self, view: Box<dyn ContentView>) -> Self {
        self.content_view = Some(view);
        self
    }

    /// Validate the configuration and attach to the container.
    ///
    /// A zero `default_content_inset` adopts whatever inset the container
    /// already has as the host baseline.
    pub fn build(self) -> Result<RefreshControl> {
        self.config.validate()?;

        let mut control = RefreshControl {
            container: self.container,
            delegate: self.delegate,
            content_view: self
                .content_view
                .unwrap_or_else(|| Box::new(StatusContentView::new())),
            config: self.config,
            machine: StateMachine::new(PullState::Normal),
            session: PullSession::default(),
            expanded: false,
            insets: InsetCoordinator::default(),
            sequencer: Sequencer::new(),
            viewport: Size::ZERO,
            reported_safe_area: EdgeInsets::ZERO,
            last_updated_at: None,
        };

        let mut baseline = control.config.default_content_inset;
        if let Some(container) = control.container.upgrade() {
            if baseline == EdgeInsets::ZERO {
                baseline = container.content_inset();
            }
            control.session.offset = container.content_offset();
        }
        control.config.default_content_inset = baseline;
        control.insets.set_baseline(baseline);
        control.apply_insets(false);

        let status = control.status();
        control.content_view.set_state(status.state, &status);
        control.content_view.set_pull_progress(status.progress);
        control.refresh_last_updated_at();

        debug!(
            expanded_height = control.config.expanded_height,
            style = ?control.config.style,
            baseline_top = baseline.top,
            "refresh control attached"
        );
        Ok(control)
    }
}

/// Pull-to-refresh controller bound to one scroll container for its
/// whole lifetime.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use recoil_core::{EdgeInsets, PullState, ScrollEvent, ScrollMetrics};
/// use recoil_refresh::{RefreshControl, ScrollContainer};
///
/// #[derive(Default)]
/// struct List {
///     inset: Cell<EdgeInsets>,
/// }
///
/// impl ScrollContainer for List {
///     fn content_offset(&self) -> f32 {
///         0.0
///     }
///     fn content_inset(&self) -> EdgeInsets {
///         self.inset.get()
///     }
///     fn set_content_inset(&self, inset: EdgeInsets) {
///         self.inset.set(inset);
///     }
/// }
///
/// let list = Rc::new(List::default());
/// let mut control = RefreshControl::builder(&list).build().unwrap();
///
/// control.handle_event(ScrollEvent::Scroll(ScrollMetrics::dragging(-80.0)));
/// assert_eq!(control.state(), PullState::Ready);
///
/// control.handle_event(ScrollEvent::DragEnd(ScrollMetrics::new(-80.0)));
/// assert_eq!(control.state(), PullState::Loading);
///
/// // let the expand animation run
/// while control.tick(16.0) {}
/// assert_eq!(list.inset.get(), EdgeInsets::top(70.0));
/// ```
pub struct RefreshControl {
    container: Weak<dyn ScrollContainer>,
    delegate: Option<Weak<dyn RefreshDelegate>>,
    content_view: Box<dyn ContentView>,
    config: RefreshConfig,
    machine: StateMachine<PullState>,
    session: PullSession,
    expanded: bool,
    insets: InsetCoordinator,
    sequencer: Sequencer,
    viewport: Size,
    reported_safe_area: EdgeInsets,
    last_updated_at: Option<SystemTime>,
}

impl RefreshControl {
    /// Start building a control for `container`. Only a weak reference is
    /// kept; there is no way to rebind it later.
    pub fn builder<C: ScrollContainer + 'static>(container: &Rc<C>) -> RefreshControlBuilder {
        let container = Rc::downgrade(container);
        let container: Weak<dyn ScrollContainer> = container;
        RefreshControlBuilder {
            container,
            delegate: None,
            content_view: None,
            config: RefreshConfig::default(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn state(&self) -> PullState {
        self.machine.current_state()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn expanded_height(&self) -> f32 {
        self.config.expanded_height
    }

    pub fn style(&self) -> Style {
        self.config.style
    }

    pub fn content_view(&self) -> &dyn ContentView {
        &*self.content_view
    }

    pub fn content_view_mut(&mut self) -> &mut dyn ContentView {
        &mut *self.content_view
    }

    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    /// Host-owned baseline, without the control's contribution
    pub fn default_content_inset(&self) -> EdgeInsets {
        self.insets.baseline()
    }

    /// Total inset the control wants applied
    pub fn content_inset(&self) -> EdgeInsets {
        self.insets.combined()
    }

    /// Raw pull progress used for threshold decisions
    pub fn progress(&self) -> f32 {
        self.session.progress
    }

    /// Progress as shown to the content view, shaped by the pull curve
    pub fn display_progress(&self) -> f32 {
        self.config.pull_curve.apply(self.session.progress)
    }

    pub fn session(&self) -> PullSession {
        self.session
    }

    pub fn last_updated_at(&self) -> Option<SystemTime> {
        self.last_updated_at
    }

    pub fn is_animating(&self) -> bool {
        self.sequencer.is_animating()
    }

    pub fn status(&self) -> ControlStatus {
        ControlStatus {
            state: self.state(),
            expanded: self.expanded,
            expanded_height: self.config.expanded_height,
            style: self.config.style,
            progress: self.display_progress(),
            content_inset: self.insets.combined(),
            last_updated_at: self.last_updated_at,
        }
    }

    /// Where the control sits, in content coordinates
    pub fn control_frame(&self) -> Rect {
        self.geometry().control_frame(
            self.session.offset,
            self.viewport,
            self.insets.contribution(),
        )
    }

    pub fn history(&self) -> &[Transition<PullState>] {
        self.machine.history()
    }

    pub fn clear_history(&mut self) {
        self.machine.clear_history();
    }

    fn geometry(&self) -> PullGeometry {
        let safe_area = self.config.safe_area.resolve(self.reported_safe_area);
        PullGeometry::new(
            self.config.expanded_height,
            self.config.style,
            self.insets.baseline().top + safe_area.top,
        )
    }

    fn delegate(&self) -> Option<Rc<dyn RefreshDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Fails without changing anything if `height` is not positive and finite
    pub fn set_expanded_height(&mut self, height: f32) -> Result<()> {
        validate_expanded_height(height)?;
        self.config.expanded_height = height;
        self.reapply_expansion();
        Ok(())
    }

    pub fn set_style(&mut self, style: Style) {
        self.config.style = style;
        self.reapply_expansion();
    }

    /// Replace the host baseline and reapply the combined inset
    pub fn set_default_content_inset(&mut self, insets: EdgeInsets) {
        self.config.default_content_inset = insets;
        self.insets.set_baseline(insets);
        self.apply_insets(false);
    }

    pub fn set_safe_area(&mut self, safe_area: SafeArea) {
        self.config.safe_area = safe_area;
    }

    pub fn set_pull_curve(&mut self, curve: PullCurve) {
        self.config.pull_curve = curve;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.config.easing = easing;
    }

    pub fn set_animation_duration_ms(&mut self, duration_ms: u32) {
        self.config.animation_duration_ms = duration_ms;
    }

    pub fn set_delegate<D: RefreshDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak = Rc::downgrade(delegate);
        let weak: Weak<dyn RefreshDelegate> = weak;
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Swap the content view. The new view immediately receives the
    /// current state, progress and last-updated time. Returns the old view.
    pub fn set_content_view(&mut self, view: Box<dyn ContentView>) -> Box<dyn ContentView> {
        let old = std::mem::replace(&mut self.content_view, view);
        let status = self.status();
        self.content_view.set_state(status.state, &status);
        self.content_view.set_pull_progress(status.progress);
        self.refresh_last_updated_at();
        old
    }

    /// Recompute the contribution for the current expansion after a
    /// geometry setting changed. Left alone while a transition or the
    /// user owns the inset.
    fn reapply_expansion(&mut self) {
        if self.sequencer.is_animating() || self.session.dragging {
            return;
        }
        let expansion = if self.expanded { 1.0 } else { 0.0 };
        let target = self.geometry().expanded_inset(self.state(), expansion);
        self.set_contribution(target, false);
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Start loading without expanding, animated. Returns `false` if
    /// already loading.
    pub fn start_loading(&mut self) -> bool {
        self.start_loading_and_expand(false, true, None)
    }

    /// Enter Loading, optionally expanding to show the content view.
    ///
    /// Returns `false` and drops `completion` without calling it when
    /// already loading. An in-flight transition is completed first, so a
    /// collapsing control settles to Normal before loading again.
    pub fn start_loading_and_expand(
        &mut self,
        expand: bool,
        animated: bool,
        completion: Option<Completion>,
    ) -> bool {
        if self.state() == PullState::Loading {
            debug!("start_loading ignored: already loading");
            return false;
        }

        self.flush_animation();
        if !self.machine.can_send(PullEvent::StartLoading) {
            debug!(state = %self.state(), "start_loading rejected");
            return false;
        }

        self.run_transition(
            PullEvent::StartLoading,
            animated,
            expand,
            completion,
            FollowUp::None,
        )
    }

    /// Leave Loading and collapse. `completion` runs once, after the
    /// control is back to Normal.
    ///
    /// Returns `false` and drops `completion` when not loading.
    pub fn finish_loading(&mut self, animated: bool, completion: Option<Completion>) -> bool {
        if self.state() != PullState::Loading {
            debug!(state = %self.state(), "finish_loading ignored: not loading");
            return false;
        }

        self.flush_animation();
        self.refresh_last_updated_at();
        self.run_transition(
            PullEvent::FinishLoading,
            animated,
            false,
            completion,
            FollowUp::SettleNormal,
        )
    }

    /// Ask the delegate for the last-updated time (falling back to now) and
    /// forward it to the content view
    pub fn refresh_last_updated_at(&mut self) {
        let at = self
            .delegate()
            .and_then(|d| d.last_updated_at())
            .unwrap_or_else(SystemTime::now);
        self.last_updated_at = Some(at);

        let status = self.status();
        self.content_view.set_last_updated_at(at, &status);
    }

    /// Advance an in-flight expand/collapse by `dt_ms` milliseconds.
    ///
    /// Returns true while still animating.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        match self.sequencer.tick(dt_ms) {
            SequencerTick::Idle => false,
            SequencerTick::Running(value) => {
                self.set_contribution(value, false);
                true
            }
            SequencerTick::Finished { value, step } => {
                self.set_contribution(value, false);
                self.finalize(step);
                self.sequencer.is_animating()
            }
        }
    }

    // =========================================================================
    // Scroll notifications
    // =========================================================================

    /// Feed one container notification
    pub fn handle_event(&mut self, event: ScrollEvent) {
        let metrics = *event.metrics();
        self.viewport = metrics.viewport;
        self.reported_safe_area = metrics.safe_area;

        trace!(
            event = event.name(),
            offset = metrics.offset,
            phase = ?metrics.phase,
            state = %self.state(),
            "scroll notification"
        );

        match event {
            ScrollEvent::Scroll(metrics) => self.on_scroll(metrics),
            ScrollEvent::DragEnd(metrics) => self.on_drag_end(metrics),
            ScrollEvent::InsetChanged(metrics) => self.on_inset_changed(metrics),
        }
    }

    fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.session.offset = metrics.offset;

        if metrics.is_dragging() {
            self.insets.end_settling();
            self.session.dragging = true;
            self.on_drag(metrics.offset);
            return;
        }

        let progress = self.geometry().progress(metrics.offset);
        if metrics.phase == ScrollPhase::Decelerating {
            self.push_progress(progress);
        }

        if self.insets.is_settling() {
            trace!("offset change from own inset write");
            return;
        }

        // hosts that never send DragEnd release through here
        if self.state() == PullState::Ready {
            self.handle_release(progress);
        }
    }

    fn on_drag(&mut self, offset: f32) {
        let progress = self.geometry().progress(offset);

        match self.state() {
            PullState::Normal | PullState::Ready => {
                self.push_progress(progress);
                let event = if is_past_threshold(progress) {
                    PullEvent::PullPastThreshold
                } else {
                    PullEvent::PullBelowThreshold
                };
                if self.machine.can_send(event) {
                    self.run_transition(event, false, false, None, FollowUp::None);
                }
            }
            PullState::Loading => self.follow_user_scroll(offset),
            PullState::Closing => {}
        }
    }

    fn on_drag_end(&mut self, metrics: ScrollMetrics) {
        self.session.offset = metrics.offset;
        let progress = self.geometry().progress(metrics.offset);
        if self.state() == PullState::Ready {
            self.handle_release(progress);
        }
        self.session.reset();
    }

    fn on_inset_changed(&mut self, metrics: ScrollMetrics) {
        match self.insets.observe(metrics.content_inset) {
            InsetOrigin::Host => {
                self.config.default_content_inset = self.insets.baseline();
                self.apply_insets(false);
            }
            InsetOrigin::SelfWrite | InsetOrigin::Unchanged => {}
        }
    }

    fn handle_release(&mut self, progress: f32) {
        if self.state() != PullState::Ready {
            return;
        }

        let allowed = is_past_threshold(progress)
            && self.delegate().map_or(true, |d| d.should_start_loading());

        if allowed {
            self.run_transition(PullEvent::Release, true, true, None, FollowUp::None);
        } else {
            debug!(progress, "release did not start loading");
            self.run_transition(PullEvent::CancelRelease, true, false, None, FollowUp::None);
        }
    }

    /// While loading, give up space as the user scrolls the content upward
    fn follow_user_scroll(&mut self, offset: f32) {
        if self.sequencer.is_animating() {
            return;
        }
        if let Some(contribution) = self.geometry().loading_drag_inset(offset) {
            self.set_contribution(contribution, true);
        }
    }

    fn push_progress(&mut self, progress: f32) {
        self.session.progress = progress;
        let shown = self.display_progress();
        self.content_view.set_pull_progress(shown);
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Send `event` and move the inset to match. Returns false if the
    /// transition table rejects it.
    fn run_transition(
        &mut self,
        event: PullEvent,
        animated: bool,
        expand: bool,
        completion: Option<Completion>,
        follow_up: FollowUp,
    ) -> bool {
        self.flush_animation();

        let Some((from, to)) = self.enter(event, animated) else {
            return false;
        };

        self.expanded = expand;
        let expansion = if expand { 1.0 } else { 0.0 };
        let target = self.geometry().expanded_inset(to, expansion);
        let step = Step::new(from, to, animated)
            .with_completion(completion)
            .with_follow_up(follow_up);

        let duration_ms = self.config.animation_duration_ms;
        if animated && duration_ms > 0 {
            let current = self.insets.contribution();
            self.sequencer
                .begin(step, current, target, duration_ms, self.config.easing);
        } else {
            self.set_contribution(target, false);
            self.finalize(step);
        }
        true
    }

    /// Apply `event` to the state machine, sending `will_transition` first.
    /// The matching `did_transition` is sent when the step is finalized.
    fn enter(&mut self, event: PullEvent, animated: bool) -> Option<(PullState, PullState)> {
        let from = self.state();
        let to = self.machine.peek(event)?;

        if let Some(delegate) = self.delegate() {
            delegate.will_transition(from, to, animated);
        }
        self.machine.send(event);
        debug!(%from, %to, ?event, animated, "pull state changed");

        if to == PullState::Loading || from == PullState::Loading {
            self.session.reset();
        }

        let status = self.status();
        self.content_view.set_state(to, &status);

        if let Some(delegate) = self.delegate() {
            if to == PullState::Loading {
                delegate.did_start_loading();
            } else if from == PullState::Loading {
                delegate.did_finish_loading();
            }
        }
        Some((from, to))
    }

    fn finalize(&mut self, step: Step) {
        let Step {
            from,
            to,
            animated,
            completion,
            follow_up,
        } = step;

        if let Some(delegate) = self.delegate() {
            delegate.did_transition(from, to, animated);
        }

        if follow_up == FollowUp::SettleNormal {
            if let Some((from, to)) = self.enter(PullEvent::Collapsed, false) {
                if let Some(delegate) = self.delegate() {
                    delegate.did_transition(from, to, false);
                }
            }
        }

        if let Some(completion) = completion {
            completion();
        }
    }

    /// Jump an in-flight transition to its end and finalize it, so its
    /// completion still runs before anything new starts
    fn flush_animation(&mut self) {
        if let Some((step, target)) = self.sequencer.cancel() {
            debug!(from = %step.from, to = %step.to, "in-flight transition flushed");
            self.set_contribution(target, false);
            self.finalize(step);
        }
    }

    fn set_contribution(&mut self, contribution: f32, user_driven: bool) {
        self.insets.set_contribution(contribution);
        self.apply_insets(user_driven);
    }

    fn apply_insets(&mut self, user_driven: bool) {
        let Some(container) = self.container.upgrade() else {
            warn!("scroll container dropped; content inset not applied");
            return;
        };
        let Some(written) = self.insets.apply(&*container) else {
            return;
        };

        if !user_driven && container.content_offset() <= 0.0 {
            container.scroll_to_top();
        }
        if let Some(delegate) = self.delegate() {
            delegate.did_update_content_inset(written);
        }
    }
}

impl Drop for RefreshControl {
    fn drop(&mut self) {
        self.flush_animation();
    }
}

impl std::fmt::Debug for RefreshControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshControl")
            .field("state", &self.state())
            .field("expanded", &self.expanded)
            .field("session", &self.session)
            .field("insets", &self.insets)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::error::RefreshError;

    #[derive(Default)]
    struct List {
        offset: Cell<f32>,
        inset: Cell<EdgeInsets>,
    }

    impl ScrollContainer for List {
        fn content_offset(&self) -> f32 {
            self.offset.get()
        }

        fn content_inset(&self) -> EdgeInsets {
            self.inset.get()
        }

        fn set_content_inset(&self, inset: EdgeInsets) {
            self.inset.set(inset);
        }
    }

    fn drag(offset: f32) -> ScrollEvent {
        ScrollEvent::Scroll(ScrollMetrics::dragging(offset))
    }

    #[test]
    fn test_build_rejects_invalid_expanded_height() {
        let list = Rc::new(List::default());
        let result = RefreshControl::builder(&list)
            .config(RefreshConfig::default().with_expanded_height(0.0))
            .build();
        assert!(matches!(result, Err(RefreshError::InvalidExpandedHeight(_))));
    }

    #[test]
    fn test_build_adopts_container_inset_as_baseline() {
        let list = Rc::new(List::default());
        list.inset.set(EdgeInsets::top(44.0));

        let control = RefreshControl::builder(&list).build().unwrap();
        assert_eq!(control.default_content_inset(), EdgeInsets::top(44.0));
        assert_eq!(control.state(), PullState::Normal);
        assert!(control.last_updated_at().is_some());
    }

    #[test]
    fn test_set_expanded_height_validates() {
        let list = Rc::new(List::default());
        let mut control = RefreshControl::builder(&list).build().unwrap();

        assert!(control.set_expanded_height(-1.0).is_err());
        assert_eq!(control.expanded_height(), 70.0);

        control.set_expanded_height(50.0).unwrap();
        control.handle_event(drag(-50.0));
        assert_eq!(control.state(), PullState::Ready);
    }

    #[test]
    fn test_display_progress_uses_pull_curve() {
        let list = Rc::new(List::default());
        let mut control = RefreshControl::builder(&list).build().unwrap();
        control.set_pull_curve(PullCurve::Damped { limit: 0.5 });

        control.handle_event(drag(-140.0));
        assert_eq!(control.progress(), 2.0);
        assert!(control.display_progress() < 1.5);
        // thresholds use the raw value
        assert_eq!(control.state(), PullState::Ready);
    }

    #[test]
    fn test_dropped_container_keeps_state_machine_running() {
        let list = Rc::new(List::default());
        let mut control = RefreshControl::builder(&list).build().unwrap();
        drop(list);

        assert!(control.start_loading_and_expand(true, false, None));
        assert_eq!(control.state(), PullState::Loading);
        assert_eq!(control.content_inset(), EdgeInsets::top(70.0));
        assert!(control.finish_loading(false, None));
        assert_eq!(control.state(), PullState::Normal);
    }

    struct Gate {
        allow: bool,
        asked: Cell<usize>,
    }

    impl RefreshDelegate for Gate {
        fn should_start_loading(&self) -> bool {
            self.asked.set(self.asked.get() + 1);
            self.allow
        }
    }

    #[test]
    fn test_set_delegate_binds_gate() {
        let list = Rc::new(List::default());
        let mut control = RefreshControl::builder(&list).build().unwrap();
        let gate = Rc::new(Gate {
            allow: false,
            asked: Cell::new(0),
        });
        control.set_delegate(&gate);

        control.handle_event(drag(-90.0));
        control.handle_event(ScrollEvent::DragEnd(ScrollMetrics::new(-90.0)));
        assert_eq!(gate.asked.get(), 1);
        control.tick(1000.0);
        assert_eq!(control.state(), PullState::Normal);

        control.clear_delegate();
        control.handle_event(drag(-90.0));
        control.handle_event(ScrollEvent::DragEnd(ScrollMetrics::new(-90.0)));
        assert_eq!(gate.asked.get(), 1);
        assert_eq!(control.state(), PullState::Loading);
    }

    #[test]
    fn test_safe_area_shifts_threshold() {
        let list = Rc::new(List::default());
        let mut control = RefreshControl::builder(&list).build().unwrap();

        let pull = |offset| {
            ScrollEvent::Scroll(
                ScrollMetrics::dragging(offset).with_safe_area(EdgeInsets::top(20.0)),
            )
        };
        control.handle_event(pull(-80.0));
        assert_eq!(control.state(), PullState::Normal);
        control.handle_event(pull(-90.0));
        assert_eq!(control.state(), PullState::Ready);

        control.set_safe_area(SafeArea::Ignore);
        control.handle_event(pull(-60.0));
        assert_eq!(control.state(), PullState::Normal);
    }

    #[test]
    fn test_history_records_transitions() {
        let list = Rc::new(List::default());
        let mut control = RefreshControl::builder(&list).build().unwrap();
        control.start_loading_and_expand(false, false, None);
        control.finish_loading(false, None);

        let path: Vec<_> = control.history().iter().map(|t| t.to).collect();
        assert_eq!(
            path,
            vec![PullState::Loading, PullState::Closing, PullState::Normal]
        );

        control.clear_history();
        assert!(control.history().is_empty());
    }

    #[test]
    fn test_control_frame_follows_style() {
        let list = Rc::new(List::default());
        let mut control = RefreshControl::builder(&list)
            .config(RefreshConfig::default().with_style(Style::Static))
            .build()
            .unwrap();

        control.handle_event(ScrollEvent::Scroll(
            ScrollMetrics::dragging(-30.0).with_viewport(Size::new(320.0, 480.0)),
        ));
        assert_eq!(control.control_frame(), Rect::new(0.0, -30.0, 320.0, 30.0));

        control.set_style(Style::Scrolling);
        assert_eq!(control.control_frame(), Rect::new(0.0, -70.0, 320.0, 70.0));
    }
}
