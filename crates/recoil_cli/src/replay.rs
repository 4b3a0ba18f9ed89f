//! Headless replay of gesture traces
//!
//! Stands in for a real scroll view: it applies inset writes immediately,
//! reports them back as inset-change notifications after each step, and
//! records every callback the control makes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::SystemTime;

use anyhow::Result;
use recoil_core::{EdgeInsets, PullState, ScrollEvent, ScrollMetrics, ScrollPhase, Size};
use recoil_refresh::{
    ContentView, ControlStatus, RefreshConfig, RefreshControl, RefreshDelegate, ScrollContainer,
    StatusContentView,
};
use tracing::debug;

use crate::trace::{Step, Trace};

/// Frame length used to advance animations
const FRAME_MS: u32 = 16;

const VIEWPORT: Size = Size::new(375.0, 667.0);

type Log = Rc<RefCell<Vec<String>>>;

fn format_inset(inset: EdgeInsets) -> String {
    format!(
        "[{}, {}, {}, {}]",
        inset.top, inset.left, inset.bottom, inset.right
    )
}

fn format_animated(animated: bool) -> &'static str {
    if animated {
        "animated"
    } else {
        "immediate"
    }
}

#[derive(Default)]
struct HeadlessList {
    offset: Cell<f32>,
    inset: Cell<EdgeInsets>,
    /// An inset write the control has not been told about yet
    unreported: Cell<bool>,
}

impl ScrollContainer for HeadlessList {
    fn content_offset(&self) -> f32 {
        self.offset.get()
    }

    fn content_inset(&self) -> EdgeInsets {
        self.inset.get()
    }

    fn set_content_inset(&self, inset: EdgeInsets) {
        self.inset.set(inset);
        self.unreported.set(true);
    }

    fn scroll_to_top(&self) {
        self.offset.set(-self.inset.get().top);
    }
}

struct ReplayDelegate {
    log: Log,
    deny_next_start: Cell<bool>,
}

impl ReplayDelegate {
    fn record(&self, line: String) {
        self.log.borrow_mut().push(line);
    }
}

impl RefreshDelegate for ReplayDelegate {
    fn should_start_loading(&self) -> bool {
        let allow = !self.deny_next_start.replace(false);
        self.record(format!("  delegate: should_start_loading -> {allow}"));
        allow
    }

    fn did_start_loading(&self) {
        self.record("  delegate: did_start_loading".to_string());
    }

    fn did_finish_loading(&self) {
        self.record("  delegate: did_finish_loading".to_string());
    }

    fn last_updated_at(&self) -> Option<SystemTime> {
        None
    }

    fn did_update_content_inset(&self, inset: EdgeInsets) {
        self.record(format!("  inset: {}", format_inset(inset)));
    }

    fn will_transition(&self, from: PullState, to: PullState, animated: bool) {
        self.record(format!(
            "  will {from} -> {to} ({})",
            format_animated(animated)
        ));
    }

    fn did_transition(&self, from: PullState, to: PullState, animated: bool) {
        self.record(format!(
            "  did  {from} -> {to} ({})",
            format_animated(animated)
        ));
    }
}

/// Wraps the status view and logs the text it would show
struct LoggingContentView {
    inner: StatusContentView,
    log: Log,
}

impl ContentView for LoggingContentView {
    fn set_state(&mut self, state: PullState, status: &ControlStatus) {
        self.inner.set_state(state, status);
        self.log
            .borrow_mut()
            .push(format!("  view: \"{}\"", self.inner.status_text()));
    }

    fn set_pull_progress(&mut self, progress: f32) {
        self.inner.set_pull_progress(progress);
    }

    fn set_last_updated_at(&mut self, at: SystemTime, status: &ControlStatus) {
        self.inner.set_last_updated_at(at, status);
    }
}

/// Outcome of a replay
#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub lines: Vec<String>,
    pub final_state: PullState,
    pub final_inset: EdgeInsets,
    pub transitions: usize,
}

pub struct Replay {
    control: RefreshControl,
    list: Rc<HeadlessList>,
    delegate: Rc<ReplayDelegate>,
    log: Log,
}

impl Replay {
    pub fn new(config: RefreshConfig) -> Result<Self> {
        let log: Log = Rc::default();
        let list = Rc::new(HeadlessList::default());
        let delegate = Rc::new(ReplayDelegate {
            log: log.clone(),
            deny_next_start: Cell::new(false),
        });
        let view = LoggingContentView {
            inner: StatusContentView::new(),
            log: log.clone(),
        };

        let control = RefreshControl::builder(&list)
            .config(config)
            .delegate(&delegate)
            .content_view(Box::new(view))
            .build()?;

        Ok(Self {
            control,
            list,
            delegate,
            log,
        })
    }

    pub fn run(mut self, trace: &Trace) -> ReplayReport {
        if let Some(name) = &trace.name {
            self.log.borrow_mut().push(format!("trace: {name}"));
        }

        for (index, step) in trace.steps.iter().enumerate() {
            self.log
                .borrow_mut()
                .push(format!("step {}: {}", index + 1, step.describe()));
            debug!(step = index + 1, ?step, "replaying");
            self.apply(step);
            self.report_inset();
        }

        let final_state = self.control.state();
        self.log.borrow_mut().push(format!(
            "final: {final_state}, inset {}",
            format_inset(self.list.inset.get())
        ));

        ReplayReport {
            lines: self.log.borrow().clone(),
            final_state,
            final_inset: self.list.inset.get(),
            transitions: self.control.history().len(),
        }
    }

    fn apply(&mut self, step: &Step) {
        match *step {
            Step::Drag { offset } => self.scroll(offset, ScrollPhase::Dragging),
            Step::Decelerate { offset } => self.scroll(offset, ScrollPhase::Decelerating),
            Step::Release { offset } => {
                self.list.offset.set(offset);
                let metrics = self.metrics(ScrollPhase::Idle);
                self.control.handle_event(ScrollEvent::DragEnd(metrics));
            }
            Step::StartLoading { expand, animated } => {
                if !self.control.start_loading_and_expand(expand, animated, None) {
                    self.log
                        .borrow_mut()
                        .push("  rejected: already loading".to_string());
                }
            }
            Step::FinishLoading { animated } => {
                if !self.control.finish_loading(animated, None) {
                    self.log
                        .borrow_mut()
                        .push("  rejected: not loading".to_string());
                }
            }
            Step::Tick { ms } => {
                let mut remaining = ms;
                while remaining > 0 && self.control.is_animating() {
                    let frame = remaining.min(FRAME_MS);
                    self.control.tick(frame as f32);
                    self.report_inset();
                    remaining -= frame;
                }
            }
            Step::SetInset {
                top,
                left,
                bottom,
                right,
            } => {
                let inset = EdgeInsets::new(top, left, bottom, right);
                self.list.inset.set(inset);
                let metrics = self.metrics(ScrollPhase::Idle);
                self.control.handle_event(ScrollEvent::InsetChanged(metrics));
            }
            Step::DenyNextStart => self.delegate.deny_next_start.set(true),
        }
    }

    fn scroll(&mut self, offset: f32, phase: ScrollPhase) {
        self.list.offset.set(offset);
        let metrics = self.metrics(phase);
        self.control.handle_event(ScrollEvent::Scroll(metrics));
    }

    fn metrics(&self, phase: ScrollPhase) -> ScrollMetrics {
        ScrollMetrics::new(self.list.offset.get())
            .with_phase(phase)
            .with_inset(self.list.inset.get())
            .with_viewport(VIEWPORT)
    }

    /// Deliver the inset-change notification a real container would send
    /// after the control wrote to it
    fn report_inset(&mut self) {
        if self.list.unreported.replace(false) {
            let metrics = self.metrics(ScrollPhase::Idle);
            self.control.handle_event(ScrollEvent::InsetChanged(metrics));
        }
    }
}
