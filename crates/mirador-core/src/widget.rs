//! Per-widget state: current value, sparkline history, and the render
//! instruction handed to the toolkit.

use std::collections::VecDeque;

use crate::config::{WidgetKind, WidgetSpec};
use crate::format::{self, format_value};
use crate::style::{self, ResolvedStyle};
use crate::theme::Theme;
use crate::value::MetricValue;

/// Inline marker for values a widget kind cannot digest (e.g. a
/// non-numeric sample on a sparkline).
const INLINE_ERROR: &str = "Error";

/// Lifecycle of a widget's value display.
///
/// `Loading` only holds until the first `update_value`; after that the
/// widget cycles through `Displaying` forever. Errors are values, not a
/// separate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    /// No value received yet.
    Loading,
    /// At least one value received.
    Displaying,
}

/// Bounded FIFO of the most recent numeric samples for one sparkline.
#[derive(Debug, Clone)]
pub struct SparklineHistory {
    points: VecDeque<f64>,
    capacity: usize,
}

impl SparklineHistory {
    /// Create a history holding at most `capacity` points (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a sample, evicting the oldest when past capacity.
    pub fn push(&mut self, point: f64) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Samples in arrival order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.points.iter().copied().collect()
    }

    /// Number of stored samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no samples are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// What the toolkit should paint inside a widget's box.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderContent {
    /// Centered text.
    Text(String),
    /// Large block-glyph digits.
    Digits(String),
    /// Progress bar: absolute amount against a total, plus a caption.
    Progress {
        /// Current absolute amount.
        amount: f64,
        /// Configured (or default) total.
        total: f64,
        /// Formatted caption under the bar.
        label: String,
    },
    /// Sparkline points plus a caption.
    Sparkline {
        /// History in arrival order.
        points: Vec<f64>,
        /// Formatted caption under the graph.
        label: String,
    },
}

/// The full per-widget record handed across the core/toolkit boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInstruction {
    /// Content to paint.
    pub content: RenderContent,
    /// Style to paint it with.
    pub style: ResolvedStyle,
}

/// State machine for one configured widget.
#[derive(Debug, Clone)]
pub struct MetricWidgetState {
    spec: WidgetSpec,
    phase: WidgetPhase,
    current: MetricValue,
    history: SparklineHistory,
    content: RenderContent,
    style: ResolvedStyle,
}

impl MetricWidgetState {
    /// Create the initial (`Loading`) state for a spec.
    #[must_use]
    pub fn new(spec: WidgetSpec) -> Self {
        let history = SparklineHistory::new(spec.sparkline_history);
        let content = match spec.kind {
            WidgetKind::Digits => RenderContent::Digits("---".to_string()),
            WidgetKind::Sparkline => RenderContent::Sparkline {
                points: Vec::new(),
                label: "Loading...".to_string(),
            },
            WidgetKind::Progress => RenderContent::Progress {
                amount: 0.0,
                total: spec.effective_progress_total(),
                label: "Loading...".to_string(),
            },
            WidgetKind::Text => RenderContent::Text("Loading...".to_string()),
        };
        Self {
            spec,
            phase: WidgetPhase::Loading,
            current: MetricValue::Absent,
            history,
            content,
            style: ResolvedStyle::default(),
        }
    }

    /// The widget's configuration.
    #[must_use]
    pub fn spec(&self) -> &WidgetSpec {
        &self.spec
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> WidgetPhase {
        self.phase
    }

    /// The last value received.
    #[must_use]
    pub fn current_value(&self) -> &MetricValue {
        &self.current
    }

    /// Number of stored sparkline samples.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Apply a freshly fetched value.
    ///
    /// Updates the kind-specific content, then restyles against the
    /// pre-coercion value. Values a kind cannot digest degrade to an
    /// inline error marker; they never abort the refresh cycle for
    /// sibling widgets.
    pub fn update_value(&mut self, raw: MetricValue, theme: &Theme) {
        self.phase = WidgetPhase::Displaying;
        self.current = raw.clone();

        match &raw {
            MetricValue::Absent => self.set_caption(format::NO_DATA.to_string()),
            MetricValue::Error(msg) => self.set_caption(msg.clone()),
            _ => self.update_content(&raw),
        }

        self.style = style::resolve(&raw, &self.spec.conditional_formats, theme);
    }

    fn update_content(&mut self, raw: &MetricValue) {
        match self.spec.kind {
            WidgetKind::Sparkline => match raw.coerce_number() {
                Some(n) => {
                    self.history.push(n);
                    self.content = RenderContent::Sparkline {
                        points: self.history.to_vec(),
                        label: format_value(raw, &self.spec.format),
                    };
                }
                // History is left untouched on a bad sample.
                None => self.set_caption(INLINE_ERROR.to_string()),
            },
            WidgetKind::Progress => match raw.coerce_number() {
                Some(n) => {
                    // The value is always an absolute amount against the
                    // configured total; it is never rescaled.
                    self.content = RenderContent::Progress {
                        amount: n,
                        total: self.spec.effective_progress_total(),
                        label: format_value(raw, &self.spec.format),
                    };
                }
                None => self.set_caption(INLINE_ERROR.to_string()),
            },
            WidgetKind::Digits => {
                self.content = RenderContent::Digits(format_value(raw, &self.spec.format));
            }
            WidgetKind::Text => {
                self.content = RenderContent::Text(format_value(raw, &self.spec.format));
            }
        }
    }

    /// Replace the textual part of the content, preserving sparkline
    /// points and progress amounts already on screen.
    fn set_caption(&mut self, text: String) {
        match &mut self.content {
            RenderContent::Text(t) | RenderContent::Digits(t) => *t = text,
            RenderContent::Progress { label, .. } | RenderContent::Sparkline { label, .. } => {
                *label = text;
            }
        }
    }

    /// The record the toolkit paints from.
    #[must_use]
    pub fn render_instruction(&self) -> RenderInstruction {
        RenderInstruction {
            content: self.content.clone(),
            style: self.style,
        }
    }
}
