//! Dashboard and widget configuration types.
//!
//! These are produced by the config loader, validated once, and read-only
//! afterwards. One `DashboardConfig` is owned by one dashboard view.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Widget flavors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Plain text value.
    #[default]
    Text,
    /// Large block-glyph digits.
    Digits,
    /// Inline history graph.
    Sparkline,
    /// Progress bar.
    Progress,
}

/// Border styles for widget boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    /// No border.
    None,
    /// Single-line border.
    #[default]
    Solid,
    /// Dashed border.
    Dashed,
    /// Double-line border.
    Double,
    /// Thick border.
    Heavy,
    /// Rounded corners.
    Rounded,
}

/// Summary function applied when a sparkline has more points than columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SparklineSummary {
    /// Maximum of the bucket.
    #[default]
    Max,
    /// Minimum of the bucket.
    Min,
    /// Arithmetic mean of the bucket.
    Mean,
}

impl SparklineSummary {
    /// Summarize a non-empty bucket of points; empty buckets yield 0.
    #[must_use]
    pub fn apply(self, points: &[f64]) -> f64 {
        if points.is_empty() {
            return 0.0;
        }
        match self {
            Self::Max => points.iter().copied().fold(f64::MIN, f64::max),
            Self::Min => points.iter().copied().fold(f64::MAX, f64::min),
            Self::Mean => points.iter().sum::<f64>() / points.len() as f64,
        }
    }
}

/// One conditional formatting rule: a condition over `value` plus the
/// style fields to apply when it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalFormat {
    /// Expression evaluated with the current value bound as `value`.
    pub condition: String,
    /// Border color when the condition is true (literal or `$theme-var`).
    #[serde(default)]
    pub border_color: Option<String>,
    /// Text color when the condition is true.
    #[serde(default)]
    pub text_color: Option<String>,
    /// Background color when the condition is true.
    #[serde(default)]
    pub background_color: Option<String>,
    /// Widget visibility when the condition is true.
    #[serde(default)]
    pub visible: Option<bool>,
}

impl ConditionalFormat {
    /// Rule with only a condition; style fields are filled in by the caller.
    #[must_use]
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            border_color: None,
            text_color: None,
            background_color: None,
            visible: None,
        }
    }
}

/// Configuration for a single dashboard widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSpec {
    /// Widget type.
    #[serde(default, rename = "type")]
    pub kind: WidgetKind,
    /// Title shown on the top border.
    #[serde(default)]
    pub title: Option<String>,
    /// Subtitle shown on the bottom border.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Backend query whose result this widget displays.
    pub query: String,
    /// Format template for the value (`{value}` placeholder or a quoted
    /// expression).
    #[serde(default = "default_format")]
    pub format: String,
    /// Grid row (0-indexed).
    pub row: u16,
    /// Grid column (0-indexed).
    pub column: u16,
    /// Rows spanned.
    #[serde(default = "default_span")]
    pub row_span: u16,
    /// Columns spanned.
    #[serde(default = "default_span")]
    pub column_span: u16,
    /// Border style.
    #[serde(default)]
    pub border: BorderStyle,
    /// Conditional formatting rules, evaluated in order.
    #[serde(default)]
    pub conditional_formats: Vec<ConditionalFormat>,
    /// Progress bars: total the value counts against (default 100).
    #[serde(default)]
    pub progress_total: Option<f64>,
    /// Progress bars: show the percentage next to the bar.
    #[serde(default = "default_true")]
    pub show_percentage: bool,
    /// Sparklines: bucket summary function.
    #[serde(default)]
    pub sparkline_summary: SparklineSummary,
    /// Sparklines: how many historical points to keep.
    #[serde(default = "default_history")]
    pub sparkline_history: usize,
}

fn default_format() -> String {
    "{value}".to_string()
}

const fn default_span() -> u16 {
    1
}

const fn default_true() -> bool {
    true
}

const fn default_history() -> usize {
    20
}

impl WidgetSpec {
    /// Minimal spec used as a building block in tests and builders.
    #[must_use]
    pub fn new(kind: WidgetKind, query: impl Into<String>, row: u16, column: u16) -> Self {
        Self {
            kind,
            title: None,
            subtitle: None,
            query: query.into(),
            format: default_format(),
            row,
            column,
            row_span: 1,
            column_span: 1,
            border: BorderStyle::default(),
            conditional_formats: Vec::new(),
            progress_total: None,
            show_percentage: true,
            sparkline_summary: SparklineSummary::default(),
            sparkline_history: default_history(),
        }
    }

    /// Set the span.
    #[must_use]
    pub fn with_span(mut self, row_span: u16, column_span: u16) -> Self {
        self.row_span = row_span;
        self.column_span = column_span;
        self
    }

    /// Set the format template.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Append a conditional format rule.
    #[must_use]
    pub fn with_rule(mut self, rule: ConditionalFormat) -> Self {
        self.conditional_formats.push(rule);
        self
    }

    /// The effective progress total (100 when not configured).
    #[must_use]
    pub fn effective_progress_total(&self) -> f64 {
        self.progress_total.unwrap_or(100.0)
    }
}

/// Complete configuration for one dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Dashboard title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Refresh interval in seconds (>= 1).
    #[serde(default = "default_refresh")]
    pub refresh_interval: u64,
    /// Grid rows (>= 1).
    pub grid_rows: u16,
    /// Grid columns (>= 1).
    pub grid_columns: u16,
    /// Widgets, in placement order.
    #[serde(default)]
    pub widgets: Vec<WidgetSpec>,
}

fn default_title() -> String {
    "Metrics Dashboard".to_string()
}

const fn default_refresh() -> u64 {
    5
}

impl DashboardConfig {
    /// Refresh interval as a `Duration`.
    #[must_use]
    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_interval.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_kind_default() {
        assert_eq!(WidgetKind::default(), WidgetKind::Text);
    }

    #[test]
    fn test_border_style_default() {
        assert_eq!(BorderStyle::default(), BorderStyle::Solid);
    }

    #[test]
    fn test_sparkline_summary_apply() {
        let points = [1.0, 4.0, 2.5];
        assert_eq!(SparklineSummary::Max.apply(&points), 4.0);
        assert_eq!(SparklineSummary::Min.apply(&points), 1.0);
        assert_eq!(SparklineSummary::Mean.apply(&points), 2.5);
    }

    #[test]
    fn test_sparkline_summary_empty() {
        assert_eq!(SparklineSummary::Max.apply(&[]), 0.0);
        assert_eq!(SparklineSummary::Mean.apply(&[]), 0.0);
    }

    #[test]
    fn test_effective_progress_total() {
        let spec = WidgetSpec::new(WidgetKind::Progress, "q", 0, 0);
        assert_eq!(spec.effective_progress_total(), 100.0);

        let spec = WidgetSpec {
            progress_total: Some(512.0),
            ..spec
        };
        assert_eq!(spec.effective_progress_total(), 512.0);
    }

    #[test]
    fn test_refresh_period_floor() {
        let config = DashboardConfig {
            title: "t".into(),
            refresh_interval: 0,
            grid_rows: 1,
            grid_columns: 1,
            widgets: vec![],
        };
        assert_eq!(config.refresh_period(), Duration::from_secs(1));
    }

    #[test]
    fn test_spec_builder() {
        let spec = WidgetSpec::new(WidgetKind::Digits, "up", 1, 2)
            .with_span(2, 3)
            .with_format("{value:.1}")
            .with_rule(ConditionalFormat::new("value > 0"));
        assert_eq!(spec.row_span, 2);
        assert_eq!(spec.column_span, 3);
        assert_eq!(spec.format, "{value:.1}");
        assert_eq!(spec.conditional_formats.len(), 1);
    }
}
