//! One dashboard: a placed grid plus the widget states it owns.

use crate::config::DashboardConfig;
use crate::grid::Grid;
use crate::source::MetricSource;
use crate::theme::Theme;
use crate::value::MetricValue;
use crate::widget::MetricWidgetState;

/// A single dashboard view: configuration, placement, and widget states.
#[derive(Debug, Clone)]
pub struct DashboardView {
    config: DashboardConfig,
    grid: Grid,
    widgets: Vec<MetricWidgetState>,
}

impl DashboardView {
    /// Build a view from a validated configuration.
    ///
    /// The grid is placed once here and never recomputed: widgets do not
    /// move after construction.
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        let grid = Grid::place(config.grid_rows, config.grid_columns, &config.widgets);
        let widgets = config
            .widgets
            .iter()
            .cloned()
            .map(MetricWidgetState::new)
            .collect();
        Self {
            config,
            grid,
            widgets,
        }
    }

    /// The dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// The placed grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Widget states, in configuration order.
    #[must_use]
    pub fn widgets(&self) -> &[MetricWidgetState] {
        &self.widgets
    }

    /// Dashboard title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Refresh every widget from one batched backend round-trip.
    ///
    /// Queries are gathered in configured order with duplicates preserved;
    /// the batch result is keyed by query text, so widgets sharing a query
    /// receive the identical value. A query missing from the result reads
    /// as `Absent`. If the whole batch fails, every widget receives that
    /// failure as an error value and the dashboard keeps running.
    pub fn refresh_all(&mut self, source: &mut dyn MetricSource, theme: &Theme) {
        let queries: Vec<String> = self
            .widgets
            .iter()
            .map(|w| w.spec().query.clone())
            .collect();

        match source.query_batch(&queries) {
            Ok(results) => {
                for widget in &mut self.widgets {
                    let value = results
                        .get(&widget.spec().query)
                        .cloned()
                        .unwrap_or(MetricValue::Absent);
                    widget.update_value(value, theme);
                }
            }
            Err(err) => {
                let value = MetricValue::Error(format!("Error: {err}"));
                for widget in &mut self.widgets {
                    widget.update_value(value.clone(), theme);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{WidgetKind, WidgetSpec};
    use crate::source::SourceError;
    use crate::widget::RenderContent;
    use std::collections::HashMap;

    /// Scripted source that records the batches it receives.
    struct ScriptedSource {
        responses: Vec<Result<HashMap<String, MetricValue>, SourceError>>,
        batches: Vec<Vec<String>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<HashMap<String, MetricValue>, SourceError>>) -> Self {
            Self {
                responses,
                batches: Vec::new(),
            }
        }
    }

    impl MetricSource for ScriptedSource {
        fn query_batch(
            &mut self,
            queries: &[String],
        ) -> Result<HashMap<String, MetricValue>, SourceError> {
            self.batches.push(queries.to_vec());
            if self.responses.is_empty() {
                Ok(HashMap::new())
            } else {
                self.responses.remove(0)
            }
        }
    }

    fn config(widgets: Vec<WidgetSpec>) -> DashboardConfig {
        DashboardConfig {
            title: "test".into(),
            refresh_interval: 5,
            grid_rows: 2,
            grid_columns: 2,
            widgets,
        }
    }

    fn text_content(view: &DashboardView, index: usize) -> String {
        match view.widgets()[index].render_instruction().content {
            RenderContent::Text(t) => t,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_queries_sent_in_order_with_duplicates() {
        let widgets = vec![
            WidgetSpec::new(WidgetKind::Text, "up", 0, 0),
            WidgetSpec::new(WidgetKind::Text, "load", 0, 1),
            WidgetSpec::new(WidgetKind::Text, "up", 1, 0),
        ];
        let mut view = DashboardView::new(config(widgets));
        let mut source = ScriptedSource::new(vec![Ok(HashMap::new())]);
        view.refresh_all(&mut source, &Theme::default());
        assert_eq!(
            source.batches[0],
            vec!["up".to_string(), "load".to_string(), "up".to_string()]
        );
    }

    #[test]
    fn test_shared_query_shares_result() {
        let widgets = vec![
            WidgetSpec::new(WidgetKind::Text, "up", 0, 0),
            WidgetSpec::new(WidgetKind::Text, "up", 0, 1),
        ];
        let mut view = DashboardView::new(config(widgets));
        let mut results = HashMap::new();
        results.insert("up".to_string(), MetricValue::Number(1.0));
        let mut source = ScriptedSource::new(vec![Ok(results)]);
        view.refresh_all(&mut source, &Theme::default());
        assert_eq!(text_content(&view, 0), "1");
        assert_eq!(text_content(&view, 1), "1");
    }

    #[test]
    fn test_missing_result_reads_as_absent() {
        let widgets = vec![
            WidgetSpec::new(WidgetKind::Text, "present", 0, 0),
            WidgetSpec::new(WidgetKind::Text, "missing", 0, 1),
        ];
        let mut view = DashboardView::new(config(widgets));
        let mut results = HashMap::new();
        results.insert("present".to_string(), MetricValue::Number(2.0));
        let mut source = ScriptedSource::new(vec![Ok(results)]);
        view.refresh_all(&mut source, &Theme::default());
        assert_eq!(text_content(&view, 0), "2");
        assert_eq!(text_content(&view, 1), "No data");
    }

    #[test]
    fn test_whole_batch_failure_errors_every_widget() {
        let widgets = vec![
            WidgetSpec::new(WidgetKind::Text, "a", 0, 0),
            WidgetSpec::new(WidgetKind::Text, "b", 0, 1),
        ];
        let mut view = DashboardView::new(config(widgets));
        let mut source =
            ScriptedSource::new(vec![Err(SourceError::new("backend unreachable"))]);
        view.refresh_all(&mut source, &Theme::default());
        for index in 0..2 {
            assert_eq!(text_content(&view, index), "Error: backend unreachable");
        }
    }

    #[test]
    fn test_per_query_error_only_hits_its_widget() {
        let widgets = vec![
            WidgetSpec::new(WidgetKind::Text, "good", 0, 0),
            WidgetSpec::new(WidgetKind::Text, "bad", 0, 1),
        ];
        let mut view = DashboardView::new(config(widgets));
        let mut results = HashMap::new();
        results.insert("good".to_string(), MetricValue::Number(3.0));
        results.insert(
            "bad".to_string(),
            MetricValue::Error("Error: parse failure".into()),
        );
        let mut source = ScriptedSource::new(vec![Ok(results)]);
        view.refresh_all(&mut source, &Theme::default());
        assert_eq!(text_content(&view, 0), "3");
        assert_eq!(text_content(&view, 1), "Error: parse failure");
    }

    #[test]
    fn test_grid_placed_at_construction() {
        let widgets = vec![WidgetSpec::new(WidgetKind::Text, "q", 0, 0).with_span(2, 2)];
        let view = DashboardView::new(config(widgets));
        assert_eq!(view.grid().rows(), 2);
        assert_eq!(view.grid().primaries().count(), 1);
    }
}
