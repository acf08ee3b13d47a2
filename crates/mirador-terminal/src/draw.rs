//! Painting a dashboard view into a cell buffer.
//!
//! This is the toolkit side of the core/toolkit boundary: it consumes the
//! placed grid and each widget's [`RenderInstruction`] and decides nothing
//! about values or styling itself.

use mirador_core::{DashboardView, RenderContent, Theme};

use crate::buffer::CellBuffer;
use crate::layout::{span_rect, Rect};
use crate::widgets::{
    draw_border, draw_digits, draw_progress, draw_sparkline, draw_text_centered,
};

/// Paint every visible widget of `view` into `area`.
pub fn draw_dashboard(buf: &mut CellBuffer, area: Rect, view: &DashboardView, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    let rows = view.config().grid_rows;
    let columns = view.config().grid_columns;

    for (_, _, index) in view.grid().primaries() {
        let Some(widget) = view.widgets().get(index) else {
            continue;
        };
        let spec = widget.spec();
        let rect = span_rect(area, rows, columns, spec);
        if rect.width < 3 || rect.height < 3 {
            continue;
        }

        let instruction = widget.render_instruction();
        if !instruction.style.visible {
            continue;
        }

        let border_color = instruction.style.border_color.unwrap_or(theme.border);
        let text_color = instruction.style.text_color.unwrap_or(theme.foreground);
        let bg = instruction.style.background_color;

        if let Some(background) = bg {
            buf.fill_bg(rect, background);
        }
        draw_border(
            buf,
            rect,
            spec.border,
            border_color,
            spec.title.as_deref(),
            spec.subtitle.as_deref(),
        );

        // The content area shrinks by one cell on every side regardless of
        // border style so widgets stay aligned across a dashboard.
        let content = rect.inner(1);
        if content.is_empty() {
            continue;
        }

        match instruction.content {
            RenderContent::Text(ref value) => {
                draw_text_centered(buf, content, value, text_color, bg, false);
            }
            RenderContent::Digits(ref value) => {
                draw_digits(buf, content, value, text_color, bg);
            }
            RenderContent::Progress {
                amount,
                total,
                ref label,
            } => {
                let (bar, caption) = split_caption(content);
                draw_progress(buf, bar, amount, total, spec.show_percentage, text_color);
                if let Some(caption) = caption {
                    draw_text_centered(buf, caption, label, text_color, bg, false);
                }
            }
            RenderContent::Sparkline {
                ref points,
                ref label,
            } => {
                let (graph, caption) = split_caption(content);
                draw_sparkline(buf, graph, points, spec.sparkline_summary, text_color);
                if let Some(caption) = caption {
                    draw_text_centered(buf, caption, label, text_color, bg, false);
                }
            }
        }
    }
}

/// Split a content area into the main region and an optional one-row
/// caption strip at the bottom.
fn split_caption(content: Rect) -> (Rect, Option<Rect>) {
    if content.height < 2 {
        return (content, None);
    }
    let main = Rect::new(content.x, content.y, content.width, content.height - 1);
    let caption = Rect::new(
        content.x,
        content.y + content.height - 1,
        content.width,
        1,
    );
    (main, Some(caption))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirador_core::{
        ConditionalFormat, DashboardConfig, MetricSource, MetricValue, SourceError, WidgetKind,
        WidgetSpec,
    };
    use std::collections::HashMap;

    struct FixedSource(HashMap<String, MetricValue>);

    impl MetricSource for FixedSource {
        fn query_batch(
            &mut self,
            _queries: &[String],
        ) -> Result<HashMap<String, MetricValue>, SourceError> {
            Ok(self.0.clone())
        }
    }

    fn refreshed_view(widgets: Vec<WidgetSpec>, values: &[(&str, MetricValue)]) -> DashboardView {
        let mut view = DashboardView::new(DashboardConfig {
            title: "t".into(),
            refresh_interval: 5,
            grid_rows: 1,
            grid_columns: 1,
            widgets,
        });
        let mut source = FixedSource(
            values
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        );
        view.refresh_all(&mut source, &Theme::default());
        view
    }

    #[test]
    fn test_text_widget_rendered_with_border_and_title() {
        let spec = WidgetSpec {
            title: Some("Up".into()),
            ..WidgetSpec::new(WidgetKind::Text, "up", 0, 0)
        };
        let view = refreshed_view(vec![spec], &[("up", MetricValue::Number(1.0))]);
        let mut buf = CellBuffer::new(20, 5);
        draw_dashboard(&mut buf, Rect::new(0, 0, 20, 5), &view, &Theme::default());
        assert!(buf.row_text(0).contains(" Up "));
        assert!(buf.row_text(2).contains('1'));
        assert!(buf.row_text(0).starts_with('┌'));
    }

    #[test]
    fn test_hidden_widget_not_painted() {
        let spec = WidgetSpec::new(WidgetKind::Text, "up", 0, 0).with_rule(ConditionalFormat {
            visible: Some(false),
            ..ConditionalFormat::new("value == 0")
        });
        let view = refreshed_view(vec![spec], &[("up", MetricValue::Number(0.0))]);
        let mut buf = CellBuffer::new(20, 5);
        draw_dashboard(&mut buf, Rect::new(0, 0, 20, 5), &view, &Theme::default());
        for y in 0..5 {
            assert_eq!(buf.row_text(y).trim(), "");
        }
    }

    #[test]
    fn test_progress_widget_draws_bar_and_caption() {
        let spec = WidgetSpec::new(WidgetKind::Progress, "disk", 0, 0);
        let view = refreshed_view(vec![spec], &[("disk", MetricValue::Number(50.0))]);
        let mut buf = CellBuffer::new(20, 6);
        draw_dashboard(&mut buf, Rect::new(0, 0, 20, 6), &view, &Theme::default());
        let all: String = (0..6).map(|y| buf.row_text(y)).collect();
        assert!(all.contains('█'));
        assert!(all.contains("50"));
    }

    #[test]
    fn test_sparkline_widget_draws_graph() {
        let spec = WidgetSpec::new(WidgetKind::Sparkline, "load", 0, 0);
        let mut view = DashboardView::new(DashboardConfig {
            title: "t".into(),
            refresh_interval: 5,
            grid_rows: 1,
            grid_columns: 1,
            widgets: vec![spec],
        });
        let theme = Theme::default();
        for n in [1.0, 5.0, 2.0] {
            let mut source = FixedSource(
                [("load".to_string(), MetricValue::Number(n))]
                    .into_iter()
                    .collect(),
            );
            view.refresh_all(&mut source, &theme);
        }
        let mut buf = CellBuffer::new(20, 6);
        draw_dashboard(&mut buf, Rect::new(0, 0, 20, 6), &view, &theme);
        let all: String = (0..6).map(|y| buf.row_text(y)).collect();
        assert!(all.contains('█'));
        // Caption shows the latest formatted value.
        assert!(all.contains('2'));
    }

    #[test]
    fn test_too_small_area_skipped() {
        let spec = WidgetSpec::new(WidgetKind::Text, "up", 0, 0);
        let view = refreshed_view(vec![spec], &[("up", MetricValue::Number(1.0))]);
        let mut buf = CellBuffer::new(2, 2);
        draw_dashboard(&mut buf, Rect::new(0, 0, 2, 2), &view, &Theme::default());
        assert_eq!(buf.row_text(0).trim(), "");
    }
}
