//! Interactive application loop.
//!
//! Single-threaded and timer-driven: one pass polls input, fires any due
//! refresh (the only blocking step, bounded by the metrics client's
//! timeout), and repaints through the differential renderer.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, ClearType};
use mirador_core::{CarouselController, MetricSource, Theme};
use tracing::{debug, info};

use crate::buffer::CellBuffer;
use crate::color::ColorMode;
use crate::draw::draw_dashboard;
use crate::error::TuiError;
use crate::input::{action_for, Action};
use crate::layout::Rect;
use crate::render::DiffRenderer;

/// How long one loop pass waits for input before checking timers.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The dashboard application: carousel, theme, and metrics source.
pub struct App {
    carousel: CarouselController,
    theme: Theme,
    source: Box<dyn MetricSource>,
}

impl App {
    /// Assemble an application.
    #[must_use]
    pub fn new(carousel: CarouselController, theme: Theme, source: Box<dyn MetricSource>) -> Self {
        Self {
            carousel,
            theme,
            source,
        }
    }

    /// Run until the user quits, restoring the terminal on every exit
    /// path.
    ///
    /// # Errors
    ///
    /// Returns a [`TuiError`] for terminal I/O failures.
    pub fn run(&mut self) -> Result<(), TuiError> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;

        let result = self.event_loop(&mut stdout);

        execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        result
    }

    fn event_loop(&mut self, stdout: &mut io::Stdout) -> Result<(), TuiError> {
        let (width, height) = terminal::size()?;
        let mut buffer = CellBuffer::new(width, height);
        let mut renderer = DiffRenderer::new(ColorMode::detect());
        info!(
            dashboards = self.carousel.len(),
            "starting dashboard loop"
        );

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match action_for(key) {
                            Action::Quit => {
                                info!("quit requested");
                                return Ok(());
                            }
                            Action::RefreshNow => self.carousel.manual_refresh(),
                            Action::NextDashboard => self.carousel.next(Instant::now()),
                            Action::PreviousDashboard => self.carousel.previous(Instant::now()),
                            Action::None => {}
                        }
                    }
                    Event::Resize(new_width, new_height) => {
                        buffer = CellBuffer::new(new_width, new_height);
                        renderer.reset();
                        execute!(stdout, terminal::Clear(ClearType::All))?;
                    }
                    _ => {}
                }
            }

            if self.carousel.poll_due(Instant::now()) {
                debug!(
                    dashboard = self.carousel.active().title(),
                    "refreshing active dashboard"
                );
                self.carousel.refresh_active(self.source.as_mut(), &self.theme);
            }

            self.draw_frame(&mut buffer);
            renderer.draw(stdout, &buffer)?;
            stdout.flush()?;
        }
    }

    /// Compose one full frame: header, dashboard grid, footer.
    fn draw_frame(&self, buffer: &mut CellBuffer) {
        let theme = &self.theme;
        buffer.clear(theme.foreground, Some(theme.background));

        let width = buffer.width();
        let height = buffer.height();
        if height == 0 {
            return;
        }

        let header = if self.carousel.len() > 1 {
            format!(
                " {} ({}/{})",
                self.carousel.active().title(),
                self.carousel.active_index() + 1,
                self.carousel.len()
            )
        } else {
            format!(" {}", self.carousel.active().title())
        };
        buffer.put_str(0, 0, &header, theme.foreground, Some(theme.background), true);

        if height > 2 {
            let area = Rect::new(0, 1, width, height - 2);
            draw_dashboard(buffer, area, self.carousel.active(), theme);

            let footer = " q quit · r refresh · ←/→ dashboards";
            buffer.put_str(
                0,
                height - 1,
                footer,
                theme.dim,
                Some(theme.background),
                false,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirador_core::{
        DashboardConfig, DashboardView, MetricValue, SourceError, WidgetKind, WidgetSpec,
    };
    use std::collections::HashMap;

    struct UpSource;

    impl MetricSource for UpSource {
        fn query_batch(
            &mut self,
            queries: &[String],
        ) -> Result<HashMap<String, MetricValue>, SourceError> {
            Ok(queries
                .iter()
                .map(|q| (q.clone(), MetricValue::Number(1.0)))
                .collect())
        }
    }

    fn app(dashboards: usize) -> App {
        let views = (0..dashboards)
            .map(|i| {
                DashboardView::new(DashboardConfig {
                    title: format!("Board {i}"),
                    refresh_interval: 5,
                    grid_rows: 1,
                    grid_columns: 1,
                    widgets: vec![WidgetSpec::new(WidgetKind::Text, "up", 0, 0)],
                })
            })
            .collect();
        let carousel = CarouselController::new(views, Instant::now()).unwrap();
        App::new(carousel, Theme::default(), Box::new(UpSource))
    }

    #[test]
    fn test_frame_has_header_and_footer() {
        let mut app = app(2);
        let mut buffer = CellBuffer::new(40, 10);
        let theme = app.theme.clone();
        app.carousel.poll_due(Instant::now());
        app.carousel.refresh_active(app.source.as_mut(), &theme);
        app.draw_frame(&mut buffer);
        assert!(buffer.row_text(0).contains("Board 0 (1/2)"));
        assert!(buffer.row_text(9).contains("q quit"));
    }

    #[test]
    fn test_single_dashboard_header_omits_position() {
        let app = app(1);
        let mut buffer = CellBuffer::new(40, 10);
        app.draw_frame(&mut buffer);
        assert!(buffer.row_text(0).contains("Board 0"));
        assert!(!buffer.row_text(0).contains("(1/1)"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = app(1);
        let mut buffer = CellBuffer::new(3, 1);
        app.draw_frame(&mut buffer);
        let mut zero = CellBuffer::new(0, 0);
        app.draw_frame(&mut zero);
    }
}
