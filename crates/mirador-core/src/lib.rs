//! Core engines for the Mirador metrics dashboard.
//!
//! This crate is pure: no I/O, no clocks, no terminal. It owns the pieces
//! with real invariants — grid placement, the refresh/carousel state
//! machine, and the formatting/styling engine — and exposes narrow seams
//! ([`MetricSource`], [`RenderInstruction`]) for the metrics client and
//! the widget toolkit that live in sibling crates.
//!
//! Data flow: the carousel selects the active [`DashboardView`]; a refresh
//! gathers every widget's query into one batch for the [`MetricSource`];
//! results route back into each [`MetricWidgetState`], which recomputes its
//! display content and resolved style from scratch.

pub mod carousel;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod expr;
pub mod format;
pub mod grid;
pub mod source;
pub mod style;
pub mod theme;
pub mod value;
pub mod widget;

pub use carousel::{CarouselController, CarouselError};
pub use color::{Color, ColorParseError};
pub use config::{
    BorderStyle, ConditionalFormat, DashboardConfig, SparklineSummary, WidgetKind, WidgetSpec,
};
pub use dashboard::DashboardView;
pub use expr::{ExprError, ExprValue};
pub use format::format_value;
pub use grid::{Grid, GridCell};
pub use source::{MetricSource, SourceError};
pub use style::{resolve as resolve_style, ResolvedStyle};
pub use theme::Theme;
pub use value::MetricValue;
pub use widget::{MetricWidgetState, RenderContent, RenderInstruction, WidgetPhase};
