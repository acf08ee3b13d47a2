//! YAML dashboard configuration loading and validation for Mirador.
//!
//! The loader deserializes [`DashboardConfig`] values and validates them
//! once; the core crates consume the result read-only and never touch the
//! filesystem themselves.

mod error;

pub use error::ParseError;

use std::fs;
use std::path::Path;

use mirador_core::{DashboardConfig, WidgetSpec};

/// Parse a dashboard configuration from a YAML string.
///
/// # Errors
///
/// Returns a [`ParseError`] when the YAML is malformed or the
/// configuration fails validation.
pub fn from_str(input: &str) -> Result<DashboardConfig, ParseError> {
    let config: DashboardConfig = serde_yaml_ng::from_str(input)?;
    validate(&config)?;
    Ok(config)
}

/// Load one dashboard configuration from a YAML file.
///
/// # Errors
///
/// Returns a [`ParseError`] when the file cannot be read, the YAML is
/// malformed, or validation fails.
pub fn load_dashboard(path: impl AsRef<Path>) -> Result<DashboardConfig, ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&text)
}

/// Load several dashboard configurations, preserving order.
///
/// # Errors
///
/// Fails on the first file that does not load; startup is all-or-nothing.
pub fn load_dashboards(
    paths: impl IntoIterator<Item = impl AsRef<Path>>,
) -> Result<Vec<DashboardConfig>, ParseError> {
    paths.into_iter().map(load_dashboard).collect()
}

/// Validate a deserialized configuration.
///
/// The core clips out-of-range widgets defensively, but configurations
/// that do not fit their grid are almost always mistakes, so they are
/// rejected here at load time.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first violated constraint.
pub fn validate(config: &DashboardConfig) -> Result<(), ParseError> {
    if config.grid_rows == 0 {
        return Err(invalid("grid_rows", "must be at least 1"));
    }
    if config.grid_columns == 0 {
        return Err(invalid("grid_columns", "must be at least 1"));
    }
    if config.refresh_interval == 0 {
        return Err(invalid("refresh_interval", "must be at least 1"));
    }

    for (index, widget) in config.widgets.iter().enumerate() {
        validate_widget(config, index, widget)?;
    }

    Ok(())
}

fn validate_widget(
    config: &DashboardConfig,
    index: usize,
    widget: &WidgetSpec,
) -> Result<(), ParseError> {
    if widget.query.trim().is_empty() {
        return Err(invalid(&format!("widgets[{index}].query"), "must not be empty"));
    }
    if widget.row_span == 0 || widget.column_span == 0 {
        return Err(invalid(
            &format!("widgets[{index}]"),
            "row_span and column_span must be at least 1",
        ));
    }
    if u32::from(widget.row) + u32::from(widget.row_span) > u32::from(config.grid_rows) {
        return Err(ParseError::Validation(format!(
            "widget at row {} with row_span {} exceeds grid_rows {}",
            widget.row, widget.row_span, config.grid_rows
        )));
    }
    if u32::from(widget.column) + u32::from(widget.column_span) > u32::from(config.grid_columns) {
        return Err(ParseError::Validation(format!(
            "widget at column {} with column_span {} exceeds grid_columns {}",
            widget.column, widget.column_span, config.grid_columns
        )));
    }
    for (rule_index, rule) in widget.conditional_formats.iter().enumerate() {
        if rule.condition.trim().is_empty() {
            return Err(invalid(
                &format!("widgets[{index}].conditional_formats[{rule_index}].condition"),
                "must not be empty",
            ));
        }
    }
    if widget.sparkline_history == 0 {
        return Err(invalid(
            &format!("widgets[{index}].sparkline_history"),
            "must be at least 1",
        ));
    }
    Ok(())
}

fn invalid(field: &str, message: &str) -> ParseError {
    ParseError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}
