//! Value formatting: templates and quoted expressions.
//!
//! Formatting is a total function of `(value, template)`: every failure
//! degrades to a best-effort string and nothing here can abort a refresh.

use crate::expr::{self, ExprValue};
use crate::value::{format_number, MetricValue};

/// Text shown when a query matched no data.
pub const NO_DATA: &str = "No data";

/// Format a metric value for display.
///
/// Policy:
/// - `Absent` renders as `"No data"`.
/// - `Error` messages pass through as-is (already display-ready).
/// - A template containing a quote character is evaluated as an expression
///   with `value` bound (numeric when the value coerces, raw otherwise);
///   any evaluation failure falls back to positional substitution.
/// - Positional substitution replaces `{value}` placeholders, honoring an
///   optional `{value:.N}` precision for numeric values.
#[must_use]
pub fn format_value(value: &MetricValue, template: &str) -> String {
    match value {
        MetricValue::Absent => NO_DATA.to_string(),
        MetricValue::Error(msg) => msg.clone(),
        _ => {
            let number = value.coerce_number();
            let raw = value.raw_string();

            if template.contains('\'') || template.contains('"') {
                let bound = number.map_or_else(|| ExprValue::Str(raw.clone()), ExprValue::Number);
                if let Ok(result) = expr::eval(template, &bound) {
                    return result.render();
                }
            }

            substitute(template, number, &raw)
        }
    }
}

/// Replace `{value}` / `{value:.N}` placeholders in `template`.
///
/// Anything that is not a recognized placeholder is copied through
/// literally, including stray or unclosed braces.
fn substitute(template: &str, number: Option<f64>, raw: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let inner = &after[..close];
                match render_placeholder(inner, number, raw) {
                    Some(rendered) => out.push_str(&rendered),
                    None => {
                        // Not a value placeholder; keep it verbatim.
                        out.push('{');
                        out.push_str(inner);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                // Unclosed brace: copy the remainder literally.
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

fn render_placeholder(inner: &str, number: Option<f64>, raw: &str) -> Option<String> {
    if inner == "value" {
        return Some(number.map_or_else(|| raw.to_string(), format_number));
    }
    let precision = inner
        .strip_prefix("value:.")?
        .trim_end_matches('f')
        .parse::<usize>()
        .ok()?;
    Some(match number {
        Some(n) => format!("{n:.precision$}"),
        None => raw.to_string(),
    })
}
