//! Conditional styling: ordered rule evaluation and theme-aware color
//! resolution.
//!
//! Styles are recomputed from scratch on every value update (reset, then
//! override). Nothing is patched incrementally, so styling from a previous
//! value can never survive a value change that no longer satisfies the rule
//! that produced it.

use crate::color::Color;
use crate::config::ConditionalFormat;
use crate::expr::{self, ExprValue};
use crate::theme::Theme;
use crate::value::MetricValue;

/// The style handed to the widget toolkit after rule resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    /// Text color override.
    pub text_color: Option<Color>,
    /// Background color override.
    pub background_color: Option<Color>,
    /// Border color override.
    pub border_color: Option<Color>,
    /// Whether the widget is visible at all.
    pub visible: bool,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            text_color: None,
            background_color: None,
            border_color: None,
            visible: true,
        }
    }
}

/// Resolve the style for `value` against an ordered rule list.
///
/// Rules are evaluated in order with `value` bound (numeric-coerced when
/// possible). A condition that fails to evaluate is treated as false and
/// skipped. Every true rule overwrites the fields it carries, so later
/// true rules win over earlier ones; rules are never blended. `Absent`
/// values short-circuit to the neutral default without evaluating any
/// rule.
#[must_use]
pub fn resolve(value: &MetricValue, rules: &[ConditionalFormat], theme: &Theme) -> ResolvedStyle {
    let mut style = ResolvedStyle::default();

    if value.is_absent() {
        return style;
    }

    let bound = value
        .coerce_number()
        .map_or_else(|| ExprValue::Str(value.raw_string()), ExprValue::Number);

    let mut text: Option<&str> = None;
    let mut background: Option<&str> = None;
    let mut border: Option<&str> = None;

    for rule in rules {
        match expr::eval_condition(&rule.condition, &bound) {
            Ok(true) => {
                if let Some(color) = rule.text_color.as_deref() {
                    text = Some(color);
                }
                if let Some(color) = rule.background_color.as_deref() {
                    background = Some(color);
                }
                if let Some(color) = rule.border_color.as_deref() {
                    border = Some(color);
                }
                if let Some(visible) = rule.visible {
                    style.visible = visible;
                }
            }
            // Invalid conditions are false, never fatal.
            Ok(false) | Err(_) => {}
        }
    }

    style.text_color = text.and_then(|spec| resolve_color(spec, theme));
    style.background_color = background.and_then(|spec| resolve_color(spec, theme));
    style.border_color = border.and_then(|spec| resolve_color(spec, theme));
    style
}

/// Resolve a configured color string against the theme.
///
/// `$name` references hit the theme's variable table first and are used
/// unmodified (they are already designed for the theme). Unknown variables
/// fall back to a small builtin table and are then contrast-adjusted, as
/// are literal colors. Unparseable strings resolve to `None`.
#[must_use]
pub fn resolve_color(spec: &str, theme: &Theme) -> Option<Color> {
    if let Some(name) = spec.strip_prefix('$') {
        if let Some(color) = theme.variable(name) {
            return Some(color);
        }
        let fallback = builtin_fallback(name)?;
        return Some(adjust_for_theme(fallback, theme));
    }
    Color::parse(spec)
        .ok()
        .map(|color| adjust_for_theme(color, theme))
}

/// Builtin fallback palette for theme variables no theme defines.
fn builtin_fallback(name: &str) -> Option<Color> {
    let named = match name.replace('-', "_").as_str() {
        "success" => "lime",
        "error" => "red",
        "warning" => "yellow",
        "primary" => "dodgerblue",
        "secondary" => "purple",
        "accent" => "cyan",
        _ => return None,
    };
    Color::parse(named).ok()
}

/// Adjust a color for contrast against the active theme.
///
/// Light themes darken by luminance band (bright colors need the most
/// correction); dark themes lighten moderately.
fn adjust_for_theme(color: Color, theme: &Theme) -> Color {
    if theme.dark {
        color.lighten(0.3)
    } else {
        let luminance = color.luminance();
        if luminance > 0.7 {
            color.darken(0.7)
        } else if luminance > 0.5 {
            color.darken(0.5)
        } else {
            color.darken(0.3)
        }
    }
}
