//! Conversion from loosely-typed scripting values to status bar enumerations.
//!
//! Scripting callers pass styles and animations as numeric codes or string
//! tags. Conversion is total: anything outside the table resolves to the
//! enumeration's default, so the bridge never branches on a failed conversion.
//!
//! | Style            | Tag               | Code |
//! |------------------|-------------------|------|
//! | `Default`        | `"default"`       | 0    |
//! | `LightContent`   | `"light-content"` | 1    |
//! | `DarkContent`    | `"dark-content"`  | 3    |
//!
//! | Animation | Tag       | Code |
//! |-----------|-----------|------|
//! | `None`    | `"none"`  | 0    |
//! | `Fade`    | `"fade"`  | 1    |
//! | `Slide`   | `"slide"` | 2    |
//!
//! Tags are case-sensitive. Numeric strings are treated as tags, so `"1"` does
//! not match code 1.

use bridge_traits::status_bar::{StatusBarAnimation, StatusBarStyle};
use serde::Deserialize;
use tracing::warn;

/// Untyped value arriving from the scripting layer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum RawInput {
    Number(f64),
    String(String),
    /// `null`, `undefined` or a missing argument
    #[default]
    Null,
    /// Booleans, arrays, objects
    Other,
}

impl From<serde_json::Value> for RawInput {
    fn from(value: serde_json::Value) -> Self {
        Self::from(&value)
    }
}

impl From<&serde_json::Value> for RawInput {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map_or(RawInput::Other, RawInput::Number),
            serde_json::Value::String(s) => RawInput::String(s.clone()),
            serde_json::Value::Null => RawInput::Null,
            _ => RawInput::Other,
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::String(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::String(value)
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Number(value)
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        RawInput::Number(value as f64)
    }
}

impl From<i32> for RawInput {
    fn from(value: i32) -> Self {
        RawInput::Number(f64::from(value))
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Null, Into::into)
    }
}

/// Enumerations with a stable tag/code table.
pub trait FromRawInput: Copy + Default + 'static {
    /// Name used in diagnostics
    const KIND: &'static str;

    fn variants() -> &'static [Self];
    fn tag(self) -> &'static str;
    fn code(self) -> i64;

    /// Map `input` through the table, falling back to the default variant.
    fn from_raw(input: &RawInput) -> Self {
        let found = match input {
            RawInput::Number(n) => integral_code(*n)
                .and_then(|code| Self::variants().iter().copied().find(|v| v.code() == code)),
            RawInput::String(s) => Self::variants().iter().copied().find(|v| v.tag() == s),
            RawInput::Null => return Self::default(),
            RawInput::Other => None,
        };

        found.unwrap_or_else(|| {
            warn!(kind = Self::KIND, input = ?input, "Unrecognized value, using default");
            Self::default()
        })
    }
}

impl FromRawInput for StatusBarStyle {
    const KIND: &'static str = "StatusBarStyle";

    fn variants() -> &'static [Self] {
        &StatusBarStyle::ALL
    }

    fn tag(self) -> &'static str {
        StatusBarStyle::tag(self)
    }

    fn code(self) -> i64 {
        StatusBarStyle::code(self)
    }
}

impl FromRawInput for StatusBarAnimation {
    const KIND: &'static str = "StatusBarAnimation";

    fn variants() -> &'static [Self] {
        &StatusBarAnimation::ALL
    }

    fn tag(self) -> &'static str {
        StatusBarAnimation::tag(self)
    }

    fn code(self) -> i64 {
        StatusBarAnimation::code(self)
    }
}

/// Convert a scripting value to a status bar style. Never fails.
pub fn to_status_bar_style(input: &RawInput) -> StatusBarStyle {
    StatusBarStyle::from_raw(input)
}

/// Convert a scripting value to a status bar animation. Never fails.
pub fn to_status_bar_animation(input: &RawInput) -> StatusBarAnimation {
    StatusBarAnimation::from_raw(input)
}

fn integral_code(n: f64) -> Option<i64> {
    // Bounds keep the cast exact; anything larger is out of every table anyway.
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        Some(n as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_style_tags() {
        let cases = [
            ("default", StatusBarStyle::Default),
            ("light-content", StatusBarStyle::LightContent),
            ("dark-content", StatusBarStyle::DarkContent),
        ];

        for (tag, expected) in cases {
            assert_eq!(to_status_bar_style(&tag.into()), expected, "tag {tag}");
        }
    }

    #[test]
    fn test_style_codes() {
        let cases = [
            (0, StatusBarStyle::Default),
            (1, StatusBarStyle::LightContent),
            (3, StatusBarStyle::DarkContent),
        ];

        for (code, expected) in cases {
            assert_eq!(to_status_bar_style(&code.into()), expected, "code {code}");
        }
    }

    #[test]
    fn test_style_falls_back_to_default() {
        let inputs = [
            RawInput::from(42),
            RawInput::from(2),
            RawInput::from(-1),
            RawInput::from(1.5),
            RawInput::from(f64::NAN),
            RawInput::from(f64::INFINITY),
            RawInput::from("darkcontent"),
            RawInput::from("Light-Content"),
            RawInput::from("1"),
            RawInput::from(""),
            RawInput::Null,
            RawInput::Other,
        ];

        for input in inputs {
            assert_eq!(
                to_status_bar_style(&input),
                StatusBarStyle::Default,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_animation_table() {
        let cases = [
            (RawInput::from("none"), StatusBarAnimation::None),
            (RawInput::from("fade"), StatusBarAnimation::Fade),
            (RawInput::from("slide"), StatusBarAnimation::Slide),
            (RawInput::from(0), StatusBarAnimation::None),
            (RawInput::from(1), StatusBarAnimation::Fade),
            (RawInput::from(2), StatusBarAnimation::Slide),
        ];

        for (input, expected) in cases {
            assert_eq!(to_status_bar_animation(&input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_animation_falls_back_to_none() {
        let inputs = [
            RawInput::from(3),
            RawInput::from(2.0001),
            RawInput::from("FADE"),
            RawInput::from(None::<&str>),
            RawInput::Other,
        ];

        for input in inputs {
            assert_eq!(
                to_status_bar_animation(&input),
                StatusBarAnimation::None,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_integral_float_is_a_code() {
        assert_eq!(
            to_status_bar_style(&RawInput::from(3.0)),
            StatusBarStyle::DarkContent
        );
    }

    #[test]
    fn test_raw_input_from_json() {
        assert_eq!(RawInput::from(json!(1)), RawInput::Number(1.0));
        assert_eq!(RawInput::from(json!("fade")), RawInput::String("fade".into()));
        assert_eq!(RawInput::from(json!(null)), RawInput::Null);
        assert_eq!(RawInput::from(json!(true)), RawInput::Other);
        assert_eq!(RawInput::from(json!([1])), RawInput::Other);
        assert_eq!(RawInput::from(json!({ "style": 1 })), RawInput::Other);
    }

    #[test]
    fn test_raw_input_deserializes_from_arguments() {
        let args: Vec<RawInput> = serde_json::from_str(r#"["dark-content", 1, null, false]"#).unwrap();

        assert_eq!(
            args,
            vec![
                RawInput::String("dark-content".into()),
                RawInput::Number(1.0),
                RawInput::Null,
                RawInput::Other,
            ]
        );
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let input = RawInput::from("light-content");
        let first = to_status_bar_style(&input);

        for _ in 0..10 {
            assert_eq!(to_status_bar_style(&input), first);
        }
    }
}
