// ABOUTME: Helper functions exposed to page templates
// ABOUTME: Defines the PageHelpers capability and bridges it into Handlebars helpers

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use handlebars::{
    Context, Handlebars, Helper, HelperDef, RenderContext, RenderError, ScopedJson,
};
use serde_json::Value as JsonValue;
use std::sync::Arc;

use super::error::{Result, TemplateError};

/// Pattern used by `formatDate` when the template does not pass one
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Pattern for human-readable timestamps such as `buildDate` and `currentTime`
pub const HUMAN_DATE_PATTERN: &str = "%a %b %d %H:%M:%S %Z %Y";

/// Functions a template can call while it renders.
///
/// Implementations must be stateless: the same instance is shared by every
/// page of a batch run.
pub trait PageHelpers: Send + Sync {
    /// Format `date` with a strftime `pattern`
    fn format_date(&self, date: &DateTime<Local>, pattern: &str) -> Result<String>;

    /// Uppercase `value`, or an empty string when it is absent
    fn uppercase(&self, value: Option<&str>) -> String;

    /// Lowercase `value`, or an empty string when it is absent
    fn lowercase(&self, value: Option<&str>) -> String;

    fn is_even(&self, number: i64) -> bool;

    /// Wall-clock time at the moment of the call
    fn current_time(&self) -> String;
}

/// The helper set every page gets unless the engine is built with another one
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardHelpers;

impl PageHelpers for StandardHelpers {
    fn format_date(&self, date: &DateTime<Local>, pattern: &str) -> Result<String> {
        let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(TemplateError::InvalidArgument(format!(
                "invalid date pattern '{}'",
                pattern
            )));
        }
        Ok(date.format_with_items(items.into_iter()).to_string())
    }

    fn uppercase(&self, value: Option<&str>) -> String {
        value.map(str::to_uppercase).unwrap_or_default()
    }

    fn lowercase(&self, value: Option<&str>) -> String {
        value.map(str::to_lowercase).unwrap_or_default()
    }

    fn is_even(&self, number: i64) -> bool {
        number % 2 == 0
    }

    fn current_time(&self) -> String {
        human_readable(&Local::now())
    }
}

/// Render a timestamp the way `buildDate` and `currentTime` show it
pub fn human_readable(date: &DateTime<Local>) -> String {
    date.format(HUMAN_DATE_PATTERN).to_string()
}

/// Interpret a template value as a date.
///
/// Numbers (and numeric strings) are epoch milliseconds, matching the
/// `timestamp` context variable; other strings must be RFC 3339.
pub fn parse_date_value(value: &JsonValue) -> Result<DateTime<Local>> {
    match value {
        JsonValue::Number(number) => {
            let millis = number.as_i64().ok_or_else(|| {
                TemplateError::InvalidArgument(format!("timestamp out of range: {}", number))
            })?;
            from_epoch_millis(millis)
        }
        JsonValue::String(text) => match DateTime::parse_from_rfc3339(text) {
            Ok(date) => Ok(date.with_timezone(&Local)),
            Err(rfc_err) => match text.parse::<i64>() {
                Ok(millis) => from_epoch_millis(millis),
                Err(_) => Err(TemplateError::InvalidArgument(format!(
                    "failed to parse date '{}': {}",
                    text, rfc_err
                ))),
            },
        },
        other => Err(TemplateError::InvalidArgument(format!(
            "expected a date, got {}",
            other
        ))),
    }
}

fn from_epoch_millis(millis: i64) -> Result<DateTime<Local>> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| TemplateError::InvalidArgument(format!("timestamp out of range: {}", millis)))
}

/// Names under which the helper functions are visible to templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperFunction {
    FormatDate,
    Uppercase,
    Lowercase,
    IsEven,
    CurrentTime,
}

impl HelperFunction {
    pub const ALL: [HelperFunction; 5] = [
        HelperFunction::FormatDate,
        HelperFunction::Uppercase,
        HelperFunction::Lowercase,
        HelperFunction::IsEven,
        HelperFunction::CurrentTime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HelperFunction::FormatDate => "formatDate",
            HelperFunction::Uppercase => "uppercase",
            HelperFunction::Lowercase => "lowercase",
            HelperFunction::IsEven => "isEven",
            HelperFunction::CurrentTime => "currentTime",
        }
    }
}

/// Adapts one PageHelpers function to the Handlebars helper interface.
///
/// Results are returned as JSON values so the helpers also work as
/// subexpressions, e.g. `{{#if (isEven count)}}`.
struct HelperBridge {
    function: HelperFunction,
    helpers: Arc<dyn PageHelpers>,
}

impl HelperDef for HelperBridge {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> std::result::Result<ScopedJson<'reg, 'rc>, RenderError> {
        let value = match self.function {
            HelperFunction::Uppercase => {
                JsonValue::String(self.helpers.uppercase(string_param(h, 0)))
            }
            HelperFunction::Lowercase => {
                JsonValue::String(self.helpers.lowercase(string_param(h, 0)))
            }
            HelperFunction::IsEven => {
                let number = h
                    .param(0)
                    .and_then(|v| v.value().as_i64())
                    .ok_or_else(|| RenderError::new("isEven helper requires an integer parameter"))?;
                JsonValue::Bool(self.helpers.is_even(number))
            }
            HelperFunction::FormatDate => {
                let date = h
                    .param(0)
                    .ok_or_else(|| RenderError::new("formatDate helper requires a date parameter"))?;
                let date =
                    parse_date_value(date.value()).map_err(|e| RenderError::new(e.to_string()))?;
                let pattern = string_param(h, 1).unwrap_or(DEFAULT_DATE_PATTERN);
                let formatted = self
                    .helpers
                    .format_date(&date, pattern)
                    .map_err(|e| RenderError::new(e.to_string()))?;
                JsonValue::String(formatted)
            }
            HelperFunction::CurrentTime => JsonValue::String(self.helpers.current_time()),
        };

        Ok(ScopedJson::Derived(value))
    }
}

fn string_param<'a>(h: &'a Helper<'_, '_>, index: usize) -> Option<&'a str> {
    h.param(index).and_then(|v| v.value().as_str())
}

/// Register every helper function with a Handlebars instance
pub fn register_helpers(handlebars: &mut Handlebars<'_>, helpers: Arc<dyn PageHelpers>) {
    for function in HelperFunction::ALL {
        handlebars.register_helper(
            function.name(),
            Box::new(HelperBridge {
                function,
                helpers: Arc::clone(&helpers),
            }),
        );
    }
}
