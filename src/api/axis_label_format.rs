use serde::Serialize;

/// Formatter callback applied to a tick value.
pub type TickFormatter<T> = dyn Fn(&T) -> String + Send + Sync;

/// Result of [`format_axis_tick`]: either the formatter's label or the value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormattedTick<T> {
    Raw(T),
    Label(String),
}

impl<T: ToString> FormattedTick<T> {
    /// Text to draw; raw values use their `Display` form.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Raw(value) => value.to_string(),
            Self::Label(label) => label.clone(),
        }
    }
}

/// Formats a tick value, passing it through untouched without a formatter.
///
/// Missing values (`None`) are passed through as-is as well.
#[must_use]
pub fn format_axis_tick<T>(value: T, formatter: Option<&TickFormatter<T>>) -> FormattedTick<T> {
    match formatter {
        Some(formatter) => FormattedTick::Label(formatter(&value)),
        None => FormattedTick::Raw(value),
    }
}

#[cfg(test)]
mod tests {
    use super::{FormattedTick, TickFormatter, format_axis_tick};

    #[test]
    fn formatter_output_becomes_label() {
        let currency: &TickFormatter<i32> = &|value| format!("${value}");
        assert_eq!(
            format_axis_tick(100, Some(currency)),
            FormattedTick::Label("$100".to_owned())
        );
    }

    #[test]
    fn values_pass_through_without_formatter() {
        assert_eq!(format_axis_tick(100, None), FormattedTick::Raw(100));
        assert_eq!(format_axis_tick(None::<f64>, None), FormattedTick::Raw(None));
        assert_eq!(format_axis_tick(2.5_f64, None).text(), "2.5");
    }
}
