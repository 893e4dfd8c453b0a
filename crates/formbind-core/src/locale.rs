//! Locale-dependent parsing settings and issue message templates.
use time::{
    UtcOffset,
    error::InvalidFormatDescription,
    format_description::{self, OwnedFormatItem},
};

/// Token that clears a field the same way a logical null does.
pub const CLEAR_TOKEN: &str = "clear";

///
/// BindOptions
///
/// Everything locale-specific the coercer and validator consult.
/// The default targets Russian-locale forms: `,` as the
/// decimal separator, `dd.mm.yyyy` dates read as UTC midnight, and
/// Russian issue messages.
///
/// Dates stay in UTC unless an offset is requested: `with_system_offset`
/// normalizes into the machine's local time, `with_offset` into a fixed
/// one.
///

#[derive(Clone, Debug)]
pub struct BindOptions {
    pub decimal_separator: char,
    pub date_format: DateFormat,
    /// Offset parsed dates are converted into. UTC unless set.
    pub local_offset: UtcOffset,
    pub clear_token: String,
    pub messages: MessageTemplates,
}

impl BindOptions {
    /// Resolve the machine's local offset for date normalization.
    /// Falls back to UTC where the offset cannot be determined soundly.
    #[must_use]
    pub fn with_system_offset(mut self) -> Self {
        self.local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        self
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.local_offset = offset;
        self
    }

    /// Use a custom date pattern in `time` format-description syntax,
    /// e.g. `[month]/[day]/[year]`.
    pub fn with_date_format(mut self, pattern: &str) -> Result<Self, InvalidFormatDescription> {
        self.date_format = DateFormat::custom(pattern)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_messages(mut self, messages: MessageTemplates) -> Self {
        self.messages = messages;
        self
    }

    #[must_use]
    pub const fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Logical null, or the clear token.
    #[must_use]
    pub fn is_cleared(&self, raw: &str) -> bool {
        crate::normalize::is_logical_null(raw) || raw == self.clear_token
    }
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            date_format: DateFormat::DayMonthYear,
            local_offset: UtcOffset::UTC,
            clear_token: CLEAR_TOKEN.to_string(),
            messages: MessageTemplates::russian(),
        }
    }
}

///
/// DateFormat
///

#[derive(Clone, Debug)]
pub enum DateFormat {
    /// `dd.mm.yyyy`
    DayMonthYear,
    Custom(OwnedFormatItem),
}

impl DateFormat {
    pub fn custom(pattern: &str) -> Result<Self, InvalidFormatDescription> {
        format_description::parse_owned::<2>(pattern).map(Self::Custom)
    }
}

///
/// MessageTemplates
///
/// Issue message templates; `{name}` is replaced by the field label.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageTemplates {
    pub range: String,
    pub invalid_type: String,
    pub overflow: String,
}

impl MessageTemplates {
    #[must_use]
    pub fn russian() -> Self {
        Self {
            range: "{name}: введенное значение не входит в допустимый диапазон.".to_string(),
            invalid_type: "{name}: введенное значение имеет недопустимый тип.".to_string(),
            overflow: "{name}: введенное значение выходит за пределы своего типа данных."
                .to_string(),
        }
    }

    #[must_use]
    pub fn english() -> Self {
        Self {
            range: "{name}: submitted value is outside its allowed range.".to_string(),
            invalid_type: "{name}: submitted value has an invalid type.".to_string(),
            overflow: "{name}: submitted value exceeds its data type's bounds.".to_string(),
        }
    }

    #[must_use]
    pub fn render(template: &str, name: &str) -> String {
        template.replace("{name}", name)
    }
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self::russian()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_follow_the_russian_locale() {
        let options = BindOptions::default();

        assert_eq!(options.decimal_separator, ',');
        assert_eq!(options.local_offset, UtcOffset::UTC);
        assert!(matches!(options.date_format, DateFormat::DayMonthYear));
        assert_eq!(options.messages, MessageTemplates::russian());
    }

    #[test]
    fn cleared_covers_null_and_clear_tokens() {
        let options = BindOptions::default();

        assert!(options.is_cleared(""));
        assert!(options.is_cleared("null"));
        assert!(options.is_cleared("clear"));
        assert!(!options.is_cleared("Clear"));
        assert!(!options.is_cleared("0"));
    }

    #[test]
    fn custom_date_format_rejects_bad_patterns() {
        assert!(BindOptions::default().with_date_format("[year]-[month]-[day]").is_ok());
        assert!(BindOptions::default().with_date_format("[nonsense").is_err());
    }

    #[test]
    fn templates_substitute_the_name() {
        let rendered = MessageTemplates::render(&MessageTemplates::english().range, "Age");

        assert_eq!(rendered, "Age: submitted value is outside its allowed range.");
    }
}
