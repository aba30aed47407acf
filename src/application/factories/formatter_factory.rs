use crate::adapters::outbound::formatters::{JsonStatusFormatter, TextStatusFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::StatusFormatter;

/// Factory for creating report formatters
///
/// Selects the infrastructure adapter for an output format. Color only
/// applies to the text format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`
    ///
    /// # Examples
    /// ```
    /// use sw360_graph::application::dto::OutputFormat;
    /// use sw360_graph::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn StatusFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextStatusFormatter::new(color)),
            OutputFormat::Json => Box::new(JsonStatusFormatter::new()),
        }
    }
}
