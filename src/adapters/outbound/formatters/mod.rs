/// Formatter adapters for the check-project report
mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonStatusFormatter;
pub use text_formatter::TextStatusFormatter;
