//! Output formatter trait

use evaluation_domain::{Context, OutputFormat};

/// Trait for formatting answer traces
pub trait OutputFormatter: Send + Sync {
    /// Format the answer together with how it was derived
    fn format(&self, context: &Context) -> String;

    /// Format as JSON
    fn format_json(&self, context: &Context) -> String;

    /// Format the answer only (concise output)
    fn format_answer_only(&self, context: &Context) -> String;

    /// Format according to the selected output format
    fn format_as(&self, context: &Context, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(context),
            OutputFormat::Answer => self.format_answer_only(context),
            OutputFormat::Json => self.format_json(context),
        }
    }
}
