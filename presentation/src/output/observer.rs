//! Answer observer printing each answer to stdout

use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use evaluation_application::AnswerObserver;
use evaluation_domain::{Context, OutputFormat};

/// Prints every answered question in the selected output format
pub struct ConsoleAnswerObserver {
    formatter: Box<dyn OutputFormatter>,
    format: OutputFormat,
}

impl ConsoleAnswerObserver {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            formatter: Box::new(ConsoleFormatter),
            format,
        }
    }

    /// Use a different formatter
    pub fn with_formatter(mut self, formatter: impl OutputFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render a context the way it would be printed
    pub fn render(&self, context: &Context) -> String {
        self.formatter.format_as(context, self.format)
    }
}

impl AnswerObserver for ConsoleAnswerObserver {
    fn on_answered(&self, context: &Context) {
        println!("{}", self.render(context));
    }
}
