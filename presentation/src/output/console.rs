//! Console output formatter for answer traces

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use evaluation_domain::Context;

/// Formats answer traces for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the answer together with how it was derived
    pub fn format(context: &Context) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Evaluation Result"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            context.question()
        ));
        if let Some(parameter) = context.parameter().filter(|p| *p != "()") {
            output.push_str(&format!("{} {}\n", "Parameter:".cyan().bold(), parameter));
        }
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Strategy:".cyan().bold(),
            context.strategy().unwrap_or("-")
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Aggregator:".cyan().bold(),
            context.aggregator().unwrap_or("-")
        ));

        output.push_str(&Self::section_header("Expressions"));
        if context.expressions().is_empty() {
            output.push_str(&format!("  {}\n", "(none evaluated)".dimmed()));
        }
        for (index, trace) in context.expressions().iter().enumerate() {
            output.push_str(&format!(
                "  {} {} {} {}\n",
                format!("{:>2}.", index + 1).dimmed(),
                trace.expression,
                "returned".dimmed(),
                trace.result.yellow()
            ));
        }

        output.push_str(&Self::section_header("Answer"));
        output.push_str(&format!(
            "{}\n",
            context.answer().unwrap_or("-").green().bold()
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(context: &Context) -> String {
        serde_json::to_string_pretty(context).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the answer only (concise output)
    pub fn format_answer_only(context: &Context) -> String {
        format!(
            "{} {}\n{} {}\n",
            "Q:".bold(),
            context.question(),
            "A:".bold(),
            context.answer().unwrap_or("-")
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, context: &Context) -> String {
        Self::format(context)
    }

    fn format_json(&self, context: &Context) -> String {
        Self::format_json(context)
    }

    fn format_answer_only(&self, context: &Context) -> String {
        Self::format_answer_only(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation_domain::OutputFormat;

    fn context() -> Context {
        let mut context = Context::new("how many fruits start with the given letter?", &'A');
        context.set_strategy("aggregator strategy");
        context.set_aggregator("expression aggregator with seed '0'");
        context.record_expression("1 Apple", &1);
        context.record_expression("4 Banana", &0);
        context.set_answer(&1);
        context
    }

    #[test]
    fn test_full_output_lists_expressions() {
        let output = ConsoleFormatter::format(&context());

        assert!(output.contains("how many fruits start with the given letter?"));
        assert!(output.contains("'A'"));
        assert!(output.contains("aggregator strategy"));
        assert!(output.contains("expression aggregator with seed '0'"));
        assert!(output.contains("1 Apple"));
        assert!(output.contains("4 Banana"));
    }

    #[test]
    fn test_answer_only() {
        let output = ConsoleFormatter.format_as(&context(), OutputFormat::Answer);
        assert!(output.contains("how many fruits start with the given letter?"));
        assert!(!output.contains("Banana"));
    }

    #[test]
    fn test_json_output_parses() {
        let output = ConsoleFormatter.format_as(&context(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["answer"], "1");
        assert_eq!(value["expressions"].as_array().unwrap().len(), 2);
    }
}
