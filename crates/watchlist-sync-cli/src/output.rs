use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde_json::json;
use watchlist_core::{RunReport, SectionTally};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

/// User-facing run summary on stdout. Diagnostics go through `tracing` on stderr.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{} {}", "✓".green(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "success", "message": msg.as_ref() }));
            }
        }
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        // Errors should always be shown, even in quiet mode
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "✗".red(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "error", "message": msg.as_ref() }));
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{} {}", "⚠".yellow(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "warning", "message": msg.as_ref() }));
            }
        }
    }

    pub fn report(&self, report: &RunReport) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                let total = report.total();
                self.success(format!(
                    "Wrote {} ({} entries) in {:.1}s",
                    report.output_path.display(),
                    total.written(),
                    report.duration.as_secs_f64()
                ));
                for (name, tally) in [
                    ("To watch", &report.to_watch),
                    ("Completed", &report.completed),
                    ("Dropped", &report.dropped),
                ] {
                    println!("  {:<10} {}", name, format_tally(tally));
                }
                if total.skipped > 0 {
                    self.warn(format!(
                        "{} entries could not be fetched and were left out; see the log for their ids",
                        total.skipped
                    ));
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "report",
                    "report": report,
                    "duration_secs": report.duration.as_secs_f64(),
                }));
            }
        }
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            _ => println!("{}", serde_json::to_string(data).unwrap_or_default()),
        }
    }
}

fn format_tally(tally: &SectionTally) -> String {
    format!(
        "{} reused, {} fetched, {} skipped",
        tally.reused, tally.fetched, tally.skipped
    )
}
