//! Progress reporting for the pipeline.
//!
//! Reporting is injected so the generation and compositing core stays pure:
//! running with `NullReporter` must produce byte-identical assets to running
//! with any other sink.

use crate::output::Printer;
use crate::render::AssetCategory;

use super::Summary;

/// A sink for pipeline progress events. All methods default to no-ops.
pub trait Reporter {
    /// A category is about to be generated.
    fn category(&self, _category: AssetCategory) {}

    /// An asset was generated and persisted.
    fn asset(&self, _path: &str, _width: u32, _height: u32) {}

    /// An asset failed; the pipeline continues with the rest.
    fn failure(&self, _path: &str, _message: &str) {}

    /// The whole run finished.
    fn done(&self, _summary: &Summary) {}
}

/// Discards every event.
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Prints Cargo-style progress lines to stderr.
pub struct ConsoleReporter {
    printer: Printer,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            printer: Printer::new(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn category(&self, category: AssetCategory) {
        self.printer.info("Category", &category.to_string());
    }

    fn asset(&self, path: &str, width: u32, height: u32) {
        self.printer
            .status("Generating", &format!("{} ({}x{})", path, width, height));
    }

    fn failure(&self, path: &str, message: &str) {
        self.printer.warning("Failed", &format!("{}: {}", path, message));
    }

    fn done(&self, summary: &Summary) {
        use crate::output::plural;

        let assets = plural(summary.assets.len(), "asset", "assets");
        if summary.failures.is_empty() {
            self.printer.success("Finished", &assets);
        } else {
            self.printer.error(
                "Finished",
                &format!(
                    "{}, {} failed",
                    assets,
                    plural(summary.failures.len(), "asset", "assets")
                ),
            );
        }
    }
}
