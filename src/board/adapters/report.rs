//! Customer-facing completion report rendering.
//!
//! One downstream consumer of the completion boundary: renders a plain-text
//! summary per completed job from the real recorded durations. Costing and
//! delivery stay outside this crate.

use minijinja::Environment;
use std::sync::{Arc, Mutex};

use crate::board::{domain::CompletionEvent, ports::CompletionSink};

const TEMPLATE_NAME: &str = "completion_report";

const COMPLETION_TEMPLATE: &str = "\
Repair completed: {{ car_model }} ({{ car_code }})
Section: {{ section_id }}
{% if mechanic %}Mechanic: {{ mechanic }}
{% endif %}Estimated: {{ estimated_minutes }} minutes
Actual: {{ actual_minutes }} minutes
{% if notes %}Notes:
{% for note in notes %}- {{ note }}
{% endfor %}{% endif %}";

/// Renders completion events into customer-facing report text.
#[derive(Debug)]
pub struct CompletionReportRenderer {
    environment: Environment<'static>,
}

impl CompletionReportRenderer {
    /// Creates a renderer with the built-in report template.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when the template fails to compile.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        environment.add_template(TEMPLATE_NAME, COMPLETION_TEMPLATE)?;
        Ok(Self { environment })
    }

    /// Renders one completion event.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn render(&self, event: &CompletionEvent) -> Result<String, minijinja::Error> {
        self.environment.get_template(TEMPLATE_NAME)?.render(event)
    }
}

/// Completion sink that renders and retains reports in memory.
///
/// Rendering failures drop the report; the completion boundary is
/// fire-and-forget.
#[derive(Debug, Clone)]
pub struct ReportingCompletionSink {
    renderer: Arc<CompletionReportRenderer>,
    reports: Arc<Mutex<Vec<String>>>,
}

impl ReportingCompletionSink {
    /// Creates a sink around the given renderer.
    #[must_use]
    pub fn new(renderer: CompletionReportRenderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
            reports: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns rendered reports in completion order.
    #[must_use]
    pub fn reports(&self) -> Vec<String> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }
}

impl CompletionSink for ReportingCompletionSink {
    fn accept(&self, event: &CompletionEvent) {
        if let Ok(report) = self.renderer.render(event) {
            if let Ok(mut reports) = self.reports.lock() {
                reports.push(report);
            }
        }
    }
}
