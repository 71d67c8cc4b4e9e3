use crate::scoring::ScoringResult;
use crate::session::Handle;
use chrono::NaiveDate;
use serde::Serialize;

/// Ordered text content handed to a document-rendering collaborator.
///
/// The presenter supplies content and ordering only; page layout, fonts, and
/// binary encoding are the renderer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub lines: Vec<String>,
}

/// Build the printable report for one scoring pass.
pub fn render_document(
    result: &ScoringResult,
    handle: &Handle,
    generated_on: NaiveDate,
    booking_url: &str,
) -> ReportDocument {
    let mut lines = Vec::with_capacity(result.recommendations.len() + 6);
    lines.push("E-commerce Health Score Report".to_string());
    lines.push(format!("Date: {}", generated_on.format("%Y-%m-%d")));
    lines.push(format!("Contact: {}", handle.as_str()));
    lines.push(format!("Score: {}/100", result.score));
    lines.push("Recommendations:".to_string());

    if result.recommendations.is_empty() {
        lines.push("No gaps detected. Keep doing what works.".to_string());
    } else {
        for (index, recommendation) in result.recommendations.iter().enumerate() {
            lines.push(format!("{}. {}", index + 1, recommendation));
        }
    }

    lines.push(format!("Need a deeper audit? Book a session here: {booking_url}"));

    ReportDocument { lines }
}

/// Rendering collaborator turning a document into a downloadable artifact.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError>;
}

/// Renderer failure.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("document backend unavailable: {0}")]
    Backend(String),
}

/// Page-oriented fixed-font text backend.
#[derive(Debug, Clone)]
pub struct PlainTextRenderer {
    lines_per_page: usize,
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        // A4 portrait at 12pt leaves roughly this many text rows.
        Self { lines_per_page: 54 }
    }
}

impl DocumentRenderer for PlainTextRenderer {
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
        let mut output = String::new();
        for (index, line) in document.lines.iter().enumerate() {
            if index > 0 && index % self.lines_per_page == 0 {
                output.push('\x0c');
            }
            output.push_str(line);
            output.push('\n');
        }
        Ok(output.into_bytes())
    }
}
