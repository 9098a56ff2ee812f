//! Error payloads carried inside the syntax tree.
//!
//! Parse failures do not abort the pipeline; they become [`Error`](crate::ast::Expr::Error)
//! nodes that every later pass surfaces unchanged. [`ErrorNode::build_report`] turns one into a
//! pretty [`ariadne`] report pointing at the offending region of the source.

use ariadne::{Color, Label, Report, ReportKind};
use std::ops::Range;

/// The color of the highlighted region in an error report.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The payload of an error node: a human-readable message, plus the source region that caused
/// it when one is known.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorNode {
    /// The error message.
    pub message: String,

    /// The region of the source that caused the error, if known.
    pub span: Option<Range<usize>>,
}

impl ErrorNode {
    /// Creates an error with no associated source region.
    pub fn new(message: impl Into<String>) -> ErrorNode {
        ErrorNode {
            message: message.into(),
            span: None,
        }
    }

    /// Creates an error pointing at the given source region.
    pub fn with_span(message: impl Into<String>, span: Range<usize>) -> ErrorNode {
        ErrorNode {
            message: message.into(),
            span: Some(span),
        }
    }

    /// Builds a report that can be printed to the terminal with [`Report::eprint`].
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        let span = self.span.clone().unwrap_or(0..0);
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(&self.message)
            .with_label(
                Label::new((src_id, span))
                    .with_message(&self.message)
                    .with_color(EXPR),
            )
            .finish()
    }
}
