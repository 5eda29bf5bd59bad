//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error kind as [`Any`], so that callers can inspect which kind of error
    /// occurred.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
///
/// Every error carries at least one span. Errors produced while parsing point into the parsed
/// source, while errors produced while evaluating or simplifying an expression point into the
/// infix rendering of that expression.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns a reference to the kind of this error if it is of type `K`.
    pub fn downcast_kind<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report of this error to the given writer, using `input` as the highlighted
    /// source.
    pub fn write_report<W: io::Write>(&self, src_id: &str, input: &str, w: W) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), w)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind};
    use super::*;

    #[derive(Debug)]
    struct Oops;

    impl ErrorKind for Oops {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message("something went wrong")
                .with_label(Label::new((src_id, spans[0].clone())).with_message("right here"))
                .finish()
        }
    }

    #[derive(Debug)]
    struct Other;

    impl ErrorKind for Other {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start).finish()
        }
    }

    #[test]
    fn downcast() {
        let err = Error::new(vec![0..1], Oops);
        assert!(err.is::<Oops>());
        assert!(!err.is::<Other>());
        assert!(err.downcast_kind::<Oops>().is_some());
        assert!(err.downcast_kind::<Other>().is_none());
    }

    #[test]
    fn written_report() {
        let err = Error::new(vec![2..3], Oops);
        let mut buf = Vec::new();
        err.write_report("input", "1 + x", &mut buf).unwrap();

        let text = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(text.contains("something went wrong"));
        assert!(text.contains("right here"));
        assert!(text.contains("1 + x"));
    }
}
