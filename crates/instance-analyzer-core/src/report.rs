/// Plain-text summary report.
///
/// Written to any `io::Write` so tests can capture it; the binary passes
/// stdout. The header is always emitted, followed by one block per
/// non-empty category.
use crate::analysis::CategorySummary;
use std::io::{self, Write};

/// Write the summary report for `summaries` to `out`.
pub fn write_report<W: Write>(out: &mut W, summaries: &[CategorySummary]) -> io::Result<()> {
    writeln!(out, "\nPerformance Analysis Summary:")?;
    for s in summaries {
        writeln!(out, "\n{} instances:", s.category.label())?;
        writeln!(out, "Number of instances: {}", s.count)?;
        writeln!(out, "Average size: {:.2} nodes", s.mean)?;
        writeln!(out, "Size range: {} - {} nodes", s.min, s.max)?;
    }
    out.flush()
}

/// Render the report into a `String`.
pub fn render_report(summaries: &[CategorySummary]) -> String {
    let mut buf = Vec::new();
    write_report(&mut buf, summaries).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}
