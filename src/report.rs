//! Printing of the classified buckets.

use std::io::Write;

use triage_protocol::{Buckets, Classification};

/// Writes each bucket as a heading followed by a pretty-printed JSON array.
///
/// Buckets are written in the order Bugs, New Features, Other; empty buckets
/// are still written, as `[]`.
pub fn write_report(buckets: &Buckets, out: &mut impl Write) -> anyhow::Result<()> {
    for classification in Classification::all() {
        write!(out, "{}: ", classification.heading())?;
        serde_json::to_writer_pretty(&mut *out, buckets.bucket(classification))?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
