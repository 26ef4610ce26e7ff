//! Markdown rendering of the session history.

use std::fmt::Write;

use stylist_core::history::InteractionRecord;

/// Renders records as numbered markdown entries in the order given.
///
/// Each entry is a `#### n. **label**` heading, the input inside a fenced
/// block under `**Input:**`, the output under `**Output:**`, and a `---`
/// separator.
pub fn render_history<'a>(records: impl IntoIterator<Item = &'a InteractionRecord>) -> String {
    let mut out = String::new();
    for (i, record) in records.into_iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "#### {}. **{}**", i + 1, record.action_label());
        let _ = writeln!(out, "**Input:**\n```\n{}\n```", record.original_text());
        let _ = writeln!(out, "**Output:**\n{}", record.output_text());
        let _ = writeln!(out, "\n---");
    }
    out
}
