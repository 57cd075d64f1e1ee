//! Boilerplate stripping for raw Project Gutenberg downloads.
//!
//! Gutenberg plain-text editions wrap the authorial body in licensing headers
//! and footers, plus transcriber credits. The normalizer cuts the body out of
//! that wrapper. It is a best-effort heuristic, not a guaranteed-correct
//! parser: when markers are missing or duplicated it degrades to no trimming
//! rather than throwing away valid content.

use regex::Regex;

/// Marker phrase shared by both boundary lines.
const SOURCE_MARKER: &str = "PROJECT GUTENBERG";
/// Phrase on the header line that ends the licensing preamble.
const START_MARKER: &str = "START OF";
/// Phrase on the footer line that begins the licensing postamble.
const END_MARKER: &str = "END OF";

/// Strips non-authorial boilerplate from raw book text.
///
/// Stateless apart from two pre-compiled regexes; construct once and reuse,
/// or build per call. `normalize` never fails — an input that is all
/// boilerplate cleans to the empty string, which is a valid outcome the
/// extractor distinguishes from prose.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    produced_by: Regex,
    blank_runs: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Create a normalizer with the standard Gutenberg cleaning rules.
    pub fn new() -> Self {
        Self {
            // Transcriber credit lines, start of line through the newline.
            produced_by: Regex::new(r"(?im)^produced by[^\n]*\n").unwrap(),
            // Three-plus newlines with interleaved whitespace, i.e. runs of
            // blank lines beyond a single paragraph break.
            blank_runs: Regex::new(r"\n\s*\n\s*\n+").unwrap(),
        }
    }

    /// Clean raw downloaded text down to the authorial body.
    ///
    /// Steps, in order: cut at the START/END boundary markers, drop
    /// "Produced by" credit lines, collapse blank-line runs to a single
    /// paragraph break, trim. Always returns a string, possibly empty.
    pub fn normalize(&self, raw: &str) -> String {
        let lines: Vec<&str> = raw.split('\n').collect();

        let start = find_start_boundary(&lines);
        let end = find_end_boundary(&lines);

        let body = if start < end {
            lines[start..end].join("\n")
        } else {
            // Markers crossed (end marker before start marker): nothing
            // between them survives.
            String::new()
        };

        let body = self.produced_by.replace_all(&body, "");
        let body = self.blank_runs.replace_all(&body, "\n\n");
        body.trim().to_string()
    }
}

/// First line of the clean region: the line after the forward-scanned start
/// marker, or line 0 when no marker exists.
fn find_start_boundary(lines: &[&str]) -> usize {
    lines
        .iter()
        .position(|line| is_boundary(line, START_MARKER))
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// One past the last line of the clean region: the backward-scanned end
/// marker's own index (the region stops on the line before it), or the line
/// count when no marker exists.
fn find_end_boundary(lines: &[&str]) -> usize {
    lines
        .iter()
        .rposition(|line| is_boundary(line, END_MARKER))
        .unwrap_or(lines.len())
}

fn is_boundary(line: &str, edge_marker: &str) -> bool {
    let upper = line.to_uppercase();
    upper.contains(edge_marker) && upper.contains(SOURCE_MARKER)
}
