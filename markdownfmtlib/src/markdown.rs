//! Built-in Markdown normalizer.
//!
//! A conservative, line-oriented pass that rewrites the block-level markup
//! whose spelling varies the most between authors:
//!
//! - ATX headings become `#… text`, without a closing `#` sequence
//! - bullet markers `*`, `+` and `-` become `- `
//! - ordered list markers are followed by exactly one space
//! - trailing whitespace is trimmed, keeping two-space hard line breaks
//! - blank lines are collapsed, and the document ends with one newline
//!
//! Fenced code blocks pass through verbatim, as do indented code blocks
//! outside of lists. Thematic breaks are left alone so that a `---` setext
//! underline never changes meaning. Running the normalizer on its own output
//! returns that output unchanged.

use crate::error::MarkdownfmtError;
use crate::normalize::Normalize;
use crate::Result;

/// The default [`Normalize`] implementation for Markdown documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownNormalizer;

impl MarkdownNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalize for MarkdownNormalizer {
    fn normalize(&self, name: &str, src: &[u8]) -> Result<Vec<u8>> {
        process(name, src)
    }
}

/// Normalize a Markdown document.
///
/// Fails only when `src` is not valid UTF-8; the error carries the 1-based
/// line and byte column of the first invalid sequence.
pub fn process(name: &str, src: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(src).map_err(|e| {
        let (line, column) = position(src, e.valid_up_to());
        MarkdownfmtError::Normalize {
            name: name.to_string(),
            line,
            column,
            message: "invalid UTF-8 sequence".to_string(),
        }
    })?;

    let mut normalizer = Normalizer::default();
    for line in text.lines() {
        normalizer.push_line(line);
    }
    Ok(normalizer.out.into_bytes())
}

fn position(src: &[u8], offset: usize) -> (usize, usize) {
    let before = &src[..offset];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    (line, offset - line_start + 1)
}

/// An open fenced code block.
#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: char,
    len: usize,
}

#[derive(Debug)]
struct Normalizer {
    out: String,
    fence: Option<Fence>,
    /// Blank lines seen since the last emitted line
    pending_blanks: usize,
    /// Whitespace-only lines inside a fence, emitted verbatim once the fence continues
    fence_blanks: Vec<String>,
    prev_blank: bool,
    in_list: bool,
    in_indented_code: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            out: String::new(),
            fence: None,
            pending_blanks: 0,
            fence_blanks: Vec::new(),
            prev_blank: true,
            in_list: false,
            in_indented_code: false,
        }
    }
}

impl Normalizer {
    fn push_line(&mut self, raw: &str) {
        let raw = raw.trim_end_matches('\r');

        if let Some(fence) = self.fence {
            if raw.trim().is_empty() {
                self.fence_blanks.push(raw.to_string());
                return;
            }
            // Blank lines inside a fence are content.
            for blank in std::mem::take(&mut self.fence_blanks) {
                self.emit(&blank);
            }
            if closes_fence(raw, fence) {
                self.fence = None;
                self.emit(raw.trim_end());
            } else {
                self.emit(raw);
            }
            self.prev_blank = false;
            return;
        }

        let line = raw.trim_end_matches([' ', '\t']);
        if line.is_empty() {
            if !self.out.is_empty() {
                self.pending_blanks += 1;
            }
            self.prev_blank = true;
            return;
        }
        self.flush_blanks(1);

        let indent = line.len() - line.trim_start_matches(' ').len();
        let body = &line[indent..];

        if indent >= 4 && !self.in_list && (self.prev_blank || self.in_indented_code) {
            self.in_indented_code = true;
            self.prev_blank = false;
            self.emit(raw);
            return;
        }
        self.in_indented_code = false;

        if indent < 4 || self.in_list {
            if let Some(fence) = opens_fence(body) {
                self.fence = Some(fence);
                self.prev_blank = false;
                self.emit(line);
                return;
            }
        }

        let hard_break = if has_hard_break(raw) { "  " } else { "" };
        let block_level = indent < 4 || self.in_list;

        let normalized = if block_level && is_thematic_break(body) {
            self.in_list = false;
            line.to_string()
        } else if let Some(heading) = heading(body).filter(|_| indent < 4) {
            self.in_list = false;
            heading
        } else if let Some(item) = list_item(body).filter(|_| block_level) {
            self.in_list = true;
            format!("{}{}{}", " ".repeat(indent), item, hard_break)
        } else {
            if indent == 0 && self.prev_blank {
                self.in_list = false;
            }
            format!("{line}{hard_break}")
        };

        self.prev_blank = false;
        self.emit(&normalized);
    }

    fn flush_blanks(&mut self, max: usize) {
        let count = self.pending_blanks.min(max);
        for _ in 0..count {
            self.out.push('\n');
        }
        self.pending_blanks = 0;
    }

    fn emit(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }
}

fn has_hard_break(raw: &str) -> bool {
    let content = raw.trim_end_matches(' ');
    !content.trim().is_empty() && raw.len() - content.len() >= 2
}

fn opens_fence(body: &str) -> Option<Fence> {
    let marker = body.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = body.chars().take_while(|c| *c == marker).count();
    if len < 3 {
        return None;
    }
    // Backtick fences cannot carry backticks in their info string.
    if marker == '`' && body[len..].contains('`') {
        return None;
    }
    Some(Fence { marker, len })
}

fn closes_fence(raw: &str, fence: Fence) -> bool {
    let body = raw.trim();
    let len = body.chars().take_while(|c| *c == fence.marker).count();
    len >= fence.len && len == body.chars().count()
}

fn is_thematic_break(body: &str) -> bool {
    let Some(marker) = body.chars().next().filter(|c| matches!(c, '-' | '*' | '_')) else {
        return false;
    };
    body.chars().all(|c| c == marker || c == ' ' || c == '\t')
        && body.chars().filter(|c| *c == marker).count() >= 3
}

fn heading(body: &str) -> Option<String> {
    let level = body.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &body[level..];
    if !(rest.is_empty() || rest.starts_with([' ', '\t'])) {
        return None;
    }

    let mut content = rest.trim();
    let without_closing = content.trim_end_matches('#');
    if without_closing.is_empty() {
        content = "";
    } else if without_closing.ends_with([' ', '\t']) {
        content = without_closing.trim_end();
    }

    let hashes = "#".repeat(level);
    if content.is_empty() {
        Some(hashes)
    } else {
        Some(format!("{hashes} {content}"))
    }
}

fn list_item(body: &str) -> Option<String> {
    if let Some(rest) = body.strip_prefix(['*', '+', '-']) {
        let content = rest.trim_start_matches([' ', '\t']);
        if content.len() < rest.len() && !content.is_empty() {
            let item = format!("- {}", content.trim_end());
            // `* ---` is an item holding a break; `- ---` would be a bare break.
            return Some(item).filter(|item| !is_thematic_break(item));
        }
        return None;
    }

    let digits = body.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || digits > 9 {
        return None;
    }
    let delimiter = body[digits..].chars().next().filter(|c| *c == '.' || *c == ')')?;
    let rest = &body[digits + 1..];
    let content = rest.trim_start_matches([' ', '\t']);
    if content.len() < rest.len() && !content.is_empty() {
        Some(format!("{}{} {}", &body[..digits], delimiter, content.trim_end()))
    } else {
        None
    }
}
