//! Shared comment stripping, used ahead of every stage that reads source
//! text (the tokenizer, the VM translator, and the assembler).
//!
//! The three original nand2tetris tools each rolled their own de-commenter
//! with a slightly different idea of what to keep around the comment-free
//! text:
//!
//! - The assembler discards all whitespace from every line (it never needs
//!   to report source positions), producing [`Mode::Compact`] output.
//! - The tokenizer and the VM translator only trim line ends, since they
//!   still need predictable line numbers for tokens and generated labels -
//!   [`Mode::Preserve`].
//!
//! [`decomment`] returns one entry per surviving line. [`decomment_joined`]
//! additionally drops now-empty lines and joins the rest with `\n`, which is
//! what the tokenizer wants before running its token regexes over the whole
//! file at once. The VM translator instead wants [`decomment`] directly: it
//! keeps one slot per input line (blank slots included) so that line numbers
//! baked into its generated jump labels stay stable.

/// How aggressively to normalize whitespace while stripping comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Remove all whitespace from each line. Used by the assembler, which
    /// only cares about token content, never source layout.
    Compact,
    /// Trim leading/trailing whitespace only. Used by stages that still
    /// track line numbers.
    Preserve,
}

/// Strip `//` and `/* */` (including multi-line) comments from `text`,
/// returning one entry per input line.
///
/// In [`Mode::Compact`], lines that become empty after stripping are
/// dropped entirely. In [`Mode::Preserve`], every input line produces an
/// entry (possibly empty), so callers that rely on line numbers can still
/// find them by indexing into the result.
pub fn decomment(text: &str, mode: Mode) -> Vec<String> {
    let mut in_block_comment = false;
    let mut out = Vec::new();

    for raw_line in text.lines() {
        let prepared = match mode {
            Mode::Compact => raw_line.replace(' ', ""),
            Mode::Preserve => raw_line.trim().to_string(),
        };
        let mut stripped = strip_line_comments(prepared, &mut in_block_comment);
        if mode == Mode::Preserve {
            stripped = stripped.trim().to_string();
        }

        match mode {
            Mode::Compact => {
                if !stripped.is_empty() {
                    out.push(stripped);
                }
            }
            Mode::Preserve => out.push(stripped),
        }
    }

    out
}

/// [`decomment`] in [`Mode::Preserve`], with empty lines dropped and the
/// survivors joined by `\n`. This is what the tokenizer runs its token
/// regexes over.
pub fn decomment_joined(text: &str) -> String {
    decomment(text, Mode::Preserve)
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove comments from a single already-whitespace-adjusted line, carrying
/// block-comment state across calls via `in_block_comment`.
fn strip_line_comments(mut line: String, in_block_comment: &mut bool) -> String {
    if *in_block_comment {
        match line.find("*/") {
            Some(end) => {
                line = line[end + 2..].to_string();
                *in_block_comment = false;
            }
            None => return String::new(),
        }
    }

    loop {
        let line_comment = line.find("//");
        let block_comment = line.find("/*");

        match (line_comment, block_comment) {
            (Some(lc), Some(bc)) if bc < lc => {
                if !close_block_comment(&mut line, bc) {
                    *in_block_comment = true;
                    break;
                }
            }
            (Some(lc), _) => {
                line.truncate(lc);
                break;
            }
            (None, Some(bc)) => {
                if !close_block_comment(&mut line, bc) {
                    *in_block_comment = true;
                    break;
                }
            }
            (None, None) => break,
        }
    }

    line
}

/// Remove a `/* ... */` block starting at byte offset `start` in `line`.
/// Returns `false` (leaving `line` truncated at `start`) if the block never
/// closes on this line.
fn close_block_comment(line: &mut String, start: usize) -> bool {
    match line[start..].find("*/") {
        Some(end) => {
            let abs_end = start + end + 2;
            *line = format!("{}{}", &line[..start], &line[abs_end..]);
            true
        }
        None => {
            line.truncate(start);
            false
        }
    }
}
