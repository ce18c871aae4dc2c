//! Whitespace cleanup for Markdown sources, independent of their structure.

const TAB_WIDTH: usize = 4;
const MAX_CONSECUTIVE_NEWLINES: usize = 2;

/// Expands tabs to four spaces, turns CRLF and lone CR into LF, strips
/// trailing whitespace from every line and collapses three or more newlines
/// into two.
pub fn normalize(content: &str) -> String {
    let content = content
        .replace('\t', &" ".repeat(TAB_WIDTH))
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    let trimmed = content
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    collapse_newlines(&trimmed)
}

fn collapse_newlines(content: &str) -> String {
    let mut collapsed = String::with_capacity(content.len());
    let mut run = 0;
    for c in content.chars() {
        if c == '\n' {
            run += 1;
            if run > MAX_CONSECUTIVE_NEWLINES {
                continue;
            }
        } else {
            run = 0;
        }
        collapsed.push(c);
    }
    collapsed
}
