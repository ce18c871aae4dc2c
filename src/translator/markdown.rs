use crate::entity::{Block, ListMarker};
use crate::parser::parse_ordered_list_tag;

/// Re-emits only the Markdown the note editor understands: headings, rules
/// and lists get blank lines around them, tables are dropped, inline markup
/// passes through untouched, and blank runs collapse to a single line.
pub fn translate(blocks: &[Block]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for block in blocks {
        match block {
            Block::Heading(level, text) => {
                separate_from_previous(&mut lines, |_| false);
                lines.push(format!("{} {}", "#".repeat(*level), text));
                lines.push(String::new());
            }
            Block::HorizontalRule => {
                lines.push(String::new());
                lines.push(String::from("---"));
                lines.push(String::new());
            }
            Block::ListItem(ListMarker::Unordered, text) => {
                separate_from_previous(&mut lines, |last| last.starts_with("- "));
                lines.push(format!("- {text}"));
            }
            Block::ListItem(ListMarker::Ordered(ordinal), text) => {
                separate_from_previous(&mut lines, |last| parse_ordered_list_tag(last).is_ok());
                lines.push(format!("{ordinal}. {text}"));
            }
            Block::Table(_) => {}
            Block::Paragraph(text) => lines.push(text.clone()),
            Block::BlankLine => lines.push(String::new()),
        }
    }

    collapse_blank_runs(lines).join("\n")
}

// pushes a blank line unless the output is empty, already ends blank, or
// ends with a line `continues` accepts
fn separate_from_previous<F>(lines: &mut Vec<String>, continues: F)
where
    F: Fn(&str) -> bool,
{
    if let Some(last) = lines.last() {
        if !is_blank(last) && !continues(last) {
            lines.push(String::new());
        }
    }
}

fn collapse_blank_runs(lines: Vec<String>) -> Vec<String> {
    let mut collapsed = Vec::with_capacity(lines.len());
    let mut previous_blank = false;
    for line in lines {
        let blank = is_blank(&line);
        if blank && previous_blank {
            continue;
        }
        collapsed.push(if blank { String::new() } else { line });
        previous_blank = blank;
    }
    collapsed
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
