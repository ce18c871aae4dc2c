use crate::entity::{Block, Inline, ListMarker};
use crate::parser::{parse_bold_span, parse_code_span, parse_link_span, parse_spans, SpanParser};

const RULE_WIDTH: usize = 39;

/// Each pass rewrites the whole output of the previous one, so markup that
/// survives one pass (inside a link label or a URL) is still stripped later.
const STRIP_PASSES: [SpanParser; 3] = [parse_link_span, parse_bold_span, parse_code_span];

/// Strips Markdown down to text the editor can take as-is; headings and lists
/// are then formatted by hand there. Tables have no plain form and are dropped.
pub fn translate(blocks: &[Block]) -> String {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            Block::Heading(_, text) => {
                lines.push(translate_text(text));
                lines.push(String::new());
            }
            Block::HorizontalRule => {
                lines.push(String::new());
                lines.push("━".repeat(RULE_WIDTH));
                lines.push(String::new());
            }
            Block::ListItem(ListMarker::Unordered, text) => {
                lines.push(format!("・{}", translate_text(text)))
            }
            Block::ListItem(ListMarker::Ordered(ordinal), text) => {
                lines.push(format!("{ordinal}. {}", translate_text(text)))
            }
            Block::Table(_) => {}
            Block::Paragraph(text) => lines.push(translate_text(text)),
            Block::BlankLine => lines.push(String::new()),
        }
    }

    lines.join("\n")
}

fn translate_text(text: &str) -> String {
    STRIP_PASSES
        .iter()
        .fold(String::from(text), |text, pass| {
            parse_spans(&text, *pass).into_iter().map(strip_inline).collect()
        })
}

fn strip_inline(inline: Inline) -> String {
    match inline {
        Inline::Link(label, url) => format!("{label} ({url})"),
        Inline::AutoLink(text)
        | Inline::Bold(text)
        | Inline::InlineCode(text)
        | Inline::Plaintext(text) => text,
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_markdown;
    use crate::translator::plaintext::*;
    use pretty_assertions::assert_eq;

    macro_rules! assert_plaintext {
        ($markdown:expr, $text:expr) => {
            assert_eq!(translate(&parse_markdown($markdown)), String::from($text));
        };
    }

    #[test]
    fn test_translate_headings() {
        assert_plaintext!("# Title\nbody", "Title\n\nbody");
        assert_plaintext!("### **Bold** title", "Bold title\n");
    }

    #[test]
    fn test_translate_rule() {
        assert_plaintext!(
            "a\n---\nb",
            "a\n\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\nb"
        );
    }

    #[test]
    fn test_translate_lists() {
        assert_plaintext!("- one\n- **two**", "・one\n・two");
        assert_plaintext!("5. item", "5. item");
        assert_plaintext!("3. c\n1. a\n007. x", "3. c\n1. a\n007. x");
    }

    #[test]
    fn test_translate_inline() {
        assert_plaintext!("**a**", "a");
        assert_plaintext!("run `cargo` now", "run cargo now");
        assert_plaintext!("[x](http://y)", "x (http://y)");
        assert_plaintext!("bare https://example.com stays", "bare https://example.com stays");
    }

    #[test]
    fn test_translate_strips_markup_left_by_earlier_passes() {
        assert_plaintext!("see https://x.jp/**a**", "see https://x.jp/a");
        assert_plaintext!("[**a**](http://y)", "a (http://y)");
        assert_plaintext!("**`a`**", "a");
        assert_plaintext!("[`f`](http://y/**b**)", "f (http://y/b)");
    }

    #[test]
    fn test_translate_drops_tables() {
        assert_plaintext!(
            "before\n| a | b |\n|---|---|\n| 1 | 2 |\nafter",
            "before\nafter"
        );
    }

    #[test]
    fn test_translate_keeps_blank_lines() {
        assert_plaintext!("a\n\n\nb\n", "a\n\n\nb\n");
    }
}
