use crate::entity::{Block, Inline, ListKind, TableRow};
use crate::parser::parse_markdown_text;

const TABLE_OPEN: &str =
    r#"<table border="1" style="border-collapse: collapse; width: 100%; margin: 10px 0;">"#;
const HEADER_CELL_STYLE: &str = "padding: 8px; background-color: #f0f0f0;";
const DATA_CELL_STYLE: &str = "padding: 8px;";

/// Which list, if any, is waiting for its closing tag.
#[derive(Debug, Default)]
struct ListState {
    open: Option<ListKind>,
}

impl ListState {
    fn enter(&mut self, kind: ListKind, html: &mut Vec<String>) {
        if self.open == Some(kind) {
            return;
        }
        self.close(html);
        html.push(String::from(match kind {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }));
        self.open = Some(kind);
    }

    fn close(&mut self, html: &mut Vec<String>) {
        match self.open.take() {
            Some(ListKind::Unordered) => html.push(String::from("</ul>")),
            Some(ListKind::Ordered) => html.push(String::from("</ol>")),
            None => {}
        }
    }
}

/// Renders one output line per block; lists and tables add lines for
/// their opening and closing tags.
pub fn translate(blocks: &[Block]) -> String {
    let mut html = Vec::new();
    let mut lists = ListState::default();

    for block in blocks {
        if !matches!(block, Block::ListItem(..)) {
            lists.close(&mut html);
        }
        match block {
            Block::ListItem(marker, text) => {
                lists.enter(marker.kind(), &mut html);
                html.push(format!("<li>{}</li>", translate_text(text)));
            }
            Block::Heading(level, text) => {
                html.push(format!("<h{level}>{}</h{level}>", translate_text(text)))
            }
            Block::HorizontalRule => html.push(String::from("<hr>")),
            Block::Table(rows) => translate_table(rows, &mut html),
            Block::Paragraph(text) => html.push(format!("<p>{}</p>", translate_text(text))),
            Block::BlankLine => html.push(String::from("<br>")),
        }
    }
    lists.close(&mut html);

    html.join("\n")
}

fn translate_table(rows: &[TableRow], html: &mut Vec<String>) {
    html.push(String::from(TABLE_OPEN));
    html.push(String::from("<tbody>"));
    for row in rows.iter().filter(|row| !row.cells.is_empty()) {
        html.push(String::from("<tr>"));
        for cell in &row.cells {
            let cell = translate_text(cell);
            if row.is_header {
                html.push(format!(r#"<th style="{HEADER_CELL_STYLE}">{cell}</th>"#));
            } else {
                html.push(format!(r#"<td style="{DATA_CELL_STYLE}">{cell}</td>"#));
            }
        }
        html.push(String::from("</tr>"));
    }
    html.push(String::from("</tbody>"));
    html.push(String::from("</table>"));
}

fn translate_text(text: &str) -> String {
    parse_markdown_text(text)
        .iter()
        .map(translate_inline)
        .collect()
}

fn translate_inline(inline: &Inline) -> String {
    match inline {
        Inline::Link(label, url) => format!(r#"<a href="{url}">{label}</a>"#),
        Inline::AutoLink(url) => format!(r#"<a href="{url}">{url}</a>"#),
        Inline::Bold(text) => format!("<strong>{text}</strong>"),
        Inline::InlineCode(code) => format!("<code>{code}</code>"),
        Inline::Plaintext(text) => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_markdown;
    use crate::translator::html::*;
    use pretty_assertions::assert_eq;

    macro_rules! assert_html {
        ($markdown:expr, $html:expr) => {
            assert_eq!(translate(&parse_markdown($markdown)), String::from($html));
        };
    }

    #[test]
    fn test_translate_headings() {
        assert_html!("# h1", "<h1>h1</h1>");
        assert_html!("## h2", "<h2>h2</h2>");
        assert_html!("#### **h4**", "<h4><strong>h4</strong></h4>");
        assert_html!("##### h5", "<p>##### h5</p>");
    }

    #[test]
    fn test_translate_paragraphs() {
        assert_html!("a\nb\nc", "<p>a</p>\n<p>b</p>\n<p>c</p>");
        assert_html!("a\n", "<p>a</p>\n<br>");
        assert_html!("", "<br>");
        assert_html!("<b>raw</b>", "<p><b>raw</b></p>");
    }

    #[test]
    fn test_translate_unordered_list() {
        assert_html!("- a", "<ul>\n<li>a</li>\n</ul>");
        assert_html!(
            "- a\n- b\n- c",
            "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>"
        );
        let many = vec!["- x"; 20].join("\n");
        let html = translate(&parse_markdown(&many));
        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("</ul>").count(), 1);
        assert_eq!(html.matches("<li>").count(), 20);
    }

    #[test]
    fn test_translate_list_switch_and_close() {
        assert_html!(
            "- a\n1. b\n2. c\n- d",
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n<li>c</li>\n</ol>\n<ul>\n<li>d</li>\n</ul>"
        );
        assert_html!("- a\n\n- b", "<ul>\n<li>a</li>\n</ul>\n<br>\n<ul>\n<li>b</li>\n</ul>");
        assert_html!("1. a\n## h", "<ol>\n<li>a</li>\n</ol>\n<h2>h</h2>");
        assert_html!("- a\ntext", "<ul>\n<li>a</li>\n</ul>\n<p>text</p>");
        assert_html!("- a\n---", "<ul>\n<li>a</li>\n</ul>\n<hr>");
    }

    #[test]
    fn test_translate_table() {
        assert_html!(
            "| a | **b** |\n|---|---|\n| 1 | `2` |",
            concat!(
                r#"<table border="1" style="border-collapse: collapse; width: 100%; margin: 10px 0;">"#,
                "\n<tbody>\n<tr>\n",
                r#"<th style="padding: 8px; background-color: #f0f0f0;">a</th>"#,
                "\n",
                r#"<th style="padding: 8px; background-color: #f0f0f0;"><strong>b</strong></th>"#,
                "\n</tr>\n<tr>\n",
                r#"<td style="padding: 8px;">1</td>"#,
                "\n",
                r#"<td style="padding: 8px;"><code>2</code></td>"#,
                "\n</tr>\n</tbody>\n</table>"
            )
        );
    }

    #[test]
    fn test_translate_ragged_table() {
        let html = translate(&parse_markdown("| a | b |\n|---|---|\n| 1 |\n| 1 | 2 | 3 |"));
        let rows: Vec<&str> = html.split("<tr>").skip(1).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].matches("<th ").count(), 2);
        assert_eq!(rows[1].matches("<td ").count(), 1);
        assert_eq!(rows[2].matches("<td ").count(), 3);
    }

    #[test]
    fn test_translate_table_without_cells() {
        assert_html!(
            "|",
            concat!(
                r#"<table border="1" style="border-collapse: collapse; width: 100%; margin: 10px 0;">"#,
                "\n<tbody>\n</tbody>\n</table>"
            )
        );
    }

    #[test]
    fn test_translate_inline() {
        assert_html!(
            "[x](http://y)",
            r#"<p><a href="http://y">x</a></p>"#
        );
        assert_html!(
            "see https://example.com/a now",
            r#"<p>see <a href="https://example.com/a">https://example.com/a</a> now</p>"#
        );
        assert_html!(
            "**bold** and `code`",
            "<p><strong>bold</strong> and <code>code</code></p>"
        );
    }
}
