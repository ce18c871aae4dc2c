use crate::entity::Block;
use crate::entity::Inline;
use crate::entity::InlineText;
use crate::entity::ListMarker;
use crate::entity::TableRow;

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_while1, take_while_m_n},
    character::complete::{char, digit1},
    combinator::{map, recognize, rest},
    error::{Error, ErrorKind},
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

/// Splits `i` on `\n` and classifies the lines into blocks, front to back.
///
/// A trailing newline leaves an empty last line, which becomes a
/// `Block::BlankLine` like any other.
pub fn parse_markdown(i: &str) -> Vec<Block> {
    let lines: Vec<&str> = i.split('\n').collect();
    let mut blocks = Vec::new();
    let mut pos = 0;
    while let Some((block, consumed)) = parse_block(&lines[pos..]) {
        blocks.push(block);
        pos += consumed;
    }
    blocks
}

/// Classifies the block starting at the first of `lines` and reports how
/// many lines it consumed. Only tables consume more than one.
pub fn parse_block(lines: &[&str]) -> Option<(Block, usize)> {
    let (&line, following) = lines.split_first()?;

    if line.trim().is_empty() {
        return Some((Block::BlankLine, 1));
    }
    if let Ok((_, (level, text))) = parse_header(line) {
        return Some((Block::Heading(level, text.trim().to_string()), 1));
    }
    if line.trim() == "---" {
        return Some((Block::HorizontalRule, 1));
    }
    if let Ok((_, (ordinal, text))) = parse_ordered_list_element(line) {
        let marker = ListMarker::Ordered(ordinal.to_string());
        return Some((Block::ListItem(marker, text.to_string()), 1));
    }
    if let Ok((_, text)) = parse_unordered_list_element(line) {
        return Some((Block::ListItem(ListMarker::Unordered, text.trim().to_string()), 1));
    }
    if is_table_line(line) {
        return Some(parse_table(line, following));
    }
    Some((Block::Paragraph(line.to_string()), 1))
}

// header, then an optional `|---` delimiter, then data rows until a line
// stops looking like one
fn parse_table(header: &str, following: &[&str]) -> (Block, usize) {
    let mut rows = vec![TableRow {
        cells: split_cells(header),
        is_header: true,
    }];
    let mut consumed = 1;

    if following.first().map_or(false, |line| line.contains("|---")) {
        consumed += 1;
    }
    while let Some(&line) = following.get(consumed - 1) {
        if !is_table_line(line) || line.contains("---") {
            break;
        }
        rows.push(TableRow {
            cells: split_cells(line),
            is_header: false,
        });
        consumed += 1;
    }

    (Block::Table(rows), consumed)
}

fn is_table_line(line: &str) -> bool {
    line.trim().starts_with('|')
}

// everything between the first and the last `|`-separated fragment; a row
// without a closing pipe loses its last cell
fn split_cells(line: &str) -> Vec<String> {
    let mut fragments = line.split('|');
    fragments.next();
    let mut cells: Vec<String> = fragments.map(|cell| cell.trim().to_string()).collect();
    cells.pop();
    cells
}

// this guy matches one to four literal # followed by a space
fn parse_header_tag(i: &str) -> IResult<&str, usize> {
    map(
        terminated(take_while_m_n(1, 4, |c: char| c == '#'), tag(" ")),
        |s: &str| s.len(),
    )(i)
}

fn parse_header(i: &str) -> IResult<&str, (usize, &str)> {
    pair(parse_header_tag, rest)(i)
}

fn parse_unordered_list_element(i: &str) -> IResult<&str, &str> {
    preceded(tag("- "), rest)(i)
}

pub(crate) fn parse_ordered_list_tag(i: &str) -> IResult<&str, &str> {
    terminated(digit1, char('.'))(i)
}

fn parse_ordered_list_element(i: &str) -> IResult<&str, (&str, &str)> {
    let (i, ordinal) = parse_ordered_list_tag(i)?;
    let (text, spacing) = take_while1(char::is_whitespace)(i)?;
    if !text.is_empty() {
        return Ok(("", (ordinal, text)));
    }
    // nothing but spacing after the period: its last char is the item text,
    // as long as at least one char of spacing remains in front of it
    match spacing.char_indices().last() {
        Some((at, _)) if at > 0 => Ok(("", (ordinal, &spacing[at..]))),
        _ => Err(nom::Err::Error(Error::new(text, ErrorKind::Verify))),
    }
}

fn parse_link(i: &str) -> IResult<&str, (&str, &str)> {
    pair(
        delimited(tag("["), is_not("]"), tag("]")),
        delimited(tag("("), is_not(")"), tag(")")),
    )(i)
}

fn parse_autolink(i: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((tag("https://"), tag("http://"))),
        take_while1(|c: char| !c.is_whitespace()),
    ))(i)
}

fn parse_boldtext(i: &str) -> IResult<&str, &str> {
    delimited(tag("**"), is_not("*"), tag("**"))(i)
}

fn parse_inline_code(i: &str) -> IResult<&str, &str> {
    delimited(tag("`"), is_not("`"), tag("`"))(i)
}

pub(crate) fn parse_link_span(i: &str) -> IResult<&str, Inline> {
    map(parse_link, |(label, url): (&str, &str)| {
        Inline::Link(label.to_string(), url.to_string())
    })(i)
}

fn parse_autolink_span(i: &str) -> IResult<&str, Inline> {
    map(parse_autolink, |url: &str| Inline::AutoLink(url.to_string()))(i)
}

pub(crate) fn parse_bold_span(i: &str) -> IResult<&str, Inline> {
    map(parse_boldtext, |s: &str| Inline::Bold(s.to_string()))(i)
}

pub(crate) fn parse_code_span(i: &str) -> IResult<&str, Inline> {
    map(parse_inline_code, |s: &str| Inline::InlineCode(s.to_string()))(i)
}

pub type SpanParser = fn(&str) -> IResult<&str, Inline>;

/// Span passes in the order they run. A later pass never looks inside a span
/// produced by an earlier one.
const SPAN_PASSES: [SpanParser; 4] = [
    parse_link_span,
    parse_autolink_span,
    parse_bold_span,
    parse_code_span,
];

pub fn parse_markdown_text(i: &str) -> InlineText {
    let mut text = Vec::new();
    push_plaintext(&mut text, i);
    SPAN_PASSES
        .iter()
        .fold(text, |text, &pass| apply_span_pass(text, pass))
}

/// Runs a single pass over all of `i`, with no earlier spans to skip.
pub fn parse_spans(i: &str, pass: SpanParser) -> InlineText {
    let mut text = Vec::new();
    scan_plaintext(i, pass, &mut text);
    text
}

fn apply_span_pass(text: InlineText, pass: SpanParser) -> InlineText {
    let mut out = Vec::with_capacity(text.len());
    for inline in text {
        match inline {
            Inline::Plaintext(s) => scan_plaintext(&s, pass, &mut out),
            other => out.push(other),
        }
    }
    out
}

// leftmost-first: try the pass at every char boundary, keep what it skips
// over as plaintext
fn scan_plaintext(s: &str, pass: SpanParser, out: &mut InlineText) {
    let mut start = 0;
    let mut pos = 0;
    while let Some(c) = s[pos..].chars().next() {
        match pass(&s[pos..]) {
            Ok((remaining, inline)) => {
                push_plaintext(out, &s[start..pos]);
                out.push(inline);
                pos = s.len() - remaining.len();
                start = pos;
            }
            Err(_) => pos += c.len_utf8(),
        }
    }
    push_plaintext(out, &s[start..]);
}

fn push_plaintext(out: &mut InlineText, s: &str) {
    if !s.is_empty() {
        out.push(Inline::Plaintext(s.to_string()));
    }
}
