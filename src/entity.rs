pub type InlineText = Vec<Inline>;

/// One classified unit of a document. Every variant except `Table` comes from
/// exactly one input line.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Heading(usize, String),
    HorizontalRule,
    ListItem(ListMarker, String),
    Table(Vec<TableRow>),
    Paragraph(String),
    BlankLine,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListMarker {
    Unordered,
    /// The ordinal is kept verbatim, so `007.` stays `007`.
    Ordered(String),
}

impl ListMarker {
    pub fn kind(&self) -> ListKind {
        match self {
            ListMarker::Unordered => ListKind::Unordered,
            ListMarker::Ordered(_) => ListKind::Ordered,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub is_header: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Inline {
    Link(String, String),
    AutoLink(String),
    Bold(String),
    InlineCode(String),
    Plaintext(String),
}
