//! Serializers from classified blocks to the three output notations.

pub mod html;
pub mod markdown;
pub mod plaintext;

use crate::entity::Block;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Html,
    PlainText,
    Markdown,
}

impl Target {
    /// What replaces `.md` in the input file name when no output path is given.
    pub fn output_suffix(self) -> &'static str {
        match self {
            Target::Html => ".html",
            Target::PlainText => "_note.txt",
            Target::Markdown => "_note.md",
        }
    }
}

pub fn translate(target: Target, blocks: &[Block]) -> String {
    match target {
        Target::Html => html::translate(blocks),
        Target::PlainText => plaintext::translate(blocks),
        Target::Markdown => markdown::translate(blocks),
    }
}
