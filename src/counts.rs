// src/counts.rs
use anyhow::{Context, Result};
use std::fs;

use crate::args::FlagSet;

/// Counts for a single file. A metric that was not requested stays `None`
/// and is left out of the rendered line entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileCounts {
    pub lines: Option<usize>,
    pub words: Option<usize>,
    pub bytes: Option<usize>,
    pub chars: Option<usize>,
}

impl FileCounts {
    /// The per-file output line: the requested counts in lines, words,
    /// bytes, characters order, then the path, space separated.
    pub fn render(&self, path: &str) -> String {
        let mut fields: Vec<String> = [self.lines, self.words, self.bytes, self.chars]
            .into_iter()
            .flatten()
            .map(|count| count.to_string())
            .collect();
        fields.push(path.to_string());
        fields.join(" ")
    }
}

/// Running sums across files. Only requested metrics accumulate; the rest
/// stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub lines: usize,
    pub words: usize,
    pub bytes: usize,
    pub chars: usize,
}

impl Totals {
    pub fn add(&mut self, counts: &FileCounts) {
        self.lines += counts.lines.unwrap_or(0);
        self.words += counts.words.unwrap_or(0);
        self.bytes += counts.bytes.unwrap_or(0);
        self.chars += counts.chars.unwrap_or(0);
    }

    /// The total line: line, word and byte sums then `total`. Character
    /// sums are carried but never rendered. A sum of zero renders as an
    /// empty field rather than `0`, spaces intact.
    pub fn render(&self) -> String {
        format!(
            "{} {} {} total",
            field(self.lines),
            field(self.words),
            field(self.bytes)
        )
    }
}

fn field(sum: usize) -> String {
    if sum == 0 {
        String::new()
    } else {
        sum.to_string()
    }
}

/// Computes the requested counts for one file. The byte count comes from
/// file metadata without reading; the text metrics share a single read of
/// the content.
pub fn count_file(path: &str, flags: FlagSet) -> Result<FileCounts> {
    let mut counts = FileCounts::default();

    if flags.bytes {
        counts.bytes = Some(byte_count(path)?);
    }

    if flags.lines || flags.words || flags.chars {
        let content = read_file(path)?;
        if flags.lines {
            counts.lines = Some(line_count(&content));
        }
        if flags.words {
            counts.words = Some(word_count(&content));
        }
        if flags.chars {
            counts.chars = Some(char_count(&content));
        }
    }

    Ok(counts)
}

fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file at '{}'", path))
}

fn byte_count(path: &str) -> Result<usize> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to stat file at '{}'", path))?;
    Ok(metadata.len() as usize)
}

// A trailing line without a final newline still counts; an empty file has
// no lines.
fn line_count(content: &str) -> usize {
    content.lines().count()
}

fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

fn char_count(content: &str) -> usize {
    content.chars().count()
}
