//! Parsing of raw `git diff-index` output.
//!
//! Each recognized line has the shape
//!
//! ```text
//! :<old mode> <new mode> <old id> <new id> <kind>\t<path>
//! ```
//!
//! Lines that do not have this shape are skipped, so diagnostics and blank
//! lines never fail a parse. A line that has the shape but an unknown change
//! letter is an error.

use std::fmt;

use crate::error::{Error, Result};

/// Marker that starts every raw diff line.
const LINE_PREFIX: char = ':';

/// Number of digits in a mode field.
const MODE_WIDTH: usize = 6;

/// Mode used by git for the side of a change that does not exist.
const ABSENT_MODE: &str = "000000";

/// Field separators accepted between columns.
const fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

/// Characters allowed in object ids and the change letter.
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A six-digit git file mode, kept exactly as git printed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileMode(String);

impl FileMode {
    /// Wrap a mode string.
    pub fn new(mode: impl Into<String>) -> Self {
        Self(mode.into())
    }

    /// Whether this is the "no such entry" mode.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.0 == ABSENT_MODE
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A content-addressed object id, kept exactly as git printed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    /// Wrap an object id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of change recorded for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Path is new in the index.
    Added,
    /// Path was removed from the index.
    Deleted,
    /// Content or mode of the path changed.
    Modified,
}

impl ChangeKind {
    const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Self::Added),
            'D' => Some(Self::Deleted),
            'M' => Some(Self::Modified),
            _ => None,
        }
    }

    /// The letter git uses for this kind.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Added => 'A',
            Self::Deleted => 'D',
            Self::Modified => 'M',
        }
    }
}

/// One side (before or after) of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side<'a> {
    /// The path does not exist on this side.
    Absent,
    /// The path exists with this mode and content.
    Present {
        mode: &'a FileMode,
        id: &'a ObjectId,
    },
}

/// A single staged change, as reported by `git diff-index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub old_mode: FileMode,
    pub new_mode: FileMode,
    pub old_id: ObjectId,
    pub new_id: ObjectId,
    pub kind: ChangeKind,
    /// Repository-relative path.
    pub path: String,
}

impl ChangeRecord {
    /// The state of the path before the change.
    #[must_use]
    pub fn old_side(&self) -> Side<'_> {
        side(&self.old_mode, &self.old_id)
    }

    /// The state of the path after the change.
    #[must_use]
    pub fn new_side(&self) -> Side<'_> {
        side(&self.new_mode, &self.new_id)
    }
}

fn side<'a>(mode: &'a FileMode, id: &'a ObjectId) -> Side<'a> {
    if mode.is_absent() {
        Side::Absent
    } else {
        Side::Present { mode, id }
    }
}

/// Parse the output of `git diff-index` into change records.
///
/// Records are returned in the order their lines appear.
///
/// # Errors
/// Returns [`Error::UnknownChangeKind`] if a well-formed line carries a
/// change letter other than `A`, `D` or `M`.
pub fn parse_diff_index(output: &str) -> Result<Vec<ChangeRecord>> {
    output
        .lines()
        .filter_map(scan_line)
        .map(RawLine::into_record)
        .collect()
}

/// Fields of a line that has the raw diff shape.
#[derive(Debug, PartialEq, Eq)]
struct RawLine<'a> {
    old_mode: &'a str,
    new_mode: &'a str,
    old_id: &'a str,
    new_id: &'a str,
    kind: char,
    path: &'a str,
}

impl RawLine<'_> {
    fn into_record(self) -> Result<ChangeRecord> {
        let kind = ChangeKind::from_letter(self.kind).ok_or_else(|| Error::UnknownChangeKind {
            kind: self.kind,
            path: self.path.to_string(),
        })?;

        Ok(ChangeRecord {
            old_mode: FileMode::new(self.old_mode),
            new_mode: FileMode::new(self.new_mode),
            old_id: ObjectId::new(self.old_id),
            new_id: ObjectId::new(self.new_id),
            kind,
            path: self.path.to_string(),
        })
    }
}

fn scan_line(line: &str) -> Option<RawLine<'_>> {
    let mut cursor = Cursor {
        rest: line.strip_prefix(LINE_PREFIX)?,
    };

    let old_mode = cursor.mode()?;
    cursor.separator()?;
    let new_mode = cursor.mode()?;
    cursor.separator()?;
    let old_id = cursor.object_id()?;
    cursor.separator()?;
    let new_id = cursor.object_id()?;
    cursor.separator()?;
    let kind = cursor.kind()?;
    cursor.separator()?;

    Some(RawLine {
        old_mode,
        new_mode,
        old_id,
        new_id,
        kind,
        path: cursor.rest,
    })
}

/// Left-to-right scanner over the remainder of a line.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let end = self.rest.find(|c| !pred(c)).unwrap_or(self.rest.len());
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        taken
    }

    fn mode(&mut self) -> Option<&'a str> {
        let digits = self.take_while(|c| c.is_ascii_digit());
        (digits.len() == MODE_WIDTH).then_some(digits)
    }

    fn object_id(&mut self) -> Option<&'a str> {
        let id = self.take_while(is_word_char);
        (!id.is_empty()).then_some(id)
    }

    fn kind(&mut self) -> Option<char> {
        let mut chars = self.rest.chars();
        let letter = chars.next().filter(|&c| is_word_char(c))?;
        self.rest = chars.as_str();
        Some(letter)
    }

    fn separator(&mut self) -> Option<()> {
        let mut chars = self.rest.chars();
        chars.next().filter(|&c| is_separator(c))?;
        self.rest = chars.as_str();
        Some(())
    }
}
