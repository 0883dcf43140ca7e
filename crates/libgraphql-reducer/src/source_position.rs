/// Source position information, with dual column tracking.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: UTF-8 character count within the current line
/// - `col_utf16`: UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// For ASCII text both columns are equal. For characters outside the Basic
/// Multilingual Plane (e.g. emoji) `col_utf8` advances by 1 and `col_utf16`
/// by 2.
///
/// Positions only ever describe errors; reduced documents carry none.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Computes the position of `byte_offset` within `source`.
    ///
    /// Offsets past the end of `source` are clamped to its end. `\n`, `\r\n`
    /// and a lone `\r` each terminate a line.
    pub fn from_byte_offset(source: &str, byte_offset: usize) -> Self {
        let byte_offset = byte_offset.min(source.len());
        let prefix = source.get(..byte_offset).unwrap_or(source);

        let mut line = 0;
        let mut col_utf8 = 0;
        let mut col_utf16 = 0;
        let mut chars = prefix.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' if chars.peek() == Some(&'\n') => (),
                '\n' | '\r' => {
                    line += 1;
                    col_utf8 = 0;
                    col_utf16 = 0;
                },
                _ => {
                    col_utf8 += 1;
                    col_utf16 += c.len_utf16();
                },
            }
        }

        Self::new(line, col_utf8, col_utf16, byte_offset)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based (UTF-8) character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    ///
    /// For LSP compatibility, prefer this over [`col_utf8()`](Self::col_utf8).
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
