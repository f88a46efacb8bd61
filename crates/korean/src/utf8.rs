/// A unit of a byte buffer: either a decoded character or a single byte
/// that's not part of any valid utf-8 sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unit {
    Char {
        ch: char,
        offset: usize,
        len: usize,
    },

    // A sequence that's truncated at the end of the buffer yields one of these per byte.
    Invalid {
        byte: u8,
        offset: usize,
    },
}

impl Unit {
    pub fn offset(&self) -> usize {
        match self {
            Unit::Char { offset, .. }
            | Unit::Invalid { offset, .. } => *offset,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Unit::Char { len, .. } => *len,
            Unit::Invalid { .. } => 1,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Unit::Char { ch, .. } => Some(*ch),
            Unit::Invalid { .. } => None,
        }
    }
}

/// Decodes `bytes` front to back.
///
/// Validation is done by the standard library (`utf8_chunks`). Each byte of an
/// invalid chunk is reported separately, so decoding always advances by at least
/// one byte and resumes right after a bad lead byte.
pub fn units(bytes: &[u8]) -> impl Iterator<Item = Unit> + '_ {
    let mut chunk_start = 0;

    bytes.utf8_chunks().flat_map(
        move |chunk| {
            let valid = chunk.valid();
            let invalid = chunk.invalid();
            let valid_start = chunk_start;
            let invalid_start = chunk_start + valid.len();
            chunk_start = invalid_start + invalid.len();

            valid.char_indices().map(
                move |(index, ch)| Unit::Char {
                    ch,
                    offset: valid_start + index,
                    len: ch.len_utf8(),
                }
            ).chain(invalid.iter().enumerate().map(
                move |(index, byte)| Unit::Invalid {
                    byte: *byte,
                    offset: invalid_start + index,
                }
            ))
        }
    )
}
