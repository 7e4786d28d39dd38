/*!
Value-extraction walker.

Ports `ecjp_read_key`'s per-type `vsize`/`ptr_value` walk: given a key
already located by [`crate::token::KeyList`], re-walks the source from just
past the key to recover the value's type and raw byte range, without
re-scanning the whole document.
*/

use crate::error::{EcjpError, ValueType};
use crate::limits::Pos;
use crate::token::KeyToken;

/// The value reached through a previously-scanned key: its type and its
/// raw byte range within the source that produced the key.
#[derive(Debug, Clone, Copy)]
pub struct Value {
    pub kind: ValueType,
    pub start: usize,
    pub len: usize,
}

/// Walks from `token`'s key to its value and returns the value's type and
/// byte range. `source` must be the same slice `token` was scanned from.
pub fn read_key(source: &[u8], token: KeyToken) -> Result<Value, EcjpError> {
    let mut i = token.key_start as usize + token.key_len as usize + 1; // past closing quote

    while matches!(source.get(i), Some(b) if b.is_ascii_whitespace()) {
        i += 1;
    }

    if source.get(i) != Some(&b':') {
        return Err(EcjpError::Syntax { pos: i as Pos });
    }
    i += 1;

    let (kind, start, len) = crate::fsm::skip_value(source, &mut i)?;

    // A string's length is the byte span inside the quotes; strip the
    // quote bytes `skip_value` includes for every other caller.
    let (start, len) = if kind == ValueType::String {
        (start + 1, len - 2)
    } else {
        (start, len)
    };

    if matches!(
        kind,
        ValueType::String | ValueType::Number | ValueType::Bool | ValueType::Null
    ) && len > crate::limits::MAX_KEY_VALUE_LEN
    {
        return Err(EcjpError::NoSpaceInBuffer);
    }

    Ok(Value { kind, start, len })
}

/// Convenience: the value's raw bytes.
pub fn read_key_bytes<'a>(source: &'a [u8], token: KeyToken) -> Result<&'a [u8], EcjpError> {
    let value = read_key(source, token)?;
    Ok(&source[value.start..value.start + value.len])
}
