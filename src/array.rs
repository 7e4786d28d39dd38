/*!
Independent array walker.

Ports `ecjp_read_array_element`. Kept as its own small state machine rather
than unified with the bracket stack shared by [`crate::token`] and
[`crate::capture`] — spec.md scopes the array walker as an independent
component with its own grammar (array-only, single-element exit), and
unifying it would cross that boundary for no behavior change (see
DESIGN.md).

The original C signature accepts `index = -1` as a sentinel meaning "return
an empty string"; here `index` is a `usize`, so that magic value simply
cannot be constructed — out-of-range reads are reported as
[`EcjpError::IndexOutOfBounds`] instead.
*/

use crate::error::{EcjpError, ValueType};
use crate::limits::Pos;

fn skip_ws(input: &[u8], i: &mut usize) {
    while matches!(input.get(*i), Some(b) if b.is_ascii_whitespace()) {
        *i += 1;
    }
}

/// Returns the type and raw byte range of the `index`-th element of the
/// top-level JSON array in `input`.
pub fn read_array_element(input: &[u8], index: usize) -> Result<(ValueType, usize, usize), EcjpError> {
    let mut i = 0usize;
    skip_ws(input, &mut i);

    if input.get(i) != Some(&b'[') {
        return Err(EcjpError::Syntax { pos: i as Pos });
    }
    i += 1;

    let mut current = 0usize;
    loop {
        skip_ws(input, &mut i);

        if input.get(i) == Some(&b']') {
            return Err(EcjpError::IndexOutOfBounds);
        }

        let (kind, start, len) = crate::fsm::skip_value(input, &mut i)?;

        if len > crate::limits::MAX_ARRAY_ELEM_LEN {
            return Err(EcjpError::NoSpaceInBuffer);
        }

        if current == index {
            return Ok((kind, start, len));
        }
        current += 1;

        skip_ws(input, &mut i);
        match input.get(i) {
            Some(&b',') => {
                i += 1;
            }
            Some(&b']') => return Err(EcjpError::IndexOutOfBounds),
            _ => return Err(EcjpError::Syntax { pos: i as Pos }),
        }
    }
}

/// Counts the elements of the top-level array in `input`, validating it in
/// the process.
pub fn count_elements(input: &[u8]) -> Result<usize, EcjpError> {
    let mut n = 0usize;
    loop {
        match read_array_element(input, n) {
            Ok(_) => n += 1,
            Err(EcjpError::IndexOutOfBounds) => return Ok(n),
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_each_element() {
        let input = br#"[1,"two",[3],{"four":4}]"#;
        let (kind, s, l) = read_array_element(input, 0).unwrap();
        assert_eq!(kind, ValueType::Number);
        assert_eq!(&input[s..s + l], b"1");

        let (kind, s, l) = read_array_element(input, 1).unwrap();
        assert_eq!(kind, ValueType::String);
        assert_eq!(&input[s..s + l], br#""two""#);

        let (kind, s, l) = read_array_element(input, 2).unwrap();
        assert_eq!(kind, ValueType::Array);
        assert_eq!(&input[s..s + l], b"[3]");

        let (kind, s, l) = read_array_element(input, 3).unwrap();
        assert_eq!(kind, ValueType::Object);
        assert_eq!(&input[s..s + l], br#"{"four":4}"#);
    }

    #[test]
    fn out_of_bounds_past_end() {
        let input = br#"[1,2]"#;
        assert!(matches!(
            read_array_element(input, 2),
            Err(EcjpError::IndexOutOfBounds)
        ));
    }

    #[test]
    fn rejects_non_array_root() {
        let input = br#"{"a":1}"#;
        assert!(matches!(
            read_array_element(input, 0),
            Err(EcjpError::Syntax { .. })
        ));
    }

    #[test]
    fn counts_elements() {
        let input = br#"[1,2,3,4,5]"#;
        assert_eq!(count_elements(input).unwrap(), 5);
    }

    #[test]
    fn empty_array_has_no_elements() {
        let input = br#"[]"#;
        assert!(matches!(
            read_array_element(input, 0),
            Err(EcjpError::IndexOutOfBounds)
        ));
    }
}
