/*!
Pipeline A: scan-and-index.

Ports `ecjp_check_syntax`, `ecjp_add_node_end`, `ecjp_get_keys`,
`ecjp_get_key`, and `ecjp_print_keys` from `ecjp.c`. Where the original
builds a manual singly-linked `key_elem_t` list, `KeyList` is an owned,
growable `Vec<KeyToken>` — spec.md's own re-architecture guidance — and
`free_key_list` is kept only as an explicit early-drop operation, not as the
thing that makes memory safety hold.
*/

use alloc::vec::Vec;

use crate::error::EcjpError;
use crate::fsm::{self, NoopSink, ParseSummary, Sink};
use crate::limits::{Len, Pos};

/// A single recorded key: its own byte range within the source. The value
/// reachable through this key is recovered on demand by [`crate::walker`].
#[derive(Debug, Clone, Copy)]
pub struct KeyToken {
    pub key_start: Pos,
    pub key_len: Len,
}

struct TokenSink {
    tokens: Vec<KeyToken>,
}

impl Sink for TokenSink {
    fn item(
        &mut self,
        _key_quote_pos: usize,
        key_start: usize,
        key_len: usize,
        _value_start: usize,
        _value_end: usize,
        _kind: crate::error::ValueType,
    ) {
        self.tokens.push(KeyToken {
            key_start: key_start as Pos,
            key_len: key_len as Len,
        });
    }
}

/// Validates `input` without recording anything. Equivalent to calling
/// [`load`] and discarding the key list, but without the allocation.
pub fn check_syntax(input: &[u8]) -> Result<ParseSummary, EcjpError> {
    fsm::scan(input, 0, &mut NoopSink)
}

/// An owned list of keys found directly inside the object at `level`,
/// borrowing the source they were scanned from.
pub struct KeyList<'a> {
    source: &'a [u8],
    tokens: Vec<KeyToken>,
    pub summary: ParseSummary,
}

/// Scans `input` and records every key directly inside the object found at
/// nesting `level` (`level == 0` is the root object's own keys).
pub fn load(input: &[u8], level: u16) -> Result<KeyList<'_>, EcjpError> {
    let mut sink = TokenSink { tokens: Vec::new() };
    let summary = fsm::scan(input, level, &mut sink)?;

    Ok(KeyList {
        source: input,
        tokens: sink.tokens,
        summary,
    })
}

impl<'a> KeyList<'a> {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The raw bytes of the key at `index`.
    pub fn get_key(&self, index: usize) -> Result<&'a [u8], EcjpError> {
        let tok = self.tokens.get(index).ok_or(EcjpError::IndexOutOfBounds)?;
        let start = tok.key_start as usize;
        let len = tok.key_len as usize;
        Ok(&self.source[start..start + len])
    }

    /// Searches tokens whose `key_start` lies past `from`. With
    /// `needle` given, returns the index of the first key matching
    /// `needle`'s bytes exactly, or `IndexNotFound` if none match by the
    /// end of the list. With `needle` absent, simply returns the index of
    /// the next token past `from` — a resumable cursor for walking every
    /// key in order — or `NoMoreKeys` once the list is exhausted.
    pub fn find_key(&self, needle: Option<&[u8]>, from: usize) -> Result<usize, EcjpError> {
        match needle {
            Some(name) => {
                for i in 0..self.tokens.len() {
                    if self.tokens[i].key_start as usize <= from {
                        continue;
                    }
                    if self.get_key(i)? == name {
                        return Ok(i);
                    }
                }
                Err(EcjpError::IndexNotFound)
            }
            None => {
                for i in 0..self.tokens.len() {
                    if self.tokens[i].key_start as usize > from {
                        return Ok(i);
                    }
                }
                Err(EcjpError::NoMoreKeys)
            }
        }
    }

    pub fn token(&self, index: usize) -> Result<KeyToken, EcjpError> {
        self.tokens.get(index).copied().ok_or(EcjpError::IndexOutOfBounds)
    }

    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Writes every key, one per line, to the given sink. Mirrors
    /// `ecjp_print_keys`'s terminal dump.
    #[cfg(feature = "std")]
    pub fn print_keys<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        for i in 0..self.tokens.len() {
            let key = self.get_key(i).expect("index within bounds");
            let key = core::str::from_utf8(key).unwrap_or("<invalid utf8>");
            writeln!(out, "{}", key)?;
        }
        Ok(())
    }

    /// Drops the list before its source goes out of scope. Kept for parity
    /// with the original API surface; `Drop` alone is sufficient otherwise.
    pub fn free_key_list(self) {
        drop(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_flat_object_keys() {
        let input = br#"{"a":1,"b":"two","c":[1,2,3]}"#;
        let list = load(input, 0).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get_key(0).unwrap(), b"a");
        assert_eq!(list.get_key(1).unwrap(), b"b");
        assert_eq!(list.get_key(2).unwrap(), b"c");
    }

    #[test]
    fn find_key_locates_sibling() {
        let input = br#"{"x":1,"y":2}"#;
        let list = load(input, 0).unwrap();
        assert_eq!(list.find_key(Some(b"y"), 0).unwrap(), 1);
        assert!(matches!(
            list.find_key(Some(b"z"), 0),
            Err(EcjpError::IndexNotFound)
        ));
    }

    #[test]
    fn find_key_without_needle_walks_every_token_in_order() {
        let input = br#"{"x":1,"y":2,"z":3}"#;
        let list = load(input, 0).unwrap();

        let mut from = 0usize;
        let mut seen = Vec::new();
        loop {
            match list.find_key(None, from) {
                Ok(idx) => {
                    seen.push(list.get_key(idx).unwrap().to_vec());
                    from = list.token(idx).unwrap().key_start as usize;
                }
                Err(EcjpError::NoMoreKeys) => break,
                Err(e) => panic!("unexpected error: {e:?}"),
            }
        }

        assert_eq!(seen, vec![b"x".to_vec(), b"y".to_vec(), b"z".to_vec()]);
    }

    #[test]
    fn rejects_trailing_comma() {
        let input = br#"{"a":1,}"#;
        assert!(check_syntax(input).is_err());
    }

    #[test]
    fn rejects_unbalanced_brackets() {
        let input = br#"{"a":[1,2}"#;
        assert!(matches!(
            check_syntax(input),
            Err(EcjpError::BracketsMissing { .. })
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(check_syntax(b""), Err(EcjpError::EmptyInput)));
        assert!(matches!(check_syntax(b"   "), Err(EcjpError::EmptyInput)));
    }

    #[test]
    fn nested_object_value_does_not_leak_inner_keys() {
        let input = br#"{"outer":{"inner":1}}"#;
        let list = load(input, 0).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get_key(0).unwrap(), b"outer");
    }
}
