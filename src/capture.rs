/*!
Pipeline B: scan-and-capture.

Mirrors the `ECJP_TOKEN_LIST`-gated half of `ecjp.h` (`ecjp_load_2`,
`ecjp_read_element`, `ecjp_split_key_and_value`). No `.c` body for this
branch survived retrieval, so the capture/transcription semantics here
follow spec.md §4.3 directly rather than a surviving C implementation.
Unlike pipeline A, each [`ItemToken`] owns its bytes — it does not borrow
the source — since the whole point of this pipeline is to hand callers a
detached `"key":value` segment they can keep after the source is dropped.
*/

use alloc::vec::Vec;

use crate::error::{EcjpError, ValueType};
use crate::fsm::{self, ParseSummary, Sink};

/// An owned, detached `"key":value` segment (or bare array element)
/// captured verbatim from the source. Call
/// [`ItemToken::split_key_and_value`] to recover an object item's key and
/// value's own byte ranges and the value's type; a bare array element has
/// no key to split out, so [`ItemToken::kind`] reports its type directly.
#[derive(Debug, Clone)]
pub struct ItemToken {
    kind: ValueType,
    raw: Vec<u8>,
}

struct CaptureSink<'a> {
    source: &'a [u8],
    items: Vec<ItemToken>,
    error: Option<EcjpError>,
}

impl<'a> CaptureSink<'a> {
    fn push(&mut self, kind: ValueType, raw: Vec<u8>) {
        if self.error.is_some() {
            return;
        }
        if raw.len() > crate::limits::MAX_ITEM_LEN {
            self.error = Some(EcjpError::NoSpaceInBuffer);
            return;
        }
        self.items.push(ItemToken { kind, raw });
    }
}

impl<'a> Sink for CaptureSink<'a> {
    fn item(
        &mut self,
        key_quote_pos: usize,
        _key_start: usize,
        _key_len: usize,
        _value_start: usize,
        value_end: usize,
        _kind: ValueType,
    ) {
        let raw = self.source[key_quote_pos..value_end].to_vec();
        self.push(ValueType::KeyValuePair, raw);
    }

    fn array_item(&mut self, value_start: usize, value_end: usize, kind: ValueType) {
        let raw = self.source[value_start..value_end].to_vec();
        self.push(kind, raw);
    }
}

/// An owned list of captured items from the object found at nesting `level`.
pub struct ItemList {
    items: Vec<ItemToken>,
    pub summary: ParseSummary,
}

/// Scans `input` and captures every `"key":value` item directly inside the
/// object found at nesting `level`.
pub fn load(input: &[u8], level: u16) -> Result<ItemList, EcjpError> {
    let mut sink = CaptureSink {
        source: input,
        items: Vec::new(),
        error: None,
    };
    let summary = fsm::scan(input, level, &mut sink)?;

    if let Some(err) = sink.error {
        return Err(err);
    }

    Ok(ItemList {
        items: sink.items,
        summary,
    })
}

/// Validates and captures in one call, as `ecjp_check_and_load` does.
pub fn check_and_load(input: &[u8], level: u16) -> Result<ItemList, EcjpError> {
    load(input, level)
}

impl ItemList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reads the `index`-th captured item's raw `"key":value` bytes.
    pub fn read_element(&self, index: usize) -> Result<&ItemToken, EcjpError> {
        self.items.get(index).ok_or(EcjpError::IndexOutOfBounds)
    }

    pub fn free_item_list(self) {
        drop(self)
    }
}

impl ItemToken {
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The item's type: `KeyValuePair` for an object item (see
    /// [`Self::split_key_and_value`] to recover its own value's type), or
    /// the value's own type directly for a bare array element.
    pub fn kind(&self) -> ValueType {
        self.kind
    }

    /// Splits a captured `"key":value` segment back into the key's raw
    /// bytes (without surrounding quotes), the value's raw bytes (literal
    /// JSON text, quotes/braces included where applicable), and the
    /// value's own type.
    pub fn split_key_and_value(&self) -> Result<(&[u8], &[u8], ValueType), EcjpError> {
        let mut i = 0usize;
        if self.raw.get(i) != Some(&b'"') {
            return Err(EcjpError::Syntax { pos: 0 });
        }

        let (key_start, key_len) = fsm::consume_string(&self.raw, &mut i)?;

        while matches!(self.raw.get(i), Some(b) if b.is_ascii_whitespace()) {
            i += 1;
        }
        if self.raw.get(i) != Some(&b':') {
            return Err(EcjpError::Syntax {
                pos: i as crate::limits::Pos,
            });
        }
        i += 1;

        let (value_kind, value_start, value_len) = fsm::skip_value(&self.raw, &mut i)?;

        Ok((
            &self.raw[key_start..key_start + key_len],
            &self.raw[value_start..value_start + value_len],
            value_kind,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_flat_items() {
        let input = br#"{"a":1,"b":"two"}"#;
        let list = load(input, 0).unwrap();
        assert_eq!(list.len(), 2);

        let (key, value, kind) = list.read_element(0).unwrap().split_key_and_value().unwrap();
        assert_eq!(key, b"a");
        assert_eq!(value, b"1");
        assert_eq!(kind, ValueType::Number);

        let (key, value, kind) = list.read_element(1).unwrap().split_key_and_value().unwrap();
        assert_eq!(key, b"b");
        assert_eq!(value, br#""two""#);
        assert_eq!(kind, ValueType::String);
    }

    #[test]
    fn captures_nested_container_value_whole() {
        let input = br#"{"a":{"nested":true}}"#;
        let list = load(input, 0).unwrap();
        assert_eq!(list.len(), 1);

        let (key, value, kind) = list.read_element(0).unwrap().split_key_and_value().unwrap();
        assert_eq!(key, b"a");
        assert_eq!(value, br#"{"nested":true}"#);
        assert_eq!(kind, ValueType::Object);
    }

    #[test]
    fn captures_bare_array_elements() {
        let input = br#"[true,false,null,"x",12e-3]"#;
        let list = load(input, 0).unwrap();
        assert_eq!(list.len(), 5);

        let expected = [
            (ValueType::Bool, &b"true"[..]),
            (ValueType::Bool, &b"false"[..]),
            (ValueType::Null, &b"null"[..]),
            (ValueType::String, &br#""x""#[..]),
            (ValueType::Number, &b"12e-3"[..]),
        ];

        for (i, (kind, raw)) in expected.iter().enumerate() {
            let item = list.read_element(i).unwrap();
            assert_eq!(item.kind(), *kind);
            assert_eq!(item.raw(), *raw);
        }
    }

    #[test]
    fn out_of_bounds_read() {
        let input = br#"{"a":1}"#;
        let list = load(input, 0).unwrap();
        assert!(matches!(
            list.read_element(1),
            Err(EcjpError::IndexOutOfBounds)
        ));
    }
}
