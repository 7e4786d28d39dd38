/*!
Error and value-tag types.

Mirrors `ecjp_return_code_t`, `ecjp_value_type_t`, and `ecjp_struct_type_t`
from the original `ecjp.h`, folded into one `Result`-friendly error enum
instead of an integer return code plus an out-parameter `err_pos`. `Display`
is hand-written rather than derived through `thiserror`, matching how
`creative-forest-lang-pt` writes its own parse errors.
*/

use core::fmt;

use crate::limits::Pos;

/// What kind of JSON value a token or array element turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Undefined,
    String,
    Number,
    Object,
    Array,
    Bool,
    Null,
    /// Only ever produced by pipeline B; recovered with `split_key_and_value`.
    KeyValuePair,
}

/// What structural container, if any, sits at the root of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructType {
    Null,
    Object,
    Array,
}

/// Every way the parser can fail, grouped the way spec.md groups them:
/// syntactic, capacity, interface-misuse, and lookup errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcjpError {
    /// The input is not syntactically valid JSON at the given byte offset.
    Syntax { pos: Pos },
    /// An object or array was opened but never closed (or vice versa).
    BracketsMissing { pos: Pos },
    /// The input was empty (zero bytes, or only whitespace).
    EmptyInput,
    /// A key, value, array element, or bracket stack grew past its
    /// profile-selected capacity.
    NoSpaceInBuffer,
    /// `get_key`/`get_element` was asked for an index past the end of the
    /// already-scanned list.
    IndexOutOfBounds,
    /// `get_key` was asked for a key that does not appear in the input.
    IndexNotFound,
    /// There is no next key to advance to.
    NoMoreKeys,
    /// A failure that does not fit any of the more specific variants above,
    /// such as the bracket stack's own capacity overflowing — a distinct
    /// condition from a value/key/item exceeding its own length budget.
    Generic,
    /// Reserved for parity with the original library's taxonomy, which
    /// distinguishes a null output pointer from every other failure. Every
    /// output location in this API is a Rust reference, never a raw
    /// pointer, so this variant is never constructed.
    NullPointer,
}

impl fmt::Display for EcjpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcjpError::Syntax { pos } => write!(f, "syntax error at byte {}", pos),
            EcjpError::BracketsMissing { pos } => {
                write!(f, "unbalanced brackets, detected at byte {}", pos)
            }
            EcjpError::EmptyInput => write!(f, "input is empty"),
            EcjpError::NoSpaceInBuffer => write!(f, "value exceeds the configured size limit"),
            EcjpError::IndexOutOfBounds => write!(f, "index is out of bounds"),
            EcjpError::IndexNotFound => write!(f, "key was not found"),
            EcjpError::NoMoreKeys => write!(f, "no more keys to read"),
            EcjpError::Generic => write!(f, "generic parser error"),
            EcjpError::NullPointer => write!(f, "null output pointer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EcjpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position() {
        let err = EcjpError::Syntax { pos: 12 };
        assert_eq!(err.to_string(), "syntax error at byte 12");
    }
}
