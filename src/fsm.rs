/*!
Shared lexical automaton.

Ports the character classifiers (`ecjp_is_whitespace` / `ecjp_is_excode` /
`ecjp_is_ctrl`) and the `ecjp_parse_status_t` state machine from `ecjp.c`,
factored into a single core that both the token pipeline (`token`) and the
item pipeline (`capture`) drive through a [`Sink`], rather than duplicating
the scan loop once per emission strategy. The `ecjp_flags_t` packed bitfield
becomes [`Want`]; the bracket stack already tracks nesting for us, so there
is no standalone `Flags` type to carry over.
*/

use crate::error::{EcjpError, StructType, ValueType};
use crate::limits::Pos;
use crate::stack::{Bracket, BracketStack};

pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

pub fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

pub fn is_ctrl(b: u8) -> bool {
    b < 0x20
}

fn pos_err(i: usize) -> EcjpError {
    EcjpError::Syntax { pos: i as Pos }
}

fn skip_ws(input: &[u8], i: &mut usize) {
    while let Some(&b) = input.get(*i) {
        if is_whitespace(b) {
            *i += 1;
        } else {
            break;
        }
    }
}

/// Consumes a `"`-delimited string starting at `input[*i]`. Returns the
/// byte range of the string's *content*, excluding both quotes.
pub(crate) fn consume_string(input: &[u8], i: &mut usize) -> Result<(usize, usize), EcjpError> {
    debug_assert_eq!(input.get(*i), Some(&b'"'));
    *i += 1;
    let start = *i;

    loop {
        let b = *input.get(*i).ok_or_else(|| pos_err(*i))?;

        match b {
            b'"' => {
                let len = *i - start;
                *i += 1;
                return Ok((start, len));
            }
            b'\\' => {
                *i += 1;
                let esc = *input.get(*i).ok_or_else(|| pos_err(*i))?;
                match esc {
                    b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {
                        *i += 1;
                    }
                    b'u' => {
                        *i += 1;
                        for _ in 0..4 {
                            let hex = *input.get(*i).ok_or_else(|| pos_err(*i))?;
                            if !is_hex_digit(hex) {
                                return Err(pos_err(*i));
                            }
                            *i += 1;
                        }
                    }
                    _ => return Err(pos_err(*i)),
                }
            }
            b if is_ctrl(b) => return Err(pos_err(*i)),
            _ => {
                *i += 1;
            }
        }
    }
}

/// Consumes a JSON number starting at `input[*i]`. Returns its byte range.
fn consume_number(input: &[u8], i: &mut usize) -> Result<(usize, usize), EcjpError> {
    let start = *i;

    if input.get(*i) == Some(&b'-') {
        *i += 1;
    }

    match input.get(*i) {
        Some(&b'0') => {
            *i += 1;
        }
        Some(&b) if b.is_ascii_digit() => {
            while matches!(input.get(*i), Some(b) if b.is_ascii_digit()) {
                *i += 1;
            }
        }
        _ => return Err(pos_err(*i)),
    }

    if input.get(*i) == Some(&b'.') {
        *i += 1;
        let frac_start = *i;
        while matches!(input.get(*i), Some(b) if b.is_ascii_digit()) {
            *i += 1;
        }
        if *i == frac_start {
            return Err(pos_err(*i));
        }
    }

    if matches!(input.get(*i), Some(b'e') | Some(b'E')) {
        *i += 1;
        if matches!(input.get(*i), Some(b'+') | Some(b'-')) {
            *i += 1;
        }
        let exp_start = *i;
        while matches!(input.get(*i), Some(b) if b.is_ascii_digit()) {
            *i += 1;
        }
        if *i == exp_start {
            return Err(pos_err(*i));
        }
    }

    Ok((start, *i - start))
}

fn consume_literal(input: &[u8], i: &mut usize, literal: &[u8]) -> Result<(), EcjpError> {
    if input.get(*i..*i + literal.len()) == Some(literal) {
        *i += literal.len();
        Ok(())
    } else {
        Err(pos_err(*i))
    }
}

/// Validates and skips exactly one JSON value starting at `input[*i]`,
/// trusting (not re-deriving) overall document validity the way
/// `ecjp_read_key`'s walk trusts a prior `ecjp_check_syntax` pass. Returns
/// the value's type and its byte range as it literally appears in the
/// source — a string value's range includes its surrounding quotes, the
/// same way an object or array value's range includes its braces/brackets,
/// so the returned slice is always independently re-parseable as JSON.
/// Callers that want a bare key's content without quotes use
/// [`consume_string`] directly, as [`scan`] does. Container nesting seen
/// while skipping is bounded by `max_nested_level`, same as the independent
/// array walker.
pub fn skip_value(input: &[u8], i: &mut usize) -> Result<(ValueType, usize, usize), EcjpError> {
    skip_ws(input, i);
    let start = *i;
    let b = *input.get(*i).ok_or_else(|| pos_err(*i))?;

    let kind = match b {
        b'"' => {
            consume_string(input, i)?;
            ValueType::String
        }
        b'-' | b'0'..=b'9' => {
            consume_number(input, i)?;
            ValueType::Number
        }
        b't' => {
            consume_literal(input, i, b"true")?;
            ValueType::Bool
        }
        b'f' => {
            consume_literal(input, i, b"false")?;
            ValueType::Bool
        }
        b'n' => {
            consume_literal(input, i, b"null")?;
            ValueType::Null
        }
        b'{' | b'[' => {
            let open = if b == b'{' { Bracket::Object } else { Bracket::Array };
            let mut depth: u32 = 0;
            loop {
                let c = *input.get(*i).ok_or_else(|| pos_err(*i))?;
                match c {
                    b'"' => {
                        consume_string(input, i)?;
                        continue;
                    }
                    b'{' | b'[' => {
                        depth += 1;
                        if depth as usize > crate::limits::MAX_NESTED_LEVEL {
                            return Err(EcjpError::NoSpaceInBuffer);
                        }
                    }
                    b'}' | b']' => {
                        depth = depth.checked_sub(1).ok_or_else(|| pos_err(*i))?;
                        *i += 1;
                        if depth == 0 {
                            break;
                        }
                        continue;
                    }
                    _ => {}
                }
                *i += 1;
            }
            if open == Bracket::Object {
                ValueType::Object
            } else {
                ValueType::Array
            }
        }
        _ => return Err(pos_err(*i)),
    };

    Ok((kind, start, *i - start))
}

/// Receives structurally-significant events from [`scan`] as it walks the
/// document. Implemented once per emission pipeline: [`crate::token`]'s
/// sink only remembers key positions, [`crate::capture`]'s sink copies the
/// raw bytes of a `"key":value` pair or of a bare array element.
pub trait Sink {
    /// A key directly inside the object found at `target_depth`, together
    /// with its value's range and type.
    fn item(
        &mut self,
        key_quote_pos: usize,
        key_start: usize,
        key_len: usize,
        value_start: usize,
        value_end: usize,
        kind: ValueType,
    );

    /// An element directly inside the array found at `target_depth`, with
    /// no key of its own. Defaults to a no-op, which is what pipeline A
    /// wants: it only ever emits keyed tokens.
    fn array_item(&mut self, value_start: usize, value_end: usize, kind: ValueType) {
        let _ = (value_start, value_end, kind);
    }
}

/// Summary of a completed scan, carried in the `Ok` arm of `check_syntax`/
/// `load` in place of the original library's `check_result` out-parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSummary {
    pub struct_type: StructType,
    pub num_elements: usize,
    pub memory_used: usize,
}

/// A [`Sink`] that discards every event; used by `check_syntax`, which only
/// cares about the `Result`.
pub struct NoopSink;

impl Sink for NoopSink {
    fn item(&mut self, _: usize, _: usize, _: usize, _: usize, _: usize, _: ValueType) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Want {
    /// Expecting a value; a close bracket here is a syntax error — it would
    /// mean a trailing comma preceded it.
    Value,
    /// Expecting a value, or the close of the array just opened.
    ValueOrClose,
    /// Expecting a string key; a close bracket here is a syntax error, for
    /// the same reason as `Value`.
    Key,
    /// Expecting a string key, or the close of the object just opened.
    KeyOrClose,
    Colon,
    Comma,
}

/// Distinguishes what a [`Pending`] slot is waiting on: a key's value
/// inside an object, or a bare element inside an array.
#[derive(Debug, Clone, Copy)]
enum PendingKind {
    ObjectKey {
        quote_pos: usize,
        key_start: usize,
        key_len: usize,
    },
    ArrayElement,
}

/// A value at `target_depth` waiting for its own extent to close.
#[derive(Debug, Clone, Copy)]
struct Pending {
    kind: PendingKind,
    depth: usize,
    value_start: usize,
    container_kind: Option<ValueType>,
}

/// Validates the whole document and emits one [`Sink::item`]/[`Sink::array_item`]
/// call per slot directly inside the container found at nesting `level`
/// (`level == 0` means the root container's own slots). Every byte of
/// `input`, at every depth, is still fully validated — only emission is
/// scoped to `level`.
pub fn scan<S: Sink>(input: &[u8], level: u16, sink: &mut S) -> Result<ParseSummary, EcjpError> {
    if input.len() > crate::limits::MAX_INPUT_SIZE {
        return Err(EcjpError::NoSpaceInBuffer);
    }

    let mut i = 0usize;
    skip_ws(input, &mut i);

    if i >= input.len() {
        return Err(EcjpError::EmptyInput);
    }

    let struct_type = match input[i] {
        b'{' => StructType::Object,
        b'[' => StructType::Array,
        _ => StructType::Null,
    };

    let mut stack = BracketStack::new();
    let mut want = Want::Value;
    let mut num_items = 0usize;

    // The value currently waiting for its own extent to close, if that
    // value is directly inside the container at `target_depth`.
    let mut pending: Option<Pending> = None;
    let target_depth = level as usize + 1;

    loop {
        skip_ws(input, &mut i);

        let b = match input.get(i) {
            Some(&b) => b,
            None => break,
        };

        trace!("pos {} byte {:?} want {:?} depth {}", i, b as char, want, stack.depth());

        match want {
            Want::ValueOrClose | Want::Value => {
                let allow_close = matches!(want, Want::ValueOrClose);

                // Arrays have no key phase: an element's slot opens right
                // here, the first time we dispatch on its value while
                // sitting at `target_depth` inside an array.
                if pending.is_none()
                    && stack.depth() == target_depth
                    && stack.peek() == Some(Bracket::Array)
                {
                    pending = Some(Pending {
                        kind: PendingKind::ArrayElement,
                        depth: stack.depth(),
                        value_start: i,
                        container_kind: None,
                    });
                }

                // Only true when `b` is literally the value the pending
                // slot is waiting on, not some scalar nested further inside
                // a container that slot's value opened. Gates every pending
                // mutation below so a deeply nested scalar can't steal or
                // clobber a slot recorded at a shallower depth.
                let at_pending_depth = matches!(pending, Some(p) if p.depth == stack.depth());

                if at_pending_depth {
                    if let Some(p) = pending.as_mut() {
                        p.value_start = i;
                    }
                }

                match b {
                    b'{' => {
                        stack.push(Bracket::Object)?;
                        i += 1;
                        if at_pending_depth {
                            if let Some(p) = pending.as_mut() {
                                p.container_kind = Some(ValueType::Object);
                            }
                        }
                        want = Want::KeyOrClose;
                    }
                    b'[' => {
                        stack.push(Bracket::Array)?;
                        i += 1;
                        if at_pending_depth {
                            if let Some(p) = pending.as_mut() {
                                p.container_kind = Some(ValueType::Array);
                            }
                        }
                        want = Want::ValueOrClose;
                    }
                    b']' => {
                        if !allow_close {
                            return Err(pos_err(i));
                        }
                        // An empty array: `[` immediately followed by `]`.
                        stack.pop_matching(b']', i as Pos)?;
                        i += 1;
                        check_value_closed(&mut pending, &stack, i, sink, &mut num_items);
                        want = Want::Comma;
                    }
                    _ => {
                        let (kind, value_start, value_len) = skip_value(input, &mut i)?;
                        if at_pending_depth {
                            if let Some(p) = pending.take() {
                                emit_pending(sink, p, value_start, value_start + value_len, kind);
                                num_items += 1;
                            }
                        }
                        want = Want::Comma;
                    }
                }
            }
            Want::KeyOrClose | Want::Key => {
                let allow_close = matches!(want, Want::KeyOrClose);

                if b == b'}' {
                    if !allow_close {
                        return Err(pos_err(i));
                    }
                    stack.pop_matching(b'}', i as Pos)?;
                    i += 1;
                    check_value_closed(&mut pending, &stack, i, sink, &mut num_items);
                    want = Want::Comma;
                } else if b == b'"' {
                    let quote_pos = i;
                    let (ks, kl) = consume_string(input, &mut i)?;
                    if kl > crate::limits::MAX_KEY_LEN {
                        return Err(EcjpError::NoSpaceInBuffer);
                    }
                    if stack.depth() == target_depth {
                        pending = Some(Pending {
                            kind: PendingKind::ObjectKey {
                                quote_pos,
                                key_start: ks,
                                key_len: kl,
                            },
                            depth: stack.depth(),
                            value_start: 0,
                            container_kind: None,
                        });
                    }
                    want = Want::Colon;
                } else {
                    return Err(pos_err(i));
                }
            }
            Want::Colon => {
                if b == b':' {
                    i += 1;
                    want = Want::Value;
                } else {
                    return Err(pos_err(i));
                }
            }
            Want::Comma => match b {
                b'}' | b']' => {
                    // `pop_matching` reports `BracketsMissing` both for a
                    // stray closer (stack empty) and for a closer of the
                    // wrong kind (e.g. `]` closing an object).
                    stack.pop_matching(b, i as Pos)?;
                    i += 1;
                    check_value_closed(&mut pending, &stack, i, sink, &mut num_items);
                    want = Want::Comma;
                }
                b',' => match stack.peek() {
                    Some(Bracket::Object) => {
                        i += 1;
                        want = Want::Key;
                    }
                    Some(Bracket::Array) => {
                        i += 1;
                        want = Want::Value;
                    }
                    None => return Err(pos_err(i)),
                },
                _ => return Err(pos_err(i)),
            },
        }

        if stack.is_empty() && want == Want::Comma {
            break;
        }
    }

    skip_ws(input, &mut i);
    if i != input.len() {
        return Err(pos_err(i));
    }

    if !stack.is_empty() {
        return Err(EcjpError::BracketsMissing { pos: i as Pos });
    }

    Ok(ParseSummary {
        struct_type,
        num_elements: num_items,
        memory_used: i,
    })
}

/// Dispatches a completed [`Pending`] slot to the sink method matching its
/// kind.
fn emit_pending<S: Sink>(sink: &mut S, pending: Pending, value_start: usize, value_end: usize, kind: ValueType) {
    match pending.kind {
        PendingKind::ObjectKey {
            quote_pos,
            key_start,
            key_len,
        } => sink.item(quote_pos, key_start, key_len, value_start, value_end, kind),
        PendingKind::ArrayElement => sink.array_item(value_start, value_end, kind),
    }
}

/// After a container closed, checks whether that container was the value a
/// pending slot was waiting on and, if so, emits it.
fn check_value_closed<S: Sink>(
    pending: &mut Option<Pending>,
    stack: &BracketStack,
    value_end: usize,
    sink: &mut S,
    num_items: &mut usize,
) {
    if let Some(p) = *pending {
        if p.depth == stack.depth() {
            let kind = p.container_kind.unwrap_or(ValueType::Object);
            emit_pending(sink, p, p.value_start, value_end, kind);
            *num_items += 1;
            *pending = None;
        }
    }
}
