/*!
# `ecjp`

An embedded-friendly, character-driven JSON parser.

This library validates a JSON document byte by byte over a bounded bracket
stack rather than recursing, so nesting depth is a compile-time capacity
rather than a call-stack limit — important on targets where the call stack
is a few kilobytes. Two scanning pipelines are offered over the same shared
lexical automaton: a scan-and-index pipeline that records key positions
cheaply, and a scan-and-capture pipeline that detaches owned `"key":value`
segments from the source. A separate value-extraction walker and array
walker recover values on demand instead of building a full parse tree.

## Profiles

Three compile-time size profiles control integer widths and capacity
ceilings: `profile-pc` (generous limits, wide integers), `profile-mcu`
(narrow integers, small buffers), and the default profile in between.
Selecting both `profile-pc` and `profile-mcu` is a compile error.
*/

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod error;
pub mod limits;

mod stack;

pub mod fsm;

pub mod token;
pub mod walker;
pub mod array;

#[cfg(feature = "item-list")]
pub mod capture;

#[cfg(feature = "diagnostics")]
pub mod diag;

pub mod version;

#[cfg(any(test, feature = "serde_json"))]
pub mod value;

pub use error::{EcjpError, StructType, ValueType};
pub use fsm::ParseSummary;
pub use token::{check_syntax, load, KeyList, KeyToken};

#[cfg(test)]
mod tests;
