/*!
Compile-time size and width limits.

The original C library picks these with an `#ifdef ECJP_RUN_ON_PC` /
`ECJP_RUN_ON_MCU` ladder in `ecjp_limit.h`. We pick the same ladder with
Cargo features instead, and unlike the original header we size the position
and length integers *per profile* rather than using `unsigned short int`
everywhere: the PC profile's multi-megabyte input bound does not fit in a
`u16`, so leaving it there would silently truncate positions on large input.
*/

#[cfg(all(feature = "profile-pc", feature = "profile-mcu"))]
compile_error!("`profile-pc` and `profile-mcu` are mutually exclusive");

/// Widest input offset/length this profile can address without truncation.
#[cfg(feature = "profile-pc")]
pub type Pos = u32;
#[cfg(feature = "profile-mcu")]
pub type Pos = u16;
#[cfg(not(any(feature = "profile-pc", feature = "profile-mcu")))]
pub type Pos = u16;

/// Length of a single key or array index; always narrower than [`Pos`].
#[cfg(feature = "profile-pc")]
pub type Len = u16;
#[cfg(feature = "profile-mcu")]
pub type Len = u8;
#[cfg(not(any(feature = "profile-pc", feature = "profile-mcu")))]
pub type Len = u16;

/// Maximum number of input bytes this profile will scan.
#[cfg(feature = "profile-pc")]
pub const MAX_INPUT_SIZE: usize = 5 * 1024 * 1024;
#[cfg(feature = "profile-mcu")]
pub const MAX_INPUT_SIZE: usize = 2 * 1024;
#[cfg(not(any(feature = "profile-pc", feature = "profile-mcu")))]
pub const MAX_INPUT_SIZE: usize = 32 * 1024;

/// Columns used by the fixed-width diagnostics renderer.
#[cfg(feature = "profile-pc")]
pub const MAX_PRINT_COLUMNS: usize = 120;
#[cfg(feature = "profile-mcu")]
pub const MAX_PRINT_COLUMNS: usize = 40;
#[cfg(not(any(feature = "profile-pc", feature = "profile-mcu")))]
pub const MAX_PRINT_COLUMNS: usize = 80;

/// Maximum bracket nesting depth the stack can track.
#[cfg(feature = "profile-pc")]
pub const MAX_PARSE_STACK_DEPTH: usize = 256;
#[cfg(feature = "profile-mcu")]
pub const MAX_PARSE_STACK_DEPTH: usize = 16;
#[cfg(not(any(feature = "profile-pc", feature = "profile-mcu")))]
pub const MAX_PARSE_STACK_DEPTH: usize = 32;

/// Maximum byte length of a single key.
#[cfg(feature = "profile-pc")]
pub const MAX_KEY_LEN: usize = 256;
#[cfg(feature = "profile-mcu")]
pub const MAX_KEY_LEN: usize = 32;
#[cfg(not(any(feature = "profile-pc", feature = "profile-mcu")))]
pub const MAX_KEY_LEN: usize = 64;

/// Maximum byte length of a scalar value reachable through a key.
#[cfg(feature = "profile-pc")]
pub const MAX_KEY_VALUE_LEN: usize = 4096;
#[cfg(feature = "profile-mcu")]
pub const MAX_KEY_VALUE_LEN: usize = 128;
#[cfg(not(any(feature = "profile-pc", feature = "profile-mcu")))]
pub const MAX_KEY_VALUE_LEN: usize = 512;

/// Maximum byte length of a single array element.
#[cfg(feature = "profile-pc")]
pub const MAX_ARRAY_ELEM_LEN: usize = 4096;
#[cfg(feature = "profile-mcu")]
pub const MAX_ARRAY_ELEM_LEN: usize = 128;
#[cfg(not(any(feature = "profile-pc", feature = "profile-mcu")))]
pub const MAX_ARRAY_ELEM_LEN: usize = 512;

/// Maximum byte length of a single pipeline-B item (key + value combined).
#[cfg(feature = "profile-pc")]
pub const MAX_ITEM_LEN: usize = 4096;
#[cfg(feature = "profile-mcu")]
pub const MAX_ITEM_LEN: usize = 160;
#[cfg(not(any(feature = "profile-pc", feature = "profile-mcu")))]
pub const MAX_ITEM_LEN: usize = 576;

/// Maximum object/array nesting level the value-extraction walker will follow.
#[cfg(feature = "profile-pc")]
pub const MAX_NESTED_LEVEL: usize = 64;
#[cfg(feature = "profile-mcu")]
pub const MAX_NESTED_LEVEL: usize = 8;
#[cfg(not(any(feature = "profile-pc", feature = "profile-mcu")))]
pub const MAX_NESTED_LEVEL: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_depth_is_nonzero() {
        assert!(MAX_PARSE_STACK_DEPTH > 0);
    }

    #[test]
    fn pos_is_wide_enough_for_input_size() {
        assert!((MAX_INPUT_SIZE as u128) <= (Pos::MAX as u128) + 1);
    }
}
