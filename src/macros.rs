/*!
Macro helpers for the parser.

The teacher's `get_unchecked!`/`test_assert!` family exists to let a
*trusted-input* scanner skip bounds checks outside tests; this parser
validates untrusted input byte by byte and never indexes without going
through `slice::get`, so that family has no place here. `trace!` is the one
helper that survives, mirroring `ecjp_printf`'s `ECJP_RUN_ON_PC`-gated debug
prints in the original library.
*/

/// Diagnostic trace point. A no-op unless built with `--cfg ecjp_trace`,
/// routed through `eprintln!` instead of a raw `printf`.
macro_rules! trace {
    ($($tokens:tt)*) => {
        #[cfg(ecjp_trace)]
        {
            eprintln!($($tokens)*);
        }
    };
}
