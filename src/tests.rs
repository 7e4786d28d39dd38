//! Top-level test harness, split the way the teacher splits its own
//! `tests.rs`: a small generator shared across suites, a `valid.rs` suite
//! of accepted documents, and an `invalid.rs` suite of rejected ones.


mod invalid;
