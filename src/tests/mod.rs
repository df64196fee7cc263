//! Test modules for the typeahead crate.
//!
//! Engine-specific unit and property tests live next to the engines; this
//! module holds the tests that cut across components, currently the harness
//! tests (corpus loading, sampling, prefix generation, timing runs, and
//! result-equivalence checking).
