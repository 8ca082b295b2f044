//! Cross-module tests for the `.spb` codec.
//!
//! These tests exercise the public decode/encode surface end to end, on the
//! reference image layout and on synthetic images.

mod roundtrip_tests;

/// Install a test logger so `log` output shows up with `--nocapture`.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
