//! Shared constants for integration tests.
//!
//! Integration tests are compiled as separate crates (one per top-level file in
//! `tests/`). Placing shared constants under `tests/common/` avoids creating an
//! additional integration test binary while still allowing reuse via:
//!
//! ```rust
//! #[path = "common/test_constants.rs"]
//! mod test_constants;
//! ```

/// Placeholder access key identifier.
pub const ACCESS_KEY_ID: &str = "QYACCESSKEYIDEXAMPLE";

/// Placeholder secret used to sign test requests.
pub const SECRET_ACCESS_KEY: &str = "SECRETACCESSKEY";

/// Zone every test facade is scoped to.
pub const ZONE: &str = "pek3a";
