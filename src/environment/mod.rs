//! Build environment verification.
//!
//! [`EnvironmentVerifier`] asserts that the tools a build needs are on the
//! search path before any lane runs, failing fast on the first missing one.

pub mod verifier;

pub use verifier::{
    EnvironmentVerifier, VerificationState, REQUIRED_TOOLS, VERIFIED_MESSAGE, VERIFYING_MESSAGE,
};
