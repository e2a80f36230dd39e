//! Build environment verification.
//!
//! The verifier walks an ordered list of required tools and stops at the
//! first one the locator cannot find.

use crate::error::{BuildprepError, Result};
use crate::shell::ToolLocator;
use crate::ui::Logger;

/// Tools every build needs, checked in this order.
pub const REQUIRED_TOOLS: &[&str] = &["gclient", "python3"];

pub const VERIFYING_MESSAGE: &str = "Verifying build environment...";
pub const VERIFIED_MESSAGE: &str = "Build environment verified successfully";

/// Progress of a verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationState {
    NotStarted,
    /// Checking the tool at this index of the required list.
    Checking(usize),
    Verified,
    /// Stopped at the named missing tool.
    Aborted { tool: String },
}

/// Asserts that a list of required tools is present.
pub struct EnvironmentVerifier<L> {
    locator: L,
    tools: Vec<String>,
}

impl<L: ToolLocator> EnvironmentVerifier<L> {
    /// Verifier for [`REQUIRED_TOOLS`].
    pub fn new(locator: L) -> Self {
        Self::with_tools(locator, REQUIRED_TOOLS.iter().copied())
    }

    /// Verifier for a custom tool list, checked in the given order.
    pub fn with_tools<I, S>(locator: L, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locator,
            tools: tools.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Verify every required tool, failing on the first missing one.
    pub fn verify(&self, ui: &mut dyn Logger, verbose: bool) -> Result<()> {
        let (state, result) = self.verify_with_state(ui, verbose);
        tracing::debug!(?state, "environment verification finished");
        result
    }

    /// Like [`verify`](Self::verify), also returning the final state.
    pub fn verify_with_state(
        &self,
        ui: &mut dyn Logger,
        verbose: bool,
    ) -> (VerificationState, Result<()>) {
        let mut state = VerificationState::NotStarted;
        tracing::debug!(?state, tools = ?self.tools, "starting environment verification");
        ui.debug(VERIFYING_MESSAGE, verbose);

        for (index, tool) in self.tools.iter().enumerate() {
            state = VerificationState::Checking(index);
            tracing::debug!(?state, tool = %tool, "checking required tool");

            if !self.locator.is_available(tool) {
                let state = VerificationState::Aborted { tool: tool.clone() };
                let err = BuildprepError::MissingTool { tool: tool.clone() };
                return (state, Err(err));
            }
        }

        state = VerificationState::Verified;
        ui.success(VERIFIED_MESSAGE);
        (state, Ok(()))
    }
}
