//! Form state shared by the inference pages.

#[cfg(test)]
#[path = "inference_test.rs"]
mod inference_test;

use crate::net::types::InferenceResult;

/// One submit/result cycle of an inference form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InferenceState {
    /// Selected task or user id.
    pub selected: String,
    pub running: bool,
    pub result: Option<InferenceResult>,
    pub error: Option<String>,
}

impl InferenceState {
    /// Start a request. Returns `false` (and changes nothing) while one is
    /// already running.
    pub fn begin(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.result = None;
        self.error = None;
        true
    }

    pub fn finish(&mut self, outcome: Result<InferenceResult, String>) {
        self.running = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(message) => self.error = Some(message),
        }
    }

    /// Show a validation message without starting a request.
    pub fn reject(&mut self, message: &str) {
        self.result = None;
        self.error = Some(message.to_owned());
    }
}
