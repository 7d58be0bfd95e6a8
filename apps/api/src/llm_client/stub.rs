//! Scripted provider for handler and router tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{GenerationError, GenerationProvider, GenerationRequest, GenerationResult, ModelClass};

/// Replays queued replies in order and records every request it receives.
/// When the queue runs dry it answers "stub reply". A failing stub errors on every call.
#[derive(Default)]
pub struct StubProvider {
    replies: Mutex<VecDeque<String>>,
    fail_with: Option<String>,
    calls: Mutex<Vec<(GenerationRequest, ModelClass)>>,
}

impl StubProvider {
    pub fn replying(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(GenerationRequest, ModelClass)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationProvider for StubProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
        model: ModelClass,
    ) -> Result<GenerationResult, GenerationError> {
        self.calls.lock().unwrap().push((request.clone(), model));

        if let Some(message) = &self.fail_with {
            return Err(GenerationError::Provider(message.clone()));
        }

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "stub reply".to_string());
        Ok(GenerationResult::new(&reply))
    }
}
