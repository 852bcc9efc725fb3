// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User-facing alerts and confirmations.

use std::collections::VecDeque;

/// Blocking alert/confirm dialogs.
pub trait UserPrompt {
    /// Show a message the user must acknowledge.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question; blocks until answered.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Prompt with pre-recorded answers, for tests and non-interactive use.
///
/// Confirmations are answered from the queue; once it runs out,
/// `default_answer` is used.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    default_answer: bool,
    alerts: Vec<String>,
    questions: Vec<String>,
}

impl ScriptedPrompt {
    /// A prompt that answers every confirmation with `answer`.
    pub fn always(answer: bool) -> Self {
        Self {
            default_answer: answer,
            ..Self::default()
        }
    }

    /// Queue the answer for the next confirmation.
    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl UserPrompt for ScriptedPrompt {
    fn alert(&mut self, message: &str) {
        tracing::debug!(message, "Alert");
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.questions.push(message.to_string());
        let answer = self.answers.pop_front().unwrap_or(self.default_answer);
        tracing::debug!(message, answer, "Confirm");
        answer
    }
}
