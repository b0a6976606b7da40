use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use sv_ifgen::prelude::*;

/// Mock OperatorConsole answering prompts from a script
///
/// Every label and shown text is recorded. Once the script runs out the
/// console behaves like a closed stdin.
#[derive(Default, Clone)]
pub struct ScriptedConsole {
    answers: Arc<Mutex<VecDeque<String>>>,
    transcript: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Arc::new(Mutex::new(
                answers.iter().map(|a| a.to_string()).collect(),
            )),
            transcript: Arc::default(),
        }
    }

    /// Everything the operator would have seen, in order
    pub fn transcript(&self) -> String {
        self.transcript.lock().unwrap().concat()
    }

    /// Prompt labels asked so far
    pub fn prompt_count(&self, label: &str) -> usize {
        self.transcript
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.as_str() == label)
            .count()
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

impl OperatorConsole for ScriptedConsole {
    fn prompt_line(&self, label: &str) -> Result<String> {
        self.transcript.lock().unwrap().push(label.to_string());
        self.answers.lock().unwrap().pop_front().ok_or_else(|| {
            GeneratorError::InputClosed {
                label: label.trim().to_string(),
            }
            .into()
        })
    }

    fn show(&self, text: &str) {
        self.transcript.lock().unwrap().push(format!("{}\n", text));
    }
}
