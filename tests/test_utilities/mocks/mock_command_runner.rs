use bake::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock CommandRunner answering by full command line
///
/// Unregistered commands behave like a tool that exits with status 1.
#[derive(Clone, Default)]
pub struct MockCommandRunner {
    pub answers: HashMap<String, CommandOutput>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
        self.answers
            .insert(command.to_string(), CommandOutput::ok(stdout));
        self
    }

    pub fn with_failure(mut self, command: &str, stderr: &str) -> Self {
        self.answers
            .insert(command.to_string(), CommandOutput::failed(1, stderr));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        let command = std::iter::once(program)
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.lock().unwrap().push(command.clone());
        Ok(self
            .answers
            .get(&command)
            .cloned()
            .unwrap_or_else(|| CommandOutput::failed(1, format!("{}: not mocked", program))))
    }
}
