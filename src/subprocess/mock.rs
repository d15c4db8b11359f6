use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::error::ProcessError;
use super::runner::{ExitStatus, ProcessCommand, ProcessOutput, ProcessRunner};

/// Canned-response process runner for tests.
#[derive(Clone, Default)]
pub struct MockProcessRunner {
    expectations: Arc<Mutex<Vec<MockExpectation>>>,
    call_history: Arc<Mutex<Vec<ProcessCommand>>>,
}

struct MockExpectation {
    program: String,
    response: MockResponse,
    delay: Option<Duration>,
}

enum MockResponse {
    Output(ProcessOutput),
    NotFound,
}

pub struct MockCommandConfig {
    runner: MockProcessRunner,
    expectation: MockExpectation,
}

impl MockProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_command(&self, program: &str) -> MockCommandConfig {
        MockCommandConfig {
            runner: self.clone(),
            expectation: MockExpectation {
                program: program.to_string(),
                response: MockResponse::Output(ProcessOutput {
                    status: ExitStatus::Success,
                    stdout: String::new(),
                    stderr: String::new(),
                    duration: Duration::from_millis(10),
                }),
                delay: None,
            },
        }
    }

    pub fn verify_called(&self, program: &str, times: usize) -> bool {
        let history = self.call_history.lock().unwrap();
        history.iter().filter(|cmd| cmd.program == program).count() == times
    }

    pub fn get_call_history(&self) -> Vec<ProcessCommand> {
        self.call_history.lock().unwrap().clone()
    }

    fn response_for(
        &self,
        command: &ProcessCommand,
    ) -> Result<(Option<Duration>, Result<ProcessOutput, ProcessError>), ProcessError> {
        let expectations = self.expectations.lock().unwrap();
        let expectation = expectations
            .iter()
            .find(|e| e.program == command.program)
            .ok_or_else(|| {
                ProcessError::MockExpectationNotMet(format!(
                    "No expectation found for command: {} {:?}",
                    command.program, command.args
                ))
            })?;

        let response = match &expectation.response {
            MockResponse::Output(output) => Ok(output.clone()),
            MockResponse::NotFound => Err(ProcessError::CommandNotFound(command.program.clone())),
        };
        Ok((expectation.delay, response))
    }
}

#[async_trait]
impl ProcessRunner for MockProcessRunner {
    async fn run(&self, command: ProcessCommand) -> Result<ProcessOutput, ProcessError> {
        self.call_history.lock().unwrap().push(command.clone());

        let (delay, response) = self.response_for(&command)?;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        response
    }
}

impl MockCommandConfig {
    pub fn returns_stdout(mut self, stdout: &str) -> Self {
        if let MockResponse::Output(output) = &mut self.expectation.response {
            output.stdout = stdout.to_string();
        }
        self
    }

    pub fn returns_stderr(mut self, stderr: &str) -> Self {
        if let MockResponse::Output(output) = &mut self.expectation.response {
            output.stderr = stderr.to_string();
        }
        self
    }

    pub fn returns_exit_code(mut self, code: i32) -> Self {
        if let MockResponse::Output(output) = &mut self.expectation.response {
            output.status = if code == 0 {
                ExitStatus::Success
            } else {
                ExitStatus::Error(code)
            };
        }
        self
    }

    /// Simulate a program missing from `PATH`.
    pub fn returns_not_found(mut self) -> Self {
        self.expectation.response = MockResponse::NotFound;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.expectation.delay = Some(delay);
        self
    }

    pub fn finish(self) {
        self.runner
            .expectations
            .lock()
            .unwrap()
            .push(self.expectation);
    }
}
