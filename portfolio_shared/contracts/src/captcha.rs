/// A challenge shown next to a form which must be answered correctly by the
/// submitter.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CaptchaService: Send + Sync + 'static {
    /// Returns the question to display to the user.
    fn prompt(&self) -> String;

    /// Returns whether `answer` is the expected answer to the prompt.
    fn check(&self, answer: &str) -> bool;
}

#[cfg(feature = "mock")]
impl MockCaptchaService {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.expect_prompt().once().return_const(prompt.into());
        self
    }

    pub fn with_check(mut self, answer: &'static str, result: bool) -> Self {
        self.expect_check()
            .once()
            .with(mockall::predicate::eq(answer))
            .return_const(result);
        self
    }
}
