use std::sync::Arc;

use portfolio_di::Build;
use portfolio_shared_contracts::captcha::CaptchaService;
use portfolio_utils::trace_instrument;

/// A fixed arithmetic question with a known integer answer.
#[derive(Debug, Clone, Build)]
pub struct MathCaptchaServiceImpl {
    config: MathCaptchaServiceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathCaptchaServiceConfig {
    pub prompt: Arc<str>,
    pub answer: i64,
}

impl Default for MathCaptchaServiceConfig {
    fn default() -> Self {
        Self {
            prompt: "What is 5 + 3?".into(),
            answer: 8,
        }
    }
}

impl CaptchaService for MathCaptchaServiceImpl {
    fn prompt(&self) -> String {
        self.config.prompt.to_string()
    }

    #[trace_instrument(skip(self))]
    fn check(&self, answer: &str) -> bool {
        answer
            .trim()
            .parse::<i64>()
            .is_ok_and(|x| x == self.config.answer)
    }
}
