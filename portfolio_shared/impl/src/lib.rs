pub mod captcha;
pub mod id;
pub mod time;
