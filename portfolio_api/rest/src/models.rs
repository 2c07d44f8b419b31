use serde::Serialize;

pub mod contact;
pub mod showcase;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}
