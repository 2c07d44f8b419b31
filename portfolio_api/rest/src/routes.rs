pub mod contact;
pub mod health;
pub mod newsletter;
pub mod showcase;
