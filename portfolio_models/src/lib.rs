use macros::nutype_string;

pub mod blog;
pub mod contact;
pub mod email_address;
mod macros;
pub mod newsletter;
pub mod pagination;
pub mod project;
pub mod skill;

pub use url::Url;

nutype_string!(SearchTerm(validate(len_char_max = 256)));
