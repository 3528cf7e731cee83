pub mod contact;
pub mod extractors;
