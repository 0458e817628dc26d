pub mod question;
pub mod result;
