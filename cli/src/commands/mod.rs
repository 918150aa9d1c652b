pub mod notify;
pub mod profile;
