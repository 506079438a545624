pub mod login;
pub mod profile;
pub mod sign_up;
