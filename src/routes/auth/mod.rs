pub mod account;
pub mod regenerate;
pub mod signup;
pub mod validate;
