pub mod admin;
pub mod assets;
pub mod health;
pub mod meta;
pub mod payment;
