pub mod access;
pub mod documents;
pub mod health;
