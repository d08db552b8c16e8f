pub mod echo;
pub mod identity;
