pub mod banking;
pub mod catalog;
pub mod civil;
pub mod family;
pub mod labor;
pub mod other;
pub mod social_security;
