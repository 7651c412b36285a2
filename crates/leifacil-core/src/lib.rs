pub mod amortization;
pub mod calendar;
pub mod correction;
pub mod error;
pub mod types;

mod checked;
mod validate;

#[cfg(feature = "civil")]
pub mod civil;

#[cfg(feature = "labor")]
pub mod labor;

#[cfg(feature = "social_security")]
pub mod social_security;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "banking")]
pub mod banking;

#[cfg(feature = "family")]
pub mod family;

#[cfg(feature = "other")]
pub mod other;

#[cfg(feature = "registry")]
pub mod registry;

pub use calendar::{IndexTable, MonthKey};
pub use error::LeiFacilError;
pub use types::*;

/// Standard result type for all calculator operations
pub type LeiFacilResult<T> = Result<T, LeiFacilError>;
