pub mod contractual_penalty;
pub mod debt_update;
pub mod inventory;
pub mod lost_profits;
pub mod moratory_interest;
pub mod rent;
