pub mod alimony;
pub mod asset_division;
