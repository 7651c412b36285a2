pub mod accounting_expertise;
pub mod fgts_correction;
pub mod losses;
pub mod moral_damages;
