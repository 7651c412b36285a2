pub mod fgts;
pub mod moral_damages;
pub mod premiums;
pub mod reclassification;
pub mod termination;
