pub mod credit_offset;
pub mod installments;
pub mod late_tax;
pub mod refund;
