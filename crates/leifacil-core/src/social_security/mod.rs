pub mod back_pay;
pub mod contribution_time;
pub mod retirement;
pub mod rmi;
