pub mod event;
pub mod participant;
