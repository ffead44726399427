pub mod event;
pub mod shortcuts;
