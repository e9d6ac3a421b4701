pub mod airports;
pub mod booking;
pub mod themes;
pub mod vehicle;
