pub mod calendar;
pub mod filter;
pub mod timeline;
