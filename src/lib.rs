pub mod event;
pub mod query;
pub mod request;
pub mod time;
