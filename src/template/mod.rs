pub mod beacon;
pub mod dashboard;
pub mod error;
pub mod tbd;
