pub mod dashboard;
pub mod warehouse;
