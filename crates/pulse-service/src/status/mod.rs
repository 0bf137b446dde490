pub mod service;

pub use service::StatusService;
