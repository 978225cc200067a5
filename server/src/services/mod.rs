pub mod event_service;
pub mod validator;

pub use event_service::EventService;
