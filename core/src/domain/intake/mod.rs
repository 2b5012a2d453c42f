//! Client side of the symptom checker: form validation, the per-session
//! submission state machine and the result presentation model.

pub mod controller;
pub mod form;
pub mod ports;
pub mod presentation;

pub use controller::*;
pub use form::*;
pub use ports::*;
pub use presentation::*;
