//! Authentication session state and the collaborators around it: the
//! identity provider port, credential form rules, the session context and
//! the route guard.

pub mod context;
pub mod credentials;
pub mod entities;
pub mod guard;
pub mod ports;

pub use context::*;
pub use credentials::*;
pub use entities::*;
pub use guard::*;
pub use ports::*;
