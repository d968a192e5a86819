pub mod session;

pub use session::{Authenticated, CurrentSession, SessionPrincipal};
