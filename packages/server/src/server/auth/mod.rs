// Cookie-backed server-side sessions
pub mod session;

pub use session::*;
