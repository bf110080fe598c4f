pub mod session_claims;

pub use session_claims::*;
