//! Authentication traits and request/result types

pub mod traits;

pub use traits::{AuthContext, AuthRequest, AuthenticationResult, Authenticator};
