//! Authentication
//!
//! - [`JwtService`]: token issuing and validation
//! - [`CurrentUser`]: caller identity decoded from a token
//! - [`require_auth`]: middleware guarding protected routes
//! - [`password`]: argon2 hashing

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, TokenPair, TokenType};
pub use middleware::{TOKEN_HEADER, require_auth};
