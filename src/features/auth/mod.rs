//! Authentication and authorization.
//!
//! Sign-up issues an email confirmation code; `/v1/auth/token/` exchanges
//! username + code for an HS256 access token. Authenticated requests carry
//! the token as a bearer header; the middleware in `core::middleware` loads
//! the account and inserts a [`model::CurrentUser`] into request extensions.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/v1/auth/signup/` | No | Create account, email confirmation code |
//! | POST | `/v1/auth/token/` | No | Exchange code for access token |

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod policy;
pub mod routes;
pub mod services;

pub use services::AuthService;
