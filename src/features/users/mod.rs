//! User account management.
//!
//! Admin-only CRUD over accounts plus the `/v1/users/me/` profile endpoint
//! for any authenticated user.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET/POST | `/v1/users/` | Admin | List / create accounts |
//! | GET/PATCH | `/v1/users/me/` | User | Own profile (role read-only) |
//! | GET/PATCH/DELETE | `/v1/users/{username}/` | Admin | Manage an account |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
