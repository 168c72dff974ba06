//! Categories a title can belong to (e.g. books, films, music).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/v1/categories/` | No | List categories |
//! | POST | `/v1/categories/` | Admin | Create category |
//! | DELETE | `/v1/categories/{slug}/` | Admin | Delete category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
