//! Genres a title can be tagged with (e.g. drama, rock, sci-fi).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/v1/genres/` | No | List genres |
//! | POST | `/v1/genres/` | Admin | Create genre |
//! | DELETE | `/v1/genres/{slug}/` | Admin | Delete genre |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::GenreService;
