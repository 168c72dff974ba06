//! User reviews on titles, one per user per title, with a 0-10 score.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/v1/titles/{title_id}/reviews/` | No | List reviews |
//! | POST | `/v1/titles/{title_id}/reviews/` | User | Post review |
//! | GET | `/v1/titles/{title_id}/reviews/{review_id}/` | No | Get review |
//! | PATCH | `/v1/titles/{title_id}/reviews/{review_id}/` | Author/Mod/Admin | Update review |
//! | DELETE | `/v1/titles/{title_id}/reviews/{review_id}/` | Author/Mod/Admin | Delete review |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReviewService;
