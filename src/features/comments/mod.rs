//! Comments on reviews.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/v1/titles/{title_id}/reviews/{review_id}/comments/` | No | List comments |
//! | POST | `/v1/titles/{title_id}/reviews/{review_id}/comments/` | User | Post comment |
//! | GET | `/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}/` | No | Get comment |
//! | PATCH | `/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}/` | Author/Mod/Admin | Update comment |
//! | DELETE | `/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}/` | Author/Mod/Admin | Delete comment |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CommentService;
