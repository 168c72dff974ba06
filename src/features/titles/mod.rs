//! Works that can be reviewed: books, films, albums and so on.
//!
//! A title belongs to at most one category, carries any number of genre
//! tags, and exposes the truncated average of its review scores as
//! `rating`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/v1/titles/` | No | List titles with filters |
//! | POST | `/v1/titles/` | Admin | Create title |
//! | GET | `/v1/titles/{title_id}/` | No | Get title |
//! | PATCH | `/v1/titles/{title_id}/` | Admin | Update title |
//! | DELETE | `/v1/titles/{title_id}/` | Admin | Delete title |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TitleService;
