use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::comments::{dtos as comments_dtos, handlers as comments_handlers};
use crate::features::genres::{dtos as genres_dtos, handlers as genres_handlers};
use crate::features::reviews::{dtos as reviews_dtos, handlers as reviews_handlers};
use crate::features::titles::{dtos as titles_dtos, handlers as titles_handlers};
use crate::features::users::models::UserRole;
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::sign_up,
        auth_handlers::get_token,
        // Users
        users_handlers::list_users,
        users_handlers::create_user,
        users_handlers::get_me,
        users_handlers::update_me,
        users_handlers::get_user,
        users_handlers::update_user,
        users_handlers::delete_user,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        categories_handlers::delete_category,
        // Genres
        genres_handlers::list_genres,
        genres_handlers::create_genre,
        genres_handlers::delete_genre,
        // Titles
        titles_handlers::list_titles,
        titles_handlers::create_title,
        titles_handlers::get_title,
        titles_handlers::update_title,
        titles_handlers::delete_title,
        // Reviews
        reviews_handlers::list_reviews,
        reviews_handlers::create_review,
        reviews_handlers::get_review,
        reviews_handlers::update_review,
        reviews_handlers::delete_review,
        // Comments
        comments_handlers::list_comments,
        comments_handlers::create_comment,
        comments_handlers::get_comment,
        comments_handlers::update_comment,
        comments_handlers::delete_comment,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::SignUpRequestDto,
            auth_dtos::SignUpResponseDto,
            auth_dtos::GetTokenRequestDto,
            auth_dtos::TokenResponseDto,
            // Users
            UserRole,
            users_dtos::UserResponseDto,
            users_dtos::CreateUserDto,
            users_dtos::UpdateUserDto,
            users_dtos::UpdateProfileDto,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CreateCategoryDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Genres
            genres_dtos::GenreResponseDto,
            genres_dtos::CreateGenreDto,
            ApiResponse<genres_dtos::GenreResponseDto>,
            ApiResponse<Vec<genres_dtos::GenreResponseDto>>,
            // Titles
            titles_dtos::TitleResponseDto,
            titles_dtos::CreateTitleDto,
            titles_dtos::UpdateTitleDto,
            ApiResponse<titles_dtos::TitleResponseDto>,
            ApiResponse<Vec<titles_dtos::TitleResponseDto>>,
            // Reviews
            reviews_dtos::ReviewResponseDto,
            reviews_dtos::CreateReviewDto,
            reviews_dtos::UpdateReviewDto,
            ApiResponse<reviews_dtos::ReviewResponseDto>,
            ApiResponse<Vec<reviews_dtos::ReviewResponseDto>>,
            // Comments
            comments_dtos::CommentResponseDto,
            comments_dtos::CreateCommentDto,
            comments_dtos::UpdateCommentDto,
            ApiResponse<comments_dtos::CommentResponseDto>,
            ApiResponse<Vec<comments_dtos::CommentResponseDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Sign-up and token exchange"),
        (name = "users", description = "Account management (admin) and own profile"),
        (name = "categories", description = "Title categories (public reads)"),
        (name = "genres", description = "Title genres (public reads)"),
        (name = "titles", description = "Reviewable works with aggregate rating"),
        (name = "reviews", description = "User reviews on titles"),
        (name = "comments", description = "Comments on reviews"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Kritika API",
        version = "0.1.0",
        description = "API documentation for Kritika",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
