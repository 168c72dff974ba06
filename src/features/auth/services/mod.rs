mod auth_service;
mod confirmation;
mod token_service;

pub use auth_service::AuthService;
pub use confirmation::ConfirmationCodes;
pub use token_service::TokenService;
