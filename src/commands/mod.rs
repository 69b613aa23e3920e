pub mod auth;
pub mod browse;
pub mod issues;
pub mod star;

pub use auth::handle_auth;
pub use browse::handle_browse;
pub use issues::handle_issues;
pub use star::handle_star;
