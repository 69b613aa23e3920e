use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Access token not found. Set GITHUB_PERSONAL_ACCESS_TOKEN or run 'gh-issues auth' to configure.")]
    TokenNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("GraphQL error: {0}")]
    GraphQLError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("State error: {0}")]
    StateError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type GitHubResult<T> = Result<T, GitHubError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> GitHubResult<T>;
    fn with_context<F>(self, f: F) -> GitHubResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> GitHubResult<T> {
        self.map_err(|e| GitHubError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> GitHubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| GitHubError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> GitHubResult<T> {
        self.ok_or_else(|| GitHubError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> GitHubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| GitHubError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! github_error {
    ($error_type:ident, $msg:expr) => {
        GitHubError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        GitHubError::$error_type(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_on_result_wraps_source_error() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let wrapped = result.context("Failed to read config file");
        match wrapped {
            Err(GitHubError::Unknown(msg)) => {
                assert!(msg.contains("Failed to read config file"));
                assert!(msg.contains("file not found"));
            }
            _ => panic!("Expected GitHubError::Unknown"),
        }
    }

    #[test]
    fn context_on_option_uses_message_verbatim() {
        let option: Option<String> = None;
        let result = option.context("Access token not found");

        match result {
            Err(GitHubError::Unknown(msg)) => assert_eq!(msg, "Access token not found"),
            _ => panic!("Expected GitHubError::Unknown"),
        }
    }

    #[test]
    fn github_error_macro_formats_arguments() {
        let error = github_error!(ApiError, "HTTP error: {}", 502);
        match error {
            GitHubError::ApiError(msg) => assert_eq!(msg, "HTTP error: 502"),
            _ => panic!("Expected GitHubError::ApiError"),
        }
    }
}
