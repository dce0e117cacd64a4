use tracing::info;

/// Caller-supplied submit handler receiving `(email, password)`.
pub type SubmitHandler = Box<dyn Fn(&str, &str) + Send + Sync>;

/// Presentation-only credential form. Collects two fields and hands them
/// to the embedding flow on submit; it knows nothing about the
/// authentication outcome and exposes no error state.
#[derive(Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    on_login: Option<SubmitHandler>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handler(handler: impl Fn(&str, &str) + Send + Sync + 'static) -> Self {
        Self {
            on_login: Some(Box::new(handler)),
            ..Self::default()
        }
    }

    /// Invokes the handler with the entered values, or logs them when no
    /// handler was supplied.
    pub fn submit(&self) {
        if let Some(on_login) = &self.on_login {
            on_login(&self.email, &self.password);
        } else {
            info!(email = %self.email, password = %self.password, "login form submitted without a handler");
        }
    }
}
