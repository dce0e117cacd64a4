use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use shared::domain::{FlashMessage, Salon, SalonId};
use shared::error::{MissingFieldError, RequiredField};

use crate::{DataStore, Navigator, Route};

/// Delay between a successful registration and the redirect to the login
/// page, leaving the success message visible.
const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

pub const OPEN_HOURS_DEFAULT: &str = "09:00";
pub const CLOSE_HOURS_DEFAULT: &str = "19:00";

const SUBMIT_SUCCESS_MESSAGE: &str = "🎉 サロン登録が完了しました！ログインページに移動します。";
const SUBMIT_FAILURE_MESSAGE: &str = "サロン登録中にエラーが発生しました。もう一度お試しください。";

/// Editable registration form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalonFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub open_hours: String,
    pub close_hours: String,
}

impl Default for SalonFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            open_hours: OPEN_HOURS_DEFAULT.to_string(),
            close_hours: CLOSE_HOURS_DEFAULT.to_string(),
        }
    }
}

impl SalonFormData {
    fn value(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::Name => &self.name,
            RequiredField::Email => &self.email,
            RequiredField::Phone => &self.phone,
            RequiredField::Address => &self.address,
        }
    }

    /// First required field that is empty after trimming, in validation
    /// order. Later fields are not inspected once one fails.
    fn first_missing_field(&self) -> Option<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .find(|field| self.value(*field).trim().is_empty())
    }

    fn build_salon(&self, id: SalonId) -> Salon {
        Salon {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            open_hours: self.open_hours.clone(),
            close_hours: self.close_hours.clone(),
        }
    }
}

enum SubmitError {
    Validation(MissingFieldError),
    Store(anyhow::Error),
}

/// Salon registration page state and handlers.
pub struct SalonRegisterPage {
    pub form: SalonFormData,
    pub is_loading: bool,
    pub message: Option<FlashMessage>,
    store: Arc<dyn DataStore>,
    navigator: Arc<dyn Navigator>,
    redirect_task: Option<JoinHandle<()>>,
}

impl SalonRegisterPage {
    pub fn new(store: Arc<dyn DataStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            form: SalonFormData::default(),
            is_loading: false,
            message: None,
            store,
            navigator,
            redirect_task: None,
        }
    }

    /// Validates the form and persists a new salon record. On success the
    /// form resets to its defaults and a redirect to the login page is
    /// scheduled after a fixed delay. Must be called from within a Tokio
    /// runtime, which the redirect task is spawned on.
    pub fn submit(&mut self) {
        self.is_loading = true;
        self.message = None;

        match self.try_submit() {
            Ok(salon) => {
                info!(salon_id = %salon.id.0, name = %salon.name, "register: salon profile saved");
                self.message = Some(FlashMessage::success(SUBMIT_SUCCESS_MESSAGE));
                self.form = SalonFormData::default();
                self.schedule_login_redirect();
            }
            Err(SubmitError::Validation(err)) => {
                self.message = Some(FlashMessage::error(err.field.prompt()));
            }
            Err(SubmitError::Store(err)) => {
                error!("register: salon registration failed: {err:#}");
                self.message = Some(FlashMessage::error(SUBMIT_FAILURE_MESSAGE));
            }
        }

        // Drops on every path, validation failures and store errors
        // included.
        self.is_loading = false;
    }

    fn try_submit(&self) -> Result<Salon, SubmitError> {
        if let Some(field) = self.form.first_missing_field() {
            return Err(SubmitError::Validation(MissingFieldError { field }));
        }

        let salon = self.form.build_salon(SalonId::generate_at(Utc::now()));
        self.store
            .save_salon(&salon)
            .map_err(SubmitError::Store)?;
        Ok(salon)
    }

    /// Schedules the post-success navigation. The task holds only the
    /// navigator, and a newer schedule replaces (and aborts) an older one.
    fn schedule_login_redirect(&mut self) {
        let navigator = Arc::clone(&self.navigator);
        let task = tokio::spawn(async move {
            tokio::time::sleep(REDIRECT_DELAY).await;
            navigator.push(Route::Login);
        });

        if let Some(previous) = self.redirect_task.replace(task) {
            previous.abort();
        }
    }
}

impl Drop for SalonRegisterPage {
    fn drop(&mut self) {
        // A pending redirect must not outlive the page that scheduled it.
        if let Some(task) = self.redirect_task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/register_tests.rs"]
mod tests;
