use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};

use super::*;
use shared::domain::{MessageKind, UserAccount};

struct RecordingStore {
    saved: Mutex<Vec<Salon>>,
    fail_with: Option<String>,
}

impl RecordingStore {
    fn ok() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    fn failing(err: impl Into<String>) -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fail_with: Some(err.into()),
        }
    }
}

impl DataStore for RecordingStore {
    fn save_salon(&self, salon: &Salon) -> Result<()> {
        if let Some(err) = &self.fail_with {
            return Err(anyhow!(err.clone()));
        }
        self.saved
            .lock()
            .expect("save recorder lock")
            .push(salon.clone());
        Ok(())
    }

    fn load_salon(&self) -> Result<Option<Salon>> {
        Ok(self.saved.lock().expect("save recorder lock").last().cloned())
    }

    fn list_users(&self) -> Result<Vec<UserAccount>> {
        Ok(Vec::new())
    }

    fn reset_all_data(&self) -> Result<()> {
        Ok(())
    }

    fn raw_entry(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

#[derive(Default)]
struct RecordingNavigator {
    pushes: Mutex<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: Route) {
        self.pushes.lock().expect("push recorder lock").push(route);
    }

    fn reload(&self) {}
}

fn filled_form() -> SalonFormData {
    SalonFormData {
        name: "Salon A".to_string(),
        email: "a@b.com".to_string(),
        phone: "03-0000-0000".to_string(),
        address: "Tokyo".to_string(),
        ..SalonFormData::default()
    }
}

fn page_with(store: Arc<RecordingStore>) -> (SalonRegisterPage, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::default());
    let page = SalonRegisterPage::new(store, navigator.clone());
    (page, navigator)
}

#[tokio::test]
async fn missing_name_rejects_before_any_store_write() {
    let store = Arc::new(RecordingStore::ok());
    let (mut page, navigator) = page_with(store.clone());
    page.form = SalonFormData {
        name: String::new(),
        ..filled_form()
    };

    page.submit();

    let message = page.message.clone().expect("validation message");
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(message.text, "サロン名を入力してください");
    assert!(store.saved.lock().expect("save recorder lock").is_empty());
    assert!(!page.is_loading);
    assert!(navigator
        .pushes
        .lock()
        .expect("push recorder lock")
        .is_empty());
}

#[tokio::test]
async fn the_first_missing_field_wins() {
    let store = Arc::new(RecordingStore::ok());
    let (mut page, _navigator) = page_with(store.clone());
    page.form = SalonFormData::default();

    page.submit();
    let first = page.message.clone().expect("validation message");
    assert_eq!(first.text, "サロン名を入力してください");

    page.form.name = "Salon A".to_string();
    page.submit();
    let second = page.message.clone().expect("validation message");
    assert_eq!(second.text, "メールアドレスを入力してください");

    assert!(store.saved.lock().expect("save recorder lock").is_empty());
}

#[tokio::test]
async fn whitespace_only_required_fields_count_as_missing() {
    let store = Arc::new(RecordingStore::ok());
    let (mut page, _navigator) = page_with(store.clone());
    page.form = SalonFormData {
        phone: "   ".to_string(),
        ..filled_form()
    };

    page.submit();

    let message = page.message.clone().expect("validation message");
    assert_eq!(message.text, "電話番号を入力してください");
    assert!(store.saved.lock().expect("save recorder lock").is_empty());
}

#[tokio::test]
async fn successful_submission_saves_a_trimmed_record_and_resets_the_form() {
    let store = Arc::new(RecordingStore::ok());
    let (mut page, _navigator) = page_with(store.clone());
    page.form = SalonFormData {
        name: "  Salon A ".to_string(),
        email: " a@b.com ".to_string(),
        phone: "03-0000-0000".to_string(),
        address: " Tokyo ".to_string(),
        open_hours: "10:00".to_string(),
        close_hours: "20:00".to_string(),
    };

    page.submit();

    let saved = store.saved.lock().expect("save recorder lock").clone();
    assert_eq!(saved.len(), 1);
    let salon = &saved[0];
    assert!(salon.id.0.starts_with("salon-"));
    assert_eq!(salon.name, "Salon A");
    assert_eq!(salon.email, "a@b.com");
    assert_eq!(salon.phone, "03-0000-0000");
    assert_eq!(salon.address, "Tokyo");
    assert_eq!(salon.open_hours, "10:00");
    assert_eq!(salon.close_hours, "20:00");

    assert_eq!(
        page.message,
        Some(FlashMessage::success(SUBMIT_SUCCESS_MESSAGE))
    );
    assert_eq!(page.form, SalonFormData::default());
    assert!(!page.is_loading);
}

#[tokio::test(start_paused = true)]
async fn the_login_redirect_fires_only_after_the_fixed_delay() {
    let store = Arc::new(RecordingStore::ok());
    let (mut page, navigator) = page_with(store);
    page.form = filled_form();

    page.submit();
    assert!(navigator
        .pushes
        .lock()
        .expect("push recorder lock")
        .is_empty());

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(navigator
        .pushes
        .lock()
        .expect("push recorder lock")
        .is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(
        navigator.pushes.lock().expect("push recorder lock").clone(),
        vec![Route::Login]
    );
}

#[tokio::test(start_paused = true)]
async fn dropping_the_page_cancels_the_pending_redirect() {
    let store = Arc::new(RecordingStore::ok());
    let (mut page, navigator) = page_with(store);
    page.form = filled_form();

    page.submit();
    drop(page);

    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert!(navigator
        .pushes
        .lock()
        .expect("push recorder lock")
        .is_empty());
}

#[tokio::test(start_paused = true)]
async fn a_second_submission_replaces_the_pending_redirect() {
    let store = Arc::new(RecordingStore::ok());
    let (mut page, navigator) = page_with(store);
    page.form = filled_form();
    page.submit();

    tokio::time::sleep(Duration::from_millis(1000)).await;
    page.form = filled_form();
    page.submit();

    // Past the first deadline, before the second.
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(navigator
        .pushes
        .lock()
        .expect("push recorder lock")
        .is_empty());

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(
        navigator.pushes.lock().expect("push recorder lock").clone(),
        vec![Route::Login]
    );
}

#[tokio::test(start_paused = true)]
async fn store_failure_surfaces_a_generic_error_and_keeps_the_form() {
    let store = Arc::new(RecordingStore::failing("storage quota exceeded"));
    let (mut page, navigator) = page_with(store);
    page.form = filled_form();

    page.submit();

    assert_eq!(
        page.message,
        Some(FlashMessage::error(SUBMIT_FAILURE_MESSAGE))
    );
    assert_eq!(page.form, filled_form());
    assert!(!page.is_loading);

    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert!(navigator
        .pushes
        .lock()
        .expect("push recorder lock")
        .is_empty());
}
