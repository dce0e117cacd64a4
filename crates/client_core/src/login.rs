use std::sync::Arc;

use tracing::{error, info, warn};

use shared::domain::Role;

use crate::{
    AuthProvider, DataStore, Navigator, Route, UserPrompt, AUTH_USER_STORAGE_KEY,
    USERS_STORAGE_KEY,
};

const EMPTY_CREDENTIALS_MESSAGE: &str = "メールアドレスとパスワードを入力してください。";
const INVALID_CREDENTIALS_MESSAGE: &str = "メールアドレスまたはパスワードが正しくありません。";
const LOGIN_FAILURE_MESSAGE: &str = "ログインに失敗しました。もう一度お試しください。";
const RESET_CONFIRM_PROMPT: &str = "全てのデータをリセットしますか？この操作は元に戻せません。";
const RESET_DONE_NOTICE: &str = "データをリセットしました。ページを再読み込みしてください。";

/// Fixture account used to prefill the credential fields during manual
/// testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestAccount {
    pub label: &'static str,
    pub role: Role,
    pub email: &'static str,
    pub password: &'static str,
}

/// One seeded account per role, matching what the external store ships
/// with.
pub const TEST_ACCOUNTS: [TestAccount; 3] = [
    TestAccount {
        label: "管理者",
        role: Role::Admin,
        email: "admin@salon.com",
        password: "admin123",
    },
    TestAccount {
        label: "スタッフ",
        role: Role::Employee,
        email: "staff@salon.com",
        password: "staff123",
    },
    TestAccount {
        label: "顧客",
        role: Role::Customer,
        email: "customer@salon.com",
        password: "customer123",
    },
];

/// Login page state and handlers. Owns its form state exclusively; every
/// external effect goes through an injected collaborator.
pub struct LoginPage {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub is_loading: bool,
    pub show_password: bool,
    pub debug_mode: bool,
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn DataStore>,
    prompt: Arc<dyn UserPrompt>,
    navigator: Arc<dyn Navigator>,
}

impl LoginPage {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn DataStore>,
        prompt: Arc<dyn UserPrompt>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            error: None,
            is_loading: false,
            show_password: false,
            debug_mode: false,
            auth,
            store,
            prompt,
            navigator,
        }
    }

    /// Submits the entered credentials. On acceptance navigates to the
    /// dashboard; otherwise surfaces a localized error and stays put.
    pub async fn submit(&mut self) {
        self.error = None;
        self.is_loading = true;
        info!(email = %self.email, "login: form submitted");

        self.error = self.attempt_login().await;

        // Drops on every path: acceptance, rejection and backend failure.
        self.is_loading = false;
    }

    async fn attempt_login(&self) -> Option<String> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Some(EMPTY_CREDENTIALS_MESSAGE.to_string());
        }

        match self.auth.login(&self.email, &self.password).await {
            Ok(true) => {
                info!("login: credentials accepted, redirecting to dashboard");
                self.navigator.push(Route::Dashboard);
                None
            }
            Ok(false) => {
                info!(email = %self.email, "login: credentials rejected");
                if self.debug_mode {
                    self.log_registered_users();
                }
                Some(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            Err(err) => {
                error!("login: auth backend call failed: {err:#}");
                Some(LOGIN_FAILURE_MESSAGE.to_string())
            }
        }
    }

    /// Wipes all persisted application state after an interactive
    /// confirmation, then forces a full reload.
    pub fn reset_all_data(&self) {
        if !self.prompt.confirm(RESET_CONFIRM_PROMPT) {
            return;
        }

        if let Err(err) = self.store.reset_all_data() {
            error!("login: data reset failed: {err:#}");
            return;
        }

        info!("login: all persisted data cleared");
        self.prompt.notify(RESET_DONE_NOTICE);
        self.navigator.reload();
    }

    /// Pure state mutation: fills the credential fields with a fixture
    /// account.
    pub fn prefill_test_credentials(&mut self, email: &str, password: &str) {
        self.email = email.to_string();
        self.password = password.to_string();
    }

    /// Logs the registered user list plus the raw entries behind the two
    /// well-known storage keys, and notifies the user with a count summary.
    pub fn show_debug_info(&self) {
        let users = match self.store.list_users() {
            Ok(users) => users,
            Err(err) => {
                error!("login: debug info unavailable: {err:#}");
                return;
            }
        };

        let users_entry = self.raw_entry_or_log(USERS_STORAGE_KEY);
        let auth_user_entry = self.raw_entry_or_log(AUTH_USER_STORAGE_KEY);
        info!(
            ?users_entry,
            ?auth_user_entry,
            "login: raw storage entries"
        );
        info!(count = users.len(), ?users, "login: registered users");

        self.prompt.notify(&format!(
            "登録済みユーザー数: {}\n詳細はコンソールを確認してください。",
            users.len()
        ));
    }

    fn raw_entry_or_log(&self, key: &str) -> Option<String> {
        match self.store.raw_entry(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, "login: raw storage read failed: {err:#}");
                None
            }
        }
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_debug_mode(&mut self) {
        self.debug_mode = !self.debug_mode;
    }

    fn log_registered_users(&self) {
        match self.store.list_users() {
            Ok(users) => {
                info!(count = users.len(), ?users, "login: registered users after rejected sign-in");
            }
            Err(err) => {
                warn!("login: could not read user list for debug output: {err:#}");
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/login_tests.rs"]
mod tests;
