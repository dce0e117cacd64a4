use anyhow::{anyhow, Result};
use async_trait::async_trait;

use shared::domain::{Salon, UserAccount};

pub mod login;
pub mod login_form;
pub mod register;

pub use login::LoginPage;
pub use login_form::LoginForm;
pub use register::SalonRegisterPage;

/// Storage key under which the external persistence module keeps the
/// registered user list.
pub const USERS_STORAGE_KEY: &str = "beauty-salon-users";
/// Storage key under which the external persistence module keeps the
/// currently authenticated user.
pub const AUTH_USER_STORAGE_KEY: &str = "auth_user";

/// Navigation targets reachable from the flows in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Login,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Login => "/login",
        }
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Returns whether the credentials match a stored user. Ordinary
    /// mismatches are `Ok(false)`; `Err` is reserved for unexpected
    /// backend failures.
    async fn login(&self, email: &str, password: &str) -> Result<bool>;
}

/// Synchronous key-value persistence collaborator backing all flows. The
/// implementation lives outside this crate; pages receive it as an
/// injected capability so tests can substitute an in-memory fake.
pub trait DataStore: Send + Sync {
    /// Persists a salon record, overwriting any record with the same id.
    fn save_salon(&self, salon: &Salon) -> Result<()>;
    fn load_salon(&self) -> Result<Option<Salon>>;
    fn list_users(&self) -> Result<Vec<UserAccount>>;
    /// Irreversibly clears all persisted application state.
    fn reset_all_data(&self) -> Result<()>;
    /// Raw serialized value stored under `key`, for diagnostic dumps.
    fn raw_entry(&self, key: &str) -> Result<Option<String>>;
}

/// Blocking dialog capability standing in for the host UI's native
/// confirm/alert dialogs.
pub trait UserPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
    fn notify(&self, message: &str);
}

pub trait Navigator: Send + Sync {
    fn push(&self, route: Route);
    /// Full reload of the current view, discarding in-memory state.
    fn reload(&self);
}

pub struct MissingAuthProvider;

#[async_trait]
impl AuthProvider for MissingAuthProvider {
    async fn login(&self, _email: &str, _password: &str) -> Result<bool> {
        Err(anyhow!("auth backend is unavailable"))
    }
}

pub struct MissingDataStore;

impl DataStore for MissingDataStore {
    fn save_salon(&self, _salon: &Salon) -> Result<()> {
        Err(anyhow!("data store is unavailable"))
    }

    fn load_salon(&self) -> Result<Option<Salon>> {
        Err(anyhow!("data store is unavailable"))
    }

    fn list_users(&self) -> Result<Vec<UserAccount>> {
        Err(anyhow!("data store is unavailable"))
    }

    fn reset_all_data(&self) -> Result<()> {
        Err(anyhow!("data store is unavailable"))
    }

    fn raw_entry(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow!("data store is unavailable"))
    }
}
