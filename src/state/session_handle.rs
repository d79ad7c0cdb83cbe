//! Reactive bridge between `SessionProvider` and Leptos components.
//!
//! DESIGN
//! ======
//! The provider is `Rc`-shared and not `Send`, so it lives in a
//! local-storage `StoredValue`. A `RwSignal<Session>` mirrors its state through
//! a subscription, giving components something to track. The handle is `Copy`
//! and is passed to guards and pages as an explicit prop; nothing looks it up
//! from context, so a guard cannot exist without a session.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::error::AuthError;
use crate::net::auth_provider::SimulatedAuthProvider;
use crate::routes::Redirect;
use crate::state::session::Session;
use crate::state::session_provider::SessionProvider;
use crate::state::toast::{Notifier, ToastKind, ToastState};
use crate::util::storage::BrowserStore;

pub type AppSessionProvider = SessionProvider<BrowserStore, SimulatedAuthProvider>;

#[derive(Clone, Copy)]
pub struct SessionHandle {
    provider: StoredValue<Rc<AppSessionProvider>, LocalStorage>,
    state: RwSignal<Session>,
}

impl SessionHandle {
    /// Build and hydrate the application's session.
    ///
    /// Call once, from the root component.
    pub fn install(config: &AppConfig, toasts: ToastHandle) -> Self {
        let provider = SessionProvider::new(BrowserStore, SimulatedAuthProvider::new(config.auth_latency))
            .with_notifier(Rc::new(toasts));
        let state = RwSignal::new(provider.session());
        provider.subscribe(move |s| state.set(s.clone()));
        provider.hydrate();
        Self { provider: StoredValue::new_local(Rc::new(provider)), state }
    }

    /// Tracked read of the current session.
    pub fn get(&self) -> Session {
        self.state.get()
    }

    /// # Errors
    ///
    /// Forwards `SessionProvider::login` errors.
    pub async fn login(self, email: String, password: String) -> Result<Redirect, AuthError> {
        let provider = self.provider.get_value();
        provider.login(&email, &password).await
    }

    /// # Errors
    ///
    /// Forwards `SessionProvider::register` errors.
    pub async fn register(self, name: String, email: String, password: String) -> Result<Redirect, AuthError> {
        let provider = self.provider.get_value();
        provider.register(&name, &email, &password).await
    }

    pub fn logout(self) -> Redirect {
        self.provider.get_value().logout()
    }
}

/// Toast queue shared with the toast host component.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    state: RwSignal<ToastState>,
    ttl: std::time::Duration,
}

impl ToastHandle {
    pub fn new(config: &AppConfig) -> Self {
        Self { state: RwSignal::new(ToastState::default()), ttl: config.toast_ttl }
    }

    pub fn signal(&self) -> ReadSignal<ToastState> {
        self.state.read_only()
    }

    pub fn dismiss(&self, id: uuid::Uuid) {
        self.state.update(|s| s.dismiss(id));
    }
}

impl Notifier for ToastHandle {
    fn notify(&self, kind: ToastKind, message: &str) {
        let mut id = None;
        self.state.update(|s| id = Some(s.push(kind, message)));

        #[cfg(feature = "csr")]
        {
            if let Some(id) = id {
                let handle = *self;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(handle.ttl).await;
                    handle.dismiss(id);
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, self.ttl);
        }
    }
}
