//! Session provider: the single owner of authentication state.
//!
//! ARCHITECTURE
//! ============
//! One provider is built at the application root and shared by `Rc`. It owns
//! the in-memory `Session`, the durable `SessionStore`, and the pluggable
//! `AuthProvider`. Components never mutate the session directly; they call
//! `login`, `register` or `logout` and follow the returned `Redirect`.
//!
//! ORDERING
//! ========
//! Every mutation writes storage before the in-memory session changes, so a
//! reload right after any call observes the same state. A failed credential
//! call puts back the session it started from, which storage still holds.
//!
//! CANCELLATION
//! ============
//! `logout` bumps a generation counter. A credential call that resolves after
//! its generation has passed is dropped with `AuthError::Superseded`, so a
//! late success cannot resurrect a signed-out session.

#[cfg(test)]
#[path = "session_provider_test.rs"]
mod session_provider_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::AuthError;
use crate::net::auth_provider::{AuthProvider, Credentials};
use crate::routes::{self, Redirect};
use crate::state::session::{Session, User};
use crate::state::session_store::SessionStore;
use crate::state::toast::{Notifier, ToastKind};
use crate::util::storage::KeyValueStore;

type Listener = Box<dyn Fn(&Session)>;

pub struct SessionProvider<S, P> {
    store: SessionStore<S>,
    auth: P,
    session: RefCell<Session>,
    generation: Cell<u64>,
    pending: Cell<Option<u64>>,
    hydrated: Cell<bool>,
    listeners: RefCell<Vec<Listener>>,
    notifier: Option<Rc<dyn Notifier>>,
}

impl<S: KeyValueStore, P: AuthProvider> SessionProvider<S, P> {
    /// Build a provider in the pre-hydration loading state.
    pub fn new(storage: S, auth: P) -> Self {
        Self {
            store: SessionStore::new(storage),
            auth,
            session: RefCell::new(Session::starting()),
            generation: Cell::new(0),
            pending: Cell::new(None),
            hydrated: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
            notifier: None,
        }
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Rc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Register `listener` to run after every session change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Load the persisted session. Runs once; later calls do nothing.
    pub fn hydrate(&self) {
        if self.hydrated.replace(true) {
            log::debug!("session already hydrated");
            return;
        }
        let next = match self.store.load() {
            Some(user) => {
                log::debug!("restored session for {}", user.email);
                Session::authenticated(user)
            }
            None => Session::unauthenticated(),
        };
        self.replace(next);
    }

    /// Sign in with `email` and `password`.
    ///
    /// # Errors
    ///
    /// See `authenticate`.
    pub async fn login(&self, email: &str, password: &str) -> Result<Redirect, AuthError> {
        let credentials = Credentials::Login { email: email.to_owned(), password: password.to_owned() };
        self.authenticate(credentials, "Logged in successfully").await
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// See `authenticate`.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<Redirect, AuthError> {
        let credentials = Credentials::Register {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        self.authenticate(credentials, "Account created successfully").await
    }

    /// Sign out, clearing storage and the in-memory session.
    pub fn logout(&self) -> Redirect {
        self.generation.set(self.generation.get() + 1);
        self.pending.set(None);
        if let Err(e) = self.store.clear() {
            log::warn!("failed to clear stored session: {e}");
        }
        self.replace(Session::unauthenticated());
        log::info!("logged out");
        self.notify(ToastKind::Success, "Logged out successfully");
        Redirect::push(routes::HOME)
    }

    /// Run a credential check and apply its result.
    ///
    /// # Errors
    ///
    /// - `AuthError::Busy` while another call is in flight
    /// - `AuthError::Superseded` when `logout` ran before the check resolved
    /// - the provider's error, or `AuthError::Storage` when persisting fails
    async fn authenticate(&self, credentials: Credentials, success: &str) -> Result<Redirect, AuthError> {
        if self.pending.get().is_some() {
            return Err(AuthError::Busy);
        }
        let ticket = self.generation.get();
        let before = self.session();
        self.pending.set(Some(ticket));
        self.update(|s| s.set_loading(true));
        log::debug!("authenticating {credentials:?}");

        let result = self.auth.authenticate(&credentials).await;

        if self.pending.get() != Some(ticket) || self.generation.get() != ticket {
            log::debug!("dropping stale authentication for {}", credentials.email());
            return Err(AuthError::Superseded);
        }
        self.pending.set(None);

        let outcome = match result {
            Ok(user) => self.commit(user),
            Err(e) => {
                log::warn!("authentication failed: {e}");
                Err(e)
            }
        };
        if let Err(e) = outcome {
            self.restore(before);
            self.notify(ToastKind::Error, &format!("Sign-in failed: {e}"));
            return Err(e);
        }
        self.notify(ToastKind::Success, success);
        Ok(Redirect::replace(routes::DASHBOARD))
    }

    /// Persist `user`, then switch the session to it.
    ///
    /// # Errors
    ///
    /// `AuthError::Storage` when the write fails; the session is not touched.
    fn commit(&self, user: User) -> Result<(), AuthError> {
        if let Err(e) = self.store.persist(&user) {
            log::warn!("failed to persist session: {e}");
            return Err(e.into());
        }
        log::info!("signed in as {}", user.email);
        self.replace(Session::authenticated(user));
        Ok(())
    }

    /// Put back the session seen before a failed credential call.
    fn restore(&self, mut before: Session) {
        before.set_loading(false);
        self.replace(before);
    }

    fn update(&self, f: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.session.borrow_mut();
            f(&mut session);
            session.clone()
        };
        self.emit(&snapshot);
    }

    fn replace(&self, next: Session) {
        self.update(|s| *s = next);
    }

    fn emit(&self, session: &Session) {
        for listener in self.listeners.borrow().iter() {
            listener(session);
        }
    }

    fn notify(&self, kind: ToastKind, message: &str) {
        if let Some(notifier) = &self.notifier {
            notifier.notify(kind, message);
        }
    }
}
