//! Session Context
//!
//! Surface of the third-party identity provider: the signed-in user and
//! the role looked up from the backend. The provider itself is external;
//! this context only carries what the views need.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Session handoff key written by the identity provider glue script
const SESSION_KEY: &str = "bookvault:session";

/// Signed-in user as exposed by the identity provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Identity token forwarded as a bearer header on role lookup
    pub token: String,
}

/// Pick up the session the identity provider stashed in sessionStorage,
/// if any. Malformed payloads are treated as signed out.
pub fn restore_session() -> Option<Session> {
    let storage = web_sys::window()?.session_storage().ok().flatten()?;
    let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Auth state provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: ReadSignal<Option<Session>>,
    set_user: WriteSignal<Option<Session>>,
    role: ReadSignal<Role>,
    set_role: WriteSignal<Role>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (user, set_user) = signal(None);
        let (role, set_role) = signal(Role::Buyer);
        Self {
            user,
            set_user,
            role,
            set_role,
        }
    }

    pub fn user(&self) -> ReadSignal<Option<Session>> {
        self.user
    }

    pub fn role(&self) -> ReadSignal<Role> {
        self.role
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user.get().is_some() && self.role.get() == role
    }

    pub fn sign_in(&self, session: Session) {
        self.set_user.set(Some(session));
    }

    pub fn sign_out(&self) {
        self.set_user.set(None);
        self.set_role.set(Role::Buyer);
    }

    /// Set the role resolved from `GET /user/role`
    pub fn set_role(&self, role: Role) {
        self.set_role.set(role);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
