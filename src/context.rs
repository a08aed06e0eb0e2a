//! Application Context
//!
//! Shared state provided via Leptos Context API: the API client, the
//! current screen, and the board's reload epoch.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::screen::Screen;

/// App-wide state provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Backend client carrying the session token store
    pub api: ApiClient,
    /// Which top-level screen is on display - read
    pub screen: ReadSignal<Screen>,
    /// Which top-level screen is on display - write
    set_screen: WriteSignal<Screen>,
    /// Bumped after every mutation; the board refetches on change - read
    pub reload_epoch: ReadSignal<u32>,
    /// Bumped after every mutation - write
    set_reload_epoch: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        api: ApiClient,
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        reload_epoch: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            api,
            screen: screen.0,
            set_screen: screen.1,
            reload_epoch: reload_epoch.0,
            set_reload_epoch: reload_epoch.1,
        }
    }

    /// Switch the top-level screen.
    pub fn go_to(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    /// Trigger a full board refetch and rebuild.
    pub fn reload(&self) {
        self.set_reload_epoch.update(|v| *v += 1);
    }

    /// Clear the session and land on a blank login form.
    pub fn logout(&self) {
        self.api.logout();
        self.set_screen.set(Screen::after_logout());
    }
}

/// Fetch the context; components below `App` can rely on it existing.
pub fn expect_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
