//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch the collection - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch the collection - write
    set_reload_trigger: WriteSignal<u32>,
    /// Whether the remote config modal is open - read
    pub config_open: ReadSignal<bool>,
    /// Whether the remote config modal is open - write
    set_config_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        config_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config_open: config_open.0,
            set_config_open: config_open.1,
        }
    }

    /// Trigger a full refetch
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn open_config(&self) {
        self.set_config_open.set(true);
    }

    pub fn close_config(&self) {
        self.set_config_open.set(false);
    }
}
