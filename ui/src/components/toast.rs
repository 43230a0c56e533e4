//! App-level success notifications
//!
//! The toast lives above the router so a message raised just before
//! navigation is still visible on the destination page. It clears itself
//! after a few seconds.

use leptos::prelude::*;

const DISMISS_MS: u32 = 3000;

/// Handle for raising notifications, provided as context by the app shell
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<String>>,
    // Bumped per message so a forgotten timer from an earlier toast
    // cannot dismiss a newer one.
    generation: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Shows a success message and schedules its dismissal
    pub fn success(&self, message: impl Into<String>) {
        let shown = self.begin(message.into());
        let toaster = *self;
        let handle = gloo_timers::callback::Timeout::new(DISMISS_MS, move || {
            toaster.expire(shown);
        });
        handle.forget();
    }

    fn begin(&self, message: String) -> u64 {
        self.current.set(Some(message));
        let shown = self.generation.get_untracked() + 1;
        self.generation.set(shown);
        shown
    }

    fn expire(&self, shown: u64) {
        if self.generation.get_untracked() == shown {
            self.current.set(None);
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the active toast, if any
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    view! {
        {move || toaster.current.get().map(|message| view! {
            <div class="fixed bottom-4 right-4 px-4 py-3 bg-green-100 border border-green-400 text-green-700 rounded shadow-lg">
                {message}
            </div>
        })}
    }
}
