use dioxus::prelude::*;

use crate::config::{DEFAULT_TOAST_DURATION_MS, DEFAULT_TOAST_EXIT_MS};
use crate::utils::delay_ms;

/// Extra wait before closing when no `animationend` arrives.
const EXIT_GRACE_MS: u64 = 50;

/// When a toast starts fading and when it is gone, relative to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimeline {
    pub duration_ms: u64,
    pub exit_ms: u64,
}

impl Default for ToastTimeline {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            exit_ms: DEFAULT_TOAST_EXIT_MS,
        }
    }
}

impl ToastTimeline {
    pub fn leave_at(&self) -> u64 {
        self.duration_ms.saturating_sub(self.exit_ms)
    }

    pub fn close_at(&self) -> u64 {
        self.leave_at() + self.exit_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPhase {
    #[default]
    Visible,
    Leaving,
    Closed,
}

impl ToastPhase {
    pub fn leave(&mut self) {
        if *self == Self::Visible {
            *self = Self::Leaving;
        }
    }

    /// Moves a leaving toast to closed. `true` only on that one transition.
    pub fn finish(&mut self) -> bool {
        if *self == Self::Leaving {
            *self = Self::Closed;
            true
        } else {
            false
        }
    }
}

/// Self-dismissing notice. `on_close` fires once the fade-out animation has
/// finished, never before.
#[component]
pub fn Toast(
    message: String,
    #[props(default = DEFAULT_TOAST_DURATION_MS)] duration_ms: u64,
    #[props(default = DEFAULT_TOAST_EXIT_MS)] exit_ms: u64,
    on_close: EventHandler<()>,
) -> Element {
    let timeline = ToastTimeline {
        duration_ms,
        exit_ms,
    };
    let mut phase = use_signal(ToastPhase::default);

    let mut close = move || {
        if phase.write().finish() {
            on_close.call(());
        }
    };

    use_effect(move || {
        spawn(async move {
            delay_ms(timeline.leave_at()).await;
            phase.write().leave();

            // Animations can be disabled; close anyway once the exit has had its time.
            delay_ms(timeline.close_at() - timeline.leave_at() + EXIT_GRACE_MS).await;
            close();
        });
    });

    let class = if phase() == ToastPhase::Visible {
        "toast entering"
    } else {
        "toast leaving"
    };

    rsx! {
        div {
            class,
            style: "--toast-exit-ms: {exit_ms}ms;",
            role: "status",
            onanimationend: move |_| close(),
            "{message}"
        }
    }
}
