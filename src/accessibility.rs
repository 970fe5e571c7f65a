// SPDX-License-Identifier: MPL-2.0
//! Screen reader detection.
//!
//! The picker only needs a yes/no answer once at startup. Platforms expose
//! that differently, so the query goes through [`ScreenReaderProbe`] and is
//! run as a one-shot [`Task`].

use iced::Task;
use std::sync::Arc;

/// Environment variable consulted by [`EnvProbe`].
pub const ENV_SCREEN_READER: &str = "SLIDER_PICKER_SCREEN_READER";

/// Answers whether assistive technology is active.
pub trait ScreenReaderProbe: Send + Sync + 'static {
    fn is_screen_reader_enabled(&self) -> bool;
}

/// A probe with a fixed answer (CLI flag, tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticProbe(pub bool);

impl ScreenReaderProbe for StaticProbe {
    fn is_screen_reader_enabled(&self) -> bool {
        self.0
    }
}

/// Reads [`ENV_SCREEN_READER`]; `1`, `true`, `yes` and `on` mean enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvProbe;

impl ScreenReaderProbe for EnvProbe {
    fn is_screen_reader_enabled(&self) -> bool {
        std::env::var(ENV_SCREEN_READER)
            .map(|value| is_truthy(&value))
            .unwrap_or(false)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Runs the probe off the update loop and maps the answer to a message.
pub fn query<Message>(
    probe: Arc<dyn ScreenReaderProbe>,
    on_result: fn(bool) -> Message,
) -> Task<Message>
where
    Message: Send + 'static,
{
    Task::perform(
        async move { probe.is_screen_reader_enabled() },
        on_result,
    )
}
