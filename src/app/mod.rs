// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single slider picker.
//!
//! The `App` loads the picker configuration, asks once whether a screen
//! reader is active, keeps the picker's viewport in sync with the window and
//! shows the selected value under the widget.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::accessibility::{self, EnvProbe, ScreenReaderProbe, StaticProbe};
use crate::config::{self, PickerConfig};
use crate::ui::design_tokens::typography;
use crate::ui::picker::{self, Picker};
use crate::ui::viewport::Viewport;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

const WINDOW_TITLE: &str = "Slider Picker";
const MIN_WINDOW_WIDTH: f32 = 320.0;
const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Root iced application state.
pub struct App {
    picker: Picker,
    /// Number of drags started since launch.
    slides: u32,
    /// Why the configuration file was not used, if it was not.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("value", &self.picker.current_value())
            .field("slides", &self.slides)
            .field("config_warning", &self.config_warning)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings, sized to the default picker viewport.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(Viewport::DEFAULT_WIDTH, Viewport::DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the configuration named by the flags, falling back to defaults.
fn load_config(flags: &Flags) -> (PickerConfig, Option<String>) {
    let (mut config, warning) = match &flags.config_path {
        Some(path) => match config::load_from_path(path) {
            Ok(config) => (config, None),
            Err(err) => {
                log::warn!("could not load {}: {err}", path.display());
                (
                    PickerConfig::default(),
                    Some(format!("Could not load {}: {err}", path.display())),
                )
            }
        },
        None => config::load(),
    };

    if let Some(max_value) = flags.max_value {
        config = config.max_value(max_value);
    }
    (config, warning)
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = load_config(&flags);
        let picker = Picker::new(config, Viewport::default());
        log::info!(
            "picker ready: scale 0..={}, starting on {}",
            picker.style().max_value.get(),
            picker.current_value()
        );

        let probe: Arc<dyn ScreenReaderProbe> = if flags.screen_reader {
            Arc::new(StaticProbe(true))
        } else {
            Arc::new(EnvProbe)
        };

        let app = Self {
            picker,
            slides: 0,
            config_warning,
        };
        (
            app,
            accessibility::query(probe, Message::ScreenReaderDetected),
        )
    }

    fn title(&self) -> String {
        format!("{WINDOW_TITLE} - {}", self.picker.current_value())
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_resize_subscription(),
            subscription::create_tick_subscription(self.picker.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let picker_message = match message {
            Message::Picker(message) => message,
            Message::WindowResized(size) => picker::Message::ViewportResized(size),
            Message::Tick(now) => picker::Message::Tick(now),
            Message::ScreenReaderDetected(enabled) => picker::Message::ScreenReaderChanged(enabled),
        };

        match self.picker.update(picker_message) {
            picker::Event::ValueChanged(value) => {
                log::info!("value changed to {value}");
            }
            picker::Event::SlideBegan => {
                self.slides += 1;
                log::debug!("slide {} began", self.slides);
            }
            picker::Event::None => {}
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let readout = Text::new(format!("Value: {}", self.picker.current_value()))
            .size(typography::READOUT);

        let mut content = Column::new()
            .align_x(Horizontal::Center)
            .spacing(typography::READOUT)
            .push(self.picker.view().map(Message::Picker))
            .push(readout);

        if let Some(warning) = &self.config_warning {
            content = content.push(Text::new(warning.clone()).size(typography::CAPTION));
        }

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }
}
