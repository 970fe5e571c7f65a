// SPDX-License-Identifier: MPL-2.0
//! Widget tree of the picker.

use super::canvas::PickerCanvas;
use super::scene::{LabelAlign, Scene};
use super::style::{NumberScaleStyle, PickerStyle, TextStyle};
use super::{Message, Picker};
use crate::ui::design_tokens::typography;
use iced::alignment::Horizontal;
use iced::border::Radius;
use iced::widget::{canvas::Canvas, container, text, text_input, Column, Container, Row, Text};
use iced::{Background, Border, Element, Length, Padding, Theme};

pub(super) fn view(picker: &Picker) -> Element<'_, Message> {
    if picker.shows_numeric_input() {
        return numeric_input(picker);
    }

    let style = picker.style();
    let scene = picker.scene();
    let size = scene.size;

    let mut content = Column::new()
        .align_x(Horizontal::Center)
        .push(labels(&scene, style));

    content = content.push(
        Canvas::new(PickerCanvas::new(scene))
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height)),
    );

    if let Some(numbers) = &style.numbers {
        content = content.push(number_scale(numbers, style));
    }

    Container::new(content)
        .padding(Padding {
            bottom: style.wrapper_margin_bottom,
            ..Padding::ZERO
        })
        .into()
}

fn styled_text<'a>(content: String, style: TextStyle) -> Text<'a> {
    let color = style.color;
    Text::new(content)
        .size(style.size)
        .font(style.font)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
}

fn labels<'a>(scene: &Scene, style: &PickerStyle) -> Element<'a, Message> {
    let mut slots: [Option<Element<'a, Message>>; 3] = [None, None, None];

    for label in &scene.labels {
        let (index, align) = match label.align {
            LabelAlign::Left => (0, Horizontal::Left),
            LabelAlign::Center => (1, Horizontal::Center),
            LabelAlign::Right => (2, Horizontal::Right),
        };
        slots[index] = Some(
            Container::new(styled_text(label.text.clone(), scene.label_text))
                .width(Length::FillPortion(1))
                .align_x(align)
                .into(),
        );
    }

    let row = slots.into_iter().fold(Row::new(), |row, slot| {
        row.push(slot.unwrap_or_else(|| {
            iced::widget::Space::new()
                .width(Length::FillPortion(1))
                .into()
        }))
    });

    Container::new(row)
        .width(Length::Fixed(style.labels.width))
        .padding(Padding {
            bottom: style.labels.padding_bottom,
            ..Padding::ZERO
        })
        .into()
}

fn number_scale<'a>(numbers: &NumberScaleStyle, style: &PickerStyle) -> Element<'a, Message> {
    let row = (0..=style.max_value.get()).fold(Row::new(), |row, value| {
        row.push(
            Container::new(styled_text(value.to_string(), numbers.text))
                .width(Length::Fixed(numbers.cell_width(value)))
                .align_x(Horizontal::Center),
        )
    });

    Container::new(row)
        .width(Length::Fixed(style.track.width))
        .align_x(Horizontal::Center)
        .padding(Padding {
            top: numbers.margin_top,
            bottom: numbers.margin_bottom,
            ..Padding::ZERO
        })
        .into()
}

fn numeric_input(picker: &Picker) -> Element<'_, Message> {
    let style = &picker.style().numeric_input;
    let text_style = style.text;
    let placeholder = picker.style().default_value.to_string();

    let input = text_input(&placeholder, picker.numeric_input_value())
        .on_input(Message::NumericInputChanged)
        .size(text_style.size)
        .font(text_style.font)
        .style(move |theme: &Theme, status| {
            let mut input_style = text_input::default(theme, status);
            input_style.background = Background::Color(iced::Color::TRANSPARENT);
            input_style.border = Border::default();
            input_style.value = text_style.color;
            input_style
        });

    let background = style.background;
    let underline = style.underline_color;
    let underline_width = style.underline_width;
    let radius = style.radius;

    let field = Container::new(input)
        .padding(style.padding)
        .width(Length::Fixed(style.width))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: Radius {
                    top_left: radius,
                    top_right: radius,
                    bottom_right: 0.0,
                    bottom_left: 0.0,
                },
                ..Default::default()
            },
            ..Default::default()
        });

    let rule = Container::new(Column::new())
        .width(Length::Fixed(style.width))
        .height(Length::Fixed(underline_width))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(underline)),
            ..Default::default()
        });

    let mut column = Column::new().align_x(Horizontal::Center);
    if !style.label.is_empty() {
        column = column.push(styled_text(
            style.label.clone(),
            TextStyle {
                size: typography::READOUT,
                ..text_style
            },
        ));
    }
    column = column.push(field).push(rule);
    if !style.hint.is_empty() {
        column = column.push(styled_text(
            style.hint.clone(),
            TextStyle {
                size: typography::CAPTION,
                ..text_style
            },
        ));
    }

    column.into()
}
