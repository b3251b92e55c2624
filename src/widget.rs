// SPDX-License-Identifier: MPL-2.0
//! Banner view construction and the slide transform.
//!
//! The banner is a pill-shaped container holding an optional icon beside a
//! title/subtitle column. [`Slide`] translates the rendered banner by the
//! lifecycle's current offset; pointer input only reaches the banner at the
//! identity transform, so a banner in flight is never tappable.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::widget::image::Image;
use iced::widget::{container, mouse_area, Column, Container, Row, Space};
use iced::{
    alignment, Color, Element, Event, Length, Rectangle, Size, Theme, Vector,
};

use crate::design_tokens::{radius, shadow, sizing, spacing};
use crate::style::{Position, ToastStyle};
use crate::theming::Appearance;
use crate::toast::{Message, ToastConfig};

/// Builds the banner card: icon, text column, pill background, drop shadow.
pub(crate) fn banner<'a>(
    config: &'a ToastConfig,
    style: &ToastStyle,
    appearance: Appearance,
) -> Element<'a, Message> {
    let text_alignment = style.text_alignment.horizontal();

    let title = iced::widget::text(&config.title)
        .size(config.title_size)
        .color(style.title_color)
        .width(Length::Fill)
        .align_x(text_alignment);

    let mut text_column = Column::new().width(Length::Fill).push(title);
    if let Some(subtitle) = config.subtitle.as_deref() {
        text_column = text_column.push(
            iced::widget::text(subtitle)
                .size(config.subtitle_size)
                .color(style.subtitle_color)
                .width(Length::Fill)
                .align_x(text_alignment),
        );
    }

    // Invisible strut enforcing the minimum banner height; spacing between
    // the icon and text is explicit so the strut adds no gap of its own.
    let strut_height = sizing::BANNER_MIN_HEIGHT - 2.0 * spacing::XS;
    let mut content = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Space::new().height(strut_height));

    if let Some(icon) = &config.icon {
        content = content
            .push(
                Image::new(icon.clone())
                    .width(sizing::ICON)
                    .height(sizing::ICON),
            )
            .push(Space::new().width(config.icon_spacing));
    }
    content = content.push(text_column);

    let background = style.background(appearance);
    let card = Container::new(content)
        .max_width(sizing::BANNER_MAX_WIDTH)
        .padding([spacing::XS, spacing::LG])
        .style(move |_theme: &Theme| banner_style(background));

    mouse_area(card)
        .on_press(Message::Pressed)
        .interaction(mouse::Interaction::Pointer)
        .into()
}

/// Pins the banner to its screen edge inside a full-surface layer and
/// applies the slide offset. Used both for the in-app layer host and the
/// dedicated overlay window, which is itself sized to this strip.
pub(crate) fn positioned<'a>(
    banner: Element<'a, Message>,
    position: Position,
    offset: f32,
) -> Element<'a, Message> {
    let vertical = match position {
        Position::Top => alignment::Vertical::Top,
        Position::Bottom => alignment::Vertical::Bottom,
    };

    Container::new(Slide::new(banner, Vector::new(0.0, offset)))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(vertical)
        .padding(spacing::XS)
        .into()
}

/// Style for the banner card. The pill radius tracks the card's height
/// through the oversized token, and the shadow parameters are fixed.
fn banner_style(background: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::BANNER,
        ..Default::default()
    }
}

/// A wrapper widget that draws its content translated by a fixed offset.
///
/// Pointer events are only forwarded at the zero offset, keeping the hit
/// area aligned with what is actually on screen.
pub struct Slide<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset: Vector,
}

impl<'a, Message, Theme, Renderer> Slide<'a, Message, Theme, Renderer> {
    /// Creates a new `Slide` translating the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, offset: Vector) -> Self {
        Self {
            content: content.into(),
            offset,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Slide<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        renderer.with_translation(self.offset, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if self.offset != Vector::ZERO && is_pointer_event(event) {
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.offset != Vector::ZERO {
            return mouse::Interaction::default();
        }

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation + self.offset,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Slide<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slide: Slide<'a, Message, Theme, Renderer>) -> Self {
        Self::new(slide)
    }
}

/// Helper function to create a [`Slide`] wrapper.
pub fn slide<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    offset: Vector,
) -> Slide<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Slide::new(content, offset)
}

fn is_pointer_event(event: &Event) -> bool {
    matches!(event, Event::Mouse(_) | Event::Touch(_))
}
