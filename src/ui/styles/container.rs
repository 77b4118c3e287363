// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the settings screen and form sections.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Entry card inside a list section. A dragged card is rendered faded.
pub fn card(dragged: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let alpha = if dragged {
            opacity::DRAGGED
        } else {
            opacity::OPAQUE
        };
        let background = palette.background.weak.color;
        let text = palette.background.weak.text;

        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..background
            })),
            text_color: Some(Color { a: alpha, ..text }),
            border: Border {
                color: palette.background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Calendar popup below a date field.
pub fn popup(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Read-only field showing the formatted date.
pub fn date_field(open: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let border_color = if open {
            palette::PRIMARY_500
        } else {
            palette.background.strong.color
        };

        container::Style {
            background: Some(Background::Color(palette.background.base.color)),
            text_color: Some(palette.background.base.text),
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Thin highlighted line drawn above the card the pointer is over.
pub fn drop_indicator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragged_card_is_faded() {
        let theme = Theme::Dark;
        let normal = card(false)(&theme);
        let dragged = card(true)(&theme);

        let alpha = |style: &container::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("expected a color background"),
        };
        assert_eq!(alpha(&normal), opacity::OPAQUE);
        assert_eq!(alpha(&dragged), opacity::DRAGGED);
    }

    #[test]
    fn open_date_field_uses_accent_border() {
        let style = date_field(true)(&Theme::Light);
        assert_eq!(style.border.color, palette::PRIMARY_500);
    }

    #[test]
    fn drop_indicator_is_brand_colored() {
        let style = drop_indicator(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }
}
