// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants for the banner, grouped by token type so every magic
number in the widget code has a named home.

## Groups

- **Palette**: surface and text colors
- **Opacity**: alpha levels shared across tokens
- **Spacing**: steps on an 8px baseline grid
- **Sizing**: fixed component dimensions
- **Typography**: font sizes
- **Radius**: corner rounding
- **Shadow**: the banner drop shadow

## Examples

```
use iced_toast::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Tint used for the banner drop shadow
let shadow_tint = Color {
    a: opacity::SHADOW,
    ..palette::BLACK
};

// Safe margin between the banner and the screen edge
let margin = spacing::XS; // 8px
```

## Modification

The compile-time block at the bottom pins the relationships between
tokens. Adjust it together with any token change so the scale stays
coherent.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Text colors, one pair per surface
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.55);

    // Banner surfaces
    pub const BANNER_LIGHT: Color = Color::from_rgb(0.99, 0.99, 0.99);
    pub const BANNER_DARK: Color = Color::from_rgb(0.13, 0.13, 0.13);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Banner drop shadow tint
    pub const SHADOW: f32 = 0.08;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // grid base
    pub const SM: f32 = 12.0; // 1.5x
    pub const MD: f32 = 16.0; // 2x
    pub const LG: f32 = 24.0; // 3x
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Banner icon, rendered square
    pub const ICON: f32 = 28.0;

    /// Minimum banner height, regardless of content
    pub const BANNER_MIN_HEIGHT: f32 = 50.0;

    /// Widest the banner may grow on large windows
    pub const BANNER_MAX_WIDTH: f32 = 480.0;

    /// How far off-screen the banner starts and ends its slide
    pub const SLIDE_DISTANCE: f32 = 100.0;

    // Dedicated overlay window strip, sized to the banner at rest plus its
    // safe margins
    pub const OVERLAY_STRIP_WIDTH: f32 = BANNER_MAX_WIDTH;
    pub const OVERLAY_STRIP_HEIGHT: f32 = BANNER_MIN_HEIGHT + 2.0 * super::spacing::XS;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Banner title
    pub const TITLE: f32 = 13.0;

    /// Banner subtitle, supporting text
    pub const SUBTITLE: f32 = 11.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    /// Oversized so the rounding clamps to a pill at any banner height.
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::opacity;
    use iced::{Color, Shadow, Vector};

    /// Soft downward shadow lifting the banner off the content behind it.
    pub const BANNER: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: opacity::SHADOW,
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    // Sizing
    assert!(sizing::BANNER_MIN_HEIGHT > sizing::ICON);
    assert!(sizing::BANNER_MAX_WIDTH > sizing::BANNER_MIN_HEIGHT);
    // The slide must fully clear the banner and its safe margin
    assert!(sizing::SLIDE_DISTANCE >= sizing::BANNER_MIN_HEIGHT + spacing::XS);
    assert!(sizing::OVERLAY_STRIP_HEIGHT >= sizing::BANNER_MIN_HEIGHT + spacing::XS);

    // Typography
    assert!(typography::TITLE > typography::SUBTITLE);

    // Colors: the dark-surface subtitle gray must be the lighter one
    assert!(palette::BANNER_DARK.r < palette::BANNER_LIGHT.r);
    assert!(palette::GRAY_400.r > palette::GRAY_700.r);
};
