// web_app/theme.rs - Colour palette shared by the views
//
// App provides a Theme through Leptos context; components read it with
// use_theme(). Nothing reaches for a global theme object.

/// Book Wise colour palette (hex strings)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub green100: &'static str,
    pub green200: &'static str,
    pub green300: &'static str,
    pub purple100: &'static str,
    pub purple200: &'static str,
    pub gray100: &'static str,
    pub gray200: &'static str,
    pub gray300: &'static str,
    pub gray400: &'static str,
    pub gray500: &'static str,
    pub gray600: &'static str,
    pub gray700: &'static str,
    pub gray800: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub colors: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: Palette {
                green100: "#50B2C0",
                green200: "#255D6A",
                green300: "#0A313C",
                purple100: "#8381D9",
                purple200: "#2A2879",
                gray100: "#F8F9FC",
                gray200: "#E6E8F2",
                gray300: "#D1D6E4",
                gray400: "#8D95AF",
                gray500: "#303F73",
                gray600: "#252D4A",
                gray700: "#181C2A",
                gray800: "#0E1116",
            },
        }
    }
}

/// Theme provided by the nearest ancestor, or the default palette
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub fn use_theme() -> Theme {
    leptos::prelude::use_context::<Theme>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_hex() {
        let colors = Theme::default().colors;
        for color in [colors.green100, colors.gray100, colors.gray800, colors.purple100] {
            assert!(color.starts_with('#'));
            assert_eq!(color.len(), 7);
        }
    }

    #[test]
    fn test_header_icon_colour() {
        assert_eq!(Theme::default().colors.green100, "#50B2C0");
    }
}
