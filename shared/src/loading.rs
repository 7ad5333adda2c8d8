//! Loading indicator configuration.

/// Spinner diameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoaderSize {
    /// 16px
    Small,
    /// 32px
    #[default]
    Medium,
    /// 48px
    Large,
    /// 64px
    XLarge,
}

impl LoaderSize {
    /// Diameter in CSS pixels.
    pub fn dimension(self) -> u32 {
        match self {
            LoaderSize::Small => 16,
            LoaderSize::Medium => 32,
            LoaderSize::Large => 48,
            LoaderSize::XLarge => 64,
        }
    }

    /// Ring thickness in CSS pixels.
    pub fn stroke(self) -> u32 {
        match self {
            LoaderSize::Small => 2,
            LoaderSize::Medium | LoaderSize::Large => 3,
            LoaderSize::XLarge => 4,
        }
    }
}

/// Spinner accent color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoaderColor {
    /// Brand blue.
    #[default]
    Blue,
    /// Green.
    Green,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// White, for dark or colored backgrounds.
    White,
}

impl LoaderColor {
    /// Ring color class.
    pub fn ring_class(self) -> &'static str {
        match self {
            LoaderColor::Blue => "border-t-blue-600",
            LoaderColor::Green => "border-t-green-600",
            LoaderColor::Red => "border-t-red-600",
            LoaderColor::Yellow => "border-t-yellow-500",
            LoaderColor::White => "border-t-white",
        }
    }

    /// Caption text class.
    pub fn text_class(self) -> &'static str {
        match self {
            LoaderColor::Blue => "text-blue-700",
            LoaderColor::Green => "text-green-700",
            LoaderColor::Red => "text-red-700",
            LoaderColor::Yellow => "text-yellow-700",
            LoaderColor::White => "text-white",
        }
    }
}

/// Full configuration surface of a loading indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Diameter.
    pub size: LoaderSize,
    /// Accent.
    pub color: LoaderColor,
    /// Cover the viewport instead of rendering inline.
    pub full_screen: bool,
    /// Caption text.
    pub message: Option<String>,
    /// Caption visibility.
    pub show_message: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            size: LoaderSize::Medium,
            color: LoaderColor::Blue,
            full_screen: false,
            message: None,
            show_message: true,
        }
    }
}

impl LoaderConfig {
    /// Branded full-page loader.
    pub fn page(message: impl Into<String>) -> Self {
        Self {
            size: LoaderSize::XLarge,
            color: LoaderColor::Blue,
            full_screen: true,
            message: Some(message.into()),
            show_message: true,
        }
    }

    /// Compact loader sitting inside a button label.
    pub fn button() -> Self {
        Self {
            size: LoaderSize::Small,
            color: LoaderColor::White,
            full_screen: false,
            message: None,
            show_message: false,
        }
    }

    /// Caption to render, if any.
    pub fn caption(&self) -> Option<&str> {
        if !self.show_message {
            return None;
        }
        self.message.as_deref().filter(|msg| !msg.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_grow_monotonically() {
        let sizes = [LoaderSize::Small, LoaderSize::Medium, LoaderSize::Large, LoaderSize::XLarge];
        for pair in sizes.windows(2) {
            assert!(pair[0].dimension() < pair[1].dimension());
        }
    }

    #[test]
    fn caption_respects_visibility_toggle() {
        let mut config = LoaderConfig::page("Loading newsroom");
        assert_eq!(config.caption(), Some("Loading newsroom"));
        config.show_message = false;
        assert_eq!(config.caption(), None);
        config.show_message = true;
        config.message = Some(String::new());
        assert_eq!(config.caption(), None);
    }

    #[test]
    fn variants_are_fixed() {
        let page = LoaderConfig::page("x");
        assert!(page.full_screen);
        assert_eq!(page.size, LoaderSize::XLarge);

        let button = LoaderConfig::button();
        assert!(!button.full_screen);
        assert_eq!(button.color, LoaderColor::White);
        assert_eq!(button.caption(), None);
    }
}
