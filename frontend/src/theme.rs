//! App theme: colors and spacing. Light/dark is picked at runtime by the theme toggle.

#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#0F9D58";
    pub const LIGHT_BACKGROUND: &'static str = "#F1F5F9";
    pub const LIGHT_CARD: &'static str = "rgba(255,255,255,0.95)";
    pub const LIGHT_FOREGROUND: &'static str = "#0F172A";
    pub const LIGHT_MUTED: &'static str = "#64748B";
    pub const LIGHT_BORDER: &'static str = "#CBD5E1";
    pub const LIGHT_DESTRUCTIVE: &'static str = "#DC2626";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#34D399";
    pub const DARK_BACKGROUND: &'static str = "#0B1120";
    pub const DARK_CARD: &'static str = "rgba(30,41,59,0.9)";
    pub const DARK_FOREGROUND: &'static str = "#E2E8F0";
    pub const DARK_MUTED: &'static str = "#94A3B8";
    pub const DARK_BORDER: &'static str = "#334155";
    pub const DARK_DESTRUCTIVE: &'static str = "#F87171";

    /// Text on top of `primary`.
    pub const ON_PRIMARY: &'static str = "#FFFFFF";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn background(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_BACKGROUND
        } else {
            Self::LIGHT_BACKGROUND
        }
    }
    pub fn card(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_CARD
        } else {
            Self::LIGHT_CARD
        }
    }
    pub fn foreground(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_FOREGROUND
        } else {
            Self::LIGHT_FOREGROUND
        }
    }
    pub fn muted(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_MUTED
        } else {
            Self::LIGHT_MUTED
        }
    }
    pub fn border(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_BORDER
        } else {
            Self::LIGHT_BORDER
        }
    }
    pub fn destructive(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_DESTRUCTIVE
        } else {
            Self::LIGHT_DESTRUCTIVE
        }
    }
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const CARD_PADDING: &'static str = "24px";
    pub const CARD_RADIUS: &'static str = "16px";
    pub const CONTENT_WIDTH: &'static str = "1100px";
    pub const FORM_WIDTH: &'static str = "384px";
}
