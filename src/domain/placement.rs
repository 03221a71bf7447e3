//! Usage: Tray-anchored window placement and the main window's two-state visibility.

/// Screen bounds in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

// Half-way values round toward +inf so negative (multi-monitor) coordinates behave the
// same as positive ones.
fn round_px(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Window origin that centers the window horizontally under the tray icon, with its top
/// edge on the icon's bottom edge.
pub fn compute_position(tray: Rect, window: Size) -> Point {
    Point {
        x: round_px(tray.x + tray.width / 2.0 - window.width / 2.0),
        y: round_px(tray.y + tray.height),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

impl Visibility {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}
