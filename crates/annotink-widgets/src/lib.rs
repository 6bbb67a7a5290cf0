//! egui widgets for the AnnotInk tool selection.
//!
//! - **Buttons**: labelled tool buttons with a selected fill
//! - **Toolbar**: the tool row, keyboard shortcuts and the [`ToolbarMarks`]
//!   marker that connects the toolbar to a `SelectionConfigStore`

pub mod buttons;
pub mod toolbar;

pub use buttons::{ToolButton, ToolButtonStyle};
pub use toolbar::{shortcut_tool, show_toolbar, tool_toolbar, toolbar_frame, ToolbarMarks};

/// Sizes shared by the toolbar widgets.
pub mod sizing {
    /// Tool button height
    pub const BUTTON_HEIGHT: f32 = 28.0;
    /// Narrowest tool button
    pub const BUTTON_MIN_WIDTH: f32 = 36.0;
    /// Toolbar panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Toolbar palette.
pub mod theme {
    use egui::Color32;

    /// Button label
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Shortcut hint in tooltips
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Toolbar panel outline
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Fill of the marked tool button
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Fill of a hovered tool button
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Toolbar panel fill
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
