//! Toolbar buttons.

use egui::{vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Sense, Ui, Vec2};

use crate::{sizing, theme};

/// Style configuration for tool buttons.
#[derive(Clone)]
pub struct ToolButtonStyle {
    /// Minimum button size; wide labels grow the width.
    pub min_size: Vec2,
    pub corner_radius: u8,
    pub font_size: f32,
    /// Background color when not selected
    pub bg_color: Color32,
    /// Background color when hovered
    pub hover_color: Color32,
    /// Background color when selected
    pub selected_color: Color32,
    pub text_color: Color32,
    pub selected_text_color: Color32,
}

impl Default for ToolButtonStyle {
    fn default() -> Self {
        Self {
            min_size: vec2(sizing::BUTTON_MIN_WIDTH, sizing::BUTTON_HEIGHT),
            corner_radius: 6,
            font_size: 12.0,
            bg_color: Color32::TRANSPARENT,
            hover_color: theme::HOVER_BG,
            selected_color: theme::ACCENT,
            text_color: theme::TEXT,
            selected_text_color: Color32::WHITE,
        }
    }
}

/// A labelled tool button with a solid fill when selected.
pub struct ToolButton<'a> {
    label: &'a str,
    shortcut: Option<&'a str>,
    selected: bool,
    style: ToolButtonStyle,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            shortcut: None,
            selected: false,
            style: ToolButtonStyle::default(),
        }
    }

    /// Set whether the button carries the selected marker.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set keyboard shortcut (shown in hover tooltip).
    pub fn shortcut(mut self, shortcut: &'a str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn style(mut self, style: ToolButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = FontId::proportional(self.style.font_size);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER,
        );
        let width = (galley.size().x + 16.0).max(self.style.min_size.x);
        let size = vec2(width, self.style.min_size.y);

        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                self.style.selected_color
            } else if response.hovered() {
                self.style.hover_color
            } else {
                self.style.bg_color
            };
            let text_color = if self.selected {
                self.style.selected_text_color
            } else {
                self.style.text_color
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(self.style.corner_radius), bg_color);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                text_color,
            );
        }

        let clicked = response.clicked();
        if let Some(shortcut) = self.shortcut {
            response.clone().on_hover_ui(|ui| {
                ui.horizontal(|ui| {
                    ui.label(self.label);
                    ui.label(
                        egui::RichText::new(format!("({})", shortcut))
                            .color(theme::TEXT_MUTED)
                            .small(),
                    );
                });
            });
        } else {
            response.clone().on_hover_text(self.label);
        }
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
