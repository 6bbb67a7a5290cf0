//! Tool toolbar bound to a `SelectionConfigStore`.

use std::collections::HashSet;

use annotink_core::{
    SelectedTool, SelectionConfigStore, ToolDescriptor, ToolHandle, ToolKind, ToolMarker,
    ToolRegistry,
};
use egui::{Color32, CornerRadius, Frame, Key, Margin, Pos2, Stroke, Ui};

use crate::buttons::ToolButton;
use crate::{sizing, theme};

/// Marker state of the toolbar buttons.
///
/// Installed as the store's [`ToolMarker`]; the toolbar reads it back when
/// painting. With a context attached, every change requests a repaint.
#[derive(Debug, Clone, Default)]
pub struct ToolbarMarks {
    marked: HashSet<ToolHandle>,
    repaint: Option<egui::Context>,
}

impl ToolbarMarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a repaint of `ctx` whenever the marked set changes.
    pub fn with_repaint(ctx: egui::Context) -> Self {
        Self {
            marked: HashSet::new(),
            repaint: Some(ctx),
        }
    }

    pub fn is_marked(&self, handle: &ToolHandle) -> bool {
        self.marked.contains(handle)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }
}

impl ToolMarker for ToolbarMarks {
    fn set_marked(&mut self, handle: &ToolHandle, marked: bool) {
        let changed = if marked {
            self.marked.insert(handle.clone())
        } else {
            self.marked.remove(handle)
        };

        if changed {
            log::trace!("Toolbar marker {} -> {}", handle, marked);
            if let Some(ctx) = &self.repaint {
                ctx.request_repaint();
            }
        }
    }
}

/// Rounded panel the tool row is drawn in.
pub fn toolbar_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .stroke(Stroke::new(1.0, theme::BORDER))
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .inner_margin(Margin::symmetric(10, 4))
        .shadow(egui::epaint::Shadow {
            offset: [0, 1],
            blur: 4,
            spread: 0,
            color: Color32::from_black_alpha(12),
        })
}

/// Short vertical line between tool groups.
fn group_separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let height = 14.0;
    let x = rect.left() + 1.0;
    let top = rect.center().y - height / 2.0;
    ui.painter().line_segment(
        [Pos2::new(x, top), Pos2::new(x, top + height)],
        Stroke::new(1.0, Color32::from_gray(210)),
    );
    ui.add_space(3.0);
}

/// Draw one button per built-in tool and return the clicked tool, if any.
pub fn tool_toolbar(ui: &mut Ui, marks: &ToolbarMarks) -> Option<ToolDescriptor> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        for tool in ToolRegistry::all() {
            // Navigation tools first, then the drawing tools.
            if tool.kind == ToolKind::Rectangle {
                group_separator(ui);
            }

            let handle = ToolHandle::for_kind(tool.kind);
            let mut button = ToolButton::new(&tool.label).selected(marks.is_marked(&handle));
            if let Some(shortcut) = tool.shortcut.as_deref() {
                button = button.shortcut(shortcut);
            }
            if button.show(ui) {
                clicked = Some(tool.clone());
            }
        }
    });

    clicked
}

/// Tool whose shortcut key was pressed this frame.
///
/// Ignored while a text field has focus or a modifier is held.
pub fn shortcut_tool(ctx: &egui::Context) -> Option<ToolDescriptor> {
    if ctx.wants_keyboard_input() {
        return None;
    }

    ctx.input(|input| {
        if input.modifiers.ctrl || input.modifiers.command || input.modifiers.alt {
            return None;
        }
        ToolRegistry::all().into_iter().find(|tool| {
            tool.shortcut
                .as_deref()
                .and_then(Key::from_name)
                .is_some_and(|key| input.key_pressed(key))
        })
    })
}

/// Draw the toolbar inside [`toolbar_frame`], handle tool shortcuts and
/// apply the chosen tool to `store`. Returns true if the active tool changed.
pub fn show_toolbar(ui: &mut Ui, store: &mut SelectionConfigStore<ToolbarMarks>) -> bool {
    let clicked = toolbar_frame()
        .show(ui, |ui| tool_toolbar(ui, store.marker()))
        .inner;
    let chosen = clicked.or_else(|| shortcut_tool(ui.ctx()));

    match chosen {
        Some(tool) if store.selected_tool() != Some(&tool) => {
            store.set_selected_tool(Some(SelectedTool::from_descriptor(tool)));
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_press(key: Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::default(),
        }
    }

    fn run_frame(
        events: Vec<egui::Event>,
        store: &mut SelectionConfigStore<ToolbarMarks>,
    ) -> bool {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        raw_input.events = events;

        let mut changed = false;
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed = show_toolbar(ui, store);
            });
        });
        changed
    }

    #[test]
    fn test_marks_track_store() {
        let mut store = SelectionConfigStore::with_marker(ToolbarMarks::new());
        let rect = ToolRegistry::selected(ToolKind::Rectangle);
        let line = ToolRegistry::selected(ToolKind::Line);

        store.set_selected_tool(Some(rect.clone()));
        assert!(store.marker().is_marked(&rect.handle));

        store.set_selected_tool(Some(line.clone()));
        assert!(!store.marker().is_marked(&rect.handle));
        assert!(store.marker().is_marked(&line.handle));
        assert_eq!(store.marker().marked_count(), 1);

        store.clear_selected_tool();
        assert_eq!(store.marker().marked_count(), 0);
    }

    #[test]
    fn test_shortcut_selects_tool() {
        let mut store = SelectionConfigStore::with_marker(ToolbarMarks::new());

        let changed = run_frame(vec![key_press(Key::R)], &mut store);

        assert!(changed);
        assert_eq!(
            store.selected_tool().map(|tool| tool.kind),
            Some(ToolKind::Rectangle)
        );
        assert!(
            store
                .marker()
                .is_marked(&ToolHandle::for_kind(ToolKind::Rectangle))
        );
    }

    #[test]
    fn test_shortcut_for_active_tool_is_not_a_change() {
        let mut store = SelectionConfigStore::with_marker(ToolbarMarks::new());
        store.set_selected_tool(Some(ToolRegistry::selected(ToolKind::Ellipse)));

        let changed = run_frame(vec![key_press(Key::O)], &mut store);

        assert!(!changed);
        assert_eq!(store.marker().marked_count(), 1);
    }

    #[test]
    fn test_no_input_keeps_tool() {
        let mut store = SelectionConfigStore::with_marker(ToolbarMarks::new());
        store.set_selected_tool(Some(ToolRegistry::selected(ToolKind::Pan)));

        let changed = run_frame(Vec::new(), &mut store);

        assert!(!changed);
        assert_eq!(store.selected_tool().map(|tool| tool.kind), Some(ToolKind::Pan));
    }

    #[test]
    fn test_toolbar_frame_wraps_buttons() {
        let ctx = egui::Context::default();
        let marks = ToolbarMarks::new();

        let mut framed = egui::Rect::NOTHING;
        let mut bare = egui::Rect::NOTHING;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                framed = toolbar_frame()
                    .show(ui, |ui| tool_toolbar(ui, &marks))
                    .response
                    .rect;
                bare = ui.scope(|ui| tool_toolbar(ui, &marks)).response.rect;
            });
        });

        // The frame's inner margin makes it larger than the bare row.
        assert!(framed.width() > bare.width());
        assert!(framed.height() > bare.height());
    }

    #[test]
    fn test_repaint_marks_change() {
        let ctx = egui::Context::default();
        let mut marks = ToolbarMarks::with_repaint(ctx);
        let handle = ToolHandle::new("tool-text");

        marks.set_marked(&handle, true);
        marks.set_marked(&handle, true);
        assert_eq!(marks.marked_count(), 1);

        marks.set_marked(&handle, false);
        assert!(!marks.is_marked(&handle));
    }
}
