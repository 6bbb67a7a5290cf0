//! Tool descriptors, toolbar handles and the selection marker seam.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Select,
    Pan,
    Rectangle,
    Ellipse,
    Polygon,
    Line,
    Freehand,
    /// Places feature points on a shape.
    Point,
    Eraser,
    Text,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub const ALL: [ToolKind; 10] = [
        ToolKind::Select,
        ToolKind::Pan,
        ToolKind::Rectangle,
        ToolKind::Ellipse,
        ToolKind::Polygon,
        ToolKind::Line,
        ToolKind::Freehand,
        ToolKind::Point,
        ToolKind::Eraser,
        ToolKind::Text,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "select",
            ToolKind::Pan => "pan",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Ellipse => "ellipse",
            ToolKind::Polygon => "polygon",
            ToolKind::Line => "line",
            ToolKind::Freehand => "freehand",
            ToolKind::Point => "point",
            ToolKind::Eraser => "eraser",
            ToolKind::Text => "text",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Describes a selectable tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub kind: ToolKind,
    /// Human readable label (tooltip text).
    pub label: String,
    /// Single-key shortcut, if any.
    pub shortcut: Option<String>,
}

impl ToolDescriptor {
    pub fn new(kind: ToolKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            shortcut: None,
        }
    }

    /// Set the keyboard shortcut.
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

/// Identifies the UI element that represents a tool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolHandle(String);

impl ToolHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Handle used by the built-in toolbar for a tool kind.
    pub fn for_kind(kind: ToolKind) -> Self {
        Self(format!("tool-{}", kind.name()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The active tool together with its UI handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedTool {
    pub handle: ToolHandle,
    pub descriptor: ToolDescriptor,
}

impl SelectedTool {
    pub fn new(handle: ToolHandle, descriptor: ToolDescriptor) -> Self {
        Self { handle, descriptor }
    }

    /// Pair a descriptor with its built-in toolbar handle.
    pub fn from_descriptor(descriptor: ToolDescriptor) -> Self {
        Self {
            handle: ToolHandle::for_kind(descriptor.kind),
            descriptor,
        }
    }
}

/// Applies the visual "selected" marker to tool UI elements.
///
/// The store calls this whenever the active tool changes; implementations
/// live on the UI side.
pub trait ToolMarker {
    fn set_marked(&mut self, handle: &ToolHandle, marked: bool);
}

/// Marker that ignores every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMarker;

impl ToolMarker for NoopMarker {
    fn set_marked(&mut self, _handle: &ToolHandle, _marked: bool) {}
}

/// Marker that remembers which handles are currently marked.
#[derive(Debug, Clone, Default)]
pub struct RecordingMarker {
    marked: HashSet<ToolHandle>,
}

impl RecordingMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_marked(&self, handle: &ToolHandle) -> bool {
        self.marked.contains(handle)
    }

    /// Number of marked handles.
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}

impl ToolMarker for RecordingMarker {
    fn set_marked(&mut self, handle: &ToolHandle, marked: bool) {
        if marked {
            self.marked.insert(handle.clone());
        } else {
            self.marked.remove(handle);
        }
    }
}

/// Registry of the built-in tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Descriptors for every built-in tool, in toolbar order.
    pub fn all() -> Vec<ToolDescriptor> {
        ToolKind::ALL.iter().map(|&kind| Self::descriptor(kind)).collect()
    }

    /// Descriptor for a tool kind.
    pub fn descriptor(kind: ToolKind) -> ToolDescriptor {
        let (label, shortcut) = match kind {
            ToolKind::Select => ("Select", "V"),
            ToolKind::Pan => ("Pan", "H"),
            ToolKind::Rectangle => ("Rectangle", "R"),
            ToolKind::Ellipse => ("Ellipse", "O"),
            ToolKind::Polygon => ("Polygon", "G"),
            ToolKind::Line => ("Line", "L"),
            ToolKind::Freehand => ("Freehand", "P"),
            ToolKind::Point => ("Feature point", "F"),
            ToolKind::Eraser => ("Eraser", "E"),
            ToolKind::Text => ("Text", "T"),
        };
        ToolDescriptor::new(kind, label).with_shortcut(shortcut)
    }

    /// Find a tool by its shortcut key (case-insensitive).
    pub fn by_shortcut(key: &str) -> Option<ToolDescriptor> {
        Self::all().into_iter().find(|tool| {
            tool.shortcut
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(key))
        })
    }

    /// Find a tool by its stable name.
    pub fn by_name(name: &str) -> Option<ToolDescriptor> {
        ToolKind::ALL
            .iter()
            .find(|kind| kind.name() == name)
            .map(|&kind| Self::descriptor(kind))
    }

    /// The tool paired with its built-in toolbar handle.
    pub fn selected(kind: ToolKind) -> SelectedTool {
        SelectedTool::from_descriptor(Self::descriptor(kind))
    }
}
