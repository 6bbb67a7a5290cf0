//! AnnotInk Core Library
//!
//! Platform-agnostic session state for the AnnotInk annotation editor: the
//! active tool, the selected shapes and feature points, and copied shapes.

pub mod clipboard;
pub mod config;
pub mod selection;
pub mod store;
pub mod tools;

pub use clipboard::ShapeSnapshot;
pub use config::{ConfigError, ConfigResult, LastShapePolicy, StoreConfig};
pub use selection::{to_sequence, FeaturePointId, Ids, Selection, SelectionError, ShapeId};
pub use store::{ConfigSnapshot, InitOptions, SelectionConfigStore, ToolTransition};
pub use tools::{
    NoopMarker, RecordingMarker, SelectedTool, ToolDescriptor, ToolHandle, ToolKind, ToolMarker,
    ToolRegistry,
};
