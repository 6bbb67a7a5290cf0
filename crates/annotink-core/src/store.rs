//! Session state for the active tool, the selection and copied shapes.
//!
//! The application root owns one [`SelectionConfigStore`] and hands it to
//! event handlers (`&mut`) and views (`&`). Tool UI elements are marked and
//! unmarked through the store's [`ToolMarker`].

use crate::clipboard::ShapeSnapshot;
use crate::config::StoreConfig;
use crate::selection::{FeaturePointId, Ids, Selection, ShapeId};
use crate::tools::{NoopMarker, SelectedTool, ToolDescriptor, ToolHandle, ToolMarker};
use serde::{Deserialize, Serialize};

/// Values applied by [`SelectionConfigStore::init`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitOptions {
    pub copied_elements: Vec<ShapeSnapshot>,
    pub selected_tool: Option<SelectedTool>,
    pub shapes: Vec<ShapeId>,
    pub feature_points: Vec<FeaturePointId>,
}

/// Marker changes caused by a tool switch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolTransition {
    /// Handle of the previously active tool.
    pub unmarked: Option<ToolHandle>,
    /// Handle of the newly active tool.
    pub marked: Option<ToolHandle>,
}

/// Owned copy of the whole store state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub copied_elements: Vec<ShapeSnapshot>,
    pub selected_tool: Option<SelectedTool>,
    pub selected: Selection,
}

/// Active tool, selected shapes/feature points and copied shapes.
#[derive(Debug, Clone)]
pub struct SelectionConfigStore<M: ToolMarker = NoopMarker> {
    copied_elements: Vec<ShapeSnapshot>,
    selected_tool: Option<SelectedTool>,
    selected: Selection,
    config: StoreConfig,
    marker: M,
}

impl Default for SelectionConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionConfigStore {
    /// Create an empty store without a UI marker.
    pub fn new() -> Self {
        Self::with_marker(NoopMarker)
    }
}

impl<M: ToolMarker> SelectionConfigStore<M> {
    /// Create an empty store that marks tool handles through `marker`.
    pub fn with_marker(marker: M) -> Self {
        Self::with_config(StoreConfig::default(), marker)
    }

    /// Create an empty store with explicit configuration.
    pub fn with_config(config: StoreConfig, marker: M) -> Self {
        Self {
            copied_elements: Vec::new(),
            selected_tool: None,
            selected: Selection::new(),
            config,
            marker,
        }
    }

    /// Add a shape and/or a feature point to the selection.
    ///
    /// An added shape becomes the primary shape even if it was already
    /// selected.
    pub fn add_selected_element(&mut self, shape: Option<&str>, feature_point: Option<&str>) {
        log::debug!(
            "Add to selection: shape={:?} feature_point={:?}",
            shape,
            feature_point
        );
        self.selected.add(shape, feature_point);
    }

    /// Remove a shape and/or a feature point from the selection.
    ///
    /// The primary shape follows [`StoreConfig::last_shape_policy`]; by
    /// default it is left untouched.
    pub fn remove_selected_element(&mut self, shape: Option<&str>, feature_point: Option<&str>) {
        log::debug!(
            "Remove from selection: shape={:?} feature_point={:?}",
            shape,
            feature_point
        );
        self.selected
            .remove(shape, feature_point, self.config.last_shape_policy);
    }

    /// Replace the copied shapes.
    pub fn set_copied_elements(&mut self, elements: Vec<ShapeSnapshot>) {
        log::debug!("Copied {} element(s)", elements.len());
        self.copied_elements = elements;
    }

    /// Switch the active tool. `None` deselects.
    ///
    /// The previous tool's handle is unmarked before the new one is marked.
    pub fn set_selected_tool(&mut self, tool: Option<SelectedTool>) -> ToolTransition {
        let unmarked = self.selected_tool.take().map(|previous| previous.handle);
        if let Some(handle) = &unmarked {
            self.marker.set_marked(handle, false);
        }

        let marked = tool.as_ref().map(|tool| tool.handle.clone());
        if let Some(handle) = &marked {
            self.marker.set_marked(handle, true);
        }

        match &tool {
            Some(tool) => log::debug!("Selected tool {} ({})", tool.descriptor.kind, tool.handle),
            None => log::debug!("Deselected tool"),
        }
        self.selected_tool = tool;

        ToolTransition { unmarked, marked }
    }

    /// Activate a tool through its UI handle.
    pub fn select_tool(&mut self, handle: ToolHandle, descriptor: ToolDescriptor) -> ToolTransition {
        self.set_selected_tool(Some(SelectedTool::new(handle, descriptor)))
    }

    /// Deselect the active tool.
    pub fn clear_selected_tool(&mut self) -> ToolTransition {
        self.set_selected_tool(None)
    }

    /// Replace the whole selection.
    ///
    /// The primary shape becomes the final id of `shapes`, or none when it
    /// is empty.
    pub fn set_selected_elements(&mut self, shapes: impl Into<Ids>, feature_points: impl Into<Ids>) {
        self.selected = Selection::from_ids(shapes, feature_points);
        log::debug!(
            "Selection set: {} shape(s), {} feature point(s)",
            self.selected.shape_count(),
            self.selected.feature_point_count()
        );
    }

    /// Deselect every shape and feature point.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Reset the whole state in place.
    pub fn init(&mut self, options: InitOptions) {
        let InitOptions {
            copied_elements,
            selected_tool,
            shapes,
            feature_points,
        } = options;

        self.copied_elements = copied_elements;
        self.set_selected_tool(selected_tool);
        self.selected = Selection::from_ids(shapes, feature_points);
        log::debug!("Store initialized");
    }

    /// Reset to an empty state.
    pub fn reset(&mut self) {
        self.init(InitOptions::default());
    }

    pub fn copied_elements(&self) -> &[ShapeSnapshot] {
        &self.copied_elements
    }

    /// Descriptor of the active tool.
    pub fn selected_tool(&self) -> Option<&ToolDescriptor> {
        self.selected_tool.as_ref().map(|tool| &tool.descriptor)
    }

    /// UI handle of the active tool.
    pub fn selected_tool_handle(&self) -> Option<&ToolHandle> {
        self.selected_tool.as_ref().map(|tool| &tool.handle)
    }

    /// The primary (most recently selected) shape.
    pub fn selected_shape(&self) -> Option<&str> {
        self.selected.last_shape()
    }

    /// All selected shape ids. Callers must not depend on the order.
    pub fn selected_shapes(&self) -> Vec<ShapeId> {
        self.selected.shapes().map(str::to_string).collect()
    }

    /// All selected feature point ids. Callers must not depend on the order.
    pub fn selected_feature_points(&self) -> Vec<FeaturePointId> {
        self.selected.feature_points().map(str::to_string).collect()
    }

    pub fn is_shape_selected(&self, id: &str) -> bool {
        self.selected.contains_shape(id)
    }

    pub fn is_feature_point_selected(&self, id: &str) -> bool {
        self.selected.contains_feature_point(id)
    }

    /// True when at least one shape or feature point is selected.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// The live selection, read-only.
    pub fn selection(&self) -> &Selection {
        &self.selected
    }

    /// Copy of the full state. Later mutations do not affect it.
    pub fn config(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            copied_elements: self.copied_elements.clone(),
            selected_tool: self.selected_tool.clone(),
            selected: self.selected.clone(),
        }
    }

    pub fn store_config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }

    pub fn marker_mut(&mut self) -> &mut M {
        &mut self.marker
    }
}
