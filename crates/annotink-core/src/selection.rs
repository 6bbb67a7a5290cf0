//! Selected shapes and feature points.

use crate::config::LastShapePolicy;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a shape owned by the rendering engine.
pub type ShapeId = String;

/// Identifier of a feature point (an anchor on a shape).
pub type FeaturePointId = String;

/// Zero, one or many identifiers.
///
/// Selection mutators accept either a single id or an ordered list; this is
/// the common input type both convert into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Ids {
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

impl Ids {
    /// Flatten into an ordered sequence.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Ids::None => Vec::new(),
            Ids::One(id) => vec![id],
            Ids::Many(ids) => ids,
        }
    }
}

impl From<&str> for Ids {
    fn from(id: &str) -> Self {
        Ids::One(id.to_string())
    }
}

impl From<String> for Ids {
    fn from(id: String) -> Self {
        Ids::One(id)
    }
}

impl From<&String> for Ids {
    fn from(id: &String) -> Self {
        Ids::One(id.clone())
    }
}

impl From<Option<&str>> for Ids {
    fn from(id: Option<&str>) -> Self {
        id.map_or(Ids::None, Ids::from)
    }
}

impl From<Option<String>> for Ids {
    fn from(id: Option<String>) -> Self {
        id.map_or(Ids::None, Ids::One)
    }
}

impl From<Vec<String>> for Ids {
    fn from(ids: Vec<String>) -> Self {
        Ids::Many(ids)
    }
}

impl From<Vec<&str>> for Ids {
    fn from(ids: Vec<&str>) -> Self {
        Ids::Many(ids.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Ids {
    fn from(ids: &[&str]) -> Self {
        Ids::Many(ids.iter().map(|id| id.to_string()).collect())
    }
}

impl From<&[String]> for Ids {
    fn from(ids: &[String]) -> Self {
        Ids::Many(ids.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Ids {
    fn from(ids: [&str; N]) -> Self {
        Ids::Many(ids.iter().map(|id| id.to_string()).collect())
    }
}

/// Normalise a single id or a list of ids into an ordered sequence.
///
/// Absent input gives an empty sequence, a single id gives a one-element
/// sequence and a list is returned unchanged.
pub fn to_sequence(ids: impl Into<Ids>) -> Vec<String> {
    ids.into().into_vec()
}

/// Empty ids stand in for "no id" and never enter a selection set.
fn is_valid_id(id: &str) -> bool {
    if id.is_empty() {
        log::warn!("Ignoring empty selection id");
        return false;
    }
    true
}

/// Errors from loading a serialized selection.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Empty {0} id")]
    EmptyId(&'static str),
}

/// Moves `id` to the end of `set`, inserting it if absent.
fn touch(set: &mut IndexSet<String>, id: &str) {
    set.shift_remove(id);
    set.insert(id.to_string());
}

/// Serialized form of [`Selection`], checked before use.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSelection {
    shapes: Vec<ShapeId>,
    feature_points: Vec<FeaturePointId>,
    last_shape: Option<ShapeId>,
}

/// The current selection: shape ids, feature point ids and the primary shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct Selection {
    /// Selected shape ids, least recently selected first.
    shapes: IndexSet<ShapeId>,
    /// Selected feature point ids, in insertion order.
    feature_points: IndexSet<FeaturePointId>,
    /// Most recently added or set shape.
    last_shape: Option<ShapeId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from lists of ids.
    ///
    /// Duplicates collapse. The primary shape is the final id of the input
    /// shape list, not an arbitrary member.
    pub fn from_ids(shapes: impl Into<Ids>, feature_points: impl Into<Ids>) -> Self {
        let mut selection = Self::new();
        for id in to_sequence(shapes).iter().filter(|id| is_valid_id(id)) {
            touch(&mut selection.shapes, id);
        }
        selection.feature_points = to_sequence(feature_points)
            .into_iter()
            .filter(|id| is_valid_id(id))
            .collect();
        selection.last_shape = selection.shapes.last().cloned();
        selection
    }

    /// Add a shape and/or a feature point.
    ///
    /// An added shape always becomes the primary shape, even if it was
    /// already selected.
    pub fn add(&mut self, shape: Option<&str>, feature_point: Option<&str>) {
        if let Some(id) = shape.filter(|id| is_valid_id(id)) {
            touch(&mut self.shapes, id);
            self.last_shape = Some(id.to_string());
        }
        if let Some(id) = feature_point.filter(|id| is_valid_id(id)) {
            self.feature_points.insert(id.to_string());
        }
    }

    /// Remove a shape and/or a feature point. Non-members are ignored.
    ///
    /// With [`LastShapePolicy::Retain`] the primary shape is left as is, so
    /// it can name a shape that is no longer selected. With
    /// [`LastShapePolicy::Repair`] it falls back to the most recently
    /// selected remaining shape.
    pub fn remove(
        &mut self,
        shape: Option<&str>,
        feature_point: Option<&str>,
        policy: LastShapePolicy,
    ) {
        if let Some(id) = shape {
            let removed = self.shapes.shift_remove(id);
            if removed
                && policy == LastShapePolicy::Repair
                && self.last_shape.as_deref() == Some(id)
            {
                self.last_shape = self.shapes.last().cloned();
            }
        }
        if let Some(id) = feature_point {
            self.feature_points.shift_remove(id);
        }
    }

    /// Drop every selected shape and feature point.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.feature_points.clear();
        self.last_shape = None;
    }

    /// Selected shape ids.
    pub fn shapes(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().map(String::as_str)
    }

    /// Selected feature point ids.
    pub fn feature_points(&self) -> impl Iterator<Item = &str> {
        self.feature_points.iter().map(String::as_str)
    }

    /// The primary shape.
    pub fn last_shape(&self) -> Option<&str> {
        self.last_shape.as_deref()
    }

    pub fn contains_shape(&self, id: &str) -> bool {
        self.shapes.contains(id)
    }

    pub fn contains_feature_point(&self, id: &str) -> bool {
        self.feature_points.contains(id)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn feature_point_count(&self) -> usize {
        self.feature_points.len()
    }

    /// True when neither shapes nor feature points are selected.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.feature_points.is_empty()
    }
}

impl TryFrom<RawSelection> for Selection {
    type Error = SelectionError;

    /// Rejects empty ids. A primary shape that is not selected is dropped.
    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        if raw.shapes.iter().any(String::is_empty) {
            return Err(SelectionError::EmptyId("shape"));
        }
        if raw.feature_points.iter().any(String::is_empty) {
            return Err(SelectionError::EmptyId("feature point"));
        }

        let shapes: IndexSet<ShapeId> = raw.shapes.into_iter().collect();
        let last_shape = raw.last_shape.filter(|id| {
            let selected = shapes.contains(id);
            if !selected {
                log::warn!("Dropping primary shape {} that is not selected", id);
            }
            selected
        });

        Ok(Self {
            shapes,
            feature_points: raw.feature_points.into_iter().collect(),
            last_shape,
        })
    }
}
