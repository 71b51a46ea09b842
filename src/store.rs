//! Curve store: committed curves in paint order plus the in-progress curve.
//!
//! The store is owned by the engine's state machine; the renderer only reads
//! it. Mutations that reference stale indices are refused with a
//! [`StoreError`] rather than panicking, so callers can drop them silently.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::error::StoreError;
use crate::geometry::{Curve, Point};

/// Ordered committed curves plus at most one active (uncommitted) curve.
#[derive(Debug, Clone, Default)]
pub struct CurveStore {
    committed: Vec<Curve>,
    active: Option<Curve>,
}

impl CurveStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed curves in insertion (= paint) order.
    #[must_use]
    pub fn committed(&self) -> &[Curve] {
        &self.committed
    }

    /// Committed curve at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Curve> {
        self.committed.get(index)
    }

    /// The curve currently being built, if drawing.
    #[must_use]
    pub fn active(&self) -> Option<&Curve> {
        self.active.as_ref()
    }

    /// Number of committed curves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Returns `true` if nothing has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Start a fresh, empty active curve, discarding any previous one.
    pub fn begin_active(&mut self) {
        self.active = Some(Curve::new());
    }

    /// Append `point` to the active curve.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotDrawing`] if no active curve exists.
    pub fn append_point_to_active(&mut self, point: Point) -> Result<(), StoreError> {
        let active = self.active.as_mut().ok_or(StoreError::NotDrawing)?;
        active.push(point);
        Ok(())
    }

    /// Fold the active curve into the committed sequence and return a copy.
    ///
    /// On refusal the active curve is left untouched.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotDrawing`] without an active curve, or
    /// [`StoreError::DegenerateCurve`] when it has fewer than two points.
    pub fn commit_active(&mut self) -> Result<Curve, StoreError> {
        let len = self.active.as_ref().ok_or(StoreError::NotDrawing)?.len();
        if len < 2 {
            return Err(StoreError::DegenerateCurve { len });
        }
        let curve = self.active.take().ok_or(StoreError::NotDrawing)?;
        self.committed.push(curve.clone());
        Ok(curve)
    }

    /// Drop the active curve without committing it.
    pub fn abandon_active(&mut self) -> Option<Curve> {
        self.active.take()
    }

    /// Replace one point of a committed curve.
    ///
    /// # Errors
    ///
    /// [`StoreError::CurveNotFound`] or [`StoreError::PointNotFound`] when
    /// either index is stale.
    pub fn replace_point_in_committed(&mut self, curve: usize, point: usize, to: Point) -> Result<(), StoreError> {
        let target = self
            .committed
            .get_mut(curve)
            .ok_or(StoreError::CurveNotFound(curve))?;
        if target.replace(point, to) {
            Ok(())
        } else {
            Err(StoreError::PointNotFound { curve, point })
        }
    }
}
