//! Row inference over absolutely positioned components.
//!
//! Rendering uses exact `Positioned` coordinates, so this ordering does
//! not affect layout; it exists to make emission order deterministic and
//! diff-friendly across regenerations.

use crate::document::Component;
use std::cmp::Ordering;

/// Vertical distance within which two components share a row.
///
/// Fixed by the canvas editor's grid feel; not configurable.
pub const ROW_TOLERANCE: f64 = 20.0;

/// Group a page's components into rows, ordered top-to-bottom then
/// left-to-right.
///
/// Components are sorted by `y` (stable), then bucketed greedily: a
/// component joins the current row when its `y` is strictly within
/// [`ROW_TOLERANCE`] of the row anchor, and the anchor becomes the
/// minimum `y` seen in that row so far. Ties within the tolerance band
/// are associative (the first-seen anchor wins), so input order can
/// affect grouping for transitively-close clusters. That rule is
/// load-bearing for regeneration stability; do not "fix" it.
pub fn group_into_rows(components: &[Component]) -> Vec<Vec<&Component>> {
    let mut sorted: Vec<&Component> = components.iter().collect();
    sorted.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal));

    let mut rows: Vec<Vec<&Component>> = Vec::new();
    let mut current: Vec<&Component> = Vec::new();
    let mut anchor: Option<f64> = None;

    for component in sorted {
        match anchor {
            Some(a) if (component.y - a).abs() < ROW_TOLERANCE => {
                current.push(component);
                anchor = Some(a.min(component.y));
            }
            Some(_) => {
                if !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                }
                anchor = Some(component.y);
                current.push(component);
            }
            None => {
                anchor = Some(component.y);
                current.push(component);
            }
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }

    for row in &mut rows {
        row.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
    }
    rows
}
