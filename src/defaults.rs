//! Per-kind default dimensions.
//!
//! Every generator substitutes these constants when the canvas did not
//! record an explicit size, so each kind's fallback footprint is declared
//! once and testable in isolation.

use crate::document::Kind;

/// Default footprint for a component kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeDefaults {
    pub width: f64,
    pub height: f64,
}

impl SizeDefaults {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

pub const CONTAINER: SizeDefaults = SizeDefaults::new(200.0, 150.0);
pub const TEXT: SizeDefaults = SizeDefaults::new(200.0, 50.0);
pub const ELEVATED_BUTTON: SizeDefaults = SizeDefaults::new(150.0, 40.0);
pub const TEXT_FIELD: SizeDefaults = SizeDefaults::new(250.0, 70.0);
pub const COLUMN: SizeDefaults = SizeDefaults::new(200.0, 300.0);
pub const ROW: SizeDefaults = SizeDefaults::new(300.0, 100.0);
pub const STACK: SizeDefaults = SizeDefaults::new(250.0, 250.0);
pub const SIZED_BOX: SizeDefaults = SizeDefaults::new(100.0, 100.0);
pub const CHECKBOX_SINGLE: SizeDefaults = SizeDefaults::new(200.0, 50.0);
pub const CHECKBOX_MULTIPLE: SizeDefaults = SizeDefaults::new(200.0, 200.0);
pub const RADIO: SizeDefaults = SizeDefaults::new(230.0, 150.0);
pub const LIST_VIEW: SizeDefaults = SizeDefaults::new(300.0, 200.0);
pub const IMAGE: SizeDefaults = SizeDefaults::new(200.0, 150.0);
pub const TABLE: SizeDefaults = SizeDefaults::new(500.0, 200.0);
pub const SELECT: SizeDefaults = SizeDefaults::new(250.0, 70.0);

/// Default avatar radius.
pub const CIRCLE_AVATAR_RADIUS: f64 = 40.0;

/// Lookup by kind, for kinds that read a width/height pair.
///
/// Kinds that size themselves (icon, switch, slider, the material
/// chrome widgets) have no entry. Checkbox resolves per-mode at the
/// generator, defaulting to the single-mode footprint here.
pub fn for_kind(kind: &Kind) -> Option<SizeDefaults> {
    Some(match kind {
        Kind::Container => CONTAINER,
        Kind::Text => TEXT,
        Kind::ElevatedButton => ELEVATED_BUTTON,
        Kind::TextField => TEXT_FIELD,
        Kind::Column => COLUMN,
        Kind::Row => ROW,
        Kind::Stack => STACK,
        Kind::SizedBox => SIZED_BOX,
        Kind::Checkbox => CHECKBOX_SINGLE,
        Kind::Radio => RADIO,
        Kind::ListView => LIST_VIEW,
        Kind::Image => IMAGE,
        Kind::Table => TABLE,
        Kind::Select => SELECT,
        _ => return None,
    })
}
