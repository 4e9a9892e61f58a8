//! Widget generator registry.
//!
//! One pure translation function per component kind, dispatched over the
//! closed [`Kind`] tag. Every generator is total: missing properties get
//! documented defaults and unknown kinds render an explicit placeholder,
//! so generation never fails and never drops a component silently.
//!
//! Indentation is tracked as a character count rather than a nesting
//! depth: the output is well-formed Dart text, not an AST, and fragments
//! are spliced into surrounding code at arbitrary columns.

mod basic;
mod data;
mod input;
mod layout;
mod material;

use crate::document::{Component, Kind};
use crate::style::dart_double;
use indexmap::IndexMap;

/// Names of the runtime scale variables a screen declares.
///
/// When present, every dimension literal is emitted as
/// `<value> * <variable>` so the generated screen adapts to device size
/// at runtime instead of baking a pre-multiplied constant in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    pub horizontal: String,
    pub vertical: String,
}

impl Scale {
    /// The variable names every generated screen declares.
    pub fn screen() -> Self {
        Self {
            horizontal: "horizontalScale".to_string(),
            vertical: "verticalScale".to_string(),
        }
    }

    fn var(&self, axis: Axis) -> &str {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}

/// Which scale variable a dimension multiplies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Request-scoped table of hoisted scroll controllers.
///
/// Stateful fragments (scrollable lists, multi-item radio groups) need a
/// controller declared once at screen level; the screen assembler builds
/// this table per generation call and generators only reference names
/// from it. The source document is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerTable {
    by_component: IndexMap<String, String>,
}

impl ControllerTable {
    /// Empty table, for fragments generated outside a screen.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scan a page's components and assign controller names to every
    /// fragment that needs one. Walks nested children too, since
    /// containers render their children recursively and a nested list
    /// needs its controller hoisted just like a top-level one.
    pub fn for_components<'a, I>(components: I) -> Self
    where
        I: IntoIterator<Item = &'a Component>,
    {
        let mut table = Self::default();
        for component in components {
            table.scan(component);
        }
        table
    }

    fn scan(&mut self, component: &Component) {
        match component.kind {
            Kind::ListView if component.props.not_false("showScrollbar") => {
                self.by_component.insert(
                    component.id.clone(),
                    format!("_scrollController_{}", sanitize_ident(&component.id)),
                );
            }
            Kind::Radio if has_radio_items(component) => {
                self.by_component.insert(
                    component.id.clone(),
                    format!("_radioScrollController_{}", sanitize_ident(&component.id)),
                );
            }
            _ => {}
        }
        for child in &component.children {
            self.scan(child);
        }
    }

    /// Controller name assigned to a component, if any.
    pub fn get(&self, component_id: &str) -> Option<&str> {
        self.by_component.get(component_id).map(String::as_str)
    }

    /// Screen-level declarations, one per assigned controller, in
    /// assignment order.
    pub fn declarations(&self) -> String {
        let mut out = String::new();
        for name in self.by_component.values() {
            out.push_str(&format!("    final {name} = ScrollController();\n"));
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.by_component.is_empty()
    }
}

fn has_radio_items(component: &Component) -> bool {
    component
        .props
        .raw("radioItems")
        .and_then(serde_json::Value::as_array)
        .is_some_and(|items| !items.is_empty())
}

/// Strip non-identifier characters from a component id.
pub(crate) fn sanitize_ident(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Everything a generator needs besides the component itself.
#[derive(Debug, Clone, Copy)]
pub struct GenCtx<'a> {
    pub scale: Option<&'a Scale>,
    pub controllers: &'a ControllerTable,
}

impl<'a> GenCtx<'a> {
    /// Render a dimension literal, deferred-scaled when a scale is set.
    pub(crate) fn dim(&self, value: f64, axis: Axis) -> String {
        let literal = dart_double(value);
        match self.scale {
            Some(scale) => format!("{literal} * {}", scale.var(axis)),
            None => literal,
        }
    }
}

/// Translate one component into a Dart widget expression, indented by
/// `indent` characters.
///
/// Total over all inputs: the `Unknown` arm renders a visible
/// placeholder naming the unrecognized tag.
pub fn generate_widget(component: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    match &component.kind {
        Kind::Container => layout::container(component, indent, ctx),
        Kind::Text => basic::text(component, indent, ctx),
        Kind::ElevatedButton => basic::elevated_button(component, indent, ctx),
        Kind::TextField => input::text_field(component, indent, ctx),
        Kind::Column => layout::column(component, indent, ctx),
        Kind::Row => layout::row(component, indent, ctx),
        Kind::Stack => layout::stack(component, indent, ctx),
        Kind::Padding => layout::padding(component, indent),
        Kind::Center => layout::center(component, indent),
        Kind::Expanded => layout::expanded(component, indent),
        Kind::SizedBox => layout::sized_box(component, indent, ctx),
        Kind::CircleAvatar => basic::circle_avatar(component, indent, ctx),
        Kind::Icon => basic::icon(component, indent),
        Kind::Switch => input::switch_toggle(component, indent),
        Kind::Checkbox => input::checkbox(component, indent, ctx),
        Kind::Radio => input::radio(component, indent, ctx),
        Kind::Slider => input::slider(component, indent),
        Kind::AppBar => material::app_bar(component, indent),
        Kind::BottomNavigationBar => material::bottom_navigation_bar(component, indent),
        Kind::FloatingActionButton => material::floating_action_button(indent),
        Kind::Card => basic::card(component, indent),
        Kind::ListTile => basic::list_tile(component, indent),
        Kind::Drawer => material::drawer(component, indent),
        Kind::TabBar => material::tab_bar(component, indent),
        Kind::SnackBar => material::snack_bar(component, indent),
        Kind::ListView => data::list_view(component, indent, ctx),
        Kind::Image => basic::image(component, indent, ctx),
        Kind::Table => data::table(component, indent, ctx),
        Kind::Select => input::select(component, indent, ctx),
        Kind::Unknown(tag) => {
            let pad = " ".repeat(indent);
            format!(
                "{pad}const Text('Unsupported component: {}')",
                crate::style::dart_string(tag)
            )
        }
    }
}
