//! Generators for layout and structural widgets.

use super::{generate_widget, Axis, GenCtx};
use crate::defaults;
use crate::document::Component;
use crate::style::{dart_double, dart_string, flutter_color};

pub(super) fn container(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    let width = ctx.dim(
        c.width.unwrap_or(defaults::CONTAINER.width),
        Axis::Horizontal,
    );
    let height = ctx.dim(
        c.height.unwrap_or(defaults::CONTAINER.height),
        Axis::Vertical,
    );
    let bg_color = flutter_color(Some(&c.props.str_or("bgColor", "#e3f2fd")));
    let border_radius = dart_double(c.props.number_or("borderRadius", 0.0));

    let child = if !c.children.is_empty() {
        let mut items = String::new();
        for nested in &c.children {
            items.push_str(&generate_widget(nested, indent + 6, ctx));
            items.push_str(",\n");
        }
        format!(
            "Column(
{pad}    mainAxisAlignment: MainAxisAlignment.center,
{pad}    children: [
{items}{pad}    ],
{pad}  )"
        )
    } else if let Some(content) = c.props.non_empty_str("content") {
        format!(
            "const Center(
{pad}    child: Text('{}'),
{pad}  )",
            dart_string(content)
        )
    } else {
        "null".to_string()
    };

    format!(
        "{pad}Container(
{pad}  width: {width},
{pad}  height: {height},
{pad}  padding: const EdgeInsets.all(10.0),
{pad}  decoration: BoxDecoration(
{pad}    color: {bg_color},
{pad}    borderRadius: BorderRadius.circular({border_radius}),
{pad}    border: Border.all(
{pad}      color: Colors.blue,
{pad}      width: 1.0,
{pad}      style: BorderStyle.solid,
{pad}    ),
{pad}  ),
{pad}  child: {child},
{pad})"
    )
}

pub(super) fn column(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    linear(c, indent, ctx, "Column", "MainAxisAlignment.center", defaults::COLUMN)
}

pub(super) fn row(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    linear(c, indent, ctx, "Row", "MainAxisAlignment.spaceEvenly", defaults::ROW)
}

/// Shared body for the column/row generators, which differ only in the
/// flex widget and its alignment.
fn linear(
    c: &Component,
    indent: usize,
    ctx: GenCtx<'_>,
    flex: &str,
    alignment: &str,
    size: defaults::SizeDefaults,
) -> String {
    let pad = " ".repeat(indent);
    let items = c
        .props
        .string_list("items")
        .filter(|items| !items.is_empty())
        .unwrap_or_else(|| vec!["Item 1".into(), "Item 2".into(), "Item 3".into()]);
    let width = ctx.dim(c.width.unwrap_or(size.width), Axis::Horizontal);
    let height = ctx.dim(c.height.unwrap_or(size.height), Axis::Vertical);
    let bg_color = flutter_color(c.props.str("bgColor"));

    let mut children = String::new();
    for item in &items {
        children.push_str(&format!("{pad}    Text('{}'),\n", dart_string(item)));
    }

    format!(
        "{pad}Container(
{pad}  width: {width},
{pad}  height: {height},
{pad}  color: {bg_color},
{pad}  child: {flex}(
{pad}    mainAxisAlignment: {alignment},
{pad}    children: [
{children}{pad}    ],
{pad}  ),
{pad})"
    )
}

pub(super) fn stack(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    let content = dart_string(&c.props.str_or("content", "Stack"));
    let width = ctx.dim(c.width.unwrap_or(defaults::STACK.width), Axis::Horizontal);
    let height = ctx.dim(c.height.unwrap_or(defaults::STACK.height), Axis::Vertical);
    let bg_color = flutter_color(c.props.str("bgColor"));

    format!(
        "{pad}Container(
{pad}  width: {width},
{pad}  height: {height},
{pad}  color: {bg_color},
{pad}  child: Stack(
{pad}    children: [
{pad}      Center(
{pad}        child: Text('{content}'),
{pad}      ),
{pad}    ],
{pad}  ),
{pad})"
    )
}

pub(super) fn padding(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let content = dart_string(&c.props.str_or("content", "Padded Content"));
    let top = dart_double(c.props.number_or("paddingTop", 16.0));
    let right = dart_double(c.props.number_or("paddingRight", 16.0));
    let bottom = dart_double(c.props.number_or("paddingBottom", 16.0));
    let left = dart_double(c.props.number_or("paddingLeft", 16.0));

    format!(
        "{pad}Padding(
{pad}  padding: EdgeInsets.fromLTRB({left}, {top}, {right}, {bottom}),
{pad}  child: Text('{content}'),
{pad})"
    )
}

pub(super) fn center(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let content = dart_string(&c.props.str_or("content", "Centered Content"));

    format!(
        "{pad}Center(
{pad}  child: Text('{content}'),
{pad})"
    )
}

pub(super) fn expanded(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let content = dart_string(&c.props.str_or("content", "Expanded Content"));

    format!(
        "{pad}Expanded(
{pad}  child: Container(
{pad}    color: Colors.blue.shade50,
{pad}    child: Center(
{pad}      child: Text('{content}'),
{pad}    ),
{pad}  ),
{pad})"
    )
}

pub(super) fn sized_box(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    let width = ctx.dim(
        c.width.unwrap_or(defaults::SIZED_BOX.width),
        Axis::Horizontal,
    );
    let height = ctx.dim(
        c.height.unwrap_or(defaults::SIZED_BOX.height),
        Axis::Vertical,
    );

    format!(
        "{pad}SizedBox(
{pad}  width: {width},
{pad}  height: {height},
{pad})"
    )
}

#[cfg(test)]
mod tests {
    use super::super::{ControllerTable, GenCtx};
    use crate::document::Component;
    use crate::widgets::generate_widget;
    use serde_json::json;

    fn render(value: serde_json::Value) -> String {
        let c = Component::from_value("id", &value);
        let controllers = ControllerTable::empty();
        generate_widget(
            &c,
            0,
            GenCtx {
                scale: None,
                controllers: &controllers,
            },
        )
    }

    #[test]
    fn container_without_content_has_null_child() {
        let code = render(json!({ "type": "container" }));
        assert!(code.contains("child: null"));
        assert!(code.contains("color: Color(0xFFE3F2FD)"));
        assert!(code.contains("width: 200.0"));
        assert!(code.contains("height: 150.0"));
    }

    #[test]
    fn container_with_content_centers_it() {
        let code = render(json!({ "type": "container", "content": "Hello" }));
        assert!(code.contains("const Center("));
        assert!(code.contains("Text('Hello')"));
    }

    #[test]
    fn container_renders_nested_children() {
        let code = render(json!({
            "type": "container",
            "children": [
                { "id": "t", "type": "text", "content": "Nested" },
                { "id": "b", "type": "elevatedbutton", "text": "Go" }
            ]
        }));
        assert!(code.contains("child: Column("));
        assert!(code.contains("Text(\n"));
        assert!(code.contains("'Nested'"));
        assert!(code.contains("Text('Go')"));
    }

    #[test]
    fn column_lists_items_as_text_children() {
        let code = render(json!({ "type": "column", "items": ["A", "B"] }));
        assert!(code.contains("child: Column("));
        assert!(code.contains("Text('A'),"));
        assert!(code.contains("Text('B'),"));
        assert!(!code.contains("Item 1"));
    }

    #[test]
    fn row_defaults_to_three_placeholder_items() {
        let code = render(json!({ "type": "row" }));
        assert!(code.contains("MainAxisAlignment.spaceEvenly"));
        assert!(code.contains("Text('Item 1'),"));
        assert!(code.contains("Text('Item 3'),"));
    }

    #[test]
    fn padding_uses_per_side_values() {
        let code = render(json!({
            "type": "padding",
            "paddingLeft": 1,
            "paddingTop": 2,
            "paddingRight": 3,
            "paddingBottom": 4
        }));
        assert!(code.contains("EdgeInsets.fromLTRB(1.0, 2.0, 3.0, 4.0)"));
    }

    #[test]
    fn sized_box_is_an_empty_spacer() {
        let code = render(json!({ "type": "sizedbox" }));
        assert!(code.contains("SizedBox("));
        assert!(code.contains("width: 100.0"));
        assert!(!code.contains("child"));
    }
}
