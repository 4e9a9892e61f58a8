//! Generators for scrolling list and table widgets.

use super::{Axis, GenCtx};
use crate::defaults;
use crate::document::Component;
use crate::style::{dart_double, dart_string, flutter_color};
use serde_json::Value;

pub(super) fn list_view(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    let items = c
        .props
        .string_list("items")
        .filter(|items| !items.is_empty())
        .unwrap_or_else(|| {
            vec![
                "Item 1".into(),
                "Item 2".into(),
                "Item 3".into(),
                "Item 4".into(),
            ]
        });
    let width = ctx.dim(
        c.width.unwrap_or(defaults::LIST_VIEW.width),
        Axis::Horizontal,
    );
    let height = ctx.dim(
        c.height.unwrap_or(defaults::LIST_VIEW.height),
        Axis::Vertical,
    );
    let horizontal = c.props.str("scrollDirection") == Some("horizontal");
    let scroll_direction = if horizontal {
        "Axis.horizontal"
    } else {
        "Axis.vertical"
    };
    let bg_color = flutter_color(Some(&c.props.str_or("bgColor", "#ffffff")));
    let spacing = dart_double(c.props.number_or("spacing", 4.0));
    let card_width = ctx.dim(c.props.number_or("cardWidth", 150.0), Axis::Horizontal);
    // Card height is auto unless set explicitly.
    let card_height = c
        .props
        .number("cardHeight")
        .filter(|h| *h != 0.0)
        .map(|h| ctx.dim(h, Axis::Vertical));
    let show_scrollbar = c.props.not_false("showScrollbar");

    let padding_top = dart_double(c.props.number_or("paddingTop", 8.0));
    let padding_right = dart_double(c.props.number_or("paddingRight", 8.0));
    let padding_bottom = dart_double(c.props.number_or("paddingBottom", 8.0));
    let padding_left = dart_double(c.props.number_or("paddingLeft", 8.0));
    let margin_top = dart_double(c.props.number_or("marginTop", 0.0));
    let margin_right = dart_double(c.props.number_or("marginRight", 0.0));
    let margin_bottom = dart_double(c.props.number_or("marginBottom", 0.0));
    let margin_left = dart_double(c.props.number_or("marginLeft", 0.0));

    let mut items_code = String::new();
    for item in &items {
        let label = dart_string(item);
        let margin_side = if horizontal { "right" } else { "bottom" };
        let height_line = match &card_height {
            Some(h) => format!("{pad}          height: {h},\n"),
            None => String::new(),
        };
        let content = if horizontal {
            format!(
                "{pad}          child: Column(
{pad}            mainAxisAlignment: MainAxisAlignment.center,
{pad}            children: [
{pad}              Text(
{pad}                '{label}',
{pad}                textAlign: TextAlign.center,
{pad}                style: const TextStyle(fontWeight: FontWeight.w500),
{pad}              ),
{pad}            ],
{pad}          ),"
            )
        } else {
            format!(
                "{pad}          child: Text(
{pad}            '{label}',
{pad}            style: const TextStyle(fontWeight: FontWeight.w500),
{pad}          ),"
            )
        };

        items_code.push_str(&format!(
            "{pad}      Card(
{pad}        elevation: 2.0,
{pad}        margin: EdgeInsets.only({margin_side}: {spacing}),
{pad}        shape: RoundedRectangleBorder(
{pad}          borderRadius: BorderRadius.circular(8.0),
{pad}        ),
{pad}        child: Container(
{pad}          width: {card_width},
{height_line}{pad}          constraints: BoxConstraints(
{pad}            minWidth: 100.0,
{pad}            minHeight: 20.0,
{pad}          ),
{pad}          padding: const EdgeInsets.all(12),
{pad}          alignment: Alignment.center,
{content}
{pad}        ),
{pad}      ),\n"
        ));
    }

    let title_code = match c.props.non_empty_str("title") {
        Some(title) => {
            let title = dart_string(title);
            format!(
                "{pad}      Padding(
{pad}        padding: EdgeInsets.fromLTRB({padding_left}, {padding_top}, {padding_right}, 4.0),
{pad}        child: Text(
{pad}          '{title}',
{pad}          style: const TextStyle(fontWeight: FontWeight.bold, fontSize: 16),
{pad}        ),
{pad}      ),\n"
            )
        }
        None => String::new(),
    };

    let scroller = if show_scrollbar {
        let controller = ctx.controllers.get(&c.id).unwrap_or("_scrollController");
        format!(
            "Scrollbar(
{pad}          thickness: 6.0,
{pad}          radius: const Radius.circular(8.0),
{pad}          thumbVisibility: true,
{pad}          controller: {controller},
{pad}          child: ListView(
{pad}            controller: {controller},
{pad}            scrollDirection: {scroll_direction},
{pad}            physics: const BouncingScrollPhysics(),
{pad}            padding: EdgeInsets.fromLTRB({padding_left}, 4.0, {padding_right}, {padding_bottom}),
{pad}            children: [
{items_code}{pad}            ],
{pad}          ),
{pad}        ),"
        )
    } else {
        format!(
            "ListView(
{pad}          scrollDirection: {scroll_direction},
{pad}          physics: const BouncingScrollPhysics(),
{pad}          padding: EdgeInsets.fromLTRB({padding_left}, 4.0, {padding_right}, {padding_bottom}),
{pad}          children: [
{items_code}{pad}          ],
{pad}        ),"
        )
    };

    format!(
        "{pad}Container(
{pad}  width: {width},
{pad}  height: {height},
{pad}  margin: EdgeInsets.fromLTRB({margin_left}, {margin_top}, {margin_right}, {margin_bottom}),
{pad}  decoration: BoxDecoration(
{pad}    color: {bg_color},
{pad}    borderRadius: BorderRadius.circular(4),
{pad}    border: Border.all(color: Colors.grey.shade300),
{pad}  ),
{pad}  clipBehavior: Clip.antiAlias,
{pad}  child: Column(
{pad}    crossAxisAlignment: CrossAxisAlignment.start,
{pad}    children: [
{title_code}{pad}      Expanded(
{pad}        child: {scroller}
{pad}      ),
{pad}    ],
{pad}  ),
{pad})"
    )
}

/// Render a table cell's raw JSON value as display text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

pub(super) fn table(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    let title = dart_string(&c.props.str_or("tableTitle", "Data Table"));
    let show_title = c.props.not_false("showTitle");
    let headers = c
        .props
        .string_list("headers")
        .filter(|headers| !headers.is_empty())
        .unwrap_or_else(|| vec!["Header 1".into(), "Header 2".into(), "Header 3".into()]);
    let rows: Vec<Vec<String>> = c
        .props
        .raw("rows")
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .map(|row| {
                    row.as_array()
                        .map(|cells| cells.iter().map(cell_text).collect())
                        .unwrap_or_default()
                })
                .collect()
        })
        .unwrap_or_else(|| {
            vec![
                vec!["Cell 1".into(), "Cell 2".into(), "Cell 3".into()],
                vec!["Cell 4".into(), "Cell 5".into(), "Cell 6".into()],
            ]
        });

    let bg_color = flutter_color(Some(&c.props.str_or("bgColor", "#ffffff")));
    let header_bg = flutter_color(Some(&c.props.str_or("headerBgColor", "#f5f5f5")));
    let text_color = flutter_color(Some(&c.props.str_or("textColor", "#000000")));

    // Width and height resolve inside a LayoutBuilder so the table can
    // shrink to the available space.
    let width = c.width.unwrap_or(defaults::TABLE.width);
    let height = c.height.unwrap_or(defaults::TABLE.height);
    let (scaled_width, scaled_height) = match ctx.scale {
        Some(_) => (
            format!("({})", ctx.dim(width, Axis::Horizontal)),
            format!("({})", ctx.dim(height, Axis::Vertical)),
        ),
        None => (dart_double(width), dart_double(height)),
    };
    let metric = |base: &str, axis: Axis| match ctx.scale {
        Some(scale) => format!(
            "{base} * {}",
            match axis {
                Axis::Horizontal => &scale.horizontal,
                Axis::Vertical => &scale.vertical,
            }
        ),
        None => base.to_string(),
    };
    let title_size = metric("18", Axis::Horizontal);
    let column_spacing = metric("20", Axis::Horizontal);
    let horizontal_margin = metric("10", Axis::Horizontal);
    let row_min_height = metric("48", Axis::Vertical);
    let row_max_height = metric("64", Axis::Vertical);

    let mut columns_code = String::new();
    for header in &headers {
        let header = dart_string(header);
        columns_code.push_str(&format!(
            "{pad}                      DataColumn(
{pad}                        label: Expanded(
{pad}                          child: Text(
{pad}                            '{header}',
{pad}                            style: TextStyle(
{pad}                              fontWeight: FontWeight.bold,
{pad}                              color: {text_color},
{pad}                            ),
{pad}                            overflow: TextOverflow.ellipsis,
{pad}                          ),
{pad}                        ),
{pad}                      ),\n"
        ));
    }

    let mut rows_code = String::new();
    for row in &rows {
        rows_code.push_str(&format!(
            "{pad}                      DataRow(
{pad}                        cells: [
"
        ));
        // Extra cells are dropped and short rows are padded so every
        // row matches the header count.
        for cell in row.iter().take(headers.len()) {
            let cell = dart_string(cell);
            rows_code.push_str(&format!(
                "{pad}                          DataCell(
{pad}                            Text(
{pad}                              '{cell}',
{pad}                              overflow: TextOverflow.ellipsis,
{pad}                            ),
{pad}                          ),\n"
            ));
        }
        for _ in row.len()..headers.len() {
            rows_code.push_str(&format!(
                "{pad}                          DataCell(Text('')),\n"
            ));
        }
        rows_code.push_str(&format!(
            "{pad}                        ],
{pad}                      ),\n"
        ));
    }

    let title_code = if show_title {
        format!(
            "{pad}          Padding(
{pad}            padding: const EdgeInsets.all(8.0),
{pad}            child: Text(
{pad}              '{title}',
{pad}              style: TextStyle(
{pad}                fontSize: {title_size},
{pad}                fontWeight: FontWeight.bold,
{pad}                color: {text_color},
{pad}              ),
{pad}            ),
{pad}          ),\n"
        )
    } else {
        String::new()
    };

    format!(
        "{pad}LayoutBuilder(
{pad}  builder: (context, constraints) {{
{pad}    final availableWidth = constraints.maxWidth;
{pad}    final availableHeight = constraints.maxHeight;
{pad}    final scaledWidth = {scaled_width};
{pad}    final scaledHeight = {scaled_height};
{pad}    final finalWidth = scaledWidth > availableWidth ? availableWidth : scaledWidth;
{pad}    final finalHeight = scaledHeight > availableHeight ? availableHeight : scaledHeight;
{pad}    final verticalController = ScrollController();
{pad}    final horizontalController = ScrollController();
{pad}    return Container(
{pad}      width: finalWidth,
{pad}      height: finalHeight,
{pad}      color: {bg_color},
{pad}      child: Column(
{pad}        crossAxisAlignment: CrossAxisAlignment.start,
{pad}        children: [
{title_code}{pad}          Expanded(
{pad}            child: Scrollbar(
{pad}              controller: verticalController,
{pad}              thumbVisibility: true,
{pad}              thickness: 8.0,
{pad}              radius: const Radius.circular(4.0),
{pad}              child: SingleChildScrollView(
{pad}                controller: verticalController,
{pad}                scrollDirection: Axis.vertical,
{pad}                child: Scrollbar(
{pad}                  controller: horizontalController,
{pad}                  thumbVisibility: true,
{pad}                  thickness: 8.0,
{pad}                  radius: const Radius.circular(4.0),
{pad}                  child: SingleChildScrollView(
{pad}                    controller: horizontalController,
{pad}                    scrollDirection: Axis.horizontal,
{pad}                    child: DataTable(
{pad}                      headingRowColor: MaterialStateProperty.all({header_bg}),
{pad}                      columnSpacing: {column_spacing},
{pad}                      horizontalMargin: {horizontal_margin},
{pad}                      dataRowMinHeight: {row_min_height},
{pad}                      dataRowMaxHeight: {row_max_height},
{pad}                      columns: [
{columns_code}{pad}                      ],
{pad}                      rows: [
{rows_code}{pad}                      ],
{pad}                    ),
{pad}                  ),
{pad}                ),
{pad}              ),
{pad}            ),
{pad}          ),
{pad}        ],
{pad}      ),
{pad}    );
{pad}  }},
{pad})"
    )
}
