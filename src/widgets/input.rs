//! Generators for form and input widgets.

use super::{Axis, GenCtx};
use crate::defaults;
use crate::document::Component;
use crate::style::{dart_double, dart_string, flutter_color};
use serde_json::Value;

pub(super) fn text_field(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    let label = c
        .props
        .non_empty_str("label")
        .or_else(|| c.props.non_empty_str("labelText"))
        .unwrap_or("Label");
    let label = dart_string(label);
    let placeholder = dart_string(&c.props.str_or("placeholder", "Enter text..."));
    let width = ctx.dim(
        c.width.unwrap_or(defaults::TEXT_FIELD.width),
        Axis::Horizontal,
    );
    let height = ctx.dim(
        c.height.unwrap_or(defaults::TEXT_FIELD.height),
        Axis::Vertical,
    );
    let bg_color = flutter_color(Some(&c.props.str_or("bgColor", "#ffffff")));
    let text_color = flutter_color(Some(&c.props.str_or("textColor", "#000000")));
    let label_color = flutter_color(Some(&c.props.str_or("labelColor", "#2196F3")));
    let label_size = dart_double(c.props.number_or("labelSize", 12.0));

    format!(
        "{pad}Container(
{pad}  width: {width},
{pad}  height: {height},
{pad}  padding: const EdgeInsets.all(10.0),
{pad}  child: Column(
{pad}    crossAxisAlignment: CrossAxisAlignment.start,
{pad}    children: [
{pad}      Text(
{pad}        '{label}',
{pad}        style: TextStyle(
{pad}          fontSize: {label_size},
{pad}          color: {label_color},
{pad}        ),
{pad}      ),
{pad}      const SizedBox(height: 5.0),
{pad}      Container(
{pad}        decoration: BoxDecoration(
{pad}          color: {bg_color},
{pad}          border: Border.all(color: Color(0xFFCCCCCC)),
{pad}          borderRadius: BorderRadius.circular(4.0),
{pad}        ),
{pad}        child: TextField(
{pad}          style: TextStyle(
{pad}            color: {text_color},
{pad}          ),
{pad}          decoration: InputDecoration(
{pad}            hintText: '{placeholder}',
{pad}            contentPadding: const EdgeInsets.all(8.0),
{pad}            border: InputBorder.none,
{pad}          ),
{pad}        ),
{pad}      ),
{pad}    ],
{pad}  ),
{pad})"
    )
}

pub(super) fn switch_toggle(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let is_active = c.props.bool_or("isActive", false);

    format!(
        "{pad}Switch(
{pad}  value: {is_active},
{pad}  onChanged: (value) {{}},
{pad})"
    )
}

pub(super) fn slider(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let value = dart_double(c.props.number_or("value", 50.0));

    format!(
        "{pad}Slider(
{pad}  value: {value},
{pad}  min: 0,
{pad}  max: 100,
{pad}  onChanged: (value) {{}},
{pad})"
    )
}

pub(super) fn checkbox(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    // Anything other than the default 'single' mode renders the
    // multi-item form.
    let multiple = c
        .props
        .non_empty_str("mode")
        .is_some_and(|mode| mode != "single");
    let size = if multiple {
        defaults::CHECKBOX_MULTIPLE
    } else {
        defaults::CHECKBOX_SINGLE
    };
    let width = ctx.dim(c.width.unwrap_or(size.width), Axis::Horizontal);
    let height = ctx.dim(c.height.unwrap_or(size.height), Axis::Vertical);
    let bg_color = flutter_color(c.props.str("bgColor"));
    let text_color = flutter_color(Some(&c.props.str_or("textColor", "#000000")));

    if !multiple {
        let is_checked = c.props.bool_or("isChecked", false);
        let label = dart_string(&c.props.str_or("label", "Checkbox"));

        return format!(
            "{pad}Container(
{pad}  width: {width},
{pad}  height: {height},
{pad}  padding: const EdgeInsets.all(6.0),
{pad}  decoration: BoxDecoration(
{pad}    color: {bg_color},
{pad}    borderRadius: BorderRadius.circular(8.0),
{pad}    border: Border.all(color: Colors.grey.shade300, width: 0.5),
{pad}  ),
{pad}  child: Row(
{pad}    children: [
{pad}      SizedBox(
{pad}        width: 16.0,
{pad}        height: 16.0,
{pad}        child: Checkbox(
{pad}          value: {is_checked},
{pad}          onChanged: (value) {{}},
{pad}          activeColor: Colors.blue,
{pad}          materialTapTargetSize: MaterialTapTargetSize.shrinkWrap,
{pad}        ),
{pad}      ),
{pad}      const SizedBox(width: 6.0),
{pad}      Text(
{pad}        '{label}',
{pad}        style: TextStyle(
{pad}          fontSize: 13.0,
{pad}          color: {text_color},
{pad}        ),
{pad}      ),
{pad}    ],
{pad}  ),
{pad})"
        );
    }

    let items: Vec<&Value> = c
        .props
        .raw("items")
        .and_then(Value::as_array)
        .map(|a| a.iter().collect())
        .unwrap_or_default();

    let mut rows = String::new();
    if items.is_empty() {
        rows.push_str(&format!(
            "{pad}      Text(
{pad}        'No checkboxes added',
{pad}        style: TextStyle(
{pad}          fontSize: 16.0,
{pad}          color: Colors.grey,
{pad}          fontStyle: FontStyle.italic,
{pad}        ),
{pad}      ),\n"
        ));
    } else {
        for (index, item) in items.iter().enumerate() {
            let checked = item
                .get("checked")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            let fallback = format!("Checkbox {}", index + 1);
            let label = item
                .get("label")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(&fallback);
            let label = dart_string(label);

            rows.push_str(&format!(
                "{pad}      Row(
{pad}        children: [
{pad}          SizedBox(
{pad}            width: 16.0,
{pad}            height: 16.0,
{pad}            child: Checkbox(
{pad}              value: {checked},
{pad}              onChanged: (value) {{}},
{pad}              activeColor: Colors.blue,
{pad}              materialTapTargetSize: MaterialTapTargetSize.shrinkWrap,
{pad}            ),
{pad}          ),
{pad}          const SizedBox(width: 6.0),
{pad}          Text(
{pad}            '{label}',
{pad}            style: TextStyle(
{pad}              fontSize: 13.0,
{pad}              color: {text_color},
{pad}            ),
{pad}          ),
{pad}        ],
{pad}      ),\n"
            ));
        }
    }

    format!(
        "{pad}Container(
{pad}  width: {width},
{pad}  height: {height},
{pad}  padding: const EdgeInsets.all(8.0),
{pad}  decoration: BoxDecoration(
{pad}    color: {bg_color},
{pad}    borderRadius: BorderRadius.circular(8.0),
{pad}    border: Border.all(color: Colors.grey.shade300, width: 0.5),
{pad}  ),
{pad}  child: Column(
{pad}    crossAxisAlignment: CrossAxisAlignment.start,
{pad}    children: [
{rows}{pad}    ],
{pad}  ),
{pad})"
    )
}

/// One parsed entry of a radio group.
struct RadioItem {
    value: String,
    label: String,
    selected: bool,
}

/// Read the component's radio items.
///
/// `None` means the property is absent (the generator substitutes a
/// two-option sample group); an explicitly empty array collapses to the
/// single-button form.
fn radio_items(c: &Component) -> Option<Vec<RadioItem>> {
    let array = c.props.raw("radioItems")?.as_array()?;
    Some(
        array
            .iter()
            .enumerate()
            .map(|(index, item)| RadioItem {
                value: item
                    .get("value")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("option{}", index + 1)),
                label: item
                    .get("label")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Option {}", index + 1)),
                selected: item
                    .get("isSelected")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            })
            .collect(),
    )
}

pub(super) fn radio(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    let text_color = flutter_color(Some(&c.props.str_or("textColor", "#000000")));
    let active_color = flutter_color(Some(&c.props.str_or("activeColor", "#2196F3")));
    let inactive_color = flutter_color(Some(&c.props.str_or("inactiveColor", "#9E9E9E")));
    let font_size = dart_double(c.props.number_or("fontSize", 14.0));
    let font_weight = if c.props.str("fontWeight") == Some("bold") {
        "FontWeight.bold"
    } else {
        "FontWeight.normal"
    };

    let items = radio_items(c).unwrap_or_else(|| {
        vec![
            RadioItem {
                value: "option1".into(),
                label: "Option 1".into(),
                selected: true,
            },
            RadioItem {
                value: "option2".into(),
                label: "Option 2".into(),
                selected: false,
            },
        ]
    });

    if items.is_empty() {
        // Single-button form: selection is a plain boolean.
        let is_selected = c.props.bool_or("isSelected", false);
        let label = dart_string(&c.props.str_or("label", "Radio Option"));

        return format!(
            "{pad}Row(
{pad}  children: [
{pad}    Radio<bool>(
{pad}      value: true,
{pad}      groupValue: {is_selected},
{pad}      activeColor: {active_color},
{pad}      fillColor: MaterialStateProperty.resolveWith<Color>((Set<MaterialState> states) {{
{pad}        if (states.contains(MaterialState.selected)) {{
{pad}          return {active_color};
{pad}        }}
{pad}        return {inactive_color};
{pad}      }}),
{pad}      onChanged: (value) {{}},
{pad}    ),
{pad}    SizedBox(width: 8),
{pad}    Text(
{pad}      '{label}',
{pad}      style: TextStyle(
{pad}        color: {text_color},
{pad}        fontSize: {font_size},
{pad}        fontWeight: {font_weight},
{pad}      ),
{pad}    ),
{pad}  ],
{pad})"
        );
    }

    let width = ctx.dim(c.width.unwrap_or(defaults::RADIO.width), Axis::Horizontal);
    let height = ctx.dim(c.height.unwrap_or(defaults::RADIO.height), Axis::Vertical);
    let background = flutter_color(c.props.str("backgroundColor"));
    let padding = dart_double(c.props.number_or("padding", 8.0));
    let border_radius = dart_double(c.props.number_or("borderRadius", 4.0));
    let controller = ctx.controllers.get(&c.id).unwrap_or("_radioScrollController");

    let border = match c.props.number("borderWidth").filter(|w| *w != 0.0) {
        Some(border_width) => {
            let border_color = flutter_color(Some(&c.props.str_or("borderColor", "#9E9E9E")));
            let border_width = dart_double(border_width);
            format!(
                "Border.all(
{pad}      color: {border_color},
{pad}      width: {border_width},
{pad}    )"
            )
        }
        None => "null".to_string(),
    };

    let group_label = if c.props.bool_or("showGroupLabel", false) {
        let label = dart_string(&c.props.str_or("groupLabel", "Radio Group"));
        let label_size = dart_double(c.props.number_or("groupLabelFontSize", 16.0));
        format!(
            "{pad}      Text(
{pad}        '{label}',
{pad}        style: TextStyle(
{pad}          color: {text_color},
{pad}          fontSize: {label_size},
{pad}          fontWeight: FontWeight.bold,
{pad}        ),
{pad}      ),
{pad}      SizedBox(height: 8),\n"
        )
    } else {
        String::new()
    };

    // Each button carries its own selection flag, so the group can show
    // more than one selected item. That mirrors the canvas model.
    let mut buttons = String::new();
    for item in &items {
        let value = dart_string(&item.value);
        let label = dart_string(&item.label);
        let group_value = if item.selected {
            format!("'{value}'")
        } else {
            "null".to_string()
        };

        buttons.push_str(&format!(
            "{pad}              Row(
{pad}                children: [
{pad}                  Radio<String>(
{pad}                    value: '{value}',
{pad}                    groupValue: {group_value},
{pad}                    activeColor: {active_color},
{pad}                    fillColor: MaterialStateProperty.resolveWith<Color>((Set<MaterialState> states) {{
{pad}                      if (states.contains(MaterialState.selected)) {{
{pad}                        return {active_color};
{pad}                      }}
{pad}                      return {inactive_color};
{pad}                    }}),
{pad}                    onChanged: (value) {{}},
{pad}                  ),
{pad}                  SizedBox(width: 8),
{pad}                  Text(
{pad}                    '{label}',
{pad}                    style: TextStyle(
{pad}                      color: {text_color},
{pad}                      fontSize: {font_size},
{pad}                      fontWeight: {font_weight},
{pad}                    ),
{pad}                  ),
{pad}                ],
{pad}              ),\n"
        ));
    }

    format!(
        "{pad}Container(
{pad}  width: {width},
{pad}  height: {height},
{pad}  padding: EdgeInsets.all({padding}),
{pad}  decoration: BoxDecoration(
{pad}    color: {background},
{pad}    borderRadius: BorderRadius.circular({border_radius}),
{pad}    border: {border},
{pad}  ),
{pad}  child: Column(
{pad}    crossAxisAlignment: CrossAxisAlignment.start,
{pad}    children: [
{group_label}{pad}      Expanded(
{pad}        child: Scrollbar(
{pad}          thumbVisibility: true,
{pad}          thickness: 6.0,
{pad}          radius: const Radius.circular(4.0),
{pad}          controller: {controller},
{pad}          child: SingleChildScrollView(
{pad}            controller: {controller},
{pad}            physics: const BouncingScrollPhysics(),
{pad}            child: Column(
{pad}              crossAxisAlignment: CrossAxisAlignment.start,
{pad}              children: [
{buttons}{pad}              ],
{pad}            ),
{pad}          ),
{pad}        ),
{pad}      ),
{pad}    ],
{pad}  ),
{pad})"
    )
}

pub(super) fn select(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    let label = dart_string(&c.props.str_or("label", "Select"));
    let placeholder = dart_string(&c.props.str_or("placeholder", "Select an option"));
    let options = c
        .props
        .string_list("options")
        .filter(|options| !options.is_empty())
        .unwrap_or_else(|| vec!["Option 1".into(), "Option 2".into(), "Option 3".into()]);
    let width = ctx.dim(c.width.unwrap_or(defaults::SELECT.width), Axis::Horizontal);
    let height = ctx.dim(c.height.unwrap_or(defaults::SELECT.height), Axis::Vertical);
    let bg_color = flutter_color(Some(&c.props.str_or("bgColor", "#ffffff")));
    let text_color = flutter_color(Some(&c.props.str_or("textColor", "#000000")));

    let mut items = String::new();
    for option in &options {
        let option = dart_string(option);
        items.push_str(&format!(
            "{pad}      DropdownMenuItem<String>(
{pad}        value: '{option}',
{pad}        child: Text('{option}'),
{pad}      ),\n"
        ));
    }

    format!(
        "{pad}Container(
{pad}  width: {width},
{pad}  height: {height},
{pad}  padding: const EdgeInsets.all(8.0),
{pad}  decoration: BoxDecoration(
{pad}    color: {bg_color},
{pad}    borderRadius: BorderRadius.circular(8.0),
{pad}    border: Border.all(color: Colors.grey.shade300),
{pad}  ),
{pad}  child: Column(
{pad}    crossAxisAlignment: CrossAxisAlignment.start,
{pad}    children: [
{pad}      Padding(
{pad}        padding: const EdgeInsets.only(bottom: 8.0),
{pad}        child: Text(
{pad}          '{label}',
{pad}          style: TextStyle(
{pad}            fontSize: 14.0,
{pad}            color: {text_color},
{pad}          ),
{pad}        ),
{pad}      ),
{pad}      Expanded(
{pad}        child: DropdownButtonFormField<String>(
{pad}          decoration: InputDecoration(
{pad}            contentPadding: const EdgeInsets.symmetric(horizontal: 12.0, vertical: 8.0),
{pad}            border: OutlineInputBorder(
{pad}              borderRadius: BorderRadius.circular(4.0),
{pad}            ),
{pad}            filled: true,
{pad}            fillColor: Colors.white,
{pad}          ),
{pad}          hint: Text('{placeholder}'),
{pad}          isExpanded: true,
{pad}          icon: const Icon(Icons.arrow_drop_down),
{pad}          style: TextStyle(
{pad}            color: {text_color},
{pad}            fontSize: 16.0,
{pad}          ),
{pad}          onChanged: (String? value) {{}},
{pad}          items: [
{items}{pad}          ],
{pad}        ),
{pad}      ),
{pad}    ],
{pad}  ),
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
    fn text_field_prefers_label_over_label_text() {
        let code = render(json!({ "type": "textfield", "labelText": "Email" }));
        assert!(code.contains("'Email'"));
        let code = render(json!({
            "type": "textfield",
            "label": "Name",
            "labelText": "ignored"
        }));
        assert!(code.contains("'Name'"));
        assert!(!code.contains("ignored"));
    }

    #[test]
    fn single_checkbox_reflects_checked_state() {
        let code = render(json!({ "type": "checkbox", "isChecked": true, "label": "Agree" }));
        assert!(code.contains("value: true"));
        assert!(code.contains("Text(\n        'Agree'"));
        assert!(code.contains("height: 50.0"));
    }

    #[test]
    fn multiple_checkboxes_without_items_show_placeholder() {
        let code = render(json!({ "type": "checkbox", "mode": "multiple" }));
        assert!(code.contains("No checkboxes added"));
        assert!(code.contains("height: 200.0"));
    }

    #[test]
    fn only_single_mode_renders_the_single_checkbox() {
        // The stored mode defaults to 'single'; any other value means
        // the multi-item form.
        let single = render(json!({ "type": "checkbox", "mode": "single" }));
        assert!(single.contains("height: 50.0"));
        assert!(!single.contains("No checkboxes added"));

        let odd = render(json!({ "type": "checkbox", "mode": "weird" }));
        assert!(odd.contains("No checkboxes added"));
        assert!(odd.contains("height: 200.0"));

        let blank = render(json!({ "type": "checkbox", "mode": "" }));
        assert!(blank.contains("height: 50.0"));
    }

    #[test]
    fn radio_group_marks_each_selected_item() {
        let code = render(json!({
            "type": "radio",
            "radioItems": [
                { "value": "a", "label": "A", "isSelected": true },
                { "value": "b", "label": "B" },
                { "value": "c", "label": "C", "isSelected": true }
            ]
        }));
        assert!(code.contains("value: 'a',\n                    groupValue: 'a'"));
        assert!(code.contains("value: 'b',\n                    groupValue: null"));
        assert!(code.contains("value: 'c',\n                    groupValue: 'c'"));
    }

    #[test]
    fn radio_uses_hoisted_controller_when_assigned() {
        let c = Component::from_value(
            "r1",
            &json!({
                "id": "r1",
                "type": "radio",
                "radioItems": [{ "value": "a", "label": "A" }]
            }),
        );
        let components = vec![c.clone()];
        let table = ControllerTable::for_components(components.iter());
        let code = generate_widget(
            &c,
            0,
            GenCtx {
                scale: None,
                controllers: &table,
            },
        );
        assert!(code.contains("controller: _radioScrollController_r1"));
    }

    #[test]
    fn empty_radio_items_fall_back_to_single_button() {
        let code = render(json!({ "type": "radio", "radioItems": [], "isSelected": true }));
        assert!(code.contains("Radio<bool>"));
        assert!(code.contains("groupValue: true"));
        assert!(!code.contains("Scrollbar"));
    }

    #[test]
    fn absent_radio_items_render_the_sample_group() {
        let code = render(json!({ "type": "radio" }));
        assert!(code.contains("Radio<String>"));
        assert!(code.contains("'Option 1'"));
        assert!(code.contains("'Option 2'"));
    }

    #[test]
    fn radio_border_is_null_without_width() {
        let code = render(json!({ "type": "radio" }));
        assert!(code.contains("border: null"));
        let code = render(json!({ "type": "radio", "borderWidth": 2 }));
        assert!(code.contains("border: Border.all("));
        assert!(code.contains("width: 2.0"));
    }

    #[test]
    fn select_lists_every_option_once_per_item() {
        let code = render(json!({ "type": "select", "options": ["Red", "Green"] }));
        assert!(code.contains("value: 'Red'"));
        assert!(code.contains("Text('Green')"));
        assert!(!code.contains("Option 1"));
    }

    #[test]
    fn slider_value_defaults_to_midpoint() {
        let code = render(json!({ "type": "slider" }));
        assert!(code.contains("value: 50.0"));
    }
}
