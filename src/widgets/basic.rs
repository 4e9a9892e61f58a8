//! Generators for text, media, and simple display widgets.

use super::{Axis, GenCtx};
use crate::defaults;
use crate::document::Component;
use crate::style::{dart_double, dart_string, flutter_color};

pub(super) fn text(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    let content = dart_string(&c.props.str_or("content", "Text content"));
    let width = ctx.dim(c.width.unwrap_or(defaults::TEXT.width), Axis::Horizontal);
    let height = ctx.dim(c.height.unwrap_or(defaults::TEXT.height), Axis::Vertical);
    let text_color = flutter_color(Some(&c.props.str_or("textColor", "#000000")));
    let bg_color = flutter_color(c.props.str("bgColor"));

    let font_size = font_size_for(c);
    let text_align = match c.props.str("textAlign") {
        Some("center") => "TextAlign.center",
        Some("right") => "TextAlign.right",
        Some("justify") => "TextAlign.justify",
        _ => "TextAlign.left",
    };
    // h1/h2/h3 styles are always bold regardless of the weight property.
    let bold = matches!(c.props.str("textStyle"), Some("h1" | "h2" | "h3"))
        || c.props.str("fontWeight") == Some("bold");
    let font_weight = if bold {
        "FontWeight.bold"
    } else {
        "FontWeight.normal"
    };

    format!(
        "{pad}Container(
{pad}  width: {width},
{pad}  height: {height},
{pad}  color: {bg_color},
{pad}  alignment: Alignment.center,
{pad}  child: Text(
{pad}    '{content}',
{pad}    textAlign: {text_align},
{pad}    style: TextStyle(
{pad}      fontSize: {font_size},
{pad}      fontWeight: {font_weight},
{pad}      color: {text_color},
{pad}    ),
{pad}  ),
{pad})"
    )
}

/// Resolve the text font size from the preset/custom pair.
fn font_size_for(c: &Component) -> String {
    let size = match c.props.str("fontSizeType") {
        Some("custom") => c.props.number("fontSizePx").unwrap_or(16.0),
        Some("preset") => match c.props.str("fontSize") {
            Some("small") => 12.0,
            Some("large") => 20.0,
            Some("xlarge") => 24.0,
            _ => 16.0,
        },
        _ => 16.0,
    };
    dart_double(size)
}

pub(super) fn elevated_button(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    let text = dart_string(&c.props.str_or("text", "Button"));
    let width = ctx.dim(
        c.width.unwrap_or(defaults::ELEVATED_BUTTON.width),
        Axis::Horizontal,
    );
    let height = ctx.dim(
        c.height.unwrap_or(defaults::ELEVATED_BUTTON.height),
        Axis::Vertical,
    );
    let bg_color = flutter_color(Some(&c.props.str_or("bgColor", "#2196F3")));
    let text_color = flutter_color(Some(&c.props.str_or("textColor", "#FFFFFF")));

    format!(
        "{pad}SizedBox(
{pad}  width: {width},
{pad}  height: {height},
{pad}  child: ElevatedButton(
{pad}    onPressed: () {{}},
{pad}    style: ElevatedButton.styleFrom(
{pad}      backgroundColor: {bg_color},
{pad}      foregroundColor: {text_color},
{pad}    ),
{pad}    child: Text('{text}'),
{pad}  ),
{pad})"
    )
}

pub(super) fn circle_avatar(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    let initials = dart_string(&c.props.str_or("initials", "AB"));
    let bg_color = flutter_color(Some(&c.props.str_or("bgColor", "#2196F3")));
    // A circle has one radius; it scales with the horizontal factor.
    let radius = ctx.dim(
        c.props.number_or("radius", defaults::CIRCLE_AVATAR_RADIUS),
        Axis::Horizontal,
    );

    format!(
        "{pad}CircleAvatar(
{pad}  backgroundColor: {bg_color},
{pad}  radius: {radius},
{pad}  child: Text(
{pad}    '{initials}',
{pad}    style: const TextStyle(
{pad}      color: Colors.white,
{pad}      fontWeight: FontWeight.bold,
{pad}    ),
{pad}  ),
{pad})"
    )
}

pub(super) fn icon(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let flutter_icon = match c.props.str("icon") {
        Some("♥") => "Icons.favorite",
        Some("✓") => "Icons.check",
        Some("✉") => "Icons.email",
        Some("📱") => "Icons.phone",
        Some("🔍") => "Icons.search",
        Some("⚙") => "Icons.settings",
        Some("+") => "Icons.add",
        Some("×") => "Icons.close",
        Some("⟲") => "Icons.refresh",
        Some("↑") => "Icons.arrow_upward",
        Some("↓") => "Icons.arrow_downward",
        Some("←") => "Icons.arrow_back",
        Some("→") => "Icons.arrow_forward",
        Some("⋮") => "Icons.more_vert",
        Some("≡") => "Icons.menu",
        _ => "Icons.star",
    };

    format!(
        "{pad}Icon(
{pad}  {flutter_icon},
{pad}  size: 24,
{pad}  color: Colors.blue,
{pad})"
    )
}

pub(super) fn card(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let title = dart_string(&c.props.str_or("title", "Card Title"));
    let content = dart_string(&c.props.str_or(
        "content",
        "Card content goes here. This is a sample text.",
    ));

    format!(
        "{pad}Card(
{pad}  child: Padding(
{pad}    padding: const EdgeInsets.all(16.0),
{pad}    child: Column(
{pad}      crossAxisAlignment: CrossAxisAlignment.start,
{pad}      children: [
{pad}        Text(
{pad}          '{title}',
{pad}          style: const TextStyle(
{pad}            fontSize: 18,
{pad}            fontWeight: FontWeight.bold,
{pad}          ),
{pad}        ),
{pad}        const SizedBox(height: 8),
{pad}        Text('{content}'),
{pad}      ],
{pad}    ),
{pad}  ),
{pad})"
    )
}

pub(super) fn list_tile(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let title = dart_string(&c.props.str_or("title", "List Tile Title"));
    let subtitle = dart_string(&c.props.str_or("subtitle", "Subtitle"));

    format!(
        "{pad}ListTile(
{pad}  leading: const Icon(Icons.star),
{pad}  title: Text('{title}'),
{pad}  subtitle: Text('{subtitle}'),
{pad}  trailing: const Icon(Icons.arrow_forward_ios),
{pad}  onTap: () {{}},
{pad})"
    )
}

pub(super) fn image(c: &Component, indent: usize, ctx: GenCtx<'_>) -> String {
    let pad = " ".repeat(indent);
    let alt_text = dart_string(&c.props.str_or("altText", "Image"));
    let width = ctx.dim(c.width.unwrap_or(defaults::IMAGE.width), Axis::Horizontal);
    let height = ctx.dim(c.height.unwrap_or(defaults::IMAGE.height), Axis::Vertical);
    let bg_color = flutter_color(Some(&c.props.str_or("bgColor", "#F5F5F5")));

    format!(
        "{pad}Container(
{pad}  width: {width},
{pad}  height: {height},
{pad}  decoration: BoxDecoration(
{pad}    color: {bg_color},
{pad}    border: Border.all(color: Colors.grey.shade300),
{pad}    borderRadius: BorderRadius.circular(4.0),
{pad}  ),
{pad}  child: Center(
{pad}    child: Text(
{pad}      '{alt_text}',
{pad}      style: TextStyle(
{pad}        color: Colors.grey.shade600,
{pad}        fontSize: 14.0,
{pad}      ),
{pad}    ),
{pad}  ),
{pad})"
    )
}

#[cfg(test)]
mod tests {
    use super::super::{ControllerTable, GenCtx, Scale};
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
    fn text_defaults_apply() {
        let code = render(json!({ "type": "text" }));
        assert!(code.contains("Text content"));
        assert!(code.contains("fontSize: 16.0"));
        assert!(code.contains("FontWeight.normal"));
        assert!(code.contains("TextAlign.left"));
        assert!(code.contains("color: Color(0xFF000000)"));
    }

    #[test]
    fn text_presets_and_headings() {
        let code = render(json!({
            "type": "text",
            "fontSizeType": "preset",
            "fontSize": "xlarge",
            "textStyle": "h2",
            "textAlign": "center"
        }));
        assert!(code.contains("fontSize: 24.0"));
        assert!(code.contains("FontWeight.bold"));
        assert!(code.contains("TextAlign.center"));
    }

    #[test]
    fn text_custom_pixel_size() {
        let code = render(json!({
            "type": "text",
            "fontSizeType": "custom",
            "fontSizePx": 17.5
        }));
        assert!(code.contains("fontSize: 17.5"));
        assert!(!code.contains("17.5.0"));
    }

    #[test]
    fn button_defaults_to_blue_on_white() {
        let code = render(json!({ "type": "elevatedbutton" }));
        assert!(code.contains("Text('Button')"));
        assert!(code.contains("backgroundColor: Color(0xFF2196F3)"));
        assert!(code.contains("foregroundColor: Color(0xFFFFFFFF)"));
        assert!(code.contains("width: 150.0"));
        assert!(code.contains("height: 40.0"));
    }

    #[test]
    fn avatar_radius_scales_horizontally_only() {
        let c = Component::from_value("id", &json!({ "type": "circleavatar", "radius": 32 }));
        let scale = Scale::screen();
        let controllers = ControllerTable::empty();
        let code = generate_widget(
            &c,
            0,
            GenCtx {
                scale: Some(&scale),
                controllers: &controllers,
            },
        );
        assert!(code.contains("radius: 32.0 * horizontalScale"));
    }

    #[test]
    fn icon_maps_glyphs_with_star_fallback() {
        assert!(render(json!({ "type": "icon", "icon": "≡" })).contains("Icons.menu"));
        assert!(render(json!({ "type": "icon", "icon": "??" })).contains("Icons.star"));
        assert!(render(json!({ "type": "icon" })).contains("Icons.star"));
    }

    #[test]
    fn quotes_in_labels_are_escaped() {
        let code = render(json!({ "type": "listtile", "title": "it's fine" }));
        assert!(code.contains("it\\'s fine"));
    }
}
