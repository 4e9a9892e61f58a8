//! In-memory model of a whiteboard document.
//!
//! The persistence layer hands generation a raw JSON value; this module
//! normalizes either document shape (legacy single-page component map or
//! the multi-page `pageOrder`/`pages` structure) into typed pages with
//! flattened component lists. Normalization fails closed: malformed or
//! missing pieces become empty collections and defaults, never errors.

use serde_json::Value;

/// The kind tag of a canvas component.
///
/// Closed over every kind the registry knows how to render, plus an
/// explicit `Unknown` case carrying the raw tag so unrecognized
/// components surface as visible placeholders instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Container,
    Text,
    ElevatedButton,
    TextField,
    Column,
    Row,
    Stack,
    Padding,
    Center,
    Expanded,
    SizedBox,
    CircleAvatar,
    Icon,
    Switch,
    Checkbox,
    Radio,
    Slider,
    AppBar,
    BottomNavigationBar,
    FloatingActionButton,
    Card,
    ListTile,
    Drawer,
    TabBar,
    SnackBar,
    ListView,
    Image,
    Table,
    Select,
    Unknown(String),
}

impl Kind {
    /// Parse a raw type tag.
    ///
    /// `button` aliases to [`Kind::ElevatedButton`]: the AI component
    /// synthesizer emits `button` for the same widget the canvas editor
    /// tags `elevatedbutton`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "container" => Self::Container,
            "text" => Self::Text,
            "elevatedbutton" | "button" => Self::ElevatedButton,
            "textfield" => Self::TextField,
            "column" => Self::Column,
            "row" => Self::Row,
            "stack" => Self::Stack,
            "padding" => Self::Padding,
            "center" => Self::Center,
            "expanded" => Self::Expanded,
            "sizedbox" => Self::SizedBox,
            "circleavatar" => Self::CircleAvatar,
            "icon" => Self::Icon,
            "switch" => Self::Switch,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "slider" => Self::Slider,
            "appbar" => Self::AppBar,
            "bottomnavigationbar" => Self::BottomNavigationBar,
            "floatingactionbutton" => Self::FloatingActionButton,
            "card" => Self::Card,
            "listtile" => Self::ListTile,
            "drawer" => Self::Drawer,
            "tabbar" => Self::TabBar,
            "snackbar" => Self::SnackBar,
            "listview" => Self::ListView,
            "image" => Self::Image,
            "table" => Self::Table,
            "select" => Self::Select,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Property bag for a component.
///
/// Everything the canvas stored on the component besides the structural
/// fields (`id`, `type`, geometry, `children`, `parent`) lands here and
/// is read through typed accessors with per-call defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap(serde_json::Map<String, Value>);

impl PropertyMap {
    /// Raw JSON value for a key.
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value, if the key holds one.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Non-empty string value. The canvas leaves cleared text fields as
    /// empty strings; those count as absent for defaulting purposes.
    pub fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.str(key).filter(|s| !s.is_empty())
    }

    /// String value or a default.
    pub fn str_or(&self, key: &str, default: &str) -> String {
        self.non_empty_str(key).unwrap_or(default).to_string()
    }

    /// Numeric value, if the key holds one.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Numeric value or a default.
    pub fn number_or(&self, key: &str, default: f64) -> f64 {
        self.number(key).unwrap_or(default)
    }

    /// Boolean value or a default.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// True unless the key is explicitly `false` (`!== false` semantics,
    /// used by opt-out flags like `showScrollbar` and `showTitle`).
    pub fn not_false(&self, key: &str) -> bool {
        !matches!(self.0.get(key), Some(Value::Bool(false)))
    }

    /// Array items rendered to display strings; non-scalar entries are
    /// skipped. `None` when the key is absent or not an array.
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        let arr = self.0.get(key)?.as_array()?;
        Some(arr.iter().filter_map(display_string).collect())
    }
}

/// Render a scalar JSON value the way it should appear in generated text.
fn display_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// One visual element on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Caller-generated identifier, injected from the map key during
    /// normalization.
    pub id: String,
    pub kind: Kind,
    /// Absolute canvas position. Defaults to the origin when absent.
    pub x: f64,
    pub y: f64,
    /// Dimensions; each generator substitutes its own documented default
    /// when absent.
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub props: PropertyMap,
    pub children: Vec<Component>,
    pub parent: Option<String>,
}

impl Component {
    /// Build a component from a JSON value, injecting `fallback_id` when
    /// the value carries no `id` of its own. Non-object input yields an
    /// empty unknown component rather than an error.
    pub fn from_value(fallback_id: &str, value: &Value) -> Self {
        let obj = match value.as_object() {
            Some(o) => o,
            None => {
                return Self {
                    id: fallback_id.to_string(),
                    kind: Kind::Unknown("unknown".to_string()),
                    x: 0.0,
                    y: 0.0,
                    width: None,
                    height: None,
                    props: PropertyMap::default(),
                    children: Vec::new(),
                    parent: None,
                }
            }
        };

        let id = obj
            .get("id")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback_id)
            .to_string();

        let kind = obj
            .get("type")
            .and_then(Value::as_str)
            .map(Kind::from_tag)
            .unwrap_or_else(|| Kind::Unknown("unknown".to_string()));

        let children = obj
            .get("children")
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .enumerate()
                    .map(|(i, child)| Component::from_value(&format!("{id}-child-{i}"), child))
                    .collect()
            })
            .unwrap_or_default();

        let mut props = serde_json::Map::new();
        for (key, val) in obj {
            match key.as_str() {
                "id" | "type" | "x" | "y" | "width" | "height" | "children" | "parent" => {}
                _ => {
                    props.insert(key.clone(), val.clone());
                }
            }
        }

        Self {
            id,
            kind,
            x: obj.get("x").and_then(Value::as_f64).unwrap_or(0.0),
            y: obj.get("y").and_then(Value::as_f64).unwrap_or(0.0),
            width: obj.get("width").and_then(Value::as_f64),
            height: obj.get("height").and_then(Value::as_f64),
            props: PropertyMap(props),
            children,
            parent: obj
                .get("parent")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// One canvas page with its components flattened into document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub components: Vec<Component>,
}

/// A normalized whiteboard document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Multi-page shape: pages in `pageOrder` order, entries missing
    /// from the `pages` map (or carrying no component map) skipped.
    MultiPage(Vec<Page>),
    /// Legacy shape: one flat component map, no page metadata.
    SinglePage(Vec<Component>),
}

impl Document {
    /// Normalize a raw JSON document.
    ///
    /// Never fails: anything that is not a recognizable document becomes
    /// an empty single-page document.
    pub fn from_value(value: &Value) -> Self {
        let obj = match value.as_object() {
            Some(o) => o,
            None => return Self::SinglePage(Vec::new()),
        };

        let pages = obj.get("pages").and_then(Value::as_object);
        let page_order = obj.get("pageOrder").and_then(Value::as_array);

        if let (Some(pages), Some(order)) = (pages, page_order) {
            let mut out = Vec::new();
            for page_id in order.iter().filter_map(Value::as_str) {
                let Some(page) = pages.get(page_id).and_then(Value::as_object) else {
                    continue;
                };
                let Some(components) = page.get("components").and_then(Value::as_object) else {
                    continue;
                };
                out.push(Page {
                    id: page_id.to_string(),
                    name: page
                        .get("name")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    components: flatten_components(components),
                });
            }
            return Self::MultiPage(out);
        }

        Self::SinglePage(flatten_components(obj))
    }

    /// Parse and normalize a JSON document from text.
    pub fn from_str(text: &str) -> crate::error::Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }
}

/// Flatten a component map into an array, injecting each map key as the
/// component's `id` so generators never need a reverse lookup.
fn flatten_components(map: &serde_json::Map<String, Value>) -> Vec<Component> {
    map.iter()
        .map(|(id, value)| Component::from_value(id, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_map_becomes_single_page() {
        let doc = Document::from_value(&json!({
            "c1": { "type": "text", "x": 10, "y": 20, "content": "Hi" }
        }));
        let Document::SinglePage(components) = doc else {
            panic!("expected single-page document");
        };
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].id, "c1");
        assert_eq!(components[0].kind, Kind::Text);
        assert_eq!(components[0].x, 10.0);
        assert_eq!(components[0].props.str("content"), Some("Hi"));
    }

    #[test]
    fn map_key_wins_as_component_id() {
        let doc = Document::from_value(&json!({ "key-id": { "type": "text" } }));
        let Document::SinglePage(components) = doc else {
            panic!()
        };
        assert_eq!(components[0].id, "key-id");
    }

    #[test]
    fn multi_page_follows_page_order() {
        let doc = Document::from_value(&json!({
            "pageOrder": ["p2", "p1"],
            "pages": {
                "p1": { "name": "First", "components": {} },
                "p2": { "name": "Second", "components": {} }
            },
            "currentPage": "p1"
        }));
        let Document::MultiPage(pages) = doc else { panic!() };
        assert_eq!(pages[0].name, "Second");
        assert_eq!(pages[1].name, "First");
    }

    #[test]
    fn dangling_page_order_entries_are_skipped() {
        let doc = Document::from_value(&json!({
            "pageOrder": ["missing", "p1", "broken"],
            "pages": {
                "p1": { "name": "Only", "components": {} },
                "broken": { "name": "NoComponents" }
            }
        }));
        let Document::MultiPage(pages) = doc else { panic!() };
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].id, "p1");
    }

    #[test]
    fn garbage_input_yields_empty_document() {
        for v in [json!(null), json!([1, 2]), json!("nope"), json!({})] {
            let doc = Document::from_value(&v);
            assert_eq!(doc, Document::SinglePage(Vec::new()));
        }
    }

    #[test]
    fn unknown_kind_keeps_raw_tag() {
        assert_eq!(
            Kind::from_tag("frobnicator"),
            Kind::Unknown("frobnicator".to_string())
        );
        assert_eq!(Kind::from_tag("button"), Kind::ElevatedButton);
    }

    #[test]
    fn missing_geometry_defaults_to_origin() {
        let c = Component::from_value("c", &json!({ "type": "text" }));
        assert_eq!((c.x, c.y), (0.0, 0.0));
        assert_eq!(c.width, None);
    }

    #[test]
    fn children_are_parsed_recursively() {
        let c = Component::from_value(
            "parent",
            &json!({
                "type": "container",
                "children": [{ "type": "text", "content": "inner" }]
            }),
        );
        assert_eq!(c.children.len(), 1);
        assert_eq!(c.children[0].kind, Kind::Text);
        assert_eq!(c.children[0].id, "parent-child-0");
    }
}
