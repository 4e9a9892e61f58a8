//! Screen assembly.
//!
//! Turns one page into a complete Dart screen file: a stateless widget
//! whose build method computes runtime scale factors against the
//! 320x568 reference canvas, declares any hoisted scroll controllers,
//! and stacks every component in a `Positioned` wrapper at its exact
//! canvas coordinates.

use crate::document::{Component, Page};
use crate::layout::group_into_rows;
use crate::style::{dart_double, dart_string};
use crate::widgets::{generate_widget, ControllerTable, GenCtx, Scale};

/// Reference canvas the editor designs against.
pub const DESIGN_WIDTH: f64 = 320.0;
pub const DESIGN_HEIGHT: f64 = 568.0;

/// Another page a screen can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget {
    pub display_name: String,
    pub identifier: String,
}

/// Derive a Dart class name from a page name.
///
/// Drops everything but ASCII alphanumerics and spaces, turns spaces
/// into underscores, and upper-cases the first character. Names that
/// come out empty fall back to the page id (dashes mapped to
/// underscores); names not starting with a letter get a `Screen_`
/// prefix. Distinct pages can still collide (e.g. "Home!" and "Home");
/// the caller is expected to keep page names unique.
pub fn screen_identifier(page_name: &str, page_id: &str) -> String {
    let cleaned: String = page_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();

    let name = if cleaned.is_empty() {
        format!("Screen_{}", page_id.replace('-', "_"))
    } else if !cleaned.starts_with(|c: char| c.is_ascii_alphabetic()) {
        format!("Screen_{cleaned}")
    } else {
        cleaned
    };

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => name,
    }
}

/// Generate the Dart source for one page of a multi-page document.
///
/// `nav_targets` lists every other page; each becomes an entry in the
/// screen's navigation drawer.
pub fn generate_screen(page: &Page, nav_targets: &[NavTarget]) -> String {
    let class_name = screen_identifier(&page.name, &page.id);
    let title = dart_string(&page.name);

    let rows = group_into_rows(&page.components);
    let ordered: Vec<&Component> = rows.into_iter().flatten().collect();
    let controllers = ControllerTable::for_components(ordered.iter().copied());

    let mut drawer_items = String::new();
    for target in nav_targets {
        let label = dart_string(&target.display_name);
        let route = target.identifier.to_lowercase();
        drawer_items.push_str(&format!(
            "
              ListTile(
                leading: Icon(Icons.screen_share),
                title: Text('{label}'),
                onTap: () {{
                  Navigator.pushNamed(context, '/{route}');
                }},
              ),"
        ));
    }

    let mut code = format!(
        "import 'package:flutter/material.dart';

class {class_name} extends StatelessWidget {{
  const {class_name}({{super.key}});

  @override
  Widget build(BuildContext context) {{
    // Get the device screen size
    final screenSize = MediaQuery.of(context).size;

    // Calculate scaling factors based on design dimensions (320x568)
    final horizontalScale = screenSize.width / {DESIGN_WIDTH:?};
    final verticalScale = screenSize.height / {DESIGN_HEIGHT:?};

{decls}
    return Scaffold(
      appBar: AppBar(
        title: Text('{title}'),
      ),
      drawer: Drawer(
        child: ListView(
          padding: EdgeInsets.zero,
          children: <Widget>[
            DrawerHeader(
              decoration: BoxDecoration(
                color: Colors.blue,
              ),
              child: Text(
                'Navigation',
                style: TextStyle(
                  color: Colors.white,
                  fontSize: 24,
                ),
              ),
            ),{drawer_items}
          ],
        ),
      ),
      body: SingleChildScrollView(
        child: Container(
          width: screenSize.width,
          height: screenSize.height - AppBar().preferredSize.height - MediaQuery.of(context).padding.top,
          child: Stack(
            children: [
",
        decls = controllers.declarations(),
    );

    push_positioned(&mut code, &ordered, &controllers);
    push_body_close(&mut code);
    code
}

/// Generate the legacy single-page screen (class `HomeScreen`).
pub fn generate_home_screen(components: &[Component]) -> String {
    let rows = group_into_rows(components);
    let ordered: Vec<&Component> = rows.into_iter().flatten().collect();
    let controllers = ControllerTable::for_components(ordered.iter().copied());

    let mut code = format!(
        "import 'package:flutter/material.dart';

class HomeScreen extends StatelessWidget {{
  const HomeScreen({{super.key}});

  @override
  Widget build(BuildContext context) {{
    // Get the device screen size
    final screenSize = MediaQuery.of(context).size;

    // Calculate scaling factors based on design dimensions (320x568)
    final horizontalScale = screenSize.width / {DESIGN_WIDTH:?};
    final verticalScale = screenSize.height / {DESIGN_HEIGHT:?};

{decls}
    return Scaffold(
      appBar: AppBar(
        title: const Text('Flutter App'),
      ),
      body: SingleChildScrollView(
        child: Container(
          width: screenSize.width,
          height: screenSize.height - AppBar().preferredSize.height - MediaQuery.of(context).padding.top,
          child: Stack(
            children: [
",
        decls = controllers.declarations(),
    );

    push_positioned(&mut code, &ordered, &controllers);
    push_body_close(&mut code);
    code
}

fn push_positioned(code: &mut String, ordered: &[&Component], controllers: &ControllerTable) {
    let scale = Scale::screen();
    let ctx = GenCtx {
        scale: Some(&scale),
        controllers,
    };
    for component in ordered {
        let widget = generate_widget(component, 14, ctx);
        code.push_str(&format!(
            "            Positioned(
              left: {left} * horizontalScale,
              top: {top} * verticalScale,
              child: {widget},
            ),\n",
            left = dart_double(component.x),
            top = dart_double(component.y),
            widget = widget.trim_start(),
        ));
    }
}

fn push_body_close(code: &mut String) {
    code.push_str(
        "          ],
        ),
      ),
    ),
    );
  }
}",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Component;
    use serde_json::json;

    fn page(name: &str, id: &str, components: Vec<serde_json::Value>) -> Page {
        Page {
            id: id.to_string(),
            name: name.to_string(),
            components: components
                .iter()
                .enumerate()
                .map(|(i, v)| Component::from_value(&format!("c{i}"), v))
                .collect(),
        }
    }

    #[test]
    fn identifier_drops_punctuation_and_joins_spaces() {
        assert_eq!(screen_identifier("My Page!", "p1"), "My_Page");
        assert_eq!(screen_identifier("home", "p1"), "Home");
    }

    #[test]
    fn identifier_prefixes_names_not_starting_with_a_letter() {
        assert_eq!(screen_identifier("1st Page", "p1"), "Screen_1st_Page");
    }

    #[test]
    fn identifier_falls_back_to_the_page_id() {
        assert_eq!(screen_identifier("!!!", "page-7"), "Screen_page_7");
        assert_eq!(screen_identifier("", "page-7"), "Screen_page_7");
    }

    #[test]
    fn screen_declares_scale_factors_and_positions() {
        let p = page(
            "Home",
            "p1",
            vec![json!({ "type": "text", "x": 10, "y": 20.5 })],
        );
        let code = generate_screen(&p, &[]);
        assert!(code.contains("class Home extends StatelessWidget"));
        assert!(code.contains("final horizontalScale = screenSize.width / 320.0;"));
        assert!(code.contains("final verticalScale = screenSize.height / 568.0;"));
        assert!(code.contains("left: 10.0 * horizontalScale"));
        assert!(code.contains("top: 20.5 * verticalScale"));
    }

    #[test]
    fn drawer_links_to_every_other_page() {
        let p = page("Home", "p1", vec![]);
        let targets = vec![
            NavTarget {
                display_name: "Settings".into(),
                identifier: "Settings".into(),
            },
            NavTarget {
                display_name: "About Us".into(),
                identifier: "About_Us".into(),
            },
        ];
        let code = generate_screen(&p, &targets);
        assert!(code.contains("Navigator.pushNamed(context, '/settings');"));
        assert!(code.contains("Navigator.pushNamed(context, '/about_us');"));
        assert!(code.contains("Text('About Us')"));
    }

    #[test]
    fn controllers_are_declared_once_before_the_scaffold() {
        let p = page(
            "Lists",
            "p1",
            vec![json!({ "id": "lv", "type": "listview" })],
        );
        let code = generate_screen(&p, &[]);
        let decl = "final _scrollController_lv = ScrollController();";
        assert_eq!(code.matches(decl).count(), 1);
        assert!(code.find(decl).unwrap() < code.find("return Scaffold(").unwrap());
        assert_eq!(code.matches("controller: _scrollController_lv").count(), 2);
    }

    #[test]
    fn nested_list_controllers_are_hoisted_too() {
        let p = page(
            "Wrapped",
            "p1",
            vec![json!({
                "id": "box",
                "type": "container",
                "children": [{ "id": "inner", "type": "listview" }]
            })],
        );
        let code = generate_screen(&p, &[]);
        let decl = "final _scrollController_inner = ScrollController();";
        assert_eq!(code.matches(decl).count(), 1);
        assert!(code.contains("controller: _scrollController_inner"));
        assert!(!code.contains("controller: _scrollController,"));
    }

    #[test]
    fn home_screen_has_no_drawer() {
        let code = generate_home_screen(&[]);
        assert!(code.contains("class HomeScreen extends StatelessWidget"));
        assert!(code.contains("const Text('Flutter App')"));
        assert!(!code.contains("Drawer("));
    }

    #[test]
    fn components_emit_top_to_bottom_then_left_to_right() {
        let p = page(
            "Home",
            "p1",
            vec![
                json!({ "type": "text", "content": "bottom", "x": 0, "y": 100 }),
                json!({ "type": "text", "content": "top-right", "x": 50, "y": 0 }),
                json!({ "type": "text", "content": "top-left", "x": 0, "y": 5 }),
            ],
        );
        let code = generate_screen(&p, &[]);
        let top_left = code.find("top-left").unwrap();
        let top_right = code.find("top-right").unwrap();
        let bottom = code.find("bottom").unwrap();
        assert!(top_left < top_right);
        assert!(top_right < bottom);
    }
}
