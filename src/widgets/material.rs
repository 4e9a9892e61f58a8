//! Generators for material chrome widgets.

use crate::document::Component;
use crate::style::dart_string;

pub(super) fn app_bar(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let title = dart_string(&c.props.str_or("title", "App Title"));

    format!(
        "{pad}AppBar(
{pad}  title: Text('{title}'),
{pad}  actions: [
{pad}    IconButton(
{pad}      icon: const Icon(Icons.more_vert),
{pad}      onPressed: () {{}},
{pad}    ),
{pad}  ],
{pad})"
    )
}

pub(super) fn bottom_navigation_bar(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let items = c
        .props
        .string_list("items")
        .filter(|items| !items.is_empty())
        .unwrap_or_else(|| vec!["Home".into(), "Search".into(), "Profile".into()]);

    let mut items_code = String::new();
    for (index, item) in items.iter().enumerate() {
        // Positional icons: first is home, second is search, the rest
        // get the person icon.
        let icon = match index {
            0 => "Icons.home",
            1 => "Icons.search",
            _ => "Icons.person",
        };
        let label = dart_string(item);
        items_code.push_str(&format!(
            "{pad}    BottomNavigationBarItem(
{pad}      icon: Icon({icon}),
{pad}      label: '{label}',
{pad}    ),\n"
        ));
    }

    format!(
        "{pad}BottomNavigationBar(
{pad}  currentIndex: 0,
{pad}  onTap: (index) {{}},
{pad}  items: [
{items_code}{pad}  ],
{pad})"
    )
}

pub(super) fn floating_action_button(indent: usize) -> String {
    let pad = " ".repeat(indent);

    format!(
        "{pad}FloatingActionButton(
{pad}  onPressed: () {{}},
{pad}  child: const Icon(Icons.add),
{pad})"
    )
}

pub(super) fn drawer(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let title = dart_string(&c.props.str_or("title", "Drawer"));
    let items = c
        .props
        .string_list("items")
        .filter(|items| !items.is_empty())
        .unwrap_or_else(|| vec!["Item 1".into(), "Item 2".into(), "Item 3".into()]);

    let mut items_code = String::new();
    for (index, item) in items.iter().enumerate() {
        let icon = match index {
            0 => "Icons.home",
            1 => "Icons.settings",
            _ => "Icons.info",
        };
        let label = dart_string(item);
        items_code.push_str(&format!(
            "{pad}      ListTile(
{pad}        leading: Icon({icon}),
{pad}        title: Text('{label}'),
{pad}        onTap: () {{}},
{pad}      ),\n"
        ));
    }

    format!(
        "{pad}Drawer(
{pad}  child: ListView(
{pad}    padding: EdgeInsets.zero,
{pad}    children: [
{pad}      DrawerHeader(
{pad}        decoration: const BoxDecoration(
{pad}          color: Colors.blue,
{pad}        ),
{pad}        child: Text(
{pad}          '{title}',
{pad}          style: const TextStyle(
{pad}            color: Colors.white,
{pad}            fontSize: 24,
{pad}          ),
{pad}        ),
{pad}      ),
{items_code}{pad}    ],
{pad}  ),
{pad})"
    )
}

pub(super) fn tab_bar(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let tabs = c
        .props
        .string_list("tabs")
        .filter(|tabs| !tabs.is_empty())
        .unwrap_or_else(|| vec!["Tab 1".into(), "Tab 2".into(), "Tab 3".into()]);
    let length = tabs.len();

    let mut tabs_code = String::new();
    let mut views_code = String::new();
    for tab in &tabs {
        let label = dart_string(tab);
        tabs_code.push_str(&format!("{pad}      Tab(text: '{label}'),\n"));
        views_code.push_str(&format!(
            "{pad}            Center(child: Text('{label} Content')),\n"
        ));
    }

    format!(
        "{pad}DefaultTabController(
{pad}  length: {length},
{pad}  child: Column(
{pad}    children: [
{pad}      TabBar(
{pad}        tabs: [
{tabs_code}{pad}        ],
{pad}      ),
{pad}      Expanded(
{pad}        child: TabBarView(
{pad}          children: [
{views_code}{pad}          ],
{pad}        ),
{pad}      ),
{pad}    ],
{pad}  ),
{pad})"
    )
}

pub(super) fn snack_bar(c: &Component, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let message = dart_string(&c.props.str_or("message", "Snackbar message"));

    format!(
        "{pad}ElevatedButton(
{pad}  onPressed: () {{
{pad}    ScaffoldMessenger.of(context).showSnackBar(
{pad}      SnackBar(
{pad}        content: Text('{message}'),
{pad}        action: SnackBarAction(
{pad}          label: 'Action',
{pad}          onPressed: () {{}},
{pad}        ),
{pad}      ),
{pad}    );
{pad}  }},
{pad}  child: const Text('Show SnackBar'),
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
    fn bottom_nav_assigns_positional_icons() {
        let code = render(json!({
            "type": "bottomnavigationbar",
            "items": ["A", "B", "C", "D"]
        }));
        assert!(code.contains("Icon(Icons.home)"));
        assert!(code.contains("Icon(Icons.search)"));
        assert_eq!(code.matches("Icon(Icons.person)").count(), 2);
    }

    #[test]
    fn tab_bar_generates_a_view_per_tab() {
        let code = render(json!({ "type": "tabbar", "tabs": ["One", "Two"] }));
        assert!(code.contains("length: 2"));
        assert!(code.contains("Tab(text: 'One')"));
        assert!(code.contains("Text('One Content')"));
        assert!(code.contains("Text('Two Content')"));
        assert!(!code.contains("Tab 3"));
    }

    #[test]
    fn tab_bar_handles_a_single_tab() {
        let code = render(json!({ "type": "tabbar", "tabs": ["Only"] }));
        assert!(code.contains("length: 1"));
        assert_eq!(code.matches("Content'").count(), 1);
    }

    #[test]
    fn drawer_header_carries_the_title() {
        let code = render(json!({ "type": "drawer", "title": "Menu" }));
        assert!(code.contains("DrawerHeader("));
        assert!(code.contains("'Menu'"));
        assert!(code.contains("ListTile("));
    }

    #[test]
    fn snack_bar_renders_a_trigger_button() {
        let code = render(json!({ "type": "snackbar", "message": "Saved" }));
        assert!(code.contains("ScaffoldMessenger.of(context).showSnackBar"));
        assert!(code.contains("Text('Saved')"));
    }
}
