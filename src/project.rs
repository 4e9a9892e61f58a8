//! Project assembly.
//!
//! Builds the complete generated bundle for a document: the pubspec
//! manifest, the application entry point, and one screen file per page.
//! The bundle is plain data; writing it to disk (or shipping it over a
//! socket) is the caller's business.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::document::{Document, Page};
use crate::error::Result;
use crate::screen::{generate_home_screen, generate_screen, screen_identifier, NavTarget};
use crate::templates::TemplateEngine;

const PUBSPEC_TEMPLATE: &str = "name: {{name}}
description: {{description}}

# The following line prevents the package from being accidentally published to
# pub.dev using `flutter pub publish`. This is preferred for private packages.
publish_to: 'none' # Remove this line if you wish to publish to pub.dev

# The following defines the version and build number for your application.
version: 1.0.0+1

environment:
  sdk: '>=3.0.0 <4.0.0'

dependencies:
  flutter:
    sdk: flutter
  cupertino_icons: ^1.0.6
  provider: ^6.1.1
  shared_preferences: ^2.2.2
  http: ^1.1.2

dev_dependencies:
  flutter_test:
    sdk: flutter
  flutter_lints: ^3.0.1

flutter:
  uses-material-design: true

  # To add assets to your application, add an assets section, like this:
  # assets:
  #   - images/a_dot_burr.jpeg
  #   - images/a_dot_ham.jpeg
";

const MAIN_HOME_TEMPLATE: &str = "import 'package:flutter/material.dart';
import 'package:{{name}}/screens/home_screen.dart';

void main() {
  runApp(const MyApp());
}

class MyApp extends StatelessWidget {
  const MyApp({super.key});

  @override
  Widget build(BuildContext context) {
    return MaterialApp(
      title: 'Flutter Demo',
      theme: ThemeData(
        primarySwatch: Colors.blue,
        visualDensity: VisualDensity.adaptivePlatformDensity,
      ),
      home: const HomeScreen(),
    );
  }
}
";

const MAIN_NAV_TEMPLATE: &str = "import 'package:flutter/material.dart';
{{imports}}

void main() {
  runApp(const MyApp());
}

class MyApp extends StatelessWidget {
  const MyApp({super.key});

  @override
  Widget build(BuildContext context) {
    return MaterialApp(
      title: 'Flutter Demo',
      theme: ThemeData(
        primarySwatch: Colors.blue,
        visualDensity: VisualDensity.adaptivePlatformDensity,
      ),
      initialRoute: '/{{initial_route}}',
      routes: {
{{routes}}
      },
    );
  }
}

// Navigation helper
class AppNavigation {
  static void navigateTo(BuildContext context, String routeName) {
    Navigator.pushNamed(context, routeName);
  }
}
";

/// Project-level knobs for the generated bundle.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectOptions {
    /// Dart package name, used in the manifest and import paths.
    pub name: String,
    pub description: String,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            name: "flutter_app".to_string(),
            description: "A new Flutter project generated from whiteboard.".to_string(),
        }
    }
}

/// One generated screen file.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenFile {
    /// The page name as the user wrote it.
    pub display_name: String,
    /// Dart class name of the screen widget.
    pub identifier: String,
    /// Complete Dart source.
    pub code: String,
    file_stem: String,
}

impl ScreenFile {
    /// File name under `lib/screens/`, without the `.dart` suffix.
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }
}

/// The complete generated source bundle.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedProject {
    pub pubspec: String,
    pub main_dart: String,
    pub screens: Vec<ScreenFile>,
}

/// Whiteboard-to-Flutter source generator.
pub struct FlutterGenerator {
    templates: TemplateEngine<'static>,
    options: ProjectOptions,
}

impl FlutterGenerator {
    pub fn new() -> Result<Self> {
        Self::with_options(ProjectOptions::default())
    }

    pub fn with_options(options: ProjectOptions) -> Result<Self> {
        let mut templates = TemplateEngine::new();
        templates.register_template("pubspec", PUBSPEC_TEMPLATE)?;
        templates.register_template("main_home", MAIN_HOME_TEMPLATE)?;
        templates.register_template("main_nav", MAIN_NAV_TEMPLATE)?;
        Ok(Self { templates, options })
    }

    /// Generate a project bundle from a normalized document.
    ///
    /// The output always contains at least one screen: documents with no
    /// usable pages produce a default empty `HomeScreen`.
    pub fn generate(&self, document: &Document) -> Result<GeneratedProject> {
        match document {
            Document::MultiPage(pages) if !pages.is_empty() => self.generate_multi(pages),
            Document::MultiPage(_) => self.generate_single(&[]),
            Document::SinglePage(components) => self.generate_single(components),
        }
    }

    /// Normalize a raw JSON value and generate a project bundle from it.
    pub fn generate_from_value(&self, value: &Value) -> Result<GeneratedProject> {
        self.generate(&Document::from_value(value))
    }

    fn generate_multi(&self, pages: &[Page]) -> Result<GeneratedProject> {
        debug!(pages = pages.len(), "generating multi-page project");

        let identifiers: Vec<String> = pages
            .iter()
            .map(|p| screen_identifier(&p.name, &p.id))
            .collect();

        let mut screens = Vec::with_capacity(pages.len());
        for (index, page) in pages.iter().enumerate() {
            let nav_targets: Vec<NavTarget> = pages
                .iter()
                .zip(&identifiers)
                .enumerate()
                .filter(|(other, _)| *other != index)
                .map(|(_, (other, identifier))| NavTarget {
                    display_name: other.name.clone(),
                    identifier: identifier.clone(),
                })
                .collect();

            debug!(
                page = %page.id,
                components = page.components.len(),
                "generating screen"
            );
            screens.push(ScreenFile {
                display_name: page.name.clone(),
                identifier: identifiers[index].clone(),
                code: generate_screen(page, &nav_targets),
                file_stem: identifiers[index].to_lowercase(),
            });
        }

        let imports: String = screens
            .iter()
            .map(|s| {
                format!(
                    "import 'package:{}/screens/{}.dart';",
                    self.options.name,
                    s.file_stem()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let routes: String = screens
            .iter()
            .map(|s| {
                format!(
                    "        '/{}': (context) => const {}(),",
                    s.file_stem(),
                    s.identifier
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let main_dart = self.templates.render(
            "main_nav",
            &json!({
                "imports": imports,
                "routes": routes,
                "initial_route": screens[0].file_stem(),
            }),
        )?;

        Ok(GeneratedProject {
            pubspec: self.templates.render("pubspec", &self.options)?,
            main_dart,
            screens,
        })
    }

    fn generate_single(
        &self,
        components: &[crate::document::Component],
    ) -> Result<GeneratedProject> {
        debug!(
            components = components.len(),
            "generating single-page project"
        );
        let screen = ScreenFile {
            display_name: "HomeScreen".to_string(),
            identifier: "HomeScreen".to_string(),
            code: generate_home_screen(components),
            file_stem: "home_screen".to_string(),
        };

        Ok(GeneratedProject {
            pubspec: self.templates.render("pubspec", &self.options)?,
            main_dart: self.templates.render("main_home", &self.options)?,
            screens: vec![screen],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn generator() -> FlutterGenerator {
        FlutterGenerator::new().expect("built-in templates register")
    }

    #[test]
    fn empty_document_still_yields_a_home_screen() {
        let project = generator().generate_from_value(&json!({})).unwrap();
        assert_eq!(project.screens.len(), 1);
        assert_eq!(project.screens[0].identifier, "HomeScreen");
        assert_eq!(project.screens[0].file_stem(), "home_screen");
        assert!(project.main_dart.contains("home: const HomeScreen()"));
        assert!(project
            .main_dart
            .contains("import 'package:flutter_app/screens/home_screen.dart';"));
    }

    #[test]
    fn pubspec_carries_the_package_metadata() {
        let project = generator().generate_from_value(&json!({})).unwrap();
        assert!(project.pubspec.starts_with("name: flutter_app\n"));
        assert!(project
            .pubspec
            .contains("description: A new Flutter project generated from whiteboard."));
        assert!(project.pubspec.contains("uses-material-design: true"));
    }

    #[test]
    fn multi_page_routes_follow_page_order() {
        let project = generator()
            .generate_from_value(&json!({
                "pageOrder": ["p2", "p1"],
                "pages": {
                    "p1": { "name": "Settings", "components": {} },
                    "p2": { "name": "Home", "components": {} }
                }
            }))
            .unwrap();
        assert_eq!(project.screens.len(), 2);
        assert!(project.main_dart.contains("initialRoute: '/home'"));
        assert!(project
            .main_dart
            .contains("'/home': (context) => const Home(),"));
        assert!(project
            .main_dart
            .contains("'/settings': (context) => const Settings(),"));
        assert!(project
            .main_dart
            .contains("import 'package:flutter_app/screens/settings.dart';"));
        assert!(project.main_dart.contains("class AppNavigation"));
    }

    #[test]
    fn dangling_pages_are_absent_from_the_route_table() {
        let project = generator()
            .generate_from_value(&json!({
                "pageOrder": ["ghost", "p1"],
                "pages": {
                    "p1": { "name": "Real", "components": {} }
                }
            }))
            .unwrap();
        assert_eq!(project.screens.len(), 1);
        assert!(project.main_dart.contains("initialRoute: '/real'"));
        assert!(!project.main_dart.contains("ghost"));
    }

    #[test]
    fn custom_package_name_flows_into_imports() {
        let generator = FlutterGenerator::with_options(ProjectOptions {
            name: "my_app".into(),
            description: "desc".into(),
        })
        .unwrap();
        let project = generator.generate_from_value(&json!({})).unwrap();
        assert!(project.pubspec.starts_with("name: my_app\n"));
        assert!(project
            .main_dart
            .contains("import 'package:my_app/screens/home_screen.dart';"));
    }

    #[test]
    fn generation_is_deterministic() {
        let value = json!({
            "pageOrder": ["p1"],
            "pages": {
                "p1": {
                    "name": "Home",
                    "components": {
                        "a": { "type": "text", "x": 5, "y": 10, "content": "Hi" },
                        "b": { "type": "listview", "x": 5, "y": 80 }
                    }
                }
            }
        });
        let g = generator();
        let first = g.generate_from_value(&value).unwrap();
        let second = g.generate_from_value(&value).unwrap();
        assert_eq!(first.main_dart, second.main_dart);
        assert_eq!(first.screens[0].code, second.screens[0].code);
    }
}
