//! Flutter source generation from whiteboard canvas documents.
//!
//! This crate normalizes the collaborative whiteboard's JSON document
//! shape and generates a complete Flutter project from it: a pubspec
//! manifest, an application entry point with routes, and one screen
//! file per page. Components keep their exact canvas coordinates and
//! scale at runtime against the 320x568 reference canvas.
//!
//! Generation is total: malformed documents fall back to defaults and
//! unknown component kinds render a visible placeholder, so the same
//! input always produces the same well-formed Dart text.
//!
//! # Example
//!
//! ```ignore
//! use flutter_codegen::FlutterGenerator;
//!
//! let generator = FlutterGenerator::new()?;
//! let project = generator.generate_from_value(&document)?;
//! for screen in &project.screens {
//!     println!("lib/screens/{}.dart", screen.file_stem());
//! }
//! ```

pub mod defaults;
pub mod document;
pub mod error;
pub mod layout;
pub mod project;
pub mod screen;
pub mod style;
pub mod templates;
pub mod widgets;

pub use document::{Component, Document, Kind, Page, PropertyMap};
pub use error::{CodegenError, Result};
pub use project::{FlutterGenerator, GeneratedProject, ProjectOptions, ScreenFile};
pub use screen::{generate_home_screen, generate_screen, screen_identifier, NavTarget};
pub use style::{dart_double, dart_string, flutter_color};
pub use templates::TemplateEngine;
pub use widgets::{generate_widget, ControllerTable, GenCtx, Scale};
