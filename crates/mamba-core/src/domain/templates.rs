//! Fixed starter templates for `mamba create`.
//!
//! Templates are plain text with `{{VARIABLE}}` placeholders. There is no
//! templating language: [`RenderContext::render`] is straight substitution.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::project_structure::ProjectStructure;

/// Relative path of the components directory inside a project.
pub const COMPONENTS_DIR: &str = "src/components";
/// Relative path of the starter component.
pub const STARTER_COMPONENT: &str = "src/components/App.rs";
/// Relative path of the entry file.
pub const ENTRY_FILE: &str = "main.rs";
/// CSS tool configuration file name; its presence enables the watcher.
pub const ASSET_CONFIG_FILE: &str = "tailwind.config.js";
/// CSS tool input file.
pub const ASSET_INPUT_FILE: &str = "input.css";
/// Default build output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

const CARGO_TOML: &str = r#"[package]
name = "{{PROJECT_NAME_KEBAB}}"
version = "0.1.0"
edition = "2024"

[[bin]]
name = "{{PROJECT_NAME_KEBAB}}"
path = "main.rs"

[dependencies]
mamba-core = "{{MAMBA_VERSION}}"
mamba-adapters = "{{MAMBA_VERSION}}"
"#;

const MAIN_RS: &str = r##"//! Entry point: composes the page and writes it to {{OUTPUT_DIR}}/index.html.

#[path = "src/components/App.rs"]
mod app;

use mamba_adapters::LocalFilesystem;
use mamba_core::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut components: Vec<Box<dyn Component>> = vec![Box::new(app::App::new(Props::new()))];

    let pipeline = BuildPipeline::new(
        Box::new(LocalFilesystem::new()),
        DocumentShell::new("{{PROJECT_NAME}}"),
    );
    pipeline.build(&mut components, "{{OUTPUT_DIR}}/index.html")?;

    println!("Build complete! Open {{OUTPUT_DIR}}/index.html to view your app.");
    Ok(())
}
"##;

const APP_RS: &str = r###"use mamba_core::prelude::*;

pub struct App {
    base: ComponentBase,
}

impl App {
    pub fn new(props: Props) -> Self {
        Self {
            base: ComponentBase::new(props),
        }
    }
}

impl Renderable for App {
    fn render(&self) -> RenderResult {
        Ok(r##"<section class="flex flex-col items-center justify-center min-h-screen bg-gray-100">
    <h1 class="text-4xl font-bold text-blue-600">Welcome to {{PROJECT_NAME}}!</h1>
    <p class="mt-4 text-lg text-gray-700">Your component-based static site.</p>
</section>"##
            .to_owned())
    }
}

impl Component for App {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn name(&self) -> &str {
        "App"
    }
}
"###;

const TAILWIND_CONFIG: &str = r#"module.exports = {
  content: ["./src/components/**/*.rs", "./main.rs"],
  theme: { extend: {} },
  plugins: [],
};
"#;

const INPUT_CSS: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

const GITIGNORE: &str = "/target\n/{{OUTPUT_DIR}}\n";

/// Variables available to starter templates.
#[derive(Debug, Clone)]
pub struct RenderContext {
    project_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = HashMap::new();

        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert("PROJECT_NAME_KEBAB".to_string(), to_kebab_case(&name));
        vars.insert("MAMBA_VERSION".to_string(), crate::VERSION.to_string());
        vars.insert("OUTPUT_DIR".to_string(), DEFAULT_OUTPUT_DIR.to_string());

        Self {
            project_name: name,
            variables: vars,
        }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Directory the starter entry writes its page into.
    pub fn output_dir(&self) -> &str {
        self.get("OUTPUT_DIR").unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    /// Replace every `{{KEY}}` with its value. Unknown placeholders stay as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// Lowercase, with every run of non-alphanumerics collapsed to `-`.
fn to_kebab_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// The starter project, rendered for `ctx` under `root`.
pub fn starter_project(root: &Path, ctx: &RenderContext) -> ProjectStructure {
    ProjectStructure::new(root)
        .with_directory(COMPONENTS_DIR)
        .with_directory(ctx.output_dir())
        .with_file("Cargo.toml", ctx.render(CARGO_TOML))
        .with_file(ENTRY_FILE, ctx.render(MAIN_RS))
        .with_file(STARTER_COMPONENT, ctx.render(APP_RS))
        .with_file(ASSET_CONFIG_FILE, TAILWIND_CONFIG.to_owned())
        .with_file(ASSET_INPUT_FILE, INPUT_CSS.to_owned())
        .with_file(".gitignore", ctx.render(GITIGNORE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_known_placeholders() {
        let ctx = RenderContext::new("My Site");
        assert_eq!(ctx.render("{{PROJECT_NAME}}/{{PROJECT_NAME_KEBAB}}"), "My Site/my-site");
    }

    #[test]
    fn unknown_placeholder_is_left_alone() {
        let ctx = RenderContext::new("demo");
        assert_eq!(ctx.render("{{NOPE}}"), "{{NOPE}}");
    }

    #[test]
    fn custom_variable_overrides() {
        let ctx = RenderContext::new("demo").with_variable("MAMBA_VERSION", "9.9.9");
        assert_eq!(ctx.get("MAMBA_VERSION"), Some("9.9.9"));
    }

    #[test]
    fn kebab_case_collapses_separators() {
        assert_eq!(to_kebab_case("My__Cool site"), "my-cool-site");
        assert_eq!(to_kebab_case("demo"), "demo");
    }

    #[test]
    fn starter_project_is_valid_and_complete() {
        let ctx = RenderContext::new("demo");
        let s = starter_project(Path::new("demo"), &ctx);
        s.validate().unwrap();

        let files: Vec<_> = s.files().map(|f| f.path.to_string_lossy().into_owned()).collect();
        for expected in [STARTER_COMPONENT, ENTRY_FILE, ASSET_CONFIG_FILE, "Cargo.toml"] {
            assert!(files.iter().any(|f| f == expected), "missing {expected}");
        }
        assert!(s.directories().any(|d| d.path == Path::new(DEFAULT_OUTPUT_DIR)));
    }

    #[test]
    fn starter_entry_points_at_component_and_output() {
        let ctx = RenderContext::new("demo");
        let s = starter_project(Path::new("demo"), &ctx);
        let main = s.files().find(|f| f.path == Path::new(ENTRY_FILE)).unwrap();
        assert!(main.content.contains("src/components/App.rs"));
        assert!(main.content.contains("dist/index.html"));
        assert!(!main.content.contains("{{"));
    }

    #[test]
    fn output_dir_is_substituted_everywhere() {
        let ctx = RenderContext::new("demo").with_variable("OUTPUT_DIR", "public");
        let s = starter_project(Path::new("demo"), &ctx);

        assert!(s.directories().any(|d| d.path == Path::new("public")));
        let main = s.files().find(|f| f.path == Path::new(ENTRY_FILE)).unwrap();
        assert!(main.content.contains(r#""public/index.html""#));
        assert!(!main.content.contains("dist"));
        let ignore = s.files().find(|f| f.path == Path::new(".gitignore")).unwrap();
        assert_eq!(ignore.content, "/target\n/public\n");
    }

    #[test]
    fn accepted_names_give_valid_package_names() {
        use crate::domain::DomainValidator;

        for name in ["demo", "My__Cool site", "a", "site-123", "Z_", "_", "---", "123site"] {
            if DomainValidator::validate_project_name(name).is_err() {
                continue;
            }
            let package = RenderContext::new(name).get("PROJECT_NAME_KEBAB").unwrap().to_owned();
            assert!(
                package.starts_with(|c: char| c.is_ascii_lowercase()),
                "{name:?} -> {package:?}"
            );
        }
        for rejected in ["_", "---", "123site"] {
            assert!(DomainValidator::validate_project_name(rejected).is_err());
        }
    }

    #[test]
    fn tailwind_config_globs_cover_components() {
        assert!(TAILWIND_CONFIG.contains("./src/components/**/*.rs"));
        assert!(TAILWIND_CONFIG.contains("./main.rs"));
    }
}
