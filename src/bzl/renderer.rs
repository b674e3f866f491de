//! Rendering `requirements.bzl` with Tera.
//!
//! The layout is fixed and byte-stable: a provenance header, the
//! `whl_library` load, `pip_install()` holding one call per wheel, the
//! `_packages` dict, `all_packages`, and the `packages(name)` accessor.
//! Indentation inside the templates matters: every `whl_library` call has to
//! sit inside the body of `pip_install()`.

use tera::{Context as TeraContext, Tera};

use super::model::{RequirementsFile, WhlLibrary};
use crate::constants::WHL_LIBRARY_BZL;
use crate::core::PipImportError;

const WHL_LIBRARY_TEMPLATE_NAME: &str = "whl_library";
const REQUIREMENTS_TEMPLATE_NAME: &str = "requirements";

const WHL_LIBRARY_TEMPLATE: &str = r#"  whl_library(
      name = "{{ repo_name }}",
      whl = "{{ whl_label }}",
      requirements = "{{ requirements_label }}",
  )"#;

const REQUIREMENTS_TEMPLATE: &str = r#"# Install pip requirements.
#
# Generated from {{ input }}

load("{{ whl_library_bzl }}", "whl_library")

def pip_install():
  {{ whl_libraries }}

_packages = {
  {{ mappings }}
}

all_packages = _packages.values()

def packages(name):
  name = name.replace("-", "_")
  return _packages[name]"#;

/// Renders [`RequirementsFile`] models to Starlark text.
pub struct RequirementsRenderer {
    tera: Tera,
}

impl RequirementsRenderer {
    pub fn new() -> Result<Self, PipImportError> {
        let mut tera = Tera::default();
        // Output is Starlark, not HTML
        tera.autoescape_on(Vec::new());
        tera.add_raw_templates(vec![
            (WHL_LIBRARY_TEMPLATE_NAME, WHL_LIBRARY_TEMPLATE),
            (REQUIREMENTS_TEMPLATE_NAME, REQUIREMENTS_TEMPLATE),
        ])
        .map_err(|e| template_error(&e))?;

        Ok(Self {
            tera,
        })
    }

    /// Render one `whl_library(...)` call, preceded by a newline.
    pub fn render_library(&self, library: &WhlLibrary) -> Result<String, PipImportError> {
        let mut context = TeraContext::new();
        context.insert("repo_name", &library.repo_name);
        context.insert("whl_label", &library.whl_label);
        context.insert("requirements_label", &library.requirements_label);

        let rendered = self
            .tera
            .render(WHL_LIBRARY_TEMPLATE_NAME, &context)
            .map_err(|e| template_error(&e))?;
        Ok(format!("\n{rendered}"))
    }

    /// Render the complete file, ending with a newline.
    pub fn render(&self, file: &RequirementsFile) -> Result<String, PipImportError> {
        let whl_libraries = file
            .libraries
            .iter()
            .map(|library| self.render_library(library))
            .collect::<Result<Vec<_>, _>>()?
            .join("\n");

        let mappings = file
            .packages
            .iter()
            .map(|(distribution, label)| format!("\"{distribution}\": \"{label}\""))
            .collect::<Vec<_>>()
            .join(",");

        let mut context = TeraContext::new();
        context.insert("input", &file.input);
        context.insert("whl_library_bzl", WHL_LIBRARY_BZL);
        context.insert("whl_libraries", &whl_libraries);
        context.insert("mappings", &mappings);

        let mut rendered = self
            .tera
            .render(REQUIREMENTS_TEMPLATE_NAME, &context)
            .map_err(|e| template_error(&e))?;
        rendered.push('\n');

        tracing::trace!("Rendered requirements file:\n{}", rendered);
        Ok(rendered)
    }
}

fn template_error(error: &tera::Error) -> PipImportError {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    PipImportError::TemplateError {
        message,
    }
}
