/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Template rendering.
//!
//! Templates are Handlebars files looked up by name under the template root
//! and compiled on first use. Every template can call the `camel` and
//! `dromedary` naming helpers and the `includes` list test. Output is not
//! HTML-escaped.

use chrono::{Local, NaiveDate};
use handlebars::{Handlebars, handlebars_helper, no_escape};
use rqlgen_core::error::{RenderError, Result};
use rqlgen_core::naming;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

handlebars_helper!(camel: |name: str| naming::camel(name));
handlebars_helper!(dromedary: |name: str| naming::dromedary(name));
handlebars_helper!(includes: |tags: Json, tag: str| {
    tags.as_array()
        .is_some_and(|tags| tags.iter().any(|t| t.as_str() == Some(tag)))
});

/// Builds the comment block written at the top of every generated file.
///
/// # Arguments
/// * `tool_name` - Name of the generator
/// * `date` - Generation date
/// * `template_path` - Path of the template used
/// * `output_path` - Path of the generated file
#[must_use]
pub fn autogenerated_header(
    tool_name: &str,
    date: NaiveDate,
    template_path: &Path,
    output_path: &Path,
) -> String {
    let relative = pathdiff::diff_paths(template_path, output_path)
        .unwrap_or_else(|| template_path.to_path_buf());

    format!(
        "// Autogenerated by {} on {}.\n\
         // Do not edit this file directly.\n\
         // The template for this file is located at:\n\
         // {}\n",
        tool_name,
        date.format("%Y-%m-%d"),
        relative.display()
    )
}

/// Renders named templates into files with a generated-file header.
#[derive(Debug)]
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
    template_dir: PathBuf,
    tool_name: String,
    date: NaiveDate,
}

impl TemplateRenderer {
    /// Creates a renderer for templates under `template_dir`, dated today.
    #[must_use]
    pub fn new(template_dir: impl Into<PathBuf>, tool_name: impl Into<String>) -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        registry.register_helper("camel", Box::new(camel));
        registry.register_helper("dromedary", Box::new(dromedary));
        registry.register_helper("includes", Box::new(includes));

        Self {
            registry,
            template_dir: template_dir.into(),
            tool_name: tool_name.into(),
            date: Local::now().date_naive(),
        }
    }

    /// Overrides the date written into headers.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Returns the path a template name resolves to.
    #[must_use]
    pub fn template_path(&self, template: &str) -> PathBuf {
        self.template_dir.join(template)
    }

    /// Renders a template to a string, without header.
    ///
    /// # Errors
    /// Returns `RenderError` if the template cannot be loaded or rendered.
    pub fn render_to_string<C: Serialize>(
        &mut self,
        template: &str,
        context: &C,
    ) -> Result<String> {
        self.ensure_registered(template)?;
        let rendered = self
            .registry
            .render(template, context)
            .map_err(|e| RenderError::Render {
                name: template.to_string(),
                reason: e.to_string(),
            })?;
        Ok(rendered)
    }

    /// Renders a template into `output_dir/output_name`.
    ///
    /// The output directory is created if needed and an existing file is
    /// overwritten.
    ///
    /// # Errors
    /// Returns `GenError` if the template fails or the file cannot be written.
    pub fn render<C: Serialize>(
        &mut self,
        template: &str,
        output_dir: &Path,
        output_name: &str,
        context: &C,
    ) -> Result<PathBuf> {
        let output_path = output_dir.join(output_name);
        info!("Rendering {}", output_path.display());

        let body = self.render_to_string(template, context)?;
        let mut contents = autogenerated_header(
            &self.tool_name,
            self.date,
            &self.template_path(template),
            &output_path,
        );
        contents.push_str(&body);

        fs::create_dir_all(output_dir)?;
        fs::write(&output_path, contents)?;
        Ok(output_path)
    }

    fn ensure_registered(&mut self, template: &str) -> Result<()> {
        if self.registry.has_template(template) {
            return Ok(());
        }
        let path = self.template_path(template);
        self.registry
            .register_template_file(template, &path)
            .map_err(|e| RenderError::Template {
                name: template.to_string(),
                path,
                reason: e.to_string(),
            })?;
        Ok(())
    }
}
