//! Resume generation with Tera templates

use std::fs;
use std::path::{Path, PathBuf};

use rust_embed::Embed;
use tera::Tera;

use crate::core::context::TemplateContext;
use crate::core::error::TemplateError;
use crate::render::latex;

#[derive(Embed)]
#[folder = "templates/"]
struct BuiltinTemplates;

/// Name of the built-in LaTeX template used when no template path is given.
pub const DEFAULT_TEMPLATE: &str = "resume.tex.tera";

/// Starter data files shipped for `vitae init`, as (file name, contents).
pub fn starter_files() -> Vec<(String, String)> {
    BuiltinTemplates::iter()
        .filter_map(|name| {
            let file = name.as_ref().strip_prefix("starter/")?.to_string();
            let asset = BuiltinTemplates::get(name.as_ref())?;
            Some((file, String::from_utf8_lossy(&asset.data).into_owned()))
        })
        .collect()
}

/// Renders a validated [`TemplateContext`] through one Tera template.
#[derive(Debug)]
pub struct Generator {
    tera: Tera,
    template_name: String,
}

impl Generator {
    /// Load a template from a file on disk.
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        if !path.exists() {
            return Err(TemplateError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let source = fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template".to_string());

        Self::from_source(&name, &source)
    }

    /// Load the built-in LaTeX resume template.
    pub fn builtin() -> Result<Self, TemplateError> {
        let asset = BuiltinTemplates::get(DEFAULT_TEMPLATE).ok_or_else(|| {
            TemplateError::NotFound {
                path: PathBuf::from(DEFAULT_TEMPLATE),
            }
        })?;
        let source = String::from_utf8_lossy(&asset.data);
        Self::from_source(DEFAULT_TEMPLATE, &source)
    }

    fn from_source(name: &str, source: &str) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.register_filter("latex_escape", latex::tera_filter);
        tera.add_raw_template(name, source)
            .map_err(|source| TemplateError::Parse {
                name: name.to_string(),
                source,
            })?;

        Ok(Self {
            tera,
            template_name: name.to_string(),
        })
    }

    /// The name the template was registered under.
    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    /// Render the context into the output text.
    pub fn render(&self, context: &TemplateContext) -> Result<String, TemplateError> {
        let ctx = tera::Context::from_serialize(context).map_err(|source| {
            TemplateError::Render {
                name: self.template_name.clone(),
                source,
            }
        })?;

        self.tera
            .render(&self.template_name, &ctx)
            .map_err(|source| TemplateError::Render {
                name: self.template_name.clone(),
                source,
            })
    }

    /// Render and write to `output`, creating parent directories as needed
    /// and overwriting any existing file.
    pub fn render_to_file(
        &self,
        context: &TemplateContext,
        output: &Path,
    ) -> Result<(), TemplateError> {
        let content = self.render(context)?;

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| TemplateError::Write {
                    path: output.to_path_buf(),
                    source,
                })?;
            }
        }

        fs::write(output, content).map_err(|source| TemplateError::Write {
            path: output.to_path_buf(),
            source,
        })
    }
}
