//! Static site generation
//!
//! Renders the navigation shell and the three views into plain HTML files.
//! Templates and the stylesheet are compiled into the binary.

pub mod routes;
pub mod views;

pub use routes::{navigation, NavItem, Route};

use rust_embed::Embed;
use std::path::{Path, PathBuf};
use tera::Tera;
use thiserror::Error;

use crate::core::catalog::Catalog;
use crate::core::config::Config;
use crate::core::documents::DocumentStats;
use crate::core::layout::PYRAMID_WIDTH_PX;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Stylesheet path relative to the output root
pub const STYLESHEET: &str = "assets/site.css";

#[derive(Debug, Error, miette::Diagnostic)]
pub enum SiteError {
    #[error("Template rendering error: {0}")]
    #[diagnostic(code(imslc::site::template))]
    Template(String),

    #[error("Missing embedded asset: {0}")]
    #[diagnostic(code(imslc::site::asset))]
    MissingAsset(String),

    #[error("Failed to write {path}: {source}")]
    #[diagnostic(code(imslc::site::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<tera::Error> for SiteError {
    fn from(err: tera::Error) -> Self {
        // Tera nests the useful message in the source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(inner) = source {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            source = inner.source();
        }
        SiteError::Template(message)
    }
}

/// Files written by a build
#[derive(Debug, Default)]
pub struct BuildReport {
    pub files: Vec<PathBuf>,
}

/// Renders the knowledge base into HTML pages
pub struct SiteBuilder<'a> {
    catalog: &'a Catalog,
    config: &'a Config,
    tera: Tera,
}

impl<'a> SiteBuilder<'a> {
    /// Create a builder with the embedded templates
    pub fn new(catalog: &'a Catalog, config: &'a Config) -> Result<Self, SiteError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html.tera"]);

        let mut sources = Vec::new();
        for file in EmbeddedTemplates::iter() {
            let filename = file.as_ref();
            if !filename.ends_with(".tera") {
                continue;
            }
            if let Some(content) = EmbeddedTemplates::get(filename) {
                let text = String::from_utf8(content.data.into_owned())
                    .map_err(|_| SiteError::Template(format!("{} is not UTF-8", filename)))?;
                sources.push((filename.to_string(), text));
            }
        }
        // Added together so `extends` can resolve regardless of order
        tera.add_raw_templates(sources)?;

        Ok(Self {
            catalog,
            config,
            tera,
        })
    }

    fn base_context(&self, route: Route) -> tera::Context {
        let base = self.config.base_path();
        let mut context = tera::Context::new();
        context.insert("site_title", &self.config.site_title());
        context.insert("page_title", route.label());
        context.insert("root", &route.root_prefix(&base));
        context.insert("home_href", &route.href_to(Route::Pyramid, &base));
        context.insert("stylesheet", STYLESHEET);
        context.insert("nav", &navigation(route, &base));
        context
    }

    /// Render a single page to a string
    pub fn render(&self, route: Route) -> Result<String, SiteError> {
        let mut context = self.base_context(route);

        match route {
            Route::Pyramid => {
                let height = self.config.pyramid_height();
                context.insert(
                    "stages",
                    &views::stage_views(self.catalog.stages(), height),
                );
                context.insert("container_height", &height);
                context.insert("container_width", &PYRAMID_WIDTH_PX);
            }
            Route::Quality => {
                context.insert("indicators", &views::indicator_views(self.catalog.indicators()));
                context.insert("connectors", &views::connector_views());
            }
            Route::Documents => {
                let documents = self.catalog.documents();
                let stats = DocumentStats::from_documents(&documents);
                let cards: Vec<views::DocumentView> =
                    documents.iter().map(views::DocumentView::from).collect();
                context.insert("documents", &cards);
                context.insert("filters", &views::filter_options());
                context.insert("stats", &views::stat_views(&stats));
            }
        }

        Ok(self.tera.render(route.template(), &context)?)
    }

    /// Render every page and the stylesheet under `out_dir`
    pub fn build(&self, out_dir: &Path) -> Result<BuildReport, SiteError> {
        let mut report = BuildReport::default();

        for route in Route::ALL {
            let html = self.render(route)?;
            let path = out_dir.join(route.output_file());
            write_file(&path, html.as_bytes())?;
            tracing::info!(route = route.path(), path = %path.display(), "rendered page");
            report.files.push(path);
        }

        let css = EmbeddedTemplates::get("site.css")
            .ok_or_else(|| SiteError::MissingAsset("site.css".to_string()))?;
        let css_path = out_dir.join(STYLESHEET);
        write_file(&css_path, &css.data)?;
        report.files.push(css_path);

        Ok(report)
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), SiteError> {
    let io_err = |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, contents).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fixture() -> (Catalog, Config) {
        (Catalog::load_embedded().unwrap(), Config::default())
    }

    #[test]
    fn test_pyramid_page_has_every_stage_and_modal() {
        let (catalog, config) = fixture();
        let builder = SiteBuilder::new(&catalog, &config).unwrap();
        let html = builder.render(Route::Pyramid).unwrap();

        for stage in catalog.stages() {
            assert!(html.contains(&format!("href=\"#stage-{}\"", stage.id)));
            assert!(html.contains(&format!("id=\"stage-{}\"", stage.id)));
        }
        assert!(html.contains("width: 98%; left: 1%; top: 0px;"));
        assert!(html.contains("Меры минимизации"));
        assert!(html.contains("badge badge-danger"));
    }

    #[test]
    fn test_quality_page_has_tree_and_lists() {
        let (catalog, config) = fixture();
        let builder = SiteBuilder::new(&catalog, &config).unwrap();
        let html = builder.render(Route::Quality).unwrap();

        assert_eq!(html.matches("<line ").count(), 6);
        assert!(html.contains("top: 10%; left: 50%;"));
        for indicator in catalog.indicators() {
            assert!(html.contains(&format!("id=\"ind-{}\"", indicator.id)));
        }
        // Modal lists the indicator's own documents
        assert!(html.contains("ГОСТ 27.002-2015"));
    }

    #[test]
    fn test_documents_page_has_filter_and_stats() {
        let (catalog, config) = fixture();
        let builder = SiteBuilder::new(&catalog, &config).unwrap();
        let html = builder.render(Route::Documents).unwrap();
        let docs = catalog.documents();

        assert_eq!(html.matches("data-doc ").count(), docs.len());
        assert!(html.contains("value=\"law\""));
        assert!(html.contains("Документы не найдены"));
        assert!(html.contains("Всего документов"));
        assert!(html.contains(&format!("id=\"doc-count\">{}<", docs.len())));
    }

    #[test]
    fn test_nav_links_are_relative() {
        let (catalog, config) = fixture();
        let builder = SiteBuilder::new(&catalog, &config).unwrap();

        let home = builder.render(Route::Pyramid).unwrap();
        assert!(home.contains("href=\"./quality/index.html\""));

        let quality = builder.render(Route::Quality).unwrap();
        assert!(quality.contains("href=\"../index.html\""));
        assert!(quality.contains("href=\"../assets/site.css\""));
    }

    #[test]
    fn test_site_title_is_escaped() {
        let catalog = Catalog::load_embedded().unwrap();
        let config = Config {
            site_title: Some("<b>ИМС</b>".to_string()),
            ..Default::default()
        };
        let builder = SiteBuilder::new(&catalog, &config).unwrap();
        let html = builder.render(Route::Pyramid).unwrap();
        assert!(!html.contains("<b>ИМС</b>"));
        assert!(html.contains("&lt;b&gt;ИМС"));
    }

    #[test]
    fn test_build_writes_all_files() {
        let (catalog, config) = fixture();
        let builder = SiteBuilder::new(&catalog, &config).unwrap();
        let dir = tempdir().unwrap();

        let report = builder.build(dir.path()).unwrap();

        assert_eq!(report.files.len(), 4);
        assert!(dir.path().join("index.html").is_file());
        assert!(dir.path().join("quality/index.html").is_file());
        assert!(dir.path().join("documents/index.html").is_file());
        assert!(dir.path().join("assets/site.css").is_file());
    }
}
