//! Navigation shell: the pages of the generated site and links between them

use serde::Serialize;

/// A page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/` - lifecycle pyramid
    Pyramid,
    /// `/quality/` - quality indicator tree
    Quality,
    /// `/documents/` - aggregated regulatory documents
    Documents,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Pyramid, Route::Quality, Route::Documents];

    /// Path of the route relative to the site root
    pub fn path(&self) -> &'static str {
        match self {
            Route::Pyramid => "/",
            Route::Quality => "/quality/",
            Route::Documents => "/documents/",
        }
    }

    /// Directory holding the page, relative to the output root
    fn dir(&self) -> &'static str {
        match self {
            Route::Pyramid => "",
            Route::Quality => "quality/",
            Route::Documents => "documents/",
        }
    }

    /// File written for this route, relative to the output root
    pub fn output_file(&self) -> String {
        format!("{}index.html", self.dir())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Pyramid => "Пирамида",
            Route::Quality => "Показатели качества",
            Route::Documents => "Нормативные документы",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            Route::Pyramid => "pyramid.html.tera",
            Route::Quality => "quality.html.tera",
            Route::Documents => "documents.html.tera",
        }
    }

    /// Prefix leading from this page back to the site root
    ///
    /// A relative base ("./") is resolved per page depth so the bundle works
    /// from any sub-path; any other base is used verbatim.
    pub fn root_prefix(&self, base: &str) -> String {
        if base != "./" {
            return base.to_string();
        }
        let depth = self.dir().matches('/').count();
        if depth == 0 {
            "./".to_string()
        } else {
            "../".repeat(depth)
        }
    }

    /// Link from this page to `target`
    pub fn href_to(&self, target: Route, base: &str) -> String {
        format!("{}{}", self.root_prefix(base), target.output_file())
    }
}

/// One entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Navigation bar as seen from `current`
pub fn navigation(current: Route, base: &str) -> Vec<NavItem> {
    Route::ALL
        .into_iter()
        .map(|route| NavItem {
            label: route.label(),
            href: current.href_to(route, base),
            active: route == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_files() {
        assert_eq!(Route::Pyramid.output_file(), "index.html");
        assert_eq!(Route::Quality.output_file(), "quality/index.html");
        assert_eq!(Route::Documents.output_file(), "documents/index.html");
    }

    #[test]
    fn test_relative_links() {
        assert_eq!(Route::Pyramid.href_to(Route::Quality, "./"), "./quality/index.html");
        assert_eq!(Route::Quality.href_to(Route::Pyramid, "./"), "../index.html");
        assert_eq!(
            Route::Documents.href_to(Route::Quality, "./"),
            "../quality/index.html"
        );
    }

    #[test]
    fn test_absolute_base() {
        assert_eq!(Route::Quality.href_to(Route::Pyramid, "/ims/"), "/ims/index.html");
        assert_eq!(Route::Quality.root_prefix("/ims/"), "/ims/");
    }

    #[test]
    fn test_navigation_marks_active() {
        let nav = navigation(Route::Quality, "./");
        assert_eq!(nav.len(), 3);
        assert_eq!(nav.iter().filter(|n| n.active).count(), 1);
        assert!(nav[1].active);
        assert_eq!(nav[0].href, "../index.html");
    }
}
