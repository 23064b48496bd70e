//! The outer HTML document every build wraps its markup in.

use serde::{Deserialize, Serialize};

/// Separator placed between consecutive component fragments.
pub const FRAGMENT_SEPARATOR: &str = "\n";

/// Fixed page shell: head metadata, stylesheet link and a body slot.
///
/// Only plain substitution happens here; the body is inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentShell {
    pub title: String,
    /// Stylesheet href, relative to the written page.
    pub stylesheet: String,
    /// Extra markup appended inside `<head>` (inline styles, meta tags).
    pub head_extra: Option<String>,
    pub body_class: Option<String>,
}

impl Default for DocumentShell {
    fn default() -> Self {
        Self {
            title: "Mamba App".into(),
            stylesheet: "tailwind.css".into(),
            head_extra: None,
            body_class: None,
        }
    }
}

impl DocumentShell {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = href.into();
        self
    }

    pub fn with_head_extra(mut self, markup: impl Into<String>) -> Self {
        self.head_extra = Some(markup.into());
        self
    }

    pub fn with_body_class(mut self, class: impl Into<String>) -> Self {
        self.body_class = Some(class.into());
        self
    }

    /// Join fragments in order and wrap them in the shell.
    pub fn compose<I, S>(&self, fragments: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let body = fragments
            .into_iter()
            .map(|f| f.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(FRAGMENT_SEPARATOR);
        self.wrap(&body)
    }

    /// Insert an already-joined body into the shell.
    pub fn wrap(&self, body: &str) -> String {
        let body_open = match &self.body_class {
            Some(class) => format!("<body class=\"{class}\">"),
            None => "<body>".to_owned(),
        };
        let head_extra = self
            .head_extra
            .as_deref()
            .map(|extra| format!("    {extra}\n"))
            .unwrap_or_default();

        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             \x20   <meta charset=\"UTF-8\">\n\
             \x20   <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             \x20   <title>{title}</title>\n\
             \x20   <link href=\"{stylesheet}\" rel=\"stylesheet\">\n\
             {head_extra}\
             </head>\n\
             {body_open}\n\
             {body}\n\
             </body>\n\
             </html>\n",
            title = self.title,
            stylesheet = self.stylesheet,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_keeps_order() {
        let page = DocumentShell::default().compose(["NAV", "HERO", "FOOT"]);
        let nav = page.find("NAV").unwrap();
        let hero = page.find("HERO").unwrap();
        let foot = page.find("FOOT").unwrap();
        assert!(nav < hero && hero < foot);
    }

    #[test]
    fn shell_has_doctype_and_stylesheet() {
        let page = DocumentShell::new("Demo").wrap("<main></main>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Demo</title>"));
        assert!(page.contains("<link href=\"tailwind.css\" rel=\"stylesheet\">"));
        assert!(page.contains("<body>\n<main></main>\n</body>"));
    }

    #[test]
    fn optional_head_and_body_class() {
        let page = DocumentShell::default()
            .with_head_extra("<style>html { scroll-behavior: smooth; }</style>")
            .with_body_class("bg-gray-50")
            .wrap("");
        assert!(page.contains("    <style>html { scroll-behavior: smooth; }</style>\n</head>"));
        assert!(page.contains("<body class=\"bg-gray-50\">"));
    }

    #[test]
    fn empty_fragment_list_gives_empty_body() {
        let page = DocumentShell::default().compose(Vec::<String>::new());
        assert!(page.contains("<body>\n\n</body>"));
    }
}
