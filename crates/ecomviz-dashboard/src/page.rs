//! Display surfaces the dashboard is written to.

use crate::{DashboardError, DashboardResult};

/// Receives the page header, the subsection titles and the charts, in order.
pub trait DisplaySurface {
    /// Page header.
    fn header(&mut self, text: &str);

    /// Start a subsection.
    fn subheader(&mut self, text: &str);

    /// Place an SVG chart in the current subsection.
    fn chart(&mut self, svg: &[u8]) -> DashboardResult<()>;
}

/// A standalone HTML document with the charts inlined as SVG.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    title: String,
    body: String,
    section_open: bool,
}

impl HtmlPage {
    /// Create an empty page with the given document title.
    pub fn new(title: &str) -> Self {
        Self {
            title: escape_html(title),
            body: String::new(),
            section_open: false,
        }
    }

    fn close_section(&mut self) {
        if self.section_open {
            self.body.push_str("</section>\n");
            self.section_open = false;
        }
    }

    /// Finish the document.
    pub fn finish(mut self) -> String {
        self.close_section();
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
             <style>body{{font-family:sans-serif;margin:2rem auto;max-width:1280px}}section{{margin-bottom:2rem}}</style>\n\
             </head>\n<body>\n{}</body>\n</html>\n",
            self.title, self.body
        )
    }
}

impl DisplaySurface for HtmlPage {
    fn header(&mut self, text: &str) {
        self.body.push_str(&format!("<h1>{}</h1>\n", escape_html(text)));
    }

    fn subheader(&mut self, text: &str) {
        self.close_section();
        self.body
            .push_str(&format!("<section>\n<h2>{}</h2>\n", escape_html(text)));
        self.section_open = true;
    }

    fn chart(&mut self, svg: &[u8]) -> DashboardResult<()> {
        let svg = std::str::from_utf8(svg)
            .map_err(|e| DashboardError::Display(format!("chart is not valid UTF-8: {e}")))?;
        if !svg.contains("<svg") {
            return Err(DashboardError::Display("chart is not an SVG document".to_string()));
        }
        self.body.push_str("<figure>\n");
        self.body.push_str(svg);
        self.body.push_str("\n</figure>\n");
        Ok(())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
