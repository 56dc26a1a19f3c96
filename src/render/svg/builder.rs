//! Standalone SVG document builder.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::{coord, html_escape};
use super::style::ChartColor;

/// Composes elements into one `<svg>` document.
///
/// Drawing happens in viewBox units; `pixel_size` only sets the rendered
/// `width`/`height` attributes.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    pixel_size: Option<(f64, f64)>,
    title: String,
    background: Option<ChartColor>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pixel_size: None,
            title: String::new(),
            background: None,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn with_pixel_size(mut self, width: f64, height: f64) -> Self {
        self.pixel_size = Some((width, height));
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: ChartColor) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    /// Append in place, for loops that add many elements.
    pub fn add_raw(&mut self, svg: impl Into<String>) {
        self.elements.push(svg.into());
    }

    pub fn add_element<E: SvgElement>(&mut self, element: &E) {
        self.elements.push(element.render());
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let size_attrs = self
            .pixel_size
            .map(|(w, h)| format!(r#" width="{}" height="{}""#, coord(w), coord(h)))
            .unwrap_or_default();
        let _ = writeln!(
            output,
            r#"<svg{size_attrs} viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img" font-family="sans-serif">"#,
            coord(self.width),
            coord(self.height)
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        if let Some(background) = &self.background {
            let _ = writeln!(
                output,
                r#"    <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
                coord(self.width),
                coord(self.height),
                background.to_css()
            );
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>\n");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
