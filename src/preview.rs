//! HTML preview document
//!
//! Builds the standalone document a host shows in its sandboxed frame.
//! Encoding the document for transport is left to the host.

use crate::render::Preview;

/// Preview collaborator producing an HTML document string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlPreview {
    /// Use light text on a dark background
    pub dark_mode: bool,
}

impl HtmlPreview {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    fn text_color(&self) -> &'static str {
        if self.dark_mode {
            "#fff"
        } else {
            "#000"
        }
    }
}

impl Preview for HtmlPreview {
    type Document = String;

    fn render(&mut self, markup: &str, style: &str, script: &str) -> String {
        format!(
            "<style>\n\
             body {{ font-family: sans-serif; color: {color} }}\n\
             </style>\n\
             <style>\n\
             {style}\n\
             </style>\n\
             <div class=\"swarnam-html-container\">\n\
             {markup}\n\
             </div>\n\
             <script>\n\
             {script}\n\
             </script>\n",
            color = self.text_color(),
        )
    }
}
