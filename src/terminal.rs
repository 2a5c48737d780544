//! Terminal output of source panes using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::error::Result;
use crate::lexer::Token;
use crate::render::SourcePane;
use crate::segment::SegmentKind;
use crate::syntax::{Color, Style};

/// Convert a highlight colour to a crossterm colour
fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
        Color::Rgb(r, g, b) => style::Color::Rgb { r, g, b },
    }
}

/// Writes highlighted panes to a terminal or any other writer
pub struct PaneWriter<'c, W: Write> {
    out: W,
    config: &'c Config,
}

impl<'c, W: Write> PaneWriter<'c, W> {
    pub fn new(out: W, config: &'c Config) -> Self {
        Self { out, config }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write all panes, one after the other
    pub fn write_panes(&mut self, panes: &[SourcePane<'_>]) -> Result<()> {
        for (i, pane) in panes.iter().enumerate() {
            if i > 0 {
                queue!(self.out, Print("\n"))?;
            }
            self.write_pane(pane)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Write one pane: badge header, then the highlighted source
    pub fn write_pane(&mut self, pane: &SourcePane<'_>) -> Result<()> {
        if self.config.badges {
            let width = pane
                .text
                .lines()
                .map(|line| self.expand_tabs(line).width())
                .max()
                .unwrap_or(0);
            self.write_badge(pane.kind, width)?;
        }

        for token in &pane.tokens {
            self.write_token(token)?;
        }
        queue!(self.out, Print("\n"))?;
        Ok(())
    }

    /// Write a header rule ending in the segment badge, padded to `width`
    fn write_badge(&mut self, kind: SegmentKind, width: usize) -> Result<()> {
        let label = format!(" {} ", kind.label());
        let rule = "─".repeat(width.saturating_sub(label.width()).max(2));

        queue!(self.out, Print(&rule))?;
        if self.config.color {
            queue!(
                self.out,
                SetForegroundColor(to_crossterm(kind.badge_color())),
                SetAttribute(Attribute::Bold),
                Print(&label),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        } else {
            queue!(self.out, Print(&label))?;
        }
        queue!(self.out, Print("\n"))?;
        Ok(())
    }

    fn write_token(&mut self, token: &Token<'_>) -> Result<()> {
        let text = self.expand_tabs(token.text);
        let style = match token.style {
            Some(token_type) if self.config.color => self.config.style_for(token_type),
            _ => Style::default(),
        };

        if style.is_default() {
            queue!(self.out, Print(text))?;
        } else {
            self.apply_style(&style)?;
            queue!(self.out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
        }
        Ok(())
    }

    fn apply_style(&mut self, style: &Style) -> Result<()> {
        if style.fg != Color::Default {
            queue!(self.out, SetForegroundColor(to_crossterm(style.fg)))?;
        }
        if style.bg != Color::Default {
            queue!(self.out, SetBackgroundColor(to_crossterm(style.bg)))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        Ok(())
    }

    fn expand_tabs(&self, text: &str) -> String {
        text.replace('\t', &" ".repeat(self.config.tab_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::SwarnamTokenizer;

    fn plain_config() -> Config {
        Config {
            color: false,
            ..Config::default()
        }
    }

    fn pane<'a>(tokenizer: &SwarnamTokenizer, kind: SegmentKind, text: &'a str) -> SourcePane<'a> {
        SourcePane {
            kind,
            text,
            tokens: tokenizer.classify(kind, text),
        }
    }

    #[test]
    fn test_plain_output() {
        let tokenizer = SwarnamTokenizer::builtin();
        let config = plain_config();
        let mut writer = PaneWriter::new(Vec::new(), &config);

        writer
            .write_pane(&pane(&tokenizer, SegmentKind::Style, "a {\n\tcolor: red;\n}"))
            .unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], format!("{} CSS ", "─".repeat(10)));
        assert_eq!(lines[1], "a {");
        assert_eq!(lines[2], "    color: red;");
        assert_eq!(lines[3], "}");
    }

    #[test]
    fn test_no_badges() {
        let tokenizer = SwarnamTokenizer::builtin();
        let config = Config {
            badges: false,
            ..plain_config()
        };
        let mut writer = PaneWriter::new(Vec::new(), &config);

        writer
            .write_panes(&[
                pane(&tokenizer, SegmentKind::Markup, "<b>x</b>"),
                pane(&tokenizer, SegmentKind::Script, "go();"),
            ])
            .unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "<b>x</b>\n\ngo();\n");
    }

    #[test]
    fn test_unstyled_class_prints_plain() {
        let tokenizer = SwarnamTokenizer::builtin();
        let config = Config {
            badges: false,
            ..Config::default()
        };
        let mut writer = PaneWriter::new(Vec::new(), &config);

        writer
            .write_pane(&pane(&tokenizer, SegmentKind::Style, "{};"))
            .unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "{};\n");
    }

    #[test]
    fn test_colored_output_has_escapes() {
        let tokenizer = SwarnamTokenizer::builtin();
        let config = Config::default();
        let mut writer = PaneWriter::new(Vec::new(), &config);

        writer
            .write_pane(&pane(&tokenizer, SegmentKind::Markup, "<b>x</b>"))
            .unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("HTML"));
    }
}
