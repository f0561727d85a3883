//! Terminal rendering of a highlighted buffer using crossterm

use std::io::Write;
use std::ops::Range;

use crossterm::{
    queue,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use crate::error::Result;
use crate::highlight::{MemoryBuffer, TextBuffer};
use crate::syntax::{Color, Style};

/// Map a palette color to crossterm's naming, where the plain names are
/// the bright variants
pub fn to_crossterm(color: Color) -> style::Color {
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
    }
}

/// Writes buffer lines with their tag styles applied
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    /// Prefix each line with its 1-based number
    pub line_numbers: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_numbers(mut self) -> Self {
        self.line_numbers = true;
        self
    }

    /// Render `lines` (clamped to the buffer) to `out`
    pub fn render<W: Write>(&self, buffer: &MemoryBuffer, lines: Range<usize>, out: &mut W) -> Result<()> {
        let end = lines.end.min(buffer.line_count());
        let width = end.to_string().len();

        for line in lines.start.min(end)..end {
            if self.line_numbers {
                queue!(
                    out,
                    SetForegroundColor(style::Color::DarkGrey),
                    Print(format!("{:>width$} ", line + 1, width = width)),
                    ResetColor
                )?;
            }
            self.render_line(buffer, line, out)?;
            queue!(out, Print("\n"))?;
        }

        out.flush()?;
        Ok(())
    }

    fn render_line<W: Write>(&self, buffer: &MemoryBuffer, line: usize, out: &mut W) -> Result<()> {
        let Some(text) = buffer.line(line) else {
            return Ok(());
        };
        let start = buffer.line_to_index(line);

        // Group characters into runs sharing one effective style
        let mut run = String::new();
        let mut current: Option<Style> = None;
        for (offset, ch) in text.chars().enumerate() {
            let style = buffer.style_at(start + offset);
            if style != current && !run.is_empty() {
                write_run(out, &run, current)?;
                run.clear();
            }
            current = style;
            run.push(ch);
        }
        if !run.is_empty() {
            write_run(out, &run, current)?;
        }
        Ok(())
    }
}

fn write_run<W: Write>(out: &mut W, text: &str, style: Option<Style>) -> Result<()> {
    let Some(style) = style.filter(|s| !s.is_default()) else {
        queue!(out, Print(text))?;
        return Ok(());
    };

    if style.fg != Color::Default {
        queue!(out, SetForegroundColor(to_crossterm(style.fg)))?;
    }
    if style.bg != Color::Default {
        queue!(out, SetBackgroundColor(to_crossterm(style.bg)))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
    Ok(())
}
