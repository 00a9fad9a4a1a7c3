use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use folio_terminal::{Span, Style, Terminal};

use crate::router::Router;

/// Terminal color for a span style (`None` keeps the default foreground).
pub fn style_color(style: Style) -> Option<Color> {
    match style {
        Style::Plain => None,
        Style::Primary => Some(Color::Green),
        Style::Secondary => Some(Color::Magenta),
        Style::Info => Some(Color::Cyan),
        Style::Muted => Some(Color::DarkGrey),
        Style::Success => Some(Color::Green),
        Style::Error => Some(Color::Red),
    }
}

/// Every screen line, top to bottom, before clipping to the window height.
///
/// The last line is always the live prompt, unless the router has left the
/// terminal page, in which case a placeholder for that page is shown instead.
pub fn screen_lines(term: &Terminal, router: &Router) -> Vec<Vec<Span>> {
    let mut lines: Vec<Vec<Span>> = Vec::new();
    if !router.is_home() {
        let path = router.current().path();
        lines.push(vec![Span::new(Style::Primary, format!("[{path}]"))]);
        lines.push(vec![Span::new(
            Style::Muted,
            "This page lives outside the terminal. Type 'cd ~' to return.",
        )]);
        lines.push(Vec::new());
    }

    lines.extend(term.banner().iter_lines().map(<[Span]>::to_vec));
    lines.push(Vec::new());

    for entry in term.scrollback().entries() {
        lines.push(prompt_line(term.prompt(), &entry.command));
        lines.extend(entry.output.iter_lines().map(<[Span]>::to_vec));
    }
    lines.push(prompt_line(term.prompt(), term.input()));
    lines
}

fn prompt_line(prompt: &str, text: &str) -> Vec<Span> {
    vec![Span::new(Style::Success, prompt), Span::plain(format!(" {text}"))]
}

/// Redraw the whole screen, keeping the newest `rows` lines.
pub fn draw<W: Write>(out: &mut W, term: &Terminal, router: &Router, rows: u16) -> std::io::Result<()> {
    let lines = screen_lines(term, router);
    let skip = lines.len().saturating_sub(usize::from(rows.max(1)));

    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for (i, line) in lines.iter().skip(skip).enumerate() {
        if i > 0 {
            queue!(out, Print("\r\n"))?;
        }
        for span in line {
            match style_color(span.style) {
                Some(color) => queue!(
                    out,
                    SetForegroundColor(color),
                    Print(&span.text),
                    ResetColor
                )?,
                None => queue!(out, Print(&span.text))?,
            }
        }
    }
    out.flush()
}
