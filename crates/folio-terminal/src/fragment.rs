//! Structured command output.
//!
//! A [`Fragment`] is a list of lines, each a list of styled [`Span`]s. Text is
//! stored raw and escaped only when rendered to HTML, so a command can safely
//! echo user input back.

use std::fmt;

/// Visual role of a span. Maps onto the site's `text-*` CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Plain,
    Primary,
    Secondary,
    Info,
    Muted,
    Success,
    Error,
}

impl Style {
    /// CSS class for the HTML renderer (`None` for plain text).
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Primary => Some("text-primary"),
            Self::Secondary => Some("text-secondary"),
            Self::Info => Some("text-info"),
            Self::Muted => Some("text-muted"),
            Self::Success => Some("text-success"),
            Self::Error => Some("text-error"),
        }
    }
}

/// A run of text in a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Style::Plain, text)
    }
}

/// Output of one command: zero or more lines of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    lines: Vec<Vec<Span>>,
}

impl Fragment {
    /// A fragment with no visible output.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single line in one style.
    pub fn line(style: Style, text: impl Into<String>) -> Self {
        let mut f = Self::empty();
        f.push_line(style, text);
        f
    }

    /// One line per item, all in the same style.
    pub fn lines<I, S>(style: Style, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut f = Self::empty();
        for l in lines {
            f.push_line(style, l);
        }
        f
    }

    /// Builder form of [`Fragment::push_line`].
    pub fn with_line(mut self, style: Style, text: impl Into<String>) -> Self {
        self.push_line(style, text);
        self
    }

    pub fn push_line(&mut self, style: Style, text: impl Into<String>) {
        self.lines.push(vec![Span::new(style, text)]);
    }

    /// Append a line made of several spans.
    pub fn push_spans(&mut self, spans: Vec<Span>) {
        self.lines.push(spans);
    }

    /// Append an empty separator line.
    pub fn push_blank(&mut self) {
        self.lines.push(Vec::new());
    }

    /// Append every line of `other`.
    pub fn extend(&mut self, other: Fragment) {
        self.lines.extend(other.lines);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines as span slices, for renderers.
    pub fn iter_lines(&self) -> impl Iterator<Item = &[Span]> {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Unstyled text, lines joined with `\n`.
    pub fn to_plain(&self) -> String {
        self.lines
            .iter()
            .map(|spans| spans.iter().map(|s| s.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether the unstyled text contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.to_plain().contains(needle)
    }

    /// Render as HTML. Every span's text is escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for spans in &self.lines {
            out.push_str("<div>");
            if spans.iter().all(|s| s.text.is_empty()) {
                out.push_str("<br>");
            }
            for span in spans {
                let text = escape_html(&span.text);
                match span.style.css_class() {
                    Some(class) => {
                        out.push_str(&format!("<span class=\"{class}\">{text}</span>"));
                    },
                    None => out.push_str(&text),
                }
            }
            out.push_str("</div>");
        }
        out
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain())
    }
}

/// Escape text for interpolation into HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
