//! Block-letter rendering for the welcome banner.

/// Glyph height in rows.
const GLYPH_ROWS: usize = 5;

/// Render `text` as five rows of block letters.
///
/// Letters are upper-cased; characters without a glyph render as `?`.
pub fn render_banner(text: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_ROWS];
    for ch in text.to_ascii_uppercase().chars() {
        let glyph = glyph(ch);
        for (row, part) in rows.iter_mut().zip(glyph) {
            row.push_str(part);
            row.push(' ');
        }
    }
    for row in &mut rows {
        let trimmed = row.trim_end().len();
        row.truncate(trimmed);
    }
    rows
}

fn glyph(ch: char) -> [&'static str; GLYPH_ROWS] {
    match ch {
        'A' => [" ██ ", "█  █", "████", "█  █", "█  █"],
        'B' => ["███ ", "█  █", "███ ", "█  █", "███ "],
        'C' => [" ███", "█   ", "█   ", "█   ", " ███"],
        'D' => ["███ ", "█  █", "█  █", "█  █", "███ "],
        'E' => ["████", "█   ", "███ ", "█   ", "████"],
        'F' => ["████", "█   ", "███ ", "█   ", "█   "],
        'G' => [" ███", "█   ", "█ ██", "█  █", " ██ "],
        'H' => ["█  █", "█  █", "████", "█  █", "█  █"],
        'I' => ["███", " █ ", " █ ", " █ ", "███"],
        'J' => ["  ██", "   █", "   █", "█  █", " ██ "],
        'K' => ["█  █", "█ █ ", "██  ", "█ █ ", "█  █"],
        'L' => ["█   ", "█   ", "█   ", "█   ", "████"],
        'M' => ["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
        'N' => ["█  █", "██ █", "█ ██", "█  █", "█  █"],
        'O' => [" ██ ", "█  █", "█  █", "█  █", " ██ "],
        'P' => ["███ ", "█  █", "███ ", "█   ", "█   "],
        'Q' => [" ██ ", "█  █", "█ ██", "█  █", " ███"],
        'R' => ["███ ", "█  █", "███ ", "█ █ ", "█  █"],
        'S' => [" ███", "█   ", " ██ ", "   █", "███ "],
        'T' => ["█████", "  █  ", "  █  ", "  █  ", "  █  "],
        'U' => ["█  █", "█  █", "█  █", "█  █", " ██ "],
        'V' => ["█   █", "█   █", " █ █ ", " █ █ ", "  █  "],
        'W' => ["█   █", "█   █", "█ █ █", "██ ██", "█   █"],
        'X' => ["█  █", "█  █", " ██ ", "█  █", "█  █"],
        'Y' => ["█   █", " █ █ ", "  █  ", "  █  ", "  █  "],
        'Z' => ["████", "   █", "  █ ", " █  ", "████"],
        '0' => [" ██ ", "█  █", "█  █", "█  █", " ██ "],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => [" ██ ", "█  █", "  █ ", " █  ", "████"],
        '3' => ["███ ", "   █", " ██ ", "   █", "███ "],
        '4' => ["█  █", "█  █", "████", "   █", "   █"],
        '5' => ["████", "█   ", "███ ", "   █", "███ "],
        '6' => [" ██ ", "█   ", "███ ", "█  █", " ██ "],
        '7' => ["████", "   █", "  █ ", " █  ", "█   "],
        '8' => [" ██ ", "█  █", " ██ ", "█  █", " ██ "],
        '9' => [" ██ ", "█  █", " ███", "   █", " ██ "],
        ' ' => ["  ", "  ", "  ", "  ", "  "],
        '-' => ["   ", "   ", "███", "   ", "   "],
        '.' => [" ", " ", " ", " ", "█"],
        '!' => ["█", "█", "█", " ", "█"],
        _ => ["    ", " ██ ", "  █ ", "    ", "  █ "],
    }
}
