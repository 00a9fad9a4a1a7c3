use folio_terminal::Destination;

/// Tracks which page the terminal front-end is showing.
///
/// The terminal itself lives on [`Destination::Home`]; any other page is
/// shown as a placeholder until the user navigates back with `cd`.
#[derive(Debug, Clone)]
pub struct Router {
    current: Destination,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current: Destination::Home,
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, dest: Destination) {
        log::debug!("navigate: {} -> {}", self.current.path(), dest.path());
        self.current = dest;
    }

    pub fn current(&self) -> &Destination {
        &self.current
    }

    pub fn is_home(&self) -> bool {
        self.current == Destination::Home
    }
}
