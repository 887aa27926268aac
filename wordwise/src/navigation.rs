use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Learn,
    Practice,
    Search,
    Profile,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::Learn,
        View::Practice,
        View::Search,
        View::Profile,
    ];

    pub fn command(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Learn => "learn",
            View::Practice => "practice",
            View::Search => "search",
            View::Profile => "profile",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// What is on screen: one of the main views, or the dictionary overlay on
/// top of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main(View),
    Dictionary { over: View },
}

impl Screen {
    pub fn on(self, event: NavEvent) -> Transition {
        match (self, event) {
            (_, NavEvent::Quit) => Transition::Exit,
            (Screen::Main(_), NavEvent::Go(view)) => Transition::To(Screen::Main(view)),
            (Screen::Main(View::Home), NavEvent::OpenDictionary) => {
                Transition::To(Screen::Dictionary { over: View::Home })
            }
            (Screen::Dictionary { over }, NavEvent::CloseDictionary) => {
                Transition::To(Screen::Main(over))
            }
            // the overlay hides the navigation bar, close it first
            (Screen::Dictionary { .. }, NavEvent::Go(_) | NavEvent::OpenDictionary) => {
                Transition::Ignored
            }
            (Screen::Main(_), NavEvent::OpenDictionary | NavEvent::CloseDictionary) => {
                Transition::Ignored
            }
        }
    }

    pub fn label(self) -> String {
        match self {
            Screen::Main(view) => view.to_string(),
            Screen::Dictionary { over } => format!("{over}/dictionary"),
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Main(View::Home)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Go(View),
    OpenDictionary,
    CloseDictionary,
    Quit,
}

impl NavEvent {
    /// Recognizes navigation commands shared by every screen.
    pub fn parse(command: &str) -> Option<NavEvent> {
        let event = match command.trim().to_ascii_lowercase().as_str() {
            "home" | "h" => NavEvent::Go(View::Home),
            "learn" => NavEvent::Go(View::Learn),
            "practice" => NavEvent::Go(View::Practice),
            "search" => NavEvent::Go(View::Search),
            "profile" => NavEvent::Go(View::Profile),
            "define" | "dictionary" | "dict" => NavEvent::OpenDictionary,
            "close" => NavEvent::CloseDictionary,
            "exit" | "leave" | "quit" | "e" | "q" => NavEvent::Quit,
            _ => return None,
        };
        Some(event)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    To(Screen),
    Exit,
    Ignored,
}
