//! Terminal output for the kiln CLI.

use console::{Style, Term};

/// How a status line is styled.
#[derive(Clone, Copy)]
pub(crate) enum Tone {
    Plain,
    Heading,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn style(self) -> Option<Style> {
        match self {
            Self::Plain => None,
            Self::Heading => Some(Style::new().cyan().bold()),
            Self::Success => Some(Style::new().green()),
            Self::Warning => Some(Style::new().yellow()),
            Self::Error => Some(Style::new().red()),
        }
    }
}

/// Status lines go to stderr so that `--json` output on stdout stays clean.
pub(crate) struct Output {
    status: Term,
    data: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            data: Term::stdout(),
        }
    }

    /// Print a status line to stderr.
    pub(crate) fn line(&self, tone: Tone, msg: &str) {
        let _ = match tone.style() {
            Some(style) => self.status.write_line(&style.apply_to(msg).to_string()),
            None => self.status.write_line(msg),
        };
    }

    /// Print a result line to stdout.
    pub(crate) fn data(&self, line: &str) {
        let _ = self.data.write_line(line);
    }
}
