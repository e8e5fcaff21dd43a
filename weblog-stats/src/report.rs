use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Shown to whoever runs the tool.
    Notice,
    /// Meant for the operator's log.
    Warning,
}

/// Destination for everything the pipeline has to say.
pub trait Diagnostics {
    fn emit(&mut self, severity: Severity, message: String);

    fn notice(&mut self, message: impl Into<String>) {
        self.emit(Severity::Notice, message.into());
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.emit(Severity::Warning, message.into());
    }
}

/// Notices go to stdout, warnings to the tracing subscriber.
#[derive(Debug, Default)]
pub struct Console;

impl Diagnostics for Console {
    fn emit(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Notice => println!("{message}"),
            Severity::Warning => warn!("{message}"),
        }
    }
}

/// Keeps every message in order.
#[cfg(test)]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript(pub Vec<(Severity, String)>);

#[cfg(test)]
impl Transcript {
    pub fn notices(&self) -> Vec<&str> {
        self.with(Severity::Notice)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.with(Severity::Warning)
    }

    fn with(&self, severity: Severity) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

#[cfg(test)]
impl Diagnostics for Transcript {
    fn emit(&mut self, severity: Severity, message: String) {
        self.0.push((severity, message));
    }
}
