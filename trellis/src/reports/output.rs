//! Sinks for the summaries printed by `trellis` commands.

/// Where a command summary is printed.
///
/// The `new`, `list` and `info` reports only speak in these terms (template
/// headings, generated file entries, repository warnings) so tests can
/// capture them as plain text.
pub trait Output {
    /// Heading for the whole summary, e.g. the project or template name.
    fn title(&mut self, text: &str);

    /// Group heading such as a feature or the base file list.
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    /// An entry under a section: a template, feature or next step.
    fn list_item(&mut self, text: &str);

    /// A file that was (or would be) created in the project.
    fn added_item(&mut self, text: &str);

    /// Non-fatal problem, e.g. ignored features or a failed `git` run.
    fn warning(&mut self, msg: &str);

    /// Separator introducing a previewed file body.
    fn divider(&mut self, label: &str);

    /// Verbatim file content in a dry-run preview.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A command summary that knows how to print itself.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints summaries to stdout; warnings go to stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", text);
        println!("{}", "=".repeat(text.chars().count()));
    }

    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Captures a summary line by line for snapshot tests.
#[cfg(test)]
#[derive(Default)]
pub struct TextOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl TextOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for TextOutput {
    fn title(&mut self, text: &str) {
        self.lines.push(format!("# {}", text));
    }

    fn section(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("  - {}", text));
    }

    fn added_item(&mut self, text: &str) {
        self.lines.push(format!("  + {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("-- {} --", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
