//! Where context messages go.

/// Line-oriented output sink for a context.
///
/// Messages are plain text, one per call. Implementations decide where the
/// line ends up: [`Stdout`] prints it, [`Transcript`] keeps it in memory.
pub trait Console {
    /// Emit one line of output.
    fn line(&mut self, text: &str);
}

/// Prints every line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdout;

impl Console for Stdout {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Records lines in memory.
///
/// # Example
///
/// ```rust
/// use statecraft::effects::{Console, Transcript};
///
/// let mut transcript = Transcript::new();
/// transcript.line("hello");
/// assert_eq!(transcript.lines(), ["hello"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded line, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Most recently recorded line.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Whether any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Forget all recorded lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Console for Transcript {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn line(&mut self, text: &str) {
        (**self).line(text);
    }
}
