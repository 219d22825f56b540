//! Tokenization of assembly listing lines.

/// Marker that opens a new function in a listing (`TEXT main.main(SB) ...`).
pub const CONTEXT_MARKER: &str = "TEXT";

/// One line of an assembly listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// A label line; the payload becomes the context for following lines.
    Context(&'a str),
    /// Anything else, split into whitespace-separated tokens.
    Instruction(InstructionLine<'a>),
}

impl<'a> Line<'a> {
    /// Parses one line of text (without its line terminator).
    ///
    /// A line longer than the marker that starts with [`CONTEXT_MARKER`] is a
    /// context line; the character after the marker is the separator and the
    /// remainder is the label.
    pub fn parse(text: &'a str) -> Self {
        match text.strip_prefix(CONTEXT_MARKER) {
            Some(rest) if !rest.is_empty() => {
                let mut chars = rest.chars();
                chars.next();
                Self::Context(chars.as_str())
            }
            _ => Self::Instruction(InstructionLine::new(text)),
        }
    }
}

/// A tokenized instruction line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionLine<'a> {
    tokens: Vec<&'a str>,
    context: Option<&'a str>,
}

impl<'a> InstructionLine<'a> {
    /// Splits `raw` on whitespace.
    pub fn new(raw: &'a str) -> Self {
        Self {
            tokens: raw.split_whitespace().collect(),
            context: None,
        }
    }

    /// Attaches the label of the enclosing function.
    pub fn with_context(mut self, context: &'a str) -> Self {
        self.context = Some(context);
        self
    }

    /// All tokens, undecorated.
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// The enclosing function label, if any.
    pub fn context(&self) -> Option<&'a str> {
        self.context
    }

    /// The first token of the line (the function-position token).
    pub fn function(&self) -> Option<&'a str> {
        self.tokens.first().copied()
    }

    /// Returns the token at `index` with trailing commas removed.
    pub fn operand(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).map(|token| token.trim_end_matches(','))
    }
}
