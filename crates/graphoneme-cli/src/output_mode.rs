use graphoneme::Tokenization;

/// Output-side tokenization choices.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputMode {
    /// One symbol per character; phonemes are joined.
    Chars,

    /// Space-delimited multi-character phoneme symbols.
    Phonemes,
}

impl OutputMode {
    pub fn tokenization(self) -> Tokenization {
        match self {
            OutputMode::Chars => Tokenization::Characters,
            OutputMode::Phonemes => Tokenization::Whitespace,
        }
    }
}
