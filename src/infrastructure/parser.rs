//! Syntactic parser - infrastructure layer
//!
//! Holds the parser resource and only exposes the "parse text" capability:
//! sentence segmentation plus a dependency role per token.

use crate::error::AppResult;
use crate::infrastructure::lexicon::Lexicon;

/// Dependency role of a token, as far as passive detection needs it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependencyRole {
    /// Auxiliary of a passive construction ("was" in "was written")
    AuxPass,
    /// Any other auxiliary use of be/get
    Aux,
    /// Past participle governed by a passive auxiliary
    Participle,
    #[default]
    Other,
}

impl DependencyRole {
    /// Dependency label
    pub fn label(&self) -> &'static str {
        match self {
            DependencyRole::AuxPass => "auxpass",
            DependencyRole::Aux => "aux",
            DependencyRole::Participle => "vbn",
            DependencyRole::Other => "dep",
        }
    }

    pub fn is_passive_auxiliary(&self) -> bool {
        matches!(self, DependencyRole::AuxPass)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub role: DependencyRole,
}

impl Token {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: DependencyRole::Other,
        }
    }

    fn normalized(&self) -> String {
        self.text.to_lowercase()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSentence {
    pub tokens: Vec<Token>,
}

impl ParsedSentence {
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Sentence segmentation and dependency tagging
pub trait SyntacticParser: Send + Sync {
    fn parse(&self, text: &str) -> AppResult<Vec<ParsedSentence>>;
}

/// Lexicon-driven parser.
///
/// Sentences end at `.`, `!` or `?` (optionally followed by closing quotes or
/// brackets) when the next word starts with an uppercase letter, digit or
/// opening quote, and at every line break. Known abbreviations and single-letter
/// initials never end a sentence; "No.", "Fig." and similar only hold before a
/// number. A be/get auxiliary followed by a past participle, with only adverbs
/// or negations in between, is tagged `auxpass`. `'s` counts as "be" only after
/// a pronoun or wh-word.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedParser {
    lexicon: Lexicon,
}

const CLITICS: [&str; 7] = ["n't", "'s", "'re", "'m", "'ve", "'ll", "'d"];

impl RuleBasedParser {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Parser over the built-in English lexicon
    pub fn english() -> Self {
        Self::new(Lexicon::english())
    }

    /// Split one whitespace-delimited chunk into word tokens, detaching clitics.
    /// Pure punctuation yields nothing.
    fn tokenize(&self, chunk: &str) -> Vec<Token> {
        let normalized = chunk.replace(['\u{2019}', '\u{2018}'], "'");
        let word = normalized.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
        let word = word.trim_start_matches('\'');
        if word.is_empty() || !word.chars().any(char::is_alphanumeric) {
            return Vec::new();
        }

        for clitic in CLITICS {
            let Some(split) = word.len().checked_sub(clitic.len()).filter(|&s| s > 0) else {
                continue;
            };
            if word.is_char_boundary(split) && word[split..].eq_ignore_ascii_case(clitic) {
                return vec![Token::new(&word[..split]), Token::new(&word[split..])];
            }
        }
        vec![Token::new(word)]
    }

    fn ends_sentence(&self, chunk: &str, next: Option<&str>) -> bool {
        let core = chunk.trim_end_matches(['"', '\'', '\u{201D}', '\u{2019}', ')', ']']);
        let Some(last) = core.chars().last() else {
            return false;
        };
        if !matches!(last, '.' | '!' | '?') {
            return false;
        }

        if last == '.' {
            let word = core
                .trim_end_matches('.')
                .trim_start_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            let is_initial = word.chars().count() == 1 && word.chars().all(char::is_alphabetic);
            if is_initial || self.lexicon.is_abbreviation(&word) {
                return false;
            }
            let number_follows = next
                .and_then(|n| n.chars().next())
                .is_some_and(|c| c.is_ascii_digit());
            if number_follows && self.lexicon.is_numbered_abbreviation(&word) {
                return false;
            }
        }

        match next.and_then(|n| n.chars().next()) {
            None => true,
            Some(c) => {
                c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\'' | '\u{201C}' | '(' | '[')
            }
        }
    }

    fn tag(&self, tokens: &mut [Token]) {
        for i in 0..tokens.len() {
            if tokens[i].role != DependencyRole::Other {
                continue;
            }
            let word = tokens[i].normalized();
            let is_auxiliary = if word == "'s" {
                i > 0 && self.lexicon.is_be_contraction_host(&tokens[i - 1].normalized())
            } else {
                self.lexicon.is_passive_auxiliary(&word)
            };
            if !is_auxiliary {
                continue;
            }
            tokens[i].role = DependencyRole::Aux;

            let mut j = i + 1;
            while j < tokens.len() && self.lexicon.is_filler(&tokens[j].normalized()) {
                j += 1;
            }
            let Some(next) = tokens.get(j).map(Token::normalized) else {
                continue;
            };
            if self.lexicon.is_get_form(&word) && self.lexicon.is_get_complement(&next) {
                continue;
            }
            if self.lexicon.is_past_participle(&next) {
                tokens[i].role = DependencyRole::AuxPass;
                tokens[j].role = DependencyRole::Participle;
            }
        }
    }
}

impl SyntacticParser for RuleBasedParser {
    fn parse(&self, text: &str) -> AppResult<Vec<ParsedSentence>> {
        let mut sentences = Vec::new();
        let mut current = Vec::new();

        let mut flush = |current: &mut Vec<Token>| {
            if !current.is_empty() {
                sentences.push(ParsedSentence {
                    tokens: std::mem::take(current),
                });
            }
        };

        for line in text.lines() {
            let chunks: Vec<&str> = line.split_whitespace().collect();
            for (i, chunk) in chunks.iter().enumerate() {
                current.extend(self.tokenize(chunk));
                if self.ends_sentence(chunk, chunks.get(i + 1).copied()) {
                    flush(&mut current);
                }
            }
            flush(&mut current);
        }

        for sentence in &mut sentences {
            self.tag(&mut sentence.tokens);
        }
        Ok(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<ParsedSentence> {
        RuleBasedParser::english().parse(text).unwrap()
    }

    fn roles(sentence: &ParsedSentence) -> Vec<(&str, &'static str)> {
        sentence
            .tokens
            .iter()
            .map(|t| (t.text.as_str(), t.role.label()))
            .collect()
    }

    #[test]
    fn segments_on_punctuation_and_lines() {
        let sentences = parse("Hello world. This is a test!\nNo punctuation here");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text(), "Hello world");
        assert_eq!(sentences[2].text(), "No punctuation here");
    }

    #[test]
    fn abbreviations_do_not_split() {
        let sentences = parse("Dr. Smith met Mr. J. Jones at 5 p.m. yesterday. Then he left.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn ordinary_words_before_a_period_split() {
        assert_eq!(parse("The answer is no. They agreed.").len(), 2);
        assert_eq!(parse("Prices rose in Mar. The rest fell.").len(), 2);
    }

    #[test]
    fn numbered_abbreviations_hold_before_digits() {
        assert_eq!(parse("See No. 5 and Fig. 3 for details.").len(), 1);
    }

    #[test]
    fn lowercase_continuation_does_not_split() {
        assert_eq!(parse("The value is 3.5 units. ok... fine.").len(), 1);
    }

    #[test]
    fn empty_text_has_no_sentences() {
        assert!(parse("").is_empty());
        assert!(parse("  \n ... \n").is_empty());
    }

    #[test]
    fn tags_passive_auxiliary() {
        let sentences = parse("The report was written by the team.");
        assert_eq!(
            roles(&sentences[0]),
            vec![
                ("The", "dep"),
                ("report", "dep"),
                ("was", "auxpass"),
                ("written", "vbn"),
                ("by", "dep"),
                ("the", "dep"),
                ("team", "dep"),
            ]
        );
    }

    #[test]
    fn skips_adverbs_and_negation() {
        let sentences = parse("It wasn't carefully designed.");
        let tagged = roles(&sentences[0]);
        assert_eq!(tagged[1], ("was", "auxpass"));
        assert_eq!(tagged[2], ("n't", "dep"));
        assert_eq!(tagged[4], ("designed", "vbn"));
    }

    #[test]
    fn progressive_passive_tags_being() {
        let sentences = parse("The bridge is being built.");
        let tagged = roles(&sentences[0]);
        assert_eq!(tagged[2], ("is", "aux"));
        assert_eq!(tagged[3], ("being", "auxpass"));
    }

    #[test]
    fn possessive_and_let_us_are_not_auxiliaries() {
        for text in [
            "Let's get started.",
            "The city's renowned museum opened today.",
            "Maria's trusted advisor left.",
        ] {
            let sentences = parse(text);
            assert!(
                sentences[0].tokens.iter().all(|t| !t.role.is_passive_auxiliary()),
                "{text}"
            );
        }
    }

    #[test]
    fn pronoun_contraction_can_be_passive() {
        let sentences = parse("It's made by hand.");
        let tagged = roles(&sentences[0]);
        assert_eq!(tagged[1], ("'s", "auxpass"));
        assert_eq!(tagged[2], ("made", "vbn"));
    }

    #[test]
    fn get_passive_versus_change_of_state() {
        let fired = parse("He got fired last week.");
        assert_eq!(roles(&fired[0])[1], ("got", "auxpass"));
        let married = parse("They got married in June.");
        assert_eq!(roles(&married[0])[1], ("got", "aux"));
    }

    #[test]
    fn active_and_copular_sentences_have_no_auxpass() {
        for text in ["The team wrote the report.", "The car was red.", "She is a doctor."] {
            let sentences = parse(text);
            assert!(
                sentences[0].tokens.iter().all(|t| !t.role.is_passive_auxiliary()),
                "{text}"
            );
        }
    }
}
