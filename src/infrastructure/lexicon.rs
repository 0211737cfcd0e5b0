//! Word lists used by the rule-based parser
//!
//! All entries are lowercase. Curly apostrophes are normalised to `'` before lookup.

use phf::{phf_set, Set};

/// Forms of "be" and "get" that can head a passive construction
static PASSIVE_AUXILIARIES: Set<&'static str> = phf_set! {
    "be", "am", "is", "are", "was", "were", "been", "being",
    "'re", "'m",
    "get", "gets", "got", "gotten", "getting",
};

/// Hosts after which a detached `'s` reads as "is"/"has" rather than a possessive or "let us"
static BE_CONTRACTION_HOSTS: Set<&'static str> = phf_set! {
    "it", "he", "she", "that", "this", "what", "who", "where", "when", "why", "how",
    "which", "there", "here", "everything", "everyone", "nothing", "something",
    "someone", "nobody", "somebody", "everybody",
};

/// Adjectival participles that make "get" a change-of-state verb, not a passive
static GET_COMPLEMENTS: Set<&'static str> = phf_set! {
    "started", "dressed", "married", "divorced", "engaged", "involved", "acquainted",
    "lost", "tired", "bored", "excited", "worried", "used", "stuck", "rid",
};

/// Past participles that do not end in "-ed"
static IRREGULAR_PARTICIPLES: Set<&'static str> = phf_set! {
    "arisen", "awoken", "beaten", "begun", "bent", "bet", "bid", "bitten", "bled",
    "blown", "born", "borne", "bought", "bound", "bred", "broken", "brought", "built",
    "burnt", "burst", "cast", "caught", "chosen", "cut", "dealt", "done", "drawn",
    "dreamt", "driven", "dug", "eaten", "fed", "felt", "fled", "flung", "forbidden",
    "forecast", "forgiven", "forgotten", "fought", "found", "frozen", "given", "ground",
    "grown", "had", "heard", "held", "hidden", "hit", "hung", "hurt", "kept", "knelt",
    "known", "laid", "led", "lent", "let", "lit", "lost", "made", "meant", "met",
    "misled", "mislaid", "mistaken", "misunderstood", "overcome", "overheard", "overrun",
    "overseen", "oversold", "overtaken", "overthrown", "paid", "proven", "put", "quit",
    "read", "rebuilt", "redone", "remade", "rewritten", "rid", "ridden", "rung", "said",
    "seen", "sent", "set", "sewn", "shaken", "shed", "shone", "shot", "shown", "shrunk",
    "shut", "slain", "slid", "slit", "slung", "sold", "sought", "sown", "spat", "sped",
    "spent", "spilt", "split", "spoken", "spread", "sprung", "spun", "stolen", "struck",
    "stricken", "strung", "stuck", "stung", "sung", "sunk", "swept", "sworn", "swollen",
    "taken", "taught", "thought", "thrown", "thrust", "told", "torn", "trodden",
    "understood", "undertaken", "undone", "upheld", "upset", "wed", "wept", "withdrawn",
    "withheld", "woken", "won", "worn", "wound", "woven", "written", "wrung",
};

/// Words ending in "-ed" that are not verb participles
static ED_NON_PARTICIPLES: Set<&'static str> = phf_set! {
    "bed", "bleed", "breed", "creed", "crooked", "deed", "embed", "exceed", "feed",
    "greed", "heed", "hundred", "indeed", "kindred", "naked", "need", "proceed",
    "ragged", "red", "reed", "rugged", "sacred", "seed", "shred", "sled", "speed",
    "succeed", "weed", "wicked",
};

/// Words allowed between an auxiliary and its participle ("was not given")
static FILLERS: Set<&'static str> = phf_set! {
    "not", "n't", "never", "also", "always", "often", "already", "still", "just",
    "only", "further", "then", "now", "all", "both", "each", "ever", "well", "soon",
    "once", "again", "even", "much", "sometimes", "thus", "therefore", "first",
};

/// Abbreviations whose trailing period never ends a sentence
static ABBREVIATIONS: Set<&'static str> = phf_set! {
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e",
    "inc", "ltd", "corp", "approx", "dept", "mt",
    "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "a.m", "p.m", "u.s", "u.k", "ph.d", "cf", "eds",
};

/// Abbreviations that are also ordinary words; they only hold a sentence
/// together when a number follows ("No. 5", "Fig. 3", "Dec. 12")
static NUMBERED_ABBREVIATIONS: Set<&'static str> = phf_set! {
    "no", "nos", "fig", "vol", "est", "co", "al", "ed", "mar", "dec", "rev", "pp",
};

/// The word lists one parser instance works from
#[derive(Clone, Copy)]
pub struct Lexicon {
    auxiliaries: &'static Set<&'static str>,
    participles: &'static Set<&'static str>,
    ed_exclusions: &'static Set<&'static str>,
    fillers: &'static Set<&'static str>,
    abbreviations: &'static Set<&'static str>,
    numbered_abbreviations: &'static Set<&'static str>,
    contraction_hosts: &'static Set<&'static str>,
    get_complements: &'static Set<&'static str>,
}

impl Lexicon {
    /// The built-in English lexicon
    pub fn english() -> Self {
        Self {
            auxiliaries: &PASSIVE_AUXILIARIES,
            participles: &IRREGULAR_PARTICIPLES,
            ed_exclusions: &ED_NON_PARTICIPLES,
            fillers: &FILLERS,
            abbreviations: &ABBREVIATIONS,
            numbered_abbreviations: &NUMBERED_ABBREVIATIONS,
            contraction_hosts: &BE_CONTRACTION_HOSTS,
            get_complements: &GET_COMPLEMENTS,
        }
    }

    pub fn is_passive_auxiliary(&self, word: &str) -> bool {
        self.auxiliaries.contains(word)
    }

    /// Whether `'s` detached from `host` stands for a form of "be"
    pub fn is_be_contraction_host(&self, host: &str) -> bool {
        self.contraction_hosts.contains(host)
    }

    pub fn is_get_form(&self, word: &str) -> bool {
        matches!(word, "get" | "gets" | "got" | "gotten" | "getting")
    }

    /// "get started", "got married": change of state, not passive
    pub fn is_get_complement(&self, word: &str) -> bool {
        self.get_complements.contains(word)
    }

    /// Irregular participles, plus regular "-ed" forms that are not on the exclusion list.
    /// Hyphenated compounds are judged by their last part ("well-known").
    pub fn is_past_participle(&self, word: &str) -> bool {
        let head = word.rsplit('-').next().unwrap_or(word);
        if self.participles.contains(head) {
            return true;
        }
        head.len() > 3
            && head.ends_with("ed")
            && head.chars().all(|c| c.is_alphabetic())
            && !self.ed_exclusions.contains(head)
    }

    /// Adverbs and negations that may sit between auxiliary and participle
    pub fn is_filler(&self, word: &str) -> bool {
        self.fillers.contains(word) || (word.len() > 4 && word.ends_with("ly"))
    }

    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(word)
    }

    /// Abbreviation only when followed by a number
    pub fn is_numbered_abbreviation(&self, word: &str) -> bool {
        self.numbered_abbreviations.contains(word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("auxiliaries", &self.auxiliaries.len())
            .field("participles", &self.participles.len())
            .field("abbreviations", &self.abbreviations.len())
            .finish()
    }
}
