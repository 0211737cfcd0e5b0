pub mod text_metrics;

pub use text_metrics::{
    character_count, characters_per_word, paragraph_count, sentence_count,
    sentences_per_paragraph, word_count, words_per_sentence, TextMetrics,
};
