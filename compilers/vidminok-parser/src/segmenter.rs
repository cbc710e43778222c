use tracing::trace;
use vidminok_morph::WordInflector;
use vidminok_protocol::Case;

/// How many leading words of a title segment form its head noun phrase.
///
/// `[Adjective] Noun` heads are inflected as a pair; the genitive chain that
/// follows ("відділу кадрів") is left untouched.
pub fn head_len(inflector: &WordInflector, words: &[&str]) -> usize {
    let Some(first) = words.first() else {
        return 0;
    };

    let starts_with_adjective = inflector
        .analyzer()
        .parse(first)
        .first()
        .is_some_and(|parse| parse.is_adjective());

    if starts_with_adjective && words.len() > 1 {
        2
    } else {
        1
    }
}

/// Inflects the head of one title segment and copies the rest verbatim.
pub fn inflect_segment(inflector: &WordInflector, words: &[&str], case: Case) -> Vec<String> {
    let head = head_len(inflector, words);
    trace!(?words, head, "segmenting title");

    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i < head {
                inflector.inflect(word, case, false)
            } else {
                word.to_string()
            }
        })
        .collect()
}
