use std::collections::BTreeMap;

use nom::{
    bytes::complete::{take_while, take_while1},
    multi::many0,
    sequence::preceded,
    IResult,
};
use tracing::{debug, instrument};

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn parse_separator(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| !is_word_char(c))(input)
}

fn parse_word(input: &str) -> IResult<&str, &str> {
    preceded(parse_separator, take_while1(is_word_char))(input)
}

fn parse_words(input: &str) -> IResult<&str, Vec<&str>> {
    many0(parse_word)(input)
}

/// Lowercases `text` and splits it on every run of non `[a-z]` characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    match parse_words(&lowered) {
        Ok((_, words)) => words.into_iter().map(str::to_owned).collect(),
        Err(err) => {
            debug!(?err, "tokenize failed");
            Vec::new()
        }
    }
}

#[instrument(level = "debug", skip(text), fields(bytes = text.len()))]
pub fn word_frequencies(text: &str) -> BTreeMap<String, usize> {
    let mut freqs = BTreeMap::new();
    for word in tokenize(text) {
        *freqs.entry(word).or_insert(0) += 1;
    }

    debug!(distinct = freqs.len(), "counted words");
    freqs
}
