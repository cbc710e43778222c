use nom::{
    bytes::complete::{tag, take_till1, take_until, take_while},
    IResult,
};

/// Separates independent roles in a position title ("Директор - Заступник директора").
pub const ROLE_DELIMITER: &str = " - ";

fn role(input: &str) -> IResult<&str, &str> {
    let (rest, head) = take_until(ROLE_DELIMITER)(input)?;
    let (rest, _) = tag(ROLE_DELIMITER)(rest)?;
    Ok((rest, head))
}

/// Splits a title on the literal role delimiter. Always yields at least one
/// (possibly empty) segment; segments are not trimmed.
pub fn split_roles(input: &str) -> Vec<&str> {
    let mut rest = input;
    let mut roles = Vec::new();

    while let Ok((next, head)) = role(rest) {
        roles.push(head);
        rest = next;
    }
    roles.push(rest);

    roles
}

fn word(input: &str) -> IResult<&str, &str> {
    // Any Unicode blank separates words, not only ASCII ones
    let (input, _) = take_while(char::is_whitespace)(input)?;
    take_till1(char::is_whitespace)(input)
}

/// Splits on any run of whitespace, dropping leading and trailing blanks.
pub fn split_words(input: &str) -> Vec<&str> {
    let mut rest = input;
    let mut words = Vec::new();

    while let Ok((next, w)) = word(rest) {
        words.push(w);
        rest = next;
    }

    words
}
