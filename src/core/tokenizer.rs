use crate::domain::model::Tokens;
use crate::utils::error::{CalcError, Result};
use regex::Regex;
use std::sync::LazyLock;

// Both operands must share a notation; Roman well-formedness is checked later.
// Digits and separators are ASCII only; the separator set is exactly
// `char::is_ascii_whitespace`, so the split below always yields three tokens.
static EXPRESSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[0-9]+[ \t\n\x0C\r][+\-*/][ \t\n\x0C\r][0-9]+$",
        r"|^[IVXLCDM]+[ \t\n\x0C\r][+\-*/][ \t\n\x0C\r][IVXLCDM]+$",
    ))
    .expect("expression line pattern compiles")
});

pub fn tokenize(line: &str) -> Result<Tokens<'_>> {
    let line = line.trim();
    if !EXPRESSION_LINE.is_match(line) {
        tracing::debug!("Line rejected by expression grammar: {:?}", line);
        return Err(CalcError::format(
            "invalid input format, use 'number operator number' (e.g. 2 + 3 or II + III)",
        ));
    }

    let parts: Vec<&str> = line.split_ascii_whitespace().collect();
    match parts.as_slice() {
        &[lhs, operator, rhs] => Ok(Tokens {
            lhs,
            operator,
            rhs,
        }),
        _ => Err(CalcError::format(
            "expression must consist of exactly three tokens: number operator number",
        )),
    }
}
