//! Action line tokenizer and validator
//!
//! One explicit typed-field parser per action kind. Every field the
//! engine consumes is fully validated here; the engine itself only
//! sees well-formed requests.

use std::str::{FromStr, SplitWhitespace};

use types::ids::{OrderId, Symbol, SymbolError};
use types::numeric::{Price, Quantity};
use types::order::Side;

use crate::error::{Field, ParseError};

/// A validated input action
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// `O <oid> <symbol> <side> <qty> <px>`
    Place {
        oid: OrderId,
        symbol: Symbol,
        side: Side,
        quantity: Quantity,
        price: Price,
    },
    /// `X <oid>`
    Cancel { oid: OrderId },
    /// `P`
    Print,
}

/// Parse one non-empty input line into an action
pub fn parse_line(line: &str) -> Result<Action, ParseError> {
    let mut tokens = line.split_whitespace();
    match next_char(&mut tokens, Field::Action)? {
        'O' => parse_place(&mut tokens),
        'X' => parse_cancel(&mut tokens),
        'P' => {
            expect_end(&mut tokens)?;
            Ok(Action::Print)
        }
        other => Err(ParseError::UnknownAction(other)),
    }
}

fn parse_place(tokens: &mut SplitWhitespace<'_>) -> Result<Action, ParseError> {
    let oid = next_oid(tokens)?;
    let symbol = next_symbol(tokens)?;
    let side = next_side(tokens)?;
    let quantity = next_quantity(tokens)?;
    let price = next_field::<Price>(tokens, Field::Price)?;
    expect_end(tokens)?;
    Ok(Action::Place {
        oid,
        symbol,
        side,
        quantity,
        price,
    })
}

fn parse_cancel(tokens: &mut SplitWhitespace<'_>) -> Result<Action, ParseError> {
    let oid = next_oid(tokens)?;
    expect_end(tokens)?;
    Ok(Action::Cancel { oid })
}

fn next_token<'a>(tokens: &mut SplitWhitespace<'a>, field: Field) -> Result<&'a str, ParseError> {
    tokens.next().ok_or(ParseError::Missing(field))
}

/// Parse the next token into `T`, strictly: any residue is malformed
fn next_field<T: FromStr>(tokens: &mut SplitWhitespace<'_>, field: Field) -> Result<T, ParseError> {
    next_token(tokens, field)?
        .parse()
        .map_err(|_| ParseError::Malformed(field))
}

/// The next token, required to be exactly one character
fn next_char(tokens: &mut SplitWhitespace<'_>, field: Field) -> Result<char, ParseError> {
    let token = next_token(tokens, field)?;
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ParseError::Malformed(field)),
    }
}

fn next_oid(tokens: &mut SplitWhitespace<'_>) -> Result<OrderId, ParseError> {
    let raw = next_field::<u32>(tokens, Field::Oid)?;
    if raw == 0 {
        return Err(ParseError::NonPositiveOid);
    }
    Ok(OrderId::new(raw))
}

fn next_symbol(tokens: &mut SplitWhitespace<'_>) -> Result<Symbol, ParseError> {
    next_token(tokens, Field::Symbol)?
        .parse()
        .map_err(|err| match err {
            SymbolError::TooLong => ParseError::SymbolTooLong,
            SymbolError::NotAlphanumeric => ParseError::SymbolNotAlphanumeric,
        })
}

fn next_side(tokens: &mut SplitWhitespace<'_>) -> Result<Side, ParseError> {
    match next_char(tokens, Field::Side)? {
        'B' => Ok(Side::Buy),
        'S' => Ok(Side::Sell),
        _ => Err(ParseError::InvalidSide),
    }
}

fn next_quantity(tokens: &mut SplitWhitespace<'_>) -> Result<Quantity, ParseError> {
    let raw = next_field::<u16>(tokens, Field::Quantity)?;
    if raw == 0 {
        return Err(ParseError::NonPositiveQuantity);
    }
    Ok(Quantity::new(raw))
}

fn expect_end(tokens: &mut SplitWhitespace<'_>) -> Result<(), ParseError> {
    if tokens.next().is_some() {
        return Err(ParseError::TrailingInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        let action = parse_line("O 10000 IBM B 10 100.00000").unwrap();
        assert_eq!(
            action,
            Action::Place {
                oid: OrderId::new(10000),
                symbol: Symbol::new("IBM"),
                side: Side::Buy,
                quantity: Quantity::new(10),
                price: Price::new(100, 0),
            }
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let action = parse_line("  O  10000   IBM S 10  99.00000 ").unwrap();
        assert!(matches!(action, Action::Place { side: Side::Sell, .. }));
    }

    #[test]
    fn test_parse_cancel() {
        assert_eq!(
            parse_line("X 10002").unwrap(),
            Action::Cancel {
                oid: OrderId::new(10002)
            }
        );
    }

    #[test]
    fn test_parse_print() {
        assert_eq!(parse_line("P").unwrap(), Action::Print);
    }

    #[test]
    fn test_whitespace_only_line() {
        assert_eq!(
            parse_line("   "),
            Err(ParseError::Missing(Field::Action))
        );
    }

    #[test]
    fn test_multi_char_action_is_malformed() {
        assert_eq!(
            parse_line("OO 1 IBM B 1 1.00000"),
            Err(ParseError::Malformed(Field::Action))
        );
    }

    #[test]
    fn test_unknown_action() {
        assert_eq!(parse_line("Q 1"), Err(ParseError::UnknownAction('Q')));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(parse_line("O"), Err(ParseError::Missing(Field::Oid)));
        assert_eq!(parse_line("O 1"), Err(ParseError::Missing(Field::Symbol)));
        assert_eq!(parse_line("O 1 IBM"), Err(ParseError::Missing(Field::Side)));
        assert_eq!(
            parse_line("O 1 IBM B"),
            Err(ParseError::Missing(Field::Quantity))
        );
        assert_eq!(
            parse_line("O 1 IBM B 10"),
            Err(ParseError::Missing(Field::Price))
        );
        assert_eq!(parse_line("X"), Err(ParseError::Missing(Field::Oid)));
    }

    #[test]
    fn test_malformed_oid() {
        assert_eq!(
            parse_line("O abc IBM B 10 100.00000"),
            Err(ParseError::Malformed(Field::Oid))
        );
        // Residue inside the token is malformed, not silently dropped
        assert_eq!(
            parse_line("O 10x IBM B 10 100.00000"),
            Err(ParseError::Malformed(Field::Oid))
        );
        assert_eq!(
            parse_line("O -5 IBM B 10 100.00000"),
            Err(ParseError::Malformed(Field::Oid))
        );
    }

    #[test]
    fn test_zero_oid() {
        assert_eq!(
            parse_line("O 0 IBM B 10 100.00000"),
            Err(ParseError::NonPositiveOid)
        );
        assert_eq!(parse_line("X 0"), Err(ParseError::NonPositiveOid));
    }

    #[test]
    fn test_symbol_validation() {
        assert_eq!(
            parse_line("O 1 TOOLONGSYM B 10 100.00000"),
            Err(ParseError::SymbolTooLong)
        );
        assert_eq!(
            parse_line("O 1 IBM.N B 10 100.00000"),
            Err(ParseError::SymbolNotAlphanumeric)
        );
    }

    #[test]
    fn test_side_validation() {
        assert_eq!(
            parse_line("O 1 IBM X 10 100.00000"),
            Err(ParseError::InvalidSide)
        );
        assert_eq!(
            parse_line("O 1 IBM BUY 10 100.00000"),
            Err(ParseError::Malformed(Field::Side))
        );
    }

    #[test]
    fn test_quantity_validation() {
        assert_eq!(
            parse_line("O 1 IBM B 0 100.00000"),
            Err(ParseError::NonPositiveQuantity)
        );
        assert_eq!(
            parse_line("O 1 IBM B -1 100.00000"),
            Err(ParseError::Malformed(Field::Quantity))
        );
        // Quantity is 16-bit on the wire
        assert_eq!(
            parse_line("O 1 IBM B 65536 100.00000"),
            Err(ParseError::Malformed(Field::Quantity))
        );
    }

    #[test]
    fn test_price_validation() {
        assert_eq!(
            parse_line("O 1 IBM B 10 100.0"),
            Err(ParseError::Malformed(Field::Price))
        );
        assert_eq!(
            parse_line("O 1 IBM B 10 banana"),
            Err(ParseError::Malformed(Field::Price))
        );
    }

    #[test]
    fn test_trailing_tokens() {
        assert_eq!(
            parse_line("O 1 IBM B 10 100.00000 extra"),
            Err(ParseError::TrailingInput)
        );
        assert_eq!(parse_line("X 1 extra"), Err(ParseError::TrailingInput));
        assert_eq!(parse_line("P extra"), Err(ParseError::TrailingInput));
    }
}
