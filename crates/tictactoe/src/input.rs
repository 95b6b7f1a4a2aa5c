//! Parsing of typed `row,col` moves.

use tracing::instrument;

/// Why a typed move was not understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing but whitespace.
    #[display("empty input")]
    Blank,
    /// Not exactly two comma-separated parts.
    #[display("expected 2 comma-separated values, got {_0}")]
    WrongShape(usize),
    /// A part is not an integer.
    #[display("{_0:?} is not a number")]
    NotANumber(String),
    /// A coordinate is outside 0-2.
    #[display("({row},{col}) is off the board")]
    OutOfRange {
        /// Parsed row.
        row: i64,
        /// Parsed column.
        col: i64,
    },
}

impl std::error::Error for InputError {}

/// Parses `"row,col"` into board coordinates, each in `0..=2`.
///
/// Surrounding whitespace is ignored, both around the whole input and
/// around each number.
#[instrument]
pub fn parse_coordinates(input: &str) -> Result<(usize, usize), InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Blank);
    }

    let parts: Vec<&str> = input.split(',').collect();
    let [row, col] = parts.as_slice() else {
        return Err(InputError::WrongShape(parts.len()));
    };

    let row = parse_number(row)?;
    let col = parse_number(col)?;

    match (to_coordinate(row), to_coordinate(col)) {
        (Some(r), Some(c)) => Ok((r, c)),
        _ => Err(InputError::OutOfRange { row, col }),
    }
}

fn parse_number(part: &str) -> Result<i64, InputError> {
    let part = part.trim();
    part.parse()
        .map_err(|_| InputError::NotANumber(part.to_string()))
}

fn to_coordinate(value: i64) -> Option<usize> {
    usize::try_from(value).ok().filter(|v| *v <= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        assert_eq!(parse_coordinates("0,0"), Ok((0, 0)));
        assert_eq!(parse_coordinates("1,2"), Ok((1, 2)));
        assert_eq!(parse_coordinates("2,2"), Ok((2, 2)));
        assert_eq!(parse_coordinates("  1 , 0  "), Ok((1, 0)));
        assert_eq!(parse_coordinates("2,1\n"), Ok((2, 1)));
    }

    #[test]
    fn test_every_cell_parses() {
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(parse_coordinates(&format!("{row},{col}")), Ok((row, col)));
            }
        }
    }

    #[test]
    fn test_blank() {
        assert_eq!(parse_coordinates(""), Err(InputError::Blank));
        assert_eq!(parse_coordinates("   \t"), Err(InputError::Blank));
    }

    #[test]
    fn test_wrong_shape() {
        assert_eq!(parse_coordinates("1"), Err(InputError::WrongShape(1)));
        assert_eq!(parse_coordinates("1,2,3"), Err(InputError::WrongShape(3)));
        assert_eq!(parse_coordinates("1 2"), Err(InputError::WrongShape(1)));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(
            parse_coordinates("a,1"),
            Err(InputError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_coordinates("1,"),
            Err(InputError::NotANumber(String::new()))
        );
        assert_eq!(
            parse_coordinates("1.5,1"),
            Err(InputError::NotANumber("1.5".to_string()))
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            parse_coordinates("3,0"),
            Err(InputError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            parse_coordinates("0,-1"),
            Err(InputError::OutOfRange { row: 0, col: -1 })
        );
    }
}
