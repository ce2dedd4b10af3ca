use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
}

/// One line of player input.
///
/// Grid coordinates are kept signed and unchecked here; the session decides
/// whether they land on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal { x: i32, y: i32 },
    Flag { x: i32, y: i32 },
    Click { button: Button, px: i32, py: i32 },
    NewGame,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unknown mouse button `{0}`, expected `left` or `right`")]
    UnknownButton(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("invalid {name} `{value}`")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseError::Empty)?;

        let command = match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Reveal {
                x: number(&mut words, "x")?,
                y: number(&mut words, "y")?,
            },
            "f" | "flag" => Command::Flag {
                x: number(&mut words, "x")?,
                y: number(&mut words, "y")?,
            },
            "c" | "click" => {
                let button = match words.next() {
                    Some(word) if word.eq_ignore_ascii_case("left") => Button::Left,
                    Some(word) if word.eq_ignore_ascii_case("right") => Button::Right,
                    Some(word) => return Err(ParseError::UnknownButton(word.to_owned())),
                    None => return Err(ParseError::MissingArgument("button")),
                };
                Command::Click {
                    button,
                    px: number(&mut words, "px")?,
                    py: number(&mut words, "py")?,
                }
            }
            "n" | "new" => Command::NewGame,
            "q" | "quit" => Command::Quit,
            _ => return Err(ParseError::UnknownCommand(name.to_owned())),
        };

        match words.next() {
            Some(extra) => Err(ParseError::TrailingInput(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn number<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<i32, ParseError> {
    let value = words.next().ok_or(ParseError::MissingArgument(name))?;
    value.parse().map_err(|source| ParseError::InvalidNumber {
        name,
        value: value.to_owned(),
        source,
    })
}
