use std::str::FromStr;

use crate::error::{Result, VoicegridError};
use crate::grid::{ColorSuffix, TileCode};
use crate::session::DragVariant;

/// Phonetic alphabet accepted wherever a single letter is.
const SPOKEN_LETTERS: [&str; 26] = [
    "air", "bat", "cap", "drum", "each", "fine", "gust", "harp", "sit", "jury", "crunch", "look",
    "made", "near", "odd", "pit", "quench", "red", "sun", "trap", "urge", "vest", "whale",
    "plex", "yank", "zip",
];

/// Parsed drag-mode phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragCommand {
    /// `drag mode`, `pan mode`, `roll mode`
    Show(DragVariant),
    /// `grid hide`
    Hide,
    /// `<T> (to <T>)*`
    MoveAlong(Vec<TileCode>),
    /// `go <T>`
    Jump(TileCode),
    /// `fly <T>`
    Fly(TileCode),
    /// `fly stop`, `halt`, `stop`
    Stop,
    /// `bring <T>`
    Bring(TileCode),
    /// `bring this to <T>`
    BringTo(TileCode),
    /// `center <T>`
    Center(TileCode),
    /// `drag <T> to <T>`
    DragAndDrop(TileCode, TileCode),
    /// `clear <T> past <T>`
    ClearArea(TileCode, TileCode),
    /// `clear line <T> [past <T>]`
    ClearLine(TileCode, Option<TileCode>),
    /// `take <T> past <T>`
    TakeArea(TileCode, TileCode),
    MoreSquares,
    LessSquares,
    /// `grid reset`
    Reset,
}

impl FromStr for DragCommand {
    type Err = VoicegridError;

    fn from_str(s: &str) -> Result<Self> {
        parse_command(s)
    }
}

/// Parse one recognised phrase. Case and trailing punctuation are ignored.
pub fn parse_command(phrase: &str) -> Result<DragCommand> {
    let mut words = Words::new(phrase);
    let command = match words.peek() {
        None => return Err(VoicegridError::Command("empty phrase".to_string())),
        Some("drag") if words.peek_at(1) == Some("mode") => {
            words.skip(2);
            DragCommand::Show(DragVariant::Drag)
        }
        Some("pan") if words.peek_at(1) == Some("mode") => {
            words.skip(2);
            DragCommand::Show(DragVariant::Pan)
        }
        Some("roll") if words.peek_at(1) == Some("mode") => {
            words.skip(2);
            DragCommand::Show(DragVariant::Roll)
        }
        Some("grid") => {
            words.skip(1);
            match words.next() {
                Some("hide") => DragCommand::Hide,
                Some("reset") => DragCommand::Reset,
                _ => return Err(words.unexpected()),
            }
        }
        Some("more") | Some("less") if words.peek_at(1) == Some("squares") => {
            let more = words.next() == Some("more");
            words.skip(1);
            if more {
                DragCommand::MoreSquares
            } else {
                DragCommand::LessSquares
            }
        }
        Some("halt") | Some("stop") => {
            words.skip(1);
            DragCommand::Stop
        }
        Some("fly") => {
            words.skip(1);
            if words.peek() == Some("stop") {
                words.skip(1);
                DragCommand::Stop
            } else {
                DragCommand::Fly(words.target()?)
            }
        }
        Some("go") => {
            words.skip(1);
            DragCommand::Jump(words.target()?)
        }
        Some("center") | Some("centre") => {
            words.skip(1);
            DragCommand::Center(words.target()?)
        }
        Some("bring") => {
            words.skip(1);
            if words.peek() == Some("this") {
                words.skip(1);
                words.expect("to")?;
                DragCommand::BringTo(words.target()?)
            } else {
                DragCommand::Bring(words.target()?)
            }
        }
        Some("drag") => {
            words.skip(1);
            let from = words.target()?;
            words.expect("to")?;
            DragCommand::DragAndDrop(from, words.target()?)
        }
        Some("clear") => {
            words.skip(1);
            if words.peek() == Some("line") {
                words.skip(1);
                let first = words.target()?;
                let second = if words.peek() == Some("past") {
                    words.skip(1);
                    Some(words.target()?)
                } else {
                    None
                };
                DragCommand::ClearLine(first, second)
            } else {
                let first = words.target()?;
                words.expect("past")?;
                DragCommand::ClearArea(first, words.target()?)
            }
        }
        Some("take") => {
            words.skip(1);
            let first = words.target()?;
            words.expect("past")?;
            DragCommand::TakeArea(first, words.target()?)
        }
        Some(_) => {
            let mut path = vec![words.target()?];
            while words.peek() == Some("to") {
                words.skip(1);
                path.push(words.target()?);
            }
            DragCommand::MoveAlong(path)
        }
    };

    if words.peek().is_some() {
        return Err(words.unexpected());
    }
    Ok(command)
}

/// Parse a spoken target on its own, e.g. `"a b"`, `"air bat green"` or `"abg"`.
pub fn parse_target(phrase: &str) -> Result<TileCode> {
    let mut words = Words::new(phrase);
    let target = words.target()?;
    if words.peek().is_some() {
        return Err(words.unexpected());
    }
    Ok(target)
}

/// Normalised words of a phrase with a read position.
struct Words {
    phrase: String,
    words: Vec<String>,
    pos: usize,
}

impl Words {
    fn new(phrase: &str) -> Self {
        let words = phrase
            .split_whitespace()
            .map(|word| {
                word.trim_matches(|c: char| c.is_ascii_punctuation())
                    .to_ascii_lowercase()
            })
            .filter(|word| !word.is_empty())
            .collect();
        Self {
            phrase: phrase.trim().to_string(),
            words,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&str> {
        self.peek_at(0)
    }

    fn peek_at(&self, ahead: usize) -> Option<&str> {
        self.words.get(self.pos + ahead).map(String::as_str)
    }

    fn next(&mut self) -> Option<&str> {
        let word = self.words.get(self.pos)?;
        self.pos += 1;
        Some(word.as_str())
    }

    fn skip(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.words.len());
    }

    fn expect(&mut self, keyword: &str) -> Result<()> {
        if self.peek() == Some(keyword) {
            self.skip(1);
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> VoicegridError {
        let found = match self.peek() {
            Some(word) => format!("`{word}`"),
            None => "end of phrase".to_string(),
        };
        VoicegridError::Command(format!("unexpected {found} in `{}`", self.phrase))
    }

    /// Two letters, spoken apart or joined, and an optional colour.
    ///
    /// A joined code that is also a phonetic word (`air`, `cap`, `zip`) is
    /// read as a letter first, and as a joined code when no second letter
    /// follows.
    fn target(&mut self) -> Result<TileCode> {
        let start = self.pos;
        match self.spoken_target() {
            Ok(code) => Ok(code),
            Err(err) => {
                self.pos = start;
                let Some(word) = self.peek() else {
                    return Err(err);
                };
                let code = word.parse::<TileCode>().map_err(|_| err)?;
                self.skip(1);
                Ok(code)
            }
        }
    }

    fn spoken_target(&mut self) -> Result<TileCode> {
        let first = self.letter()?;
        let second = self.letter()?;
        let suffix = match self.peek() {
            Some(word) => match colour_suffix(word) {
                Some(suffix) => {
                    self.skip(1);
                    suffix
                }
                None => ColorSuffix::None,
            },
            None => ColorSuffix::None,
        };
        TileCode::new(first, second, suffix)
    }

    fn letter(&mut self) -> Result<char> {
        match self.peek().and_then(spoken_letter) {
            Some(letter) => {
                self.skip(1);
                Ok(letter)
            }
            None => Err(self.unexpected()),
        }
    }
}

fn spoken_letter(word: &str) -> Option<char> {
    let mut chars = word.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        return letter.is_ascii_lowercase().then_some(letter);
    }
    SPOKEN_LETTERS
        .iter()
        .position(|spoken| *spoken == word)
        .map(|index| (b'a' + index as u8) as char)
}

/// Colour named by a word, or by a letter that doubles as a suffix.
fn colour_suffix(word: &str) -> Option<ColorSuffix> {
    match word {
        "green" => Some(ColorSuffix::Green),
        "blue" => Some(ColorSuffix::Blue),
        "purple" => Some(ColorSuffix::Purple),
        "yellow" => Some(ColorSuffix::Yellow),
        _ => spoken_letter(word).and_then(ColorSuffix::from_letter),
    }
}
