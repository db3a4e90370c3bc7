use crate::application::intent::Intent;
use crate::domain::roster::PlayerSetupEntry;
use crate::error::{Result, SessionError};
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Roster,
    Setup,
    Start,
    Bet,
    Winner,
    Settle,
    Undo,
    Reset,
}

/// One raw line of an intent script: an action and up to three arguments.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct IntentRecord {
    pub action: Action,
    #[serde(default)]
    pub arg1: Option<String>,
    #[serde(default)]
    pub arg2: Option<String>,
    #[serde(default)]
    pub arg3: Option<String>,
}

fn required<'a>(arg: &'a Option<String>, action: Action, what: &str) -> Result<&'a str> {
    arg.as_deref()
        .ok_or_else(|| SessionError::InvalidIntent(format!("{action:?} needs {what}")))
}

fn index<T: FromStr>(arg: &Option<String>, action: Action, what: &str) -> Result<T> {
    let raw = required(arg, action, what)?;
    raw.parse()
        .map_err(|_| SessionError::InvalidIntent(format!("{action:?} {what} {raw:?} is not a number")))
}

fn answer(arg: &Option<String>, action: Action) -> Result<Option<bool>> {
    match arg.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(None),
        Some("yes" | "y") => Ok(Some(true)),
        Some("no" | "n") => Ok(Some(false)),
        Some(other) => Err(SessionError::InvalidIntent(format!(
            "{action:?} answer must be yes or no, got {other:?}"
        ))),
    }
}

impl TryFrom<IntentRecord> for Intent {
    type Error = SessionError;

    fn try_from(record: IntentRecord) -> Result<Self> {
        let action = record.action;
        let intent = match action {
            Action::Roster => Intent::Roster(index(&record.arg1, action, "a player count")?),
            Action::Setup => Intent::Setup {
                index: index(&record.arg1, action, "a slot index")?,
                entry: PlayerSetupEntry::new(
                    record.arg2.unwrap_or_default(),
                    record.arg3.unwrap_or_default(),
                ),
            },
            Action::Start => Intent::Start,
            Action::Bet => Intent::Bet {
                row: index(&record.arg1, action, "a row")?,
                player: index(&record.arg2, action, "a player")?,
                value: record.arg3.unwrap_or_default(),
            },
            Action::Winner => Intent::Winner(record.arg1),
            Action::Settle => Intent::Settle(answer(&record.arg1, action)?),
            Action::Undo => Intent::Undo,
            Action::Reset => Intent::Reset(answer(&record.arg1, action)?),
        };
        Ok(intent)
    }
}

/// Reads user intents from a CSV script.
///
/// The script has an `action,arg1,arg2,arg3` header. Whitespace is trimmed
/// and rows may omit trailing arguments.
pub struct IntentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> IntentReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields one intent per script row. A malformed row yields an
    /// error and reading continues with the next one.
    pub fn intents(self) -> impl Iterator<Item = Result<Intent>> {
        self.reader.into_deserialize().map(|result| {
            let record: IntentRecord = result.map_err(SessionError::from)?;
            Intent::try_from(record)
        })
    }
}
