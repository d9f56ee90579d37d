//! # Birthday Conversation
//!
//! File: cli/src/bot/conversation.rs
//!
//! ## Overview
//!
//! The birthday-collection dialogue as a pure state machine. A user is asked
//! for their birth year, then month, then day; each answer is validated on its
//! own and only a valid answer moves the conversation forward.
//!
//! ```text
//! Idle --/start--> AwaitingYear --year--> AwaitingMonth --month--> AwaitingDay --day--> Idle
//!                      ^  |                   ^  |                    ^  |
//!                      +--+ invalid           +--+ invalid            +--+ invalid / future
//! ```
//!
//! `handle_text` never mutates anything. It returns a [`Transition`] with the
//! next state, the updated partial birthdate, the reply, and the finished
//! birthdate when the last field was accepted. Keeping the date in the caller's
//! hands (see `bot::tracker`) means a date is only committed after it has been
//! stored.
//!
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Reply sent when the user has started the dialogue.
pub const ASK_YEAR: &str = "I need to know your birthday, so tell me the year you were born in...";
/// Reply sent after a valid year.
pub const ASK_MONTH: &str = "ok, now I need to know the month (in numerical form)...";
/// Reply sent after a valid month.
pub const ASK_DAY: &str = "great! And now, the day...";
/// The single reply used for every rejected answer.
pub const INVALID_INPUT: &str = "it's funny but it doesn't seem to be correct...";

/// Which piece of the birthday a user is expected to send next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingYear,
    AwaitingMonth,
    AwaitingDay,
}

/// Birthday fields collected so far, filled strictly in year, month, day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialBirthdate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

/// Why an answer was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid input: {0}")]
    Parse(ParseReason),
    #[error("{0} is in the future")]
    FutureDate(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseReason {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
    #[error("year {year} is after the current year {current}")]
    YearAfterCurrent { year: i32, current: i32 },
    #[error("{0} is not a usable year")]
    YearOutOfRange(i64),
    #[error("month {0} is not between 1 and 12")]
    MonthOutOfRange(i64),
    #[error("{year}-{month}-{day} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: i64 },
    #[error("no {0} collected yet")]
    MissingField(&'static str),
}

impl From<ParseReason> for InputError {
    fn from(reason: ParseReason) -> Self {
        InputError::Parse(reason)
    }
}

/// Result of feeding one message into the dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next_state: ConversationState,
    pub partial: PartialBirthdate,
    /// `None` when the state does not take free text (i.e. `Idle`).
    pub reply: Option<String>,
    /// The complete birthdate, set only on the transition back to `Idle`.
    pub captured: Option<NaiveDate>,
    /// The reason an answer was rejected, for logging.
    pub rejected: Option<InputError>,
}

impl Transition {
    fn unchanged(state: ConversationState, partial: PartialBirthdate, err: InputError) -> Self {
        Self {
            next_state: state,
            partial,
            reply: Some(INVALID_INPUT.to_string()),
            captured: None,
            rejected: Some(err),
        }
    }
}

/// Feeds `text` to the dialogue in `state`.
///
/// Invalid answers leave `state` and `partial` exactly as they were and reply
/// with [`INVALID_INPUT`].
pub fn handle_text(
    state: ConversationState,
    partial: &PartialBirthdate,
    text: &str,
    today: NaiveDate,
) -> Transition {
    let partial = *partial;
    match state {
        ConversationState::Idle => Transition {
            next_state: ConversationState::Idle,
            partial,
            reply: None,
            captured: None,
            rejected: None,
        },
        ConversationState::AwaitingYear => match parse_year(text, today) {
            Ok(year) => Transition {
                next_state: ConversationState::AwaitingMonth,
                partial: PartialBirthdate {
                    year: Some(year),
                    ..partial
                },
                reply: Some(ASK_MONTH.to_string()),
                captured: None,
                rejected: None,
            },
            Err(e) => Transition::unchanged(state, partial, e),
        },
        ConversationState::AwaitingMonth => match parse_month(text) {
            Ok(month) => Transition {
                next_state: ConversationState::AwaitingDay,
                partial: PartialBirthdate {
                    month: Some(month),
                    ..partial
                },
                reply: Some(ASK_DAY.to_string()),
                captured: None,
                rejected: None,
            },
            Err(e) => Transition::unchanged(state, partial, e),
        },
        ConversationState::AwaitingDay => match parse_day(text, &partial, today) {
            Ok(birthdate) => Transition {
                next_state: ConversationState::Idle,
                partial: PartialBirthdate {
                    day: Some(birthdate.day()),
                    ..partial
                },
                reply: Some(format!("ok, you were born on {}", birthdate)),
                captured: Some(birthdate),
                rejected: None,
            },
            Err(e) => Transition::unchanged(state, partial, e),
        },
    }
}

fn parse_integer(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ParseReason::NotAnInteger(trimmed.to_string()).into())
}

/// Accepts any integer year up to and including the year of `today`.
pub fn parse_year(text: &str, today: NaiveDate) -> Result<i32, InputError> {
    let value = parse_integer(text)?;
    let current = today.year();
    let year = i32::try_from(value).map_err(|_| ParseReason::YearOutOfRange(value))?;
    if year > current {
        return Err(ParseReason::YearAfterCurrent { year, current }.into());
    }
    Ok(year)
}

/// Accepts an integer month in `1..=12`.
pub fn parse_month(text: &str) -> Result<u32, InputError> {
    let value = parse_integer(text)?;
    match u32::try_from(value) {
        Ok(month @ 1..=12) => Ok(month),
        _ => Err(ParseReason::MonthOutOfRange(value).into()),
    }
}

/// Combines the collected year and month with the day in `text` into a
/// birthdate that exists in the calendar and is not after `today`.
///
/// Years before 1 are not accepted as calendar dates.
pub fn parse_day(
    text: &str,
    partial: &PartialBirthdate,
    today: NaiveDate,
) -> Result<NaiveDate, InputError> {
    let day = parse_integer(text)?;
    let year = partial.year.ok_or(ParseReason::MissingField("year"))?;
    let month = partial.month.ok_or(ParseReason::MissingField("month"))?;
    let invalid = || ParseReason::InvalidDate { year, month, day };

    let day_u32 = u32::try_from(day).map_err(|_| invalid())?;
    if year < 1 {
        return Err(invalid().into());
    }
    let birthdate = NaiveDate::from_ymd_opt(year, month, day_u32).ok_or_else(invalid)?;
    if birthdate > today {
        return Err(InputError::FutureDate(birthdate));
    }
    Ok(birthdate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn with_year_month(year: i32, month: u32) -> PartialBirthdate {
        PartialBirthdate {
            year: Some(year),
            month: Some(month),
            day: None,
        }
    }

    #[test]
    fn year_up_to_current_is_accepted() {
        let t = handle_text(
            ConversationState::AwaitingYear,
            &PartialBirthdate::default(),
            " 2024 ",
            today(),
        );
        assert_eq!(t.next_state, ConversationState::AwaitingMonth);
        assert_eq!(t.partial.year, Some(2024));
        assert_eq!(t.reply.as_deref(), Some(ASK_MONTH));
        assert!(t.rejected.is_none());
    }

    #[test]
    fn future_or_garbage_year_is_rejected() {
        for input in ["2999", "2025", "nineteen ninety", "", "19.5", "99999999999999"] {
            let t = handle_text(
                ConversationState::AwaitingYear,
                &PartialBirthdate::default(),
                input,
                today(),
            );
            assert_eq!(t.next_state, ConversationState::AwaitingYear, "input {:?}", input);
            assert_eq!(t.partial, PartialBirthdate::default());
            assert_eq!(t.reply.as_deref(), Some(INVALID_INPUT));
            assert!(t.rejected.is_some());
        }
    }

    #[test]
    fn year_error_carries_reason() {
        assert_eq!(
            parse_year("2999", today()),
            Err(InputError::Parse(ParseReason::YearAfterCurrent {
                year: 2999,
                current: 2024
            }))
        );
        assert_eq!(
            parse_year("abc", today()),
            Err(InputError::Parse(ParseReason::NotAnInteger("abc".into())))
        );
    }

    #[test]
    fn month_range_is_enforced() {
        let start = PartialBirthdate {
            year: Some(1990),
            ..Default::default()
        };
        for month in 1..=12 {
            let t = handle_text(
                ConversationState::AwaitingMonth,
                &start,
                &month.to_string(),
                today(),
            );
            assert_eq!(t.next_state, ConversationState::AwaitingDay);
            assert_eq!(t.partial.month, Some(month));
            assert_eq!(t.partial.year, Some(1990));
        }
        for input in ["0", "13", "-1", "may"] {
            let t = handle_text(ConversationState::AwaitingMonth, &start, input, today());
            assert_eq!(t.next_state, ConversationState::AwaitingMonth);
            assert_eq!(t.partial, start);
        }
    }

    #[test]
    fn valid_day_completes_the_birthdate() {
        let t = handle_text(
            ConversationState::AwaitingDay,
            &with_year_month(1990, 5),
            "17",
            today(),
        );
        let expected = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        assert_eq!(t.next_state, ConversationState::Idle);
        assert_eq!(t.captured, Some(expected));
        assert_eq!(t.reply.as_deref(), Some("ok, you were born on 1990-05-17"));
    }

    #[test]
    fn impossible_day_stays_awaiting_day() {
        let partial = with_year_month(1990, 2);
        let t = handle_text(ConversationState::AwaitingDay, &partial, "30", today());
        assert_eq!(t.next_state, ConversationState::AwaitingDay);
        assert_eq!(t.partial, partial);
        assert_eq!(t.captured, None);
        assert_eq!(
            t.rejected,
            Some(InputError::Parse(ParseReason::InvalidDate {
                year: 1990,
                month: 2,
                day: 30
            }))
        );
    }

    #[test]
    fn leap_day_depends_on_year() {
        assert!(parse_day("29", &with_year_month(2000, 2), today()).is_ok());
        assert!(parse_day("29", &with_year_month(1900, 2), today()).is_err());
        assert!(parse_day("31", &with_year_month(2001, 4), today()).is_err());
        assert!(parse_day("0", &with_year_month(2001, 4), today()).is_err());
    }

    #[test]
    fn future_day_in_current_month_is_rejected() {
        let partial = with_year_month(2024, 6);
        assert_eq!(
            parse_day("16", &partial, today()),
            Err(InputError::FutureDate(
                NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()
            ))
        );
        // Born today is fine.
        assert_eq!(
            parse_day("15", &partial, today()),
            Ok(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        );
    }

    #[test]
    fn year_before_one_is_not_a_calendar_date() {
        assert!(parse_year("-44", today()).is_ok());
        assert!(matches!(
            parse_day("15", &with_year_month(-44, 3), today()),
            Err(InputError::Parse(ParseReason::InvalidDate { .. }))
        ));
    }

    #[test]
    fn day_without_year_is_rejected() {
        let partial = PartialBirthdate {
            month: Some(3),
            ..Default::default()
        };
        assert_eq!(
            parse_day("3", &partial, today()),
            Err(InputError::Parse(ParseReason::MissingField("year")))
        );
    }

    #[test]
    fn idle_does_not_handle_text() {
        let t = handle_text(
            ConversationState::Idle,
            &PartialBirthdate::default(),
            "1990",
            today(),
        );
        assert_eq!(t.next_state, ConversationState::Idle);
        assert_eq!(t.reply, None);
        assert_eq!(t.partial, PartialBirthdate::default());
    }
}
