use nom::{
    Parser,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Frame, NmeaField, Result,
    nmea_content::{Sentence, format, sentence::field},
    parse::calendar_date,
};

type NomError<'a> = nom::error::Error<&'a str>;

const MAX_ZONE_MINUTES: i8 = 59;

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ZDA {
    /// Originating frame
    pub frame: Frame,
    /// Time in UTC
    pub time: Option<time::Time>,
    /// Date in UTC
    pub date: Option<time::Date>,
    /// Local zone description, offset from UTC
    pub local_zone: Option<time::UtcOffset>,
}

impl ZDA {
    /// The reported instant, expressed in the local zone.
    pub fn datetime(&self) -> Option<time::OffsetDateTime> {
        let zone = self.local_zone?;
        time::PrimitiveDateTime::new(self.date?, self.time?)
            .checked_add(time::Duration::seconds(zone.whole_seconds().into()))
            .map(|local| local.assume_offset(zone))
    }
}

impl Sentence for ZDA {
    const SENTENCE_TYPE: &'static str = "ZDA";
    const FIELD_COUNT: usize = 6;

    fn extract(frame: Frame) -> Result<Self> {
        Ok(ZDA {
            time: field(&frame, 0)?,
            date: full_date(&frame, 1)?,
            local_zone: local_zone(&frame, 4)?,
            frame,
        })
    }

    fn fields(&self) -> Vec<String> {
        let (day, month, year) = match self.date {
            Some(date) => (
                format!("{:02}", date.day()),
                format!("{:02}", u8::from(date.month())),
                format!("{:04}", date.year()),
            ),
            None => Default::default(),
        };

        let (hours, minutes) = match self.local_zone {
            Some(zone) => {
                let sign = if zone.is_negative() { "-" } else { "" };
                (
                    format!("{sign}{:02}", zone.whole_hours().unsigned_abs()),
                    format!("{:02}", zone.minutes_past_hour().unsigned_abs()),
                )
            }
            None => Default::default(),
        };

        vec![
            format::optional(self.time.as_ref(), format::time),
            day,
            month,
            year,
            hours,
            minutes,
        ]
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }
}

/// Day, month and four-digit year spread over `index..index + 3`.
fn full_date(frame: &Frame, index: usize) -> Result<Option<time::Date>> {
    let day: Option<u8> = field(frame, index)?;
    let month: Option<u8> = field(frame, index + 1)?;
    let year: Option<u16> = field(frame, index + 2)?;

    match (day, month, year) {
        (None, None, None) => Ok(None),
        (Some(day), Some(month), Some(year)) => {
            calendar_date(year.into(), month.into(), day.into())
                .map(Some)
                .ok_or_else(|| {
                    Error::format(time::Date::KIND, &format!("{day:02}{month:02}{year:04}"))
                        .at(index)
                })
        }
        _ => {
            let missing = [day.is_none(), month.is_none(), year.is_none()]
                .iter()
                .position(|&missing| missing)
                .unwrap_or_default();
            Err(Error::format(time::Date::KIND, "").at(index + missing))
        }
    }
}

/// Zone hours (possibly negative) and minutes at `index`, `index + 1`.
fn local_zone(frame: &Frame, index: usize) -> Result<Option<time::UtcOffset>> {
    const KIND: &str = "local zone";

    let raw_hours = frame.field(index).unwrap_or_default();
    let hours = match raw_hours {
        "" => None,
        raw => Some(zone_hours(raw).ok_or_else(|| Error::format(KIND, raw).at(index))?),
    };
    let minutes: Option<u8> = field(frame, index + 1)?;

    match (hours, minutes) {
        (None, None) => Ok(None),
        (Some((negative, hours)), Some(minutes)) => {
            let minutes = i8::try_from(minutes)
                .ok()
                .filter(|minutes| *minutes <= MAX_ZONE_MINUTES)
                .ok_or_else(|| {
                    Error::range(KIND, minutes.into(), MAX_ZONE_MINUTES.into()).at(index + 1)
                })?;
            let (hours, minutes) = if negative {
                (-hours, -minutes)
            } else {
                (hours, minutes)
            };

            time::UtcOffset::from_hms(hours, minutes, 0)
                .map(Some)
                .map_err(|_| Error::format(KIND, raw_hours).at(index))
        }
        (None, Some(_)) => Err(Error::format(KIND, "").at(index)),
        (Some(_), None) => Err(Error::format(KIND, "").at(index + 1)),
    }
}

/// `[-]hh`, returned as its sign and magnitude so `-00` keeps its sign.
fn zone_hours(raw: &str) -> Option<(bool, i8)> {
    let (_, (sign, digits)) = all_consuming((opt(char::<_, NomError>('-')), digit1))
        .parse(raw)
        .ok()?;

    Some((sign.is_some(), digits.parse().ok()?))
}
