//! Shared utility functions for the ISO-NE dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Datelike, NaiveDate, Offset, TimeZone};

    const MONTH_ABBREVIATIONS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

    /// Parse a date string in "YYYY-MM-DD" format.
    ///
    /// A trailing time component ("2023-01-01 00:00" or "2023-01-01T00:00:00")
    /// is ignored, since market exports are not consistent about it.
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        let trimmed = s.trim();
        let date_part = trimmed
            .split(|c: char| c == ' ' || c == 'T')
            .next()
            .unwrap_or(trimmed);
        Ok(NaiveDate::parse_from_str(date_part, "%Y-%m-%d")?)
    }

    /// 1-based ordinal of the date within its calendar year (Jan 1 = 1).
    pub fn day_of_year(date: &NaiveDate) -> u32 {
        date.ordinal()
    }

    /// 1-based ordinal of an instant within its calendar year, in its own time zone.
    ///
    /// The reference point is local midnight on the last day of the previous
    /// year ("day zero"). The two instants may carry different UTC offsets
    /// (e.g. across a DST change), so the offset delta is added to the raw
    /// millisecond difference before dividing by the length of a day.
    pub fn day_of_year_at<Tz: TimeZone>(instant: &DateTime<Tz>) -> u32 {
        let tz = instant.timezone();
        let year = instant.naive_local().year();
        let day_zero = NaiveDate::from_ymd_opt(year - 1, 12, 31)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .and_then(|naive| tz.from_local_datetime(&naive).earliest());

        let Some(start) = day_zero else {
            // No representable local midnight; fall back to the wall-clock date.
            return instant.naive_local().ordinal();
        };

        let raw_millis = instant.timestamp_millis() - start.timestamp_millis();
        let instant_offset = instant.offset().fix().local_minus_utc() as i64;
        let start_offset = start.offset().fix().local_minus_utc() as i64;
        let diff = raw_millis + (instant_offset - start_offset) * 1000;
        diff.div_euclid(MILLIS_PER_DAY) as u32
    }

    /// Inverse of [`day_of_year`]: the calendar date for an ordinal in `year`.
    ///
    /// Returns `None` unless `1 <= day <= days_in_year(year)`.
    pub fn date_from_day_of_year(day: u32, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_yo_opt(year, day)
    }

    /// Number of days in the calendar year (365 or 366).
    pub fn days_in_year(year: i32) -> u32 {
        if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
            366
        } else {
            365
        }
    }

    /// English ordinal suffix for a day of the month.
    ///
    /// 11, 12 and 13 take "th" even though they end in 1, 2 and 3.
    pub fn ordinal_suffix(day: u32) -> &'static str {
        match (day % 10, day % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        }
    }

    /// Render a date as "{Mon} {day}{suffix}, {year}", e.g. "Jan 1st, 2023".
    pub fn format_human_date(date: &NaiveDate) -> String {
        let month = MONTH_ABBREVIATIONS[date.month0() as usize];
        let day = date.day();
        format!("{} {}{}, {}", month, day, ordinal_suffix(day), date.year())
    }

    /// Caption for a day-of-year range, e.g. "Range: Jan 1st, 2023 - Dec 31st, 2023".
    ///
    /// Ordinals past the end of `year` are clamped to its last day.
    pub fn format_range_label(min_day: u32, max_day: u32, year: i32) -> String {
        let last = days_in_year(year);
        let human = |day: u32| {
            date_from_day_of_year(day.clamp(1, last), year)
                .map(|d| format_human_date(&d))
                .unwrap_or_else(|| format!("day {day}"))
        };
        format!("Range: {} - {}", human(min_day), human(max_day))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

        #[test]
        fn test_day_of_year() {
            let jan1 = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
            assert_eq!(day_of_year(&jan1), 1);

            let feb1 = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
            assert_eq!(day_of_year(&feb1), 32);

            let dec31 = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
            assert_eq!(day_of_year(&dec31), 365);

            let leap_dec31 = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
            assert_eq!(day_of_year(&leap_dec31), 366);
        }

        #[test]
        fn test_round_trip_non_leap_year() {
            let mut date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
            while date.year() == 2023 {
                let back = date_from_day_of_year(day_of_year(&date), date.year());
                assert_eq!(back, Some(date));
                date = date.succ_opt().unwrap();
            }
        }

        #[test]
        fn test_round_trip_every_ordinal() {
            for year in [2023, 2024] {
                for day in 1..=days_in_year(year) {
                    let date = date_from_day_of_year(day, year).unwrap();
                    assert_eq!(day_of_year(&date), day);
                }
            }
        }

        #[test]
        fn test_date_from_day_of_year_out_of_range() {
            assert_eq!(date_from_day_of_year(0, 2023), None);
            assert_eq!(date_from_day_of_year(366, 2023), None);
            assert!(date_from_day_of_year(366, 2024).is_some());
        }

        #[test]
        fn test_days_in_year() {
            assert_eq!(days_in_year(2023), 365);
            assert_eq!(days_in_year(2024), 366);
            assert_eq!(days_in_year(1900), 365);
            assert_eq!(days_in_year(2000), 366);
        }

        #[test]
        fn test_day_of_year_at_matches_wall_clock() {
            let est = FixedOffset::west_opt(5 * 3600).unwrap();
            let late_evening = est.with_ymd_and_hms(2023, 3, 1, 23, 30, 0).unwrap();
            assert_eq!(day_of_year_at(&late_evening), 60);

            let midnight = est.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
            assert_eq!(day_of_year_at(&midnight), 1);
        }

        /// US Eastern time with the post-2007 daylight saving rules.
        #[derive(Debug, Clone, Copy)]
        struct NewYork;

        impl NewYork {
            fn standard() -> FixedOffset {
                FixedOffset::west_opt(5 * 3600).unwrap()
            }

            fn daylight() -> FixedOffset {
                FixedOffset::west_opt(4 * 3600).unwrap()
            }
        }

        impl TimeZone for NewYork {
            type Offset = FixedOffset;

            fn from_offset(_offset: &FixedOffset) -> Self {
                NewYork
            }

            fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
                self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
            }

            fn offset_from_local_datetime(
                &self,
                local: &NaiveDateTime,
            ) -> LocalResult<FixedOffset> {
                let valid: Vec<FixedOffset> = [Self::daylight(), Self::standard()]
                    .into_iter()
                    .filter(|offset| {
                        let utc = *local - Duration::seconds(offset.local_minus_utc() as i64);
                        self.offset_from_utc_datetime(&utc) == *offset
                    })
                    .collect();
                match valid.as_slice() {
                    [only] => LocalResult::Single(*only),
                    [earlier, later] => LocalResult::Ambiguous(*earlier, *later),
                    _ => LocalResult::None,
                }
            }

            fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
                self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
            }

            fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
                // 2am local on the second Sunday of March and the first Sunday of November
                let sunday = |month, nth, utc_hour| {
                    NaiveDate::from_weekday_of_month_opt(utc.year(), month, Weekday::Sun, nth)
                        .and_then(|d| d.and_hms_opt(utc_hour, 0, 0))
                };
                match (sunday(3, 2, 7), sunday(11, 1, 6)) {
                    (Some(start), Some(end)) if *utc >= start && *utc < end => Self::daylight(),
                    _ => Self::standard(),
                }
            }
        }

        #[test]
        fn test_day_of_year_at_across_daylight_saving() {
            let july = NewYork.with_ymd_and_hms(2023, 7, 1, 0, 30, 0).unwrap();
            assert_eq!(july.offset().local_minus_utc(), -4 * 3600);
            assert_eq!(day_of_year_at(&july), 182);

            let after_fall_back = NewYork.with_ymd_and_hms(2023, 11, 6, 0, 0, 0).unwrap();
            assert_eq!(day_of_year_at(&after_fall_back), 310);
        }

        #[test]
        fn test_day_of_year_at_every_local_day() {
            let times = [(0, 0), (0, 30), (12, 0), (23, 59)];
            for year in [2023, 2024] {
                for day in 1..=days_in_year(year) {
                    let date = date_from_day_of_year(day, year).unwrap();
                    for (hour, minute) in times {
                        let instant = NewYork
                            .from_local_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
                            .single()
                            .unwrap();
                        assert_eq!(day_of_year_at(&instant), day, "{date} {hour}:{minute:02}");
                    }
                }
            }
        }

        #[test]
        fn test_day_of_year_at_utc() {
            let noon = chrono::Utc.with_ymd_and_hms(2023, 12, 31, 12, 0, 0).unwrap();
            assert_eq!(day_of_year_at(&noon), 365);
        }

        #[test]
        fn test_format_human_date() {
            let d = |m, day| NaiveDate::from_ymd_opt(2023, m, day).unwrap();
            assert_eq!(format_human_date(&d(1, 1)), "Jan 1st, 2023");
            assert_eq!(format_human_date(&d(1, 2)), "Jan 2nd, 2023");
            assert_eq!(format_human_date(&d(1, 3)), "Jan 3rd, 2023");
            assert_eq!(format_human_date(&d(1, 4)), "Jan 4th, 2023");
            assert_eq!(format_human_date(&d(3, 11)), "Mar 11th, 2023");
            assert_eq!(format_human_date(&d(3, 12)), "Mar 12th, 2023");
            assert_eq!(format_human_date(&d(3, 13)), "Mar 13th, 2023");
            assert_eq!(format_human_date(&d(3, 21)), "Mar 21st, 2023");
            assert_eq!(format_human_date(&d(3, 22)), "Mar 22nd, 2023");
            assert_eq!(format_human_date(&d(3, 23)), "Mar 23rd, 2023");
            assert_eq!(format_human_date(&d(12, 31)), "Dec 31st, 2023");
        }

        #[test]
        fn test_format_range_label() {
            assert_eq!(
                format_range_label(1, 365, 2023),
                "Range: Jan 1st, 2023 - Dec 31st, 2023"
            );
            // 366 in a non-leap year clamps to Dec 31
            assert_eq!(
                format_range_label(32, 366, 2023),
                "Range: Feb 1st, 2023 - Dec 31st, 2023"
            );
        }

        #[test]
        fn test_parse_date() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            assert_eq!(parse_date("2023-06-15").unwrap(), date);
            assert_eq!(parse_date(" 2023-06-15 ").unwrap(), date);
            assert_eq!(parse_date("2023-06-15 00:00").unwrap(), date);
            assert_eq!(parse_date("2023-06-15T08:00:00").unwrap(), date);
            assert!(parse_date("06/15/2023").is_err());
        }
    }
}
