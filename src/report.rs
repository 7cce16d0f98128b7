//! The current-time digit report.

use crate::{
    clock::Clock,
    tally::DigitTally,
    timestamp::Timestamp,
};
use std::{
    fmt,
    io::{self, Write},
};

/// A formatted timestamp together with its digit tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    timestamp: Timestamp,
    tally: DigitTally,
}

impl Report {
    /// Tallies the digits of `timestamp`.
    pub fn new(timestamp: Timestamp) -> Self {
        let tally = DigitTally::of(timestamp.as_str());
        Report { timestamp, tally }
    }

    /// Builds a report for the instant `clock` reports.
    pub fn at<C: Clock>(clock: &C) -> Self {
        Self::new(Timestamp::now(clock))
    }

    /// The reported time.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Digit counts of [`Report::timestamp`].
    pub fn tally(&self) -> &DigitTally {
        &self.tally
    }

    /// Writes the report block, one trailing newline per line.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current time: {}", self.timestamp)?;
        writeln!(f, "Digit\tInstances")?;
        for (digit, count) in self.tally.iter() {
            writeln!(f, "{}\t{}", digit, count)?;
        }
        Ok(())
    }
}

/// Reads `clock`, tallies the formatted time and writes the report to `out`.
pub fn report_current_time_digits<C: Clock, W: Write>(clock: &C, out: W) -> io::Result<Report> {
    let report = Report::at(clock);
    report.write_to(out)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock(y: i32, m: u32, d: u32, h: u32, min: u32) -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(y, m, d)
                .and_then(|date| date.and_hms_opt(h, min, 0))
                .unwrap(),
        )
    }

    #[test]
    fn renders_exact_block() {
        let report = Report::at(&clock(2024, 1, 5, 13, 47));
        let expected = "Current time: 2024/01/05 13:47\n\
                        Digit\tInstances\n\
                        0\t3\n\
                        1\t2\n\
                        2\t2\n\
                        3\t1\n\
                        4\t2\n\
                        5\t1\n\
                        6\t0\n\
                        7\t1\n\
                        8\t0\n\
                        9\t0\n";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn writes_to_any_sink() {
        let mut out = Vec::new();
        let report = report_current_time_digits(&clock(2000, 1, 1, 0, 0), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(report.timestamp().as_str(), "2000/01/01 00:00");
        assert_eq!(text, report.to_string());
        assert!(text.contains("\n0\t9\n1\t2\n2\t1\n3\t0\n"));
        assert_eq!(text.lines().count(), 12);
    }

    #[test]
    fn rows_follow_digit_order() {
        let report = Report::at(&clock(1999, 9, 9, 9, 9));
        let rows: Vec<String> = report.to_string().lines().skip(2).map(str::to_owned).collect();
        let digits: Vec<String> = rows
            .iter()
            .map(|row| row.split('\t').next().unwrap_or_default().to_owned())
            .collect();
        assert_eq!(digits, (0..=9).map(|d| d.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn every_minute_of_a_day_sums_to_digit_count() {
        for h in 0..24 {
            for min in 0..60 {
                let report = Report::at(&clock(2023, 12, 31, h, min));
                let ts = report.timestamp().as_str();
                let digits = ts.chars().filter(char::is_ascii_digit).count();
                assert_eq!(report.tally().total(), digits, "{}", ts);
                assert!(report.tally().iter().all(|(_, n)| n <= ts.len()));
            }
        }
    }
}
