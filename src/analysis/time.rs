//! Time-pattern views on top of the base histograms.

use chrono::{Datelike, Timelike, Weekday};

use super::model::{ChatAnalysis, DayParts, Seasons, TimePatterns, WeekSplit};
use crate::Message;

pub fn analyze(messages: &[Message], prior: ChatAnalysis) -> ChatAnalysis {
    let mut time_stats = prior.time_stats;
    time_stats.patterns = Some(time_patterns(messages));
    ChatAnalysis {
        time_stats,
        ..prior
    }
}

pub fn time_patterns(messages: &[Message]) -> TimePatterns {
    let mut patterns = TimePatterns::default();

    for msg in messages {
        let ts = msg.timestamp;
        let key = ts.format("%Y-%m").to_string();
        *patterns.by_year_month.entry(key).or_default() += 1;

        patterns.day_parts.record(ts.hour());

        if matches!(ts.weekday(), Weekday::Sat | Weekday::Sun) {
            patterns.week_split.weekend += 1;
        } else {
            patterns.week_split.weekday += 1;
        }

        match ts.month() {
            12 | 1 | 2 => patterns.seasons.winter += 1,
            3..=5 => patterns.seasons.spring += 1,
            6..=8 => patterns.seasons.summer += 1,
            _ => patterns.seasons.autumn += 1,
        }
    }
    patterns
}

impl DayParts {
    /// Counts one message sent at `hour`.
    pub fn record(&mut self, hour: u32) {
        match hour {
            6..12 => self.morning += 1,
            12..18 => self.afternoon += 1,
            18..22 => self.evening += 1,
            _ => self.night += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.morning + self.afternoon + self.evening + self.night
    }
}

impl WeekSplit {
    /// Share of weekend messages, 0 when empty.
    pub fn weekend_ratio(&self) -> f64 {
        let total = self.weekday + self.weekend;
        if total == 0 {
            0.0
        } else {
            self.weekend as f64 / total as f64
        }
    }
}

impl Seasons {
    pub fn total(&self) -> usize {
        self.winter + self.spring + self.summer + self.autumn
    }
}
