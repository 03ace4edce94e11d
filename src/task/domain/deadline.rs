//! Day-granularity classification of task deadlines.

use chrono::NaiveDate;

/// Urgency style tag attached to a classified deadline.
///
/// Treated as a string tag, not visual styling: `overdue` for past dates,
/// `urgent` for 0–3 days remaining, `warning` for 4–7 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyTag {
    /// The deadline has passed.
    Overdue,
    /// The deadline is 0–3 days away.
    Urgent,
    /// The deadline is 4–7 days away.
    Warning,
}

impl UrgencyTag {
    /// Returns the tag's canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Urgent => "urgent",
            Self::Warning => "warning",
        }
    }
}

/// Classification of a deadline relative to a reference date.
///
/// Buckets, by days remaining: none, < −1, −1, 0, 1, 2–6, 7–29 (weeks,
/// rounded up), ≥ 30 (absolute date).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    /// The task has no deadline.
    NoDeadline,
    /// The deadline passed `days` days ago (two or more).
    Overdue {
        /// Whole days since the deadline.
        days: i64,
    },
    /// The deadline was yesterday.
    Yesterday,
    /// The deadline is today.
    Today,
    /// The deadline is tomorrow.
    Tomorrow,
    /// The deadline is 2–6 days away.
    DaysLeft {
        /// Whole days until the deadline.
        days: i64,
    },
    /// The deadline is 7–29 days away.
    WeeksLeft {
        /// Weeks until the deadline, rounded up.
        weeks: i64,
    },
    /// The deadline is 30 or more days away; shown as an absolute date.
    OnDate(NaiveDate),
}

impl DeadlineStatus {
    /// Classifies a deadline against a reference date.
    #[must_use]
    pub fn classify(deadline: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(date) = deadline else {
            return Self::NoDeadline;
        };
        let days = (date - today).num_days();
        match days {
            i64::MIN..=-2 => Self::Overdue { days: -days },
            -1 => Self::Yesterday,
            0 => Self::Today,
            1 => Self::Tomorrow,
            2..=6 => Self::DaysLeft { days },
            7..=29 => Self::WeeksLeft {
                weeks: days.div_ceil(7),
            },
            _ => Self::OnDate(date),
        }
    }

    /// Returns the display label for the classification.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::NoDeadline => "No deadline".to_owned(),
            Self::Overdue { days } => format!("Overdue by {days} days"),
            Self::Yesterday => "Yesterday".to_owned(),
            Self::Today => "Today".to_owned(),
            Self::Tomorrow => "Tomorrow".to_owned(),
            Self::DaysLeft { days } => format!("{days} days left"),
            Self::WeeksLeft { weeks: 1 } => "~1 week left".to_owned(),
            Self::WeeksLeft { weeks } => format!("~{weeks} weeks left"),
            Self::OnDate(date) => date.format("%d.%m.%Y").to_string(),
        }
    }

    /// Returns the urgency tag, when one applies.
    #[must_use]
    pub const fn tag(&self) -> Option<UrgencyTag> {
        match self {
            Self::Overdue { .. } | Self::Yesterday => Some(UrgencyTag::Overdue),
            Self::Today | Self::Tomorrow => Some(UrgencyTag::Urgent),
            Self::DaysLeft { days } => {
                if *days <= 3 {
                    Some(UrgencyTag::Urgent)
                } else {
                    Some(UrgencyTag::Warning)
                }
            }
            // Exactly seven days out rounds to one week and still warns.
            Self::WeeksLeft { weeks } => {
                if *weeks == 1 {
                    Some(UrgencyTag::Warning)
                } else {
                    None
                }
            }
            Self::NoDeadline | Self::OnDate(_) => None,
        }
    }
}
