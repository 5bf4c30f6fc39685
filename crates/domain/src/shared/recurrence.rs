use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

const MINUTE_MILLIS: i64 = 60 * 1000;
const DAY_MILLIS: i64 = 24 * 60 * MINUTE_MILLIS;

/// How often a `ReminderSeries` regenerates itself.
///
/// Months, quarters and years are fixed-length approximations (30, 90 and
/// 365 days). Bills already stored by the host app have due dates computed
/// this way, so the durations must stay as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceRule {
    None,
    TestMinute,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl RecurrenceRule {
    /// Time between two occurrences, `None` for a rule that never regenerates
    pub fn interval_millis(&self) -> Option<i64> {
        match self {
            Self::None => None,
            Self::TestMinute => Some(MINUTE_MILLIS),
            Self::Weekly => Some(7 * DAY_MILLIS),
            Self::Monthly => Some(30 * DAY_MILLIS),
            Self::Quarterly => Some(90 * DAY_MILLIS),
            Self::Yearly => Some(365 * DAY_MILLIS),
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.interval_millis().is_some()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::TestMinute => "1 minute (testing)",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self::None
    }
}

impl Display for RecurrenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parsing never fails: the host app stores free-form strings and anything
/// unknown is treated as a terminal rule.
impl FromStr for RecurrenceRule {
    type Err = std::convert::Infallible;

    fn from_str(rule: &str) -> Result<Self, Self::Err> {
        let rule = match rule.trim().to_lowercase().as_str() {
            "1 minute (testing)" => Self::TestMinute,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "quarterly" => Self::Quarterly,
            "yearly" => Self::Yearly,
            _ => Self::None,
        };
        Ok(rule)
    }
}

impl Serialize for RecurrenceRule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecurrenceRule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RecurrenceRuleVisitor;

        impl<'de> Visitor<'de> for RecurrenceRuleVisitor {
            type Value = RecurrenceRule;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A string representation of a recurrence rule")
            }

            fn visit_str<E>(self, value: &str) -> Result<RecurrenceRule, E>
            where
                E: serde::de::Error,
            {
                Ok(value.parse::<RecurrenceRule>().unwrap_or_default())
            }
        }

        deserializer.deserialize_str(RecurrenceRuleVisitor)
    }
}

/// Computes when the occurrence following one fired at `from_millis` is due.
///
/// Returns `None` when the rule is terminal. The result is always strictly
/// greater than `from_millis`.
pub fn next_fire_time(rule: RecurrenceRule, from_millis: i64) -> Option<i64> {
    rule.interval_millis()
        .and_then(|interval| from_millis.checked_add(interval))
}

pub fn next_sequence(sequence: u32) -> u32 {
    sequence.saturating_add(1)
}

#[cfg(test)]
mod test {
    use super::*;

    const ALL_RULES: [RecurrenceRule; 6] = [
        RecurrenceRule::None,
        RecurrenceRule::TestMinute,
        RecurrenceRule::Weekly,
        RecurrenceRule::Monthly,
        RecurrenceRule::Quarterly,
        RecurrenceRule::Yearly,
    ];

    #[test]
    fn parses_host_app_rule_names() {
        assert_eq!(
            "1 Minute (Testing)".parse::<RecurrenceRule>().unwrap(),
            RecurrenceRule::TestMinute
        );
        assert_eq!(
            "Weekly".parse::<RecurrenceRule>().unwrap(),
            RecurrenceRule::Weekly
        );
        assert_eq!(
            "MONTHLY".parse::<RecurrenceRule>().unwrap(),
            RecurrenceRule::Monthly
        );
        assert_eq!(
            "quarterly".parse::<RecurrenceRule>().unwrap(),
            RecurrenceRule::Quarterly
        );
        assert_eq!(
            " yearly ".parse::<RecurrenceRule>().unwrap(),
            RecurrenceRule::Yearly
        );
    }

    #[test]
    fn unknown_rules_are_terminal() {
        for rule in &["", "daily", "fortnightly", "every 3 days"] {
            let parsed = rule.parse::<RecurrenceRule>().unwrap();
            assert_eq!(parsed, RecurrenceRule::None);
            assert_eq!(next_fire_time(parsed, 1000), None);
        }
    }

    #[test]
    fn fixed_duration_intervals() {
        let from = 1_613_862_000_000;
        assert_eq!(
            next_fire_time(RecurrenceRule::TestMinute, from),
            Some(from + 60_000)
        );
        assert_eq!(
            next_fire_time(RecurrenceRule::Weekly, from),
            Some(from + 604_800_000)
        );
        assert_eq!(
            next_fire_time(RecurrenceRule::Monthly, from),
            Some(from + 2_592_000_000)
        );
        assert_eq!(
            next_fire_time(RecurrenceRule::Quarterly, from),
            Some(from + 7_776_000_000)
        );
        assert_eq!(
            next_fire_time(RecurrenceRule::Yearly, from),
            Some(from + 31_536_000_000)
        );
    }

    #[test]
    fn next_fire_time_is_strictly_later_and_deterministic() {
        let times = [i64::MIN / 2, -1, 0, 1, 1_613_862_000_000, i64::MAX - 1];
        for rule in ALL_RULES.iter() {
            for t in times.iter() {
                let next = next_fire_time(*rule, *t);
                assert_eq!(next, next_fire_time(*rule, *t));
                if let Some(next) = next {
                    assert!(next > *t);
                }
            }
        }
    }

    #[test]
    fn sequence_advances_by_one() {
        assert_eq!(next_sequence(1), 2);
        assert_eq!(next_sequence(41), 42);
        assert_eq!(next_sequence(u32::MAX), u32::MAX);
    }

    #[test]
    fn serializes_as_lowercase_string() {
        let json = serde_json::to_string(&RecurrenceRule::TestMinute).unwrap();
        assert_eq!(json, "\"1 minute (testing)\"");
        let rule: RecurrenceRule = serde_json::from_str("\"Quarterly\"").unwrap();
        assert_eq!(rule, RecurrenceRule::Quarterly);
        let rule: RecurrenceRule = serde_json::from_str("\"biweekly\"").unwrap();
        assert_eq!(rule, RecurrenceRule::None);
    }
}
