use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-side date range selector, sent as the `period` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "7d")]
    Days7,
    #[default]
    #[serde(rename = "30d")]
    Days30,
    #[serde(rename = "60d")]
    Days60,
    #[serde(rename = "90d")]
    Days90,
    #[serde(rename = "1y")]
    Year,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::Days7,
        Period::Days30,
        Period::Days60,
        Period::Days90,
        Period::Year,
    ];

    /// Wire token, e.g. `"30d"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Days7 => "7d",
            Period::Days30 => "30d",
            Period::Days60 => "60d",
            Period::Days90 => "90d",
            Period::Year => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Days7 => "Últimos 7 dias",
            Period::Days30 => "Últimos 30 dias",
            Period::Days60 => "Últimos 60 dias",
            Period::Days90 => "Últimos 90 dias",
            Period::Year => "Último ano",
        }
    }

    /// Compact label for button groups.
    pub fn short_label(&self) -> &'static str {
        match self {
            Period::Days7 => "7 dias",
            Period::Days30 => "30 dias",
            Period::Days60 => "60 dias",
            Period::Days90 => "90 dias",
            Period::Year => "1 ano",
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            Period::Days7 => 7,
            Period::Days30 => 30,
            Period::Days60 => 60,
            Period::Days90 => 90,
            Period::Year => 365,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown period: {s}"))
    }
}

/// Bucket size for time series on the sales page (`groupby` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Day,
    Week,
    Month,
}

impl GroupBy {
    pub const ALL: [GroupBy; 3] = [GroupBy::Day, GroupBy::Week, GroupBy::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Day => "day",
            GroupBy::Week => "week",
            GroupBy::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Day => "Dia",
            GroupBy::Week => "Semana",
            GroupBy::Month => "Mês",
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupBy::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("unknown groupby: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_tokens_round_trip_through_from_str() {
        for period in Period::ALL {
            assert_eq!(period.as_str().parse::<Period>(), Ok(period));
        }
        assert!("14d".parse::<Period>().is_err());
    }

    #[test]
    fn test_period_serializes_as_wire_token() {
        assert_eq!(serde_json::to_string(&Period::Year).unwrap(), "\"1y\"");
        assert_eq!(Period::default(), Period::Days30);
    }

    #[test]
    fn test_period_options_include_sixty_days() {
        let tokens: Vec<&str> = Period::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(tokens, vec!["7d", "30d", "60d", "90d", "1y"]);
    }

    #[test]
    fn test_group_by_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&GroupBy::Week).unwrap(), "\"week\"");
        assert_eq!("month".parse::<GroupBy>(), Ok(GroupBy::Month));
    }
}
