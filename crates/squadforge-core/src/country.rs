//! National teams and per-country tallies.

use std::fmt;
use std::str::FromStr;

/// National team a player is eligible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Country {
    Ireland,
    England,
    France,
    Wales,
    Scotland,
    Italy,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Ireland,
        Country::England,
        Country::France,
        Country::Wales,
        Country::Scotland,
        Country::Italy,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Country::Ireland => "Ireland",
            Country::England => "England",
            Country::France => "France",
            Country::Wales => "Wales",
            Country::Scotland => "Scotland",
            Country::Italy => "Italy",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a country name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown country: {0}")]
pub struct ParseCountryError(pub String);

impl FromStr for Country {
    type Err = ParseCountryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCountryError(s.to_string()))
    }
}

/// Number of squad players per country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountryTally([u32; 6]);

impl CountryTally {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, country: Country) -> u32 {
        self.0[country.index()]
    }

    #[inline]
    pub fn increment(&mut self, country: Country) {
        self.0[country.index()] += 1;
    }

    #[inline]
    pub fn decrement(&mut self, country: Country) {
        let slot = &mut self.0[country.index()];
        *slot = slot.saturating_sub(1);
    }

    /// Iterates `(country, count)` pairs, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (Country, u32)> + '_ {
        Country::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Highest single-country count.
    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Sum of squared counts; lower means a more evenly spread squad.
    pub fn concentration(&self) -> u32 {
        self.0.iter().map(|n| n * n).sum()
    }
}

impl<'a> FromIterator<&'a Country> for CountryTally {
    fn from_iter<I: IntoIterator<Item = &'a Country>>(iter: I) -> Self {
        let mut tally = CountryTally::new();
        for country in iter {
            tally.increment(*country);
        }
        tally
    }
}
