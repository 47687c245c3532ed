//! Detect the neighbourhood a place belongs to.
//!
//! Area detection sits behind the [`AreaLookup`] trait so a geofence or any
//! other strategy can replace the address heuristics without touching the
//! engine. [`AddressAreaTable`] is the stock implementation: an ordered table
//! of area names and address keywords matched as case-insensitive
//! substrings.

use crate::Place;

/// Resolve the area a place belongs to.
///
/// Implementations must be thread-safe so one lookup can serve concurrent
/// requests.
pub trait AreaLookup: Send + Sync {
    /// Return the area name for `place`, or `None` when it is unknown.
    fn area_of(&self, place: &Place) -> Option<&str>;

    /// Report whether `place` lies in `area`, ignoring case.
    fn is_in_area(&self, place: &Place, area: &str) -> bool {
        self.area_of(place)
            .is_some_and(|found| found.eq_ignore_ascii_case(area.trim()))
    }
}

impl<T> AreaLookup for Box<T>
where
    T: AreaLookup + ?Sized,
{
    fn area_of(&self, place: &Place) -> Option<&str> {
        (**self).area_of(place)
    }

    fn is_in_area(&self, place: &Place, area: &str) -> bool {
        (**self).is_in_area(place, area)
    }
}

/// Lookup that never detects an area.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAreas;

impl AreaLookup for NoAreas {
    fn area_of(&self, _place: &Place) -> Option<&str> {
        None
    }
}

/// One named area and the address keywords that identify it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaRule {
    /// Area name reported to callers.
    pub name: String,
    /// Lowercase keywords searched for in the address.
    pub keywords: Vec<String>,
}

impl AreaRule {
    /// Build a rule, lowercasing keywords and dropping blank ones.
    pub fn new<I, K>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Self {
            name: name.into(),
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().trim().to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        }
    }

    fn matches(&self, address: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| address.contains(keyword.as_str()))
    }
}

/// Ordered address-substring table. The first matching rule wins.
///
/// # Examples
/// ```
/// use placerank_core::{AddressAreaTable, AreaLookup, Place};
///
/// let table = AddressAreaTable::default();
/// let place = Place::new(1, "Cairo Jazz Club", "Bar")
///     .with_address("197 26th of July St, Agouza");
/// assert_eq!(table.area_of(&place), Some("Mohandessin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressAreaTable {
    rules: Vec<AreaRule>,
}

impl AddressAreaTable {
    /// Build a table from rules, preserving their order.
    #[must_use]
    pub fn new(rules: Vec<AreaRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .filter(|rule| !rule.keywords.is_empty())
                .collect(),
        }
    }

    /// Append a rule while returning `self` for chaining.
    #[must_use]
    pub fn with_rule(mut self, rule: AreaRule) -> Self {
        if !rule.keywords.is_empty() {
            self.rules.push(rule);
        }
        self
    }

    /// Return the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[AreaRule] {
        &self.rules
    }

    /// Decode a table from JSON.
    ///
    /// Two layouts are accepted: an array of `{"name", "keywords"}` objects,
    /// or an object mapping each area name to its keywords, such as
    /// `{"Zamalek": ["zamalek"]}`. Both keep the document's order.
    ///
    /// # Errors
    /// Returns [`AreaTableError::Parse`] when the payload is neither layout.
    #[cfg(feature = "serde")]
    pub fn from_json(payload: &str) -> Result<Self, AreaTableError> {
        let rules = decode_rules(payload).map_err(|source| AreaTableError::Parse { source })?;
        Ok(Self::new(
            rules
                .into_iter()
                .map(|rule| AreaRule::new(rule.name, rule.keywords))
                .collect(),
        ))
    }
}

#[cfg(feature = "serde")]
fn decode_rules(payload: &str) -> Result<Vec<AreaRule>, serde_json::Error> {
    match serde_json::from_str(payload)? {
        serde_json::Value::Object(areas) => areas
            .into_iter()
            .map(|(name, keywords)| {
                Ok(AreaRule {
                    name,
                    keywords: serde_json::from_value(keywords)?,
                })
            })
            .collect(),
        list => serde_json::from_value(list),
    }
}

impl Default for AddressAreaTable {
    fn default() -> Self {
        Self::new(vec![
            AreaRule::new("Zamalek", ["zamalek"]),
            AreaRule::new("Garden City", ["garden city"]),
            AreaRule::new(
                "Downtown",
                ["downtown", "wust el balad", "tahrir", "talaat harb"],
            ),
            AreaRule::new(
                "Islamic Cairo",
                [
                    "khan el khalili",
                    "al-muizz",
                    "el moez",
                    "al-azhar",
                    "darb al-ahmar",
                ],
            ),
            AreaRule::new("Coptic Cairo", ["coptic", "mar girgis", "old cairo"]),
            AreaRule::new("Maadi", ["maadi"]),
            AreaRule::new("Heliopolis", ["heliopolis", "masr el gedida", "korba"]),
            AreaRule::new("Nasr City", ["nasr city", "madinet nasr"]),
            AreaRule::new("New Cairo", ["new cairo", "fifth settlement", "tagamoa"]),
            AreaRule::new("Dokki", ["dokki"]),
            AreaRule::new("Mohandessin", ["mohandessin", "mohandeseen", "agouza"]),
            AreaRule::new("Giza", ["giza", "pyramids", "haram"]),
        ])
    }
}

impl AreaLookup for AddressAreaTable {
    fn area_of(&self, place: &Place) -> Option<&str> {
        if place.address.is_empty() {
            return None;
        }
        let address = place.address.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&address))
            .map(|rule| rule.name.as_str())
    }
}

/// Errors raised while loading an area table.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum AreaTableError {
    /// The JSON payload could not be decoded.
    #[error("failed to parse area table: {source}")]
    Parse {
        /// Decoder error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
