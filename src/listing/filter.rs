use std::borrow::Cow;
use std::collections::BTreeMap;

/// A record attribute a listing can be filtered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterField {
    Species,
    Breed,
    Gender,
    Age,
    Status,
    Name,
}

/// How a criterion value is compared with a record's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchRule {
    /// Case-sensitive equality, for enumerated values.
    Exact,
    /// Case-insensitive substring, for free text.
    Contains,
    /// Equality of the leading integer of both sides.
    Numeric,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        Self::Species,
        Self::Breed,
        Self::Gender,
        Self::Age,
        Self::Status,
        Self::Name,
    ];

    pub fn rule(self) -> MatchRule {
        match self {
            Self::Species | Self::Gender | Self::Status => MatchRule::Exact,
            Self::Breed | Self::Name => MatchRule::Contains,
            Self::Age => MatchRule::Numeric,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Species => "species",
            Self::Breed => "breed",
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Status => "status",
            Self::Name => "name",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Records that expose their attributes to the listing pipeline.
///
/// Returning `None` means the record has no value for the field; any non-empty
/// criterion on that field then rejects the record.
pub trait Filterable {
    fn field_value(&self, field: FilterField) -> Option<Cow<'_, str>>;
}

/// Field-to-value constraints. A blank value places no constraint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    values: BTreeMap<FilterField, String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Raw value for `field`, empty when unset.
    pub fn get(&self, field: FilterField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Constraints that actually apply, with surrounding whitespace removed.
    pub fn active(&self) -> impl Iterator<Item = (FilterField, &str)> + '_ {
        self.values
            .iter()
            .map(|(field, value)| (*field, value.trim()))
            .filter(|(_, value)| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

/// Whether `record` satisfies every active criterion.
pub fn matches<T: Filterable>(record: &T, criteria: &FilterCriteria) -> bool {
    criteria.active().all(|(field, wanted)| match record.field_value(field) {
        Some(actual) => field_matches(field.rule(), &actual, wanted),
        None => false,
    })
}

/// Records of `collection` matching `criteria`, in their original order.
pub fn apply_filters<T>(collection: &[T], criteria: &FilterCriteria) -> Vec<T>
where
    T: Filterable + Clone,
{
    collection
        .iter()
        .filter(|record| matches(*record, criteria))
        .cloned()
        .collect()
}

fn field_matches(rule: MatchRule, actual: &str, wanted: &str) -> bool {
    match rule {
        MatchRule::Exact => actual.trim() == wanted,
        MatchRule::Contains => actual.to_lowercase().contains(&wanted.to_lowercase()),
        MatchRule::Numeric => match (leading_integer(actual), leading_integer(wanted)) {
            (Some(actual), Some(wanted)) => actual == wanted,
            _ => false,
        },
    }
}

/// Integer at the start of `text`, ignoring leading whitespace, so `"2 years"`
/// reads as 2. `None` when no digit follows the optional sign.
pub fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };

    let digits_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());

    if digits_end == 0 {
        return None;
    }

    rest[..digits_end].parse::<i64>().ok().map(|value| sign * value)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Record {
        species: Option<&'static str>,
        breed: Option<&'static str>,
        age: Option<&'static str>,
    }

    impl Filterable for Record {
        fn field_value(&self, field: FilterField) -> Option<Cow<'_, str>> {
            match field {
                FilterField::Species => self.species.map(Cow::Borrowed),
                FilterField::Breed => self.breed.map(Cow::Borrowed),
                FilterField::Age => self.age.map(Cow::Borrowed),
                _ => None,
            }
        }
    }

    fn record(species: &'static str, breed: &'static str, age: &'static str) -> Record {
        Record {
            species: Some(species),
            breed: Some(breed),
            age: Some(age),
        }
    }

    mod leading_integer {
        use super::*;

        /// Expect the number at the start of descriptive text
        #[test]
        fn reads_number_before_text() {
            assert_eq!(leading_integer("2 years"), Some(2));
            assert_eq!(leading_integer("  14"), Some(14));
            assert_eq!(leading_integer("-3"), Some(-3));
        }

        /// Expect None when there is no leading digit
        #[test]
        fn rejects_text_without_digits() {
            assert_eq!(leading_integer("two"), None);
            assert_eq!(leading_integer(""), None);
            assert_eq!(leading_integer("-"), None);
        }
    }

    mod criteria {
        use super::*;

        /// Expect whitespace-only values to be ignored
        #[test]
        fn blank_values_are_inactive() {
            let criteria = FilterCriteria::new()
                .with(FilterField::Species, "   ")
                .with(FilterField::Name, "");

            assert!(criteria.is_empty());
        }

        /// Expect field keys to round-trip through their names
        #[test]
        fn field_keys_resolve() {
            for field in FilterField::ALL {
                assert_eq!(FilterField::from_key(field.key()), Some(field));
            }
            assert_eq!(FilterField::from_key("colour"), None);
        }
    }

    mod apply_filters {
        use super::*;

        /// Expect exact matching on enumerated fields to be case-sensitive
        #[test]
        fn exact_match_is_case_sensitive() {
            let collection = vec![record("Dog", "Beagle", "2")];
            let criteria = FilterCriteria::new().with(FilterField::Species, "dog");

            assert!(apply_filters(&collection, &criteria).is_empty());
        }

        /// Expect free-text matching to ignore case and match substrings
        #[test]
        fn contains_match_ignores_case() {
            let collection = vec![
                record("Dog", "Golden Retriever", "2"),
                record("Dog", "Beagle", "2"),
            ];
            let criteria = FilterCriteria::new().with(FilterField::Breed, "RETRIEV");

            let filtered = apply_filters(&collection, &criteria);

            assert_eq!(filtered, vec![collection[0].clone()]);
        }

        /// Expect records without the filtered field to be excluded
        #[test]
        fn missing_field_fails_closed() {
            let collection = vec![Record {
                species: Some("Cat"),
                breed: None,
                age: Some("1"),
            }];
            let criteria = FilterCriteria::new().with(FilterField::Breed, "a");

            assert!(apply_filters(&collection, &criteria).is_empty());
        }

        /// Expect a non-numeric age criterion to match nothing rather than fail
        #[test]
        fn malformed_numeric_criterion_matches_nothing() {
            let collection = vec![record("Cat", "Persian", "3")];
            let criteria = FilterCriteria::new().with(FilterField::Age, "old");

            assert!(apply_filters(&collection, &criteria).is_empty());
        }

        /// Expect source order to be preserved among survivors
        #[test]
        fn preserves_order() {
            let collection = vec![
                record("Cat", "Siamese", "4"),
                record("Dog", "Pug", "4"),
                record("Cat", "Persian", "4"),
            ];
            let criteria = FilterCriteria::new().with(FilterField::Species, "Cat");

            let filtered = apply_filters(&collection, &criteria);

            assert_eq!(filtered, vec![collection[0].clone(), collection[2].clone()]);
        }
    }
}
