// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Input coercion helpers.

/// A single value or a collection of values, possibly with gaps.
///
/// Registration helpers accept either one string or a list of them; this
/// type is the `Into` target for all of those shapes. Missing entries
/// (`None`) are kept until the caller decides how to filter them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneOrMany(Vec<Option<String>>);

impl OneOrMany {
    /// Returns every present entry, including empty strings.
    pub fn into_present(self) -> Vec<String> {
        self.0.into_iter().flatten().collect()
    }

    /// Returns every present, non-empty entry.
    pub fn into_truthy(self) -> Vec<String> {
        self.0
            .into_iter()
            .flatten()
            .filter(|entry| !entry.is_empty())
            .collect()
    }

    /// Number of entries, missing ones included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        Self(vec![Some(value.to_string())])
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        Self(vec![Some(value)])
    }
}

impl From<Option<&str>> for OneOrMany {
    fn from(value: Option<&str>) -> Self {
        Self(vec![value.map(str::to_string)])
    }
}

impl From<Option<String>> for OneOrMany {
    fn from(value: Option<String>) -> Self {
        Self(vec![value])
    }
}

impl From<&[&str]> for OneOrMany {
    fn from(values: &[&str]) -> Self {
        Self(values.iter().map(|v| Some(v.to_string())).collect())
    }
}

impl From<&[String]> for OneOrMany {
    fn from(values: &[String]) -> Self {
        Self(values.iter().cloned().map(Some).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany {
    fn from(values: [&str; N]) -> Self {
        Self(values.into_iter().map(|v| Some(v.to_string())).collect())
    }
}

impl<const N: usize> From<[Option<&str>; N]> for OneOrMany {
    fn from(values: [Option<&str>; N]) -> Self {
        Self(values.into_iter().map(|v| v.map(str::to_string)).collect())
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(|v| Some(v.to_string())).collect())
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        Self(values.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<&str>>> for OneOrMany {
    fn from(values: Vec<Option<&str>>) -> Self {
        Self(values.into_iter().map(|v| v.map(str::to_string)).collect())
    }
}

impl From<Vec<Option<String>>> for OneOrMany {
    fn from(values: Vec<Option<String>>) -> Self {
        Self(values)
    }
}
