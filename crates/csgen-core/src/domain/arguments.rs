//! Generator construction arguments and their validation.

use crate::domain::error::DomainError;

/// Named string arguments passed to a generator constructor.
///
/// Keys keep the order in which they were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorArgs {
    values: Vec<(String, String)>,
}

impl GeneratorArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing an earlier value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.values.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Parse a `key=value` pair. The value may itself contain `=`.
    pub fn parse_pair(pair: &str) -> Result<(String, String), DomainError> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| DomainError::InvalidArgumentValue {
                name: pair.to_owned(),
                reason: "expected KEY=VALUE".into(),
            })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(DomainError::InvalidArgumentValue {
                name: pair.to_owned(),
                reason: "key cannot be empty".into(),
            });
        }

        Ok((key.to_owned(), value.to_owned()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for GeneratorArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (k, v) in iter {
            args.set(k, v);
        }
        args
    }
}

/// The arguments a generator constructor accepts.
///
/// Validation is strict: every required key must be present and no key
/// outside `required` and `optional` may be given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentSpec {
    required: &'static [&'static str],
    optional: &'static [&'static str],
}

impl ArgumentSpec {
    pub const fn new(required: &'static [&'static str], optional: &'static [&'static str]) -> Self {
        Self { required, optional }
    }

    pub fn required(&self) -> &'static [&'static str] {
        self.required
    }

    pub fn optional(&self) -> &'static [&'static str] {
        self.optional
    }

    pub fn accepts(&self, key: &str) -> bool {
        self.required.contains(&key) || self.optional.contains(&key)
    }

    /// Check `args` against this spec, reporting every missing and every
    /// unexpected key at once.
    pub fn validate(&self, args: &GeneratorArgs) -> Result<(), DomainError> {
        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|key| !args.contains(key))
            .map(|key| key.to_string())
            .collect();

        let rejected: Vec<String> = args
            .keys()
            .filter(|key| !self.accepts(key))
            .map(str::to_owned)
            .collect();

        if missing.is_empty() && rejected.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidArguments { missing, rejected })
        }
    }
}
