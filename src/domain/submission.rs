//! Raw form submissions and the coercions shared by every record type.
//!
//! A [`Submission`] keeps the form pairs exactly as they arrived. Record
//! modules turn it into typed changes through a [`FieldSet`] whitelist, so
//! an unknown key is rejected instead of silently assigned.

use std::collections::BTreeMap;

use super::genres;
use crate::error::DirectoryError;

/// Name of the multi-valued genre field.
pub const GENRES_FIELD: &str = "genres";

/// Literal a checkbox submits when ticked.
pub const CHECKED: &str = "y";

/// Submitted key/value mapping after multi-valued fields are collapsed.
pub type FieldMap = BTreeMap<String, String>;

/// Form pairs in submission order, repeated keys included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pairs: Vec<(String, String)>,
}

impl Submission {
    /// Wraps decoded `application/x-www-form-urlencoded` pairs.
    #[must_use]
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value submitted under `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `key`, in order.
    #[must_use]
    pub fn values(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Collapses repeated keys, keeping the first value of each.
    #[must_use]
    pub fn fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        for (key, value) in &self.pairs {
            fields
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        fields
    }

    /// Like [`Submission::fields`], with `genres` replaced by the
    /// comma-join of every submitted genre.
    ///
    /// When no genre was submitted the key stays absent, so an edit leaves
    /// the stored genres alone and a create fails the genre check.
    #[must_use]
    pub fn fields_with_genres(&self) -> FieldMap {
        let mut fields = self.fields();
        let genres = self.values(GENRES_FIELD);
        if !genres.is_empty() {
            fields.insert(GENRES_FIELD.to_string(), genres::join(&genres));
        }
        fields
    }
}

/// Whitelist of the fields a record accepts from a submission.
pub trait FieldSet: Sized + Copy + 'static {
    /// Every accepted field.
    const ALL: &'static [Self];

    /// Form key of the field.
    fn name(self) -> &'static str;

    /// Resolves a form key, `None` when it is not whitelisted.
    fn lookup(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// Resolves every submitted key against `F`'s whitelist.
///
/// # Errors
///
/// Returns [`DirectoryError::Validation`] naming every unknown key and
/// every value PostgreSQL text cannot hold (U+0000).
pub fn classify<F: FieldSet>(fields: FieldMap) -> Result<Vec<(F, String)>, DirectoryError> {
    let mut known = Vec::with_capacity(fields.len());
    let mut problems = Vec::new();
    for (key, value) in fields {
        match F::lookup(&key) {
            Some(_) if value.contains('\0') => {
                problems.push(format!("{key} contains a NUL character"));
            }
            Some(field) => known.push((field, value)),
            None => problems.push(format!("unknown field: {}", key.escape_debug())),
        }
    }
    if problems.is_empty() {
        Ok(known)
    } else {
        Err(DirectoryError::Validation(problems))
    }
}

/// Checkbox coercion: true only for the literal `"y"`, absence included.
#[must_use]
pub fn flag(value: Option<&str>) -> bool {
    value == Some(CHECKED)
}

/// Optional text coercion: a blank value clears the column.
#[must_use]
pub fn optional_text(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
