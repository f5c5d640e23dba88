//! Static code-to-name tables.
//!
//! Each table declares what happens to codes it does not list. The policy is
//! per table on purpose: the OSPF packet-type table passes unknown codes
//! through as numbers, while the authentication-type table reports them as
//! `"Reserved"`.

use super::FieldValue;

/// What to report for a code that is not in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmappedPolicy {
    /// Keep the raw numeric code.
    PassThrough,
    /// Substitute a fixed name.
    Fallback(&'static str),
}

/// Outcome of a table lookup. Unknown codes are a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Code is listed in the table.
    Named(&'static str),
    /// Code is unlisted and the table substitutes a fallback name.
    Fallback(&'static str),
    /// Code is unlisted and passes through unchanged.
    Unmapped(u64),
}

impl Resolution {
    /// Symbolic name, if the lookup produced one.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Resolution::Named(name) | Resolution::Fallback(name) => Some(*name),
            Resolution::Unmapped(_) => None,
        }
    }

    /// Record value: a symbol, or the raw code sized to its wire width.
    pub fn into_value<'data>(self, width: usize) -> FieldValue<'data> {
        match self {
            Resolution::Named(name) | Resolution::Fallback(name) => FieldValue::Symbol(name),
            Resolution::Unmapped(code) => FieldValue::uint(width, code),
        }
    }
}

/// Static mapping from integer code to symbolic name.
#[derive(Debug)]
pub struct CodeTable {
    name: &'static str,
    entries: &'static [(u64, &'static str)],
    policy: UnmappedPolicy,
}

impl CodeTable {
    pub const fn new(
        name: &'static str,
        entries: &'static [(u64, &'static str)],
        policy: UnmappedPolicy,
    ) -> Self {
        Self {
            name,
            entries,
            policy,
        }
    }

    /// Table name, for logs and schema descriptions.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy(&self) -> UnmappedPolicy {
        self.policy
    }

    /// Exact-match lookup, ignoring the unmapped policy.
    pub fn lookup(&self, code: u64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }

    /// Look up a code and apply the table's unmapped policy.
    pub fn resolve(&self, code: u64) -> Resolution {
        match (self.lookup(code), self.policy) {
            (Some(name), _) => Resolution::Named(name),
            (None, UnmappedPolicy::Fallback(name)) => Resolution::Fallback(name),
            (None, UnmappedPolicy::PassThrough) => Resolution::Unmapped(code),
        }
    }

    /// Iterate over the listed codes.
    pub fn entries(&self) -> impl Iterator<Item = (u64, &'static str)> {
        self.entries.iter().copied()
    }
}
