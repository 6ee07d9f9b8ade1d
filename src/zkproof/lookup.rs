//! Named access to secrets, bases and proof responses.
//!
//! Proof structures only ever refer to values by name. The same structure code runs
//! against real secret material when proving and against a transcript when verifying,
//! depending on which lookup it is handed.

use std::collections::BTreeMap;

use num_bigint::BigInt;

/// Resolves secret exponents and their commitment randomizers by name.
pub trait SecretLookup {
    /// Returns the secret value for `name`.
    fn secret(&self, name: &str) -> Option<&BigInt>;

    /// Returns the randomizer committed to for `name`.
    fn randomizer(&self, name: &str) -> Option<&BigInt>;
}

/// Resolves public bases (generators and statement values) by name.
pub trait BaseLookup {
    /// Returns the base for `name`.
    fn base(&self, name: &str) -> Option<&BigInt>;
}

/// Resolves proof responses by secret name.
pub trait ProofLookup {
    /// Returns the response for the secret `name`.
    fn proof_result(&self, name: &str) -> Option<&BigInt>;
}

/// A named collection of public bases.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseMap(BTreeMap<String, BigInt>);

impl BaseMap {
    /// Creates an empty base map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a named base.
    pub fn insert(&mut self, name: impl Into<String>, base: BigInt) {
        self.0.insert(name.into(), base);
    }

    /// Builder-style variant of [`BaseMap::insert`].
    pub fn with(mut self, name: impl Into<String>, base: BigInt) -> Self {
        self.insert(name, base);
        self
    }
}

impl BaseLookup for BaseMap {
    fn base(&self, name: &str) -> Option<&BigInt> {
        self.0.get(name)
    }
}

/// Combines several base lookups; the first lookup that knows a name wins.
pub struct BaseMerge<'a> {
    parts: Vec<&'a dyn BaseLookup>,
}

impl<'a> BaseMerge<'a> {
    /// Creates a merge over `parts`, searched in order.
    pub fn new(parts: Vec<&'a dyn BaseLookup>) -> Self {
        Self { parts }
    }
}

impl BaseLookup for BaseMerge<'_> {
    fn base(&self, name: &str) -> Option<&BigInt> {
        self.parts.iter().find_map(|part| part.base(name))
    }
}

/// Combines several secret lookups; the first lookup that knows a name wins.
///
/// Secrets and randomizers are resolved independently, so one part may supply the
/// secret values while another supplies the randomizers for the same names.
pub struct SecretMerge<'a> {
    parts: Vec<&'a dyn SecretLookup>,
}

impl<'a> SecretMerge<'a> {
    /// Creates a merge over `parts`, searched in order.
    pub fn new(parts: Vec<&'a dyn SecretLookup>) -> Self {
        Self { parts }
    }
}

impl SecretLookup for SecretMerge<'_> {
    fn secret(&self, name: &str) -> Option<&BigInt> {
        self.parts.iter().find_map(|part| part.secret(name))
    }

    fn randomizer(&self, name: &str) -> Option<&BigInt> {
        self.parts.iter().find_map(|part| part.randomizer(name))
    }
}

/// Combines several proof lookups; the first lookup that knows a name wins.
pub struct ProofMerge<'a> {
    parts: Vec<&'a dyn ProofLookup>,
}

impl<'a> ProofMerge<'a> {
    /// Creates a merge over `parts`, searched in order.
    pub fn new(parts: Vec<&'a dyn ProofLookup>) -> Self {
        Self { parts }
    }
}

impl ProofLookup for ProofMerge<'_> {
    fn proof_result(&self, name: &str) -> Option<&BigInt> {
        self.parts.iter().find_map(|part| part.proof_result(name))
    }
}
