use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// Errors raised while building a [`TenantConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TenantConfigError {
    #[error("tenant roster is empty")]
    EmptyRoster,

    #[error("tenant name must not be blank")]
    BlankName,

    #[error("tenant '{0}' appears more than once in the roster")]
    DuplicateTenant(String),

    #[error("monthly rent for '{0}' must be positive")]
    ZeroRent(String),
}

/// Validated tenant identifier (the tenant's display name, trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(name: impl AsRef<str>) -> Result<Self, TenantConfigError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TenantConfigError::BlankName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One roster entry: who the tenant is and what they pay each month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub id: TenantId,
    /// Fixed monthly rent in whole currency units.
    pub rent: u32,
}

impl Tenant {
    pub fn new(
        name: impl AsRef<str>,
        rent: u32,
    ) -> Result<Self, TenantConfigError> {
        let id = TenantId::new(name)?;
        if rent == 0 {
            return Err(TenantConfigError::ZeroRent(id.0));
        }
        Ok(Self { id, rent })
    }
}

/// Ordered, immutable tenant roster.
///
/// The order of the roster is the order of the wizard's per-tenant steps
/// and of the display cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantConfig {
    tenants: Vec<Tenant>,
}

impl TenantConfig {
    /// Builds a roster, rejecting empty rosters, duplicates and zero rents.
    pub fn new(tenants: Vec<Tenant>) -> Result<Self, TenantConfigError> {
        if tenants.is_empty() {
            return Err(TenantConfigError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for tenant in &tenants {
            if tenant.rent == 0 {
                return Err(TenantConfigError::ZeroRent(tenant.id.to_string()));
            }
            if !seen.insert(&tenant.id) {
                return Err(TenantConfigError::DuplicateTenant(tenant.id.to_string()));
            }
        }

        Ok(Self { tenants })
    }

    /// Convenience constructor from `(name, rent)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, TenantConfigError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let tenants = pairs
            .into_iter()
            .map(|(name, rent)| Tenant::new(name, rent))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tenants)
    }

    pub fn tenants(&self) -> &[Tenant] {
        &self.tenants
    }

    pub fn ids(&self) -> impl Iterator<Item = &TenantId> {
        self.tenants.iter().map(|t| &t.id)
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&Tenant> {
        self.tenants.get(index)
    }

    pub fn find(
        &self,
        id: &TenantId,
    ) -> Option<&Tenant> {
        self.tenants.iter().find(|t| &t.id == id)
    }

    pub fn position(
        &self,
        id: &TenantId,
    ) -> Option<usize> {
        self.tenants.iter().position(|t| &t.id == id)
    }

    pub fn contains(
        &self,
        id: &TenantId,
    ) -> bool {
        self.position(id).is_some()
    }

    pub fn rent(
        &self,
        id: &TenantId,
    ) -> Option<u32> {
        self.find(id).map(|t| t.rent)
    }
}
