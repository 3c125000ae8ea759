use super::{Asset, PreconditionViolation};

/// An ordered collection of candidate assets.
///
/// Order carries no meaning for the optimum itself, but it determines which
/// optimal subset is reported when several subsets tie. Duplicate names are
/// not removed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Catalog(Vec<Asset>);

impl Catalog {
    /// Wrap an ordered list of assets
    pub fn new(assets: Vec<Asset>) -> Self {
        Self(assets)
    }

    /// The assets, in catalog order
    pub fn assets(&self) -> &[Asset] {
        &self.0
    }

    /// Iterate over the assets in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
        self.0.iter()
    }

    /// The number of assets
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog has no assets
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The cost of buying every asset in the catalog
    pub fn total_price(&self) -> f64 {
        self.0.iter().fold(0.0, |acc, asset| acc + asset.price())
    }

    /// Report the first asset (in catalog order) that violates the optimizer precondition
    pub fn validate(&self) -> Result<(), PreconditionViolation> {
        for (index, asset) in self.0.iter().enumerate() {
            asset
                .validate()
                .map_err(|kind| PreconditionViolation {
                    index,
                    name: asset.name().to_owned(),
                    kind,
                })?;
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = Asset;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<Asset>> for Catalog {
    fn from(value: Vec<Asset>) -> Self {
        Self(value)
    }
}

impl FromIterator<Asset> for Catalog {
    fn from_iter<I: IntoIterator<Item = Asset>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
