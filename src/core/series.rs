use serde::{Deserialize, Serialize};

/// Values plotted against a Cartesian axis pair. `None` entries are gaps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianSeries {
    pub id: String,
    pub data: Vec<Option<f64>>,
}

impl CartesianSeries {
    #[must_use]
    pub fn new(id: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Builds a series without gaps.
    #[must_use]
    pub fn from_values(id: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(id, values.into_iter().map(Some).collect())
    }

    /// Finite values, skipping gaps.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().flatten().copied().filter(|v| v.is_finite())
    }
}

/// Pie slices carry one value, radar series carry one value per spoke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolarData {
    Single(f64),
    Many(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarSeries {
    pub id: String,
    pub data: PolarData,
}

impl PolarSeries {
    #[must_use]
    pub fn single(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            data: PolarData::Single(value),
        }
    }

    #[must_use]
    pub fn many(id: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            data: PolarData::Many(values),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        let values: &[f64] = match &self.data {
            PolarData::Single(value) => std::slice::from_ref(value),
            PolarData::Many(values) => values,
        };
        values.iter().copied().filter(|v| v.is_finite())
    }
}
