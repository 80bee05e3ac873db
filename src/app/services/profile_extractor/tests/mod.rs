//! Tests for the profile extraction pipeline
//!
//! Unit tests for each component plus pipeline tests against an
//! in-memory mock source, so structural variants (single- vs.
//! multi-profile, absent optional variables, masked values) can be
//! exercised without real NetCDF files.

pub mod emitter_tests;
pub mod filter_tests;
pub mod values_tests;

use crate::app::services::netcdf_source::ProfileSource;
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One mock variable, shaped like the layouts found in real files
#[derive(Debug, Clone)]
pub enum MockVariable {
    /// Rank-0 numeric scalar
    Scalar(Option<f64>),
    /// Rank-1 numeric sequence: levels in a single-profile file, or
    /// per-profile scalars in a multi-profile file
    Array(Vec<Option<f64>>),
    /// Rank-2 numeric: one level sequence per profile
    Profiles(Vec<Vec<Option<f64>>>),
    /// Character text without a profile dimension
    Text(String),
    /// Character text per profile
    ProfileText(Vec<String>),
}

/// In-memory profile source for pipeline tests
#[derive(Debug, Default)]
pub struct MockSource {
    path: PathBuf,
    profile_dim: Option<usize>,
    variables: HashMap<String, MockVariable>,
}

impl MockSource {
    pub fn new(file_name: &str) -> Self {
        Self {
            path: PathBuf::from(file_name),
            profile_dim: None,
            variables: HashMap::new(),
        }
    }

    /// Declare the multi-profile dimension
    pub fn with_profiles(mut self, count: usize) -> Self {
        self.profile_dim = Some(count);
        self
    }

    pub fn with(mut self, name: &str, variable: MockVariable) -> Self {
        self.variables.insert(name.to_string(), variable);
        self
    }

    fn get(&self, name: &str) -> Result<&MockVariable> {
        self.variables
            .get(name)
            .ok_or_else(|| Error::variable_not_found(name, self.path.display().to_string()))
    }
}

impl ProfileSource for MockSource {
    fn path(&self) -> &Path {
        &self.path
    }

    fn dimension_len(&self, name: &str) -> Option<usize> {
        if name == crate::constants::PROFILE_DIMENSION {
            self.profile_dim
        } else {
            None
        }
    }

    fn variable_names(&self) -> Vec<String> {
        self.variables.keys().cloned().collect()
    }

    fn variable_rank(&self, name: &str) -> Result<usize> {
        Ok(match self.get(name)? {
            MockVariable::Scalar(_) => 0,
            MockVariable::Array(_) | MockVariable::Text(_) => 1,
            MockVariable::Profiles(_) | MockVariable::ProfileText(_) => 2,
        })
    }

    fn read_numeric(&self, name: &str, profile: Option<usize>) -> Result<Vec<Option<f64>>> {
        match (self.get(name)?, profile) {
            (MockVariable::Scalar(v), _) => Ok(vec![*v]),
            (MockVariable::Array(cells), Some(index)) => {
                Ok(vec![cells.get(index).copied().flatten()])
            }
            (MockVariable::Array(cells), None) => Ok(cells.clone()),
            (MockVariable::Profiles(rows), Some(index)) => {
                Ok(rows.get(index).cloned().unwrap_or_default())
            }
            (MockVariable::Profiles(rows), None) => {
                Ok(rows.iter().flatten().copied().collect())
            }
            (MockVariable::Text(_) | MockVariable::ProfileText(_), _) => Err(
                Error::data_validation(format!("Variable '{}' is not numeric", name)),
            ),
        }
    }

    fn read_text(&self, name: &str, profile: Option<usize>) -> Result<String> {
        match (self.get(name)?, profile) {
            (MockVariable::Text(text), _) => Ok(text.clone()),
            (MockVariable::ProfileText(texts), Some(index)) => {
                Ok(texts.get(index).cloned().unwrap_or_default())
            }
            (MockVariable::ProfileText(texts), None) => Ok(texts.concat()),
            (numeric, _) => {
                // Numeric identifier variables format their first present
                // element, like the production source does.
                let cells = match numeric {
                    MockVariable::Scalar(v) => vec![*v],
                    MockVariable::Array(cells) => cells.clone(),
                    MockVariable::Profiles(rows) => rows.iter().flatten().copied().collect(),
                    _ => unreachable!(),
                };
                Ok(cells
                    .into_iter()
                    .flatten()
                    .next()
                    .map(|v| format!("{}", v as i64))
                    .unwrap_or_default())
            }
        }
    }
}

/// Level sequence shorthand: finite values present, NaN missing
pub fn levels(values: &[f64]) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|v| if v.is_finite() { Some(*v) } else { None })
        .collect()
}

/// A complete, valid multi-profile mock with one Indian Ocean profile
pub fn indian_ocean_source() -> MockSource {
    MockSource::new("nodc_D2902746_142.nc")
        .with_profiles(1)
        .with(
            "REFERENCE_DATE_TIME",
            MockVariable::Text("19500101000000".to_string()),
        )
        .with(
            "PLATFORM_NUMBER",
            MockVariable::ProfileText(vec!["2902746 ".to_string()]),
        )
        // 2021-06-16 00:00:00 UTC
        .with("JULD", MockVariable::Array(vec![Some(26099.0)]))
        .with("LATITUDE", MockVariable::Array(vec![Some(-10.0)]))
        .with("LONGITUDE", MockVariable::Array(vec![Some(75.0)]))
        .with(
            "PRES",
            MockVariable::Profiles(vec![levels(&[5.0, 10.0, 15.0])]),
        )
        .with(
            "TEMP",
            MockVariable::Profiles(vec![levels(&[28.0, 27.5, 27.0])]),
        )
        .with(
            "PSAL",
            MockVariable::Profiles(vec![levels(&[35.0, 35.1, 35.2])]),
        )
}
