//! NetCDF-backed profile source

use super::source::ProfileSource;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// A profile container opened from a NetCDF file
///
/// Missing-value handling: elements equal to the variable's `_FillValue`
/// attribute, and non-finite elements, read as `None`. The underlying
/// handle is closed when this struct is dropped.
pub struct NetcdfSource {
    path: PathBuf,
    file: netcdf::File,
}

impl NetcdfSource {
    /// Open a profile file read-only
    pub fn open(path: &Path) -> Result<Self> {
        let file = netcdf::open(path)
            .map_err(|e| Error::source_open(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    fn variable(&self, name: &str) -> Result<netcdf::Variable<'_>> {
        self.file
            .variable(name)
            .ok_or_else(|| Error::variable_not_found(name, self.path.display().to_string()))
    }

    /// Fill value declared by the variable, if any
    fn fill_value(var: &netcdf::Variable) -> Option<f64> {
        let attribute = var.attribute("_FillValue")?;
        match attribute.value().ok()? {
            netcdf::AttributeValue::Double(v) => Some(v),
            netcdf::AttributeValue::Float(v) => Some(f64::from(v)),
            netcdf::AttributeValue::Int(v) => Some(f64::from(v)),
            netcdf::AttributeValue::Short(v) => Some(f64::from(v)),
            netcdf::AttributeValue::Doubles(v) => v.first().copied(),
            netcdf::AttributeValue::Floats(v) => v.first().copied().map(f64::from),
            _ => None,
        }
    }

    /// Map raw values to the pipeline's present/missing representation
    fn mask(values: Vec<f64>, fill: Option<f64>) -> Vec<Option<f64>> {
        values
            .into_iter()
            .map(|v| {
                if !v.is_finite() {
                    return None;
                }
                match fill {
                    Some(f) if v == f => None,
                    _ => Some(v),
                }
            })
            .collect()
    }

    fn read_raw(&self, var: &netcdf::Variable, profile: Option<usize>) -> Result<Vec<f64>> {
        let read_error =
            |e: netcdf::Error| Error::netcdf(format!("Failed to read '{}'", var.name()), e);

        // Extent shape must match the variable's rank exactly: a leading
        // index for the profile dimension, full range for the rest.
        let values = match (profile, var.dimensions().len()) {
            (Some(index), 1) => var.get_values::<f64, _>((index,)).map_err(read_error)?,
            (Some(index), rank) if rank >= 2 => {
                var.get_values::<f64, _>((index, ..)).map_err(read_error)?
            }
            _ => var.get_values::<f64, _>(..).map_err(read_error)?,
        };
        Ok(values)
    }

    fn read_bytes(&self, var: &netcdf::Variable, profile: Option<usize>) -> Result<Vec<u8>> {
        let read_error =
            |e: netcdf::Error| Error::netcdf(format!("Failed to read '{}'", var.name()), e);

        let bytes = match (profile, var.dimensions().len()) {
            (Some(index), rank) if rank >= 2 => {
                var.get_values::<u8, _>((index, ..)).map_err(read_error)?
            }
            _ => var.get_values::<u8, _>(..).map_err(read_error)?,
        };
        Ok(bytes)
    }
}

impl ProfileSource for NetcdfSource {
    fn path(&self) -> &Path {
        &self.path
    }

    fn dimension_len(&self, name: &str) -> Option<usize> {
        self.file.dimension(name).map(|dim| dim.len())
    }

    fn variable_names(&self) -> Vec<String> {
        self.file.variables().map(|var| var.name()).collect()
    }

    fn variable_rank(&self, name: &str) -> Result<usize> {
        Ok(self.variable(name)?.dimensions().len())
    }

    fn read_numeric(&self, name: &str, profile: Option<usize>) -> Result<Vec<Option<f64>>> {
        let var = self.variable(name)?;
        let fill = Self::fill_value(&var);
        let values = self.read_raw(&var, profile)?;
        Ok(Self::mask(values, fill))
    }

    fn read_text(&self, name: &str, profile: Option<usize>) -> Result<String> {
        let var = self.variable(name)?;

        // Character arrays decode bytewise. Numeric identifier variables
        // reject the byte read with a conversion error, so fall back to
        // formatting the first present numeric element.
        match self.read_bytes(&var, profile) {
            Ok(bytes) => Ok(bytes
                .into_iter()
                .filter(|b| *b != 0)
                .map(char::from)
                .collect()),
            Err(_) => {
                let fill = Self::fill_value(&var);
                let cells = Self::mask(self.read_raw(&var, profile)?, fill);
                Ok(cells
                    .into_iter()
                    .flatten()
                    .next()
                    .map(format_numeric_id)
                    .unwrap_or_default())
            }
        }
    }
}

/// Format a numeric platform code without a trailing fraction
fn format_numeric_id(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
