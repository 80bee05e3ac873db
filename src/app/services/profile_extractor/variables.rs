//! Variable name resolution
//!
//! Real Argo archives disagree on variable naming: adjusted vs. raw
//! measurement variants, serial-number fallbacks for the platform id, and
//! inconsistent casing. Resolution happens once per file: each canonical
//! role is mapped to the first of its configured aliases that matches a
//! variable actually present, case-insensitively.

use crate::config::VariableConfig;

/// Resolve one role against the variables present in a source
///
/// Aliases are tried in preference order; the first case-insensitive
/// match wins. Returns the matched variable's actual name (preserving the
/// file's casing) or `None` if no alias is present.
pub fn resolve_variable(aliases: &[String], available: &[String]) -> Option<String> {
    aliases.iter().find_map(|alias| {
        available
            .iter()
            .find(|name| name.eq_ignore_ascii_case(alias))
            .cloned()
    })
}

/// Resolved variable names for every role, computed once per file
///
/// Required roles reject the whole file when unresolved; optional roles
/// (temperature, salinity) yield all-missing level sequences instead.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableMap {
    pub pressure: String,
    pub temperature: Option<String>,
    pub salinity: Option<String>,
    pub platform_id: String,
    pub time_offset: String,
    pub reference_time: String,
    pub latitude: String,
    pub longitude: String,
}

impl VariableMap {
    /// Resolve all roles against the available variable names
    ///
    /// On failure, returns the canonical names of every required role
    /// that could not be resolved, for file-level reporting.
    pub fn resolve(
        available: &[String],
        config: &VariableConfig,
    ) -> std::result::Result<Self, Vec<String>> {
        let mut missing = Vec::new();

        let mut require = |role: &'static str, aliases: &[String]| -> String {
            match resolve_variable(aliases, available) {
                Some(name) => name,
                None => {
                    missing.push(role.to_string());
                    String::new()
                }
            }
        };

        let pressure = require("pressure", &config.pressure);
        let platform_id = require("platform_id", &config.platform_id);
        let time_offset = require("time_offset", &config.time_offset);
        let reference_time = require("reference_time", &config.reference_time);
        let latitude = require("latitude", &config.latitude);
        let longitude = require("longitude", &config.longitude);

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self {
            pressure,
            temperature: resolve_variable(&config.temperature, available),
            salinity: resolve_variable(&config.salinity, available),
            platform_id,
            time_offset,
            reference_time,
            latitude,
            longitude,
        })
    }
}
