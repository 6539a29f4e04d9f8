use serde::Deserialize;

/// The config file. Everything in it is optional, and an empty file is valid.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct Config {
    pub(crate) flags: Option<FlagConfig>,
}

/// Defaults for the command-line flags. Arguments always take priority.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub(crate) struct FlagConfig {
    /// One of `b`, `k` or `m`.
    pub(crate) units: Option<String>,
    pub(crate) verbose: Option<bool>,
    pub(crate) no_locale: Option<bool>,
}
