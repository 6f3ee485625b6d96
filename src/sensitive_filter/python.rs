// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PyO3 bindings for the sensitive word filter

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::config::FilterConfig;
use super::detector::SensitiveFilter;
use super::error::FilterError;

fn to_py_err(err: FilterError) -> PyErr {
    match err {
        FilterError::Load { .. } => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Sensitive word filter exposed to Python
///
/// # Example (Python)
/// ```python
/// from sensitive_filter_rust import SensitiveFilterRust
///
/// f = SensitiveFilterRust({"patterns": ["vx", "微信"], "stoppers": ["@"]})
/// f.contains("加VX")          # True
/// f.find_all("微@信")         # [{"start": 0, "length": 3, "text": "微@信"}]
/// f.mask("请加微@信")          # "请加***"
/// ```
#[pyclass]
pub struct SensitiveFilterRust {
    filter: SensitiveFilter,
}

#[pymethods]
impl SensitiveFilterRust {
    /// Create a new filter
    ///
    /// # Configuration Keys
    /// * `patterns` (list[str]): Sensitive patterns
    /// * `pattern_files` (list[str]): Files with one pattern per line
    /// * `stoppers` (list[str]): Single-character fillers ("" = space)
    /// * `stopper_files` (list[str]): Files with one stopper per line
    /// * `use_default_stoppers` (bool): Preload common punctuation
    /// * `match_mode` (str): "first_terminal" or "longest"
    /// * `mask_strategy` (str): "char", "redact", "hash", "tokenize", "remove"
    /// * `mask_char` (str): Mask character (default: "*")
    /// * `redaction_text` (str): Text to use for redaction (default: "[REDACTED]")
    /// * `whitelist_patterns` (list[str]): Regexes for matches to let through
    /// * `max_input_chars` (int): Reject longer inputs
    #[new]
    #[pyo3(signature = (config_dict=None))]
    pub fn new(config_dict: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let config = match config_dict {
            Some(dict) => FilterConfig::from_py_dict(dict)?,
            None => FilterConfig::default(),
        };
        let filter = SensitiveFilter::with_config(config).map_err(to_py_err)?;
        Ok(Self { filter })
    }

    /// Insert one pattern; returns False if it was already present
    pub fn insert(&mut self, pattern: &str) -> PyResult<bool> {
        self.filter.insert(pattern).map_err(to_py_err)
    }

    /// Insert many patterns; returns the number newly added
    pub fn bulk_load(&mut self, patterns: Vec<String>) -> PyResult<usize> {
        let report = self
            .filter
            .bulk_load(patterns.iter().map(String::as_str))
            .map_err(to_py_err)?;
        Ok(report.loaded)
    }

    /// Add stoppers, one per string ("" = space, longer strings ignored)
    pub fn load_stoppers(&mut self, stoppers: Vec<String>) -> usize {
        self.filter
            .load_stopper_lines(stoppers.iter().map(String::as_str))
            .loaded
    }

    pub fn contains(&self, text: &str) -> PyResult<bool> {
        self.filter.check_input(text).map_err(to_py_err)?;
        Ok(self.filter.contains(text))
    }

    pub fn has_prefix(&self, text: &str) -> bool {
        self.filter.has_prefix(text)
    }

    /// Sensitive spans as a list of {"start", "length", "text"} dicts
    pub fn find_all(&self, py: Python<'_>, text: &str) -> PyResult<Py<PyAny>> {
        self.filter.check_input(text).map_err(to_py_err)?;

        let py_list = PyList::empty(py);
        for span in self.filter.find_all(text) {
            let item_dict = PyDict::new(py);
            item_dict.set_item("start", span.start)?;
            item_dict.set_item("length", span.len)?;
            item_dict.set_item("text", span.text)?;
            py_list.append(item_dict)?;
        }
        Ok(py_list.into_any().unbind())
    }

    pub fn mask(&self, text: &str) -> PyResult<String> {
        self.filter.check_input(text).map_err(to_py_err)?;
        Ok(self.filter.mask(text).into_owned())
    }

    #[getter]
    pub fn pattern_count(&self) -> usize {
        self.filter.pattern_count()
    }

    #[getter]
    pub fn stopper_count(&self) -> usize {
        self.filter.stopper_count()
    }
}
