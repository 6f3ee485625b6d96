// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Sensitive word filtering with an optional Python binding
// Built with PyO3 when the `python` feature is enabled

pub mod sensitive_filter;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module: sensitive_filter_rust
///
/// # Examples
///
/// ```python
/// from sensitive_filter_rust import SensitiveFilterRust
///
/// f = SensitiveFilterRust({"patterns": ["shit"], "use_default_stoppers": True})
/// print(f.mask("SH.it happens"))  # "***** happens"
/// ```
#[cfg(feature = "python")]
#[pymodule]
fn sensitive_filter_rust(m: &Bound<'_, pyo3::types::PyModule>) -> PyResult<()> {
    m.add_class::<sensitive_filter::SensitiveFilterRust>()?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add(
        "__doc__",
        "Trie-based sensitive word detection and masking",
    )?;

    Ok(())
}
