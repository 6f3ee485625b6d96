// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Tests for the PyO3 binding; run with `--features python`

#![cfg(feature = "python")]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use sensitive_filter_rust::sensitive_filter::SensitiveFilterRust;

/// Helper to create a Python config dict
fn create_test_config(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    let config = PyDict::new(py);
    config.set_item("patterns", vec!["你是傻逼", "你是傻逼啊", "vx"])?;
    config.set_item("stoppers", vec!["-"])?;
    config.set_item("match_mode", "longest")?;
    config.set_item("mask_strategy", "char")?;
    config.set_item("mask_char", "#")?;
    config.set_item("max_input_chars", 20)?;
    Ok(config)
}

fn build_filter<'py>(py: Python<'py>) -> PyResult<Bound<'py, SensitiveFilterRust>> {
    let config = create_test_config(py)?;
    Bound::new(py, SensitiveFilterRust::new(Some(&config))?)
}

#[test]
fn test_mask_uses_dict_config() {
    Python::initialize();

    Python::attach(|py| {
        let filter = build_filter(py).unwrap();
        let masked: String = filter
            .call_method1("mask", ("你是傻逼啊，v-x",))
            .unwrap()
            .extract()
            .unwrap();
        assert_eq!(masked, "#####，###");
    });
}

#[test]
fn test_find_all_returns_span_dicts() {
    Python::initialize();

    Python::attach(|py| {
        let filter = build_filter(py).unwrap();
        let result = filter.call_method1("find_all", ("加v-x",)).unwrap();
        let items: Vec<Bound<'_, PyDict>> = result.extract().unwrap();
        assert_eq!(items.len(), 1);

        let item = &items[0];
        let start: usize = item.get_item("start").unwrap().unwrap().extract().unwrap();
        let length: usize = item.get_item("length").unwrap().unwrap().extract().unwrap();
        let text: String = item.get_item("text").unwrap().unwrap().extract().unwrap();
        assert_eq!((start, length, text.as_str()), (1, 3, "v-x"));
        assert_eq!(item.len(), 3);
    });
}

#[test]
fn test_input_limit_raises_value_error() {
    Python::initialize();

    Python::attach(|py| {
        let filter = build_filter(py).unwrap();
        let long_text = "a".repeat(21);

        for method in ["mask", "contains", "find_all"] {
            let err = filter
                .call_method1(method, (long_text.as_str(),))
                .unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py), "{method}");
        }
    });
}

#[test]
fn test_insert_and_counts() {
    Python::initialize();

    Python::attach(|py| {
        let filter = build_filter(py).unwrap();
        assert_eq!(filter.borrow().pattern_count(), 3);
        assert_eq!(filter.borrow().stopper_count(), 1);

        let added: bool = filter
            .call_method1("insert", ("qq",))
            .unwrap()
            .extract()
            .unwrap();
        assert!(added);

        let err = filter.call_method1("insert", ("",)).unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));
    });
}
