use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::error::InvalidRange;
use crate::{field as bitfield, popcount, trailing};

impl<T> From<InvalidRange<T>> for PyErr {
    fn from(err: InvalidRange<T>) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Field of `length` bits starting at `start`
#[pyfunction]
#[pyo3(name = "extract32")]
fn py_extract32(value: u32, start: u32, length: u32) -> PyResult<u32> {
    Ok(bitfield::extract32(value, start, length)?)
}

#[pyfunction]
#[pyo3(name = "extract64")]
fn py_extract64(value: u64, start: u32, length: u32) -> PyResult<u64> {
    Ok(bitfield::extract64(value, start, length)?)
}

/// Field between bits `high` and `low` inclusive
#[pyfunction]
#[pyo3(name = "get_field32")]
fn py_get_field32(value: u32, high: u32, low: u32) -> PyResult<u32> {
    Ok(bitfield::get_field32(value, high, low)?)
}

#[pyfunction]
#[pyo3(name = "get_field64")]
fn py_get_field64(value: u64, high: u32, low: u32) -> PyResult<u64> {
    Ok(bitfield::get_field64(value, high, low)?)
}

/// Write `field` into `length` bits starting at `start`
#[pyfunction]
#[pyo3(name = "deposit32")]
fn py_deposit32(value: u32, start: u32, length: u32, field: u32) -> PyResult<u32> {
    Ok(bitfield::deposit32(value, start, length, field)?)
}

#[pyfunction]
#[pyo3(name = "deposit64")]
fn py_deposit64(value: u64, start: u32, length: u32, field: u64) -> PyResult<u64> {
    Ok(bitfield::deposit64(value, start, length, field)?)
}

/// Write `field` between bits `high` and `low` inclusive
#[pyfunction]
#[pyo3(name = "set_field32")]
fn py_set_field32(value: u32, high: u32, low: u32, field: u32) -> PyResult<u32> {
    Ok(bitfield::set_field32(value, high, low, field)?)
}

#[pyfunction]
#[pyo3(name = "set_field64")]
fn py_set_field64(value: u64, high: u32, low: u32, field: u64) -> PyResult<u64> {
    Ok(bitfield::set_field64(value, high, low, field)?)
}

#[pyfunction]
fn count_ones8(value: u8) -> u32 {
    popcount::count_ones8(value)
}

#[pyfunction]
fn count_ones16(value: u16) -> u32 {
    popcount::count_ones16(value)
}

#[pyfunction]
fn count_ones32(value: u32) -> u32 {
    popcount::count_ones32(value)
}

#[pyfunction]
fn count_ones64(value: u64) -> u32 {
    popcount::count_ones64(value)
}

#[pyfunction]
fn count_zeros8(value: u8) -> u32 {
    popcount::count_zeros8(value)
}

#[pyfunction]
fn count_zeros16(value: u16) -> u32 {
    popcount::count_zeros16(value)
}

#[pyfunction]
fn count_zeros32(value: u32) -> u32 {
    popcount::count_zeros32(value)
}

#[pyfunction]
fn count_zeros64(value: u64) -> u32 {
    popcount::count_zeros64(value)
}

#[pyfunction]
fn count_trailing_zeros32(value: u32) -> u32 {
    trailing::count_trailing_zeros32(value)
}

#[pyfunction]
fn count_trailing_zeros64(value: u64) -> u32 {
    trailing::count_trailing_zeros64(value)
}

#[pyfunction]
fn count_trailing_ones32(value: u32) -> u32 {
    trailing::count_trailing_ones32(value)
}

#[pyfunction]
fn count_trailing_ones64(value: u64) -> u32 {
    trailing::count_trailing_ones64(value)
}

/// Python extension module: installs as `bitops._bitops`
#[pymodule]
#[pyo3(name = "_bitops")]
fn bitops(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_extract32, m)?)?;
    m.add_function(wrap_pyfunction!(py_extract64, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_field32, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_field64, m)?)?;
    m.add_function(wrap_pyfunction!(py_deposit32, m)?)?;
    m.add_function(wrap_pyfunction!(py_deposit64, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_field32, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_field64, m)?)?;
    m.add_function(wrap_pyfunction!(count_ones8, m)?)?;
    m.add_function(wrap_pyfunction!(count_ones16, m)?)?;
    m.add_function(wrap_pyfunction!(count_ones32, m)?)?;
    m.add_function(wrap_pyfunction!(count_ones64, m)?)?;
    m.add_function(wrap_pyfunction!(count_zeros8, m)?)?;
    m.add_function(wrap_pyfunction!(count_zeros16, m)?)?;
    m.add_function(wrap_pyfunction!(count_zeros32, m)?)?;
    m.add_function(wrap_pyfunction!(count_zeros64, m)?)?;
    m.add_function(wrap_pyfunction!(count_trailing_zeros32, m)?)?;
    m.add_function(wrap_pyfunction!(count_trailing_zeros64, m)?)?;
    m.add_function(wrap_pyfunction!(count_trailing_ones32, m)?)?;
    m.add_function(wrap_pyfunction!(count_trailing_ones64, m)?)?;
    Ok(())
}
