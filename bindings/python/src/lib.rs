//! Python bindings for fastCosine, exposed as the `cos_module` extension.

#![allow(non_snake_case)]

use num_traits::Float;
use numpy::ndarray::ArrayD;
use numpy::{Element, IntoPyArray, PyArrayDyn, PyArrayMethods, PyUntypedArray};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyList, PyString, PyTuple};

use ::fastCosine::prelude::{
    Array, Cosine, CosineError, CosineOutput, Dynamic, Labeled, LabeledMap, Scalar, Value,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a CosineError to a PyErr
///
/// Shape errors surface as `TypeError`, everything else as `ValueError`.
fn to_py_error(e: CosineError) -> PyErr {
    match e {
        CosineError::InvalidInputKind(_) => PyTypeError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

/// Convert an arbitrary Python object into a dynamic value.
///
/// Containers are converted one level deep; their elements go through
/// [`to_element`].
fn to_value(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        let entries = dict
            .iter()
            .map(|(k, v)| Ok((to_element(&k)?, to_element(&v)?)))
            .collect::<PyResult<Vec<_>>>()?;
        return Ok(Value::Map(entries));
    }
    if let Ok(list) = obj.downcast::<PyList>() {
        let items = list
            .iter()
            .map(|item| to_element(&item))
            .collect::<PyResult<Vec<_>>>()?;
        return Ok(Value::List(items));
    }
    if let Ok(tuple) = obj.downcast::<PyTuple>() {
        let items = tuple
            .iter()
            .map(|item| to_element(&item))
            .collect::<PyResult<Vec<_>>>()?;
        return Ok(Value::List(items));
    }
    to_element(obj)
}

/// Convert a container element. Inner containers are never walked: they
/// become empty placeholders so validation still sees a nested structure.
fn to_element(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    if obj.is_none() {
        return Ok(Value::Null);
    }
    // bool is a subclass of int in Python; check it first
    if obj.is_instance_of::<PyBool>() {
        return Ok(Value::Bool(obj.extract()?));
    }
    if obj.is_instance_of::<PyInt>() {
        return Ok(match obj.extract::<i64>() {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::Float(obj.extract::<f64>()?),
        });
    }
    if let Ok(f) = obj.downcast::<PyFloat>() {
        return Ok(Value::Float(f.value()));
    }
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(Value::Text(s.to_cow()?.into_owned()));
    }
    if obj.is_instance_of::<PyDict>() {
        return Ok(Value::Map(Vec::new()));
    }
    // Checked before __float__, which a one-element array also implements
    if obj.is_instance_of::<PyList>()
        || obj.is_instance_of::<PyTuple>()
        || obj.is_instance_of::<PyUntypedArray>()
    {
        return Ok(Value::List(Vec::new()));
    }
    // numpy scalars and anything else implementing __float__
    if let Ok(f) = obj.extract::<f64>() {
        return Ok(Value::Float(f));
    }

    Ok(Value::Other(obj.get_type().name()?.to_string()))
}

/// Evaluate a numpy array of any dimension, keeping its shape and dtype.
fn cos_ndarray<'py, T>(
    py: Python<'py>,
    array: &Bound<'py, PyArrayDyn<T>>,
) -> PyResult<Bound<'py, PyArrayDyn<T>>>
where
    T: Element + Float + Send + Sync,
{
    let readonly = array.readonly();
    let view = readonly.as_array();
    let shape = view.raw_dim();

    // Logical (row-major) order, whatever the memory layout
    let values: Vec<T> = view.iter().copied().collect();

    let model = Cosine::<T>::new()
        .adapter(Array)
        .build()
        .map_err(to_py_error)?;
    let result = py
        .allow_threads(|| model.evaluate(&values))
        .map_err(to_py_error)?;

    let out = ArrayD::from_shape_vec(shape, result)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(out.into_pyarray(py))
}

/// Convert an evaluation result back into the matching Python container.
fn output_to_py<'py>(py: Python<'py>, out: CosineOutput<f64>) -> PyResult<Bound<'py, PyAny>> {
    match out {
        CosineOutput::Scalar(v) => Ok(PyFloat::new(py, v).into_any()),
        CosineOutput::Labeled(map) => Ok(map.into_pyobject(py)?.into_any()),
        CosineOutput::Array(values) => Ok(PyList::new(py, values)?.into_any()),
    }
}

// ============================================================================
// Python Functions
// ============================================================================

/// Evaluate the cosine of a single number.
///
/// Parameters
/// ----------
/// value : float
///     Angle in radians. Integers are accepted; ``bool`` is not.
///
/// Returns
/// -------
/// float
#[pyfunction]
fn cos_func(value: &Bound<'_, PyAny>) -> PyResult<f64> {
    let value = to_value(value)?;
    Cosine::<f64>::new()
        .adapter(Scalar)
        .build()
        .and_then(|model| model.evaluate_value(&value))
        .map_err(to_py_error)
}

/// Evaluate the cosine on a numpy array.
///
/// Parameters
/// ----------
/// array : numpy.ndarray
///     float64 or float32 array of any shape.
///
/// Returns
/// -------
/// numpy.ndarray
///     New array with the same shape and dtype.
#[pyfunction]
fn cos_func_np<'py>(py: Python<'py>, array: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    if let Ok(a) = array.downcast::<PyArrayDyn<f64>>() {
        return Ok(cos_ndarray(py, a)?.into_any());
    }
    if let Ok(a) = array.downcast::<PyArrayDyn<f32>>() {
        return Ok(cos_ndarray(py, a)?.into_any());
    }
    let kind = if array.is_instance_of::<PyUntypedArray>() {
        "numpy array of unsupported dtype".to_string()
    } else {
        format!("object of type {}", array.get_type().name()?)
    };
    Err(PyTypeError::new_err(format!(
        "cos_func_np expects a float64 or float32 numpy array, got {kind}"
    )))
}

/// Evaluate the cosine on a dictionary.
///
/// Parameters
/// ----------
/// mapping : dict[str, float]
///     Labeled angles in radians.
///
/// Returns
/// -------
/// dict[str, float]
///     New dictionary with the same keys.
#[pyfunction]
fn cos_func_dict(mapping: &Bound<'_, PyDict>) -> PyResult<LabeledMap<f64>> {
    let value = to_value(mapping.as_any())?;
    Cosine::<f64>::new()
        .adapter(Labeled)
        .build()
        .and_then(|model| model.evaluate_value(&value))
        .map_err(to_py_error)
}

/// Evaluate the cosine of a number, a dict, a sequence or a numpy array.
///
/// The result has the shape of the input: float, dict, list or ndarray.
#[pyfunction]
fn cos<'py>(py: Python<'py>, value: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    if value.is_instance_of::<PyUntypedArray>() {
        return cos_func_np(py, value);
    }

    let value = to_value(value)?;
    let model = Cosine::<f64>::new()
        .adapter(Dynamic)
        .build()
        .map_err(to_py_error)?;
    let out = model.evaluate_value(&value).map_err(to_py_error)?;

    output_to_py(py, out)
}

// ============================================================================
// Module Registration
// ============================================================================

/// Collection of cosine functions
#[pymodule]
fn cos_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(cos_func, m)?)?;
    m.add_function(wrap_pyfunction!(cos_func_np, m)?)?;
    m.add_function(wrap_pyfunction!(cos_func_dict, m)?)?;
    m.add_function(wrap_pyfunction!(cos, m)?)?;
    Ok(())
}
