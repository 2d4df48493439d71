//! # Prodmix FFI
//!
//! Python 綁定層（PyO3），供儀表板前端呼叫求解核心

use pyo3::prelude::*;

pub mod python;

/// Python 模組註冊
#[pymodule]
fn prodmix_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMixSolver>()?;
    m.add_class::<python::PySolveResult>()?;
    Ok(())
}
