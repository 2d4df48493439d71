//! Python 綁定實現
//!
//! 純量以 f64 跨越邊界，進入核心前轉為 Decimal；
//! NaN / 超出範圍的浮點數直接拋 ValueError，不可行性則是資料
//! （`PySolveResult.feasible == False`）而非例外

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use prodmix_core::{MixScenario, Product, ResourceConstraint};
use prodmix_solver::{MixSolver, RegionCalculator, SolveExport};

/// Python 求解結果
#[pyclass(name = "SolveResult")]
pub struct PySolveResult {
    #[pyo3(get)]
    pub feasible: bool,

    #[pyo3(get)]
    pub quantity_a: Option<f64>,

    #[pyo3(get)]
    pub quantity_b: Option<f64>,

    #[pyo3(get)]
    pub total_profit: Option<f64>,

    #[pyo3(get)]
    pub messages: Vec<String>,
}

/// Python 產品組合求解器
#[pyclass(name = "MixSolver")]
pub struct PyMixSolver;

#[pymethods]
impl PyMixSolver {
    #[new]
    fn new() -> Self {
        Self
    }

    /// 求解利潤最大化生產組合
    #[pyo3(signature = (profit_a, resource_a, profit_b, resource_b, capacity, name_a="Product A", name_b="Product B"))]
    fn solve(
        &self,
        profit_a: f64,
        resource_a: f64,
        profit_b: f64,
        resource_b: f64,
        capacity: f64,
        name_a: &str,
        name_b: &str,
    ) -> PyResult<PySolveResult> {
        let scenario = build_scenario(
            profit_a, resource_a, profit_b, resource_b, capacity, name_a, name_b,
        )?;

        let result = MixSolver::solve(&scenario);

        Ok(PySolveResult {
            feasible: result.feasible,
            quantity_a: result.plan.as_ref().map(|p| decimal_to_f64(p.quantity_a)),
            quantity_b: result.plan.as_ref().map(|p| decimal_to_f64(p.quantity_b)),
            total_profit: result.total_profit.map(decimal_to_f64),
            messages: result.messages,
        })
    }

    /// 邊界線取樣點，供前端畫線並向 x 軸填色
    #[pyo3(signature = (resource_a, resource_b, capacity, x_max, samples=400))]
    fn boundary_points(
        &self,
        resource_a: f64,
        resource_b: f64,
        capacity: f64,
        x_max: f64,
        samples: usize,
    ) -> PyResult<Vec<(f64, f64)>> {
        let points = RegionCalculator::boundary_points_with_samples(
            to_decimal("resource_a", resource_a)?,
            to_decimal("resource_b", resource_b)?,
            to_decimal("capacity", capacity)?,
            to_decimal("x_max", x_max)?,
            samples,
        )
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(points
            .into_iter()
            .map(|p| (decimal_to_f64(p.x), decimal_to_f64(p.y)))
            .collect())
    }

    /// 建議的取樣上界（A軸截距的 1.2 倍）
    fn suggested_x_max(&self, resource_a: f64, capacity: f64) -> PyResult<f64> {
        let x_max = RegionCalculator::suggested_x_max(
            to_decimal("resource_a", resource_a)?,
            to_decimal("capacity", capacity)?,
        )
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(decimal_to_f64(x_max))
    }

    /// 求解並匯出 JSON 摘要（前端的下載連結內容）
    #[pyo3(signature = (profit_a, resource_a, profit_b, resource_b, capacity, name_a="Product A", name_b="Product B", scenario_name=""))]
    fn export_json(
        &self,
        profit_a: f64,
        resource_a: f64,
        profit_b: f64,
        resource_b: f64,
        capacity: f64,
        name_a: &str,
        name_b: &str,
        scenario_name: &str,
    ) -> PyResult<String> {
        let scenario = build_scenario(
            profit_a, resource_a, profit_b, resource_b, capacity, name_a, name_b,
        )?
        .with_name(scenario_name.to_string());

        let result = MixSolver::solve(&scenario);

        let export = SolveExport::from_solve(&scenario, &result)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        export
            .to_json()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

/// 組裝求解情境（內部使用）
fn build_scenario(
    profit_a: f64,
    resource_a: f64,
    profit_b: f64,
    resource_b: f64,
    capacity: f64,
    name_a: &str,
    name_b: &str,
) -> PyResult<MixScenario> {
    Ok(MixScenario::new(
        Product::new(
            name_a.to_string(),
            to_decimal("profit_a", profit_a)?,
            to_decimal("resource_a", resource_a)?,
        ),
        Product::new(
            name_b.to_string(),
            to_decimal("profit_b", profit_b)?,
            to_decimal("resource_b", resource_b)?,
        ),
        ResourceConstraint::new("MACHINE-HOURS".to_string(), to_decimal("capacity", capacity)?),
    ))
}

/// f64 → Decimal，NaN 或超出範圍時拋 ValueError
fn to_decimal(field: &str, value: f64) -> PyResult<Decimal> {
    Decimal::try_from(value).map_err(|_| {
        PyValueError::new_err(format!("Invalid numeric value for {}: {}", field, value))
    })
}

/// Decimal → f64（輸出端，精度足夠繪圖與顯示）
fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_rejects_nan() {
        assert!(to_decimal("capacity", f64::NAN).is_err());
        assert!(to_decimal("capacity", f64::INFINITY).is_err());
    }

    #[test]
    fn test_to_decimal_accepts_plain_values() {
        assert_eq!(to_decimal("capacity", 100.0).unwrap(), Decimal::from(100));
        assert_eq!(to_decimal("capacity", 0.0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_build_scenario_round_trip() {
        let scenario =
            build_scenario(7000.0, 2.0, 8000.0, 3.0, 100.0, "Blender", "Toaster").unwrap();

        assert_eq!(scenario.product_a.name, "Blender");
        assert_eq!(scenario.product_b.unit_profit, Decimal::from(8000));
        assert_eq!(scenario.constraint.capacity, Decimal::from(100));
    }
}
