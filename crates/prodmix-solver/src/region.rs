//! 可行域計算
//!
//! 推導資源約束的邊界線取樣點與可行域頂點集，供繪圖前端使用

use prodmix_core::{MixError, ProductionPlan, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 預設邊界取樣點數
pub const DEFAULT_SAMPLE_COUNT: usize = 400;

/// 邊界線取樣點
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryPoint {
    pub x: Decimal,
    pub y: Decimal,
}

/// 可行域計算器
pub struct RegionCalculator;

impl RegionCalculator {
    /// 可行域頂點集
    ///
    /// 可行域為軸與斜邊圍成的三角形，頂點依序為：
    /// 原點、A軸截距 `(capacity/resource_a, 0)`、B軸截距 `(0, capacity/resource_b)`。
    /// 線性目標函數的最優解必落在其中一個頂點上
    pub fn vertices(
        resource_a: Decimal,
        resource_b: Decimal,
        capacity: Decimal,
    ) -> Result<Vec<ProductionPlan>> {
        Self::validate_inputs(resource_a, resource_b, capacity)?;

        Ok(vec![
            ProductionPlan::origin(),
            ProductionPlan::new(capacity / resource_a, Decimal::ZERO),
            ProductionPlan::new(Decimal::ZERO, capacity / resource_b),
        ])
    }

    /// 邊界線取樣（預設點數）
    pub fn boundary_points(
        resource_a: Decimal,
        resource_b: Decimal,
        capacity: Decimal,
        x_max: Decimal,
    ) -> Result<Vec<BoundaryPoint>> {
        Self::boundary_points_with_samples(
            resource_a,
            resource_b,
            capacity,
            x_max,
            DEFAULT_SAMPLE_COUNT,
        )
    }

    /// 邊界線取樣（指定點數）
    ///
    /// 對 `x ∈ [0, x_max]` 均勻取樣
    /// `y = (capacity - resource_a*x) / resource_b`，並將負值夾至 0。
    /// 結果為急切計算的有限序列，按 `x` 遞增排列，
    /// 適合畫邊界線並向 x 軸填色表示可行域
    pub fn boundary_points_with_samples(
        resource_a: Decimal,
        resource_b: Decimal,
        capacity: Decimal,
        x_max: Decimal,
        samples: usize,
    ) -> Result<Vec<BoundaryPoint>> {
        Self::validate_inputs(resource_a, resource_b, capacity)?;

        if x_max < Decimal::ZERO {
            return Err(MixError::CalculationError(format!(
                "取樣上界不可為負值: {}",
                x_max
            )));
        }
        if samples < 2 {
            return Err(MixError::CalculationError(format!(
                "取樣點數必須至少為 2: {}",
                samples
            )));
        }

        // 上界為零時可行域退化，只取原點一個樣本
        if x_max == Decimal::ZERO {
            let y = (capacity / resource_b).max(Decimal::ZERO);
            return Ok(vec![BoundaryPoint {
                x: Decimal::ZERO,
                y,
            }]);
        }

        let step = x_max / Decimal::from((samples - 1) as u64);
        let mut points = Vec::with_capacity(samples);

        for i in 0..samples {
            // 末點固定取 x_max，避免步長累積的截斷誤差
            let x = if i == samples - 1 {
                x_max
            } else {
                step * Decimal::from(i as u64)
            };

            let y = (capacity - resource_a * x) / resource_b;

            points.push(BoundaryPoint {
                x,
                y: y.max(Decimal::ZERO),
            });
        }

        Ok(points)
    }

    /// 建議的取樣上界：A軸截距的 1.2 倍
    ///
    /// 讓整個可行三角形與最優頂點落在視窗內
    pub fn suggested_x_max(resource_a: Decimal, capacity: Decimal) -> Result<Decimal> {
        if resource_a <= Decimal::ZERO {
            return Err(MixError::InvalidResourceCoefficient(format!(
                "resource_a: {}",
                resource_a
            )));
        }
        if capacity < Decimal::ZERO {
            return Err(MixError::NegativeCapacity(capacity.to_string()));
        }

        Ok(capacity / resource_a * Decimal::new(12, 1))
    }

    /// 驗證原始輸入純量（繪圖端常以純量呼叫，不經過情境結構）
    fn validate_inputs(
        resource_a: Decimal,
        resource_b: Decimal,
        capacity: Decimal,
    ) -> Result<()> {
        if resource_a <= Decimal::ZERO {
            return Err(MixError::InvalidResourceCoefficient(format!(
                "resource_a: {}",
                resource_a
            )));
        }
        if resource_b <= Decimal::ZERO {
            return Err(MixError::InvalidResourceCoefficient(format!(
                "resource_b: {}",
                resource_b
            )));
        }
        if capacity < Decimal::ZERO {
            return Err(MixError::NegativeCapacity(capacity.to_string()));
        }
        Ok(())
    }
}
