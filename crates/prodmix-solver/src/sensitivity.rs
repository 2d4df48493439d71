//! 產能敏感度分析
//!
//! 前端以滑桿調整資源上限時逐格重解；本模組一次算好整段區間

use prodmix_core::{MixError, MixScenario, ProductionPlan, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::solver::MixSolver;

/// 單一掃描點結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// 掃描時使用的資源上限
    pub capacity: Decimal,

    /// 該上限下的最優生產計劃
    pub plan: ProductionPlan,

    /// 該上限下的最優總利潤
    pub total_profit: Decimal,
}

/// 敏感度計算器
pub struct SensitivityCalculator;

impl SensitivityCalculator {
    /// 產能掃描：在 `[from, to]` 均勻取 `steps` 個上限逐一求解
    ///
    /// 逐點順序執行，各點之間互相獨立。
    /// 利潤對上限弱單調遞增（放寬約束不會變差）
    pub fn capacity_sweep(
        scenario: &MixScenario,
        from: Decimal,
        to: Decimal,
        steps: usize,
    ) -> Result<Vec<SensitivityPoint>> {
        // 產品參數先行驗證；掃描自帶上限區間，不使用情境裡的上限
        scenario.product_a.validate()?;
        scenario.product_b.validate()?;

        if from < Decimal::ZERO {
            return Err(MixError::NegativeCapacity(from.to_string()));
        }
        if to < from {
            return Err(MixError::CalculationError(format!(
                "掃描區間上界小於下界: [{}, {}]",
                from, to
            )));
        }
        if steps < 2 {
            return Err(MixError::CalculationError(format!(
                "掃描點數必須至少為 2: {}",
                steps
            )));
        }

        let step = (to - from) / Decimal::from((steps - 1) as u64);
        let mut points = Vec::with_capacity(steps);

        for i in 0..steps {
            // 末點固定取 to，避免步長累積的截斷誤差
            let capacity = if i == steps - 1 {
                to
            } else {
                from + step * Decimal::from(i as u64)
            };

            let mut swept = scenario.clone();
            swept.constraint.capacity = capacity;

            let result = MixSolver::solve(&swept);

            // 輸入已驗證，每個掃描點都應可行
            let (Some(plan), Some(total_profit)) = (result.plan, result.total_profit) else {
                return Err(MixError::InfeasibleOrUnsolved);
            };

            tracing::debug!("掃描點 上限 {} → 利潤 {}", capacity, total_profit);

            points.push(SensitivityPoint {
                capacity,
                plan,
                total_profit,
            });
        }

        Ok(points)
    }
}
