//! 產品組合求解器
//!
//! 兩產品、單一資源約束的利潤最大化線性規劃。
//! 可行域是軸與斜邊圍成的三角形，最優解必落在頂點上，
//! 因此以封閉形式枚舉頂點取代一般化的單純形法，
//! 在本問題規模下結果完全相同且更易稽核

use prodmix_core::{MixError, MixScenario, ProductionPlan};
use rust_decimal::Decimal;

use crate::region::RegionCalculator;
use crate::SolveResult;

/// 產品組合求解器
pub struct MixSolver;

impl MixSolver {
    /// 求解利潤最大化生產組合
    ///
    /// 純函數：輸入都在情境結構裡，無副作用，永遠返回 `SolveResult`，
    /// 驗證失敗折疊為 `feasible = false` 而不向呼叫端拋出錯誤
    pub fn solve(scenario: &MixScenario) -> SolveResult {
        tracing::info!(
            "開始求解產品組合: {} / {}，{} 上限 {}",
            scenario.product_a.name,
            scenario.product_b.name,
            scenario.constraint.resource_id,
            scenario.constraint.capacity
        );

        if let Err(err) = scenario.validate() {
            tracing::debug!("輸入驗證失敗: {}", err);
            return SolveResult::infeasible(err.to_string());
        }

        let vertices = match RegionCalculator::vertices(
            scenario.product_a.resource_per_unit,
            scenario.product_b.resource_per_unit,
            scenario.constraint.capacity,
        ) {
            Ok(vertices) => vertices,
            Err(err) => return SolveResult::infeasible(err.to_string()),
        };

        // 依序評估頂點，只接受嚴格改善：
        // 平手時保留先出現的候選（原點 → A軸截距 → B軸截距）
        let mut best: Option<(ProductionPlan, Decimal)> = None;

        for plan in vertices {
            let profit = plan.total_profit(&scenario.product_a, &scenario.product_b);

            tracing::debug!(
                "候選頂點 ({}, {}) → 利潤 {}",
                plan.quantity_a,
                plan.quantity_b,
                profit
            );

            let improved = match &best {
                None => true,
                Some((_, best_profit)) => profit > *best_profit,
            };

            if improved {
                best = Some((plan, profit));
            }
        }

        let Some((plan, total_profit)) = best else {
            return SolveResult::infeasible(MixError::InfeasibleOrUnsolved.to_string());
        };

        // 防禦性檢查：選出的頂點必須滿足資源約束與非負性。
        // capacity/resource 截距乘回係數時末位可能向上進位，
        // 用量比較允許一個極小容差
        let usage = plan.resource_usage(&scenario.product_a, &scenario.product_b);
        let limit = scenario.constraint.capacity + feasibility_tolerance();

        if !plan.is_nonnegative() || usage > limit {
            tracing::debug!("頂點解未通過約束複核: 用量 {}", usage);
            return SolveResult::infeasible(MixError::InfeasibleOrUnsolved.to_string());
        }

        tracing::info!(
            "求解完成: ({}, {})，總利潤 {}",
            plan.quantity_a,
            plan.quantity_b,
            total_profit
        );

        SolveResult::feasible(plan, total_profit)
    }
}

/// 除法截斷容差（1e-18）
fn feasibility_tolerance() -> Decimal {
    Decimal::new(1, 18)
}
