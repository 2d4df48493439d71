//! # Prodmix Solver
//!
//! 產品組合線性規劃求解與可行域計算

pub mod export;
pub mod region;
pub mod sensitivity;
pub mod solver;

// Re-export 主要類型
pub use export::SolveExport;
pub use region::{BoundaryPoint, RegionCalculator};
pub use sensitivity::{SensitivityCalculator, SensitivityPoint};
pub use solver::MixSolver;

use prodmix_core::ProductionPlan;
use rust_decimal::Decimal;

/// 求解結果
///
/// 每次求解建構一次，之後不再變動；求解器永遠返回本結構，
/// 驗證失敗以 `feasible = false` 表達而不拋出錯誤
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// 是否可行
    pub feasible: bool,

    /// 最優生產計劃
    pub plan: Option<ProductionPlan>,

    /// 最優總利潤
    pub total_profit: Option<Decimal>,

    /// 求解信息（不可行時的原因說明）
    pub messages: Vec<String>,
}

impl SolveResult {
    /// 創建可行的求解結果
    pub fn feasible(plan: ProductionPlan, total_profit: Decimal) -> Self {
        Self {
            feasible: true,
            plan: Some(plan),
            total_profit: Some(total_profit),
            messages: Vec::new(),
        }
    }

    /// 創建不可行的求解結果
    pub fn infeasible(message: String) -> Self {
        Self {
            feasible: false,
            plan: None,
            total_profit: None,
            messages: vec![message],
        }
    }

    /// 添加求解信息
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);
    }
}
