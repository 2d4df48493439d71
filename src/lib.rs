//! # Prodmix
//!
//! 產品組合優化決策支援核心：兩產品、單一資源約束的
//! 利潤最大化線性規劃，與可行域繪圖所需的幾何計算

// Re-export 主要類型
pub use prodmix_core::{
    MixError, MixScenario, Product, ProductionPlan, ResourceConstraint, Result,
};
pub use prodmix_solver::{
    BoundaryPoint, MixSolver, RegionCalculator, SensitivityCalculator, SensitivityPoint,
    SolveExport, SolveResult,
};
