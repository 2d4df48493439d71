//! # Prodmix Core
//!
//! 核心資料模型與類型定義

pub mod constraint;
pub mod plan;
pub mod product;
pub mod scenario;

// Re-export 主要類型
pub use constraint::ResourceConstraint;
pub use plan::ProductionPlan;
pub use product::Product;
pub use scenario::MixScenario;

/// 產品組合求解錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum MixError {
    /// 單位資源消耗為零或負值時，對應座標軸方向無上界，目標函數無界
    #[error("無效的單位資源消耗（必須為正值）: {0}")]
    InvalidResourceCoefficient(String),

    #[error("資源上限不可為負值: {0}")]
    NegativeCapacity(String),

    #[error("頂點搜索未找到可行解")]
    InfeasibleOrUnsolved,

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("匯出錯誤: {0}")]
    ExportError(String),
}

pub type Result<T> = std::result::Result<T, MixError>;
