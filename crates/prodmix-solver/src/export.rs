//! 求解結果匯出
//!
//! 前端提供「下載結果」連結，內容為鍵值對 JSON；數量與利潤
//! 四捨五入到小數兩位

use chrono::{DateTime, Utc};
use prodmix_core::{MixError, MixScenario, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::SolveResult;

/// 可序列化的求解結果摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveExport {
    /// 情境ID
    pub scenario_id: Uuid,

    /// 情境名稱
    pub scenario_name: String,

    /// 產品A名稱
    pub product_a: String,

    /// 產品B名稱
    pub product_b: String,

    /// 產品A最優數量（2位小數）
    pub quantity_a: Decimal,

    /// 產品B最優數量（2位小數）
    pub quantity_b: Decimal,

    /// 最優總利潤（2位小數）
    pub total_profit: Decimal,

    /// 產生時間
    pub generated_at: DateTime<Utc>,
}

impl SolveExport {
    /// 由情境與求解結果建構匯出摘要
    ///
    /// 不可行的結果沒有數值可匯出，返回錯誤由呼叫端決定呈現方式
    pub fn from_solve(scenario: &MixScenario, result: &SolveResult) -> Result<Self> {
        let (Some(plan), Some(total_profit)) = (&result.plan, result.total_profit) else {
            return Err(MixError::ExportError(
                "不可行的結果無法匯出".to_string(),
            ));
        };

        Ok(Self {
            scenario_id: scenario.id,
            scenario_name: scenario.name.clone(),
            product_a: scenario.product_a.name.clone(),
            product_b: scenario.product_b.name.clone(),
            quantity_a: plan.quantity_a.round_dp(2),
            quantity_b: plan.quantity_b.round_dp(2),
            total_profit: total_profit.round_dp(2),
            generated_at: Utc::now(),
        })
    }

    /// 序列化為 JSON 字串
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MixError::ExportError(e.to_string()))
    }
}
