//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MixError, Result};

/// 產品（決策變數對應的實體）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// 產品名稱
    pub name: String,

    /// 單位利潤
    pub unit_profit: Decimal,

    /// 單位資源消耗（機器工時/件）
    pub resource_per_unit: Decimal,
}

impl Product {
    /// 創建新的產品
    pub fn new(name: String, unit_profit: Decimal, resource_per_unit: Decimal) -> Self {
        Self {
            name,
            unit_profit,
            resource_per_unit,
        }
    }

    /// 驗證產品參數
    ///
    /// 單位資源消耗必須為正值：為零或負值時該產品可無限生產，
    /// 目標函數無界，問題沒有有限最優解
    pub fn validate(&self) -> Result<()> {
        if self.resource_per_unit <= Decimal::ZERO {
            return Err(MixError::InvalidResourceCoefficient(format!(
                "{}: {}",
                self.name, self.resource_per_unit
            )));
        }
        Ok(())
    }

    /// 檢查是否為零利潤產品（退化情況，最優解落在原點方向）
    pub fn is_zero_profit(&self) -> bool {
        self.unit_profit == Decimal::ZERO
    }
}
