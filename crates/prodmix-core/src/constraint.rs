//! 資源約束模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MixError, Result};

/// 共享資源約束（本模型中唯一的全局約束）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConstraint {
    /// 資源ID（如 MACHINE-HOURS）
    pub resource_id: String,

    /// 每期可用總量
    pub capacity: Decimal,
}

impl ResourceConstraint {
    /// 創建新的資源約束
    pub fn new(resource_id: String, capacity: Decimal) -> Self {
        Self {
            resource_id,
            capacity,
        }
    }

    /// 驗證約束參數（負的資源上限立即不可行）
    pub fn validate(&self) -> Result<()> {
        if self.capacity < Decimal::ZERO {
            return Err(MixError::NegativeCapacity(format!(
                "{}: {}",
                self.resource_id, self.capacity
            )));
        }
        Ok(())
    }

    /// 檢查資源用量是否在上限內
    pub fn is_satisfied_by(&self, usage: Decimal) -> bool {
        usage <= self.capacity
    }
}
