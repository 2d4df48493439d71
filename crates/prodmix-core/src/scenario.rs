//! 求解情境模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Product, ResourceConstraint, Result};

/// 產品組合情境（一次求解的完整輸入參數）
///
/// 求解器是無狀態的純函數，所有輸入都通過本結構顯式傳入，
/// 不依賴任何外部環境狀態
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixScenario {
    /// 情境ID
    pub id: Uuid,

    /// 情境名稱
    pub name: String,

    /// 產品A
    pub product_a: Product,

    /// 產品B
    pub product_b: Product,

    /// 共享資源約束
    pub constraint: ResourceConstraint,
}

impl MixScenario {
    /// 創建新的求解情境
    pub fn new(product_a: Product, product_b: Product, constraint: ResourceConstraint) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            product_a,
            product_b,
            constraint,
        }
    }

    /// 建構器模式：設置情境名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// 驗證情境輸入
    pub fn validate(&self) -> Result<()> {
        self.product_a.validate()?;
        self.product_b.validate()?;
        self.constraint.validate()?;
        Ok(())
    }
}
