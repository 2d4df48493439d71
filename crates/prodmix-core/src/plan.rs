//! 生產計劃模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Product;

/// 生產計劃（求解結果中的決策變數，求解後不再變動）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 產品A數量
    pub quantity_a: Decimal,

    /// 產品B數量
    pub quantity_b: Decimal,
}

impl ProductionPlan {
    /// 創建新的生產計劃
    pub fn new(quantity_a: Decimal, quantity_b: Decimal) -> Self {
        Self {
            quantity_a,
            quantity_b,
        }
    }

    /// 原點計劃（兩種產品都不生產）
    pub fn origin() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO)
    }

    /// 目標函數值：total = profit_a * qty_a + profit_b * qty_b
    pub fn total_profit(&self, product_a: &Product, product_b: &Product) -> Decimal {
        product_a.unit_profit * self.quantity_a + product_b.unit_profit * self.quantity_b
    }

    /// 資源用量：usage = resource_a * qty_a + resource_b * qty_b
    pub fn resource_usage(&self, product_a: &Product, product_b: &Product) -> Decimal {
        product_a.resource_per_unit * self.quantity_a
            + product_b.resource_per_unit * self.quantity_b
    }

    /// 檢查數量非負
    pub fn is_nonnegative(&self) -> bool {
        self.quantity_a >= Decimal::ZERO && self.quantity_b >= Decimal::ZERO
    }
}
