//! 產品組合求解示例

use prodmix::{
    MixScenario, MixSolver, Product, RegionCalculator, ResourceConstraint, SolveExport,
};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 產品組合求解示例 ===\n");

    // 每週機器工時上限 100 小時
    let scenario = MixScenario::new(
        Product::new(
            "Blender".to_string(),
            Decimal::from(7000),
            Decimal::from(2),
        ),
        Product::new(
            "Toaster".to_string(),
            Decimal::from(8000),
            Decimal::from(3),
        ),
        ResourceConstraint::new("MACHINE-HOURS".to_string(), Decimal::from(100)),
    )
    .with_name("週產能規劃".to_string());

    println!("輸入:");
    println!(
        "  - {}: 單位利潤 {}, 單位工時 {}",
        scenario.product_a.name, scenario.product_a.unit_profit, scenario.product_a.resource_per_unit
    );
    println!(
        "  - {}: 單位利潤 {}, 單位工時 {}",
        scenario.product_b.name, scenario.product_b.unit_profit, scenario.product_b.resource_per_unit
    );
    println!(
        "  - {} 上限: {}\n",
        scenario.constraint.resource_id, scenario.constraint.capacity
    );

    let result = MixSolver::solve(&scenario);

    if !result.feasible {
        println!("未找到可行解，請調整輸入:");
        for message in &result.messages {
            println!("  - {}", message);
        }
        return Ok(());
    }

    let plan = result.plan.clone().expect("可行結果必有計劃");

    println!("最優生產計劃:");
    println!("  - {}: {} 件", scenario.product_a.name, plan.quantity_a);
    println!("  - {}: {} 件", scenario.product_b.name, plan.quantity_b);
    println!(
        "  - 總利潤: {}\n",
        result.total_profit.expect("可行結果必有利潤")
    );

    // 可行域邊界取樣（前端畫線、向 x 軸填色）
    let x_max = RegionCalculator::suggested_x_max(
        scenario.product_a.resource_per_unit,
        scenario.constraint.capacity,
    )?;
    let points = RegionCalculator::boundary_points(
        scenario.product_a.resource_per_unit,
        scenario.product_b.resource_per_unit,
        scenario.constraint.capacity,
        x_max,
    )?;
    println!(
        "邊界取樣: {} 點，x ∈ [0, {}]，起點 y = {}",
        points.len(),
        x_max,
        points[0].y.round_dp(2)
    );

    // 下載用 JSON 摘要
    let export = SolveExport::from_solve(&scenario, &result)?;
    println!("\n匯出 JSON:\n{}", export.to_json()?);

    Ok(())
}
