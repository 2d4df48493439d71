//! 產能敏感度掃描示例

use prodmix::{MixScenario, Product, ResourceConstraint, SensitivityCalculator};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 產能敏感度掃描示例 ===\n");

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
    .with_name("產能擴充評估".to_string());

    // 機器工時 10 → 100，每 10 小時一格
    let points = SensitivityCalculator::capacity_sweep(
        &scenario,
        Decimal::from(10),
        Decimal::from(100),
        10,
    )?;

    println!("上限    產品A    產品B    總利潤");
    for point in &points {
        println!(
            "{:>4}    {:>5}    {:>5}    {:>8}",
            point.capacity,
            point.plan.quantity_a.round_dp(1),
            point.plan.quantity_b.round_dp(1),
            point.total_profit.round_dp(0)
        );
    }

    let first = &points[0];
    let last = &points[points.len() - 1];
    println!(
        "\n上限由 {} 提高到 {}，總利潤由 {} 提高到 {}",
        first.capacity, last.capacity, first.total_profit, last.total_profit
    );

    Ok(())
}
