//! 集成測試

use prodmix::{
    MixScenario, MixSolver, Product, ProductionPlan, RegionCalculator, ResourceConstraint,
    SensitivityCalculator, SolveExport,
};
use rust_decimal::Decimal;

fn scenario(
    profit_a: i64,
    resource_a: i64,
    profit_b: i64,
    resource_b: i64,
    capacity: i64,
) -> MixScenario {
    MixScenario::new(
        Product::new(
            "PRODUCT-A".to_string(),
            Decimal::from(profit_a),
            Decimal::from(resource_a),
        ),
        Product::new(
            "PRODUCT-B".to_string(),
            Decimal::from(profit_b),
            Decimal::from(resource_b),
        ),
        ResourceConstraint::new("MACHINE-HOURS".to_string(), Decimal::from(capacity)),
    )
}

#[test]
fn test_solve_and_render_end_to_end() {
    // 場景：profit_A=40000, resource_A=2, profit_B=60000, resource_B=3, capacity=100
    // 頂點候選：(0,0)→0、(50,0)→2,000,000、(0,33.33)→略低於 2,000,000

    // 1. 求解
    let scenario = scenario(40_000, 2, 60_000, 3, 100);
    let result = MixSolver::solve(&scenario);

    println!(
        "最優計劃: {:?}, 總利潤: {:?}",
        result.plan, result.total_profit
    );

    assert!(result.feasible);
    let plan = result.plan.clone().unwrap();
    assert_eq!(plan.quantity_a, Decimal::from(50));
    assert_eq!(plan.quantity_b, Decimal::ZERO);
    assert_eq!(result.total_profit.unwrap(), Decimal::from(2_000_000));

    // 2. 可行域渲染：x=0 → y=33.33；x=50 → y=0；x>50 → 夾至 0
    let x_max =
        RegionCalculator::suggested_x_max(Decimal::from(2), Decimal::from(100)).unwrap();
    assert_eq!(x_max, Decimal::from(60));

    let points = RegionCalculator::boundary_points_with_samples(
        Decimal::from(2),
        Decimal::from(3),
        Decimal::from(100),
        x_max,
        61,
    )
    .unwrap();

    assert_eq!(points[0].x, Decimal::ZERO);
    assert_eq!(points[0].y.round_dp(2), Decimal::new(3333, 2));

    let at_intercept = points.iter().find(|p| p.x == Decimal::from(50)).unwrap();
    assert_eq!(at_intercept.y, Decimal::ZERO);

    let beyond: Vec<_> = points.iter().filter(|p| p.x > Decimal::from(50)).collect();
    assert!(!beyond.is_empty());
    assert!(beyond.iter().all(|p| p.y == Decimal::ZERO));

    // 3. 最優頂點落在取樣視窗內
    assert!(plan.quantity_a <= x_max);
}

#[test]
fn test_solve_blender_toaster_scenario() {
    // 場景：profit_A=7000, resource_A=2, profit_B=8000, resource_B=3, capacity=100
    // (50,0)→350,000 優於 (0,33.33)→約 266,667
    let result = MixSolver::solve(&scenario(7_000, 2, 8_000, 3, 100));

    assert!(result.feasible);
    let plan = result.plan.unwrap();
    assert_eq!(plan.quantity_a, Decimal::from(50));
    assert_eq!(plan.quantity_b, Decimal::ZERO);
    assert_eq!(result.total_profit.unwrap(), Decimal::from(350_000));
}

#[test]
fn test_unbounded_axis_surfaces_as_infeasible() {
    // resource_A=0 → 無界，結果必須是不可行而非任何有限利潤
    let result = MixSolver::solve(&scenario(40_000, 0, 60_000, 3, 100));

    assert!(!result.feasible);
    assert!(result.plan.is_none());
    assert!(result.total_profit.is_none());

    // 前端據此顯示「請調整輸入」類信息
    assert!(!result.messages.is_empty());
}

#[test]
fn test_zero_capacity_degenerate_case() {
    let result = MixSolver::solve(&scenario(7_000, 2, 8_000, 3, 0));

    assert!(result.feasible);
    assert_eq!(result.plan.unwrap(), ProductionPlan::origin());
    assert_eq!(result.total_profit.unwrap(), Decimal::ZERO);
}

#[test]
fn test_sweep_then_export_workflow() {
    // 儀表板工作流：先掃描產能區間，再匯出選定情境的結果

    // 1. 產能掃描 1..=100
    let scenario = scenario(7_000, 2, 8_000, 3, 100).with_name("週產能規劃".to_string());
    let sweep = SensitivityCalculator::capacity_sweep(
        &scenario,
        Decimal::from(1),
        Decimal::from(100),
        100,
    )
    .unwrap();

    assert_eq!(sweep.len(), 100);
    for pair in sweep.windows(2) {
        assert!(pair[1].total_profit >= pair[0].total_profit);
    }

    // 2. 求解選定情境並匯出
    let result = MixSolver::solve(&scenario);
    let export = SolveExport::from_solve(&scenario, &result).unwrap();
    let json = export.to_json().unwrap();

    // 3. 下載內容可還原且數值正確
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["scenario_name"], "週產能規劃");
    assert_eq!(value["product_a"], "PRODUCT-A");

    let restored: SolveExport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.quantity_a, Decimal::from(50));
    assert_eq!(restored.total_profit, Decimal::from(350_000));
}

#[test]
fn test_scenario_is_explicit_parameter_struct() {
    // 相同輸入 → 相同輸出：求解器不依賴任何外部狀態
    let s = scenario(7_000, 2, 8_000, 3, 100);

    let first = MixSolver::solve(&s);
    let second = MixSolver::solve(&s);

    assert_eq!(first.plan, second.plan);
    assert_eq!(first.total_profit, second.total_profit);
}
