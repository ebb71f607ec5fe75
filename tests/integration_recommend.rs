//! Integration tests for the recommendation policy over full scenarios.

mod common;

#[test]
fn default_scenario_savings_figures() {
    // No default appliance matches the exemption set exactly, so everything
    // above 4 h/day gets capped: suggested total 477.36 kWh, saving 381.27.
    let monitor = common::default_monitor();
    let report = monitor.recommendations();
    assert!((report.total_current_kwh - 858.63).abs() < 0.05);
    assert!((report.total_suggested_kwh - 477.36).abs() < 0.05);
    assert!((report.savings_kwh - 381.27).abs() < 0.1);
    assert!((report.savings_cost - report.savings_kwh * 1444.0).abs() < 1.0);
}

#[test]
fn report_order_matches_inventory_order() {
    let monitor = common::default_monitor();
    let report = monitor.recommendations();
    let inventory: Vec<&str> = monitor.appliances().iter().map(|a| a.name.as_str()).collect();
    let rows: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(inventory, rows);
}

#[test]
fn exact_name_exemption_behavior() {
    let mut monitor = common::monitor_with_tv();
    monitor
        .add_appliance("Kulkas", 1, 62.0, "R-1", 24.0)
        .expect("valid appliance");
    monitor
        .add_appliance("Kulkas 120 Liter", 1, 62.0, "R-1", 24.0)
        .expect("valid appliance");

    let report = monitor.recommendations();
    let hours_for = |name: &str| {
        report
            .entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.suggested_hours)
    };
    assert_eq!(hours_for("Kulkas"), Some(24.0));
    assert_eq!(hours_for("Kulkas 120 Liter"), Some(4.0));
}

#[test]
fn savings_cost_follows_active_rate_class() {
    let mut monitor = common::default_monitor();
    monitor.select_rate_class("R-2");
    let report = monitor.recommendations();
    assert!((report.savings_cost - report.savings_kwh * 1699.0).abs() < 1.0);

    monitor.select_rate_class("mystery-class");
    let fallback_report = monitor.recommendations();
    assert!(
        (fallback_report.savings_cost - fallback_report.savings_kwh * 1500.0).abs() < 1.0
    );
}

#[test]
fn empty_monitor_recommends_nothing() {
    let monitor =
        home_energy_monitor::monitor::EnergyMonitor::new(&common::baseline_config());
    let report = monitor.recommendations();
    assert!(report.entries.is_empty());
    assert_eq!(report.savings_kwh, 0.0);
    assert_eq!(report.savings_cost, 0.0);
}

#[test]
fn suggested_totals_never_exceed_current() {
    let monitor = common::default_monitor();
    let report = monitor.recommendations();
    assert!(report.total_suggested_kwh <= report.total_current_kwh);
    for e in &report.entries {
        assert!(e.suggested_kwh <= e.current_kwh + 1e-4, "entry {}", e.name);
        assert!(e.suggested_hours <= e.current_hours + 1e-4, "entry {}", e.name);
    }
}
