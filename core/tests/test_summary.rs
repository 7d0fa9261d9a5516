use workout_core::{demo_packages, run_batch, summary_line, ErrorPolicy, Metrics};

#[test]
fn demo_batch_renders_expected_lines() {
    let metrics = Metrics::new().unwrap();
    let out = run_batch(&demo_packages(), ErrorPolicy::Skip, &metrics);
    let lines: Vec<String> = out.succeeded().map(summary_line).collect();

    assert_eq!(
        lines,
        [
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000.",
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750.",
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 157.500.",
        ]
    );
}

#[test]
fn json_output_carries_all_fields() {
    let metrics = Metrics::new().unwrap();
    let out = run_batch(&demo_packages()[..1], ErrorPolicy::Skip, &metrics);
    let m = out.succeeded().next().unwrap();

    let v: serde_json::Value = serde_json::to_value(m).unwrap();
    assert_eq!(v["workout_label"], "Swimming");
    assert_eq!(v["calories_kcal"].as_f64().unwrap(), 336.0);
}
