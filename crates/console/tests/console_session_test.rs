//! Scripted console sessions against an in-memory SQLite database

use application::SoilMate;
use console::Console;
use domain::{NewAlert, RuleSet};
use infrastructure::DatabaseConfig;

async fn soilmate() -> SoilMate {
    let db = infrastructure::connect(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    SoilMate::new(db, RuleSet::default())
}

/// Feeds `script` as stdin and returns everything the console printed
async fn run_script(app: SoilMate, script: &str) -> String {
    let mut console = Console::new(app, script.as_bytes(), Vec::new());
    console.run().await.expect("Session failed");
    String::from_utf8(console.into_output()).expect("Output is not UTF-8")
}

#[tokio::test]
async fn test_add_and_view_farmer() {
    let app = soilmate().await;
    let output = run_script(
        app,
        "1\nRavi\nPune\nWheat\n9800000000\nravi@example.com\n2\n10\n",
    )
    .await;

    assert!(output.contains("👨‍🌾 Farmer added!"));
    assert!(output.contains("ID: 1, Name: Ravi, Location: Pune, Crops: Wheat"));
    assert!(!output.contains("ravi@example.com"));
    assert!(output.contains("👋 Exiting SoilMate."));
}

#[tokio::test]
async fn test_duplicate_farmer_is_silent() {
    let app = soilmate().await;
    let farmer = "1\nRavi\nPune\nWheat\n98\nravi@example.com\n";
    let output = run_script(app.clone(), &format!("{farmer}{farmer}10\n")).await;

    assert_eq!(output.matches("Farmer added!").count(), 1);
    assert_eq!(app.farmers.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_sensor_flow_to_recommendation() {
    let app = soilmate().await;
    let script = "\
1\nAsha\nNashik\nGrapes\n98\nasha@example.com\n\
3\n1\n80\n55\n\
4\n1\nmoisture\n25\n\
7\n\
8\n1\n\
9\n1\n\
10\n";
    let output = run_script(app, script).await;

    assert!(output.contains("🔋 Device added!"));
    assert!(output.contains("🌱 Sensor data added!"));
    assert!(output.contains("📊 Average Moisture: 25%"));
    assert!(output.contains("💡 Recommendation Generated: Moisture is too low (25%). Please irrigate crops."));
    assert!(output.contains("[1] irrigation - Moisture is too low (25%)."));
}

#[tokio::test]
async fn test_report_without_readings() {
    let output = run_script(soilmate().await, "7\n10\n").await;
    assert!(output.contains("No moisture readings recorded"));
}

#[tokio::test]
async fn test_recommendation_without_data() {
    let output = run_script(soilmate().await, "8\n5\n10\n").await;
    assert!(output.contains("❌ No sensor data found for this farmer."));
}

#[tokio::test]
async fn test_invalid_choice_keeps_menu_running() {
    let output = run_script(soilmate().await, "42\nabc\n10\n").await;

    assert_eq!(output.matches("❌ Invalid choice.").count(), 2);
    assert!(output.contains("👋 Exiting SoilMate."));
}

#[tokio::test]
async fn test_bad_number_aborts_only_that_action() {
    let app = soilmate().await;
    let output = run_script(app.clone(), "3\nnot-a-number\n2\n10\n").await;

    assert!(output.contains("❌ Invalid farmer ID: \"not-a-number\""));
    assert!(!output.contains("Device added!"));
    assert!(output.contains("👋 Exiting SoilMate."));
}

#[tokio::test]
async fn test_unknown_sensor_type_is_rejected() {
    let output = run_script(soilmate().await, "4\n1\nNitrogen\n10\n").await;

    assert!(!output.contains("Sensor data added!"));
    assert!(output.contains("❌ Invalid value: Unknown sensor type"));
}

#[tokio::test]
async fn test_mark_alert_read() {
    let app = soilmate().await;
    let alert = app
        .alerts
        .raise(NewAlert::new("Moisture", "Field 2 is dry"))
        .await
        .unwrap();

    let script = format!("6\n{}\n6\n999\n5\n10\n", alert.id);
    let output = run_script(app, &script).await;

    assert_eq!(output.matches("✅ Alert marked as read!").count(), 1);
    assert!(output.contains("Type: Moisture, Message: Field 2 is dry, Status: read"));
}

#[tokio::test]
async fn test_end_of_input_exits_cleanly() {
    let output = run_script(soilmate().await, "1\nHalf\n").await;

    assert!(!output.contains("Farmer added!"));
    assert!(!output.contains("Exiting"));
}
