//! Interactive numbered-menu front-end over the SoilMate use cases.
//!
//! The console is generic over its input and output streams so a session can
//! be driven from stdin/stdout or from an in-memory script.

use std::str::FromStr;

use application::SoilMate;
use domain::{DomainError, FarmerProfile, NewDevice, NewReading, SensorType};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

const MENU: &str = "\n===== SoilMate Menu =====
1. Add Farmer
2. View Farmers
3. Add Device
4. Add Soil Sensor Data
5. View Alerts
6. Mark Alert as Read
7. Generate Report
8. Generate Recommendations
9. View Recommendations
10. Exit
";

/// Why a menu action stopped early
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input ended; the session closes normally.
    #[error("end of input")]
    Eof,

    /// A typed field could not be parsed; only the current action is abandoned.
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type ActionResult = Result<(), ConsoleError>;

pub struct Console<R, W> {
    app: SoilMate,
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(app: SoilMate, input: R, output: W) -> Self {
        Self { app, input, output }
    }

    /// Run the menu loop until the user picks Exit or input ends.
    ///
    /// Database and I/O failures end the session with an error.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.write(MENU).await?;
            let Some(choice) = self.prompt("Enter choice: ").await? else {
                break;
            };

            let result = match choice.as_str() {
                "1" => self.add_farmer().await,
                "2" => self.view_farmers().await,
                "3" => self.add_device().await,
                "4" => self.add_sensor_data().await,
                "5" => self.view_alerts().await,
                "6" => self.mark_alert_read().await,
                "7" => self.generate_report().await,
                "8" => self.generate_recommendation().await,
                "9" => self.view_recommendations().await,
                "10" => {
                    self.writeln("👋 Exiting SoilMate.").await?;
                    return Ok(());
                }
                other => {
                    debug!(choice = other, "Unknown menu choice");
                    self.writeln("❌ Invalid choice.").await?;
                    Ok(())
                }
            };

            match result {
                Ok(()) => {}
                Err(ConsoleError::Eof) => break,
                Err(ConsoleError::InvalidInput(message)) => {
                    self.writeln(&format!("❌ {}", message)).await?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        debug!("Input closed, leaving menu");
        Ok(())
    }

    async fn add_farmer(&mut self) -> ActionResult {
        let profile = FarmerProfile {
            name: self.field("Enter name: ").await?,
            location: self.field("Enter location: ").await?,
            crops: self.field("Enter crops: ").await?,
            phone: self.field("Enter phone: ").await?,
            email: self.field("Enter email: ").await?,
        };

        // A duplicate email is absorbed without a message
        if self.app.farmers.add(profile).await?.is_some() {
            self.writeln("👨‍🌾 Farmer added!").await?;
        }
        Ok(())
    }

    async fn view_farmers(&mut self) -> ActionResult {
        for farmer in self.app.farmers.list().await? {
            self.writeln(&format!(
                "ID: {}, Name: {}, Location: {}, Crops: {}",
                farmer.id, farmer.name, farmer.location, farmer.crops
            ))
            .await?;
        }
        Ok(())
    }

    async fn add_device(&mut self) -> ActionResult {
        let farmer_id: i32 = self.parsed("Enter Farmer ID: ", "farmer ID").await?;
        let battery: f64 = self.parsed("Enter Battery %: ", "battery percentage").await?;
        let solar: f64 = self.parsed("Enter Solar %: ", "solar percentage").await?;

        self.app
            .ingestion
            .add_device(NewDevice::new(farmer_id, battery, solar))
            .await?;
        self.writeln("🔋 Device added!").await?;
        Ok(())
    }

    async fn add_sensor_data(&mut self) -> ActionResult {
        let device_id: i32 = self.parsed("Enter Device ID: ", "device ID").await?;
        let sensor_type = self.field("Enter Sensor Type (Moisture/pH): ").await?;
        let sensor_type = SensorType::from_str(&sensor_type)
            .map_err(|e| ConsoleError::InvalidInput(e.to_string()))?;
        let value: f64 = self.parsed("Enter Value: ", "sensor value").await?;

        self.app
            .ingestion
            .add_reading(NewReading::new(device_id, sensor_type, value))
            .await?;
        self.writeln("🌱 Sensor data added!").await?;
        Ok(())
    }

    async fn view_alerts(&mut self) -> ActionResult {
        for alert in self.app.alerts.list().await? {
            self.writeln(&format!(
                "ID: {}, Type: {}, Message: {}, Status: {}",
                alert.id, alert.alert_type, alert.message, alert.status
            ))
            .await?;
        }
        Ok(())
    }

    async fn mark_alert_read(&mut self) -> ActionResult {
        let alert_id: i32 = self
            .parsed("Enter Alert ID to mark as read: ", "alert ID")
            .await?;

        if self.app.alerts.mark_read(alert_id).await? {
            self.writeln("✅ Alert marked as read!").await?;
        }
        Ok(())
    }

    async fn generate_report(&mut self) -> ActionResult {
        match self.app.reports.average_moisture().await? {
            Some(average) => {
                self.writeln(&format!("📊 Average Moisture: {}%", average))
                    .await?
            }
            None => self.writeln("📊 No moisture readings recorded.").await?,
        }
        Ok(())
    }

    async fn generate_recommendation(&mut self) -> ActionResult {
        let farmer_id: i32 = self.parsed("Enter Farmer ID: ", "farmer ID").await?;

        match self.app.recommendations.generate(farmer_id).await? {
            Some(recommendation) => {
                self.writeln(&format!(
                    "💡 Recommendation Generated: {}",
                    recommendation.message
                ))
                .await?
            }
            None => {
                self.writeln("❌ No sensor data found for this farmer.")
                    .await?
            }
        }
        Ok(())
    }

    async fn view_recommendations(&mut self) -> ActionResult {
        let farmer_id: i32 = self.parsed("Enter Farmer ID: ", "farmer ID").await?;

        for recommendation in self.app.recommendations.for_farmer(farmer_id).await? {
            self.writeln(&format!(
                "[{}] {} - {} ({})",
                recommendation.id,
                recommendation.kind,
                recommendation.message,
                recommendation.created_at
            ))
            .await?;
        }
        Ok(())
    }

    // --- I/O helpers ---

    /// Text field; input ending mid-action closes the session.
    async fn field(&mut self, label: &str) -> Result<String, ConsoleError> {
        self.prompt(label).await?.ok_or(ConsoleError::Eof)
    }

    async fn parsed<T: FromStr>(&mut self, label: &str, what: &str) -> Result<T, ConsoleError> {
        let raw = self.field(label).await?;
        raw.parse()
            .map_err(|_| ConsoleError::InvalidInput(format!("Invalid {}: {:?}", what, raw)))
    }

    /// Print a label and read one trimmed line. `None` on end of input.
    async fn prompt(&mut self, label: &str) -> std::io::Result<Option<String>> {
        self.write(label).await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn writeln(&mut self, text: &str) -> std::io::Result<()> {
        self.write(text).await?;
        self.write("\n").await
    }

    /// Give back the output stream, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }
}
