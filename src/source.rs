use std::path::PathBuf;

use tracing::instrument;

use crate::models::ForecastPayload;

/// Where forecast payloads come from
#[allow(async_fn_in_trait)]
pub trait ForecastSource {
    async fn fetch_forecast(&self) -> crate::Result<ForecastPayload>;
}

/// Forecast payload saved as JSON on disk
#[derive(Debug, Clone)]
pub struct FileForecastSource {
    path: PathBuf,
}

impl FileForecastSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ForecastSource for FileForecastSource {
    #[instrument(
        name = "read_forecast_file",
        level = "debug",
        skip(self),
        fields(path = %self.path.display())
    )]
    async fn fetch_forecast(&self) -> crate::Result<ForecastPayload> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        ForecastPayload::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AirwatchError;

    #[tokio::test]
    async fn test_read_payload_file() {
        let path =
            std::env::temp_dir().join(format!("airwatch-payload-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"current_aqi": 165, "aqi_48h": 145, "aqi_72h": 120, "confidence": 72, "trend": "decreasing"}"#,
        )
        .unwrap();

        let payload = FileForecastSource::new(&path).fetch_forecast().await;
        std::fs::remove_file(&path).unwrap();

        let payload = payload.unwrap();
        assert_eq!(payload.aqi_48h, Some(145.0));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = FileForecastSource::new("/nonexistent/airwatch/forecast.json");
        let result = source.fetch_forecast().await;
        assert!(matches!(result, Err(AirwatchError::Io { .. })));
    }
}
