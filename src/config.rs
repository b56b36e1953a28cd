use chrono::Duration;
use chrono_tz::Tz;

use crate::{
    error::{config::ConfigError, AppError},
    service::time::TimeNormalizer,
};

const DEFAULT_CIVIL_TIME_ZONE: &str = "Asia/Kolkata";
const DEFAULT_REMINDER_CRON: &str = "0 * * * * *";
const DEFAULT_REMINDER_LEAD_MINUTES: i64 = 60;
const DEFAULT_REMINDER_WINDOW_MINUTES: i64 = 1;

pub struct Config {
    pub database_url: String,

    /// Zone in which working hours and weekdays are interpreted.
    pub civil_time_zone: Tz,

    pub reminder_cron: String,
    pub reminder_lead: Duration,
    pub reminder_window: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `var` - Lookup returning the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(AppError::ConfigErr)` - Missing `DATABASE_URL`, unknown zone, or a malformed number
    pub fn from_vars<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            var("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let zone_name =
            var("CIVIL_TIME_ZONE").unwrap_or_else(|| DEFAULT_CIVIL_TIME_ZONE.to_string());
        let civil_time_zone = zone_name
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimeZone(zone_name.clone()))?;

        Ok(Self {
            database_url,
            civil_time_zone,
            reminder_cron: var("REMINDER_CRON").unwrap_or_else(|| DEFAULT_REMINDER_CRON.to_string()),
            reminder_lead: minutes_var(&var, "REMINDER_LEAD_MINUTES", DEFAULT_REMINDER_LEAD_MINUTES)?,
            reminder_window: minutes_var(
                &var,
                "REMINDER_WINDOW_MINUTES",
                DEFAULT_REMINDER_WINDOW_MINUTES,
            )?,
        })
    }

    /// Normalizer for the configured civil zone.
    pub fn time_normalizer(&self) -> TimeNormalizer {
        TimeNormalizer::new(self.civil_time_zone)
    }
}

fn minutes_var<F>(var: &F, name: &str, default: i64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = var(name) else {
        return Ok(Duration::minutes(default));
    };

    match value.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(Duration::minutes(minutes)),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
