//! Publishing slots and reminders.

use crate::PublishingConfig;
use chrono::{Duration, NaiveDateTime};
use derive_getters::Getters;
use reelsmith_core::{ScheduleItem, normalize_platform_key};
use reelsmith_error::{InputError, InputErrorKind, ReelsmithError, ReelsmithResult};

/// Computes publish slots with a reminder ahead of each.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDateTime;
/// use reelsmith_pipeline::{PublishingConfig, Scheduler};
///
/// let base: NaiveDateTime = "2024-01-01T09:00:00".parse().unwrap();
/// let scheduler = Scheduler::default();
/// let items = scheduler
///     .schedule(
///         base,
///         &PublishingConfig::default(),
///         &["youtube".to_string(), "instagram".to_string()],
///     )
///     .unwrap();
///
/// assert_eq!(items[1].publish_at().to_string(), "2024-01-02 09:00:00");
/// assert_eq!(items[1].reminder_at().to_string(), "2024-01-02 08:30:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Scheduler {
    /// Time between the reminder and the publish slot.
    reminder_buffer: Duration,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Duration::minutes(30))
    }
}

impl Scheduler {
    /// Create a scheduler with a reminder buffer.
    pub fn new(reminder_buffer: Duration) -> Self {
        Self { reminder_buffer }
    }

    /// Create a scheduler using the configured reminder buffer.
    pub fn from_config(config: &PublishingConfig) -> Self {
        Self::new(Duration::minutes(i64::from(*config.reminder_buffer_minutes())))
    }

    /// One slot per platform, offset by index times the platform cadence.
    ///
    /// A platform without its own cadence falls back to `default`, then to
    /// one day.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when a slot or its reminder falls outside the
    /// representable calendar.
    #[tracing::instrument(skip_all, fields(base = %base, platforms = platforms.len()))]
    pub fn schedule(
        &self,
        base: NaiveDateTime,
        config: &PublishingConfig,
        platforms: &[String],
    ) -> ReelsmithResult<Vec<ScheduleItem>> {
        platforms
            .iter()
            .enumerate()
            .map(|(index, platform)| {
                let key = normalize_platform_key(platform);
                let days = config.cadence_days(&key);
                let publish_at = i64::try_from(index)
                    .ok()
                    .and_then(|index| index.checked_mul(i64::from(days)))
                    .and_then(Duration::try_days)
                    .and_then(|offset| base.checked_add_signed(offset))
                    .ok_or_else(|| {
                        out_of_range(
                            "cadence",
                            format!("slot {} for {} at {} day(s) from {}", index, key, days, base),
                        )
                    })?;
                let notes = format!("Publish to {} with cadence {} day(s).", key, days);
                self.item(key, publish_at, notes)
            })
            .collect()
    }

    /// One slot per supplied recommendation, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when a reminder falls outside the representable
    /// calendar.
    pub fn from_recommendations(
        &self,
        recommendations: &[(String, NaiveDateTime)],
    ) -> ReelsmithResult<Vec<ScheduleItem>> {
        recommendations
            .iter()
            .map(|(platform, publish_at)| {
                let key = normalize_platform_key(platform);
                let notes = format!("Publish to {} at the recommended time.", key);
                self.item(key, *publish_at, notes)
            })
            .collect()
    }

    /// One `<platform>: publish at <iso> (remind at <iso>)` line per slot.
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use reelsmith_core::ScheduleItem;
    /// use reelsmith_pipeline::Scheduler;
    ///
    /// let at: NaiveDateTime = "2024-01-01T09:00:00".parse().unwrap();
    /// let remind: NaiveDateTime = "2024-01-01T08:30:00".parse().unwrap();
    /// let item = ScheduleItem::new("youtube", at, remind, "");
    /// assert_eq!(
    ///     Scheduler::format_schedule(&[item]),
    ///     "youtube: publish at 2024-01-01T09:00:00 (remind at 2024-01-01T08:30:00)"
    /// );
    /// ```
    pub fn format_schedule(items: &[ScheduleItem]) -> String {
        items
            .iter()
            .map(|item| {
                format!(
                    "{}: publish at {} (remind at {})",
                    item.platform(),
                    item.publish_at().format(ISO_FORMAT),
                    item.reminder_at().format(ISO_FORMAT)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn item(
        &self,
        platform: String,
        publish_at: NaiveDateTime,
        notes: String,
    ) -> ReelsmithResult<ScheduleItem> {
        let reminder_at = publish_at
            .checked_sub_signed(self.reminder_buffer)
            .ok_or_else(|| {
                out_of_range(
                    "reminder_buffer_minutes",
                    format!("reminder before {} for {}", publish_at, platform),
                )
            })?;
        tracing::debug!(platform = %platform, publish_at = %publish_at, "Scheduled slot");
        Ok(ScheduleItem::new(platform, publish_at, reminder_at, notes))
    }
}

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Recommended slots spaced `spacing` apart from `base`.
///
/// # Errors
///
/// Returns [`InputError`] when a slot falls outside the representable
/// calendar.
pub fn recommend_publication_times(
    base: NaiveDateTime,
    platforms: &[String],
    spacing: Duration,
) -> ReelsmithResult<Vec<(String, NaiveDateTime)>> {
    platforms
        .iter()
        .enumerate()
        .map(|(index, platform)| {
            let key = normalize_platform_key(platform);
            let publish_at = i32::try_from(index)
                .ok()
                .and_then(|index| spacing.checked_mul(index))
                .and_then(|offset| base.checked_add_signed(offset))
                .ok_or_else(|| {
                    out_of_range(
                        "recommended_spacing_hours",
                        format!("slot {} for {} from {}", index, key, base),
                    )
                })?;
            Ok((key, publish_at))
        })
        .collect()
}

/// One `<platform>: <iso time>` line per slot.
///
/// ```
/// use chrono::NaiveDateTime;
/// use reelsmith_core::ScheduleItem;
/// use reelsmith_pipeline::publication_log;
///
/// let at: NaiveDateTime = "2024-01-01T09:00:00".parse().unwrap();
/// let item = ScheduleItem::new("youtube", at, at, "");
/// assert_eq!(publication_log(&[item]), "youtube: 2024-01-01T09:00:00");
/// ```
pub fn publication_log(items: &[ScheduleItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}: {}", item.platform(), item.publish_at().format(ISO_FORMAT)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Out-of-range error naming the configuration field that produced it.
#[track_caller]
pub(crate) fn out_of_range(field: &str, detail: impl std::fmt::Display) -> ReelsmithError {
    InputError::new(InputErrorKind::OutOfRange(format!("{}: {}", field, detail))).into()
}
