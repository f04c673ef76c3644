//! Follow-up actions after each post goes live.

use crate::PublishingConfig;
use crate::scheduler::out_of_range;
use chrono::{Duration, NaiveDateTime};
use derive_getters::Getters;
use reelsmith_core::{EngagementTask, ScheduleItem};
use reelsmith_error::ReelsmithResult;

const RESPOND_ACTION: &str = "Respond to top comments";
const HIGHLIGHT_ACTION: &str = "Share highlights on stories";

/// Plans two follow-up tasks per publish slot.
///
/// Comments are answered one full delay after publishing; highlights are
/// shared at half the delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct EngagementPlanner {
    /// Time between publishing and the comment follow-up.
    follow_up_delay: Duration,
}

impl Default for EngagementPlanner {
    fn default() -> Self {
        Self::new(Duration::hours(24))
    }
}

impl EngagementPlanner {
    /// Create a planner with a follow-up delay.
    pub fn new(follow_up_delay: Duration) -> Self {
        Self { follow_up_delay }
    }

    /// Create a planner using the configured follow-up delay.
    pub fn from_config(config: &PublishingConfig) -> Self {
        Self::new(Duration::hours(i64::from(*config.follow_up_delay_hours())))
    }

    /// Two tasks per schedule item, in schedule order.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`](reelsmith_error::InputError) when a follow-up
    /// falls outside the representable calendar.
    #[tracing::instrument(skip_all, fields(slots = schedule.len()))]
    pub fn plan(&self, schedule: &[ScheduleItem]) -> ReelsmithResult<Vec<EngagementTask>> {
        let mut tasks = Vec::with_capacity(schedule.len() * 2);
        for item in schedule {
            let respond_at = self.follow_up_at(item, self.follow_up_delay)?;
            let highlight_at = self.follow_up_at(item, self.follow_up_delay / 2)?;
            tasks.push(EngagementTask::new(item.platform().clone(), RESPOND_ACTION, respond_at));
            tasks.push(EngagementTask::new(item.platform().clone(), HIGHLIGHT_ACTION, highlight_at));
        }
        tracing::info!(count = tasks.len(), "Planned engagement tasks");
        Ok(tasks)
    }

    fn follow_up_at(&self, item: &ScheduleItem, delay: Duration) -> ReelsmithResult<NaiveDateTime> {
        item.publish_at().checked_add_signed(delay).ok_or_else(|| {
            out_of_range(
                "follow_up_delay_hours",
                format!("follow-up after {} for {}", item.publish_at(), item.platform()),
            )
        })
    }

    /// One `<platform>: <action> at <iso time>` line per task.
    pub fn format_tasks(tasks: &[EngagementTask]) -> String {
        tasks
            .iter()
            .map(|task| {
                format!(
                    "{}: {} at {}",
                    task.platform(),
                    task.action(),
                    task.scheduled_for().format("%Y-%m-%dT%H:%M:%S")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
