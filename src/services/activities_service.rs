use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::database::activity_registry::{ActivityRegistry, RegistryResult};
use crate::models::Activity;

/// Registry shared between request handlers.
pub type SharedRegistry = Arc<RwLock<ActivityRegistry>>;

pub fn shared(registry: ActivityRegistry) -> SharedRegistry {
    Arc::new(RwLock::new(registry))
}

pub async fn list_activities(registry: &SharedRegistry) -> IndexMap<String, Activity> {
    registry.read().await.list().clone()
}

// The write lock spans both the membership check and the mutation.
pub async fn signup(
    registry: &SharedRegistry,
    activity_name: &str,
    email: &str,
) -> RegistryResult<String> {
    let result = registry.write().await.signup(activity_name, email);
    match &result {
        Ok(_) => info!(activity = %activity_name, email = %email, "signup accepted"),
        Err(e) => warn!(activity = %activity_name, email = %email, reason = %e, "signup rejected"),
    }
    result
}

pub async fn unregister(
    registry: &SharedRegistry,
    activity_name: &str,
    email: &str,
) -> RegistryResult<String> {
    let result = registry.write().await.unregister(activity_name, email);
    match &result {
        Ok(_) => info!(activity = %activity_name, email = %email, "unregister accepted"),
        Err(e) => {
            warn!(activity = %activity_name, email = %email, reason = %e, "unregister rejected")
        }
    }
    result
}

pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub spots_left: u32,
    pub is_full: bool,
    pub capacity_pct: u32,
}

pub struct IndexPageData {
    pub activities: Vec<ActivityCardView>,
    pub total_participants: usize,
}

pub async fn build_index_page(registry: &SharedRegistry) -> IndexPageData {
    let guard = registry.read().await;
    let activities: Vec<ActivityCardView> = guard
        .list()
        .iter()
        .map(|(name, activity)| build_card(name, activity))
        .collect();
    let total_participants = activities.iter().map(|a| a.participants.len()).sum();

    IndexPageData {
        activities,
        total_participants,
    }
}

fn build_card(name: &str, activity: &Activity) -> ActivityCardView {
    ActivityCardView {
        name: name.to_string(),
        description: activity.description.trim().to_string(),
        schedule: activity.schedule.trim().to_string(),
        max_participants: activity.max_participants,
        participants: activity.participants.clone(),
        spots_left: activity.spots_left(),
        is_full: activity.is_full(),
        capacity_pct: compute_capacity_pct(activity.participant_count(), activity.max_participants),
    }
}

fn compute_capacity_pct(current: usize, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let current = u64::try_from(current).unwrap_or(u64::MAX);
    let pct = current.saturating_mul(100) / u64::from(max);
    pct.min(100) as u32
}
