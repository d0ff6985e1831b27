//! In-memory store of activities keyed by name.
//!
//! The registry is plain data: callers that share it across requests wrap it
//! in a lock (see `services::activities_service::SharedRegistry`).

use indexmap::IndexMap;

use crate::database::seed::seed_activities;
use crate::models::Activity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student not signed up for this activity")]
    NotSignedUp,
}

impl RegistryError {
    /// Duplicate sign-up and missing unregister are both conflicts with current state.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadySignedUp | Self::NotSignedUp)
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    activities: IndexMap<String, Activity>,
}

impl ActivityRegistry {
    pub fn seeded() -> Self {
        Self {
            activities: seed_activities(),
        }
    }

    pub fn from_activities<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = (S, Activity)>,
        S: Into<String>,
    {
        Self {
            activities: activities
                .into_iter()
                .map(|(name, activity)| (name.into(), activity))
                .collect(),
        }
    }

    /// The full mapping, in seed order.
    pub fn list(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }

    pub fn get(&self, activity_name: &str) -> Option<&Activity> {
        self.activities.get(activity_name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Appends `email` to the activity's participants and returns the confirmation message.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> RegistryResult<String> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RegistryError::NotFound)?;

        if activity.has_participant(email) {
            return Err(RegistryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Removes `email` from the activity's participants and returns the confirmation message.
    pub fn unregister(&mut self, activity_name: &str, email: &str) -> RegistryResult<String> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RegistryError::NotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotSignedUp);
        };

        activity.participants.remove(pos);
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ActivityRegistry {
        ActivityRegistry::from_activities([
            (
                "Chess Club",
                Activity::new("Chess", "Fridays", 12).with_participants(["michael@mergington.edu"]),
            ),
            ("Basketball Team", Activity::new("Hoops", "Tuesdays", 15)),
        ])
    }

    #[test]
    fn seeded_registry_contains_known_activities() {
        let registry = ActivityRegistry::seeded();
        for name in ["Chess Club", "Programming Class", "Basketball Team"] {
            assert!(registry.get(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn list_preserves_insertion_order() {
        let registry = registry();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["Chess Club", "Basketball Team"]);
    }

    #[test]
    fn signup_appends_email_once() {
        let mut registry = registry();
        let message = registry
            .signup("Basketball Team", "new@mergington.edu")
            .unwrap();
        assert_eq!(message, "Signed up new@mergington.edu for Basketball Team");

        let err = registry
            .signup("Basketball Team", "new@mergington.edu")
            .unwrap_err();
        assert_eq!(err, RegistryError::AlreadySignedUp);
        assert!(err.is_conflict());

        let participants = &registry.get("Basketball Team").unwrap().participants;
        assert_eq!(participants, &vec!["new@mergington.edu".to_string()]);
    }

    #[test]
    fn signup_keeps_sign_up_order() {
        let mut registry = registry();
        registry.signup("Chess Club", "b@mergington.edu").unwrap();
        registry.signup("Chess Club", "a@mergington.edu").unwrap();
        assert_eq!(
            registry.get("Chess Club").unwrap().participants,
            vec![
                "michael@mergington.edu".to_string(),
                "b@mergington.edu".to_string(),
                "a@mergington.edu".to_string(),
            ]
        );
    }

    #[test]
    fn signup_ignores_capacity() {
        let mut registry =
            ActivityRegistry::from_activities([("Tiny", Activity::new("", "", 1))]);
        registry.signup("Tiny", "a@mergington.edu").unwrap();
        registry.signup("Tiny", "b@mergington.edu").unwrap();
        assert_eq!(registry.get("Tiny").unwrap().participant_count(), 2);
    }

    #[test]
    fn unregister_removes_email_then_conflicts() {
        let mut registry = registry();
        let message = registry
            .unregister("Chess Club", "michael@mergington.edu")
            .unwrap();
        assert_eq!(message, "Unregistered michael@mergington.edu from Chess Club");
        assert!(!registry
            .get("Chess Club")
            .unwrap()
            .has_participant("michael@mergington.edu"));

        let err = registry
            .unregister("Chess Club", "michael@mergington.edu")
            .unwrap_err();
        assert_eq!(err, RegistryError::NotSignedUp);
        assert!(err.is_conflict());
    }

    #[test]
    fn unknown_activity_is_not_found_for_any_email() {
        let mut registry = registry();
        for email in ["michael@mergington.edu", "nobody@mergington.edu", ""] {
            assert_eq!(
                registry.signup("NonExistent", email),
                Err(RegistryError::NotFound)
            );
            assert_eq!(
                registry.unregister("NonExistent", email),
                Err(RegistryError::NotFound)
            );
        }
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mut registry = registry();
        assert_eq!(
            registry.signup("chess club", "x@mergington.edu"),
            Err(RegistryError::NotFound)
        );
        assert!(registry.signup("Chess Club", "MICHAEL@mergington.edu").is_ok());
    }

    #[test]
    fn error_messages_are_human_readable() {
        assert_eq!(RegistryError::NotFound.to_string(), "Activity not found");
        assert_eq!(
            RegistryError::AlreadySignedUp.to_string(),
            "Student already signed up for this activity"
        );
        assert_eq!(
            RegistryError::NotSignedUp.to_string(),
            "Student not signed up for this activity"
        );
    }
}
