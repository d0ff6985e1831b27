use indexmap::IndexMap;

use crate::models::Activity;

/// The activities the school offers at start-up, in display order.
pub fn seed_activities() -> IndexMap<String, Activity> {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and compete in interscholastic basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
            ),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Train for and play in the school soccer league",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["lucas@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing, and mixed media projects",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Rehearse and perform in school plays and showcases",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            ),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Build public speaking skills and compete in debate tournaments",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
            ),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
