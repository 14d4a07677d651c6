use crate::models::NewActivity;

static DEFAULT_ACTIVITIES: [NewActivity<'static>; 9] = [
    NewActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    NewActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    NewActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    NewActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["alex@mergington.edu", "lucas@mergington.edu"],
    },
    NewActivity {
        name: "Basketball Club",
        description: "Practice basketball skills and play friendly games",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["mia@mergington.edu", "noah@mergington.edu"],
    },
    NewActivity {
        name: "Art Workshop",
        description: "Explore painting, drawing, and sculpture techniques",
        schedule: "Mondays, 4:00 PM - 5:30 PM",
        max_participants: 18,
        participants: &["ava@mergington.edu", "liam@mergington.edu"],
    },
    NewActivity {
        name: "Drama Club",
        description: "Act, direct, and produce school plays and performances",
        schedule: "Fridays, 3:30 PM - 5:30 PM",
        max_participants: 20,
        participants: &["ella@mergington.edu", "jack@mergington.edu"],
    },
    NewActivity {
        name: "Math Olympiad",
        description: "Prepare for math competitions and solve challenging problems",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &["ethan@mergington.edu", "grace@mergington.edu"],
    },
    NewActivity {
        name: "Science Club",
        description: "Conduct experiments and explore scientific concepts",
        schedule: "Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 14,
        participants: &["chloe@mergington.edu", "ben@mergington.edu"],
    },
];

/// The activities `init_db` loads into a fresh store.
pub fn default_activities() -> &'static [NewActivity<'static>] {
    &DEFAULT_ACTIVITIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_activities_have_unique_names_and_room() {
        let names: HashSet<_> = default_activities().iter().map(|a| a.name).collect();
        assert_eq!(names.len(), 9);
        for a in default_activities() {
            assert!(a.max_participants > 0, "{}", a.name);
            assert!((a.participants.len() as i64) <= a.max_participants, "{}", a.name);
        }
    }
}
