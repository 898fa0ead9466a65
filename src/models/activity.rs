use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// One entry of `GET /activities`. The activity name is the map key, not a field.
///
/// Missing and `null` fields both fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_participants: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<String>,
}

impl Activity {
    /// "TBA" when the schedule is absent or empty; any other text as sent.
    pub fn schedule_label(&self) -> &str {
        match self.schedule.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "TBA",
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Activities keyed by name, in the order the server sent them.
pub type ActivityCollection = IndexMap<String, Activity>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let listing: ActivityCollection = serde_json::from_str(
            r#"{
                "Chess Club": {"description": null, "schedule": null, "max_participants": null, "participants": null},
                "Gym Class": {"description": "Sports", "schedule": "Mondays", "max_participants": 30, "participants": ["a@x.com"]}
            }"#,
        )
        .unwrap();

        let chess = &listing["Chess Club"];
        assert_eq!(chess.description, "");
        assert_eq!(chess.max_participants, 0);
        assert!(chess.participants.is_empty());
        assert_eq!(chess.schedule_label(), "TBA");

        let gym = &listing["Gym Class"];
        assert_eq!(gym.participants, ["a@x.com"]);
        assert_eq!(gym.max_participants, 30);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let activity: Activity = serde_json::from_str("{}").unwrap();
        assert_eq!(activity.description, "");
        assert_eq!(activity.schedule, None);
        assert!(activity.participants.is_empty());
    }

    #[test]
    fn only_an_empty_schedule_reads_as_tba() {
        let mut activity: Activity = serde_json::from_str("{}").unwrap();

        activity.schedule = Some(String::new());
        assert_eq!(activity.schedule_label(), "TBA");

        activity.schedule = Some("   ".to_string());
        assert_eq!(activity.schedule_label(), "   ");

        activity.schedule = Some("Fridays, 3:30 PM".to_string());
        assert_eq!(activity.schedule_label(), "Fridays, 3:30 PM");
    }
}
