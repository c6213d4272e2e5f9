//! Cursed Arena: teams, players, tournaments and the matches between them.

use serde_json::{Map, Value};
use spectral_schema::{
    SchemaError,
    node::{
        EntityDefinition, Feature, FieldDefinition, Permissions, SortDirection, Verdict,
    },
    registry::EntityRegistry,
};

pub const REGIONS: [&str; 5] = ["NA", "EU", "APAC", "LATAM", "Underworld"];
pub const PLAYER_ROLES: [&str; 4] = ["carry", "support", "tank", "flex"];
pub const TOURNAMENT_STATUSES: [&str; 4] = ["upcoming", "live", "finished", "cancelled"];

fn staff() -> Permissions {
    Permissions::new()
        .read(["admin", "organizer", "player", "viewer"])
        .write(["admin", "organizer"])
        .delete(["admin"])
}

#[must_use]
pub fn team() -> EntityDefinition {
    EntityDefinition::new("team")
        .icon("skull")
        .field(
            FieldDefinition::text("name", "Team Name")
                .required()
                .min_length(3)
                .max_length(40),
        )
        .field(
            FieldDefinition::text("tag", "Team Tag")
                .required()
                .min_length(2)
                .max_length(5)
                .pattern("^[A-Z0-9]+$"),
        )
        .field(FieldDefinition::enumeration("region", "Region", REGIONS).required())
        .field(FieldDefinition::date("founded", "Founded"))
        .field(FieldDefinition::text("logo_url", "Logo URL").url())
        .field(
            FieldDefinition::number("wins", "Wins")
                .min(0.0)
                .default_value(0),
        )
        .permissions(staff())
        .features([
            Feature::List,
            Feature::Create,
            Feature::Edit,
            Feature::Detail,
            Feature::Delete,
            Feature::Export,
        ])
        .columns(["name", "tag", "region", "wins"])
        .sort_by("wins", SortDirection::Desc)
}

#[must_use]
pub fn player() -> EntityDefinition {
    EntityDefinition::new("player")
        .icon("ghost")
        .field(
            FieldDefinition::text("handle", "Handle")
                .required()
                .min_length(3)
                .max_length(16)
                .pattern("^[A-Za-z0-9_]+$"),
        )
        .field(FieldDefinition::text("email", "Email").required().email())
        .field(FieldDefinition::reference("team", "Team", "team"))
        .field(FieldDefinition::enumeration("role", "Role", PLAYER_ROLES).default_value("flex"))
        .field(
            FieldDefinition::number("rating", "Rating")
                .min(0.0)
                .max(3000.0)
                .default_value(1000),
        )
        .field(FieldDefinition::boolean("active", "Active").default_value(true))
        .permissions(staff())
        .columns(["handle", "team", "role", "rating", "active"])
        .sort_by("rating", SortDirection::Desc)
}

#[must_use]
pub fn tournament() -> EntityDefinition {
    EntityDefinition::new("tournament")
        .icon("trophy")
        .field(
            FieldDefinition::text("name", "Tournament Name")
                .required()
                .max_length(80),
        )
        .field(FieldDefinition::date("start_date", "Start Date").required())
        .field(FieldDefinition::date("end_date", "End Date"))
        .field(FieldDefinition::number("prize_pool", "Prize Pool").min(0.0))
        .field(
            FieldDefinition::number("max_teams", "Max Teams")
                .min(2.0)
                .max(64.0)
                .custom(|v| {
                    let is_power_of_two = v
                        .as_f64()
                        .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
                        .is_some_and(|n| n >= 1.0 && n.fract() == 0.0 && n.log2().fract() == 0.0);

                    if is_power_of_two {
                        Verdict::Valid
                    } else {
                        "Max Teams must be a power of two".into()
                    }
                }),
        )
        .field(
            FieldDefinition::enumeration("status", "Status", TOURNAMENT_STATUSES)
                .required()
                .default_value("upcoming"),
        )
        .field(FieldDefinition::text("website", "Website").url())
        .permissions(staff())
        .columns(["name", "start_date", "status", "prize_pool"])
        .sort_by("start_date", SortDirection::Asc)
        .validate_with(dates_in_order)
}

/// `match` is reserved in Rust, hence the suffix.
#[must_use]
pub fn match_() -> EntityDefinition {
    EntityDefinition::new("match")
        .icon("swords")
        .field(FieldDefinition::reference("tournament", "Tournament", "tournament").required())
        .field(FieldDefinition::reference("home_team", "Home Team", "team").required())
        .field(FieldDefinition::reference("away_team", "Away Team", "team").required())
        .field(FieldDefinition::date("scheduled_at", "Scheduled At").required())
        .field(FieldDefinition::number("home_score", "Home Score").min(0.0))
        .field(FieldDefinition::number("away_score", "Away Score").min(0.0))
        .permissions(staff())
        .features([Feature::List, Feature::Create, Feature::Edit, Feature::Detail])
        .columns(["scheduled_at", "home_team", "away_team", "home_score", "away_score"])
        .sort_by("scheduled_at", SortDirection::Asc)
        .validate_with(|data: &Map<String, Value>| {
            match (data.get("home_team"), data.get("away_team")) {
                (Some(home), Some(away)) if home == away => {
                    Verdict::from("A team cannot play against itself")
                }
                _ => Verdict::Valid,
            }
        })
}

/// Every Cursed Arena definition, validated as one registry.
pub fn registry() -> Result<EntityRegistry, SchemaError> {
    EntityRegistry::from_definitions([team(), player(), tournament(), match_()])
}

// ISO dates compare correctly as strings.
fn dates_in_order(data: &Map<String, Value>) -> Verdict {
    match (
        data.get("start_date").and_then(Value::as_str),
        data.get("end_date").and_then(Value::as_str),
    ) {
        (Some(start), Some(end)) if !end.is_empty() && end < start => {
            "End Date must not be before Start Date".into()
        }
        _ => Verdict::Valid,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_builds() {
        let registry = registry().unwrap();

        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            ["match", "player", "team", "tournament"]
        );
    }

    #[test]
    fn match_references_resolve() {
        let registry = registry().unwrap();
        let def = registry.get("match").unwrap();

        assert_eq!(def.get_field("home_team").unwrap().reference_target(), Some("team"));
        assert!(!def.supports(Feature::Delete));
    }
}
