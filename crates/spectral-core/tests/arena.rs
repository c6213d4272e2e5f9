use serde_json::{Map, Value, json};
use spectral_core::{
    schema::node::SortDirection,
    validate_field, validate_record,
    view::{EMPTY_CELL, FormModel, TableModel},
};
use spectral_demo_arena as arena;

fn record(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn team_tag_length_boundaries() {
    let team = arena::team();
    let tag = team.get_field("tag").unwrap();

    assert_eq!(
        validate_field(Some(&json!("T")), tag).as_deref(),
        Some("Team Tag must be at least 2 characters")
    );
    assert_eq!(validate_field(Some(&json!("TMA")), tag), None);
    assert_eq!(
        validate_field(Some(&json!("TOOLONG")), tag).as_deref(),
        Some("Team Tag must be at most 5 characters")
    );
    assert_eq!(
        validate_field(Some(&json!("tma")), tag).as_deref(),
        Some("Team Tag has an invalid format")
    );
}

#[test]
fn team_record_reports_every_failing_field() {
    let team = arena::team();
    let report = validate_record(
        &team,
        &record(json!({
            "name": "Hex",
            "tag": "",
            "region": "Mars",
            "logo_url": "not a url",
            "wins": -1,
            "sponsor": "ignored",
        })),
    );

    assert_eq!(report.fields.len(), 4);
    assert_eq!(report.fields["tag"], "Team Tag is required");
    assert_eq!(
        report.fields["region"],
        "Region must be one of: NA, EU, APAC, LATAM, Underworld"
    );
    assert_eq!(report.fields["logo_url"], "Logo URL must be a valid URL");
    assert_eq!(report.fields["wins"], "Wins must be at least 0");
    assert!(!report.fields.contains_key("sponsor"));
}

#[test]
fn match_rule_runs_after_fields_pass() {
    let def = arena::match_();
    let mut data = record(json!({
        "tournament": "t-1",
        "home_team": "team-a",
        "away_team": "team-a",
        "scheduled_at": "2026-10-31T21:00",
    }));

    let report = validate_record(&def, &data);
    assert!(report.fields.is_empty());
    assert_eq!(report.entity.as_deref(), Some("A team cannot play against itself"));

    data.insert("away_team".into(), json!("team-b"));
    assert!(validate_record(&def, &data).is_valid());

    data.remove("scheduled_at");
    let report = validate_record(&def, &data);
    assert_eq!(report.fields.len(), 1);
    assert_eq!(report.entity, None);
}

#[test]
fn tournament_custom_and_record_rules() {
    let def = arena::tournament();
    let base = json!({
        "name": "Night of the Living Bracket",
        "start_date": "2026-10-30",
        "status": "upcoming",
    });

    let mut data = record(base);
    data.insert("max_teams".into(), json!(12));
    assert_eq!(
        validate_record(&def, &data).fields["max_teams"],
        "Max Teams must be a power of two"
    );

    data.insert("max_teams".into(), json!("16"));
    data.insert("end_date".into(), json!("2026-10-01"));
    let report = validate_record(&def, &data);
    assert!(report.fields.is_empty());
    assert_eq!(
        report.entity.as_deref(),
        Some("End Date must not be before Start Date")
    );
}

#[test]
fn player_form_fills_defaults_and_submits() {
    let def = arena::player();
    let mut form = FormModel::new(&def);

    assert_eq!(form.value("rating"), Some(&json!(1000)));
    assert_eq!(form.value("role"), Some(&json!("flex")));
    assert_eq!(form.value("active"), Some(&json!(true)));

    form.set("handle", "xx").unwrap();
    assert_eq!(
        form.blur("handle").unwrap(),
        Some("Handle must be at least 3 characters")
    );

    form.set("handle", "wraith_99").unwrap();
    form.set("email", "wraith@cursed.gg").unwrap();
    let values = form.submit().unwrap();

    assert_eq!(values["handle"], "wraith_99");
    assert!(form.errors().is_empty());
}

#[test]
fn player_table_sorts_by_rating() {
    let def = arena::player();
    let players = [
        json!({ "handle": "banshee", "rating": 2400, "active": true }),
        json!({ "handle": "ghoul", "rating": 1200, "active": false }),
        json!({ "handle": "lich", "team": "team-a", "rating": 2900 }),
    ]
    .into_iter()
    .map(record)
    .collect::<Vec<_>>();

    let table = TableModel::new(&def);
    let headers: Vec<_> = table.columns().into_iter().map(|c| c.label).collect();
    assert_eq!(headers, ["Handle", "Team", "Role", "Rating", "Active"]);

    let rows = table.rows(&players);
    assert_eq!(rows[0].cells, ["lich", "team-a", EMPTY_CELL, "2900", EMPTY_CELL]);
    assert_eq!(rows[1].cells[4], "Yes");
    assert_eq!(rows[2].cells[4], "No");

    let rows = TableModel::new(&def)
        .sorted_by("handle", SortDirection::Asc)
        .rows(&players);
    assert_eq!(rows.iter().map(|r| r.index).collect::<Vec<_>>(), [0, 1, 2]);
}
