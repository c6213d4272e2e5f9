use serde_json::json;
use spectral::{
    error::{SchemaErrorKind, ThemeErrorKind},
    prelude::*,
};

fn arena() -> EntityRegistry {
    spectral_demo_arena::registry().unwrap()
}

#[test]
fn registry_lookup_feeds_validation() {
    let registry = arena();
    let team = registry.get("team").unwrap();

    let tag = team.get_field("tag").unwrap();
    assert_eq!(
        validate_field(Some(&json!("T")), tag).as_deref(),
        Some("Team Tag must be at least 2 characters")
    );
    assert_eq!(validate_field(Some(&json!("TMA")), tag), None);

    let missing = registry.require("sponsor").unwrap_err();
    let err: Error = missing.into();
    assert_eq!(err.kind, ErrorKind::Schema(SchemaErrorKind::NotFound));
}

#[test]
fn record_failures_convert_to_public_errors() {
    let registry = arena();
    let player = registry.get("player").unwrap();

    let mut data = json!({ "handle": "no", "email": "ghost" })
        .as_object()
        .cloned()
        .unwrap();
    apply_defaults(player, &mut data);

    let err: Error = validate_record(player, &data)
        .into_result(&player.name)
        .unwrap_err()
        .into();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.origin, ErrorOrigin::Entity);
    assert_eq!(
        err.message,
        "player failed validation: Email must be a valid email address; \
         Handle must be at least 3 characters"
    );
}

#[test]
fn clinic_appointment_status_flow() {
    let clinic = spectral_demo_clinic::registry().unwrap();
    let def = clinic.get("appointment").unwrap();

    let mut manager = StatusManager::new(Appointment::new("apt-1"));
    let options: Vec<_> = manager.options().iter().map(ToString::to_string).collect();
    assert_eq!(options, ["confirmed", "cancelled"]);
    for option in &options {
        assert!(def.get_field("status").unwrap().options().unwrap().contains(option));
    }

    let err: Error = manager
        .apply(AppointmentStatus::Completed, None, |_, _| Ok::<(), String>(()))
        .unwrap_err()
        .into();
    assert_eq!(err.kind, ErrorKind::Transition);
    assert_eq!(manager.appointment().status(), AppointmentStatus::Scheduled);
}

#[test]
fn theme_selection_with_configured_default() {
    let config = SpectralConfig::from_toml_str("[theme]\ndefault_theme = \"haunted-clinic\"\n").unwrap();
    let registry = ThemeRegistry::builtin(&config.theme).unwrap();
    let mut selector = ThemeSelector::new(&registry, MemoryPreferenceStore::new(), &config.theme);

    assert_eq!(selector.active().id, "haunted-clinic");

    let err: Error = selector.select("vaporwave").unwrap_err().into();
    assert_eq!(err.kind, ErrorKind::Theme(ThemeErrorKind::NotFound));

    let bad: Error = SpectralConfig::from_toml_str("[theme]\nfavorite = 1\n")
        .unwrap_err()
        .into();
    assert_eq!(bad.kind, ErrorKind::Config);
}

#[test]
fn version_is_exported() {
    assert!(!spectral::VERSION.is_empty());
}
