//! Haunted Clinic: patients, doctors and the appointments between them.

use spectral_schema::{
    SchemaError,
    node::{EntityDefinition, Feature, FieldDefinition, Permissions, SortDirection},
    registry::EntityRegistry,
};

/// Appointment status literals, in lifecycle order.
pub const APPOINTMENT_STATUSES: [&str; 6] = [
    "scheduled",
    "confirmed",
    "in-progress",
    "completed",
    "cancelled",
    "no-show",
];

pub const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const SPECIALTIES: [&str; 5] = [
    "General Practice",
    "Cardiology",
    "Neurology",
    "Exorcism",
    "Pediatrics",
];

#[must_use]
pub fn patient() -> EntityDefinition {
    EntityDefinition::new("patient")
        .icon("user")
        .field(
            FieldDefinition::text("name", "Full Name")
                .required()
                .min_length(2)
                .max_length(100),
        )
        .field(FieldDefinition::text("email", "Email").email())
        .field(FieldDefinition::text("phone", "Phone").pattern(r"^\+?[0-9 ()\-]{7,20}$"))
        .field(FieldDefinition::date("date_of_birth", "Date of Birth").required())
        .field(FieldDefinition::enumeration("blood_type", "Blood Type", BLOOD_TYPES))
        .field(FieldDefinition::boolean("insured", "Insured").default_value(false))
        .permissions(
            Permissions::new()
                .read(["admin", "doctor", "receptionist"])
                .write(["admin", "receptionist"])
                .delete(["admin"]),
        )
        .columns(["name", "date_of_birth", "phone", "insured"])
        .sort_by("name", SortDirection::Asc)
}

#[must_use]
pub fn doctor() -> EntityDefinition {
    EntityDefinition::new("doctor")
        .icon("stethoscope")
        .field(FieldDefinition::text("name", "Full Name").required().min_length(2))
        .field(FieldDefinition::text("email", "Email").required().email())
        .field(FieldDefinition::enumeration("specialty", "Specialty", SPECIALTIES).required())
        .field(
            FieldDefinition::text("license", "License Number")
                .required()
                .pattern("^[A-Z]{2}-[0-9]{6}$"),
        )
        .field(
            FieldDefinition::number("years_experience", "Years of Experience")
                .min(0.0)
                .max(70.0),
        )
        .permissions(
            Permissions::new()
                .read(["admin", "doctor", "receptionist"])
                .write(["admin"])
                .delete(["admin"]),
        )
        .columns(["name", "specialty", "years_experience"])
        .sort_by("name", SortDirection::Asc)
}

#[must_use]
pub fn appointment() -> EntityDefinition {
    EntityDefinition::new("appointment")
        .icon("calendar")
        .field(FieldDefinition::reference("patient", "Patient", "patient").required())
        .field(FieldDefinition::reference("doctor", "Doctor", "doctor").required())
        .field(FieldDefinition::date("scheduled_at", "Scheduled At").required())
        .field(
            FieldDefinition::number("duration", "Duration (minutes)")
                .min(15.0)
                .max(240.0)
                .default_value(30),
        )
        .field(
            FieldDefinition::enumeration("status", "Status", APPOINTMENT_STATUSES)
                .required()
                .read_only()
                .default_value("scheduled"),
        )
        .field(FieldDefinition::text("reason", "Reason for Visit").max_length(500))
        .field(FieldDefinition::text("notes", "Notes").max_length(2000))
        .permissions(
            Permissions::new()
                .read(["admin", "doctor", "receptionist", "patient"])
                .write(["admin", "doctor", "receptionist"])
                .delete(["admin"]),
        )
        .features([
            Feature::List,
            Feature::Create,
            Feature::Edit,
            Feature::Detail,
            Feature::Export,
        ])
        .columns(["scheduled_at", "patient", "doctor", "status"])
        .sort_by("scheduled_at", SortDirection::Asc)
}

/// Every Haunted Clinic definition, validated as one registry.
pub fn registry() -> Result<EntityRegistry, SchemaError> {
    EntityRegistry::from_definitions([patient(), doctor(), appointment()])
}

///
/// TESTS
///
