//! Attribute declaration of the `tracker_project` resource

use trackform_cloud::{Attribute, Schema};

pub const SCHEMA_VERSION: u32 = 1;

/// Attributes refreshed from the API on every read
///
/// `status`, `join_as` and the schedule/ownership attributes are sent on
/// create and update but never synced back.
pub const SYNCED_ATTRIBUTES: &[&str] = &[
    "account_id",
    "atom_enabled",
    "automatic_planning",
    "bugs_and_chores_are_estimatable",
    "description",
    "enable_incoming_emails",
    "enable_tasks",
    "initial_velocity",
    "iteration_length",
    "name",
    "number_of_done_iterations_to_show",
    "point_scale",
    "profile_content",
    "project_type",
    "public",
    "velocity_averaged_over",
];

pub fn project_schema() -> Schema {
    Schema::new(SCHEMA_VERSION)
        .with_attribute(
            "name",
            Attribute::required_string().with_description("Project name, at most 50 characters."),
        )
        .with_attribute(
            "status",
            Attribute::optional_string()
                .write_only()
                .with_description("Project status."),
        )
        .with_attribute(
            "description",
            Attribute::optional_string()
                .with_description("Short description of the project content, at most 140 characters."),
        )
        .with_attribute(
            "profile_content",
            Attribute::optional_string().with_description(
                "Long description shown on the project overview page, at most 65535 characters.",
            ),
        )
        .with_attribute(
            "iteration_length",
            Attribute::optional_int()
                .computed()
                .with_description("Number of weeks in an iteration."),
        )
        .with_attribute(
            "week_start_day",
            Attribute::optional_string().write_only().with_description(
                "Day iterations start on: Sunday, Monday, Tuesday, Wednesday, Thursday, Friday \
                 or Saturday. Must agree with start_date when both are given.",
            ),
        )
        .with_attribute(
            "start_date",
            Attribute::optional_string().write_only().with_description(
                "First day of the first iteration as YYYY-MM-DD. Must agree with \
                 week_start_day when both are given.",
            ),
        )
        .with_attribute(
            "time_zone",
            Attribute::optional_string()
                .write_only()
                .with_description("Native time zone of the project (Olson name)."),
        )
        .with_attribute(
            "point_scale",
            Attribute::optional_string().computed().with_description(
                "Comma separated estimate values, at most 255 characters. Built-in scales are \
                 \"0,1,2,3\", \"0,1,2,4,8\" and \"0,1,2,3,5,8\"; anything else is a custom scale.",
            ),
        )
        .with_attribute(
            "bugs_and_chores_are_estimatable",
            Attribute::optional_bool()
                .with_description("Allow estimates on bug and chore stories."),
        )
        .with_attribute(
            "automatic_planning",
            Attribute::optional_bool().computed().with_description(
                "When false, iterations are planned manually instead of from velocity.",
            ),
        )
        .with_attribute(
            "enable_tasks",
            Attribute::optional_bool()
                .computed()
                .with_description("Allow tasks inside stories."),
        )
        .with_attribute(
            "velocity_averaged_over",
            Attribute::optional_int()
                .computed()
                .with_description("Number of iterations averaged to compute velocity."),
        )
        .with_attribute(
            "number_of_done_iterations_to_show",
            Attribute::optional_int()
                .computed()
                .with_description("Maximum number of done iterations loaded in the UI and API."),
        )
        .with_attribute(
            "enable_incoming_emails",
            Attribute::optional_bool().computed().with_description(
                "Turn replies to notification emails into story comments.",
            ),
        )
        .with_attribute(
            "initial_velocity",
            Attribute::optional_int().computed().with_description(
                "Velocity used until enough iterations are done to compute one.",
            ),
        )
        .with_attribute(
            "project_type",
            Attribute::optional_string()
                .computed()
                .with_description("One of demo (deprecated), private, public or shared."),
        )
        .with_attribute(
            "public",
            Attribute::optional_bool()
                .with_description("Anyone on the web may view the project."),
        )
        .with_attribute(
            "atom_enabled",
            Attribute::optional_bool()
                .with_description("Publish an Atom feed of project changes."),
        )
        .with_attribute(
            "account_id",
            Attribute::optional_int()
                .computed()
                .with_description("Account that contains the project."),
        )
        .with_attribute(
            "join_as",
            Attribute::optional_string()
                .write_only()
                .with_description("Default role for joining users: owner, member or viewer."),
        )
        .with_attribute(
            "no_owner",
            Attribute::optional_bool().write_only().with_description(
                "Do not add the authenticated user as owner. Only used on create.",
            ),
        )
        .with_attribute(
            "new_account_name",
            Attribute::optional_string().write_only().with_description(
                "Create a new account with this name for the project, at most 100 characters. \
                 Only used on create.",
            ),
        )
}
