//! Terminal rendering for the dashboard and the user list.

use comfy_table::{ContentArrangement, Table};
use serde_json::Value;
use session::UserSummary;
use session::dashboard::{Badge, DashboardView, PLACEHOLDER};

/// Render the dashboard as a two-column field/value table.
pub fn dashboard(view: &DashboardView) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Username", view.username.as_str()]);
    table.add_row(vec!["Email", view.email.as_str()]);
    table.add_row(vec!["User ID", view.user_id.as_str()]);
    table.add_row(vec!["Email status", badge(view.confirmed).as_str()]);
    table.add_row(vec!["Account status", badge(view.status).as_str()]);
    table.add_row(vec!["Role", view.role_name.as_str()]);
    table.add_row(vec!["Role type", view.role_type.as_str()]);
    table.add_row(vec!["Role ID", view.role_id.as_str()]);
    table.add_row(vec!["Role description", view.role_description.as_str()]);
    format!("Welcome back, {}\n{table}", view.username)
}

/// Render the `users` query result.
pub fn users(rows: &[UserSummary]) -> String {
    if rows.is_empty() {
        return "No users.".to_owned();
    }
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Email", "Role", "Confirmed", "Created"]);
    for row in rows {
        table.add_row(vec![
            row.id.clone(),
            row.name.clone().unwrap_or_else(|| PLACEHOLDER.to_owned()),
            row.email.clone(),
            role_label(row.role.as_ref()),
            if row.confirmed { "yes" } else { "no" }.to_owned(),
            row.created_at.clone().unwrap_or_else(|| PLACEHOLDER.to_owned()),
        ]);
    }
    table.to_string()
}

fn badge(badge: Badge) -> String {
    let mark = if badge.positive { '+' } else { '!' };
    format!("{mark} {}", badge.label)
}

/// Roles come back either as a scalar or as an object with a `name`.
fn role_label(role: Option<&Value>) -> String {
    match role {
        None | Some(Value::Null) => PLACEHOLDER.to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(map)) => map
            .get("name")
            .and_then(Value::as_str)
            .map_or_else(|| Value::Object(map.clone()).to_string(), str::to_owned),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
