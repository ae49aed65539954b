use std::io;
use tracing::{error, info};

use crate::console::OutputInfo;
use crate::db::error::RepoResult;
use crate::db::models::User;
use crate::service::UserService;

const ALL_USERS: &str = "All users:";

fn describe(user: Option<&User>) -> String {
    user.map_or_else(|| "None".to_string(), User::to_string)
}

/// Unwraps a service result, printing and logging the error instead of
/// aborting the run. Only output failures are propagated.
fn report<T, O: OutputInfo>(
    out: &mut O,
    operation: &str,
    result: RepoResult<T>,
) -> io::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            error!(operation, error = %e, "User operation failed");
            out.show_message(&format!("***Error*** {} failed: {}", operation, e), true)?;
            Ok(None)
        }
    }
}

fn deleted_message(deleted: bool) -> &'static str {
    if deleted { "User deleted" } else { "User not deleted" }
}

/// Runs the fixed create/read/update/list/delete walkthrough.
pub async fn run<O: OutputInfo>(service: &UserService, out: &mut O) -> anyhow::Result<()> {
    info!("Running user demo");

    let john = User::new("John Doe", "johndoe@example.com");
    let created = report(out, "create", service.create(&john).await)?;
    out.show_message(&format!("Created user: {}", describe(created.as_ref())), true)?;

    let found = match &created {
        Some(user) => report(out, "get_by_id", service.get_by_id(user.id()).await)?.flatten(),
        None => None,
    };
    out.show_message(&format!("Found user: {}", describe(found.as_ref())), true)?;

    let saved = match found {
        Some(user) => {
            let renamed = user.with_name("Jane Doe");
            report(out, "update", service.update(&renamed).await)?.flatten()
        }
        None => None,
    };
    out.show_message(&format!("Updated user: {}", describe(saved.as_ref())), true)?;

    let eduardo = User::new("Eduardo Fernandez", "eferoli@gmail.com");
    let created = report(out, "create", service.create(&eduardo).await)?;
    out.show_message(&format!("Created user: {}", describe(created.as_ref())), true)?;

    let users = report(out, "get_all", service.get_all().await)?.unwrap_or_default();
    out.show(&users, ALL_USERS)?;

    let deleted = match &saved {
        Some(user) => report(out, "delete", service.delete(user.id()).await)?.unwrap_or(false),
        None => false,
    };
    out.show_message(deleted_message(deleted), true)?;

    let users = report(out, "get_all", service.get_all().await)?.unwrap_or_default();
    out.show(&users, ALL_USERS)?;

    let deleted = report(out, "delete", service.delete(eduardo.id()).await)?.unwrap_or(false);
    out.show_message(deleted_message(deleted), true)?;

    Ok(())
}
