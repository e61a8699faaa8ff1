//! Rollback command handler
//!
//! Without an explicit version, rolls back to the previous entry of the
//! application's version history.

use anyhow::Result;

use deckhand::domain::value_objects::AppId;
use deckhand::presentation::WaitArgs;

use super::Session;

pub fn cmd_rollback(
    session: &Session,
    id: &AppId,
    version: Option<&str>,
    wait: &WaitArgs,
) -> Result<()> {
    let workflow = session.workflow("rollback")?;
    let submission = workflow.rollback(id, version, wait.wait, wait.timeout)?;
    session.print(&session.renderer().submission("rollback", &submission))?;
    session.annotate_wait("rollback", submission.wait.as_ref());
    Ok(())
}
