//! Scale, restart and destroy handlers
//!
//! These operations return only a deployment handle.

use anyhow::Result;

use deckhand::domain::value_objects::AppId;
use deckhand::presentation::WaitArgs;

use super::Session;

pub fn cmd_scale(session: &Session, id: &AppId, count: &str, wait: &WaitArgs) -> Result<()> {
    let workflow = session.workflow("scale")?;
    let result = workflow.scale(id, count, wait.wait, wait.timeout)?;
    session.print(&session.renderer().deployment("scale", id, &result))?;
    session.annotate_wait("scale", result.wait.as_ref());
    Ok(())
}

pub fn cmd_restart(session: &Session, id: &AppId, force: bool, wait: &WaitArgs) -> Result<()> {
    let workflow = session.workflow("restart")?;
    let result = workflow.restart(id, force, wait.wait, wait.timeout)?;
    session.print(&session.renderer().deployment("restart", id, &result))?;
    session.annotate_wait("restart", result.wait.as_ref());
    Ok(())
}

pub fn cmd_destroy(session: &Session, id: &AppId, wait: &WaitArgs) -> Result<()> {
    let workflow = session.workflow("destroy")?;
    let result = workflow.destroy(id, wait.wait, wait.timeout)?;
    session.print(&session.renderer().deployment("destroy", id, &result))?;
    session.annotate_wait("destroy", result.wait.as_ref());
    Ok(())
}
