//! Update command handler
//!
//! Patches one resource attribute (cpu, mem or instances) in place.

use anyhow::Result;

use deckhand::domain::value_objects::ResourceField;
use deckhand::presentation::UpdateCommand;

use super::Session;

pub fn cmd_update(session: &Session, command: UpdateCommand) -> Result<()> {
    let (id, field, value, wait) = match command {
        UpdateCommand::Cpu { id, value, wait } => (id, ResourceField::Cpu, value, wait),
        UpdateCommand::Mem { id, value, wait } => (id, ResourceField::Memory, value, wait),
        UpdateCommand::Instances { id, count, wait } => (id, ResourceField::Instances, count, wait),
    };

    let workflow = session.workflow("update")?;
    let submission = workflow.update_resource(&id, field, &value, wait.wait, wait.timeout)?;

    session.print(&session.renderer().submission("update", &submission))?;
    session.annotate_wait("update", submission.wait.as_ref());
    Ok(())
}
