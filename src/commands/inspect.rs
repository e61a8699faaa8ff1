//! Read-only handlers: list, get, versions

use anyhow::Result;

use deckhand::domain::value_objects::AppId;

use super::Session;

pub fn cmd_list(session: &Session, filter: Option<&str>) -> Result<()> {
    let apps = session.workflow("list")?.list(filter)?;
    session.print(&session.renderer().applications(&apps))
}

pub fn cmd_get(session: &Session, id: &AppId) -> Result<()> {
    let app = session.workflow("get")?.get(id)?;
    session.print(&session.renderer().application(&app))
}

pub fn cmd_versions(session: &Session, id: &AppId) -> Result<()> {
    let history = session.workflow("versions")?.versions(id)?;
    session.print(&session.renderer().versions(id, &history))
}
