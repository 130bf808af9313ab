//! Polling watch-and-sync
//!
//! Mirrors a package's source tree into a project's local install, one tick
//! per interval per package, until cancelled or the package manifest changes.

mod cancel;
mod event;
mod reporter;
mod scheduler;
mod session;

pub use cancel::CancellationToken;
pub use event::{SyncAction, SyncEvent, TickOutcome, TickStats, WatchExit, WatchOptions};
pub use reporter::ChangeReporter;
pub use scheduler::{Scheduler, POLL_SLICE};
pub use session::SyncSession;

use crate::domain::entities::ResolvedPackage;
use crate::error::SlinkResult;

/// Watch `packages` until `cancel` fires or a manifest changes.
///
/// The marker file is written into every destination before the first tick.
pub fn watch<F>(
    packages: Vec<ResolvedPackage>,
    options: &WatchOptions,
    cancel: &CancellationToken,
    mut sink: F,
) -> SlinkResult<WatchExit>
where
    F: FnMut(SyncEvent),
{
    let mut sessions = Vec::with_capacity(packages.len());
    for package in packages {
        let session = SyncSession::new(package, options);
        session.mark_destination()?;
        sessions.push(session);
    }

    let mut scheduler = Scheduler::new(sessions, options.interval);
    Ok(scheduler.run(cancel, &mut sink))
}
