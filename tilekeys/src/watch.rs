use std::ffi::OsString;
use std::os::fd::{AsFd, AsRawFd};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use nix::sys::inotify::{AddWatchFlags, InitFlags, Inotify};
use tilekeys_core::config::Snapshot;
use tilekeys_core::session::Session;
use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::{Notify, oneshot};

use crate::config;
use crate::errors::{Error, Result};

/// Wakes up when the config file is written or replaced.
///
/// The directory holding the file is watched rather than the file itself, so
/// editors that save by renaming a new file over the old one are noticed too.
pub struct ConfigWatcher {
    fd: Inotify,
    file_name: OsString,
    task_notify: Arc<Notify>,
    _task_guard: oneshot::Receiver<()>,
}

impl ConfigWatcher {
    /// # Errors
    ///
    /// Errors when inotify cannot be set up for the directory of
    /// `config_file`.
    pub fn new(config_file: &Path) -> Result<Self> {
        const INOTIFY: mio::Token = mio::Token(0);
        let directory = match config_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = config_file.file_name().map(OsString::from).unwrap_or_default();

        let fd = Inotify::init(InitFlags::IN_NONBLOCK | InitFlags::IN_CLOEXEC)?;
        let _wd = fd.add_watch(
            directory,
            AddWatchFlags::IN_CLOSE_WRITE | AddWatchFlags::IN_MOVED_TO,
        )?;

        let (guard, _task_guard) = oneshot::channel::<()>();
        let notify = Arc::new(Notify::new());
        let task_notify = notify.clone();
        let mut poll = mio::Poll::new()?;
        let mut events = mio::Events::with_capacity(1);
        poll.registry().register(
            &mut mio::unix::SourceFd(&fd.as_fd().as_raw_fd()),
            INOTIFY,
            mio::Interest::READABLE,
        )?;
        let timeout = Duration::from_millis(50);
        tokio::task::spawn_blocking(move || {
            loop {
                if guard.is_closed() {
                    return;
                }

                if let Err(err) = poll.poll(&mut events, Some(timeout)) {
                    tracing::warn!("Inotify socket poll failed with {:?}", err);
                    continue;
                }

                events
                    .iter()
                    .filter(|event| INOTIFY == event.token())
                    .for_each(|_| notify.notify_one());
            }
        });
        Ok(Self {
            fd,
            file_name,
            task_notify,
            _task_guard,
        })
    }

    /// Drains the pending events and tells whether one of them was about the
    /// config file.
    pub fn has_changed(&self) -> bool {
        self.fd.read_events().is_ok_and(|events| {
            events
                .iter()
                .any(|event| event.name.as_deref() == Some(self.file_name.as_os_str()))
        })
    }

    /// Wait until readable.
    pub async fn wait_readable(&self) {
        self.task_notify.notified().await;
    }
}

/// Recompiles `config_path` into `output` on SIGHUP and whenever the file
/// changes. Returns on SIGINT or SIGTERM.
pub struct Watcher {
    config_path: PathBuf,
    output: PathBuf,
    session: Session,
}

impl Watcher {
    pub fn new(config_path: PathBuf, output: PathBuf) -> Self {
        Self {
            config_path,
            output,
            session: Session::new(),
        }
    }

    /// How many snapshots have been written so far.
    pub fn generation(&self) -> u64 {
        self.session.generation()
    }

    /// # Errors
    ///
    /// Errors when the first load fails, or when the signal handlers or the
    /// file watch cannot be installed. Later failures are logged and the
    /// previous snapshot stays in place.
    pub async fn run(mut self) -> Error {
        self.apply().await?;

        let watcher = ConfigWatcher::new(&self.config_path)?;
        let mut hangup = signal(SignalKind::hangup())?;
        let mut terminate = signal(SignalKind::terminate())?;

        loop {
            tokio::select! {
                _ = hangup.recv() => {
                    tracing::info!("Reload requested");
                    self.reload().await;
                }
                () = watcher.wait_readable() => {
                    if watcher.has_changed() {
                        tracing::info!("{} changed", self.config_path.display());
                        self.reload().await;
                    }
                }
                _ = terminate.recv() => break,
                _ = tokio::signal::ctrl_c() => break,
            }
        }
        tracing::info!("Stopped watching after {} loads", self.generation());
        Ok(())
    }

    async fn reload(&mut self) {
        if let Err(err) = self.apply().await {
            tracing::error!("Reload failed: {}", err);
        }
    }

    /// Compiles the config and publishes the snapshot. A snapshot only
    /// becomes current once it is on disk.
    ///
    /// # Errors
    ///
    /// Errors when nothing could be published and there is no previous
    /// snapshot to keep.
    pub(crate) async fn apply(&mut self) -> Error {
        let published = match config::load_from(&self.config_path).and_then(|c| c.compile()) {
            Ok(snapshot) => self.publish(snapshot).await,
            Err(err) => Err(err),
        };
        self.session.reload(published)?;
        Ok(())
    }

    async fn publish(&self, snapshot: Snapshot) -> Result<Snapshot> {
        write_snapshot(&self.output, &snapshot.to_ron()?).await?;
        tracing::info!("Wrote {}", self.output.display());
        Ok(snapshot)
    }
}

/// Replaces `output` with `contents` through a rename, so readers never see
/// a partial snapshot.
pub async fn write_snapshot(output: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = output.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let partial = output.with_extension("ron.partial");
    let written = match tokio::fs::write(&partial, contents).await {
        Ok(()) => tokio::fs::rename(&partial, output).await,
        Err(err) => Err(err),
    };
    if written.is_err() {
        let _ = tokio::fs::remove_file(&partial).await;
    }
    Ok(written?)
}
