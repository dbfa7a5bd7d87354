use crate::{
    application::{
        copy::interface::TreeCopierInterface,
        log::interface::LoggerInterface,
        watcher::{
            DirectoryCreationHandler,
            interface::{EventReceiver, EventSourceInterface},
        },
    },
    cfg::WatchConfiguration,
    infra::{
        copy::walkdir::WalkdirCopier, log::tracing::TracingLogger,
        watcher::notify::NotifyEventSource,
    },
};
use std::future::Future;
use tokio::{io, task::JoinHandle};

/// Wires the event source to the creation handler and keeps the watch alive
/// until shutdown.
pub struct DirectoryMirror<S: EventSourceInterface, L: LoggerInterface, C: TreeCopierInterface> {
    config: WatchConfiguration,
    source: S,
    events: EventReceiver,
    logger: L,
    copier: C,
}

impl DirectoryMirror<NotifyEventSource, TracingLogger, WalkdirCopier> {
    pub fn new_default(config: WatchConfiguration) -> io::Result<Self> {
        let (source, events) = NotifyEventSource::new()?;

        Ok(Self::new(
            config,
            source,
            events,
            TracingLogger,
            WalkdirCopier,
        ))
    }
}

impl<S, L, C> DirectoryMirror<S, L, C>
where
    S: EventSourceInterface,
    L: LoggerInterface + Clone + Send + 'static,
    C: TreeCopierInterface + Send + 'static,
{
    pub fn new(
        config: WatchConfiguration,
        source: S,
        events: EventReceiver,
        logger: L,
        copier: C,
    ) -> Self {
        Self {
            config,
            source,
            events,
            logger,
            copier,
        }
    }

    pub async fn run(self) -> io::Result<()> {
        let shutdown = shutdown_signal()?;
        self.run_until(shutdown).await
    }

    /// Watches until `shutdown` resolves, then stops the source and waits for
    /// every buffered event to be handled.
    pub async fn run_until<F: Future<Output = ()>>(self, shutdown: F) -> io::Result<()> {
        let Self {
            config,
            mut source,
            events,
            logger,
            copier,
        } = self;

        log_configuration(&logger, &config);
        source.start(&config.source_path, config.recursive)?;

        let handler = DirectoryCreationHandler::new(
            config.destination_path.clone(),
            config.debug,
            logger.clone(),
            copier,
        );
        let mut dispatch = spawn_dispatch(handler, events);

        let mut idle = tokio::time::interval(config.poll_interval);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,

                res = &mut dispatch => {
                    res.map_err(io::Error::other)?;
                    return Err(io::Error::other("event source closed while watching"));
                }

                _ = idle.tick() => {}
            }
        }

        // The source is consumed either way, which closes the event channel.
        if let Err(err) = source.stop() {
            logger.error(&format!("Failed to stop watching cleanly: {err}"));
        }
        logger.info("Stopped watching.");

        dispatch.await.map_err(io::Error::other)
    }
}

fn spawn_dispatch<L, C>(
    handler: DirectoryCreationHandler<L, C>,
    mut events: EventReceiver,
) -> JoinHandle<()>
where
    L: LoggerInterface + Send + 'static,
    C: TreeCopierInterface + Send + 'static,
{
    // Copies block, so events are consumed on their own thread one at a time.
    tokio::task::spawn_blocking(move || {
        while let Some(event) = events.blocking_recv() {
            handler.handle(&event);
        }
    })
}

fn log_configuration<L: LoggerInterface>(logger: &L, config: &WatchConfiguration) {
    logger.info(&format!(
        "Watching for new directories in: {}",
        config.source_path.display()
    ));
    logger.info(&format!(
        "New directories will be copied to: {}",
        config.destination_path.display()
    ));
    logger.info(&format!("Recursive watching is set to: {}", config.recursive));
    logger.info(&format!(
        "Observer sleep time is set to: {:?} seconds",
        config.poll_interval.as_secs_f64()
    ));
}

/// Resolves on the first termination signal.
#[cfg(unix)]
pub fn shutdown_signal() -> io::Result<impl Future<Output = ()>> {
    use tokio::signal::{
        self,
        unix::{SignalKind, signal},
    };

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;

    Ok(async move {
        tokio::select! {
            res = signal::ctrl_c() => match res {
                Ok(()) => tracing::info!("Received SIGINT"),
                Err(err) => tracing::error!("Failed to listen for SIGINT: {err}"),
            },
            _ = sigterm.recv() => tracing::info!("Received SIGTERM"),
            _ = sighup.recv() => tracing::info!("Received SIGHUP"),
        }
    })
}

#[cfg(not(unix))]
pub fn shutdown_signal() -> io::Result<impl Future<Output = ()>> {
    use tokio::signal;

    Ok(async move {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received SIGINT"),
            Err(err) => tracing::error!("Failed to listen for SIGINT: {err}"),
        }
    })
}
