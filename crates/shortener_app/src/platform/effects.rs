use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use shortener_core::{Effect, FailureKind, LinkRecord, Msg};
use shortener_gateway::{Gateway, GatewayError, ShortLink};
use shortener_logging::{shortener_error, shortener_info, shortener_warn};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use super::clipboard::Clipboard;

/// Receives outcome messages produced off the UI thread.
pub trait MsgSink: Send + Sync {
    fn send(&self, msg: Msg);
}

/// Executes effects: gateway calls and timers on a tokio runtime, clipboard
/// writes inline on the caller's thread.
pub struct EffectRunner {
    runtime: Runtime,
    gateway: Arc<dyn Gateway>,
    clipboard: Box<dyn Clipboard>,
    sink: Arc<dyn MsgSink>,
    shutdown: CancellationToken,
}

impl EffectRunner {
    pub fn new(
        gateway: Arc<dyn Gateway>,
        clipboard: Box<dyn Clipboard>,
        sink: Arc<dyn MsgSink>,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("shortener-effects")
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            gateway,
            clipboard,
            sink,
            shutdown: CancellationToken::new(),
        })
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ListAll {
                    generation,
                    request,
                } => {
                    let gateway = self.gateway.clone();
                    let sink = self.sink.clone();
                    self.spawn(async move {
                        let result = match gateway.list_all().await {
                            Ok(links) => Ok(links.into_iter().map(to_record).collect()),
                            Err(err) => {
                                shortener_warn!("Loading links failed: {}", err);
                                Err(map_failure(&err))
                            }
                        };
                        sink.send(Msg::ListLoaded {
                            generation,
                            request,
                            result,
                        });
                    });
                }
                Effect::Create {
                    generation,
                    original_url,
                } => {
                    shortener_info!("Create url_len={} url={}", original_url.len(), original_url);
                    let gateway = self.gateway.clone();
                    let sink = self.sink.clone();
                    self.spawn(async move {
                        let result = gateway.create(&original_url).await.map_err(|err| {
                            shortener_warn!("Shortening {} failed: {}", original_url, err);
                            map_failure(&err)
                        });
                        sink.send(Msg::CreateFinished { generation, result });
                    });
                }
                Effect::Delete {
                    generation,
                    short_code,
                } => {
                    shortener_info!("Delete short_code={}", short_code);
                    let gateway = self.gateway.clone();
                    let sink = self.sink.clone();
                    self.spawn(async move {
                        let result = gateway.delete(&short_code).await.map_err(|err| {
                            shortener_warn!("Deleting {} failed: {}", short_code, err);
                            map_failure(&err)
                        });
                        sink.send(Msg::DeleteFinished {
                            generation,
                            short_code,
                            result,
                        });
                    });
                }
                Effect::CopyToClipboard { text } => {
                    if let Err(err) = self.clipboard.set_text(&text) {
                        shortener_error!("Copy to clipboard failed: {}", err);
                    }
                }
                Effect::ScheduleStatusExpiry { id, after } => {
                    let sink = self.sink.clone();
                    self.spawn(async move {
                        tokio::time::sleep(after).await;
                        sink.send(Msg::StatusExpired { id });
                    });
                }
            }
        }
    }

    /// Cancels every in-flight call and timer. Their outcomes are never sent.
    pub fn shutdown(self) {
        self.shutdown.cancel();
        self.runtime.shutdown_timeout(Duration::from_millis(500));
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = self.shutdown.clone();
        self.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = task => {}
            }
        });
    }
}

fn to_record(link: ShortLink) -> LinkRecord {
    LinkRecord {
        id: link.id,
        original_url: link.original_url,
        short_url: link.short_url,
        short_code: link.short_code,
    }
}

fn map_failure(err: &GatewayError) -> FailureKind {
    match err {
        GatewayError::Network(_) | GatewayError::Timeout => FailureKind::NetworkFailure,
        GatewayError::ServerRejected { status } => FailureKind::ServerRejected(*status),
        GatewayError::MalformedResponse(_) => FailureKind::MalformedResponse,
        GatewayError::InvalidBaseUrl(_) | GatewayError::Validation(_) => {
            FailureKind::ValidationFailure
        }
    }
}
