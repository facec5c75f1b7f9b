use crate::ai::GeminiBackend;
use crate::config::AppConfig;
use crate::session::{GenerationSession, Orchestrator};
use crate::theme::APP_STYLES;
use crate::views::{ComposerPanel, PreviewPanel};
use dioxus::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> Element {
    let orchestrator = use_context_provider(|| {
        let config = AppConfig::from_env();
        let backend = Arc::new(GeminiBackend::from_config(&config));
        Arc::new(Orchestrator::with_backend(backend, &config))
    });
    let session = use_signal(GenerationSession::default);

    use_session_sync(orchestrator, session);

    rsx! {
        style { dangerous_inner_html: "{APP_STYLES}" }
        div { class: "app",
            ComposerPanel { session }
            PreviewPanel { session }
        }
    }
}

/// Mirrors every orchestrator state change into the `session` signal.
fn use_session_sync(orchestrator: Arc<Orchestrator>, session: Signal<GenerationSession>) {
    use_future(move || {
        let mut receiver = orchestrator.subscribe();
        let mut session = session;
        async move {
            while receiver.changed().await.is_ok() {
                let snapshot = receiver.borrow_and_update().clone();
                session.set(snapshot);
            }
        }
    });
}
