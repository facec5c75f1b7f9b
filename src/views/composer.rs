use crate::session::{GenerationSession, IMAGE_VARIATIONS, Orchestrator};
use dioxus::events::Key;
use dioxus::prelude::*;
use std::sync::Arc;

const IDEA_PLACEHOLDER: &str =
    "例如：想写一篇关于如何在家制作手冲咖啡的教程，要非常详细步骤，适合新手...";

#[component]
pub fn ComposerPanel(session: Signal<GenerationSession>) -> Element {
    let orchestrator = use_context::<Arc<Orchestrator>>();
    let mut idea = use_signal(String::new);

    let generate = use_callback(move |_: ()| {
        let orchestrator = orchestrator.clone();
        let text = idea();
        spawn(async move {
            let outcome = orchestrator.trigger(&text).await;
            tracing::debug!(?outcome, "trigger settled");
        });
    });

    let snapshot = session();
    let is_loading = snapshot.is_loading();
    let blank = idea().trim().is_empty();
    let lede = format!(
        "输入你的简单想法，AI 帮你生成保姆级 Step-by-Step 教程，并自动绘制 {IMAGE_VARIATIONS} 张可选配图。"
    );

    rsx! {
        div { class: "composer-panel",
            header {
                div { class: "brand", "✨ XHS Copilot" }
                h1 { class: "headline",
                    "灵感生成"
                    br {}
                    span { class: "accent", "爆款笔记" }
                }
                p { class: "lede", "{lede}" }
            }
            div {
                textarea {
                    class: "idea-input",
                    placeholder: IDEA_PLACEHOLDER,
                    value: "{idea}",
                    disabled: is_loading,
                    oninput: move |ev| idea.set(ev.value()),
                    onkeydown: move |ev| {
                        let modifiers = ev.modifiers();
                        if ev.key() == Key::Enter && (modifiers.meta() || modifiers.ctrl()) {
                            ev.prevent_default();
                            generate.call(());
                        }
                    },
                }
                div { class: "shortcut-hint", "⌘ + Enter 发送" }
            }
            button {
                class: "generate-btn",
                r#type: "button",
                disabled: is_loading || blank,
                onclick: move |_| generate.call(()),
                if let Some(label) = snapshot.stage_label() {
                    "{label}"
                } else {
                    "✨ 立即生成"
                }
            }
            if let Some(error) = snapshot.error.clone() {
                div { class: "error-panel", "{error}" }
            }
        }
    }
}
