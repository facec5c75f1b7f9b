use crate::content::{assemble_document, slide_header};
use crate::export;
use crate::preview::{ImageSelection, PostPreview, RenderedSlide};
use crate::session::GenerationSession;
use crate::types::LoadingStage;
use dioxus::prelude::*;

const COVER_FILE_STEM: &str = "xhs-cover";

fn outcome_notice<T>(result: anyhow::Result<T>, success: &str) -> String {
    match result {
        Ok(_) => success.to_string(),
        Err(err) => {
            tracing::warn!(%err, "export failed");
            format!("操作失败：{err}")
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_cover(uri: &str) -> anyhow::Result<()> {
    export::download_image(uri, COVER_FILE_STEM).map(|_| ())
}

#[cfg(target_arch = "wasm32")]
fn save_cover(uri: &str) -> anyhow::Result<()> {
    let at = time::OffsetDateTime::now_utc();
    let file_name = export::download_file_name(uri, COVER_FILE_STEM, at)?;
    document::eval(&export::anchor_download_script(uri, &file_name));
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    export::copy_text(text)
}

#[cfg(target_arch = "wasm32")]
fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    document::eval(&export::clipboard_script(text));
    Ok(())
}

fn line_class(is_heading: bool) -> &'static str {
    if is_heading {
        "slide-line heading"
    } else {
        "slide-line"
    }
}

fn thumb_class(selected: usize, index: usize) -> &'static str {
    if selected == index {
        "style-thumb active"
    } else {
        "style-thumb"
    }
}

#[component]
pub fn PreviewPanel(session: Signal<GenerationSession>) -> Element {
    let mut selection = use_signal(ImageSelection::default);
    let notice = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let images = session.read().images.clone();
        selection.write().sync(&images);
    });

    let snapshot = session();
    let body = match snapshot.post.as_ref() {
        Some(post) => {
            let preview = PostPreview::build(post, &snapshot.images, &selection.read());
            rsx! {
                PhonePreview { preview, document: assemble_document(post), notice }
                if !snapshot.images.is_empty() {
                    StyleStrip { images: snapshot.images.clone(), selection }
                }
                if let Some(message) = notice() {
                    p { class: "toast", "{message}" }
                }
                p { class: "disclaimer", "AI 生成内容仅供参考" }
            }
        }
        None => rsx! {
            PreviewPlaceholder { stage: snapshot.stage }
        },
    };

    rsx! {
        div { class: "preview-panel",
            div { class: "preview-column", {body} }
        }
    }
}

#[component]
fn PreviewPlaceholder(stage: LoadingStage) -> Element {
    let loading_label = match stage {
        LoadingStage::GeneratingText => Some("正在规划笔记分页..."),
        LoadingStage::GeneratingImage => Some("正在生成精美封面..."),
        _ => None,
    };
    rsx! {
        div { class: "placeholder",
            if let Some(label) = loading_label {
                p { class: "pulse", "✨ {label}" }
            } else {
                p { "输入灵感，生成图文笔记" }
                p { "自动生成 3:4 封面 + 分页文字图" }
            }
        }
    }
}

#[component]
fn PhonePreview(preview: PostPreview, document: String, notice: Signal<Option<String>>) -> Element {
    let total = preview.slides.len();
    rsx! {
        div { class: "phone",
            div { class: "phone-status", "9:41" }
            div { class: "phone-scroll",
                CoverCard { title: preview.title.clone(), cover: preview.cover.clone(), notice }
                for (index, slide) in preview.slides.iter().enumerate() {
                    SlideCard {
                        key: "{index}",
                        slide: slide.clone(),
                        index,
                        total,
                        cover: preview.cover.clone(),
                        notice,
                    }
                }
                TagsCard { tags: preview.tags.clone(), document, notice }
            }
        }
    }
}

#[component]
fn CoverCard(title: String, cover: Option<String>, notice: Signal<Option<String>>) -> Element {
    let mut notice = notice;
    match cover {
        Some(uri) => {
            let download_uri = uri.clone();
            rsx! {
                div { class: "card cover",
                    img { src: "{uri}", alt: "Cover" }
                    div { class: "cover-overlay",
                        h1 { class: "cover-title", "{title}" }
                    }
                    button {
                        class: "card-action",
                        r#type: "button",
                        title: "下载封面",
                        onclick: move |ev| {
                            ev.stop_propagation();
                            let result = save_cover(&download_uri);
                            notice.set(Some(outcome_notice(result, "封面已下载！")));
                        },
                        "下载"
                    }
                }
            }
        }
        None => rsx! {
            div { class: "card cover",
                div { class: "cover-loading", "Loading Cover..." }
            }
        },
    }
}

#[component]
fn SlideCard(
    slide: RenderedSlide,
    index: usize,
    total: usize,
    cover: Option<String>,
    notice: Signal<Option<String>>,
) -> Element {
    let mut notice = notice;
    let (step, counter) = slide_header(index, total);
    let copy_payload = slide.text.clone();
    rsx! {
        div { class: "card",
            if let Some(uri) = cover {
                div { class: "slide-backdrop", style: "background-image: url({uri})" }
            }
            div { class: "slide-body",
                div { class: "slide-header",
                    span { "{step}" }
                    span { "{counter}" }
                }
                div { class: "slide-lines",
                    for line in slide.lines.iter() {
                        p { class: line_class(line.is_heading),
                            for segment in line.segments.iter() {
                                if segment.emphasized {
                                    span { class: "highlight", "{segment.text}" }
                                } else {
                                    "{segment.text}"
                                }
                            }
                        }
                    }
                }
                button {
                    class: "card-action",
                    r#type: "button",
                    title: "复制本页文字",
                    onclick: move |_| {
                        let result = copy_to_clipboard(&copy_payload);
                        notice.set(Some(outcome_notice(result, "文案已复制到剪贴板！")));
                    },
                    "复制"
                }
                div { class: "slide-footer",
                    span { "XHS Copilot" }
                    span { "Swipe for more" }
                }
            }
        }
    }
}

#[component]
fn TagsCard(tags: Vec<String>, document: String, notice: Signal<Option<String>>) -> Element {
    let mut notice = notice;
    rsx! {
        div { class: "tags-card",
            for tag in tags.iter() {
                span { class: "tag", "{tag}" }
            }
            button {
                class: "copy-all",
                r#type: "button",
                onclick: move |_| {
                    let result = copy_to_clipboard(&document);
                    notice.set(Some(outcome_notice(result, "全部文案已复制！")));
                },
                "复制全部文案 & 标签"
            }
        }
    }
}

#[component]
fn StyleStrip(images: Vec<String>, selection: Signal<ImageSelection>) -> Element {
    let mut selection = selection;
    let selected = selection.read().index();
    let heading = format!("更换主题风格 ({})", images.len());
    rsx! {
        div { class: "style-strip",
            div { class: "style-strip-title", "{heading}" }
            div { class: "style-thumbs",
                for (index, image) in images.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: thumb_class(selected, index),
                        r#type: "button",
                        onclick: move |_| {
                            selection.write().select(index);
                        },
                        img { src: "{image}", alt: format!("Style {}", index + 1) }
                    }
                }
            }
        }
    }
}
