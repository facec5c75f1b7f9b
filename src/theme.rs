/// Single stylesheet for the composer panel and the phone preview.
pub const APP_STYLES: &str = r#"
:root {
    --color-bg-primary: #fdfdfd;
    --color-bg-preview: #f9fafb;
    --color-text-primary: #1f2937;
    --color-text-muted: #9ca3af;
    --color-border: #f3f4f6;
    --color-accent: #f43f5e;
    --color-accent-hover: #e11d48;
    --color-accent-soft: #fff1f2;
    --color-error-bg: #fef2f2;
    --color-error-text: #ef4444;
    --color-tag-text: #133c65;
    --color-tag-bg: #eff6ff;
}
* { box-sizing: border-box; }
body { margin: 0; background: var(--color-bg-primary); color: var(--color-text-primary); font-family: -apple-system, "PingFang SC", "Helvetica Neue", sans-serif; }
.app { display: flex; min-height: 100vh; }
.composer-panel { width: 42%; padding: 3rem; display: flex; flex-direction: column; gap: 1.5rem; border-right: 1px solid var(--color-border); overflow-y: auto; height: 100vh; }
.brand { color: var(--color-accent); font-weight: 700; font-size: 1.25rem; }
.headline { font-size: 2.25rem; font-weight: 800; line-height: 1.15; margin: 0; }
.headline .accent { color: var(--color-accent); }
.lede { color: #6b7280; font-size: 1.05rem; }
.idea-input { width: 100%; height: 12rem; padding: 1.5rem; border: 2px solid var(--color-border); border-radius: 1.5rem; resize: none; font-size: 1.05rem; }
.idea-input:focus { outline: none; border-color: var(--color-accent); }
.shortcut-hint { font-size: 0.75rem; color: #d1d5db; text-align: right; }
.generate-btn { width: 100%; padding: 1rem; border: none; border-radius: 999px; font-weight: 700; font-size: 1.05rem; background: var(--color-accent); color: #fff; cursor: pointer; }
.generate-btn:hover { background: var(--color-accent-hover); }
.generate-btn:disabled { background: #f3f4f6; color: var(--color-text-muted); cursor: not-allowed; }
.error-panel { background: var(--color-error-bg); color: var(--color-error-text); padding: 1rem; border-radius: 0.75rem; font-size: 0.875rem; }
.preview-panel { flex: 1; background: var(--color-bg-preview); display: flex; align-items: center; justify-content: center; padding: 3rem; }
.preview-column { width: 100%; max-width: 400px; display: flex; flex-direction: column; gap: 1.5rem; align-items: center; }
.placeholder { color: var(--color-text-muted); text-align: center; }
.placeholder .pulse { color: var(--color-accent); animation: pulse 1.5s infinite; }
.phone { width: 100%; max-height: 850px; background: #fff; border: 6px solid #111827; border-radius: 32px; overflow: hidden; display: flex; flex-direction: column; }
.phone-status { height: 2.5rem; display: flex; align-items: center; padding: 0 1.5rem; font-size: 12px; font-weight: 700; border-bottom: 1px solid var(--color-border); }
.phone-scroll { flex: 1; overflow-y: auto; background: var(--color-bg-preview); padding: 1rem; display: flex; flex-direction: column; gap: 1rem; }
.card { position: relative; width: 100%; aspect-ratio: 3 / 4; background: #fff; border-radius: 0.75rem; overflow: hidden; }
.cover img { width: 100%; height: 100%; object-fit: cover; }
.cover-overlay { position: absolute; inset: 0; display: flex; flex-direction: column; justify-content: flex-end; padding: 1.5rem; background: linear-gradient(to top, rgba(0,0,0,0.6), transparent 60%); }
.cover-title { color: #fff; font-size: 1.25rem; font-weight: 700; margin: 0; }
.cover-loading { width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; background: #e5e7eb; color: var(--color-text-muted); }
.card-action { position: absolute; top: 0.75rem; right: 0.75rem; border: none; border-radius: 999px; padding: 0.4rem 0.6rem; background: rgba(0,0,0,0.4); color: #fff; cursor: pointer; font-size: 0.75rem; }
.slide-backdrop { position: absolute; inset: 0; background-size: cover; background-position: center; opacity: 0.3; filter: blur(4px); }
.slide-body { position: relative; height: 100%; padding: 1.5rem; display: flex; flex-direction: column; background: rgba(255,255,255,0.8); }
.slide-header { display: flex; justify-content: space-between; font-size: 10px; font-weight: 700; color: var(--color-accent); letter-spacing: 0.1em; text-transform: uppercase; margin-bottom: 1rem; }
.slide-lines { flex: 1; display: flex; flex-direction: column; justify-content: center; gap: 0.75rem; overflow: hidden; }
.slide-line { margin: 0; font-size: 0.875rem; line-height: 1.6; color: #374151; }
.slide-line.heading { font-size: 1.125rem; font-weight: 900; color: #111827; }
.highlight { background: var(--color-accent); color: #fff; padding: 0.1rem 0.25rem; margin: 0 0.1rem; border-radius: 4px; font-weight: 700; font-size: 0.75rem; }
.slide-footer { display: flex; justify-content: space-between; font-size: 9px; color: var(--color-text-muted); text-transform: uppercase; letter-spacing: 0.1em; border-top: 1px solid rgba(209,213,219,0.5); padding-top: 0.5rem; }
.tags-card { background: #fff; padding: 1rem; border-radius: 0.75rem; }
.tag { display: inline-block; margin: 0 0.5rem 0.5rem 0; color: var(--color-tag-text); background: var(--color-tag-bg); font-size: 0.75rem; padding: 0.25rem 0.5rem; border-radius: 0.25rem; }
.copy-all { width: 100%; margin-top: 0.5rem; padding: 0.5rem; border: none; border-radius: 0.5rem; background: #f9fafb; color: #4b5563; font-weight: 700; font-size: 0.75rem; cursor: pointer; }
.style-strip { width: 100%; background: #fff; border-radius: 1rem; padding: 1rem; }
.style-strip-title { font-size: 0.875rem; font-weight: 700; margin-bottom: 0.75rem; }
.style-thumbs { display: flex; gap: 0.75rem; overflow-x: auto; }
.style-thumb { width: 3.5rem; height: 4.5rem; padding: 0; border: none; border-radius: 0.5rem; overflow: hidden; opacity: 0.7; cursor: pointer; }
.style-thumb.active { opacity: 1; outline: 2px solid var(--color-accent); outline-offset: 1px; }
.style-thumb img { width: 100%; height: 100%; object-fit: cover; }
.disclaimer { font-size: 0.75rem; color: var(--color-text-muted); }
.toast { font-size: 0.75rem; color: var(--color-accent); }
@keyframes pulse { 50% { opacity: 0.4; } }
"#;
