/// Studio palette and layout. Injected once by the app shell.
pub const STUDIO_CSS: &str = r#"
:root {
    --studio-900: #0b0f19;
    --studio-800: #131a2a;
    --studio-700: #1e2738;
    --studio-600: #2b364d;
    --studio-500: #5b6b8c;
    --studio-400: #8593b0;
    --studio-300: #aab6cf;
    --studio-accent: #00d2ff;
    --studio-danger: #ef4444;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    background: var(--studio-900);
    color: #f3f4f6;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
}
.studio { display: flex; height: 100vh; overflow: hidden; }

.wizard { width: 20rem; flex-shrink: 0; display: flex; flex-direction: column; background: var(--studio-800); border-right: 1px solid var(--studio-700); }
.wizard-header { padding: 1.5rem; border-bottom: 1px solid var(--studio-700); }
.wizard-header h1 { margin: 0; font-size: 1.1rem; }
.wizard-header span { font-size: 0.65rem; color: var(--studio-400); letter-spacing: 0.2em; text-transform: uppercase; }
.wizard-body { flex: 1; overflow-y: auto; padding: 1.5rem; }
.wizard-section-title { font-size: 0.7rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.08em; color: var(--studio-500); margin-bottom: 1rem; }
.wizard-step { display: flex; align-items: center; gap: 0.75rem; padding: 0.6rem 0.5rem; border-radius: 8px; color: var(--studio-500); }
.wizard-step.completed { color: var(--studio-300); }
.wizard-step.active { color: #fff; background: rgba(30, 39, 56, 0.5); }
.step-marker { width: 1.1rem; text-align: center; color: var(--studio-accent); }
.wizard-options { margin-top: 2rem; }
.wizard-options-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.75rem; }
.step-badge { font-size: 0.65rem; padding: 0.1rem 0.5rem; border-radius: 999px; background: rgba(0, 210, 255, 0.1); color: var(--studio-accent); }
.wizard-description { font-size: 0.75rem; color: var(--studio-300); margin-bottom: 1rem; }
.quick-option { display: flex; align-items: center; gap: 0.75rem; width: 100%; padding: 0.75rem; margin-bottom: 0.5rem; background: var(--studio-700); border: 1px solid transparent; border-radius: 8px; color: #e5e7eb; text-align: left; cursor: pointer; }
.quick-option:hover { background: var(--studio-600); border-color: var(--studio-500); }
.quick-option:disabled { opacity: 0.5; cursor: not-allowed; }
.quick-option .icon { font-size: 1.25rem; }
.wizard-footer { padding: 1rem; border-top: 1px solid var(--studio-700); font-size: 0.65rem; color: var(--studio-500); text-align: center; letter-spacing: 0.05em; }

.chat { flex: 1; display: flex; flex-direction: column; height: 100%; }
.chat-list { flex: 1; overflow-y: auto; padding: 2rem; }
.message-row { display: flex; margin-bottom: 1.5rem; }
.message-row.user { justify-content: flex-end; }
.bubble { max-width: 90%; padding: 0.75rem 1.25rem; border-radius: 1rem; font-size: 0.9rem; line-height: 1.6; }
.bubble.user { background: var(--studio-600); border-top-right-radius: 0; }
.bubble.assistant { background: var(--studio-800); border: 1px solid var(--studio-700); border-top-left-radius: 0; }
.bubble img { max-width: 20rem; border-radius: 8px; display: block; margin-bottom: 0.75rem; }
.preview-frame { border: 1px solid rgba(0, 210, 255, 0.5); border-radius: 8px; overflow: hidden; margin-bottom: 1rem; }
.preview-caption { font-size: 0.7rem; color: var(--studio-400); padding: 0.25rem 0.5rem; background: var(--studio-900); }
.thinking { color: var(--studio-300); }
.message-meta { font-size: 0.7rem; color: var(--studio-500); margin-top: 0.25rem; display: flex; gap: 0.5rem; }
.action-btn { background: none; border: none; color: var(--studio-400); cursor: pointer; font-size: 0.7rem; padding: 0; }

.composer { padding: 1.5rem; border-top: 1px solid var(--studio-700); background: rgba(11, 15, 25, 0.95); position: relative; }
.attachment { position: absolute; bottom: 100%; margin-bottom: 1rem; padding: 0.5rem; background: var(--studio-800); border: 1px solid var(--studio-600); border-radius: 8px; text-align: center; font-size: 0.7rem; color: var(--studio-300); }
.attachment img { height: 6rem; border-radius: 6px; display: block; }
.attachment-remove { position: absolute; top: -0.5rem; right: -0.5rem; background: var(--studio-danger); color: #fff; border: none; border-radius: 999px; width: 1.25rem; height: 1.25rem; cursor: pointer; }
.composer-bar { display: flex; align-items: flex-end; gap: 0.75rem; padding: 0.75rem; background: var(--studio-800); border: 1px solid var(--studio-600); border-radius: 1rem; }
.composer-bar textarea { flex: 1; background: transparent; border: none; color: #fff; resize: none; min-height: 2.5rem; max-height: 8rem; font: inherit; outline: none; }
.upload-btn { position: relative; overflow: hidden; padding: 0.5rem; color: var(--studio-400); cursor: pointer; }
.upload-btn input { position: absolute; inset: 0; opacity: 0; cursor: pointer; }
.preview-btn { background: none; border: none; color: var(--studio-400); cursor: pointer; font-size: 0.75rem; padding: 0.5rem; }
.send-btn { padding: 0.75rem 1rem; background: var(--studio-accent); color: var(--studio-900); border: none; border-radius: 0.75rem; font-weight: 700; cursor: pointer; }
.send-btn:disabled { opacity: 0.5; cursor: not-allowed; }
.composer-note { margin-top: 0.5rem; text-align: center; font-size: 0.65rem; color: var(--studio-500); }

.config-error { display: flex; align-items: center; justify-content: center; height: 100vh; }
.config-error-card { max-width: 28rem; padding: 2rem; background: var(--studio-800); border: 1px solid rgba(239, 68, 68, 0.5); border-radius: 0.75rem; text-align: center; }
.config-error-card h2 { margin-top: 0; }
.config-error-card p { color: var(--studio-300); }
.md table { border-collapse: collapse; }
.md td, .md th { border: 1px solid var(--studio-600); padding: 0.25rem 0.5rem; }
.md pre { overflow-x: auto; padding: 0.75rem; border-radius: 8px; }
"#;
