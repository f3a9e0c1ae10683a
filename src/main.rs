#![allow(non_snake_case)]
mod i18n;
mod api;
mod app;
mod ui;

use dioxus::prelude::*;
use dioxus::desktop::{Config, WindowBuilder};
use std::path::PathBuf;
use std::fs;
use directories::BaseDirs;
use tracing::warn;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

pub fn get_config_path() -> Option<PathBuf> {
    if let Some(base_dirs) = BaseDirs::new() {
        let mut path = PathBuf::from(base_dirs.config_dir());
        path.push("simwords");
        path.push("simwords.conf");
        Some(path)
    } else {
        None
    }
}

/// Reads the backend base URL from the settings file. A missing or empty file
/// means the stock local backend.
pub fn load_settings() -> String {
    if let Some(config_path) = get_config_path() {
        if let Ok(content) = fs::read_to_string(&config_path) {
            let url = content.lines().next().map_or("", |s| s.trim());
            if !url.is_empty() {
                return url.to_string();
            }
        }
    }

    DEFAULT_BACKEND_URL.to_string()
}

pub fn save_settings(backend_url: &str) -> Result<(), String> {
    if let Some(config_path) = get_config_path() {
        if let Some(parent_dir) = config_path.parent() {
            if let Err(e) = fs::create_dir_all(parent_dir) {
                warn!("could not create config directory: {e}");
                return Err(format!("Could not create config directory: {}", e));
            }
        }
        fs::write(&config_path, format!("{}\n", backend_url))
            .map_err(|e| format!("Could not write settings: {}", e))
    } else {
        Err("Could not determine the config directory.".to_string())
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    let custom_head = r#"
        <style>
            @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=JetBrains+Mono:wght@400;500&display=swap');

            :root {
                --bg-base: #1e1e2e;
                --bg-header: #11111b;
                --bg-surface: #313244;
                --bg-hover: #45475a;
                --text-main: #cdd6f4;
                --text-sub: #a6adc8;
                --accent-primary: #89b4fa;
                --accent-green: #a6e3a1;
                --accent-red: #f38ba8;
                --border-color: #45475a;
            }

            html, body {
                margin: 0; padding: 0; overflow: hidden; height: 100%; user-select: none;
                font-family: 'Inter', sans-serif; background-color: var(--bg-base); color: var(--text-main);
            }

            .app-shell { display: flex; flex-direction: column; width: 100vw; height: 100vh; overflow: hidden; }

            .title-bar {
                display: flex; justify-content: space-between; align-items: center; height: 38px;
                background: var(--bg-header); border-bottom: 1px solid var(--border-color); flex-shrink: 0;
                -webkit-app-region: drag;
            }
            .title-section-left {
                flex: 1; display: flex; align-items: center; padding-left: 15px;
                font-weight: 700; color: var(--text-main); font-size: 0.9em; letter-spacing: 0.5px;
            }
            .title-section-center { flex: 1; display: flex; justify-content: center; align-items: center; height: 100%; }
            .title-section-right { flex: 1; display: flex; justify-content: flex-end; height: 100%; align-items: center; -webkit-app-region: no-drag; }

            .db-status-box {
                display: flex; align-items: center; gap: 6px;
                font-size: 0.8em; color: var(--text-sub); font-family: 'JetBrains Mono', monospace;
                background: var(--bg-base); border: 1px solid var(--border-color);
                border-radius: 12px; padding: 2px 12px; -webkit-app-region: no-drag;
            }
            .db-status-box.bad { color: var(--accent-red); border-color: var(--accent-red); }
            .db-status-box .divider { opacity: 0.3; font-weight: 100; }
            .db-dot { width: 7px; height: 7px; border-radius: 50%; display: inline-block; }
            .db-dot.ok { background: var(--accent-green); box-shadow: 0 0 6px var(--accent-green); }
            .db-dot.bad { background: var(--accent-red); }

            .window-controls { display: flex; height: 100%; -webkit-app-region: no-drag; }
            .control-btn {
                width: 46px; display: flex; align-items: center; justify-content: center;
                cursor: pointer; transition: background 0.2s; height: 100%;
                color: var(--text-sub); font-family: sans-serif; font-size: 0.9em;
                -webkit-app-region: no-drag;
            }
            .control-btn:hover { background: var(--bg-surface); color: #fff; }
            .control-btn.close:hover { background: #e81123; color: white; }

            .status-box {
                background: linear-gradient(135deg, var(--accent-primary), #74c7ec);
                color: var(--bg-base); padding: 4px 12px; border-radius: 12px;
                font-size: 0.75em; font-weight: 800; white-space: nowrap; margin-right: 15px;
            }

            .content { flex: 1; overflow-y: auto; padding: 30px 40px; max-width: 900px; margin: 0 auto; width: 100%; box-sizing: border-box; }
            .content h1 { font-size: 1.6em; font-weight: 700; margin: 0 0 25px 0; }

            .words-section h3, .results h3 { color: var(--text-sub); font-size: 0.85em; text-transform: uppercase; letter-spacing: 0.5px; margin-bottom: 10px; }
            .words-list { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 30px; }
            .word-chip {
                background: var(--bg-surface); border: 1px solid var(--border-color); color: var(--text-main);
                padding: 5px 14px; border-radius: 16px; font-size: 0.85em; cursor: pointer; transition: all 0.2s;
            }
            .word-chip:hover { background: var(--accent-primary); color: var(--bg-base); font-weight: 600; }

            .search-title { font-size: 1.1em; margin: 0 0 12px 0; }
            .search-form { display: flex; gap: 10px; margin-bottom: 30px; }
            .search-input-container { position: relative; flex: 1; }
            .search-input {
                width: 100%; padding: 12px 40px 12px 15px; font-size: 1em; box-sizing: border-box;
                background: var(--bg-surface); border: 1px solid var(--border-color); color: white;
                border-radius: 8px; outline: none; transition: border-color 0.2s; font-family: 'Inter', sans-serif;
            }
            .search-input:focus { border-color: var(--accent-primary); }
            .search-input-icon { position: absolute; right: 12px; top: 50%; transform: translateY(-50%); }

            .search-button {
                padding: 0 20px; border: none; border-radius: 8px; cursor: pointer;
                background: var(--accent-primary); color: var(--bg-base); font-weight: 700; font-size: 0.95em;
                display: flex; align-items: center; gap: 6px; font-family: 'Inter', sans-serif;
            }
            .search-button:hover:not(:disabled) { filter: brightness(1.1); }
            .search-button:disabled { opacity: 0.5; cursor: not-allowed; }

            .results-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(250px, 1fr)); gap: 12px; }
            .result-card {
                background: var(--bg-surface); border: 1px solid var(--border-color);
                border-radius: 8px; padding: 14px 16px;
            }
            .result-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 6px; }
            .result-header strong { font-size: 1.05em; color: #fff; }
            .score {
                color: var(--accent-green); font-family: 'JetBrains Mono', monospace; font-size: 0.8em;
                background: rgba(166, 227, 161, 0.1); padding: 2px 8px; border-radius: 10px;
            }
            .result-reason { margin: 0; color: var(--text-sub); font-size: 0.88em; line-height: 1.4; }

            .modal-overlay {
                position: absolute; top: 0; left: 0; width: 100%; height: 100%;
                background: rgba(0,0,0,0.5); z-index: 5000; display: flex; align-items: center; justify-content: center;
            }
            .modal {
                background: var(--bg-surface); padding: 25px; border-radius: 12px; width: 420px;
                box-shadow: 0 10px 30px rgba(0,0,0,0.5); border: 1px solid var(--border-color); color: var(--text-main);
            }
            .modal-section-label { margin-bottom: 10px; font-weight: bold; font-size: 0.9em; }
            .modal-buttons { display: flex; justify-content: flex-end; gap: 10px; margin-top: 15px; }

            input.input-modern {
                background: var(--bg-base); border: 1px solid var(--border-color); color: white;
                border-radius: 6px; outline: none; transition: border-color 0.2s; padding: 8px 10px;
                box-sizing: border-box; font-family: 'JetBrains Mono', monospace; font-size: 0.85em;
            }
            input.input-modern:focus { border-color: var(--accent-primary); }

            .toolbar-btn {
                padding: 6px 12px; border: 1px solid transparent; cursor: pointer; background: transparent;
                display: flex; gap: 8px; align-items: center; font-size: 0.9em; color: var(--text-main);
                border-radius: 6px; transition: all 0.2s; font-weight: 500; font-family: 'Inter', sans-serif;
            }
            .toolbar-btn:hover { background-color: var(--bg-hover); border: 1px solid var(--border-color); }
            .btn-primary {
                padding: 6px 16px; border: none; border-radius: 6px; cursor: pointer;
                background: var(--accent-primary); color: var(--bg-base); font-weight: 700;
                font-family: 'Inter', sans-serif;
            }

            ::-webkit-scrollbar { width: 8px; height: 8px; }
            ::-webkit-scrollbar-track { background: var(--bg-base); }
            ::-webkit-scrollbar-thumb { background: var(--border-color); border-radius: 4px; }
            ::-webkit-scrollbar-thumb:hover { background: var(--text-sub); }
        </style>
    "#;

    let window = WindowBuilder::new()
        .with_title("SimWords")
        .with_always_on_top(false)
        .with_decorations(false)
        .with_resizable(true)
        .with_transparent(true);

    let config = Config::new()
        .with_custom_head(custom_head.to_string())
        .with_background_color((30, 30, 46, 255))
        .with_window(window);

    LaunchBuilder::desktop().with_cfg(config).launch(app::app);
}
