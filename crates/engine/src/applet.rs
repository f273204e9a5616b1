//! Applet launch snippets.
//!
//! The browser's Java plugin loader (`deployJava.js`) owns everything about
//! starting the applet; this module only spells out the call it expects.

use pacsite_types::AppletConfig;
use serde_json::json;

/// Script that provides the `deployJava` object. It must be loaded before any launch call runs.
pub const DEPLOY_JAVA_URL: &str = "http://java.com/js/deployJava.js";

/// Returns the `deployJava.runApplet(...)` statement for `config`.
///
/// `debug_times` is handed to the applet as its `DebugTimes` parameter.
pub fn render_applet_launch(config: &AppletConfig, debug_times: bool) -> String {
    // The plugin reads every attribute and parameter as a string.
    let attributes = json!({
        "archive": config.archive(),
        "code": config.entry_class(),
        "width": config.width().to_string(),
        "height": config.height().to_string(),
    });
    let parameters = json!({ "DebugTimes": debug_times.to_string() });
    let version = json!(config.min_runtime_version());
    format!("deployJava.runApplet({attributes}, {parameters}, {version});")
}

/// `<script>` tag that loads the plugin loader.
pub fn render_deploy_java_loader() -> String {
    format!(r#"<script src="{DEPLOY_JAVA_URL}"></script>"#)
}

/// Wraps the launch call in a `<script>` element, optionally preceded by the loader tag.
pub fn render_applet_script(
    config: &AppletConfig,
    debug_times: bool,
    include_loader: bool,
) -> String {
    let launch = format!("<script>{}</script>", render_applet_launch(config, debug_times));
    if include_loader {
        format!("{}\n{launch}", render_deploy_java_loader())
    } else {
        launch
    }
}
