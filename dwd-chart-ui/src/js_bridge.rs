//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static BUBBLE_CHART_JS: &str = include_str!("../assets/js/bubble-chart.js");
static HEATMAP_JS: &str = include_str!("../assets/js/heatmap.js");
static DIVERSITY_CHART_JS: &str = include_str!("../assets/js/diversity-chart.js");

/// Global render functions defined by the chart scripts.
const CHART_FUNCTIONS: [&str; 7] = [
    "renderBarChart",
    "renderBubbleChart",
    "renderHeatmap",
    "renderDiversityChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('DWD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope once D3 is present, then each
/// render function is promoted to `window.*` and `__dwdChartsReady` is set.
/// Safe to call more than once; later calls are no-ops.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        BAR_CHART_JS,
        BUBBLE_CHART_JS,
        HEATMAP_JS,
        DIVERSITY_CHART_JS,
    ]
    .join("\n");

    let store_js = format!(
        "if (!window.__dwdChartsReady) {{ window.__dwdChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (!window.__dwdChartScripts) return;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__dwdChartScripts);
                    delete window.__dwdChartScripts;
                    {promote}
                    window.__dwdChartsReady = true;
                    console.log('DWD charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
fn escape_js_string(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// JS expression bumping the container's render generation and yielding the new value.
///
/// Every render or destroy takes a new generation; a render still waiting for
/// D3 gives up once its generation is no longer the latest.
fn next_generation(container_id: &str) -> String {
    format!(
        "(window.__dwdRenderGen = window.__dwdRenderGen || {{}}, \
         window.__dwdRenderGen['{container_id}'] = (window.__dwdRenderGen['{container_id}'] || 0) + 1)"
    )
}

/// Call a render function once D3, the chart scripts and the container exist.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_js_string(data_json);
    let escaped_config = escape_js_string(config_json);
    let generation = next_generation(container_id);
    call_js(&format!(
        r#"
        (function() {{
            var gen = {generation};
            var poll = setInterval(function() {{
                if (window.__dwdRenderGen['{container_id}'] !== gen) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__dwdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[DWD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the top-religion bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render the religion × denomination bubble chart.
pub fn render_bubble_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBubbleChart", container_id, data_json, config_json);
}

/// Render the geography × religion percentage heatmap.
pub fn render_heatmap(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderHeatmap", container_id, data_json, config_json);
}

/// Render the diversity-by-geography bar chart.
pub fn render_diversity_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDiversityChart", container_id, data_json, config_json);
}

/// Clear the chart in the given container and cancel any render still waiting.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "{}; var el = document.getElementById('{container_id}'); if (el) el.innerHTML = '';",
        next_generation(container_id)
    ));
}
