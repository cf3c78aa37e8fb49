//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time, and are evaluated as globals once D3 has loaded. This module
//! serializes chart data and calls those globals.

static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('ClimateScope JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Make a JSON payload safe to embed in a single-quoted JS string literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope via indirect eval once `d3`
/// exists, then the render functions are promoted to `window.*`.
pub fn init_charts() {
    let all_js = [LINE_CHART_JS, BAR_CHART_JS].join("\n");

    let store_js = format!(
        "window.__csChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__csChartsReady) return;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && window.__csChartScripts) {
                    clearInterval(waitForD3);
                    (0, eval)(window.__csChartScripts);
                    delete window.__csChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    window.__csChartsReady = true;
                    console.log('ClimateScope charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until charts are ready and the container exists, then call `render_fn`.
fn render_when_ready(render_fn: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_for_js(data_json);
    let escaped_config = escape_for_js(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__csChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{render_fn}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[ClimateScope] {render_fn} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the temperature trend line chart.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render the weather condition bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

#[cfg(test)]
mod tests {
    use super::escape_for_js;

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(
            escape_for_js("[{\"label\":\"N'Djamena \\\"dry\\\"\"}]\n"),
            "[{\"label\":\"N\\'Djamena \\\\\"dry\\\\\"\"}]"
        );
    }
}
