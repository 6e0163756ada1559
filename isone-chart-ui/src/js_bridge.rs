//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js` and are embedded at
//! compile time. They are evaluated as globals (no ES modules) and exposed
//! via `window.*`; the wrappers here serialize data and call those globals.

use wasm_bindgen::JsValue;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static CHOROPLETH_MAP_JS: &str = include_str!("../assets/js/choropleth-map.js");
static HISTOGRAM_JS: &str = include_str!("../assets/js/histogram.js");
static DAY_OF_WEEK_CHART_JS: &str = include_str!("../assets/js/day-of-week-chart.js");

/// D3 v7, injected when the host page did not load it already.
const D3_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Functions promoted to `window` once the scripts are evaluated.
const CHART_FUNCTIONS: [&str; 6] = [
    "renderChoropleth",
    "renderHistogram",
    "renderDayOfWeekChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('ISO-NE JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        web_sys::console::warn_2(&JsValue::from_str("ISO-NE JS eval failed:"), &e);
    }
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Call once at startup.
///
/// The scripts are stashed on `window` and evaluated at global scope by an
/// indirect `eval` once D3 is present, so their function declarations are
/// not captured by the polling callback's scope.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        CHOROPLETH_MAP_JS,
        HISTOGRAM_JS,
        DAY_OF_WEEK_CHART_JS,
    ]
    .join("\n");

    let store_js = format!(
        "window.__isoneChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    call_js(&store_js);

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<_>>()
        .join("\n");

    call_js(&format!(
        r#"
        (function() {{
            if (typeof d3 === 'undefined' && !document.getElementById('isone-d3')) {{
                var s = document.createElement('script');
                s.id = 'isone-d3';
                s.src = '{D3_CDN_URL}';
                document.head.appendChild(s);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__isoneChartScripts);
                    delete window.__isoneChartScripts;
                    {promote}
                    if (window.initTooltip) window.initTooltip();
                    window.__isoneChartsReady = true;
                    console.log('ISO-NE charts initialized');
                }}
            }}, 100);
        }})();
        "#
    ));
}

/// Move an `<input>` element's value without going through the virtual DOM.
///
/// Used when the rendered value is unchanged but the browser already moved
/// the control, so no diff would reach it.
pub fn set_input_value(element_id: &str, value: u32) {
    call_js(&format!(
        "var el = document.getElementById('{element_id}'); if (el) el.value = '{value}';"
    ));
}

/// Escape a JSON payload for embedding in a single-quoted JS string.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Poll until the scripts are initialized, `function_name` exists and the
/// container is in the DOM, then call it once.
fn render_when_ready(function_name: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_for_js(data_json);
    let escaped_config = escape_for_js(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__isoneChartsReady &&
                    typeof window.{function_name} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function_name}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[ISO-NE] {function_name} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the choropleth map of average fractional energy per state.
///
/// `data_json` carries `{ averages, geometry }`; `config_json` the legend
/// domain and texts.
pub fn render_choropleth(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderChoropleth", container_id, data_json, config_json);
}

/// Render one region's price histogram from pre-computed bins.
pub fn render_histogram(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderHistogram", container_id, data_json, config_json);
}

/// Render one region's day-of-week demand bar chart.
pub fn render_day_of_week_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDayOfWeekChart", container_id, data_json, config_json);
}
