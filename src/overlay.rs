//! Floating control panel and link legend.
//!
//! The panel is appended to an already generated page. Its script waits for
//! the page's global `network` before wiring the buttons.

use std::sync::OnceLock;

use regex::Regex;

/// One legend entry: label and whether the sample line is dashed
const LINK_LEGEND: [(&str, bool); 3] = [("Subnet", false), ("OSPF", true), ("BGP", true)];

const PANEL_STYLE: &str = r#"<style>
  .floating-panel {
    position: fixed; bottom: 20px; left: 20px; z-index: 9999;
    background: #f8f9fa; border: 1px solid #ddd; padding: 10px 12px;
    border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,.12);
    font-family: Arial, sans-serif; font-size: 13px;
  }
  .floating-panel h4 { margin: 0 0 6px 0; font-size: 14px; }
  .floating-panel .row { margin-top: 6px; }
  .floating-panel button { margin-right: 8px; }
</style>"#;

const WIRING_SCRIPT: &str = r#"<script>
(function() {
  function wireUp() {
    try {
      if (typeof network === "undefined") {
        // page script has not created the network yet
        return setTimeout(wireUp, 50);
      }
      var physicsEnabled = __PHYSICS_ENABLED__;

      var fitBtn = document.getElementById("fitBtn");
      if (fitBtn) {
        fitBtn.addEventListener("click", function() {
          try { network.fit(); } catch (e) { console.warn("fit() failed:", e); }
        });
      }

      var toggleBtn = document.getElementById("togglePhysicsBtn");
      if (toggleBtn) {
        toggleBtn.addEventListener("click", function() {
          physicsEnabled = !physicsEnabled;
          try { network.setOptions({ physics: { enabled: physicsEnabled } }); }
          catch (e) { console.warn("toggle physics failed:", e); }
        });
      }
    } catch (e) {
      console.warn("Control wiring error:", e);
      setTimeout(wireUp, 100);
    }
  }
  if (document.readyState === "loading") {
    document.addEventListener("DOMContentLoaded", wireUp);
  } else {
    wireUp();
  }
})();
</script>"#;

fn legend_row() -> String {
    let entries: Vec<String> = LINK_LEGEND
        .iter()
        .map(|(label, dashed)| {
            if *dashed {
                format!(
                    r#"    <span style="margin-left:6px; border-bottom:2px dashed #000;">— {}</span>"#,
                    label
                )
            } else {
                format!(r#"    <span style="margin-left:6px;">— {}</span>"#, label)
            }
        })
        .collect();

    format!(
        "  <div class=\"row\" style=\"margin-top:8px;\">\n    <strong>Link Types:</strong>\n{}\n  </div>",
        entries.join("\n")
    )
}

/// The control panel, legend and wiring script as one HTML fragment.
///
/// `physics_enabled` is the state the page starts in, so the first toggle
/// click flips it the right way.
pub fn controls_and_legend_html(physics_enabled: bool) -> String {
    format!(
        r#"
<!-- Floating controls and legend (appended after the page created `network`) -->
{style}
<div class="floating-panel">
  <h4>Controls</h4>
  <div class="row">
    <button id="fitBtn">Fit to Screen</button>
    <button id="togglePhysicsBtn">Toggle Physics</button>
  </div>
{legend}
</div>

{script}
"#,
        style = PANEL_STYLE,
        legend = legend_row(),
        script = WIRING_SCRIPT.replace("__PHYSICS_ENABLED__", if physics_enabled { "true" } else { "false" }),
    )
}

/// Insert `injection` right before the last `</body>` (any case), or append
/// it when the page has no closing body tag.
pub fn inject_before_body_end(base_html: &str, injection: &str) -> String {
    static BODY_END: OnceLock<Regex> = OnceLock::new();
    let body_end = BODY_END.get_or_init(|| Regex::new(r"(?i)</body>").expect("valid body regex"));

    match body_end.find_iter(base_html).last() {
        Some(tag) => {
            let idx = tag.start();
            let mut html = String::with_capacity(base_html.len() + injection.len());
            html.push_str(&base_html[..idx]);
            html.push_str(injection);
            html.push_str(&base_html[idx..]);
            html
        }
        None => format!("{}{}", base_html, injection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_before_body_end() {
        let html = "<html><body><p>x</p></body></html>";
        assert_eq!(
            inject_before_body_end(html, "<i>y</i>"),
            "<html><body><p>x</p><i>y</i></body></html>"
        );
    }

    #[test]
    fn test_inject_is_case_insensitive_and_uses_last_tag() {
        let html = "<BODY><pre></body></pre></BODY></HTML>";
        assert_eq!(
            inject_before_body_end(html, "!"),
            "<BODY><pre></body></pre>!</BODY></HTML>"
        );
    }

    #[test]
    fn test_inject_appends_without_body() {
        assert_eq!(inject_before_body_end("<div></div>", "<p/>"), "<div></div><p/>");
        assert_eq!(inject_before_body_end("", "<p/>"), "<p/>");
    }

    #[test]
    fn test_controls_panel_contents() {
        let panel = controls_and_legend_html(true);
        assert!(panel.contains(r#"<button id="fitBtn">Fit to Screen</button>"#));
        assert!(panel.contains(r#"<button id="togglePhysicsBtn">Toggle Physics</button>"#));
        assert!(panel.contains("<strong>Link Types:</strong>"));
        assert!(panel.contains(r#"<span style="margin-left:6px;">— Subnet</span>"#));
        assert!(panel.contains("border-bottom:2px dashed #000;\">— OSPF</span>"));
        assert!(panel.contains("border-bottom:2px dashed #000;\">— BGP</span>"));
        assert!(panel.contains("z-index: 9999"));
    }

    #[test]
    fn test_controls_script_waits_for_network() {
        let panel = controls_and_legend_html(true);
        assert!(panel.contains(r#"typeof network === "undefined""#));
        assert!(panel.contains("setTimeout(wireUp, 50)"));
        assert!(panel.contains("setTimeout(wireUp, 100)"));
        assert!(panel.contains("network.fit()"));
        assert!(panel.contains("network.setOptions({ physics: { enabled: physicsEnabled } })"));
        assert!(panel.contains("DOMContentLoaded"));
        assert!(panel.contains("var physicsEnabled = true;"));
    }

    #[test]
    fn test_controls_start_from_disabled_physics() {
        let panel = controls_and_legend_html(false);
        assert!(panel.contains("var physicsEnabled = false;"));
        assert!(!panel.contains("__PHYSICS_ENABLED__"));
    }
}
